use serde::{Deserialize, Serialize};

/// External representation of a [`Carton`](crate::entities::Carton).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtCarton {
    /// Unique identifier of the carton
    pub id: u64,
    /// Identifier of the item inside the carton
    pub item: String,
    /// Number of sellable units inside the carton.
    /// Cartons with a non-positive or fractional quantity are skipped on import.
    pub quantity: f64,
}

/// Maximum number of sellable units of an item that fit on one pallet
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtItemCapacity {
    pub item: String,
    pub units_per_pallet: u32,
}

/// External representation of a [`PLInstance`](crate::entities::PLInstance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPLInstance {
    /// The name of the instance (e.g. the shipment it belongs to)
    pub name: String,
    /// Cartons to be packed, in discovery order
    pub cartons: Vec<ExtCarton>,
    /// Per-item capacities. Items without an entry are limited to one carton per pallet.
    #[serde(default)]
    pub capacities: Vec<ExtItemCapacity>,
}

/// External representation of a [`PLSolution`](crate::entities::PLSolution).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPLSolution {
    pub n_pallets: usize,
    /// Minimum number of pallets required by the most constrained item
    pub lower_bound: usize,
    /// Average usage of the pallets, in percent
    pub mean_usage: f64,
    /// Time elapsed between the epoch passed to [`export`](crate::io::export) and the creation of the solution, in milliseconds
    pub run_time_ms: u64,
    /// Pallets, in the order they were created
    pub pallets: Vec<ExtPallet>,
}

/// External representation of a pallet in a solution
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPallet {
    /// Position of the pallet in the solution
    pub index: usize,
    /// Ids of the cartons on the pallet, in order of placement
    pub cartons: Vec<u64>,
    /// Contents of the pallet per item
    pub items: Vec<ExtItemSummary>,
    /// Share of the pallet's capacity in use, in percent
    pub usage: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtItemSummary {
    pub item: String,
    pub quantity: u64,
    pub cartons: usize,
}
