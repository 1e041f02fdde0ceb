use std::time::Instant;

use slotmap::SecondaryMap;

use crate::entities::{PLInstance, PalKey, PalletSnapshot};

/// Represents a snapshot of a [`PLProblem`](crate::entities::PLProblem) at a specific moment.
/// Solutions can be used to restore the state of a `PLProblem` to a previous state.
#[derive(Debug, Clone)]
pub struct PLSolution {
    /// Snapshots of all [`Pallet`](crate::entities::Pallet)s in the problem at the moment the solution was created
    pub pallet_snapshots: SecondaryMap<PalKey, PalletSnapshot>,
    /// Keys of the pallets, in the order they were created
    pub pallet_order: Vec<PalKey>,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl PLSolution {
    /// Pallet snapshots in creation order
    pub fn pallets(&self) -> impl Iterator<Item = &PalletSnapshot> {
        self.pallet_order
            .iter()
            .map(|&pkey| &self.pallet_snapshots[pkey])
    }

    pub fn n_pallets(&self) -> usize {
        self.pallet_order.len()
    }

    pub fn n_cartons(&self) -> usize {
        self.pallets().map(|ps| ps.cartons.len()).sum()
    }

    /// Average usage of the pallets, in percent
    pub fn mean_usage(&self) -> f64 {
        match self.pallet_order.is_empty() {
            true => 0.0,
            false => self.pallets().map(|ps| ps.usage).sum::<f64>() / self.n_pallets() as f64,
        }
    }

    /// Whether every carton of the instance is on a pallet
    pub fn is_complete(&self, instance: &PLInstance) -> bool {
        self.n_cartons() == instance.n_cartons()
    }
}
