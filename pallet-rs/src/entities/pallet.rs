use std::collections::BTreeMap;

use crate::entities::{Carton, FULL_PALLET, ItemProfile, PLInstance};
use crate::util::FPA;

/// A [`Pallet`] is a dynamic collection of cartons, possibly of different items.
/// Cartons can be placed and removed as long as both the per-item carton limit and
/// the overall capacity budget are respected.
#[derive(Clone, Debug, Default)]
pub struct Pallet {
    /// Ids of the cartons on the pallet, in order of placement
    pub cartons: Vec<usize>,
    /// Number of cartons per item present on the pallet
    pub item_counts: BTreeMap<usize, usize>,
    /// Share of the pallet's capacity (in percent) currently in use
    pub usage: f64,
}

impl Pallet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(ps: &PalletSnapshot) -> Self {
        let mut pallet = Pallet::new();
        pallet.restore(ps);
        pallet
    }

    /// Checks whether one more carton of `item` can be placed on the pallet.
    /// Both the item's own carton limit and the remaining capacity must allow it.
    pub fn fits(&self, item: &ItemProfile) -> bool {
        self.item_count(item.id) < item.max_cartons_per_pallet
            && FPA(self.usage + item.percent_per_carton) <= FPA(FULL_PALLET)
    }

    pub fn place_carton(&mut self, carton: &Carton, item: &ItemProfile) {
        debug_assert_eq!(carton.item_id, item.id);
        debug_assert!(self.fits(item), "carton {} does not fit", carton.id);

        self.cartons.push(carton.id);
        *self.item_counts.entry(item.id).or_insert(0) += 1;
        self.usage += item.percent_per_carton;
    }

    pub fn remove_carton(&mut self, carton: &Carton, item: &ItemProfile) {
        debug_assert_eq!(carton.item_id, item.id);

        let idx = self
            .cartons
            .iter()
            .position(|&c_id| c_id == carton.id)
            .expect("carton not present on pallet");
        self.cartons.remove(idx);

        let count = self
            .item_counts
            .get_mut(&item.id)
            .expect("item count missing for placed carton");
        *count -= 1;
        if *count == 0 {
            self.item_counts.remove(&item.id);
        }

        self.usage = match self.cartons.is_empty() {
            true => 0.0,
            false => (self.usage - item.percent_per_carton).max(0.0),
        };
    }

    pub fn item_count(&self, item_id: usize) -> usize {
        self.item_counts.get(&item_id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.cartons.is_empty()
    }

    /// Saves the current state of the pallet to be potentially restored to later.
    pub fn save(&self) -> PalletSnapshot {
        PalletSnapshot {
            cartons: self.cartons.clone(),
            item_counts: self.item_counts.clone(),
            usage: self.usage,
        }
    }

    /// Restores the pallet to a previous state using a snapshot.
    pub fn restore(&mut self, ps: &PalletSnapshot) {
        self.cartons = ps.cartons.clone();
        self.item_counts = ps.item_counts.clone();
        self.usage = ps.usage;
    }
}

/// Immutable and compact representation of a [`Pallet`].
/// `Pallet`s can be saved to a `PalletSnapshot` and restored to it.
#[derive(Clone, Debug, PartialEq)]
pub struct PalletSnapshot {
    pub cartons: Vec<usize>,
    pub item_counts: BTreeMap<usize, usize>,
    pub usage: f64,
}

impl PalletSnapshot {
    /// Aggregated contents of the pallet per item, in ascending item id order.
    pub fn item_summary(&self, instance: &PLInstance) -> Vec<ItemSummary> {
        let mut summary: BTreeMap<usize, ItemSummary> = BTreeMap::new();
        for carton in self.cartons.iter().map(|&c_id| instance.carton(c_id)) {
            let entry = summary.entry(carton.item_id).or_insert(ItemSummary {
                item_id: carton.item_id,
                quantity: 0,
                n_cartons: 0,
            });
            entry.quantity += carton.quantity as u64;
            entry.n_cartons += 1;
        }
        summary.into_values().collect()
    }
}

/// Contents of one item on a pallet
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSummary {
    pub item_id: usize,
    /// Total sellable units of the item on the pallet
    pub quantity: u64,
    pub n_cartons: usize,
}
