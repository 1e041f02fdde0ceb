use std::collections::HashMap;

use itertools::Itertools;

use crate::entities::{Carton, ItemProfile};
use crate::util::assertions::instance_item_carton_ids_correct;

/// Instance of the pallet building problem: a set of cartons to be assigned to pallets,
/// together with the profile of every item they contain.
#[derive(Debug, Clone)]
pub struct PLInstance {
    /// Item profiles, in order of first appearance in the carton list
    pub items: Vec<ItemProfile>,
    /// All cartons to be packed, in discovery order
    pub cartons: Vec<Carton>,
    /// Ids of the cartons of each item, in discovery order
    item_cartons: Vec<Vec<usize>>,
}

impl PLInstance {
    pub fn new(items: Vec<ItemProfile>, cartons: Vec<Carton>) -> Self {
        assert!(instance_item_carton_ids_correct(&items, &cartons));

        let mut item_cartons = vec![vec![]; items.len()];
        cartons
            .iter()
            .for_each(|c| item_cartons[c.item_id].push(c.id));

        Self {
            items,
            cartons,
            item_cartons,
        }
    }

    /// Groups a flat list of `(ext_id, item key, quantity)` cartons by item and derives the item profiles.
    ///
    /// Items are numbered in order of first appearance.
    /// The carton quantity of an item is the quantity of the first carton of that item encountered.
    /// Items without an entry in `capacities` are limited to a single carton per pallet.
    pub fn build<K: Into<String>>(
        cartons: impl IntoIterator<Item = (u64, K, u32)>,
        capacities: &HashMap<String, u32>,
    ) -> Self {
        let mut items: Vec<ItemProfile> = vec![];
        let mut item_ids: HashMap<String, usize> = HashMap::new();

        let cartons = cartons
            .into_iter()
            .enumerate()
            .map(|(id, (ext_id, key, quantity))| {
                let item_id = *item_ids.entry(key.into()).or_insert_with_key(|key| {
                    let item_id = items.len();
                    let upp = capacities.get(key).copied();
                    items.push(ItemProfile::new(item_id, key.clone(), upp, quantity));
                    item_id
                });
                Carton {
                    id,
                    ext_id,
                    item_id,
                    quantity,
                }
            })
            .collect_vec();

        Self::new(items, cartons)
    }

    pub fn item(&self, id: usize) -> &ItemProfile {
        &self.items[id]
    }

    pub fn carton(&self, id: usize) -> &Carton {
        &self.cartons[id]
    }

    /// Ids of all cartons of an item, in discovery order
    pub fn item_cartons(&self, item_id: usize) -> &[usize] {
        &self.item_cartons[item_id]
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    pub fn n_cartons(&self) -> usize {
        self.cartons.len()
    }

    /// Combined share of pallet capacity (in percent) demanded by all cartons of an item
    pub fn total_percent_demand(&self, item_id: usize) -> f64 {
        self.item_cartons[item_id].len() as f64 * self.items[item_id].percent_per_carton
    }

    /// Lower bound on the number of pallets needed, imposed by the single most constrained item.
    pub fn pallet_lower_bound(&self) -> usize {
        self.items
            .iter()
            .map(|item| {
                self.item_cartons[item.id]
                    .len()
                    .div_ceil(item.max_cartons_per_pallet)
            })
            .max()
            .unwrap_or(0)
    }

    /// Total number of sellable units in the instance
    pub fn total_units(&self) -> u64 {
        self.cartons.iter().map(|c| c.quantity as u64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capacities(entries: &[(&str, u32)]) -> HashMap<String, u32> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn groups_cartons_in_order_of_first_appearance() {
        let instance = PLInstance::build(
            vec![(10, "B", 2), (11, "A", 5), (12, "B", 2), (13, "A", 5)],
            &capacities(&[("A", 20), ("B", 20)]),
        );

        assert_eq!(instance.n_items(), 2);
        assert_eq!(instance.item(0).key, "B");
        assert_eq!(instance.item(1).key, "A");
        assert_eq!(instance.item_cartons(0), &[0, 2]);
        assert_eq!(instance.item_cartons(1), &[1, 3]);
        assert_eq!(instance.carton(3).ext_id, 13);
        assert_eq!(instance.item(0).max_cartons_per_pallet, 10);
        assert_eq!(instance.item(1).max_cartons_per_pallet, 4);
        assert_eq!(instance.total_units(), 14);
    }

    #[test]
    fn first_carton_quantity_is_representative() {
        let instance = PLInstance::build(
            vec![(1, "A", 10), (2, "A", 1), (3, "A", 25)],
            &capacities(&[("A", 40)]),
        );
        assert_eq!(instance.item(0).carton_quantity, 10);
        assert_eq!(instance.item(0).max_cartons_per_pallet, 4);
    }

    #[test]
    fn demand_and_lower_bound() {
        let instance = PLInstance::build(
            (0..10).map(|i| (i, "A", 1)),
            &capacities(&[("A", 4)]),
        );
        assert_eq!(instance.total_percent_demand(0), 250.0);
        assert_eq!(instance.pallet_lower_bound(), 3);
    }

    #[test]
    fn empty_instance() {
        let instance = PLInstance::build(Vec::<(u64, String, u32)>::new(), &HashMap::new());
        assert_eq!(instance.n_cartons(), 0);
        assert_eq!(instance.n_items(), 0);
        assert_eq!(instance.pallet_lower_bound(), 0);
    }
}
