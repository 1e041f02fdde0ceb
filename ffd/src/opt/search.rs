use std::cmp::Reverse;

use itertools::Itertools;
use log::trace;
use ordered_float::NotNan;
use pallet_rs::entities::{ItemProfile, PLInstance, PLProblem, PalKey, Pallet, PalletType};
use pallet_rs::util::FPA;

use crate::config::{ItemOrder, PlacementRule};

/// Order in which the items of an instance are packed.
pub fn item_placement_order(instance: &PLInstance, order: ItemOrder) -> Vec<usize> {
    match order {
        ItemOrder::InputOrder => (0..instance.n_items()).collect_vec(),
        ItemOrder::DecreasingDemand => {
            //sort the items by descending total demand, stable to keep ties in order of appearance
            (0..instance.n_items())
                .sorted_by_cached_key(|&item_id| {
                    let demand = NotNan::new(instance.total_percent_demand(item_id))
                        .expect("percent demand is NaN");
                    Reverse(demand)
                })
                .collect_vec()
        }
    }
}

/// Searches the open pallets for one that can receive a carton of `item`.
/// Returns [`PalletType::New`] if none of them has room.
pub fn search_pallets(
    problem: &PLProblem,
    item: &ItemProfile,
    rule: PlacementRule,
    eval_counter: &mut usize,
) -> PalletType {
    let mut candidates = problem
        .open_pallets()
        .inspect(|_| *eval_counter += 1)
        .filter(|(_, pallet)| pallet.fits(item));

    let selected = match rule {
        PlacementRule::FirstFit => candidates.next(),
        PlacementRule::BestFit => candidates.fold(None::<(PalKey, &Pallet)>, |best, (pkey, pallet)| {
            match best {
                Some((_, best_pallet)) if FPA(best_pallet.usage) >= FPA(pallet.usage) => best,
                _ => Some((pkey, pallet)),
            }
        }),
    };

    match selected {
        Some((pkey, pallet)) => {
            trace!(
                "[SEARCH] item {} fits on pallet {pkey:?} ({:.3}% used)",
                item.key, pallet.usage
            );
            PalletType::Open(pkey)
        }
        None => PalletType::New,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pallet_rs::entities::PLPlacement;

    use super::*;

    fn capacities(entries: &[(&str, u32)]) -> HashMap<String, u32> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn items_sorted_by_decreasing_demand() {
        // A: 2 x 10%, B: 3 x 50%, C: 1 x 20%, D: 4 x 5%
        let cartons = vec![
            (0, "A", 1),
            (1, "B", 1),
            (2, "A", 1),
            (3, "C", 1),
            (4, "B", 1),
            (5, "B", 1),
            (6, "D", 1),
            (7, "D", 1),
            (8, "D", 1),
            (9, "D", 1),
        ];
        let caps = capacities(&[("A", 10), ("B", 2), ("C", 5), ("D", 20)]);
        let instance = PLInstance::build(cartons, &caps);

        assert_eq!(
            item_placement_order(&instance, ItemOrder::DecreasingDemand),
            vec![1, 0, 2, 3]
        );
        assert_eq!(
            item_placement_order(&instance, ItemOrder::InputOrder),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn first_fit_and_best_fit_disagree() {
        let cartons = vec![(0, "A", 1), (1, "B", 1), (2, "B", 1), (3, "C", 1)];
        let caps = capacities(&[("A", 10), ("B", 2), ("C", 10)]);
        let instance = PLInstance::build(cartons, &caps);
        let mut problem = PLProblem::new(instance);

        // pallet 0 holds A (10%), pallet 1 holds B (50%)
        let p0 = problem.place_carton(PLPlacement {
            pallet: PalletType::New,
            carton_id: 0,
        });
        let p1 = problem.place_carton(PLPlacement {
            pallet: PalletType::New,
            carton_id: 1,
        });
        let c = problem.instance.item(2).clone();

        let mut counter = 0;
        assert_eq!(
            search_pallets(&problem, &c, PlacementRule::FirstFit, &mut counter),
            PalletType::Open(p0)
        );
        assert_eq!(counter, 1);
        assert_eq!(
            search_pallets(&problem, &c, PlacementRule::BestFit, &mut counter),
            PalletType::Open(p1)
        );
        assert_eq!(counter, 3);
    }

    #[test]
    fn best_fit_ties_go_to_earliest_pallet() {
        let cartons = vec![(0, "A", 1), (1, "B", 1), (2, "C", 1), (3, "A", 1)];
        let caps = capacities(&[("A", 4), ("B", 4), ("C", 10)]);
        let instance = PLInstance::build(cartons, &caps);
        let mut problem = PLProblem::new(instance);

        // pallets 0 and 1 both at 25%, pallet 2 at 10%
        let p0 = problem.place_carton(PLPlacement {
            pallet: PalletType::New,
            carton_id: 0,
        });
        problem.place_carton(PLPlacement {
            pallet: PalletType::New,
            carton_id: 1,
        });
        problem.place_carton(PLPlacement {
            pallet: PalletType::New,
            carton_id: 2,
        });
        let c = problem.instance.item(2).clone();

        let mut counter = 0;
        assert_eq!(
            search_pallets(&problem, &c, PlacementRule::BestFit, &mut counter),
            PalletType::Open(p0)
        );
        assert_eq!(counter, 3);
    }

    #[test]
    fn full_pallets_yield_new() {
        let cartons = vec![(0, "A", 1), (1, "A", 1)];
        let instance = PLInstance::build(cartons, &capacities(&[("A", 1)]));
        let mut problem = PLProblem::new(instance);
        problem.place_carton(PLPlacement {
            pallet: PalletType::New,
            carton_id: 0,
        });
        let a = problem.instance.item(0).clone();
        let mut counter = 0;
        assert_eq!(
            search_pallets(&problem, &a, PlacementRule::BestFit, &mut counter),
            PalletType::New
        );
    }
}
