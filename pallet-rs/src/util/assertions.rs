use std::collections::BTreeMap;

use itertools::Itertools;
use log::error;

use crate::entities::{
    Carton, FULL_PALLET, ItemProfile, PLInstance, PLProblem, PLSolution, Pallet, PalletSnapshot,
};
use crate::util::FPA;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and tests

pub fn instance_item_carton_ids_correct(items: &[ItemProfile], cartons: &[Carton]) -> bool {
    items.iter().enumerate().all(|(i, item)| item.id == i)
        && cartons.iter().enumerate().all(|(i, c)| c.id == i)
        && cartons.iter().all(|c| c.item_id < items.len())
}

pub fn pallet_is_valid(pallet: &Pallet, instance: &PLInstance) -> bool {
    contents_are_valid(&pallet.cartons, &pallet.item_counts, pallet.usage, instance)
}

pub fn snapshot_is_valid(ps: &PalletSnapshot, instance: &PLInstance) -> bool {
    contents_are_valid(&ps.cartons, &ps.item_counts, ps.usage, instance)
}

/// Checks the per-item carton limit, the capacity budget and the internal bookkeeping of a pallet
fn contents_are_valid(
    cartons: &[usize],
    item_counts: &BTreeMap<usize, usize>,
    usage: f64,
    instance: &PLInstance,
) -> bool {
    let counted = cartons
        .iter()
        .map(|&c_id| instance.carton(c_id).item_id)
        .counts()
        .into_iter()
        .collect::<BTreeMap<usize, usize>>();

    if &counted != item_counts {
        error!("item counts {item_counts:?} do not match pallet contents {counted:?}");
        return false;
    }

    if let Some((item_id, n)) = counted
        .iter()
        .find(|(item_id, n)| **n > instance.item(**item_id).max_cartons_per_pallet)
    {
        error!(
            "{n} cartons of item {} exceed its limit of {}",
            instance.item(*item_id).key,
            instance.item(*item_id).max_cartons_per_pallet
        );
        return false;
    }

    let recomputed = counted
        .iter()
        .map(|(item_id, n)| *n as f64 * instance.item(*item_id).percent_per_carton)
        .sum::<f64>();

    if FPA(recomputed) != FPA(usage) {
        error!("usage {usage} does not match pallet contents ({recomputed})");
        return false;
    }

    if FPA(usage) > FPA(FULL_PALLET) {
        error!("usage {usage} exceeds pallet capacity");
        return false;
    }

    true
}

pub fn problem_matches_solution(plp: &PLProblem, sol: &PLSolution) -> bool {
    let PLSolution {
        pallet_snapshots,
        pallet_order,
        time_stamp: _,
    } = sol;

    assert_eq!(&plp.pallet_order, pallet_order);
    assert_eq!(plp.pallets.len(), pallet_snapshots.len());

    plp.open_pallets().all(|(pkey, p)| {
        let ps = &pallet_snapshots[pkey];
        p.cartons == ps.cartons && p.item_counts == ps.item_counts && p.usage == ps.usage
    })
}

/// Checks that no carton is lost or duplicated and that every pallet respects its limits.
pub fn solution_is_valid(sol: &PLSolution, instance: &PLInstance) -> bool {
    let placed = sol.pallets().flat_map(|ps| ps.cartons.iter().copied()).collect_vec();

    if let Some(c_id) = placed.iter().duplicates().next() {
        error!("carton {c_id} is placed more than once");
        return false;
    }

    if placed.len() != instance.n_cartons() {
        error!(
            "{} cartons placed, instance contains {}",
            placed.len(),
            instance.n_cartons()
        );
        return false;
    }

    if let Some(idx) = sol.pallets().position(|ps| ps.cartons.is_empty()) {
        error!("pallet {idx} is empty");
        return false;
    }

    sol.pallets().all(|ps| snapshot_is_valid(ps, instance))
}
