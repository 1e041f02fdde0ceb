use std::time::Instant;

use crate::entities::{PLInstance, PLSolution, PalletSnapshot};
use crate::io::ext_repr::{ExtItemSummary, ExtPLSolution, ExtPallet};

/// Exports a solution out of the library.
/// `run_time_ms` is measured from `epoch` (e.g. the start of the process or of the solve) up to the creation of the solution.
pub fn export(instance: &PLInstance, solution: &PLSolution, epoch: Instant) -> ExtPLSolution {
    ExtPLSolution {
        n_pallets: solution.n_pallets(),
        lower_bound: instance.pallet_lower_bound(),
        mean_usage: solution.mean_usage(),
        run_time_ms: solution
            .time_stamp
            .saturating_duration_since(epoch)
            .as_millis() as u64,
        pallets: solution
            .pallets()
            .enumerate()
            .map(|(index, ps)| export_pallet(index, ps, instance))
            .collect(),
    }
}

pub fn export_pallet(index: usize, ps: &PalletSnapshot, instance: &PLInstance) -> ExtPallet {
    ExtPallet {
        index,
        cartons: ps
            .cartons
            .iter()
            .map(|&c_id| instance.carton(c_id).ext_id)
            .collect(),
        items: ps
            .item_summary(instance)
            .into_iter()
            .map(|s| ExtItemSummary {
                item: instance.item(s.item_id).key.clone(),
                quantity: s.quantity,
                cartons: s.n_cartons,
            })
            .collect(),
        usage: ps.usage,
    }
}
