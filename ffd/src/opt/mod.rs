pub mod ffd_optimizer;
pub mod search;

use pallet_rs::entities::{PLInstance, PLSolution};
use rayon::prelude::*;

use crate::config::FFDConfig;
use crate::opt::ffd_optimizer::FFDOptimizer;

/// Packs all cartons of the instance onto pallets using the default configuration.
/// Pure function: the instance is not modified and the result only depends on its contents.
pub fn pack(instance: &PLInstance) -> PLSolution {
    pack_with(instance, FFDConfig::default())
}

pub fn pack_with(instance: &PLInstance, config: FFDConfig) -> PLSolution {
    FFDOptimizer::new(instance.clone(), config).solve()
}

/// Packs independent instances (e.g. one per shipment) in parallel.
/// Solutions are returned in the same order as the instances.
pub fn pack_batch(instances: &[PLInstance], config: FFDConfig) -> Vec<PLSolution> {
    instances
        .par_iter()
        .map(|instance| pack_with(instance, config))
        .collect()
}
