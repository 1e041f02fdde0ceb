use std::time::Instant;

use itertools::Itertools;
use log::{debug, info};
use pallet_rs::entities::{PLInstance, PLPlacement, PLProblem, PLSolution};
use pallet_rs::util::assertions::solution_is_valid;
use thousands::Separable;

use crate::config::FFDConfig;
use crate::opt::search::{item_placement_order, search_pallets};

/// First-Fit-Decreasing (FFD) optimizer for pallet building problems.
pub struct FFDOptimizer {
    pub instance: PLInstance,
    pub problem: PLProblem,
    pub config: FFDConfig,
    /// Number of pallets evaluated while searching for a place for a carton
    pub eval_counter: usize,
}

impl FFDOptimizer {
    pub fn new(instance: PLInstance, config: FFDConfig) -> Self {
        let problem = PLProblem::new(instance.clone());
        Self {
            instance,
            problem,
            config,
            eval_counter: 0,
        }
    }

    /// Places every unplaced carton and returns the resulting solution.
    /// Cartons already on a pallet stay where they are.
    pub fn solve(&mut self) -> PLSolution {
        let start = Instant::now();

        for item_id in item_placement_order(&self.instance, self.config.item_order) {
            let item = self.instance.item(item_id);
            let cartons = self.problem.unplaced_cartons(item_id).collect_vec();
            //place all cartons of this item, in discovery order
            for carton_id in cartons {
                let pallet = search_pallets(
                    &self.problem,
                    item,
                    self.config.placement,
                    &mut self.eval_counter,
                );
                let pkey = self.problem.place_carton(PLPlacement { pallet, carton_id });
                debug!(
                    "[FFD] placing carton {}/{} of item {} on pallet {:?}",
                    self.problem.n_placed(),
                    self.instance.n_cartons(),
                    item.key,
                    pkey
                );
            }
        }

        let solution = self.problem.save();

        debug_assert!(solution_is_valid(&solution, &self.instance));

        info!(
            "[FFD] optimization finished in {:.3}ms ({} pallet evaluations)",
            start.elapsed().as_secs_f64() * 1000.0,
            self.eval_counter.separate_with_commas()
        );

        info!(
            "[FFD] solution contains {} cartons ({} units) on {} pallets (lower bound {}) with a mean usage of {:.3}%",
            solution.n_cartons().separate_with_commas(),
            self.instance.total_units().separate_with_commas(),
            solution.n_pallets(),
            self.instance.pallet_lower_bound(),
            solution.mean_usage()
        );
        solution
    }
}
