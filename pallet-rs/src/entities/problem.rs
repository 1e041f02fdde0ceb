use std::time::Instant;

use itertools::Itertools;
use slotmap::{SlotMap, new_key_type};

use crate::entities::{PLInstance, PLSolution, Pallet};
use crate::util::assertions::{pallet_is_valid, problem_matches_solution};

new_key_type! {
    /// Unique key for each [`Pallet`] in a [`PLProblem`] and [`PLSolution`]
    pub struct PalKey;
}

/// Dynamic counterpart of [`PLInstance`].
/// Keeps track of the open pallets and the pallet each carton is assigned to.
#[derive(Clone)]
pub struct PLProblem {
    pub instance: PLInstance,
    pub pallets: SlotMap<PalKey, Pallet>,
    /// Keys of all open pallets, in the order they were created
    pub pallet_order: Vec<PalKey>,
    /// Pallet each carton is assigned to, `None` if unplaced
    pub carton_assignment: Vec<Option<PalKey>>,
}

impl PLProblem {
    pub fn new(instance: PLInstance) -> Self {
        let carton_assignment = vec![None; instance.n_cartons()];

        Self {
            instance,
            pallets: SlotMap::with_key(),
            pallet_order: vec![],
            carton_assignment,
        }
    }

    /// Places a carton according to the provided [`PLPlacement`].
    /// Returns the key of the pallet the carton was placed on.
    pub fn place_carton(&mut self, p_opt: PLPlacement) -> PalKey {
        assert!(
            self.carton_assignment[p_opt.carton_id].is_none(),
            "carton {} is already placed",
            p_opt.carton_id
        );
        let pkey = match p_opt.pallet {
            PalletType::Open(pkey) => pkey,
            PalletType::New => self.register_pallet(Pallet::new()),
        };
        let carton = self.instance.carton(p_opt.carton_id);
        let item = self.instance.item(carton.item_id);
        self.pallets[pkey].place_carton(carton, item);
        self.carton_assignment[carton.id] = Some(pkey);

        debug_assert!(pallet_is_valid(&self.pallets[pkey], &self.instance));

        pkey
    }

    /// Removes a carton from its pallet. If the pallet becomes empty, it is removed as well.
    /// Returns the placement that would undo the removal.
    pub fn remove_carton(&mut self, carton_id: usize) -> PLPlacement {
        let pkey = self.carton_assignment[carton_id]
            .take()
            .expect("carton is not placed");
        let carton = self.instance.carton(carton_id);
        let item = self.instance.item(carton.item_id);
        self.pallets[pkey].remove_carton(carton, item);

        match self.pallets[pkey].is_empty() {
            true => {
                self.deregister_pallet(pkey);
                PLPlacement {
                    pallet: PalletType::New,
                    carton_id,
                }
            }
            false => PLPlacement {
                pallet: PalletType::Open(pkey),
                carton_id,
            },
        }
    }

    /// Removes a pallet and unassigns all cartons on it.
    pub fn remove_pallet(&mut self, pkey: PalKey) {
        self.deregister_pallet(pkey);
    }

    /// Open pallets, in the order they were created
    pub fn open_pallets(&self) -> impl Iterator<Item = (PalKey, &Pallet)> {
        self.pallet_order.iter().map(|&pkey| (pkey, &self.pallets[pkey]))
    }

    /// Cartons of an item which are not yet placed, in discovery order
    pub fn unplaced_cartons(&self, item_id: usize) -> impl Iterator<Item = usize> + '_ {
        self.instance
            .item_cartons(item_id)
            .iter()
            .copied()
            .filter(|&c_id| self.carton_assignment[c_id].is_none())
    }

    pub fn n_placed(&self) -> usize {
        self.carton_assignment.iter().flatten().count()
    }

    pub fn n_pallets(&self) -> usize {
        self.pallet_order.len()
    }

    /// Creates a snapshot of the current state of the problem as a [`PLSolution`].
    pub fn save(&self) -> PLSolution {
        let pallet_snapshots = self
            .pallets
            .iter()
            .map(|(pkey, p)| (pkey, p.save()))
            .collect();

        let solution = PLSolution {
            pallet_snapshots,
            pallet_order: self.pallet_order.clone(),
            time_stamp: Instant::now(),
        };

        debug_assert!(problem_matches_solution(self, &solution));

        solution
    }

    /// Restores the state of the problem to the given [`PLSolution`].
    pub fn restore(&mut self, solution: &PLSolution) {
        //Remove all pallets that are not present in the solution
        let pallets_to_remove = self
            .pallets
            .keys()
            .filter(|pkey| !solution.pallet_snapshots.contains_key(*pkey))
            .collect_vec();
        for pkey in pallets_to_remove {
            self.pallets.remove(pkey);
        }

        //Restore pallets present in both, recreate the ones that were removed in the meantime
        self.pallet_order = solution
            .pallet_order
            .iter()
            .map(|&pkey| {
                let ps = &solution.pallet_snapshots[pkey];
                match self.pallets.get_mut(pkey) {
                    Some(pallet) => {
                        pallet.restore(ps);
                        pkey
                    }
                    None => self.pallets.insert(Pallet::from_snapshot(ps)),
                }
            })
            .collect();

        //Rebuild the carton assignment
        self.carton_assignment.iter_mut().for_each(|a| *a = None);
        for &pkey in &self.pallet_order {
            for &c_id in &self.pallets[pkey].cartons {
                self.carton_assignment[c_id] = Some(pkey);
            }
        }

        debug_assert!(self.pallets.len() == self.pallet_order.len());
    }

    fn register_pallet(&mut self, pallet: Pallet) -> PalKey {
        let pkey = self.pallets.insert(pallet);
        self.pallet_order.push(pkey);
        pkey
    }

    fn deregister_pallet(&mut self, pkey: PalKey) {
        let pallet = self.pallets.remove(pkey).expect("pallet key not present");
        self.pallet_order.retain(|&k| k != pkey);
        pallet
            .cartons
            .iter()
            .for_each(|&c_id| self.carton_assignment[c_id] = None);
    }
}

/// Encapsulates all required information to place a [`Carton`](crate::entities::Carton) in a [`PLProblem`].
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct PLPlacement {
    /// Which [`Pallet`] to place the carton on
    pub pallet: PalletType,
    /// The id of the [`Carton`](crate::entities::Carton) to be placed
    pub carton_id: usize,
}

/// Enum to distinguish between both open [`Pallet`]s, and new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PalletType {
    /// An existing pallet, identified by its key
    Open(PalKey),
    /// A pallet that does not yet exist, it will be created upon placement
    New,
}
