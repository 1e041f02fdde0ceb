use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use anyhow::{Result, bail, ensure};
use itertools::Itertools;
use log::warn;

use crate::entities::PLInstance;
use crate::io::ext_repr::ExtPLInstance;

/// Problems in the input data which do not prevent packing, but should be brought to the attention of an operator.
#[derive(Clone, Debug, PartialEq)]
pub enum ImportIssue {
    /// No capacity was supplied for the item, it will be limited to one carton per pallet
    MissingCapacity { item: String },
    /// The carton has an unusable quantity and was left out
    InvalidQuantity { carton: u64, quantity: f64 },
}

impl Display for ImportIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportIssue::MissingCapacity { item } => {
                write!(f, "no units per pallet defined for item {item}, assuming 1 carton per pallet")
            }
            ImportIssue::InvalidQuantity { carton, quantity } => {
                write!(f, "carton {carton} has invalid quantity {quantity}, skipping")
            }
        }
    }
}

/// Imports an instance into the library
pub fn import(ext_instance: &ExtPLInstance) -> Result<PLInstance> {
    import_with_issues(ext_instance).map(|(instance, _)| instance)
}

/// Imports an instance into the library, also returning all problems found in the input data.
///
/// Cartons with an invalid quantity are skipped, items without capacity are kept.
/// Fails on duplicate carton ids or conflicting capacity entries.
pub fn import_with_issues(ext_instance: &ExtPLInstance) -> Result<(PLInstance, Vec<ImportIssue>)> {
    let capacities = {
        let mut capacities = HashMap::new();
        for ext_cap in &ext_instance.capacities {
            match capacities.insert(ext_cap.item.clone(), ext_cap.units_per_pallet) {
                Some(prev) if prev != ext_cap.units_per_pallet => bail!(
                    "conflicting units per pallet for item {}: {} and {}",
                    ext_cap.item,
                    prev,
                    ext_cap.units_per_pallet
                ),
                _ => {}
            }
        }
        capacities
    };

    let duplicate_ids = ext_instance
        .cartons
        .iter()
        .map(|c| c.id)
        .duplicates()
        .collect_vec();
    ensure!(
        duplicate_ids.is_empty(),
        "All cartons should have unique IDs. Duplicates: {:?}",
        duplicate_ids
    );

    let mut issues = vec![];

    let cartons = ext_instance
        .cartons
        .iter()
        .filter_map(|ext_carton| match valid_quantity(ext_carton.quantity) {
            Some(quantity) => Some((ext_carton.id, ext_carton.item.clone(), quantity)),
            None => {
                issues.push(ImportIssue::InvalidQuantity {
                    carton: ext_carton.id,
                    quantity: ext_carton.quantity,
                });
                None
            }
        })
        .collect_vec();

    let instance = PLInstance::build(cartons, &capacities);

    instance
        .items
        .iter()
        .filter(|item| !item.has_capacity())
        .for_each(|item| {
            issues.push(ImportIssue::MissingCapacity {
                item: item.key.clone(),
            })
        });

    for issue in &issues {
        warn!("[IMPORT] {}: {issue}", ext_instance.name);
    }

    Ok((instance, issues))
}

fn valid_quantity(quantity: f64) -> Option<u32> {
    let valid = quantity.is_finite()
        && quantity >= 1.0
        && quantity.fract() == 0.0
        && quantity <= u32::MAX as f64;
    valid.then_some(quantity as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ext_repr::{ExtCarton, ExtItemCapacity};
    use test_case::test_case;

    fn carton(id: u64, item: &str, quantity: f64) -> ExtCarton {
        ExtCarton {
            id,
            item: item.to_string(),
            quantity,
        }
    }

    fn capacity(item: &str, units_per_pallet: u32) -> ExtItemCapacity {
        ExtItemCapacity {
            item: item.to_string(),
            units_per_pallet,
        }
    }

    #[test_case(12.0, Some(12))]
    #[test_case(1.0, Some(1))]
    #[test_case(0.0, None)]
    #[test_case(-4.0, None)]
    #[test_case(2.5, None)]
    #[test_case(f64::NAN, None)]
    #[test_case(f64::INFINITY, None)]
    fn quantity_sanitization(quantity: f64, expected: Option<u32>) {
        assert_eq!(valid_quantity(quantity), expected);
    }

    #[test]
    fn reports_and_skips_bad_input() {
        let ext = ExtPLInstance {
            name: "dirty".into(),
            cartons: vec![
                carton(1, "A", 6.0),
                carton(2, "A", 0.0),
                carton(3, "B", 2.0),
                carton(4, "C", -1.0),
            ],
            capacities: vec![capacity("A", 24)],
        };
        let (instance, issues) = import_with_issues(&ext).unwrap();

        assert_eq!(instance.n_cartons(), 2);
        assert_eq!(instance.n_items(), 2);
        assert_eq!(instance.item(0).max_cartons_per_pallet, 4);
        assert_eq!(instance.item(1).max_cartons_per_pallet, 1);
        assert_eq!(
            issues,
            vec![
                ImportIssue::InvalidQuantity {
                    carton: 2,
                    quantity: 0.0
                },
                ImportIssue::InvalidQuantity {
                    carton: 4,
                    quantity: -1.0
                },
                ImportIssue::MissingCapacity { item: "B".into() },
            ]
        );
    }

    #[test]
    fn rejects_duplicate_carton_ids() {
        let ext = ExtPLInstance {
            name: "dup".into(),
            cartons: vec![carton(1, "A", 1.0), carton(1, "A", 1.0)],
            capacities: vec![],
        };
        assert!(import(&ext).is_err());
    }

    #[test]
    fn rejects_conflicting_capacities() {
        let ext = ExtPLInstance {
            name: "conflict".into(),
            cartons: vec![carton(1, "A", 1.0)],
            capacities: vec![capacity("A", 10), capacity("A", 12)],
        };
        assert!(import(&ext).is_err());

        let ext = ExtPLInstance {
            capacities: vec![capacity("A", 10), capacity("A", 10)],
            ..ext
        };
        assert!(import(&ext).is_ok());
    }
}
