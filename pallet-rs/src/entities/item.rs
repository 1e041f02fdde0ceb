/// Capacity of a pallet, expressed as a percentage.
pub const FULL_PALLET: f64 = 100.0;

/// Packing characteristics of a single item (SKU), shared by all its cartons.
#[derive(Clone, Debug)]
pub struct ItemProfile {
    /// Index of the item within its [`PLInstance`](crate::entities::PLInstance)
    pub id: usize,
    /// Identifier of the item outside the library
    pub key: String,
    /// Maximum number of sellable units of this item that fit on one pallet.
    /// `None` if no capacity was supplied for the item.
    pub units_per_pallet: Option<u32>,
    /// Units per carton, taken from the first carton of the item encountered
    pub carton_quantity: u32,
    /// Maximum number of cartons of this item allowed on a single pallet, always at least 1
    pub max_cartons_per_pallet: usize,
    /// Share of a pallet's capacity (in percent) consumed by a single carton of this item
    pub percent_per_carton: f64,
}

impl ItemProfile {
    /// Derives the per-pallet limits of an item.
    /// A missing `units_per_pallet` is treated as 0, which results in one carton per pallet.
    pub fn new(
        id: usize,
        key: String,
        units_per_pallet: Option<u32>,
        carton_quantity: u32,
    ) -> Self {
        let max_cartons_per_pallet = match carton_quantity {
            0 => 1,
            q => (units_per_pallet.unwrap_or(0) / q).max(1) as usize,
        };
        let percent_per_carton = FULL_PALLET / max_cartons_per_pallet as f64;

        ItemProfile {
            id,
            key,
            units_per_pallet,
            carton_quantity,
            max_cartons_per_pallet,
            percent_per_carton,
        }
    }

    /// Whether a capacity was supplied for this item
    pub fn has_capacity(&self) -> bool {
        self.units_per_pallet.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Some(48), 12, 4; "exact division")]
    #[test_case(Some(50), 12, 4; "floored")]
    #[test_case(Some(5), 12, 1; "carton larger than pallet")]
    #[test_case(Some(0), 6, 1; "zero capacity")]
    #[test_case(None, 6, 1; "missing capacity")]
    #[test_case(Some(100), 0, 1; "empty carton")]
    fn max_cartons_per_pallet(upp: Option<u32>, qty: u32, expected: usize) {
        let item = ItemProfile::new(0, "sku".into(), upp, qty);
        assert_eq!(item.max_cartons_per_pallet, expected);
        assert_eq!(item.percent_per_carton, FULL_PALLET / expected as f64);
    }

    #[test]
    fn missing_capacity_is_reported() {
        assert!(!ItemProfile::new(0, "a".into(), None, 1).has_capacity());
        assert!(ItemProfile::new(0, "a".into(), Some(0), 1).has_capacity());
    }
}
