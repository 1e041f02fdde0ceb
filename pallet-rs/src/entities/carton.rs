/// A single physical box containing units of one item.
/// Cartons are the atomic unit of packing: they are never split across pallets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carton {
    /// Index of the carton within its [`PLInstance`](crate::entities::PLInstance)
    pub id: usize,
    /// Identifier supplied from outside the library (e.g. the package record the carton originates from)
    pub ext_id: u64,
    /// Index of the [`ItemProfile`](crate::entities::ItemProfile) of the item inside the carton
    pub item_id: usize,
    /// Number of sellable units inside the carton
    pub quantity: u32,
}
