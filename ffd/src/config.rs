use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Configuration for the FFD optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct FFDConfig {
    /// Order in which the items are packed
    #[serde(default)]
    pub item_order: ItemOrder,
    /// Which pallet receives a carton when several have room for it
    #[serde(default)]
    pub placement: PlacementRule,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ItemOrder {
    /// Items with the highest total demand (in percent of a pallet) first, ties in order of appearance
    #[default]
    DecreasingDemand,
    /// Items in order of appearance
    InputOrder,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PlacementRule {
    /// The first pallet (in creation order) with room for the carton
    #[default]
    FirstFit,
    /// The fullest pallet with room for the carton, ties broken by creation order
    BestFit,
}
