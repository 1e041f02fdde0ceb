use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::config::{FFDConfig, ItemOrder, PlacementRule};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Shipment to pack, in JSON format
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Overrides the item order of the config
    #[arg(long, value_enum)]
    pub item_order: Option<ItemOrder>,
    /// Overrides the placement rule of the config
    #[arg(long, value_enum)]
    pub placement: Option<PlacementRule>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Applies the overrides passed on the command line to `config`
    pub fn apply_overrides(&self, config: FFDConfig) -> FFDConfig {
        FFDConfig {
            item_order: self.item_order.unwrap_or(config.item_order),
            placement: self.placement.unwrap_or(config.placement),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_take_precedence() {
        let cli = Cli::parse_from(["ffd", "-i", "in.json", "-s", "out", "--placement", "best-fit"]);
        let config = cli.apply_overrides(FFDConfig::default());
        assert_eq!(config.placement, PlacementRule::BestFit);
        assert_eq!(config.item_order, ItemOrder::DecreasingDemand);
        assert_eq!(cli.log_level, LevelFilter::Info);
        assert!(cli.config_file.is_none());
    }
}
