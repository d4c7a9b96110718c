//! Resolved runtime configuration.
//!
//! Values come from command-line flags, then `STOCKLEDGER_*` environment
//! variables, then the defaults below. clap does the layering; this struct is
//! what the commands and the menu actually read.

use std::path::PathBuf;

use stockledger_observability::LogFormat;

use crate::cli::Cli;

pub const DEFAULT_DATA_FILE: &str = "inventory.json";
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_file: PathBuf,
    pub log_format: LogFormat,
    pub low_stock_threshold: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_format: LogFormat::default(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            data_file: cli.data_file.clone(),
            log_format: cli.log_format,
            low_stock_threshold: cli.low_stock_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "stockledger",
            "--data-file",
            "/tmp/shop.json",
            "--low-stock-threshold",
            "10",
            "list",
        ])
        .unwrap();

        let config = Config::from(&cli);
        assert_eq!(config.data_file, PathBuf::from("/tmp/shop.json"));
        assert_eq!(config.low_stock_threshold, 10);
    }

    #[test]
    fn defaults_match_reference_behaviour() {
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from("inventory.json"));
        assert_eq!(config.low_stock_threshold, 2);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }
}
