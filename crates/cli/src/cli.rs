//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use stockledger_observability::LogFormat;

use crate::config::{DEFAULT_DATA_FILE, DEFAULT_LOW_STOCK_THRESHOLD};
use crate::input;

/// stockledger - keep track of products, prices and stock on hand
#[derive(Debug, Parser)]
#[command(name = "stockledger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file the inventory is loaded from and saved to
    #[arg(long, global = true, env = "STOCKLEDGER_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Log output format (pretty or json)
    #[arg(long, global = true, env = "STOCKLEDGER_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,

    /// Quantity below which a product counts as low on stock
    #[arg(
        long,
        global = true,
        env = "STOCKLEDGER_LOW_STOCK_THRESHOLD",
        default_value_t = DEFAULT_LOW_STOCK_THRESHOLD,
        allow_negative_numbers = true
    )]
    pub low_stock_threshold: i64,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Subcommand, Default)]
pub enum Commands {
    /// Add a new product
    Add(AddArgs),

    /// Change the name, price or quantity of a product
    Update(UpdateArgs),

    /// Remove a product
    Delete(IdArgs),

    /// Show one product
    View(IdArgs),

    /// Show every product
    List,

    /// Show products whose quantity is below the threshold
    LowStock(LowStockArgs),

    /// Show the total value of the stock on hand
    Value,

    /// Interactive numbered menu; saves on exit
    #[default]
    Shell,
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct AddArgs {
    /// Product identifier (must be unique)
    #[arg(long)]
    pub id: String,

    /// Product name
    #[arg(long)]
    pub name: String,

    /// Unit price (positive)
    #[arg(long, value_parser = input::parse_positive_price)]
    pub price: f64,

    /// Units on hand (positive)
    #[arg(long, value_parser = input::parse_positive_quantity)]
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct UpdateArgs {
    /// Product identifier
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New unit price (finite)
    #[arg(long, allow_negative_numbers = true, value_parser = input::parse_finite_price)]
    pub price: Option<f64>,

    /// New quantity
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct IdArgs {
    /// Product identifier
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct LowStockArgs {
    /// Overrides --low-stock-threshold for this query
    #[arg(long, allow_negative_numbers = true)]
    pub threshold: Option<i64>,
}
