//! `stockledger` command-line frontend.
//!
//! Thin dispatch over [`stockledger_inventory::Inventory`]: argument parsing,
//! input validation, and the interactive menu.

pub mod cli;
pub mod commands;
pub mod config;
pub mod input;
pub mod shell;

pub use cli::{Cli, Commands};
pub use config::Config;
