//! stockledger - single-user inventory ledger

use anyhow::Result;
use clap::Parser;

use stockledger_cli::{Cli, Config, commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from(&cli);

    stockledger_observability::init(config.log_format);

    commands::execute(cli.command.unwrap_or_default(), &config)
}
