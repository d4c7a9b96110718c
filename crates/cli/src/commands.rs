//! Subcommand dispatch.
//!
//! One-shot commands that change the inventory save it before returning; read
//! commands never touch the backing file.

use std::io::{self, Write};

use anyhow::{Context, Result};
use stockledger_inventory::Inventory;
use stockledger_products::{Product, ProductId, ProductPatch};

use crate::cli::{AddArgs, Commands, UpdateArgs};
use crate::config::Config;
use crate::shell::Shell;

pub const NOT_FOUND: &str = "Product not found.";
pub const EMPTY_INVENTORY: &str = "No products in inventory.";
pub const NOTHING_LOW: &str = "No products below the threshold.";

/// Open the configured inventory and run `command` against stdin/stdout.
pub fn execute(command: Commands, config: &Config) -> Result<()> {
    let mut inventory = open(config)?;
    let stdout = io::stdout();
    run(command, &mut inventory, config, &mut stdout.lock())
}

pub fn open(config: &Config) -> Result<Inventory> {
    Inventory::open(&config.data_file).context("failed to load inventory")
}

pub fn run(
    command: Commands,
    inventory: &mut Inventory,
    config: &Config,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Commands::Add(args) => {
            inventory.add_product(new_product(args))?;
            inventory.save_data()?;
            writeln!(out, "Product added successfully.")?;
        }
        Commands::Update(args) => {
            let (id, patch) = patch_from(args);
            inventory.update_product(&id, patch)?;
            inventory.save_data()?;
            writeln!(out, "Product updated successfully.")?;
        }
        Commands::Delete(args) => {
            inventory.delete_product(&ProductId::from(args.id))?;
            inventory.save_data()?;
            writeln!(out, "Product deleted successfully.")?;
        }
        Commands::View(args) => {
            write_view(out, inventory.view_product(&ProductId::from(args.id)))?;
        }
        Commands::List => {
            write_products(out, inventory.list_all_products(), EMPTY_INVENTORY)?;
        }
        Commands::LowStock(args) => {
            let threshold = args.threshold.unwrap_or(config.low_stock_threshold);
            write_products(out, inventory.low_stock_alert(threshold), NOTHING_LOW)?;
        }
        Commands::Value => {
            write_value(out, inventory.total_inventory_value())?;
        }
        Commands::Shell => {
            let stdin = io::stdin();
            Shell::new(stdin.lock(), out, config.low_stock_threshold).run(inventory)?;
        }
    }
    Ok(())
}

fn new_product(args: AddArgs) -> Product {
    Product::new(args.id, args.name, args.price, args.quantity)
}

fn patch_from(args: UpdateArgs) -> (ProductId, ProductPatch) {
    let patch = ProductPatch {
        name: args.name,
        price: args.price,
        quantity: args.quantity,
    };
    (ProductId::from(args.id), patch)
}

pub(crate) fn write_view(out: &mut impl Write, product: Option<&Product>) -> io::Result<()> {
    match product {
        Some(product) => writeln!(out, "{product}"),
        None => writeln!(out, "{NOT_FOUND}"),
    }
}

pub(crate) fn write_products<'a>(
    out: &mut impl Write,
    products: impl IntoIterator<Item = &'a Product>,
    when_empty: &str,
) -> io::Result<()> {
    let mut any = false;
    for product in products {
        writeln!(out, "{product}")?;
        any = true;
    }
    if !any {
        writeln!(out, "{when_empty}")?;
    }
    Ok(())
}

pub(crate) fn write_value(out: &mut impl Write, total: f64) -> io::Result<()> {
    // Debug formatting keeps "20.0" rather than "20".
    writeln!(out, "Total Inventory Value: {total:?}")
}
