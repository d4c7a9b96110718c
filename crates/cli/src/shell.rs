//! Interactive numbered menu.
//!
//! Reads one answer per line. Nothing is written to the backing file until the
//! operator picks "Exit"; closing the input stream leaves without saving.

use std::io::{BufRead, Write};

use anyhow::Result;
use stockledger_inventory::{Inventory, InventoryError};
use stockledger_products::{Product, ProductId, ProductPatch};
use tracing::warn;

use crate::commands::{EMPTY_INVENTORY, NOTHING_LOW, write_products, write_value, write_view};
use crate::input::{self, PRICE_ERROR, QUANTITY_ERROR};

const MENU: &str = "
    1. Add Product
    2. Update Product
    3. Delete Product
    4. View Product
    5. List All Products
    6. Low-Stock Alert
    7. Total Inventory Value
    8. Exit
";

const CHOICE_ERROR: &str = "Please enter a number between 1 and 8.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    Update,
    Delete,
    View,
    List,
    LowStock,
    Value,
    Exit,
}

impl MenuChoice {
    fn parse(raw: &str) -> Option<Self> {
        let choice = match raw.trim().parse::<u8>().ok()? {
            1 => Self::Add,
            2 => Self::Update,
            3 => Self::Delete,
            4 => Self::View,
            5 => Self::List,
            6 => Self::LowStock,
            7 => Self::Value,
            8 => Self::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// What the loop does after an action.
enum Flow {
    Continue,
    Exit,
    InputClosed,
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    low_stock_threshold: i64,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, low_stock_threshold: i64) -> Self {
        Self {
            input,
            output,
            low_stock_threshold,
        }
    }

    /// Run the menu until the operator exits (saving) or input runs out.
    pub fn run(&mut self, inventory: &mut Inventory) -> Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt_until("Choose an option: ", MenuChoice::parse, CHOICE_ERROR)?
            else {
                return self.input_closed();
            };

            match self.dispatch(choice, inventory)? {
                Flow::Continue => {}
                Flow::Exit => return Ok(()),
                Flow::InputClosed => return self.input_closed(),
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice, inventory: &mut Inventory) -> Result<Flow> {
        match choice {
            MenuChoice::Add => self.add(inventory),
            MenuChoice::Update => self.update(inventory),
            MenuChoice::Delete => self.delete(inventory),
            MenuChoice::View => {
                let Some(id) = self.prompt("ID to view: ")? else {
                    return Ok(Flow::InputClosed);
                };
                write_view(&mut self.output, inventory.view_product(&ProductId::from(id)))?;
                Ok(Flow::Continue)
            }
            MenuChoice::List => {
                write_products(&mut self.output, inventory.list_all_products(), EMPTY_INVENTORY)?;
                Ok(Flow::Continue)
            }
            MenuChoice::LowStock => {
                let low = inventory.low_stock_alert(self.low_stock_threshold);
                write_products(&mut self.output, low, NOTHING_LOW)?;
                Ok(Flow::Continue)
            }
            MenuChoice::Value => {
                write_value(&mut self.output, inventory.total_inventory_value())?;
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => {
                inventory.save_data()?;
                writeln!(self.output, "Inventory data saved.")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn add(&mut self, inventory: &mut Inventory) -> Result<Flow> {
        let Some(id) = self.prompt("Product ID: ")? else {
            return Ok(Flow::InputClosed);
        };
        let Some(name) = self.prompt("Product name: ")? else {
            return Ok(Flow::InputClosed);
        };
        let Some(price) =
            self.prompt_until("Product price: ", |s| input::parse_positive_price(s).ok(), PRICE_ERROR)?
        else {
            return Ok(Flow::InputClosed);
        };
        let Some(quantity) =
            self.prompt_until("Quantity: ", |s| input::parse_positive_quantity(s).ok(), QUANTITY_ERROR)?
        else {
            return Ok(Flow::InputClosed);
        };

        let outcome = inventory.add_product(Product::new(id, name, price, quantity));
        self.report(outcome, "Product added successfully.")
    }

    fn update(&mut self, inventory: &mut Inventory) -> Result<Flow> {
        let Some(id) = self.prompt("Product ID to update: ")? else {
            return Ok(Flow::InputClosed);
        };
        let Some(name) = self.prompt("New name (blank to keep): ")? else {
            return Ok(Flow::InputClosed);
        };
        let Some(price) = self.prompt_until(
            "New price (blank to keep): ",
            |s| input::parse_optional_price(s).ok(),
            "Enter a finite number, or leave blank to keep the current price.",
        )?
        else {
            return Ok(Flow::InputClosed);
        };
        let Some(quantity) = self.prompt_until(
            "New quantity (blank to keep): ",
            |s| input::parse_optional::<i64>(s).ok(),
            "Enter an integer, or leave blank to keep the current quantity.",
        )?
        else {
            return Ok(Flow::InputClosed);
        };

        let patch = ProductPatch {
            name: Some(name).filter(|n| !n.is_empty()),
            price,
            quantity,
        };
        let outcome = inventory.update_product(&ProductId::from(id), patch);
        self.report(outcome, "Product updated successfully.")
    }

    fn delete(&mut self, inventory: &mut Inventory) -> Result<Flow> {
        let Some(id) = self.prompt("Product ID to delete: ")? else {
            return Ok(Flow::InputClosed);
        };
        let outcome = inventory.delete_product(&ProductId::from(id));
        self.report(outcome, "Product deleted successfully.")
    }

    /// Print the success line, or the error for recoverable store failures.
    fn report(&mut self, outcome: Result<(), InventoryError>, success: &str) -> Result<Flow> {
        match outcome {
            Ok(()) => writeln!(self.output, "{success}")?,
            Err(InventoryError::Domain(e)) => writeln!(self.output, "{e}")?,
            Err(e) => return Err(e.into()),
        }
        Ok(Flow::Continue)
    }

    fn input_closed(&mut self) -> Result<()> {
        warn!("input closed before exit; unsaved changes discarded");
        Ok(())
    }

    /// Print `prompt` and read one line without its line ending.
    ///
    /// `None` means the input is exhausted.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Re-prompt until `parse` accepts the answer.
    fn prompt_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Option<T>,
        error_message: &str,
    ) -> Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Some(value) => return Ok(Some(value)),
                None => writeln!(self.output, "{error_message}")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn session(inventory: &mut Inventory, script: &str) -> String {
        let mut out = Vec::new();
        Shell::new(Cursor::new(script.as_bytes()), &mut out, 2)
            .run(inventory)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn store() -> (TempDir, Inventory) {
        let dir = TempDir::new().unwrap();
        let inventory = Inventory::open(dir.path().join("inventory.json")).unwrap();
        (dir, inventory)
    }

    #[test]
    fn menu_choice_range() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 8 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
    }

    #[test]
    fn add_reprompts_then_saves_on_exit() {
        let (dir, mut inventory) = store();
        let out = session(&mut inventory, "1\nA1\nAnvil\n-5\n99.5\nlots\n1\n5\n8\n");

        assert!(out.contains("Enter a positive number."));
        assert!(out.contains("Enter a positive integer."));
        assert!(out.contains("Product added successfully."));
        assert!(out.contains("Product(id=A1, name=Anvil, price=99.5, quantity=1)"));
        assert!(out.ends_with("Inventory data saved.\n"));

        let reopened = Inventory::open(dir.path().join("inventory.json")).unwrap();
        assert_eq!(reopened.len(), 1);
    }

    #[test]
    fn invalid_choice_is_reported() {
        let (_dir, mut inventory) = store();
        let out = session(&mut inventory, "42\n8\n");
        assert!(out.contains("Please enter a number between 1 and 8."));
    }

    #[test]
    fn duplicate_add_reports_and_continues() {
        let (_dir, mut inventory) = store();
        inventory.add_product(Product::new("A1", "Anvil", 1.0, 1)).unwrap();

        let out = session(&mut inventory, "1\nA1\nOther\n2\n2\n8\n");
        assert!(out.contains("Product with ID A1 already exists."));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn update_blank_fields_are_kept() {
        let (_dir, mut inventory) = store();
        inventory.add_product(Product::new("A1", "Anvil", 1.0, 1)).unwrap();

        let out = session(&mut inventory, "2\nA1\n\nfree\ninf\n\n7\n8\n");
        assert_eq!(
            out.matches("Enter a finite number, or leave blank to keep the current price.").count(),
            2
        );
        assert!(out.contains("Product updated successfully."));
        assert_eq!(
            inventory.view_product(&ProductId::from("A1")),
            Some(&Product::new("A1", "Anvil", 1.0, 7))
        );
    }

    #[test]
    fn update_and_delete_missing_are_reported() {
        let (_dir, mut inventory) = store();
        let out = session(&mut inventory, "2\nZ\nname\n\n\n3\nZ\n4\nZ\n8\n");

        assert_eq!(out.matches("Product with ID Z not found.").count(), 2);
        assert!(out.contains("Product not found."));
    }

    #[test]
    fn low_stock_and_value() {
        let (_dir, mut inventory) = store();
        inventory.add_product(Product::new("a", "A", 2.5, 4)).unwrap();
        inventory.add_product(Product::new("b", "B", 10.0, 1)).unwrap();

        let out = session(&mut inventory, "6\n7\n8\n");
        assert!(out.contains("Product(id=b, name=B, price=10.0, quantity=1)"));
        assert!(!out.contains("Product(id=a"));
        assert!(out.contains("Total Inventory Value: 20.0"));
    }

    #[test]
    fn closed_input_leaves_without_saving() {
        let (dir, mut inventory) = store();
        let out = session(&mut inventory, "1\nA1\nAnvil\n1.0\n1\n");

        assert!(out.contains("Product added successfully."));
        assert!(!out.contains("Inventory data saved."));
        assert!(!dir.path().join("inventory.json").exists());
    }

    #[test]
    fn empty_listings() {
        let (_dir, mut inventory) = store();
        let out = session(&mut inventory, "5\n6\n8\n");
        assert!(out.contains("No products in inventory."));
        assert!(out.contains("No products below the threshold."));
    }
}
