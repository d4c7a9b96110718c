use std::collections::HashMap;
use std::path::{Path, PathBuf};

use stockledger_core::{DomainError, Entity};
use stockledger_products::{Product, ProductId, ProductPatch};
use tracing::{debug, info, warn};

use crate::error::InventoryResult;
use crate::persistence;

/// In-memory product store bound to a backing file.
///
/// Products are kept in insertion order so listings and the saved file are
/// deterministic. The backing file is read exactly once, by [`Inventory::open`],
/// and written only by [`Inventory::save_data`]; nothing is saved implicitly.
///
/// Mutation takes `&mut self`. Sharing a store across threads needs an outer
/// lock held around every call.
#[derive(Debug)]
pub struct Inventory {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
    data_file: PathBuf,
}

impl Inventory {
    /// Bind a store to `data_file` and load whatever it holds.
    ///
    /// A missing file yields an empty store. A malformed file, or one that
    /// repeats an id, fails the whole open.
    pub fn open(data_file: impl Into<PathBuf>) -> InventoryResult<Self> {
        let mut inventory = Self {
            products: Vec::new(),
            index: HashMap::new(),
            data_file: data_file.into(),
        };
        inventory.load_data()?;
        Ok(inventory)
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Insert a new product. Fails if its id is already present.
    pub fn add_product(&mut self, product: Product) -> InventoryResult<()> {
        let id = product.id().clone();
        if self.index.contains_key(&id) {
            return Err(DomainError::duplicate_key(&id).into());
        }

        debug!(product_id = %id, "product added");
        self.index.insert(id, self.products.len());
        self.products.push(product);
        Ok(())
    }

    /// Change the supplied fields of an existing product.
    pub fn update_product(&mut self, id: &ProductId, patch: ProductPatch) -> InventoryResult<()> {
        let slot = self.slot(id)?;
        debug!(product_id = %id, ?patch, "product updated");
        self.products[slot].apply(patch);
        Ok(())
    }

    /// Remove a product. Its id may be reused afterwards.
    pub fn delete_product(&mut self, id: &ProductId) -> InventoryResult<()> {
        let slot = self.slot(id)?;
        self.products.remove(slot);
        self.index.remove(id);
        for product in &self.products[slot..] {
            if let Some(pos) = self.index.get_mut(product.id()) {
                *pos -= 1;
            }
        }

        debug!(product_id = %id, "product deleted");
        Ok(())
    }

    /// Look up a product without treating absence as an error.
    pub fn view_product(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).map(|&slot| &self.products[slot])
    }

    /// All products, in insertion order.
    pub fn list_all_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Products whose quantity is strictly below `threshold`.
    pub fn low_stock_alert(&self, threshold: i64) -> Vec<&Product> {
        self.list_all_products()
            .filter(|p| p.quantity() < threshold)
            .collect()
    }

    /// Sum of `price * quantity` over every product; `0.0` when empty.
    pub fn total_inventory_value(&self) -> f64 {
        self.list_all_products()
            .fold(0.0, |total, product| total + product.value())
    }

    /// Write every product to the backing file, replacing its contents.
    pub fn save_data(&self) -> InventoryResult<()> {
        persistence::write_products(&self.data_file, &self.products)?;
        info!(
            path = %self.data_file.display(),
            products = self.products.len(),
            "inventory saved"
        );
        Ok(())
    }

    fn load_data(&mut self) -> InventoryResult<()> {
        let Some(products) = persistence::read_products(&self.data_file)? else {
            warn!(path = %self.data_file.display(), "no inventory data found, starting empty");
            return Ok(());
        };

        for product in products {
            self.add_product(product)?;
        }

        info!(
            path = %self.data_file.display(),
            products = self.products.len(),
            "inventory loaded"
        );
        Ok(())
    }

    fn slot(&self, id: &ProductId) -> InventoryResult<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| DomainError::not_found(id).into())
    }
}
