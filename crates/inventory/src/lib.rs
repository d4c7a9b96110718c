//! Inventory store.
//!
//! An in-memory map of products bound to a JSON backing file. The file is read
//! once when the store is opened and written only when `save_data` is called.

pub mod error;
pub mod persistence;
pub mod store;

pub use error::{InventoryError, InventoryResult};
pub use store::Inventory;
