//! Products domain module.
//!
//! The `Product` record and its partial-update payload. Pure data: no IO and
//! no validation beyond what the types express.

pub mod product;

pub use product::{Product, ProductId, ProductPatch};
