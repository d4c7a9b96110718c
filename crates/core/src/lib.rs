//! `stockledger-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no serialization).

pub mod entity;
pub mod error;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
