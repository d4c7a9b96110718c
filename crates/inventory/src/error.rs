use std::path::PathBuf;

use stockledger_core::DomainError;
use thiserror::Error;

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Errors raised by the inventory store and its backing file.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Duplicate or missing product (also raised for duplicates found while loading).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The backing file is not a JSON array.
    #[error("malformed inventory file {}", path.display())]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record in the backing file is missing a field, has the wrong type or
    /// carries an unknown key.
    #[error("malformed product record #{index} in {}", path.display())]
    MalformedRecord {
        path: PathBuf,
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A price JSON cannot represent (infinite or NaN); saving it would
    /// write a file that no longer loads.
    #[error("cannot save product {id} to {}: price {price:?} is not a finite number", path.display())]
    NonFinitePrice { path: PathBuf, id: String, price: f64 },

    #[error("failed to encode inventory for {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to access inventory file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InventoryError {
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::Domain(DomainError::DuplicateKey(_)))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Domain(DomainError::NotFound(_)))
    }
}
