//! Backing file codec.
//!
//! The file is one JSON array of product objects. Records are decoded one by
//! one so a bad record can be reported by position.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use stockledger_core::Entity;
use stockledger_products::Product;

use crate::error::{InventoryError, InventoryResult};

/// Read every record from `path`.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_products(path: &Path) -> InventoryResult<Option<Vec<Product>>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(InventoryError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    decode(path, &bytes).map(Some)
}

/// Overwrite `path` with `products`, creating parent directories if needed.
pub fn write_products<'a>(
    path: &Path,
    products: impl IntoIterator<Item = &'a Product>,
) -> InventoryResult<()> {
    let body = encode(path, products)?;
    let io_err = |source| InventoryError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    fs::write(path, body).map_err(io_err)
}

/// Decode a backing file body. `path` is only used for error reporting.
pub fn decode(path: &Path, bytes: &[u8]) -> InventoryResult<Vec<Product>> {
    let records: Vec<serde_json::Value> =
        serde_json::from_slice(bytes).map_err(|source| InventoryError::MalformedDocument {
            path: path.to_path_buf(),
            source,
        })?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record).map_err(|source| InventoryError::MalformedRecord {
                path: path.to_path_buf(),
                index,
                source,
            })
        })
        .collect()
}

/// Encode products as a pretty-printed JSON array with a trailing newline.
///
/// Infinite and NaN prices are refused: JSON has no spelling for them and
/// `serde_json` would write `null`, which `decode` then rejects.
pub fn encode<'a>(
    path: &Path,
    products: impl IntoIterator<Item = &'a Product>,
) -> InventoryResult<Vec<u8>> {
    let products: Vec<&Product> = products.into_iter().collect();
    if let Some(bad) = products.iter().find(|p| !p.price().is_finite()) {
        return Err(InventoryError::NonFinitePrice {
            path: path.to_path_buf(),
            id: bad.id().to_string(),
            price: bad.price(),
        });
    }

    let mut out =
        serde_json::to_vec_pretty(&products).map_err(|source| InventoryError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    out.push(b'\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> &'static Path {
        Path::new("inventory.json")
    }

    #[test]
    fn empty_store_encodes_as_empty_array() {
        assert_eq!(encode(path(), std::iter::empty()).unwrap(), b"[]\n");
    }

    #[test]
    fn decode_reads_reference_compact_format() {
        let body = br#"[{"id": "A", "name": "Apple", "price": 0.5, "quantity": 12}, {"id": "B", "name": "Bread", "price": 3, "quantity": 1}]"#;
        let products = decode(path(), body).unwrap();

        assert_eq!(
            products,
            vec![
                Product::new("A", "Apple", 0.5, 12),
                Product::new("B", "Bread", 3.0, 1),
            ]
        );
    }

    #[test]
    fn encode_then_decode_is_byte_stable() {
        let products = vec![
            Product::new("A", "Apple", 0.5, 12),
            Product::new("B", "Bread", 3.0, 1),
        ];
        let first = encode(path(), &products).unwrap();
        let second = encode(path(), &decode(path(), &first).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn non_finite_price_is_refused() {
        for price in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let products = vec![
                Product::new("A", "Apple", 0.5, 12),
                Product::new("B", "Bread", price, 1),
            ];
            match encode(path(), &products).unwrap_err() {
                InventoryError::NonFinitePrice { id, .. } => assert_eq!(id, "B"),
                other => panic!("Expected NonFinitePrice, got {other:?}"),
            }
        }
    }

    #[test]
    fn non_array_document_is_malformed() {
        let err = decode(path(), br#"{"id": "A"}"#).unwrap_err();
        assert!(matches!(err, InventoryError::MalformedDocument { .. }));

        let err = decode(path(), b"").unwrap_err();
        assert!(matches!(err, InventoryError::MalformedDocument { .. }));
    }

    #[test]
    fn bad_record_reports_its_index() {
        let body = br#"[{"id": "A", "name": "Apple", "price": 0.5, "quantity": 12}, {"id": "B", "name": "Bread"}]"#;
        match decode(path(), body).unwrap_err() {
            InventoryError::MalformedRecord { index, .. } => assert_eq!(index, 1),
            other => panic!("Expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn wrong_type_is_malformed() {
        let body = br#"[{"id": 7, "name": "Apple", "price": 0.5, "quantity": 12}]"#;
        assert!(matches!(
            decode(path(), body).unwrap_err(),
            InventoryError::MalformedRecord { index: 0, .. }
        ));
    }
}
