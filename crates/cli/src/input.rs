//! Validation of raw operator input.
//!
//! The store accepts any price and quantity; positivity is checked here, before
//! a product is built.

use stockledger_core::DomainError;

pub const PRICE_ERROR: &str = "Enter a positive number.";
pub const QUANTITY_ERROR: &str = "Enter a positive integer.";
pub const FINITE_PRICE_ERROR: &str = "Enter a finite number.";

/// Parse a unit price that must be a finite number greater than zero.
pub fn parse_positive_price(raw: &str) -> Result<f64, DomainError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price > 0.0)
        .ok_or_else(|| DomainError::validation(PRICE_ERROR))
}

/// Parse a replacement price. Any sign is allowed, but infinities and NaN
/// are not: they cannot be written to the backing file.
pub fn parse_finite_price(raw: &str) -> Result<f64, DomainError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| DomainError::validation(FINITE_PRICE_ERROR))
}

/// [`parse_finite_price`] where blank means "leave unchanged".
pub fn parse_optional_price(raw: &str) -> Result<Option<f64>, DomainError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_finite_price(raw).map(Some)
}

/// Parse a quantity that must be an integer greater than zero.
pub fn parse_positive_quantity(raw: &str) -> Result<i64, DomainError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|quantity| *quantity > 0)
        .ok_or_else(|| DomainError::validation(QUANTITY_ERROR))
}

/// Parse an optional field: blank means "leave unchanged".
///
/// Non-blank text that does not parse is an error.
pub fn parse_optional<T: std::str::FromStr>(raw: &str) -> Result<Option<T>, T::Err> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_must_be_positive_and_finite() {
        assert_eq!(parse_positive_price(" 2.5 "), Ok(2.5));
        assert!(parse_positive_price("0").is_err());
        assert!(parse_positive_price("-1").is_err());
        assert!(parse_positive_price("NaN").is_err());
        assert!(parse_positive_price("inf").is_err());
        assert_eq!(
            parse_positive_price("abc"),
            Err(DomainError::Validation(PRICE_ERROR.to_string()))
        );
    }

    #[test]
    fn replacement_price_must_be_finite() {
        assert_eq!(parse_finite_price("-1.5"), Ok(-1.5));
        assert_eq!(parse_finite_price("0"), Ok(0.0));
        for raw in ["inf", "-inf", "NaN", "infinity", "abc"] {
            assert_eq!(
                parse_finite_price(raw),
                Err(DomainError::Validation(FINITE_PRICE_ERROR.to_string()))
            );
        }
    }

    #[test]
    fn optional_price_blank_or_finite() {
        assert_eq!(parse_optional_price(" "), Ok(None));
        assert_eq!(parse_optional_price("4.25"), Ok(Some(4.25)));
        assert!(parse_optional_price("inf").is_err());
    }

    #[test]
    fn quantity_must_be_positive_integer() {
        assert_eq!(parse_positive_quantity("3"), Ok(3));
        assert!(parse_positive_quantity("0").is_err());
        assert!(parse_positive_quantity("1.5").is_err());
    }

    #[test]
    fn optional_blank_means_unchanged() {
        assert_eq!(parse_optional::<f64>("   "), Ok(None));
        assert_eq!(parse_optional::<i64>("7"), Ok(Some(7)));
        assert!(parse_optional::<i64>("seven").is_err());
    }
}
