//! Input validation shared by the HTTP and CLI adapters

use crate::error::{FreightError, Result};

/// Reject empty or whitespace-only text fields
pub fn require_field(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FreightError::validation(field, "must not be empty"));
    }
    Ok(())
}

/// Prices must be finite and strictly positive
pub fn validate_price(price: f64) -> Result<f64> {
    if !price.is_finite() {
        return Err(FreightError::validation("price", "must be a finite number"));
    }
    if price <= 0.0 {
        return Err(FreightError::validation("price", "must be greater than 0"));
    }
    Ok(price)
}

/// Parse a user-supplied price string
pub fn parse_price(raw: &str) -> Result<f64> {
    let price = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| FreightError::validation("price", format!("'{}' is not a number", raw)))?;
    validate_price(price)
}

/// A route needs a destination that differs from its origin
pub fn validate_route(origin: &str, destination: &str) -> Result<()> {
    require_field("origin", origin)?;
    require_field("destination", destination)?;
    if origin == destination {
        return Err(FreightError::validation(
            "destination",
            "origin and destination must differ",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("1250.5").unwrap(), 1250.5);
        assert_eq!(parse_price(" 80 ").unwrap(), 80.0);
        assert!(matches!(parse_price("abc"), Err(FreightError::Validation { .. })));
        assert!(matches!(parse_price("0"), Err(FreightError::Validation { .. })));
        assert!(matches!(parse_price("-3"), Err(FreightError::Validation { .. })));
        assert!(parse_price("inf").is_err());
    }

    #[test]
    fn test_validate_route() {
        assert!(validate_route("Khorgos", "Almaty").is_ok());
        assert!(validate_route("Khorgos", "").is_err());
        assert!(validate_route("Khorgos", "Khorgos").is_err());
    }
}
