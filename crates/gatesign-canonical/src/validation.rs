use regex::Regex;
use thiserror::Error;

/// Validation errors for wire-format fields.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// When a value does not match the field's wire pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Checks that an amount is a plain non-negative integer string.
///
/// The gateway's wire format carries the amount in the base currency unit
/// with no decimal point (pattern: `[0-9]+`).
pub fn validate_amount(value: &str) -> Result<(), ValidationError> {
    if !Regex::new(r"^[0-9]+$").expect("invalid regex").is_match(value) {
        return Err(ValidationError::PatternMismatch {
            field: "AMOUNT",
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Checks that a card expiry is exactly four digits (`MMYY`).
pub fn validate_expiry(value: &str) -> Result<(), ValidationError> {
    if !Regex::new(r"^[0-9]{4}$").expect("invalid regex").is_match(value) {
        return Err(ValidationError::PatternMismatch {
            field: "ED",
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_accepts_plain_integers() {
        assert!(validate_amount("0").is_ok());
        assert!(validate_amount("1500").is_ok());
    }

    #[test]
    fn amount_rejects_decimals_and_signs() {
        assert!(validate_amount("15.00").is_err());
        assert!(validate_amount("-15").is_err());
        assert!(validate_amount("").is_err());
    }

    #[test]
    fn expiry_requires_four_digits() {
        assert!(validate_expiry("0111").is_ok());
        assert!(validate_expiry("111").is_err());
        assert!(validate_expiry("01/11").is_err());
    }
}
