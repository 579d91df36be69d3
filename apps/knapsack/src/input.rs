//! Parsing of the raw comma-separated form fields.
//!
//! Shared by the server (`/solve`) and the client-side validator so both ends
//! agree on what a well-formed number list is.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("'{token}' is not a number")]
    Malformed { token: String },

    #[error("{value} is not greater than 0")]
    NotPositive { value: f64 },

    #[error("{values} values but {volumes} volumes")]
    LengthMismatch { values: usize, volumes: usize },
}

/// Parses a single numeric token. Surrounding whitespace is ignored; empty
/// tokens, non-numbers and non-finite numbers are malformed.
pub fn parse_number(token: &str) -> Result<f64, InputError> {
    let trimmed = token.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| InputError::Malformed {
            token: trimmed.to_string(),
        })
}

/// Splits on `,` and parses every token. Sign is not checked.
pub fn parse_numbers(text: &str) -> Result<Vec<f64>, InputError> {
    text.split(',').map(parse_number).collect()
}

/// Like [`parse_numbers`], but every number must be strictly positive.
pub fn parse_positive_numbers(text: &str) -> Result<Vec<f64>, InputError> {
    let numbers = parse_numbers(text)?;
    ensure_positive(&numbers)?;
    Ok(numbers)
}

/// Parses a scalar that must be strictly positive (the capacity field).
pub fn parse_positive_number(text: &str) -> Result<f64, InputError> {
    let n = parse_number(text)?;
    ensure_positive(&[n])?;
    Ok(n)
}

pub fn ensure_positive(numbers: &[f64]) -> Result<(), InputError> {
    match numbers.iter().find(|n| **n <= 0.0) {
        Some(&value) => Err(InputError::NotPositive { value }),
        None => Ok(()),
    }
}

pub fn ensure_same_length(values: &[f64], volumes: &[f64]) -> Result<(), InputError> {
    if values.len() != volumes.len() {
        return Err(InputError::LengthMismatch {
            values: values.len(),
            volumes: volumes.len(),
        });
    }
    Ok(())
}

/// Joins numbers back into a form field. Whole numbers print without `.0`.
pub fn join_numbers(numbers: &[f64]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers_trims_whitespace() {
        assert_eq!(parse_numbers(" 1, 2.5 ,3").unwrap(), vec![1.0, 2.5, 3.0]);
    }

    #[test]
    fn test_parse_numbers_rejects_word() {
        assert_eq!(
            parse_numbers("1,abc,3"),
            Err(InputError::Malformed {
                token: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_parse_numbers_rejects_empty_token() {
        assert!(matches!(
            parse_numbers("1,,3"),
            Err(InputError::Malformed { .. })
        ));
        assert!(parse_numbers("").is_err());
    }

    #[test]
    fn test_parse_numbers_rejects_non_finite() {
        assert!(parse_numbers("1,inf").is_err());
        assert!(parse_numbers("NaN").is_err());
    }

    #[test]
    fn test_parse_positive_numbers_rejects_negative_and_zero() {
        assert_eq!(
            parse_positive_numbers("1,-2,3"),
            Err(InputError::NotPositive { value: -2.0 })
        );
        assert!(parse_positive_numbers("0").is_err());
    }

    #[test]
    fn test_parse_positive_number_capacity() {
        assert_eq!(parse_positive_number("10").unwrap(), 10.0);
        assert!(parse_positive_number("-1").is_err());
        assert!(parse_positive_number("1,2").is_err());
    }

    #[test]
    fn test_ensure_same_length() {
        assert!(ensure_same_length(&[1.0, 2.0], &[3.0, 4.0]).is_ok());
        assert_eq!(
            ensure_same_length(&[1.0], &[3.0, 4.0]),
            Err(InputError::LengthMismatch {
                values: 1,
                volumes: 2
            })
        );
    }

    #[test]
    fn test_join_numbers_drops_trailing_zero_fraction() {
        assert_eq!(join_numbers(&[1.0, 2.0]), "1,2");
        assert_eq!(join_numbers(&[1.5, 10.0]), "1.5,10");
    }
}
