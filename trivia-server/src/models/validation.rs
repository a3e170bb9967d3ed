//! Validation error types and lenient numeric input

use std::fmt;

use serde::Deserialize;

/// Validation error for request values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field absent (or JSON null)
    Missing { field: &'static str },

    /// Field is empty (or zero) when it shouldn't be
    Empty { field: &'static str },

    /// Value present but unusable
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field } | Self::Empty { field } | Self::InvalidFormat { field, .. } => {
                field
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Integer that may arrive as a JSON number or a numeric string.
///
/// The frontend sends category ids as object keys, i.e. strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LooseInt {
    Int(i64),
    Text(String),
}

impl LooseInt {
    /// Resolve to an `i32`, naming `field` in the error.
    pub fn to_i32(&self, field: &'static str) -> Result<i32, ValidationError> {
        let value = match self {
            Self::Int(n) => *n,
            Self::Text(s) => s.trim().parse::<i64>().map_err(|_| {
                ValidationError::InvalidFormat {
                    field,
                    reason: "must be an integer",
                }
            })?,
        };

        i32::try_from(value).map_err(|_| ValidationError::InvalidFormat {
            field,
            reason: "out of range",
        })
    }
}

impl From<i64> for LooseInt {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Missing { field: "answer" };
        assert_eq!(err.to_string(), "answer is required");

        let err = ValidationError::InvalidFormat {
            field: "category",
            reason: "must be an integer",
        };
        assert_eq!(err.to_string(), "category: must be an integer");
        assert_eq!(err.field(), "category");
    }

    #[test]
    fn loose_int_accepts_numbers_and_strings() {
        let n: LooseInt = serde_json::from_str("6").unwrap();
        assert_eq!(n.to_i32("category"), Ok(6));

        let s: LooseInt = serde_json::from_str(r#"" 4 ""#).unwrap();
        assert_eq!(s.to_i32("category"), Ok(4));
    }

    #[test]
    fn loose_int_rejects_garbage() {
        let s: LooseInt = serde_json::from_str(r#""six""#).unwrap();
        assert!(matches!(
            s.to_i32("category"),
            Err(ValidationError::InvalidFormat { field: "category", .. })
        ));

        let big = LooseInt::Int(i64::from(i32::MAX) + 1);
        assert!(big.to_i32("difficulty").is_err());
    }

    #[test]
    fn loose_int_rejects_other_json() {
        assert!(serde_json::from_str::<LooseInt>("true").is_err());
        assert!(serde_json::from_str::<LooseInt>("[1]").is_err());
    }
}
