use thiserror::Error;

use crate::domain::NumericField;

/// Validation failure raised while turning a field snapshot into a feature
/// vector. Recovered entirely client-side; no request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("{field} is required")]
    MissingValue { field: NumericField },
    #[error("{field} must be a number")]
    NotNumeric { field: NumericField },
    #[error("{field} must not be negative")]
    Negative { field: NumericField },
}

impl EncodeError {
    pub fn field(&self) -> NumericField {
        match self {
            EncodeError::MissingValue { field }
            | EncodeError::NotNumeric { field }
            | EncodeError::Negative { field } => *field,
        }
    }
}
