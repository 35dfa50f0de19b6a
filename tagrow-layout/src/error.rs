//! Layout error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid configuration: {field} must be {expected}, got {value}")]
    InvalidConfig {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl LayoutError {
    pub(crate) fn invalid(
        field: &'static str,
        expected: &'static str,
        value: impl ToString,
    ) -> Self {
        LayoutError::InvalidConfig {
            field,
            expected,
            value: value.to_string(),
        }
    }
}

/// Convert a signed boundary value into a non-negative coordinate.
pub(crate) fn non_negative(field: &'static str, value: i64) -> Result<u32, LayoutError> {
    u32::try_from(value).map_err(|_| LayoutError::invalid(field, "a non-negative integer", value))
}
