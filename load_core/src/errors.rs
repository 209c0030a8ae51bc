//! # Error Types
//!
//! Structured error types for load_core. Errors carry enough context to be
//! rendered directly to API consumers and to be handled programmatically.
//!
//! ## Example
//!
//! ```rust
//! use load_core::errors::{CalcError, CalcResult};
//!
//! fn validate_area(area_m2: f64) -> CalcResult<()> {
//!     if area_m2 < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "area_m2",
//!             area_m2.to_string(),
//!             "Floor area cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for load_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong, so the API
/// boundary can translate it into a wire-level error response without
/// guessing.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (negative, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing and has no usable default
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Conductor material string not recognized
    #[error("Unknown conductor material: {material}")]
    UnknownConductor { material: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownConductor error
    pub fn unknown_conductor(material: impl Into<String>) -> Self {
        CalcError::UnknownConductor {
            material: material.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownConductor { .. } => "UNKNOWN_CONDUCTOR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("range_watts", "-8000", "Rating cannot be negative");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("units").error_code(), "MISSING_FIELD");
        assert_eq!(
            CalcError::unknown_conductor("bronze").error_code(),
            "UNKNOWN_CONDUCTOR"
        );
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::unknown_conductor("Bronze");
        assert_eq!(error.to_string(), "Unknown conductor material: Bronze");
    }
}
