//! # Error Types
//!
//! Structured error types for paint_core. Every failure names the form
//! field that caused it, so a front end can point the user at the right
//! input without parsing the message.
//!
//! ## Example
//!
//! ```rust
//! use paint_core::errors::{EstimateError, EstimateOutcome};
//!
//! fn validate_height(height_ft: f64) -> EstimateOutcome<()> {
//!     if height_ft <= 0.0 {
//!         return Err(EstimateError::invalid_input(
//!             "height",
//!             height_ft.to_string(),
//!             "Height must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for paint_core operations
pub type EstimateOutcome<T> = Result<T, EstimateError>;

/// Structured error type for estimate operations.
///
/// Input errors (missing or unparseable fields), lookup errors (values
/// outside a fixed enumeration), and geometry errors are kept apart so
/// callers can report each differently.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EstimateError {
    /// A required field is missing or blank
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// An input value could not be parsed or is out of range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// An enumerated field holds a value outside its fixed set
    #[error("Unknown value for '{field}': {value} (expected one of: {expected})")]
    UnknownOption {
        field: String,
        value: String,
        expected: String,
    },

    /// Door and window openings add up to more than the wall area
    #[error("Openings ({opening_area} sq ft) exceed wall area ({wall_area} sq ft)")]
    InvalidGeometry { wall_area: f64, opening_area: f64 },
}

impl EstimateError {
    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        EstimateError::MissingField {
            field: field.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        EstimateError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownOption error, listing the accepted codes
    pub fn unknown_option(field: impl Into<String>, value: impl Into<String>, expected: &[&str]) -> Self {
        EstimateError::UnknownOption {
            field: field.into(),
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(wall_area: f64, opening_area: f64) -> Self {
        EstimateError::InvalidGeometry {
            wall_area,
            opening_area,
        }
    }

    /// The form field this error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            EstimateError::MissingField { field }
            | EstimateError::InvalidInput { field, .. }
            | EstimateError::UnknownOption { field, .. } => Some(field),
            EstimateError::InvalidGeometry { .. } => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EstimateError::MissingField { .. } => "MISSING_FIELD",
            EstimateError::InvalidInput { .. } => "INVALID_INPUT",
            EstimateError::UnknownOption { .. } => "UNKNOWN_OPTION",
            EstimateError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
        }
    }
}
