//! # Error Types
//!
//! Structured error types for gear_core. Calculations themselves never fail:
//! a guard violation degrades to an undefined [`CalculationResult`]. These
//! errors cover everything around a calculation - input validation reports,
//! mode parsing, session edits, settings files, and JSON requests.
//!
//! ## Example
//!
//! ```rust
//! use gear_core::errors::{GearError, GearResult};
//!
//! fn validate_teeth(teeth: f64) -> GearResult<()> {
//!     if teeth <= 0.0 {
//!         return Err(GearError::InvalidInput {
//!             field: "teeth".to_string(),
//!             value: teeth.to_string(),
//!             reason: "Tooth count must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`CalculationResult`]: crate::calculations::CalculationResult

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for gear_core operations
pub type GearResult<T> = Result<T, GearError>;

/// Structured error type for gear_core operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum GearError {
    /// An input value is outside the domain a calculation can handle
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Planetary mode identifier not recognised
    #[error("Unknown planetary mode: {value}")]
    UnknownMode { value: String },

    /// A session edit targets a field the current calculation does not have
    #[error("Edit '{edit}' does not apply to a {calc_type} calculation")]
    EditNotApplicable { edit: String, calc_type: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl GearError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        GearError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownMode error
    pub fn unknown_mode(value: impl Into<String>) -> Self {
        GearError::UnknownMode { value: value.into() }
    }

    /// Create an EditNotApplicable error
    pub fn edit_not_applicable(edit: impl Into<String>, calc_type: impl Into<String>) -> Self {
        GearError::EditNotApplicable {
            edit: edit.into(),
            calc_type: calc_type.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        GearError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            GearError::InvalidInput { .. } => "INVALID_INPUT",
            GearError::UnknownMode { .. } => "UNKNOWN_MODE",
            GearError::EditNotApplicable { .. } => "EDIT_NOT_APPLICABLE",
            GearError::FileError { .. } => "FILE_ERROR",
            GearError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for GearError {
    fn from(e: serde_json::Error) -> Self {
        GearError::SerializationError { reason: e.to_string() }
    }
}
