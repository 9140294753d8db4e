//! # Error Types
//!
//! Structured error types for naca_core. Every failure carries enough context
//! (which field, which file, which line) for a caller to report or fix the
//! problem without parsing message strings.
//!
//! ## Example
//!
//! ```rust
//! use naca_core::errors::{NacaError, NacaResult};
//!
//! fn validate_point_count(point_count: usize) -> NacaResult<()> {
//!     if point_count == 0 {
//!         return Err(NacaError::InvalidInput {
//!             field: "point_count".to_string(),
//!             value: point_count.to_string(),
//!             reason: "Point count must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for naca_core operations
pub type NacaResult<T> = Result<T, NacaError>;

/// Structured error type for airfoil generation and persistence.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum NacaError {
    /// An input value is invalid (bad designator, zero point count)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error while writing or reading a coordinate file
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// A coordinate file was readable but its contents are malformed
    #[error("Parse error in '{path}' at line {line}: {reason}")]
    ParseError {
        path: String,
        line: usize,
        reason: String,
    },

    /// JSON serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl NacaError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        NacaError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        NacaError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a ParseError
    pub fn parse_error(path: impl Into<String>, line: usize, reason: impl Into<String>) -> Self {
        NacaError::ParseError {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            NacaError::InvalidInput { .. } => "INVALID_INPUT",
            NacaError::FileError { .. } => "FILE_ERROR",
            NacaError::ParseError { .. } => "PARSE_ERROR",
            NacaError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = NacaError::invalid_input("designator", "99999", "Designator must have four digits");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: NacaError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(NacaError::invalid_input("point_count", "0", "").error_code(), "INVALID_INPUT");
        assert_eq!(NacaError::file_error("create", "NACA 0012.dat", "denied").error_code(), "FILE_ERROR");
        assert_eq!(NacaError::parse_error("a.dat", 3, "bad").error_code(), "PARSE_ERROR");
    }

    #[test]
    fn test_error_display_names_field_and_value() {
        let error = NacaError::invalid_input("designator", "-12", "Designator must be four digits");
        let message = error.to_string();
        assert!(message.contains("designator"));
        assert!(message.contains("-12"));
    }
}
