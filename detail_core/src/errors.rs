//! # Error Types
//!
//! Structured error types for detail_core. Every error is raised while an
//! entity is being constructed; once a [`ScaleBeamType`](crate::ScaleBeamType)
//! exists, all of its derived geometry is infallible.
//!
//! ## Example
//!
//! ```rust
//! use detail_core::errors::{DetailError, DetailResult};
//!
//! fn validate_span(span: f64) -> DetailResult<()> {
//!     if span <= 0.0 {
//!         return Err(DetailError::invalid_geometry(
//!             "spans_len",
//!             span.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for detail_core operations
pub type DetailResult<T> = Result<T, DetailError>;

/// Structured error type for detail construction.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DetailError {
    /// A single entity was given a non-physical value (non-positive length, NaN, ...)
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// Per-span / per-axis sequences do not line up
    #[error("Shape mismatch for '{field}': expected {expected} entries, got {actual}")]
    ShapeMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    /// A combination the derivation rules do not model
    #[error("Unsupported configuration: {reason}")]
    UnsupportedConfiguration { reason: String },

    /// JSON serialization of a geometry snapshot failed
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl DetailError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        DetailError::InvalidGeometry {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ShapeMismatch error
    pub fn shape_mismatch(field: impl Into<String>, expected: usize, actual: usize) -> Self {
        DetailError::ShapeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Create an UnsupportedConfiguration error
    pub fn unsupported(reason: impl Into<String>) -> Self {
        DetailError::UnsupportedConfiguration {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DetailError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            DetailError::ShapeMismatch { .. } => "SHAPE_MISMATCH",
            DetailError::UnsupportedConfiguration { .. } => "UNSUPPORTED_CONFIGURATION",
            DetailError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for DetailError {
    fn from(err: serde_json::Error) -> Self {
        DetailError::SerializationError {
            reason: err.to_string(),
        }
    }
}

/// Reject NaN/infinite values and anything not strictly positive.
pub(crate) fn require_positive(field: &str, value: f64) -> DetailResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DetailError::invalid_geometry(field, value.to_string(), "Must be a positive finite number"));
    }
    Ok(value)
}

/// Reject NaN/infinite and negative values. Zero is allowed.
pub(crate) fn require_non_negative(field: &str, value: f64) -> DetailResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(DetailError::invalid_geometry(field, value.to_string(), "Must be a non-negative finite number"));
    }
    Ok(value)
}
