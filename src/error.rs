//! Error types for the regrid crate.
//!
//! This module defines a comprehensive error enum that covers all possible
//! error conditions in the interpolation engine and its demo harness.

use thiserror::Error;

/// The main error type for regrid operations.
#[derive(Error, Debug)]
pub enum RegridError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Grid construction errors (empty or ragged input)
    #[error("Invalid grid: {message}")]
    InvalidGrid { message: String },

    /// Temporal interpolation across differently-shaped grids
    #[error("Dimension mismatch: {message}")]
    DimensionMismatch { message: String },

    /// Non-finite time parameter for temporal interpolation
    #[error("Invalid time: {message}")]
    InvalidTime { message: String },

    /// Out-of-domain scale factor for spatial upscaling
    #[error("Invalid scale factor: {message}")]
    InvalidScale { message: String },

    /// Unknown interpolation method selector
    #[error("Unsupported interpolation method: {name}")]
    UnsupportedMethod { name: String },

    /// Control-point window too small or with coincident positions
    #[error("Degenerate interpolation window: {message}")]
    DegenerateWindow { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with RegridError
pub type Result<T> = std::result::Result<T, RegridError>;
