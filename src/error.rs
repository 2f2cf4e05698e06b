//! Error types for the fee schedule engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Degraded inputs (malformed numbers, unknown schedule codes) are not
//! errors: they resolve to sentinels and placeholder rows. Only
//! configuration loading and document output can fail.

use thiserror::Error;

/// The main error type for the fee schedule engine.
///
/// # Example
///
/// ```
/// use compenso_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/letterhead.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/letterhead.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Document layout or content-stream assembly failed.
    #[error("Document rendering failed: {message}")]
    Render {
        /// A description of the rendering failure.
        message: String,
    },

    /// Writing the finished document to its output sink failed.
    #[error("Failed to write document: {message}")]
    DocumentWrite {
        /// A description of the write failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
