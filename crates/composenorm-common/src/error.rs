//! Unified error types for the composenorm workspace.
//!
//! Field-level anomalies never surface here: the engine resolves them to
//! defaults. Only document-level failures (unreadable input, loader syntax
//! errors, a root that is not a mapping) are represented.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::SourceFormat;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The loader could not turn the input text into a tree.
    #[error("failed to load {format} document: {message}")]
    Load {
        /// Format the input was read as.
        format: SourceFormat,
        /// Loader-reported description of the failure.
        message: String,
    },

    /// The document root is not a mapping.
    #[error("malformed document: expected a mapping at the root, found {found}")]
    MalformedDocument {
        /// Kind of value found at the root.
        found: &'static str,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ComposeError>;
