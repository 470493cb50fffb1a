//! Error types for the sample generator.
//!
//! Defines `CoreError` as the primary error type for all operations
//! within `samplegen-core`.

use thiserror::Error;

/// Error type for samplegen-core operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// An error from the template store.
    #[error("Template error: {0}")]
    TemplateError(#[from] samplegen_store::TemplateError),

    /// An I/O error from file system operations.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A configuration error (invalid or missing config).
    #[error("Config error: {0}")]
    ConfigError(String),

    /// A sample lookup error (unknown id or key).
    #[error("Sample not found: {0}")]
    SampleNotFound(String),

    /// A generated file failed the syntax surface check.
    #[error("Syntax error in {file}: {reason}")]
    SyntaxError { file: String, reason: String },
}
