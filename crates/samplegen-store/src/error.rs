//! Error types for the template store.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Missing substitution for placeholder '{placeholder}' in template '{template}'")]
    MissingSubstitution { template: String, placeholder: String },

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
