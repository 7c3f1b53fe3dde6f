//! Error types of the helper crate.

use thiserror::Error;

/// Error parsing or expanding a tile URL template.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Template is an empty string.
    #[error("tile url template is empty")]
    Empty,

    /// Template contains a brace that does not belong to a placeholder.
    #[error("malformed tile url template: {0}")]
    Malformed(String),

    /// Template references a variable that has no value.
    #[error("no value provided for variable {{{0}}}")]
    MissingVariable(String),

    /// Formatting the template failed.
    #[error("failed to format tile url: {0}")]
    Format(String),
}

/// Error loading a [`HelperConfig`](crate::HelperConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Configuration is not valid JSON or has the wrong shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
