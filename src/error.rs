//! Error types for the dashboard shell

use thiserror::Error;

/// Errors raised while loading the sidebar navigation config
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Navigation config is not valid JSON: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Navigation config has no sections")]
    NoSections,

    #[error("Navigation section '{0}' has no items")]
    EmptySection(String),

    #[error("Navigation link '{label}' has href '{href}', expected an absolute path on this site")]
    RelativeHref { label: String, href: String },

    #[error("Duplicate navigation href '{0}'")]
    DuplicateHref(String),
}

/// Result type for shell operations
pub type ShellResult<T> = Result<T, ShellError>;
