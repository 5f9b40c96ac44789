use thiserror::Error;

/// Unified error type for version-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Malformed commit header: '{message}' - expected type(scope)?!?: subject")]
    MalformedCommitHeader { message: String },

    #[error("Invalid commit type '{found}' in: '{message}'")]
    InvalidCommitType { found: String, message: String },

    #[error("Invalid version format: '{0}' - expected X.Y.Z")]
    InvalidVersionFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Changelog error: {0}")]
    Changelog(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in version-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a malformed-header error carrying the offending message
    pub fn malformed_header(message: impl Into<String>) -> Self {
        BumpError::MalformedCommitHeader {
            message: message.into(),
        }
    }

    /// Create an invalid-type error carrying the unknown type and the full message
    pub fn invalid_type(found: impl Into<String>, message: impl Into<String>) -> Self {
        BumpError::InvalidCommitType {
            found: found.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create a changelog error with context
    pub fn changelog(msg: impl Into<String>) -> Self {
        BumpError::Changelog(msg.into())
    }
}
