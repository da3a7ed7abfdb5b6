//! Error types for configuration loading and raw message intake

use thiserror::Error;

/// Errors surfaced outside the classification pipeline.
///
/// Classifying an email never fails; these only come from loading a
/// [`PatternConfig`](crate::PatternConfig) or adapting a raw RFC 5322 message.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// Configuration JSON is malformed or an option group is missing
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A configured pattern does not compile
    #[error("Invalid pattern {pattern:?}: {details}")]
    InvalidPattern { pattern: String, details: String },

    /// Failed to parse the message structure
    #[error("Failed to parse email structure: {0}")]
    Structure(String),

    /// Missing required header
    #[error("Missing required header: {0}")]
    MissingHeader(String),
}

/// Result type for fallible operations in this crate
pub type Result<T> = std::result::Result<T, ClassifyError>;
