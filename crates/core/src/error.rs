//! Error types for HtmlPad
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for HtmlPad
#[derive(Error, Debug)]
pub enum HtmlPadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Document error: {0}")]
    Document(String),

    #[error("Print error: {0}")]
    Print(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for HtmlPad operations
pub type Result<T> = std::result::Result<T, HtmlPadError>;

impl HtmlPadError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            HtmlPadError::Io(e) => format!("File operation failed: {}", e),
            HtmlPadError::Config(msg) => format!("Configuration error: {}", msg),
            HtmlPadError::Document(msg) => format!("Document error: {}", msg),
            HtmlPadError::Print(msg) => format!("Printing failed: {}", msg),
            _ => self.to_string(),
        }
    }
}
