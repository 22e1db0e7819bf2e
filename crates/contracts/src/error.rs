//! Layered error definitions
//!
//! Categorized by source: configuration / transport / event bus / config files

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Dispatch Errors =====
    /// Dispatcher is not configured well enough to publish
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Network failure while talking to the ntfy server
    #[error("transport error for '{url}': {message}")]
    Transport { url: String, message: String },

    /// Server answered with a non-success status
    #[error("ntfy server at '{url}' responded with status {status}")]
    HttpStatus { url: String, status: u16 },

    // ===== Event Bus Errors =====
    /// Event name not known to this workspace
    #[error("unknown event name: {name}")]
    UnknownEvent { name: String },

    // ===== Configuration File Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContractError {
    /// Create configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create transport error
    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True for errors raised before any network I/O was attempted
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// True for network failures and non-2xx responses
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::HttpStatus { .. })
    }
}
