//! Dispatcher error types

use thiserror::Error;

/// Dispatcher-specific errors
#[derive(Debug, Error)]
pub enum DispatcherError {
    /// HTTP client could not be built
    #[error("failed to build http client: {message}")]
    ClientBuild { message: String },
}

impl DispatcherError {
    /// Create a client build error
    pub fn client_build(message: impl Into<String>) -> Self {
        Self::ClientBuild {
            message: message.into(),
        }
    }
}
