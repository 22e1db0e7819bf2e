//! LogTransport - logs requests via tracing instead of sending them

use bytes::Bytes;
use contracts::{ContractError, NtfyTransport};
use tracing::{info, instrument};
use url::Url;

/// Transport for dry runs
pub struct LogTransport {
    name: String,
}

impl LogTransport {
    /// Create a new LogTransport with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for LogTransport {
    fn default() -> Self {
        Self::new("log")
    }
}

impl NtfyTransport for LogTransport {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(name = "log_transport_post", skip(self, body), fields(transport = %self.name))]
    async fn post(&self, url: &Url, body: Bytes) -> Result<(), ContractError> {
        info!(
            url = %url,
            body = %String::from_utf8_lossy(&body),
            "Notification (not sent)"
        );
        Ok(())
    }
}
