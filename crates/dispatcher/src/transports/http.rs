//! HttpTransport - POST to an ntfy server with reqwest

use std::time::Duration;

use bytes::Bytes;
use contracts::{ContractError, NtfyTransport};
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::error::DispatcherError;

/// Transport that POSTs the raw message body
///
/// No content type or auth headers are added; ntfy treats the body as the
/// message text.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    name: String,
    client: Client,
}

impl HttpTransport {
    /// Create a transport with an overall request timeout
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, DispatcherError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DispatcherError::client_build(e.to_string()))?;

        Ok(Self {
            name: "http".to_string(),
            client,
        })
    }

    /// Wrap an existing client
    pub fn from_client(client: Client) -> Self {
        Self {
            name: "http".to_string(),
            client,
        }
    }
}

impl NtfyTransport for HttpTransport {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(
        name = "http_transport_post",
        skip(self, url, body),
        fields(url = %url, bytes = body.len())
    )]
    async fn post(&self, url: &Url, body: Bytes) -> Result<(), ContractError> {
        let response = self
            .client
            .post(url.clone())
            .body(body)
            .send()
            .await
            .map_err(|e| ContractError::transport(url.as_str(), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContractError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        debug!(status = status.as_u16(), "ntfy server accepted message");
        Ok(())
    }
}
