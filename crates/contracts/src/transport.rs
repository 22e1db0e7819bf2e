//! NtfyTransport trait - how a resolved request reaches the server

use bytes::Bytes;
use url::Url;

use crate::ContractError;

/// Delivery of a single POST
///
/// All transport implementations must implement this trait.
#[trait_variant::make(NtfyTransport: Send)]
pub trait LocalNtfyTransport {
    /// Transport name (used for logging)
    fn name(&self) -> &str;

    /// POST `body` to `url`
    ///
    /// # Errors
    /// `Transport` on network failure, `HttpStatus` on a non-2xx answer.
    async fn post(&self, url: &Url, body: Bytes) -> Result<(), ContractError>;
}
