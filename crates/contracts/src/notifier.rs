//! Notifier trait - the dispatcher interface the trigger depends on

use crate::ContractError;

/// Configure-then-publish notification dispatch
///
/// Implementations must not block the caller on network I/O. The result of
/// `publish` covers the synchronous precondition check only; delivery
/// failures are reported through logging.
pub trait Notifier: Send + Sync {
    /// Store the topic verbatim, replacing any previous value
    fn set_topic(&self, topic: &str);

    /// Store the server base URL; empty input keeps the current one
    fn set_server(&self, url: &str);

    /// Start publishing `message` to the configured topic
    ///
    /// # Errors
    /// `ContractError::Configuration` when no topic is configured.
    fn publish(&self, message: &str) -> Result<(), ContractError>;
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn set_topic(&self, topic: &str) {
        (**self).set_topic(topic)
    }

    fn set_server(&self, url: &str) {
        (**self).set_server(url)
    }

    fn publish(&self, message: &str) -> Result<(), ContractError> {
        (**self).publish(message)
    }
}
