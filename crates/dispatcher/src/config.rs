//! DispatcherConfig - server and topic, last write wins

use contracts::{ContractError, NotificationRequest};
use url::Url;

/// Public ntfy instance used until a server is configured
pub const DEFAULT_SERVER: &str = "https://ntfy.sh/";

/// Mutable dispatcher configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Server base URL
    pub server: String,

    /// Topic; unset until configured
    pub topic: Option<String>,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            topic: None,
        }
    }
}

impl DispatcherConfig {
    /// Store the topic verbatim
    pub fn set_topic(&mut self, topic: &str) {
        self.topic = Some(topic.to_string());
    }

    /// Store the server URL; empty input is ignored
    pub fn set_server(&mut self, url: &str) {
        if !url.is_empty() {
            self.server = url.to_string();
        }
    }

    /// Configured topic, treating an empty string as unset
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref().filter(|t| !t.is_empty())
    }

    /// Resolve the POST address: the topic joined onto the server base URL
    ///
    /// Uses RFC 3986 reference resolution, so a base path without a
    /// trailing slash has its last segment replaced.
    ///
    /// # Errors
    /// `Configuration` if the topic is unset/empty or the server is not a URL.
    pub fn request_url(&self) -> Result<Url, ContractError> {
        let topic = self.topic().ok_or_else(|| {
            ContractError::configuration("ntfy topic not set, call set_topic before publishing")
        })?;

        let base = Url::parse(&self.server).map_err(|e| {
            ContractError::configuration(format!("invalid ntfy server '{}': {e}", self.server))
        })?;

        base.join(topic).map_err(|e| {
            ContractError::configuration(format!(
                "cannot join topic '{topic}' onto '{}': {e}",
                self.server
            ))
        })
    }

    /// Build the request for `body` together with its resolved address
    pub fn request(&self, body: &str) -> Result<(Url, NotificationRequest), ContractError> {
        let url = self.request_url()?;
        let topic = self.topic().unwrap_or_default();
        Ok((url, NotificationRequest::new(topic, body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_topic(server: Option<&str>, topic: &str) -> DispatcherConfig {
        let mut config = DispatcherConfig::default();
        if let Some(server) = server {
            config.set_server(server);
        }
        config.set_topic(topic);
        config
    }

    #[test]
    fn test_default_server() {
        let config = DispatcherConfig::default();
        assert_eq!(config.server, "https://ntfy.sh/");
        assert_eq!(config.topic(), None);
    }

    #[test]
    fn test_resolve_default_server() {
        let url = with_topic(None, "mypager").request_url().unwrap();
        assert_eq!(url.as_str(), "https://ntfy.sh/mypager");
    }

    #[test]
    fn test_resolve_server_without_trailing_slash() {
        let url = with_topic(Some("https://ntfy.example.com"), "alerts")
            .request_url()
            .unwrap();
        assert_eq!(url.as_str(), "https://ntfy.example.com/alerts");
    }

    #[test]
    fn test_resolve_server_with_base_path() {
        let config = with_topic(Some("http://10.0.0.2:8080/ntfy/"), "pinball");
        assert_eq!(
            config.request_url().unwrap().as_str(),
            "http://10.0.0.2:8080/ntfy/pinball"
        );

        // Last segment is replaced without a trailing slash
        let config = with_topic(Some("http://10.0.0.2:8080/ntfy"), "pinball");
        assert_eq!(
            config.request_url().unwrap().as_str(),
            "http://10.0.0.2:8080/pinball"
        );
    }

    #[test]
    fn test_resolution_encodes_only_what_it_must() {
        let url = with_topic(None, "high score").request_url().unwrap();
        assert_eq!(url.as_str(), "https://ntfy.sh/high%20score");

        let url = with_topic(None, "p3_alerts-1").request_url().unwrap();
        assert_eq!(url.as_str(), "https://ntfy.sh/p3_alerts-1");
    }

    #[test]
    fn test_missing_topic_is_configuration_error() {
        let err = DispatcherConfig::default().request_url().unwrap_err();
        assert!(err.is_configuration());

        let err = with_topic(None, "").request_url().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_invalid_server_is_configuration_error() {
        let err = with_topic(Some("not a url"), "t").request_url().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_set_server_empty_keeps_previous() {
        let mut config = DispatcherConfig::default();
        config.set_server("");
        assert_eq!(config.server, DEFAULT_SERVER);

        config.set_server("https://push.example.org/");
        config.set_server("");
        assert_eq!(config.server, "https://push.example.org/");
    }

    #[test]
    fn test_set_topic_is_verbatim_and_overwrites() {
        let mut config = DispatcherConfig::default();
        config.set_topic("  First ");
        assert_eq!(config.topic(), Some("  First "));
        config.set_topic("second");
        assert_eq!(config.topic(), Some("second"));
    }

    #[test]
    fn test_request_carries_topic_and_body() {
        let (url, request) = with_topic(None, "mypager").request("hello").unwrap();
        assert_eq!(url.as_str(), "https://ntfy.sh/mypager");
        assert_eq!(request.topic, "mypager");
        assert_eq!(request.body, "hello");
    }
}
