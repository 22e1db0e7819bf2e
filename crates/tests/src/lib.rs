//! # Integration Tests
//!
//! End-to-end tests across the workspace crates.
//!
//! Responsibilities:
//! - Local capture server standing in for ntfy
//! - Trigger -> dispatcher -> HTTP round trips
//! - GUI event path through a shared bus

pub mod capture;

#[cfg(test)]
mod contract_tests {
    use contracts::EventName;

    #[test]
    fn test_wire_event_names_are_stable() {
        let names: Vec<_> = EventName::ALL.iter().map(|n| n.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Evt_HighScoreEntryFinished",
                "Evt_SendNtfyEvent",
                "Evt_SetNtfyTopic",
                "Evt_SetNtfyServer",
            ]
        );
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::sync::{Arc, Mutex};

    use axum::http::StatusCode;
    use bytes::Bytes;
    use config_loader::{ConfigFormat, ConfigLoader};
    use contracts::{
        ContractError, EventBus, EventName, EventPayload, LocalEventBus, MemoryAttributeStore,
        Notifier, NtfyTransport, ATTR_APPLICATION_NAME, ATTR_NTFY_SERVER, ATTR_NTFY_TOPIC,
    };
    use dispatcher::{bind_gui_events, HttpTransport, NtfyDispatcher};
    use highscore_trigger::{GuiEventNotifier, HighScoreTrigger, TriggerState};
    use url::Url;

    use crate::capture::spawn_capture_server;

    fn http_transport() -> HttpTransport {
        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("client");
        HttpTransport::from_client(client)
    }

    fn attributes(topic: &str, server: &str, app: &str) -> MemoryAttributeStore {
        MemoryAttributeStore::new()
            .with(ATTR_NTFY_TOPIC, topic)
            .with(ATTR_NTFY_SERVER, server)
            .with(ATTR_APPLICATION_NAME, app)
    }

    /// Records resolved URLs without touching the network
    #[derive(Clone, Default)]
    struct RecordingTransport {
        calls: Arc<Mutex<Vec<(String, Bytes)>>>,
    }

    impl NtfyTransport for RecordingTransport {
        fn name(&self) -> &str {
            "recording"
        }

        async fn post(&self, url: &Url, body: Bytes) -> Result<(), ContractError> {
            self.calls.lock().unwrap().push((url.to_string(), body));
            Ok(())
        }
    }

    /// Default server case: no server attribute -> public instance
    #[tokio::test]
    async fn test_e2e_default_server_resolution() {
        let transport = RecordingTransport::default();
        let dispatcher = Arc::new(NtfyDispatcher::new(transport.clone()));
        let mut trigger = HighScoreTrigger::new(
            attributes("mypager", "", "SpaceQuest"),
            Arc::clone(&dispatcher),
        );

        trigger.on_high_score_entry_finished();
        dispatcher.flush().await;

        let calls = transport.calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "https://ntfy.sh/mypager");
        assert_eq!(&calls[0].1[..], b"New P3 highscore on SpaceQuest");
    }

    #[tokio::test]
    async fn test_e2e_single_post_to_server() {
        let server = spawn_capture_server(StatusCode::OK).await;
        let dispatcher = Arc::new(NtfyDispatcher::new(http_transport()));
        let mut trigger = HighScoreTrigger::new(
            attributes("mypager", &server.base_url(), "SpaceQuest"),
            Arc::clone(&dispatcher),
        );

        trigger.on_high_score_entry_finished();
        dispatcher.flush().await;

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/mypager");
        assert_eq!(requests[0].body, b"New P3 highscore on SpaceQuest");
        assert_eq!(requests[0].content_type, None);
        assert_eq!(dispatcher.metrics().published, 1);
    }

    #[tokio::test]
    async fn test_e2e_two_high_scores_configure_once() {
        let server = spawn_capture_server(StatusCode::OK).await;
        let dispatcher = Arc::new(NtfyDispatcher::new(http_transport()));
        let mut trigger = HighScoreTrigger::new(
            attributes("pinball", &server.base_url(), "Lost Temple"),
            Arc::clone(&dispatcher),
        );

        trigger.on_high_score_entry_finished();
        // Configuration is not re-read once configured
        dispatcher.set_topic("changed");
        trigger.on_high_score_entry_finished();
        dispatcher.flush().await;

        let mut paths: Vec<_> = server.requests().into_iter().map(|r| r.path).collect();
        paths.sort();
        assert_eq!(paths, vec!["/changed", "/pinball"]);
        assert_eq!(trigger.state(), TriggerState::Configured);
    }

    #[tokio::test]
    async fn test_e2e_empty_topic_sends_nothing() {
        let server = spawn_capture_server(StatusCode::OK).await;
        let dispatcher = Arc::new(NtfyDispatcher::new(http_transport()));
        let mut trigger = HighScoreTrigger::new(
            attributes("", &server.base_url(), "SpaceQuest"),
            Arc::clone(&dispatcher),
        );

        trigger.on_high_score_entry_finished();
        dispatcher.flush().await;

        assert!(server.requests().is_empty());
        assert_eq!(trigger.state(), TriggerState::Unconfigured);
        assert_eq!(dispatcher.metrics().dispatched, 0);
    }

    #[tokio::test]
    async fn test_e2e_server_error_is_logged_not_raised() {
        let server = spawn_capture_server(StatusCode::INTERNAL_SERVER_ERROR).await;
        let dispatcher = NtfyDispatcher::new(http_transport());
        dispatcher.set_server(&server.base_url());
        dispatcher.set_topic("mypager");

        assert!(dispatcher.publish("hello").is_ok());
        dispatcher.flush().await;

        assert_eq!(server.requests().len(), 1);
        let metrics = dispatcher.metrics();
        assert_eq!(metrics.failed, 1);
        assert_eq!(metrics.published, 0);
    }

    #[tokio::test]
    async fn test_e2e_unreachable_server() {
        let dispatcher = NtfyDispatcher::new(http_transport());
        dispatcher.set_server("http://127.0.0.1:9/");
        dispatcher.set_topic("mypager");

        assert!(dispatcher.publish("hello").is_ok());
        dispatcher.flush().await;

        assert_eq!(dispatcher.metrics().failed, 1);
    }

    /// Trigger and dispatcher only share the bus, as in the host framework
    #[tokio::test]
    async fn test_e2e_gui_event_path() {
        let server = spawn_capture_server(StatusCode::OK).await;
        let bus = Arc::new(LocalEventBus::new());
        let dispatcher = Arc::new(NtfyDispatcher::new(http_transport()));
        bind_gui_events(Arc::clone(&dispatcher), bus.as_ref(), 0);

        let trigger = highscore_trigger::register(
            HighScoreTrigger::new(
                attributes("mypager", &server.base_url(), "SpaceQuest"),
                GuiEventNotifier::new(Arc::clone(&bus)),
            ),
            bus.as_ref(),
            10,
        );

        let flow = bus.publish(
            EventName::HighScoreEntryFinished.as_str(),
            EventPayload::None,
        );
        dispatcher.flush().await;

        assert_eq!(flow, contracts::EventFlow::Continue);
        assert_eq!(trigger.lock().unwrap().state(), TriggerState::Configured);
        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/mypager");
        assert_eq!(requests[0].body, b"New P3 highscore on SpaceQuest");
    }

    #[tokio::test]
    async fn test_e2e_from_config_file_contents() {
        let server = spawn_capture_server(StatusCode::OK).await;
        let content = format!(
            r#"
[ntfy]
server = "{}"
topic = "from_config"

[game]
application_name = "SpaceQuest"
"#,
            server.base_url()
        );
        let config = ConfigLoader::load_from_str(&content, ConfigFormat::Toml).unwrap();

        let dispatcher = Arc::new(NtfyDispatcher::new(http_transport()));
        let mut trigger =
            HighScoreTrigger::new(config.attribute_store(), Arc::clone(&dispatcher));
        trigger.on_high_score_entry_finished();
        dispatcher.flush().await;

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/from_config");
    }
}
