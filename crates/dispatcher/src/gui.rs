//! GUI-layer event binding
//!
//! The game mode talks to the notification side through three events:
//! set topic, set server, send. Binding a [`Notifier`] to a bus makes it
//! answer those events.

use std::sync::Arc;

use contracts::{EventBus, EventFlow, EventName, EventPayload, Notifier};
use tracing::{debug, warn};

/// Subscribe `notifier` to the GUI-layer ntfy events on `bus`
///
/// Text payloads are forwarded to `set_topic`, `set_server` and `publish`.
/// Other payloads are logged and ignored. Handlers never stop propagation.
pub fn bind_gui_events<N, B>(notifier: Arc<N>, bus: &B, priority: i32)
where
    N: Notifier + 'static,
    B: EventBus + ?Sized,
{
    let topic_target = Arc::clone(&notifier);
    bus.subscribe(
        EventName::SetNtfyTopic.as_str(),
        priority,
        Arc::new(move |name: &str, payload: &EventPayload| {
            if let Some(topic) = text_payload(name, payload) {
                topic_target.set_topic(topic);
            }
            EventFlow::Continue
        }),
    );

    let server_target = Arc::clone(&notifier);
    bus.subscribe(
        EventName::SetNtfyServer.as_str(),
        priority,
        Arc::new(move |name: &str, payload: &EventPayload| {
            if let Some(server) = text_payload(name, payload) {
                server_target.set_server(server);
            }
            EventFlow::Continue
        }),
    );

    bus.subscribe(
        EventName::SendNtfy.as_str(),
        priority,
        Arc::new(move |name: &str, payload: &EventPayload| {
            if let Some(message) = text_payload(name, payload) {
                // Already logged by the notifier
                if let Err(e) = notifier.publish(message) {
                    debug!(event = name, error = %e, "Send request dropped");
                }
            }
            EventFlow::Continue
        }),
    );
}

fn text_payload<'a>(name: &str, payload: &'a EventPayload) -> Option<&'a str> {
    let text = payload.as_text();
    if text.is_none() {
        warn!(event = name, "Expected a text payload, event ignored");
    }
    text
}
