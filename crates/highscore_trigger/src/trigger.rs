//! HighScoreTrigger - lazily configures the notifier, then publishes

use std::sync::{Arc, Mutex, PoisonError};

use contracts::{
    AttributeStore, EventBus, EventFlow, EventName, EventPayload, Notifier,
    ATTR_APPLICATION_NAME, ATTR_NTFY_SERVER, ATTR_NTFY_TOPIC,
};
use tracing::{debug, info, instrument, warn};

/// Text placed before the application name
pub const MESSAGE_PREFIX: &str = "New P3 highscore on ";

/// Configuration state; only ever moves forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerState {
    #[default]
    Unconfigured,
    Configured,
}

/// Reacts to finished high score entries
pub struct HighScoreTrigger<A, N> {
    attributes: A,
    notifier: N,
    state: TriggerState,
}

impl<A: AttributeStore, N: Notifier> HighScoreTrigger<A, N> {
    pub fn new(attributes: A, notifier: N) -> Self {
        Self {
            attributes,
            notifier,
            state: TriggerState::Unconfigured,
        }
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// Handle one `Evt_HighScoreEntryFinished`
    ///
    /// Always returns `Continue`; failures only show up in the log.
    #[instrument(name = "highscore_trigger_fire", skip(self), fields(state = ?self.state))]
    pub fn on_high_score_entry_finished(&mut self) -> EventFlow {
        if self.state == TriggerState::Unconfigured && !self.configure() {
            return EventFlow::Continue;
        }

        let app_name = self.attributes.get_attribute(ATTR_APPLICATION_NAME);
        let message = format!("{MESSAGE_PREFIX}{app_name}");

        match self.notifier.publish(&message) {
            Ok(()) => info!(message = %message, "High score notification dispatched"),
            // The notifier logs its own rejections
            Err(e) => debug!(error = %e, "High score notification not sent"),
        }
        EventFlow::Continue
    }

    /// Push topic and server from the attribute store
    ///
    /// Returns false, leaving the state untouched, when no topic is set.
    fn configure(&mut self) -> bool {
        let topic = self.attributes.get_attribute(ATTR_NTFY_TOPIC);
        let server = self.attributes.get_attribute(ATTR_NTFY_SERVER);

        if topic.is_empty() {
            warn!("No ntfy topic set. Aborting sending notification.");
            return false;
        }

        self.notifier.set_topic(&topic);
        // Empty server keeps the notifier's default
        if !server.is_empty() {
            self.notifier.set_server(&server);
        }

        self.state = TriggerState::Configured;
        debug!(topic = %topic, server = %server, "Notifier configured from game attributes");
        true
    }
}

/// Subscribe `trigger` to `Evt_HighScoreEntryFinished` on `bus`
///
/// Returns the shared trigger so the caller can inspect its state.
pub fn register<A, N, B>(
    trigger: HighScoreTrigger<A, N>,
    bus: &B,
    priority: i32,
) -> Arc<Mutex<HighScoreTrigger<A, N>>>
where
    A: AttributeStore + 'static,
    N: Notifier + 'static,
    B: EventBus + ?Sized,
{
    let shared = Arc::new(Mutex::new(trigger));
    let handler_trigger = Arc::clone(&shared);

    bus.subscribe(
        EventName::HighScoreEntryFinished.as_str(),
        priority,
        Arc::new(move |_name: &str, _payload: &EventPayload| {
            handler_trigger
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .on_high_score_entry_finished()
        }),
    );

    shared
}
