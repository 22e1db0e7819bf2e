//! GuiEventNotifier - a Notifier that talks over the event bus
//!
//! Used when the dispatcher lives in the GUI layer and only listens for
//! events; see `dispatcher::bind_gui_events` for the receiving side.

use contracts::{ContractError, EventBus, EventName, EventPayload, Notifier};
use tracing::trace;

/// Forwards notifier calls as GUI-layer events
pub struct GuiEventNotifier<B> {
    bus: B,
}

impl<B: EventBus> GuiEventNotifier<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    fn post(&self, name: EventName, text: &str) {
        trace!(event = %name, "Posting event to GUI layer");
        self.bus.publish(name.as_str(), EventPayload::text(text));
    }
}

impl<B: EventBus> Notifier for GuiEventNotifier<B> {
    fn set_topic(&self, topic: &str) {
        self.post(EventName::SetNtfyTopic, topic);
    }

    fn set_server(&self, url: &str) {
        self.post(EventName::SetNtfyServer, url);
    }

    /// Fire-and-forget: whether anyone handled the event is not observable here
    fn publish(&self, message: &str) -> Result<(), ContractError> {
        self.post(EventName::SendNtfy, message);
        Ok(())
    }
}
