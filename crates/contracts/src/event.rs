//! Event names and payloads exchanged over the host event bus.

use std::fmt;
use std::str::FromStr;

use crate::ContractError;

/// Events this workspace produces or consumes
///
/// The string form is what the host bus sees; it must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    /// Player finished entering initials for a new high score
    HighScoreEntryFinished,
    /// GUI layer: send a notification, payload is the message text
    SendNtfy,
    /// GUI layer: set the topic, payload is the topic text
    SetNtfyTopic,
    /// GUI layer: set the server base URL, payload is the URL text
    SetNtfyServer,
}

impl EventName {
    pub const ALL: [EventName; 4] = [
        EventName::HighScoreEntryFinished,
        EventName::SendNtfy,
        EventName::SetNtfyTopic,
        EventName::SetNtfyServer,
    ];

    /// Wire name used by the host event bus
    pub const fn as_str(self) -> &'static str {
        match self {
            EventName::HighScoreEntryFinished => "Evt_HighScoreEntryFinished",
            EventName::SendNtfy => "Evt_SendNtfyEvent",
            EventName::SetNtfyTopic => "Evt_SetNtfyTopic",
            EventName::SetNtfyServer => "Evt_SetNtfyServer",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventName {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ContractError::UnknownEvent {
                name: s.to_string(),
            })
    }
}

/// Opaque event payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EventPayload {
    #[default]
    None,
    Text(String),
}

impl EventPayload {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Text content, if the payload carries any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            EventPayload::Text(text) => Some(text),
            EventPayload::None => None,
        }
    }
}

/// What the bus should do after a handler ran
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventFlow {
    /// Keep dispatching to lower-priority handlers
    #[default]
    Continue,
    /// Stop propagation of this event
    Stop,
}
