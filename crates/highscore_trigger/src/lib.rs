//! # High Score Trigger
//!
//! Game-side half of the notification bridge.
//!
//! Responsibilities:
//! - Listen for `Evt_HighScoreEntryFinished`
//! - Push topic/server from game attributes into a [`Notifier`] once
//! - Publish "New P3 highscore on <game>" on every high score

mod gui_notifier;
mod trigger;

pub use contracts::{AttributeStore, EventFlow, Notifier};
pub use gui_notifier::GuiEventNotifier;
pub use trigger::{register, HighScoreTrigger, TriggerState, MESSAGE_PREFIX};
