//! # Dispatcher
//!
//! Notification dispatch to an ntfy server.
//!
//! Responsibilities:
//! - Hold the mutable server/topic configuration
//! - Reject publishes with no topic before any I/O
//! - POST each message on a detached task, logging failures
//! - Bind to the GUI-layer events of a host event bus

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod gui;
pub mod metrics;
pub mod transports;

pub use config::{DispatcherConfig, DEFAULT_SERVER};
pub use contracts::{Notifier, NtfyTransport};
pub use dispatcher::NtfyDispatcher;
pub use error::DispatcherError;
pub use gui::bind_gui_events;
pub use metrics::{DispatchMetrics, MetricsSnapshot};
pub use transports::{HttpTransport, LogTransport};
