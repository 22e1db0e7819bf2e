//! # Contracts
//!
//! Shared interface contracts between the game-side trigger and the
//! notification dispatcher. Business crates depend on this crate only,
//! never on each other.
//!
//! ## Event model
//! - Events are string-keyed on the wire so they interoperate with a host
//!   event bus; inside the workspace they are named through [`EventName`].
//! - Handlers always report an [`EventFlow`] back to the bus.

mod attribute;
mod error;
mod event;
mod event_bus;
mod notification;
mod notifier;
mod transport;

pub use attribute::*;
pub use error::*;
pub use event::*;
pub use event_bus::{EventBus, EventHandler, LocalEventBus};
pub use notification::*;
pub use notifier::Notifier;
pub use transport::{LocalNtfyTransport, NtfyTransport};
