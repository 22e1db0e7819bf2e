//! EventBus trait - host event dispatch abstraction
//!
//! The host game framework owns the real bus; this trait captures the two
//! primitives the workspace needs from it. [`LocalEventBus`] is an
//! in-process implementation used by the CLI and tests.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, trace};

use crate::{EventFlow, EventPayload};

/// Event handler callback
///
/// Receives the wire event name and its payload. Uses `Arc` so one handler
/// can be registered under several names.
pub type EventHandler = Arc<dyn Fn(&str, &EventPayload) -> EventFlow + Send + Sync>;

/// String-keyed publish/subscribe bus
pub trait EventBus: Send + Sync {
    /// Register `handler` for `name`
    ///
    /// Higher `priority` runs first.
    fn subscribe(&self, name: &str, priority: i32, handler: EventHandler);

    /// Dispatch `payload` to every handler registered for `name`
    ///
    /// Returns `Stop` if a handler halted propagation.
    fn publish(&self, name: &str, payload: EventPayload) -> EventFlow;
}

impl<B: EventBus + ?Sized> EventBus for Arc<B> {
    fn subscribe(&self, name: &str, priority: i32, handler: EventHandler) {
        (**self).subscribe(name, priority, handler)
    }

    fn publish(&self, name: &str, payload: EventPayload) -> EventFlow {
        (**self).publish(name, payload)
    }
}

struct Registration {
    priority: i32,
    seq: u64,
    handler: EventHandler,
}

#[derive(Default)]
struct Registry {
    handlers: HashMap<String, Vec<Registration>>,
    next_seq: u64,
}

/// In-process event bus
///
/// Handlers run on the publishing thread in descending priority order,
/// ties in registration order. Handlers may publish or subscribe from
/// inside a dispatch; the handler list is snapshotted first.
#[derive(Default)]
pub struct LocalEventBus {
    registry: RwLock<Registry>,
}

impl LocalEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handlers registered for `name`
    pub fn handler_count(&self, name: &str) -> usize {
        let registry = self.registry.read().unwrap_or_else(PoisonError::into_inner);
        registry.handlers.get(name).map_or(0, Vec::len)
    }

    fn snapshot(&self, name: &str) -> Vec<EventHandler> {
        let registry = self.registry.read().unwrap_or_else(PoisonError::into_inner);
        registry
            .handlers
            .get(name)
            .map(|regs| regs.iter().map(|r| Arc::clone(&r.handler)).collect())
            .unwrap_or_default()
    }
}

impl EventBus for LocalEventBus {
    fn subscribe(&self, name: &str, priority: i32, handler: EventHandler) {
        let mut registry = self.registry.write().unwrap_or_else(PoisonError::into_inner);
        let seq = registry.next_seq;
        registry.next_seq += 1;

        let regs = registry.handlers.entry(name.to_string()).or_default();
        regs.push(Registration {
            priority,
            seq,
            handler,
        });
        regs.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.seq.cmp(&b.seq)));

        debug!(event = name, priority, handlers = regs.len(), "Handler registered");
    }

    fn publish(&self, name: &str, payload: EventPayload) -> EventFlow {
        let handlers = self.snapshot(name);
        trace!(event = name, handlers = handlers.len(), "Dispatching event");

        for handler in handlers {
            if handler(name, &payload) == EventFlow::Stop {
                debug!(event = name, "Event propagation stopped");
                return EventFlow::Stop;
            }
        }
        EventFlow::Continue
    }
}
