//! Composition root: builds the dispatcher, bus and trigger from config.

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use bytes::Bytes;
use config_loader::{BridgeConfig, ConfigLoader};
use contracts::{ContractError, LocalEventBus, MemoryAttributeStore, Notifier, NtfyTransport};
use dispatcher::{bind_gui_events, DispatcherError, HttpTransport, LogTransport, NtfyDispatcher};
use highscore_trigger::{GuiEventNotifier, HighScoreTrigger};
use tracing::debug;
use url::Url;

use crate::error::CliError;

/// Priority of the GUI-side ntfy handlers on the bus
const GUI_PRIORITY: i32 = 0;
/// Priority of the high score mode handler
const MODE_PRIORITY: i32 = 10;

/// Transport chosen at runtime
pub enum CliTransport {
    Http(HttpTransport),
    Log(LogTransport),
}

impl CliTransport {
    pub fn new(dry_run: bool, timeout_secs: Option<u64>) -> Result<Self, DispatcherError> {
        if dry_run {
            return Ok(Self::Log(LogTransport::new("dry_run")));
        }
        let timeout = timeout_secs.map(Duration::from_secs);
        Ok(Self::Http(HttpTransport::with_timeout(timeout)?))
    }
}

impl NtfyTransport for CliTransport {
    fn name(&self) -> &str {
        match self {
            Self::Http(t) => t.name(),
            Self::Log(t) => t.name(),
        }
    }

    async fn post(&self, url: &Url, body: Bytes) -> Result<(), ContractError> {
        match self {
            Self::Http(t) => t.post(url, body).await,
            Self::Log(t) => t.post(url, body).await,
        }
    }
}

pub type CliDispatcher = NtfyDispatcher<CliTransport>;

type SharedTrigger =
    Arc<Mutex<HighScoreTrigger<MemoryAttributeStore, GuiEventNotifier<Arc<LocalEventBus>>>>>;

/// Load a configuration file, failing early if it does not exist
pub fn load_config(path: &Path) -> Result<BridgeConfig> {
    if !path.exists() {
        return Err(CliError::config_not_found(path.display().to_string()).into());
    }
    ConfigLoader::load_from_path(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

/// Dispatcher with config values applied through the public setters
pub fn build_dispatcher(
    transport: CliTransport,
    server: Option<&str>,
    topic: Option<&str>,
) -> CliDispatcher {
    let dispatcher = NtfyDispatcher::new(transport);
    if let Some(server) = server {
        dispatcher.set_server(server);
    }
    if let Some(topic) = topic {
        dispatcher.set_topic(topic);
    }
    dispatcher
}

/// Full event path: trigger -> bus -> GUI handlers -> dispatcher
pub struct Bridge {
    pub bus: Arc<LocalEventBus>,
    pub dispatcher: Arc<CliDispatcher>,
    pub trigger: SharedTrigger,
}

impl Bridge {
    /// Wire the bridge; the dispatcher starts unconfigured and learns its
    /// topic from the trigger's first high score
    pub fn wire(config: &BridgeConfig, transport: CliTransport) -> Self {
        let bus = Arc::new(LocalEventBus::new());
        let dispatcher = Arc::new(NtfyDispatcher::new(transport));
        bind_gui_events(Arc::clone(&dispatcher), bus.as_ref(), GUI_PRIORITY);

        let trigger = HighScoreTrigger::new(
            config.attribute_store(),
            GuiEventNotifier::new(Arc::clone(&bus)),
        );
        let trigger = highscore_trigger::register(trigger, bus.as_ref(), MODE_PRIORITY);

        debug!("Bridge wired");
        Self {
            bus,
            dispatcher,
            trigger,
        }
    }
}
