//! NtfyDispatcher - configure-then-publish notification dispatch

use std::mem;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Instant;

use bytes::Bytes;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

use contracts::{ContractError, Notifier, NtfyTransport};
use observability::FailureKind;

use crate::config::DispatcherConfig;
use crate::metrics::{DispatchMetrics, MetricsSnapshot};

/// Notification dispatcher
///
/// One instance is owned by the composition root and shared behind `Arc`.
/// Each publish runs on its own detached tokio task; nothing orders two
/// publishes against each other.
pub struct NtfyDispatcher<T> {
    config: RwLock<DispatcherConfig>,
    transport: Arc<T>,
    metrics: Arc<DispatchMetrics>,
    in_flight: Mutex<Vec<JoinHandle<()>>>,
}

impl<T> NtfyDispatcher<T>
where
    T: NtfyTransport + Send + Sync + 'static,
{
    /// Create a dispatcher pointing at the public instance with no topic
    pub fn new(transport: T) -> Self {
        Self::with_config(DispatcherConfig::default(), transport)
    }

    /// Create a dispatcher with an initial configuration
    pub fn with_config(config: DispatcherConfig, transport: T) -> Self {
        Self {
            config: RwLock::new(config),
            transport: Arc::new(transport),
            metrics: Arc::new(DispatchMetrics::new()),
            in_flight: Mutex::new(Vec::new()),
        }
    }

    /// Current configuration
    pub fn config(&self) -> DispatcherConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get metrics snapshot
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Number of publish tasks not yet finished
    pub fn in_flight(&self) -> usize {
        let tasks = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        tasks.iter().filter(|t| !t.is_finished()).count()
    }

    /// Wait for every publish started so far to finish
    #[instrument(name = "ntfy_dispatcher_flush", skip(self))]
    pub async fn flush(&self) {
        loop {
            let tasks = {
                let mut guard = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
                mem::take(&mut *guard)
            };
            if tasks.is_empty() {
                break;
            }

            debug!(tasks = tasks.len(), "Waiting for in-flight notifications");
            for task in tasks {
                if let Err(e) = task.await {
                    error!(error = ?e, "Notification task panicked");
                }
            }
        }
    }

    fn reject(&self, err: ContractError) -> ContractError {
        self.metrics.inc_rejected_count();
        observability::record_notification_rejected();
        warn!(error = %err, "Notification not sent");
        err
    }

    fn spawn_delivery(&self, url: Url, body: Bytes) -> Result<(), ContractError> {
        let runtime = Handle::try_current().map_err(|e| {
            self.metrics.inc_failed_count();
            observability::record_notification_failed(FailureKind::Runtime);
            error!(url = %url, error = %e, "No async runtime to send notification on");
            ContractError::transport(url.as_str(), e.to_string())
        })?;

        let transport = Arc::clone(&self.transport);
        let metrics = Arc::clone(&self.metrics);

        metrics.inc_dispatched_count();
        observability::record_notification_dispatched(transport.name());

        let task = runtime.spawn(deliver(transport, metrics, url, body));

        let mut tasks = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        tasks.retain(|t| !t.is_finished());
        tasks.push(task);
        Ok(())
    }
}

/// Background half of a publish: send, then route the outcome to logs
async fn deliver<T>(transport: Arc<T>, metrics: Arc<DispatchMetrics>, url: Url, body: Bytes)
where
    T: NtfyTransport + Send + Sync,
{
    let started = Instant::now();

    match transport.post(&url, body).await {
        Ok(()) => {
            metrics.inc_published_count();
            observability::record_notification_delivered(
                started.elapsed().as_secs_f64() * 1000.0,
            );
            info!(url = %url, "Notification delivered");
        }
        Err(e) => {
            metrics.inc_failed_count();
            let kind = match e {
                ContractError::HttpStatus { .. } => FailureKind::Status,
                _ => FailureKind::Network,
            };
            observability::record_notification_failed(kind);
            // Best effort: no retry
            error!(url = %url, transport = transport.name(), error = %e, "Notification failed");
        }
    }
}

impl<T> Notifier for NtfyDispatcher<T>
where
    T: NtfyTransport + Send + Sync + 'static,
{
    fn set_topic(&self, topic: &str) {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        config.set_topic(topic);
        debug!(topic, "ntfy topic set");
    }

    fn set_server(&self, url: &str) {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        config.set_server(url);
        debug!(server = %config.server, "ntfy server set");
    }

    #[instrument(name = "ntfy_dispatcher_publish", skip(self, message), fields(bytes = message.len()))]
    fn publish(&self, message: &str) -> Result<(), ContractError> {
        let (url, request) = self.config().request(message).map_err(|e| self.reject(e))?;
        debug!(url = %url, topic = %request.topic, "Publishing notification");
        self.spawn_delivery(url, request.payload())
    }
}
