//! `send` command implementation.

use anyhow::{Context, Result};
use config_loader::BridgeConfig;
use contracts::Notifier;
use tracing::info;

use crate::bridge::{build_dispatcher, load_config, CliTransport};
use crate::cli::SendArgs;
use crate::error::CliError;

/// Execute the `send` command
pub async fn run_send(args: &SendArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => BridgeConfig::default(),
    };

    let timeout = args.timeout.or(config.ntfy.timeout_secs);
    let transport =
        CliTransport::new(args.dry_run, timeout).context("Failed to create transport")?;

    let dispatcher = build_dispatcher(
        transport,
        args.server.as_deref().or(config.ntfy.server.as_deref()),
        args.topic.as_deref().or(config.ntfy.topic.as_deref()),
    );

    dispatcher
        .publish(&args.message)
        .context("Notification not sent")?;
    dispatcher.flush().await;

    let metrics = dispatcher.metrics();
    if metrics.failed > 0 {
        return Err(CliError::Delivery {
            failed: metrics.failed,
            dispatched: metrics.dispatched,
        }
        .into());
    }

    let config = dispatcher.config();
    info!(
        server = %config.server,
        topic = config.topic.as_deref().unwrap_or_default(),
        dry_run = args.dry_run,
        "Notification sent"
    );
    println!("✓ Notification sent");
    Ok(())
}
