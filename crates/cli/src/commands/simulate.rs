//! `simulate` command implementation.

use std::sync::PoisonError;

use anyhow::Result;
use contracts::{EventBus, EventName, EventPayload};
use tracing::{info, instrument};

use crate::bridge::{load_config, Bridge, CliTransport};
use crate::cli::SimulateArgs;
use crate::error::CliError;

/// Execute the `simulate` command
#[instrument(name = "simulate", skip(args), fields(count = args.count, dry_run = args.dry_run))]
pub async fn run_simulate(args: &SimulateArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let timeout = config.ntfy.timeout_secs;
    let bridge = Bridge::wire(&config, CliTransport::new(args.dry_run, timeout)?);

    for i in 0..args.count {
        info!(event = i + 1, "Firing high score event");
        bridge.bus.publish(
            EventName::HighScoreEntryFinished.as_str(),
            EventPayload::None,
        );
    }

    bridge.dispatcher.flush().await;

    let metrics = bridge.dispatcher.metrics();
    let state = bridge
        .trigger
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .state();

    println!("Simulation finished");
    println!("  Events:     {}", args.count);
    println!("  Trigger:    {:?}", state);
    println!("  Dispatched: {}", metrics.dispatched);
    println!("  Published:  {}", metrics.published);
    println!("  Failed:     {}", metrics.failed);
    println!("  Rejected:   {}", metrics.rejected);

    if metrics.failed > 0 {
        return Err(CliError::Delivery {
            failed: metrics.failed,
            dispatched: metrics.dispatched,
        }
        .into());
    }
    Ok(())
}
