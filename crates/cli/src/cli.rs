//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// p3-ntfy - push P3 high scores to an ntfy topic
#[derive(Parser, Debug)]
#[command(
    name = "p3-ntfy",
    author,
    version,
    about = "Publish P3 pinball high score notifications to ntfy",
    long_about = "Bridges P3 high score events to an ntfy publish/subscribe server.\n\n\
                  Reads the ntfy topic, server and game attributes from a configuration \n\
                  file and posts a short text message per high score."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "P3_NTFY_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "P3_NTFY_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    /// Expose Prometheus metrics on this port
    #[arg(long, global = true, env = "P3_NTFY_METRICS_PORT")]
    pub metrics_port: Option<u16>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Publish a single message
    Send(SendArgs),

    /// Fire high score events through the trigger and dispatcher
    Simulate(SimulateArgs),

    /// Validate configuration file without sending anything
    Validate(ValidateArgs),
}

/// Arguments for the `send` command
#[derive(Parser, Debug, Clone)]
pub struct SendArgs {
    /// Message text
    pub message: String,

    /// Configuration file (TOML or JSON); flags override its values
    #[arg(short, long, env = "P3_NTFY_CONFIG")]
    pub config: Option<PathBuf>,

    /// ntfy topic
    #[arg(long, env = "P3_NTFY_TOPIC")]
    pub topic: Option<String>,

    /// ntfy server base URL
    #[arg(long, env = "P3_NTFY_SERVER")]
    pub server: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Log the request instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `simulate` command
#[derive(Parser, Debug, Clone)]
pub struct SimulateArgs {
    /// Configuration file providing the game attributes
    #[arg(
        short,
        long,
        default_value = "p3-ntfy.toml",
        env = "P3_NTFY_CONFIG"
    )]
    pub config: PathBuf,

    /// Number of high score events to fire
    #[arg(long, default_value = "1")]
    pub count: u32,

    /// Log requests instead of sending them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, default_value = "p3-ntfy.toml")]
    pub config: PathBuf,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => observability::LogFormat::Json,
            LogFormat::Pretty => observability::LogFormat::Pretty,
            LogFormat::Compact => observability::LogFormat::Compact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_send() {
        let cli = Cli::try_parse_from([
            "p3-ntfy",
            "send",
            "hello",
            "--topic",
            "mypager",
            "--dry-run",
        ])
        .unwrap();

        match cli.command {
            Commands::Send(args) => {
                assert_eq!(args.message, "hello");
                assert_eq!(args.topic.as_deref(), Some("mypager"));
                assert!(args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_simulate_defaults() {
        let cli = Cli::try_parse_from(["p3-ntfy", "simulate"]).unwrap();
        match cli.command {
            Commands::Simulate(args) => {
                assert_eq!(args.count, 1);
                assert!(!args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
