//! `validate` command implementation.

use anyhow::{Context, Result};
use config_loader::{BridgeConfig, ConfigLoader};
use contracts::{AttributeStore, ATTR_APPLICATION_NAME, ATTR_NTFY_SERVER, ATTR_NTFY_TOPIC};
use dispatcher::DEFAULT_SERVER;
use serde::Serialize;
use tracing::info;

use crate::cli::ValidateArgs;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    config_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ConfigSummary>,
}

#[derive(Serialize)]
struct ConfigSummary {
    server: String,
    topic: String,
    application_name: String,
    attribute_count: usize,
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    info!(config = %args.config.display(), "Validating configuration");

    let result = validate_config(args);

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{}", json);
    } else {
        print_validation_result(&result);
    }

    if result.valid {
        Ok(())
    } else {
        anyhow::bail!("Configuration validation failed")
    }
}

fn validate_config(args: &ValidateArgs) -> ValidationResult {
    let config_path = args.config.display().to_string();

    if !args.config.exists() {
        return ValidationResult {
            valid: false,
            config_path,
            error: Some(format!("File not found: {}", args.config.display())),
            warnings: None,
            summary: None,
        };
    }

    match ConfigLoader::load_from_path(&args.config) {
        Ok(config) => {
            let warnings = collect_warnings(&config);
            ValidationResult {
                valid: true,
                config_path,
                error: None,
                warnings: if warnings.is_empty() {
                    None
                } else {
                    Some(warnings)
                },
                summary: Some(summarize(&config)),
            }
        }
        Err(e) => ValidationResult {
            valid: false,
            config_path,
            error: Some(e.to_string()),
            warnings: None,
            summary: None,
        },
    }
}

/// Values the trigger will actually read
fn summarize(config: &BridgeConfig) -> ConfigSummary {
    let store = config.attribute_store();
    let server = store.get_attribute(ATTR_NTFY_SERVER);

    ConfigSummary {
        server: if server.is_empty() {
            DEFAULT_SERVER.to_string()
        } else {
            server
        },
        topic: store.get_attribute(ATTR_NTFY_TOPIC),
        application_name: store.get_attribute(ATTR_APPLICATION_NAME),
        attribute_count: store.len(),
    }
}

/// Collect configuration warnings (non-fatal issues)
fn collect_warnings(config: &BridgeConfig) -> Vec<String> {
    let store = config.attribute_store();
    let mut warnings = Vec::new();

    if store.get_attribute(ATTR_NTFY_TOPIC).is_empty() {
        warnings.push("No ntfy topic configured - high scores will not be sent".to_string());
    }
    if store.get_attribute(ATTR_APPLICATION_NAME).is_empty() {
        warnings.push("No application name configured - message will omit the game".to_string());
    }

    warnings
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("✓ Configuration is valid: {}", result.config_path);

        if let Some(ref summary) = result.summary {
            println!("\n  Server: {}", summary.server);
            println!("  Topic: {}", summary.topic);
            println!("  Application: {}", summary.application_name);
            println!("  Attributes: {}", summary.attribute_count);
        }

        if let Some(ref warnings) = result.warnings {
            println!("\n⚠ Warnings:");
            for warning in warnings {
                println!("  - {}", warning);
            }
        }
    } else {
        println!("✗ Configuration is invalid: {}", result.config_path);
        if let Some(ref error) = result.error {
            println!("\n  Error: {}", error);
        }
    }
}
