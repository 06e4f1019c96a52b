//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Generator model name
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,

    /// Generator API base URL
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Generator API key
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Generator request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Custom catalog JSON file
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    catalog: CatalogOutput,
    generator: GeneratorOutput,
    web: WebOutput,
}

#[derive(Serialize, Debug)]
struct CatalogOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

#[derive(Serialize, Debug)]
struct GeneratorOutput {
    model: String,
    endpoint: String,
    api_key_set: bool,
    timeout_secs: u64,
}

#[derive(Serialize, Debug)]
struct WebOutput {
    host: String,
    port: u16,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            print_json(&ConfigOutput::from(&config))?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.model.is_none()
            && self.endpoint.is_none()
            && self.api_key.is_none()
            && self.timeout_secs.is_none()
            && self.catalog.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: \
                 --model, --endpoint, --api-key, --timeout-secs, or --catalog",
            ));
        }

        let mut config = load_config()?;

        if let Some(model) = &self.model {
            config.generator.model.clone_from(model);
        }
        if let Some(endpoint) = &self.endpoint {
            config.generator.endpoint.clone_from(endpoint);
        }
        if let Some(api_key) = &self.api_key {
            config.generator.api_key = Some(api_key.clone());
        }
        if let Some(timeout) = self.timeout_secs {
            config.generator.timeout_secs = timeout;
        }
        if let Some(path) = &self.catalog {
            crate::catalog::CatalogData::from_path(path)
                .map_err(|e| CliError::validation(format!("Invalid catalog: {e:#}")))?;
            config.catalog.path = Some(path.clone());
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

impl From<&Config> for ConfigOutput {
    fn from(config: &Config) -> Self {
        Self {
            catalog: CatalogOutput {
                path: config
                    .catalog
                    .path
                    .as_ref()
                    .map(|p| p.to_string_lossy().to_string()),
            },
            generator: GeneratorOutput {
                model: config.generator.model.clone(),
                endpoint: config.generator.endpoint.clone(),
                api_key_set: config.generator.resolve_api_key().is_some(),
                timeout_secs: config.generator.timeout_secs,
            },
            web: WebOutput {
                host: config.web.host.clone(),
                port: config.web.port,
            },
        }
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("ButtonVerse Configuration");
    println!("=========================");
    println!();

    println!("Catalog:");
    match &config.catalog.path {
        Some(path) => println!("  Path: {}", path.display()),
        None => println!("  Path: (built-in)"),
    }
    println!();

    println!("Generator:");
    println!("  Model:    {}", config.generator.model);
    println!("  Endpoint: {}", config.generator.endpoint);
    println!(
        "  API Key:  {}",
        if config.generator.resolve_api_key().is_some() {
            "(set)"
        } else {
            "(not configured)"
        }
    );
    println!("  Timeout:  {}s", config.generator.timeout_secs);
    println!();

    println!("Web:");
    println!("  Address:  {}:{}", config.web.host, config.web.port);
    println!();
}
