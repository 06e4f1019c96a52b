//! `generate` command: ask the configured AI generator for a new style.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::generator::{GeminiGenerator, StyleGenerator};
use crate::snippet::jsx_snippet;
use clap::Args;

/// Generate a new style from a text description
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Description of the button (e.g. "neon cyberpunk button with glow")
    #[arg(value_name = "PROMPT")]
    pub prompt: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(CliError::validation("Prompt must not be empty"));
        }

        let config = load_config()?;
        let generator = GeminiGenerator::from_config(&config.generator)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| CliError::io(format!("Failed to start async runtime: {e}")))?;

        let style = runtime
            .block_on(generator.generate(prompt))
            .ok_or_else(|| CliError::io("Style generation failed. Run with --verbose for details."))?;

        if self.json {
            return print_json(&style);
        }

        println!("{}", style.name);
        println!();
        println!("  ID:      {}", style.id);
        println!("  Classes: {}", style.classes);
        println!();
        println!("{}", jsx_snippet(&style));

        Ok(())
    }
}
