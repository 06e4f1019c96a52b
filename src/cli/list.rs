//! `list` command: browse and search the style library.

use crate::cli::common::{load_library, print_json, CliError, CliResult};
use crate::models::{CategoryFilter, StyleRecord};
use clap::Args;
use serde::Serialize;

/// List styles, optionally filtered by category and search text
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Category id or name (e.g. "hover-fx", "FAB"); "all" for every category
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Case-insensitive text matched against name, classes and tags
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Maximum number of styles to print
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ListResponse<'a> {
    styles: Vec<&'a StyleRecord>,
    total: usize,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let category: CategoryFilter = self
            .category
            .as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;

        let library = load_library()?;
        let matches = library.filter(category, self.search.as_deref().unwrap_or_default());
        let total = matches.len();
        let styles: Vec<&StyleRecord> = match self.limit {
            Some(limit) => matches.into_iter().take(limit).collect(),
            None => matches,
        };

        if self.json {
            return print_json(&ListResponse { styles, total });
        }

        if styles.is_empty() {
            println!("No styles found.");
            return Ok(());
        }

        for style in &styles {
            println!("  {:<36} {:<12} {}", style.id, style.category.display_name(), style.name);
        }
        println!();
        println!("Showing {} of {} styles", styles.len(), total);

        Ok(())
    }
}
