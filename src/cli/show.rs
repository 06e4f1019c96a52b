//! `show` command: details and JSX snippet for one style.

use crate::cli::common::{load_library, print_json, CliError, CliResult};
use crate::models::StyleRecord;
use crate::snippet::{jsx_snippet, label};
use clap::Args;
use serde::Serialize;

/// Show a single style by id
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Style id (e.g. "gen-0-Blue-Pill", "grad-sunset")
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the JSX snippet (added as a `jsx` field with --json)
    #[arg(long)]
    pub jsx: bool,
}

#[derive(Debug, Serialize)]
struct ShowResponse<'a> {
    #[serde(flatten)]
    style: &'a StyleRecord,
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    jsx: Option<String>,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let library = load_library()?;
        let style = library
            .get(&self.id)
            .ok_or_else(|| CliError::validation(format!("Style not found: {}", self.id)))?;

        if self.json {
            return print_json(&ShowResponse {
                style,
                label: label(style),
                jsx: self.jsx.then(|| jsx_snippet(style)),
            });
        }

        if self.jsx {
            println!("{}", jsx_snippet(style));
            return Ok(());
        }

        println!("{}", style.name);
        println!();
        println!("  ID:       {}", style.id);
        println!("  Category: {}", style.category.display_name());
        println!("  Tags:     {}", style.tags.join(", "));
        println!("  Label:    {}", label(style));
        println!("  Classes:  {}", style.classes);

        Ok(())
    }
}
