//! `categories` command: navigation categories with style counts.

use crate::cli::common::{load_library, print_json, CliResult};
use clap::Args;
use serde::Serialize;

/// List categories with the number of styles in each
#[derive(Debug, Clone, Args)]
pub struct CategoriesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CategoryItem {
    id: &'static str,
    name: &'static str,
    count: usize,
}

#[derive(Debug, Serialize)]
struct CategoriesResponse {
    categories: Vec<CategoryItem>,
    total: usize,
}

impl CategoriesArgs {
    /// Execute the categories command
    pub fn execute(&self) -> CliResult<()> {
        let library = load_library()?;

        let categories: Vec<CategoryItem> = library
            .category_counts()
            .into_iter()
            .map(|(category, count)| CategoryItem {
                id: category.id(),
                name: category.display_name(),
                count,
            })
            .collect();

        if self.json {
            return print_json(&CategoriesResponse {
                categories,
                total: library.len(),
            });
        }

        println!("Categories ({}):", categories.len());
        println!();
        for item in &categories {
            println!("  {:<14} {:<14} {:>5}", item.id, item.name, item.count);
        }
        println!();
        println!("Total styles: {}", library.len());

        Ok(())
    }
}
