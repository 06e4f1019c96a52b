//! CLI command handlers for ButtonVerse.
//!
//! This module provides headless, scriptable access to the style library and the
//! generator for automation and testing.

pub mod categories;
pub mod common;
pub mod config;
pub mod generate;
pub mod list;
pub mod show;

// Re-export types used by main.rs and tests
pub use categories::CategoriesArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
pub use list::ListArgs;
pub use show::ShowArgs;
