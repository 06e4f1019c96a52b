//! ButtonVerse - catalog of Tailwind button styles
//!
//! Browse, search and copy hundreds of generated button styles from the terminal,
//! or ask the AI generator for a new one.

use buttonverse::branding::APP_DESCRIPTION;
use buttonverse::cli::{
    CategoriesArgs, CliResult, ConfigArgs, GenerateArgs, ListArgs, ShowArgs,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// ButtonVerse - catalog of Tailwind button styles
#[derive(Parser, Debug)]
#[command(author, version, about = APP_DESCRIPTION, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List styles, optionally filtered by category and search text
    List(ListArgs),
    /// Show a single style by id
    Show(ShowArgs),
    /// List categories with style counts
    Categories(CategoriesArgs),
    /// Generate a new style from a text description
    Generate(GenerateArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Command::List(args) => args.execute(),
            Command::Show(args) => args.execute(),
            Command::Categories(args) => args.execute(),
            Command::Generate(args) => args.execute(),
            Command::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays clean
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
