//! docsync CLI - one-way markdown → Confluence sync.
//!
//! Provides commands for:
//! - `build-map`: reconcile the local page map with the remote space
//! - `push`: update or create one page from a markdown file
//! - `health`: verify credentials and target-space reachability
//! - `pdf-links`: regenerate the README's downloadable-PDF section

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildMapArgs, PdfLinksArgs, PushArgs, health};
use output::Output;

/// docsync - push local markdown docs to a Confluence space.
#[derive(Parser)]
#[command(name = "docsync", version, about)]
struct Cli {
    /// Enable verbose logging.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build or reconcile the local page map against the remote space.
    BuildMap(BuildMapArgs),
    /// Push a single markdown file to its Confluence page.
    Push(PushArgs),
    /// Check credentials and target-space reachability (read-only).
    Health,
    /// Regenerate the downloadable-PDF section of the README.
    PdfLinks(PdfLinksArgs),
}

fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::BuildMap(args) => args.execute(&output),
        Commands::Push(args) => args.execute(&output),
        Commands::Health => health::execute(&output),
        Commands::PdfLinks(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(err.exit_code());
    }
}
