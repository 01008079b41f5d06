//! CLI application for renaming tax invoice PDFs.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use commands::{config, rename};

/// Rename tax invoice PDFs after their invoice reference and serial number
#[derive(Parser)]
#[command(name = "fakren")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename a batch of invoice PDFs
    Rename(rename::RenameArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    quiet_pdf_panics();

    match cli.command {
        Commands::Rename(args) => rename::run(args, cli.config.as_deref()).await,
        Commands::Config(args) => config::run(args, cli.config.as_deref()).await,
    }
}

/// Crates whose panics the PDF extractor catches and reports per file.
const PDF_CRATES: &[&str] = &[
    "pdf-extract-",
    "lopdf-",
    "adobe-cmap-parser-",
    "type1-encoding-parser-",
    "cff-parser-",
];

/// Route panics raised inside the PDF crates to the debug log instead of
/// stderr. Every other panic goes to the default hook.
fn quiet_pdf_panics() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| match info.location() {
        Some(location) if from_pdf_crate(location.file()) => {
            debug!("Text extraction panicked: {}", info);
        }
        _ => default_hook(info),
    }));
}

fn from_pdf_crate(file: &str) -> bool {
    PDF_CRATES.iter().any(|name| file.contains(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pdf_crate() {
        assert!(from_pdf_crate(
            "/home/u/.cargo/registry/src/index.crates.io-6f17d22bba15001f/pdf-extract-0.8.2/src/lib.rs"
        ));
        assert!(from_pdf_crate(
            "C:\\Users\\u\\.cargo\\registry\\src\\lopdf-0.35.0\\src\\parser.rs"
        ));
        assert!(!from_pdf_crate("crates/fakren-core/src/batch/mod.rs"));
        assert!(!from_pdf_crate("/rustc/library/core/src/option.rs"));
    }
}
