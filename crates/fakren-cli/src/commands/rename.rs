//! Rename command - rename a batch of invoice PDFs.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use fakren_core::models::document::{BatchEntry, BatchReport, Outcome};
use fakren_core::naming::SlashStyle;
use fakren_core::{BatchProcessor, FakrenConfig, InputFile};

use crate::output::{deliver, Delivery, DeliveryOptions};

/// Arguments for the rename command.
#[derive(Args)]
pub struct RenameArgs {
    /// Input files or glob patterns
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Output directory for the renamed file or archive
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Only show what would be renamed
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Replace slashes in the reference with hyphens instead of full-width slashes
    #[arg(long)]
    ascii_slash: bool,

    /// Write every renamed file separately instead of packing them into an archive
    #[arg(long)]
    no_archive: bool,

    /// Replace files that already exist in the output directory
    #[arg(long)]
    overwrite: bool,

    /// Log output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also write a per-file summary CSV
    #[arg(long)]
    summary: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// One log line per file
    Text,
    /// Full batch report as JSON
    Json,
}

pub async fn run(args: RenameArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    let paths = expand_inputs(&args.inputs)?;
    if paths.is_empty() {
        anyhow::bail!("No matching files found for: {}", args.inputs.join(" "));
    }

    let files = read_inputs(&paths, config.input.max_total_bytes)?;
    let file_count = files.len();

    let progress = progress_bar(file_count, matches!(args.format, OutputFormat::Text));
    let processor = build_processor(&config, &args);

    let pb = progress.clone();
    let report = tokio::task::spawn_blocking(move || {
        processor.process(files.into_iter().inspect(|file| {
            pb.set_message(file.name.clone());
            pb.inc(1);
        }))
    })
    .await?;
    progress.finish_and_clear();

    match args.format {
        OutputFormat::Text => print_log(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if let Some(ref summary_path) = args.summary {
        write_summary(summary_path, &report.entries)?;
        debug!("Summary written to {}", summary_path.display());
    }

    let options = DeliveryOptions {
        loose: args.no_archive,
        overwrite: args.overwrite,
    };
    let delivery = deliver(&report.outputs, &args.output_dir, &config.output, options)?;

    if matches!(args.format, OutputFormat::Text) {
        print_delivery(&delivery, &report);
        println!(
            "{} Processed {} files in {:?}",
            style("ℹ").blue(),
            file_count,
            start.elapsed()
        );
    }

    Ok(())
}

fn build_processor(config: &FakrenConfig, args: &RenameArgs) -> BatchProcessor {
    let mut processor = BatchProcessor::from_config(config).with_dry_run(args.dry_run);
    if args.ascii_slash {
        processor = processor.with_slash_style(SlashStyle::Hyphen);
    }
    processor
}

/// Expand each argument as a glob pattern, keeping argument order.
fn expand_inputs(inputs: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for pattern in inputs {
        let before = paths.len();
        paths.extend(glob(pattern)?.filter_map(|r| r.ok()).filter(|p| p.is_file()));
        if paths.len() == before {
            warn!("No files match {}", pattern);
        }
    }
    Ok(paths)
}

/// Read every file, enforcing the combined size limit before anything is processed.
fn read_inputs(paths: &[PathBuf], max_total_bytes: u64) -> anyhow::Result<Vec<InputFile>> {
    let total: u64 = paths
        .iter()
        .map(|p| fs::metadata(p).map(|m| m.len()))
        .sum::<std::io::Result<u64>>()?;

    if total > max_total_bytes {
        anyhow::bail!(
            "Input too large: {} bytes exceeds the limit of {} bytes",
            total,
            max_total_bytes
        );
    }

    paths
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok(InputFile::new(name, fs::read(path)?))
        })
        .collect()
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible || len < 2 {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(template) =
        ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(template.progress_chars("=>-"));
    }
    pb
}

fn print_log(report: &BatchReport) {
    for entry in &report.entries {
        println!("{}", entry.log_line());
        if let Some(ref err) = entry.extraction_error {
            println!("   {}", style(err).dim());
        }
    }
}

fn print_delivery(delivery: &Delivery, report: &BatchReport) {
    println!();
    match delivery {
        Delivery::Nothing if report.dry_run => {
            println!(
                "{} Dry run: {} of {} files would be renamed",
                style("ℹ").blue(),
                report.renamed_count(),
                report.entries.len()
            );
        }
        Delivery::Nothing => {
            println!("{} No files renamed", style("⚠").yellow());
        }
        Delivery::Single(path) => {
            println!("{} Wrote {}", style("✓").green(), path.display());
        }
        Delivery::Archive { path, entries } => {
            println!(
                "{} Wrote {} files to {}",
                style("✓").green(),
                entries,
                path.display()
            );
        }
        Delivery::Loose(paths) => {
            println!(
                "{} Wrote {} files to {}",
                style("✓").green(),
                paths.len(),
                paths
                    .first()
                    .and_then(|p| p.parent())
                    .unwrap_or_else(|| Path::new("."))
                    .display()
            );
        }
    }
}

fn write_summary(path: &Path, entries: &[BatchEntry]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["file", "status", "final_name", "reference", "serial", "detail"])?;

    for entry in entries {
        let final_name = match &entry.outcome {
            Outcome::Renamed { final_name } => final_name.as_str(),
            _ => "",
        };
        let log_line = entry.log_line();
        let detail = entry.extraction_error.as_deref().unwrap_or(&log_line);

        wtr.write_record([
            entry.original.as_str(),
            entry.outcome.status(),
            final_name,
            entry.reference.as_deref().unwrap_or(""),
            entry.serial.as_deref().unwrap_or(""),
            detail,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
