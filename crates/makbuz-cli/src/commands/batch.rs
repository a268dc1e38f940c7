//! Batch processing command for multiple receipt files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use makbuz_core::models::receipt::{BatchReport, FileResult};
use makbuz_core::receipt::parse_receipt;

use super::process::{load_config, read_transcript};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output file for the aggregated JSON report (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write a summary CSV next to the report
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Skip image preprocessing before OCR
    #[arg(long)]
    no_preprocess: bool,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(
                ext.to_lowercase().as_str(),
                "txt" | "png" | "jpg" | "jpeg" | "webp" | "tiff" | "tif" | "bmp"
            )
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    // Per-file failures become error entries; the batch never aborts.
    let mut results = Vec::with_capacity(files.len());
    for path in &files {
        let filename = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("receipt")
            .to_string();

        let result = match read_transcript(path, &config, args.no_preprocess) {
            Ok(text) => {
                debug!("extracted {} characters from {}", text.len(), path.display());
                let parsed = parse_receipt(&text);
                FileResult::Parsed {
                    filename,
                    ocr_text: text,
                    parsed,
                }
            }
            Err(e) => {
                warn!("Failed to process {}: {}", path.display(), e);
                FileResult::Failed {
                    filename,
                    error: e.to_string(),
                }
            }
        };

        results.push(result);
        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    let parsed_count = results.iter().filter(|r| r.is_parsed()).count();
    let failed_count = results.len() - parsed_count;

    if let Some(summary_path) = &args.summary {
        write_summary(summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let report = BatchReport::new(results);
    let json = serde_json::to_string_pretty(&report)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &json)?;
        println!(
            "{} Report written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", json);
    }

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        report.ocr_results.len(),
        start.elapsed()
    );
    println!(
        "   {} parsed, {} failed",
        style(parsed_count).green(),
        style(failed_count).red()
    );

    Ok(())
}

fn write_summary(path: &PathBuf, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "merchant",
        "date",
        "time",
        "total_amount",
        "error",
    ])?;

    for result in results {
        match result {
            FileResult::Parsed {
                filename, parsed, ..
            } => {
                wtr.write_record([
                    filename.as_str(),
                    "parsed",
                    &parsed.merchant,
                    &parsed.date,
                    &parsed.time,
                    &parsed.total_amount,
                    "",
                ])?;
            }
            FileResult::Failed { filename, error } => {
                wtr.write_record([filename.as_str(), "error", "", "", "", "", error])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
