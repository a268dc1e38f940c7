//! Process command - extract fields from a single receipt file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use makbuz_core::models::config::MakbuzConfig;
use makbuz_core::models::receipt::{FileResult, ReceiptRecord};
use makbuz_core::receipt::parse_receipt;
use makbuz_core::TesseractEngine;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (receipt image, or .txt with an OCR transcript)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Skip image preprocessing before OCR
    #[arg(long)]
    no_preprocess: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON per-file result
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    pb.set_message("Reading input...");
    pb.set_position(10);

    let text = read_transcript(&args.input, &config, args.no_preprocess)?;
    if text.trim().is_empty() {
        anyhow::bail!("No text detected in {}", args.input.display());
    }

    pb.set_message("Extracting receipt fields...");
    pb.set_position(70);

    let parsed = parse_receipt(&text);

    pb.set_position(100);
    pb.finish_with_message("Done");

    let filename = args
        .input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("receipt")
        .to_string();

    let output = match args.format {
        OutputFormat::Json => {
            let result = FileResult::Parsed {
                filename,
                ocr_text: text,
                parsed,
            };
            serde_json::to_string_pretty(&result)?
        }
        OutputFormat::Text => format_text(&filename, &parsed),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<MakbuzConfig> {
    match config_path {
        Some(path) => Ok(MakbuzConfig::from_file(Path::new(path))?),
        None => Ok(MakbuzConfig::default()),
    }
}

/// Read OCR text for a file: images go through preprocessing and the
/// Tesseract engine, `.txt` inputs are replayed transcripts.
pub(crate) fn read_transcript(
    path: &Path,
    config: &MakbuzConfig,
    no_preprocess: bool,
) -> anyhow::Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "txt" => Ok(fs::read_to_string(path)?),
        "png" | "jpg" | "jpeg" | "webp" | "tiff" | "tif" | "bmp" => {
            let engine =
                TesseractEngine::new(config.ocr.clone(), config.preprocess.clone());

            if !engine.available() {
                anyhow::bail!(
                    "OCR engine '{}' is not available. Install Tesseract or point \
                     ocr.tesseract_cmd at the executable.",
                    config.ocr.tesseract_cmd
                );
            }

            if no_preprocess {
                Ok(engine.recognize_file(path)?)
            } else {
                let image = image::open(path)?;
                Ok(engine.recognize(&image)?)
            }
        }
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    }
}

pub(crate) fn format_text(filename: &str, parsed: &ReceiptRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("File:     {}\n", filename));
    output.push_str(&format!("Merchant: {}\n", parsed.merchant));
    output.push_str(&format!("Date:     {}\n", parsed.date));
    output.push_str(&format!("Time:     {}\n", parsed.time));
    output.push_str(&format!("Total:    {}\n", parsed.total_amount));

    output
}
