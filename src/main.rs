// src/main.rs
mod extractors;
mod pdf;
mod processor;
mod storage;
mod utils;

use clap::Parser;
use processor::driver::CollectionDriver;
use std::path::{Path, PathBuf};
use utils::AppError;

/// Command Line Interface for the payslip extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing the payslip sub-folder
    #[arg(short, long, default_value = ".")]
    input_dir: PathBuf,

    /// Sub-folder of the input directory holding the PDF files
    #[arg(long, default_value = "data")]
    subdir: String,

    /// Spreadsheet to write
    #[arg(short, long, default_value = storage::DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Number of payment rows to preview on the console
    #[arg(short, long, default_value_t = 10)]
    preview_rows: usize,

    /// Skip the statistics and preview printout
    #[arg(long)]
    no_stats: bool,

    /// Debug mode - save annotated page text and metadata per PDF
    #[arg(short, long)]
    debug: bool,
}

/// `<output stem>_debug` next to the output file.
fn debug_dir_for(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "payslip".to_string());
    output.with_file_name(format!("{}_debug", stem))
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    run(&args)?;
    Ok(())
}

/// Extracts, exports and reports. Returns whether a spreadsheet was written.
fn run(args: &Args) -> Result<bool, AppError> {
    // 3. Discover and process every PDF
    let mut driver = CollectionDriver::new(&args.input_dir, &args.subdir);
    if args.debug {
        let debug_dir = debug_dir_for(&args.output);
        tracing::info!("Debug output goes to {}", debug_dir.display());
        driver = driver.with_debug_dir(debug_dir);
    }
    let extraction = driver.run()?;

    if extraction.payments.is_empty() {
        tracing::info!("Nothing to export");
        return Ok(false);
    }

    // 4. Export
    storage::save_to_excel(&extraction.payments, &extraction.summaries, &args.output)?;
    println!("✓ Data saved to: {}", args.output.display());
    println!("  - {}: {} record(s)", storage::PAYMENTS_SHEET, extraction.payments.len());
    println!("  - {}: {} record(s)", storage::SUMMARY_SHEET, extraction.summaries.len());

    // 5. Console report
    if !args.no_stats {
        storage::print_statistics(&extraction.payments, &extraction.summaries);
        storage::print_sample_data(&extraction.payments, args.preview_rows);
    }

    Ok(true)
}
