//! Command-line driver: scan documents and write their JSON artifacts.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use rayon::prelude::*;
use tracing::error;
use tracing_subscriber::EnvFilter;

use rustytags::DocumentReport;

#[derive(Parser)]
#[command(
    name = "rustytags",
    about = "Extract and classify inline markup tags",
    long_about = None
)]
struct Cli {
    /// Documents to process
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Directory for the JSON artifacts (defaults to each input's directory)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Print the full JSON report to stdout instead of a summary line
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Some(dir) = &cli.out_dir {
        if let Err(err) = fs::create_dir_all(dir) {
            error!(dir = %dir.display(), %err, "cannot create output directory");
            return ExitCode::FAILURE;
        }
    }

    // Documents are independent, so the batch fans out across threads.
    let failures: usize = cli
        .files
        .par_iter()
        .map(|path| match process_file(path, &cli) {
            Ok(()) => 0,
            Err(err) => {
                error!(file = %path.display(), %err, "processing failed");
                1
            }
        })
        .sum();

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn process_file(path: &Path, cli: &Cli) -> rustytags::Result<()> {
    let report = DocumentReport::from_file(path)?;

    let out_dir = match &cli.out_dir {
        Some(dir) => dir.clone(),
        None => path.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    let written = report.save(&out_dir)?;

    if cli.pretty {
        println!("{}", report.to_json_pretty()?);
    } else {
        println!(
            "{}: {} tags, {} opening errors, {} closing errors -> {}",
            report.file_name,
            report.tags.len(),
            report.opening_errors.len(),
            report.closing_errors.len(),
            written.display()
        );
    }
    Ok(())
}
