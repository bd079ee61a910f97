use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use xml_report_check::{check_documents, normalize_document, utils::load_document};

#[derive(Debug, Parser)]
#[command(
    name = "xml-report-check",
    version,
    about = "Check that an XML test report is equivalent to an expected fixture"
)]
struct Args {
    /// Expected report (fixture)
    #[arg(value_name = "EXPECTED")]
    expected: PathBuf,

    /// Report produced by the run under test
    #[arg(value_name = "ACTUAL")]
    actual: PathBuf,

    /// Compare the files as written, without normalizing times, paths and stack traces
    #[arg(long)]
    raw: bool,
}

fn main() {
    // Initialize the default subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    info!("Reading expected report: {}", args.expected.display());
    let mut expected = load_document(&args.expected)
        .with_context(|| format!("failed to load {}", args.expected.display()))?;
    info!("Reading actual report: {}", args.actual.display());
    let mut actual = load_document(&args.actual)
        .with_context(|| format!("failed to load {}", args.actual.display()))?;

    if !args.raw {
        normalize_document(&mut expected).context("failed to normalize expected report")?;
        normalize_document(&mut actual).context("failed to normalize actual report")?;
    }

    check_documents(&expected, &actual).context("reports are not equivalent")?;

    println!("equivalent");
    Ok(())
}
