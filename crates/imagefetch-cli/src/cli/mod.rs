//! CLI for the imagefetch keyword image collector.

mod progress;

use anyhow::Result;
use clap::Parser;
use imagefetch_core::config;
use imagefetch_core::http::CurlClient;
use imagefetch_core::keyword::parse_keywords;
use imagefetch_core::orchestrator::RunSettings;
use imagefetch_core::runner::{self, RunSummary};

use progress::BarProgress;

/// Download images from a search page for each keyword.
#[derive(Debug, Parser)]
#[command(name = "imagefetch")]
#[command(about = "Collect images for a list of keywords", long_about = None)]
pub struct Cli {
    /// Keywords to search for (comma-separated if multiple).
    pub keywords: String,

    /// Maximum number of images to download per keyword (default: 10, or `default_limit` in config).
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let keywords = parse_keywords(&cli.keywords);
    if keywords.is_empty() {
        anyhow::bail!("no keywords given");
    }

    let settings = RunSettings::from_config(&cfg, cli.limit);
    let mut progress = BarProgress::new();
    let summary = runner::run_keywords(&CurlClient::new(), &settings, &keywords, &mut progress)?;

    println!("Downloading Complete");
    check_summary(&summary)
}

/// Fails when any keyword was skipped because its search page could not be fetched.
fn check_summary(summary: &RunSummary) -> Result<()> {
    if summary.is_clean() {
        return Ok(());
    }
    for failure in &summary.page_failures {
        eprintln!(
            "search page for {:?} failed: {}",
            failure.keyword.raw(),
            failure.error
        );
    }
    let names: Vec<&str> = summary
        .page_failures
        .iter()
        .map(|f| f.keyword.raw())
        .collect();
    anyhow::bail!("{} keyword(s) skipped: {}", names.len(), names.join(", "))
}
