//! Query Runner: processes a comma-separated keyword list in order.
//!
//! A keyword whose search page cannot be fetched is recorded and skipped;
//! the remaining keywords still run. Filesystem errors abort the whole run.

use anyhow::Result;

use crate::http::{HttpClient, TransportError};
use crate::keyword::{parse_keywords, search_url, Keyword};
use crate::orchestrator::{run_keyword, KeywordOutcome, KeywordReport, ProgressSink, RunSettings};

/// A keyword skipped because its search page failed.
#[derive(Debug)]
pub struct PageFailure {
    pub keyword: Keyword,
    pub url: String,
    pub error: TransportError,
}

/// Totals for a whole run, in keyword order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<KeywordReport>,
    pub page_failures: Vec<PageFailure>,
}

impl RunSummary {
    pub fn total_downloaded(&self) -> usize {
        self.reports.iter().map(|r| r.downloaded).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.page_failures.is_empty()
    }
}

/// Runs every keyword in `keyword_list` (comma-separated) sequentially.
pub fn run_queries<C: HttpClient + ?Sized>(
    client: &C,
    settings: &RunSettings,
    keyword_list: &str,
    progress: &mut dyn ProgressSink,
) -> Result<RunSummary> {
    let keywords = parse_keywords(keyword_list);
    run_keywords(client, settings, &keywords, progress)
}

/// Runs already-parsed keywords sequentially.
pub fn run_keywords<C: HttpClient + ?Sized>(
    client: &C,
    settings: &RunSettings,
    keywords: &[Keyword],
    progress: &mut dyn ProgressSink,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    for keyword in keywords {
        let url = search_url(&settings.search_endpoint, keyword);
        tracing::info!(keyword = %keyword, url = %url, limit = settings.limit, "processing keyword");
        match run_keyword(client, settings, keyword, &url, progress)? {
            KeywordOutcome::Completed(report) => summary.reports.push(report),
            KeywordOutcome::PageFailed(error) => summary.page_failures.push(PageFailure {
                keyword: keyword.clone(),
                url,
                error,
            }),
        }
    }
    tracing::info!(
        keywords = keywords.len(),
        downloaded = summary.total_downloaded(),
        page_failures = summary.page_failures.len(),
        "run complete"
    );
    Ok(summary)
}
