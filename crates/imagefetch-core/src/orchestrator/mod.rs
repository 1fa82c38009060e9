//! Download Orchestrator: drives extraction, ledger dedupe and fetching for one keyword.
//!
//! Init (directories, ledger, counter, page markup) runs once; the scan then
//! alternates between `Scanning` and `AwaitingDownload` until the limit is
//! reached or the markup has no more candidates. Candidates are handled
//! strictly in markup order, one at a time.

mod pacer;
mod progress;

pub use pacer::Pacer;
pub use progress::{KeywordReport, NoProgress, ProgressSink};

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use crate::allow_list::AllowList;
use crate::config::ImageFetchConfig;
use crate::extract::Candidates;
use crate::fetch::{self, FetchOutcome, ImageTarget};
use crate::http::{self, HttpClient, RequestOptions, TransportError};
use crate::keyword::Keyword;
use crate::ledger::{self, KeywordLayout, Ledger};

/// Everything a run needs besides the keyword list.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub output_dir: PathBuf,
    /// Images to save per keyword.
    pub limit: usize,
    pub allow: AllowList,
    pub page_request: RequestOptions,
    pub image_request: RequestOptions,
    pub request_delay: Duration,
    pub search_endpoint: String,
}

impl RunSettings {
    /// Settings from config; `limit` overrides `default_limit` when given.
    pub fn from_config(cfg: &ImageFetchConfig, limit: Option<usize>) -> Self {
        Self {
            output_dir: cfg.output_dir.clone(),
            limit: limit.unwrap_or(cfg.default_limit),
            allow: cfg.allow_list(),
            page_request: cfg.page_request(),
            image_request: cfg.image_request(),
            request_delay: cfg.request_delay(),
            search_endpoint: cfg.search_endpoint.clone(),
        }
    }
}

/// Result of one keyword that did not hit a fatal error.
#[derive(Debug)]
pub enum KeywordOutcome {
    Completed(KeywordReport),
    /// The search page could not be fetched; nothing was downloaded.
    PageFailed(TransportError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State<'m> {
    Scanning,
    AwaitingDownload(&'m str),
    Done,
}

/// Runs one keyword against the search page at `page_url`.
///
/// Filesystem failures are returned as `Err` and should abort the run.
/// A failed page fetch is reported as [`KeywordOutcome::PageFailed`].
pub fn run_keyword<C: HttpClient + ?Sized>(
    client: &C,
    settings: &RunSettings,
    keyword: &Keyword,
    page_url: &str,
    progress: &mut dyn ProgressSink,
) -> Result<KeywordOutcome> {
    // Init
    let layout = KeywordLayout::new(&settings.output_dir, keyword);
    layout.ensure()?;
    let ledger = Ledger::load(&layout.ledger_path)?;
    let counter = ledger::current_counter(&layout.images_dir, keyword)?;
    tracing::debug!(
        keyword = %keyword,
        known_urls = ledger.len(),
        counter,
        "keyword state loaded"
    );

    let markup = match http::fetch_page(client, page_url, &settings.page_request) {
        Ok(m) => m,
        Err(e) => {
            tracing::warn!(keyword = %keyword, url = page_url, kind = ?e.kind(), "search page fetch failed: {}", e);
            return Ok(KeywordOutcome::PageFailed(e));
        }
    };

    let run = KeywordRun {
        client,
        settings,
        keyword,
        layout: &layout,
        ledger,
        counter,
        pacer: Pacer::new(settings.request_delay),
        failed_urls: HashSet::new(),
        report: KeywordReport {
            keyword: keyword.raw().to_string(),
            limit: settings.limit,
            start_counter: counter,
            end_counter: counter,
            ..KeywordReport::default()
        },
    };

    progress.start(keyword, settings.limit);
    let report = run.scan(&markup, progress)?;
    progress.finish(&report);

    tracing::info!(
        keyword = %keyword,
        downloaded = report.downloaded,
        skipped_known = report.skipped_known,
        failed = report.failed,
        exhausted = report.exhausted,
        "keyword done"
    );
    Ok(KeywordOutcome::Completed(report))
}

struct KeywordRun<'a, C: ?Sized> {
    client: &'a C,
    settings: &'a RunSettings,
    keyword: &'a Keyword,
    layout: &'a KeywordLayout,
    ledger: Ledger,
    counter: u64,
    pacer: Pacer,
    /// URLs that failed this run; not retried until the next run.
    failed_urls: HashSet<String>,
    report: KeywordReport,
}

impl<C: HttpClient + ?Sized> KeywordRun<'_, C> {
    fn scan(mut self, markup: &str, progress: &mut dyn ProgressSink) -> Result<KeywordReport> {
        let settings = self.settings;
        let mut candidates = Candidates::new(markup, &settings.allow);
        let mut state = if settings.limit == 0 {
            State::Done
        } else {
            State::Scanning
        };

        loop {
            state = match state {
                State::Scanning => match candidates.next() {
                    Some(url) => State::AwaitingDownload(url),
                    None => {
                        self.report.exhausted = true;
                        State::Done
                    }
                },
                State::AwaitingDownload(url) => {
                    self.attempt(url, progress)?;
                    if self.report.downloaded >= settings.limit {
                        State::Done
                    } else {
                        State::Scanning
                    }
                }
                State::Done => break,
            };
        }

        self.report.end_counter = self.counter;
        Ok(self.report)
    }

    fn attempt(&mut self, url: &str, progress: &mut dyn ProgressSink) -> Result<()> {
        if self.ledger.contains(url) {
            tracing::debug!(url, "already in ledger");
            self.report.skipped_known += 1;
            return Ok(());
        }
        if self.failed_urls.contains(url) {
            tracing::debug!(url, "already failed this run");
            self.report.failed += 1;
            return Ok(());
        }

        let paced = !fetch::is_thumbnail_proxy(url);
        if paced {
            self.pacer.wait();
        }

        let target = ImageTarget {
            dir: &self.layout.images_dir,
            base: self.keyword.raw(),
            counter: self.counter,
        };
        let result = fetch::fetch_image(
            self.client,
            &self.settings.image_request,
            url,
            target,
            &self.settings.allow,
        );
        if paced {
            self.pacer.done();
        }
        match result {
            Ok(FetchOutcome::Saved(image)) => {
                self.ledger
                    .append(url)
                    .with_context(|| format!("record {} for {}", url, self.keyword))?;
                self.counter = image.number;
                self.report.downloaded += 1;
                tracing::info!(url, path = %image.path.display(), "saved image");
                progress.advance(&image);
            }
            Ok(FetchOutcome::NotAttempted) => {
                tracing::debug!(url, "thumbnail proxy, not attempted");
                self.report.not_attempted += 1;
            }
            Err(e) if e.is_fatal() => {
                return Err(e).with_context(|| format!("saving image for {}", self.keyword));
            }
            Err(e) => {
                tracing::debug!(url, "candidate rejected: {}", e);
                self.failed_urls.insert(url.to_string());
                self.report.failed += 1;
            }
        }
        Ok(())
    }
}
