//! Per-keyword totals and the progress reporting hook.

use crate::fetch::SavedImage;
use crate::keyword::Keyword;

/// Totals for one keyword run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordReport {
    pub keyword: String,
    pub limit: usize,
    /// Images saved this run.
    pub downloaded: usize,
    /// Candidates already present in the ledger.
    pub skipped_known: usize,
    /// Candidates that were fetched but rejected, or failed in transport.
    pub failed: usize,
    /// Candidates skipped without a request (thumbnail proxy).
    pub not_attempted: usize,
    /// Highest image number on disk before this run.
    pub start_counter: u64,
    /// Highest image number on disk after this run.
    pub end_counter: u64,
    /// True when the markup ran out of candidates before the limit.
    pub exhausted: bool,
}

/// Receives progress events. All methods default to no-ops.
pub trait ProgressSink {
    fn start(&mut self, _keyword: &Keyword, _limit: usize) {}
    fn advance(&mut self, _image: &SavedImage) {}
    fn finish(&mut self, _report: &KeywordReport) {}
}

/// Discards all progress events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {}
