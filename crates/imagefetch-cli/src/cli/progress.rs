//! Terminal progress bar, one per keyword.

use imagefetch_core::fetch::SavedImage;
use imagefetch_core::keyword::Keyword;
use imagefetch_core::orchestrator::{KeywordReport, ProgressSink};
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Default)]
pub struct BarProgress {
    bar: Option<ProgressBar>,
}

impl BarProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

fn style() -> ProgressStyle {
    ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len} {percent}%")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("** ")
}

impl ProgressSink for BarProgress {
    fn start(&mut self, keyword: &Keyword, limit: usize) {
        let bar = ProgressBar::new(limit as u64);
        bar.set_style(style());
        bar.set_message(keyword.raw().to_string());
        self.bar = Some(bar);
    }

    fn advance(&mut self, _image: &SavedImage) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn finish(&mut self, report: &KeywordReport) {
        if let Some(bar) = self.bar.take() {
            let msg = if report.exhausted && report.downloaded < report.limit {
                format!("{} (ran out of candidates)", report.keyword)
            } else {
                report.keyword.clone()
            };
            bar.finish_with_message(msg);
        }
    }
}
