//! Per-keyword persisted state: the URL ledger, the directory layout, and
//! the image counter recovered from files already on disk.
//!
//! Nothing here is cached across runs; each run re-derives both the ledger
//! set and the counter from the filesystem.

mod counter;
mod layout;

pub use counter::{current_counter, parse_image_number};
pub use layout::KeywordLayout;

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only record of URLs already downloaded for one keyword.
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    urls: HashSet<String>,
}

impl Ledger {
    /// Loads the ledger at `path`. A missing file is an empty ledger.
    pub fn load(path: &Path) -> Result<Self> {
        let data = match std::fs::read_to_string(path) {
            Ok(d) => d,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e).with_context(|| format!("read ledger: {}", path.display())),
        };
        let urls = data
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Self {
            path: path.to_path_buf(),
            urls,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lookups use the same trimmed form that `load` and `append` store.
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url.trim())
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Appends `url`, trimmed, as one line and syncs it to disk before returning.
    /// Creates the ledger directory if it does not exist yet.
    pub fn append(&mut self, url: &str) -> Result<()> {
        let url = url.trim();
        if url.is_empty() || url.contains(['\n', '\r']) {
            anyhow::bail!("ledger entry must be a single non-empty line: {:?}", url);
        }
        if let Some(parent) = self.path.parent() {
            layout::ensure_dir(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open ledger: {}", self.path.display()))?;
        writeln!(file, "{}", url)
            .and_then(|()| file.sync_data())
            .with_context(|| format!("append ledger: {}", self.path.display()))?;
        self.urls.insert(url.to_string());
        Ok(())
    }
}
