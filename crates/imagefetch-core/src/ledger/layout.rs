//! Per-keyword directory layout under the images root.
//!
//! ```text
//! <root>/<slug>/<keyword>_<n><ext>
//! <root>/<slug>/url/<slug>_urls.txt
//! ```

use anyhow::{Context, Result};
use std::io;
use std::path::{Path, PathBuf};

use crate::keyword::Keyword;

const URL_DIR: &str = "url";
const LEDGER_SUFFIX: &str = "_urls.txt";

/// Paths owned by one keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordLayout {
    pub images_dir: PathBuf,
    pub url_dir: PathBuf,
    pub ledger_path: PathBuf,
}

impl KeywordLayout {
    pub fn new(root: &Path, keyword: &Keyword) -> Self {
        let images_dir = root.join(keyword.slug());
        let url_dir = images_dir.join(URL_DIR);
        let ledger_path = url_dir.join(format!("{}{}", keyword.slug(), LEDGER_SUFFIX));
        Self {
            images_dir,
            url_dir,
            ledger_path,
        }
    }

    /// Creates the image and ledger directories. Safe to call repeatedly; never removes content.
    pub fn ensure(&self) -> Result<()> {
        ensure_dir(&self.images_dir)?;
        ensure_dir(&self.url_dir)?;
        Ok(())
    }
}

/// `create_dir_all`, treating "already exists" as success and propagating everything else.
pub(crate) fn ensure_dir(dir: &Path) -> Result<()> {
    match std::fs::create_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(e) => Err(e).with_context(|| format!("create dir: {}", dir.display())),
    }
}
