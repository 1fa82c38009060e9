//! Image Fetcher: one download attempt for one candidate URL.
//!
//! GET with a short timeout, classify the bytes by content, and write
//! accepted images as `<base>_<counter + 1><ext>`. The file is written to a
//! `.part` path and renamed, so an interrupted write never leaves a
//! numbered image behind.

mod classify;
mod error;

pub use classify::{classify_body, Sniffed};
pub use error::FetchError;

#[cfg(test)]
pub(crate) use classify::samples;

use std::path::{Path, PathBuf};

use crate::allow_list::AllowList;
use crate::http::{HttpClient, RequestOptions};

/// Thumbnail proxy whose URLs are never fetched.
pub const THUMBNAIL_PROXY_PREFIX: &str = "https://encrypted-tbn0.gstatic.com/";

const TEMP_SUFFIX: &str = ".part";

/// Where and under which name an accepted image is saved.
#[derive(Debug, Clone, Copy)]
pub struct ImageTarget<'a> {
    pub dir: &'a Path,
    /// Filename prefix (the raw keyword).
    pub base: &'a str,
    /// Highest number already used; the image is saved as `counter + 1`.
    pub counter: u64,
}

impl ImageTarget<'_> {
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}_{}{}", self.base, self.counter + 1, extension)
    }
}

/// An image written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedImage {
    pub path: PathBuf,
    pub number: u64,
    pub extension: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Saved(SavedImage),
    /// The URL was skipped without a request.
    NotAttempted,
}

pub fn is_thumbnail_proxy(url: &str) -> bool {
    url.starts_with(THUMBNAIL_PROXY_PREFIX)
}

/// Attempts exactly one download of `url`.
pub fn fetch_image<C: HttpClient + ?Sized>(
    client: &C,
    opts: &RequestOptions,
    url: &str,
    target: ImageTarget<'_>,
    allow: &AllowList,
) -> Result<FetchOutcome, FetchError> {
    if is_thumbnail_proxy(url) {
        return Ok(FetchOutcome::NotAttempted);
    }

    let body = client.get(url, opts)?;
    let sniffed = classify_body(&body, allow)?;

    let path = target.dir.join(target.file_name(&sniffed.extension));
    write_image(&path, &body)?;

    Ok(FetchOutcome::Saved(SavedImage {
        path,
        number: target.counter + 1,
        extension: sniffed.extension,
    }))
}

fn write_image(path: &Path, body: &[u8]) -> Result<(), FetchError> {
    let mut temp = path.as_os_str().to_owned();
    temp.push(TEMP_SUFFIX);
    let temp = PathBuf::from(temp);

    let io_err = |source| FetchError::Io {
        path: path.to_path_buf(),
        source,
    };
    std::fs::write(&temp, body).map_err(io_err)?;
    std::fs::rename(&temp, path).map_err(io_err)
}
