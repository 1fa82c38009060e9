//! Highest existing image number for a keyword, derived from a directory listing.

use anyhow::{Context, Result};
use std::path::Path;

use crate::keyword::Keyword;

/// Parses the `<n>` in `<prefix>_<n>.<ext>` (or `<prefix>_<n>` with no extension).
pub fn parse_image_number(file_name: &str) -> Option<u64> {
    let stem = file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _ext)| stem);
    let (_prefix, digits) = stem.rsplit_once('_')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Returns the highest number among files in `images_dir` whose name starts
/// with the keyword (raw or slug form), or 0 when there are none.
///
/// A missing directory counts as empty. Names that do not parse are ignored.
pub fn current_counter(images_dir: &Path, keyword: &Keyword) -> Result<u64> {
    let entries = match std::fs::read_dir(images_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => {
            return Err(e).with_context(|| format!("list images: {}", images_dir.display()))
        }
    };

    let mut max = 0u64;
    for entry in entries {
        let entry = entry.with_context(|| format!("list images: {}", images_dir.display()))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !(name.starts_with(keyword.raw()) || name.starts_with(keyword.slug())) {
            continue;
        }
        match parse_image_number(name) {
            Some(n) => max = max.max(n),
            None => tracing::debug!(file = name, "ignoring unnumbered file"),
        }
    }
    Ok(max)
}
