//! Keyword model: user search terms and their filesystem slugs.
//!
//! The raw keyword is the search term and the saved-file prefix; the slug
//! (spaces replaced by `_`) names the per-keyword directory and ledger.

mod search;

pub use search::search_url;

use std::fmt;

/// A trimmed search term plus its filesystem-safe slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    raw: String,
    slug: String,
}

impl Keyword {
    /// Builds a keyword from user text. Returns `None` when the text is blank.
    pub fn new(text: &str) -> Option<Self> {
        let raw = text.trim();
        if raw.is_empty() {
            return None;
        }
        Some(Self {
            raw: raw.to_string(),
            slug: raw.replace(' ', "_"),
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Splits a comma-separated keyword list, trimming each entry.
///
/// Order and duplicates are kept. Blank entries are dropped since an empty
/// keyword would alias the images root.
pub fn parse_keywords(list: &str) -> Vec<Keyword> {
    list.split(',')
        .filter_map(|entry| {
            let kw = Keyword::new(entry);
            if kw.is_none() {
                tracing::warn!("skipping empty keyword in list {:?}", list);
            }
            kw
        })
        .collect()
}
