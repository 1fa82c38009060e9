//! Extension allow-list shared by the candidate pre-filter and the sniffed-type gate.

use std::collections::BTreeSet;

const DEFAULT_EXTENSIONS: [&str; 5] = [".jpg", ".png", ".ico", ".gif", ".jpeg"];

/// Spellings of one format. Sniffing always reports the first of each pair.
const ALIASES: [(&str, &str); 2] = [(".jpg", ".jpeg"), (".tif", ".tiff")];

/// Immutable set of permitted extensions, each lower case with a leading `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    extensions: BTreeSet<String>,
}

impl AllowList {
    /// Builds from user-supplied entries; `"PNG"`, `"png"` and `".png"` all become `".png"`.
    pub fn new<S: AsRef<str>>(entries: &[S]) -> Self {
        let extensions = entries
            .iter()
            .filter_map(|e| normalize(e.as_ref()))
            .collect();
        Self { extensions }
    }

    pub fn default_extensions() -> Vec<String> {
        DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    /// Coarse pre-filter: true if any extension occurs anywhere in `text`.
    pub fn matches_text(&self, text: &str) -> bool {
        self.extensions.iter().any(|ext| text.contains(ext.as_str()))
    }

    /// Hard gate on an extension derived from sniffed content.
    /// Either spelling of an aliased extension (`.jpg` / `.jpeg`) admits the other.
    pub fn permits_extension(&self, ext: &str) -> bool {
        let Some(ext) = normalize(ext) else {
            return false;
        };
        self.extensions.contains(&ext) || alias(&ext).is_some_and(|a| self.extensions.contains(a))
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(&DEFAULT_EXTENSIONS)
    }
}

fn alias(ext: &str) -> Option<&'static str> {
    ALIASES.iter().find_map(|&(a, b)| {
        if ext == a {
            Some(b)
        } else if ext == b {
            Some(a)
        } else {
            None
        }
    })
}

fn normalize(entry: &str) -> Option<String> {
    let trimmed = entry.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!(".{}", trimmed.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_contains_common_image_types() {
        let allow = AllowList::default();
        let got: Vec<&str> = allow.iter().collect();
        assert_eq!(got, vec![".gif", ".ico", ".jpeg", ".jpg", ".png"]);
    }

    #[test]
    fn normalizes_case_and_leading_dot() {
        let allow = AllowList::new(&["PNG", ".Jpg", "  gif ", "", "."]);
        assert!(allow.permits_extension(".png"));
        assert!(allow.permits_extension("jpg"));
        assert!(allow.permits_extension(".GIF"));
        assert!(!allow.permits_extension(".webp"));
        assert_eq!(allow.iter().count(), 3);
    }

    #[test]
    fn jpeg_spellings_admit_each_other() {
        let only_jpeg = AllowList::new(&[".jpeg"]);
        assert!(only_jpeg.permits_extension(".jpg"));
        assert!(only_jpeg.permits_extension(".jpeg"));
        assert!(!only_jpeg.permits_extension(".png"));

        let only_jpg = AllowList::new(&["jpg"]);
        assert!(only_jpg.permits_extension(".jpeg"));
        assert!(AllowList::new(&[".tiff"]).permits_extension(".tif"));
    }

    #[test]
    fn matches_text_is_substring_search() {
        let allow = AllowList::default();
        assert!(allow.matches_text("https://example.com/a.jpg"));
        assert!(allow.matches_text("https://example.com/a.png?w=200"));
        assert!(!allow.matches_text("https://example.com/page"));
        assert!(!allow.matches_text("https://example.com/a.webp"));
    }

    #[test]
    fn separate_values_do_not_share_state() {
        let a = AllowList::default();
        let b = AllowList::new(&[".webp"]);
        assert!(!a.permits_extension(".webp"));
        assert!(b.permits_extension(".webp"));
        assert!(!b.permits_extension(".jpg"));
    }
}
