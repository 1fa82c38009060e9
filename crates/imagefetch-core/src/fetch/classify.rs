//! Classify downloaded bytes by content, never by URL or declared type.

use super::FetchError;
use crate::allow_list::AllowList;

const HTML_MARKER: &[u8] = b"html";

/// Type detected from the response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sniffed {
    pub mime: &'static str,
    /// Extension to save with, including the leading `.`.
    pub extension: String,
}

/// Accepts `body` only if it is not markup and sniffs to an allowed extension.
pub fn classify_body(body: &[u8], allow: &AllowList) -> Result<Sniffed, FetchError> {
    if body.windows(HTML_MARKER.len()).any(|w| w == HTML_MARKER) {
        return Err(FetchError::ContentMismatch);
    }
    let kind = infer::get(body).ok_or(FetchError::Unrecognized)?;
    let extension = format!(".{}", kind.extension());
    if !allow.permits_extension(&extension) {
        return Err(FetchError::RejectedType {
            mime: kind.mime_type().to_string(),
            extension: kind.extension().to_string(),
        });
    }
    Ok(Sniffed {
        mime: kind.mime_type(),
        extension,
    })
}
