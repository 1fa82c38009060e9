//! Pure scanning steps over immutable markup.
//!
//! All positions are byte offsets. The delimiters searched for (`"` and `\`)
//! are ASCII, so every returned offset is a char boundary.

/// A quoted string opener directly followed by an https scheme.
const OPENER: &str = "\"https://";
const QUOTE: char = '"';
const ESCAPE: char = '\\';

/// One raw token located in the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Candidate text, without the surrounding quotes.
    pub text: &'a str,
    /// Offset where the next search starts (just past the closing quote).
    pub resume_at: usize,
}

/// Offset of the next `"https://` opener at or after `from`.
pub fn find_opener(markup: &str, from: usize) -> Option<usize> {
    markup.get(from..)?.find(OPENER).map(|i| from + i)
}

/// Offset of the first `"` after the opener quote at `opener`.
pub fn find_closing_quote(markup: &str, opener: usize) -> Option<usize> {
    let start = opener + 1;
    markup.get(start..)?.find(QUOTE).map(|i| start + i)
}

/// End of the token: the first escape between opener and closing quote, else the closing quote.
pub fn token_end(markup: &str, opener: usize, closing: usize) -> usize {
    let start = opener + 1;
    markup
        .get(start..closing)
        .and_then(|inner| inner.find(ESCAPE))
        .map_or(closing, |i| start + i)
}

/// Locates the next raw token starting the search at `from`.
///
/// Returns `None` when no opener remains or the last opener is never closed.
pub fn next_token(markup: &str, from: usize) -> Option<Token<'_>> {
    let opener = find_opener(markup, from)?;
    let closing = find_closing_quote(markup, opener)?;
    let end = token_end(markup, opener, closing);
    Some(Token {
        text: &markup[opener + 1..end],
        resume_at: closing + 1,
    })
}
