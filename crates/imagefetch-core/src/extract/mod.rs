//! Candidate extraction from raw search-results markup.
//!
//! Not an HTML parser: a forward-only scan for quoted `https://` strings,
//! bounded by the next quote or an earlier escape character. Every token
//! advances the cursor whether or not it is accepted, so malformed markup
//! cannot stall the scan.

mod filter;
mod scan;

pub use filter::{accepts, INFRASTRUCTURE_HOSTS};
pub use scan::{find_closing_quote, find_opener, next_token, token_end, Token};

use crate::allow_list::AllowList;
use std::iter::FusedIterator;

/// Lazy, finite sequence of candidate image URLs in markup order.
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    markup: &'a str,
    cursor: usize,
    allow: &'a AllowList,
}

impl<'a> Candidates<'a> {
    pub fn new(markup: &'a str, allow: &'a AllowList) -> Self {
        Self {
            markup,
            cursor: 0,
            allow,
        }
    }
}

impl<'a> Iterator for Candidates<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let token = match next_token(self.markup, self.cursor) {
                Some(t) => t,
                None => {
                    self.cursor = self.markup.len();
                    return None;
                }
            };
            self.cursor = token.resume_at;
            let text = token.text.trim();
            if accepts(text, self.allow) {
                return Some(text);
            }
            tracing::trace!(token = token.text, "skipping token");
        }
    }
}

impl FusedIterator for Candidates<'_> {}

/// Shorthand for [`Candidates::new`].
pub fn candidates<'a>(markup: &'a str, allow: &'a AllowList) -> Candidates<'a> {
    Candidates::new(markup, allow)
}
