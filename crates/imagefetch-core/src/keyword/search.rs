//! Search-page URL for a keyword.

use super::Keyword;

/// Query parameter selecting image results.
const IMAGE_SEARCH_PARAM: &str = "tbm=isch";

/// Builds `<endpoint>?q=<percent-encoded keyword>&tbm=isch`.
pub fn search_url(endpoint: &str, keyword: &Keyword) -> String {
    format!(
        "{}?q={}&{}",
        endpoint,
        urlencoding::encode(keyword.raw()),
        IMAGE_SEARCH_PARAM
    )
}
