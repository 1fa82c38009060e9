//! Page Source: fetch the raw search-results markup.

use super::{HttpClient, RequestOptions, TransportError};

/// GETs `url` and returns the body as text (invalid UTF-8 replaced).
pub fn fetch_page<C: HttpClient + ?Sized>(
    client: &C,
    url: &str,
    opts: &RequestOptions,
) -> Result<String, TransportError> {
    let body = client.get(url, opts)?;
    tracing::debug!(url, bytes = body.len(), "fetched search page");
    Ok(String::from_utf8_lossy(&body).into_owned())
}
