//! Blocking HTTP GET transport.
//!
//! Uses the curl crate (libcurl). Both the search page and each candidate
//! image go through [`HttpClient`], so the pipeline can run against a stub.

mod error;
mod page;

pub use error::{TransportError, TransportKind};
pub use page::fetch_page;

use std::time::Duration;

/// Per-request settings.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Total time allowed for the transfer, including connect.
    pub timeout: Duration,
    pub user_agent: String,
}

/// A blocking GET returning the full response body.
pub trait HttpClient {
    fn get(&self, url: &str, opts: &RequestOptions) -> Result<Vec<u8>, TransportError>;
}

const MAX_REDIRECTS: u32 = 10;

/// libcurl-backed client. Runs in the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurlClient;

impl CurlClient {
    pub fn new() -> Self {
        Self
    }
}

impl HttpClient for CurlClient {
    fn get(&self, url: &str, opts: &RequestOptions) -> Result<Vec<u8>, TransportError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(MAX_REDIRECTS)?;
        easy.useragent(&opts.user_agent)?;
        easy.timeout(opts.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(TransportError::Http(code));
        }
        tracing::trace!(url, bytes = body.len(), "GET complete");
        Ok(body)
    }
}
