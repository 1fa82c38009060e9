//! Stub HTTP client for pipeline tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::http::{HttpClient, RequestOptions, TransportError};

/// Serves canned bodies or HTTP status errors by exact URL; unknown URLs get 404.
#[derive(Default)]
pub(crate) struct StubClient {
    responses: HashMap<String, Result<Vec<u8>, u32>>,
    requested: RefCell<Vec<String>>,
}

impl StubClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn body(mut self, url: &str, body: &[u8]) -> Self {
        self.responses.insert(url.to_string(), Ok(body.to_vec()));
        self
    }

    pub(crate) fn status(mut self, url: &str, code: u32) -> Self {
        self.responses.insert(url.to_string(), Err(code));
        self
    }

    pub(crate) fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl HttpClient for StubClient {
    fn get(&self, url: &str, _opts: &RequestOptions) -> Result<Vec<u8>, TransportError> {
        self.requested.borrow_mut().push(url.to_string());
        match self.responses.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(code)) => Err(TransportError::Http(*code)),
            None => Err(TransportError::Http(404)),
        }
    }
}
