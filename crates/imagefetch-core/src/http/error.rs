//! Transport error type and its coarse classification.

/// A GET that did not produce a 2xx body.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Curl reported an error (timeout, connection, bad URL, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
}

/// High-level classification of a transport error, for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Timeout,
    /// Network-level failure (connection reset, DNS, etc.).
    Connection,
    Http(u32),
    Other,
}

impl TransportError {
    pub fn kind(&self) -> TransportKind {
        match self {
            TransportError::Curl(e) => classify_curl_error(e),
            TransportError::Http(code) => TransportKind::Http(*code),
        }
    }
}

fn classify_curl_error(e: &curl::Error) -> TransportKind {
    if e.is_operation_timedout() {
        return TransportKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return TransportKind::Connection;
    }
    TransportKind::Other
}
