//! Per-candidate fetch errors.

use std::path::PathBuf;

use crate::http::TransportError;

/// Why a single candidate URL produced no saved image.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Timeout, connection failure, or non-2xx status.
    #[error("transport: {0}")]
    Transport(#[from] TransportError),
    /// The body looks like a page (contains `html`), not image bytes.
    #[error("HTML content received instead of image")]
    ContentMismatch,
    /// Sniffed type is an image type outside the allow-list.
    #[error("content type {mime} (.{extension}) not allowed")]
    RejectedType { mime: String, extension: String },
    /// Bytes do not match any known file signature.
    #[error("unrecognized content type")]
    Unrecognized,
    /// The image could not be written to disk.
    #[error("write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Fatal errors abort the run; all others only skip the candidate.
    pub fn is_fatal(&self) -> bool {
        matches!(self, FetchError::Io { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_io_is_fatal() {
        assert!(!FetchError::ContentMismatch.is_fatal());
        assert!(!FetchError::Unrecognized.is_fatal());
        assert!(!FetchError::Transport(TransportError::Http(404)).is_fatal());
        assert!(!FetchError::RejectedType {
            mime: "image/webp".into(),
            extension: "webp".into()
        }
        .is_fatal());
        let io = FetchError::Io {
            path: PathBuf::from("/x/cats_1.jpg"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(io.is_fatal());
        assert!(io.to_string().starts_with("write /x/cats_1.jpg"));
    }
}
