use thiserror::Error;

use crate::global_constants;

/// Everything that can stop an upload, each carrying its user-facing reason.
///
/// None of these are fatal; every variant is caught at the point of
/// occurrence and turned into a notification plus a buffer edit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// A required setting is missing or the host id is unknown. Raised before
    /// any network call.
    #[error("{0}")]
    Configuration(String),

    /// Retrieval of a remote image failed (drag-and-drop of a URL).
    #[error("failed to fetch image: {0}")]
    Fetch(String),

    /// The upload request itself failed: network error or non-2xx status.
    #[error("HTTP {status}: {status_text}")]
    Transport { status: u16, status_text: String },

    /// Response body was not valid JSON, or the URL-extraction rule found
    /// nothing in it.
    #[error("{}", global_constants::PARSE_FAILURE_REASON)]
    Parse,

    /// The host's own payload reported failure, with its message.
    #[error("{0}")]
    Host(String),
}

impl UploadError {
    pub fn transport(status: u16, status_text: impl Into<String>) -> Self {
        UploadError::Transport {
            status,
            status_text: status_text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_includes_status_code_and_text() {
        let error = UploadError::transport(503, "Service Unavailable");
        assert_eq!(error.to_string(), "HTTP 503: Service Unavailable");
    }

    #[test]
    fn test_parse_error_uses_fixed_reason() {
        assert_eq!(UploadError::Parse.to_string(), "Failed to parse response");
    }

    #[test]
    fn test_host_error_carries_payload_message() {
        let error = UploadError::Host("quota exceeded".to_string());
        assert_eq!(error.to_string(), "quota exceeded");
    }
}
