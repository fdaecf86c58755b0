use std::collections::HashMap;

/// Per-host setting key/value pairs (credentials, endpoint overrides).
/// Supplied by the configuration collaborator; the dispatcher only reads it.
pub type HostSettings = HashMap<String, String>;

/// Where the image bytes come from for one upload attempt.
#[derive(Clone)]
pub enum UploadSource {
    /// Already-local bytes, e.g. a pasted image file.
    Bytes(Vec<u8>),
    /// A remote URL that must be fetched before uploading, e.g. a dragged link.
    RemoteUrl(String),
}

impl std::fmt::Debug for UploadSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadSource::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
            UploadSource::RemoteUrl(url) => write!(f, "RemoteUrl({})", url),
        }
    }
}

impl UploadSource {
    /// The original remote URL, when there is one to fall back to on failure.
    pub fn original_url(&self) -> Option<&str> {
        match self {
            UploadSource::Bytes(_) => None,
            UploadSource::RemoteUrl(url) => Some(url.as_str()),
        }
    }
}

/// One upload attempt against one host. Built per event, discarded after.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub source: UploadSource,
    pub host_id: String,
}

impl UploadRequest {
    pub fn from_bytes(host_id: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            source: UploadSource::Bytes(bytes),
            host_id: host_id.into(),
        }
    }

    pub fn from_remote_url(host_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            source: UploadSource::RemoteUrl(url.into()),
            host_id: host_id.into(),
        }
    }
}
