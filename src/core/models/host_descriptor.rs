use std::fmt;

use super::upload::HostSettings;

/// How the `Authorization` header for a host is built from its settings.
///
/// Each variant carries the setting key holding the credential. `RawHeaderValue`
/// is for hosts whose users store the complete header string in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    None,
    ClientIdHeader(&'static str),
    BearerHeader(&'static str),
    RawHeaderValue(&'static str),
}

impl AuthScheme {
    pub fn authorization_header(&self, settings: &HostSettings) -> Option<String> {
        match self {
            AuthScheme::None => None,
            AuthScheme::ClientIdHeader(key) => {
                settings.get(*key).map(|v| format!("Client-ID {}", v))
            }
            AuthScheme::BearerHeader(key) => settings.get(*key).map(|v| format!("Bearer {}", v)),
            AuthScheme::RawHeaderValue(key) => settings.get(*key).cloned(),
        }
    }
}

/// Static description of one image-hosting backend.
///
/// Built once at registry construction and never mutated; adding a host is a
/// new descriptor entry, not new branches in upload or parse code.
#[derive(Debug, Clone)]
pub struct HostDescriptor {
    pub id: &'static str,
    pub display_name: &'static str,
    /// May contain `{key}` placeholders substituted from host settings.
    pub endpoint_template: &'static str,
    pub auth_scheme: AuthScheme,
    /// Every key listed here must be non-empty for the host to count as configured.
    pub required_setting_keys: &'static [&'static str],
    /// Name of the multipart part carrying the image bytes.
    pub image_field_name: &'static str,
    /// Extra text part some hosts require, as (part name, setting key).
    pub extra_field: Option<(&'static str, &'static str)>,
    /// Field path to the hosted URL in a parsed JSON response body.
    pub response_url_path: &'static [&'static str],
    /// Boolean field the host uses to report success inside the body itself,
    /// independent of HTTP status. Checked before the URL path when present.
    pub body_status_field: Option<&'static str>,
}

impl fmt::Display for HostDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.id)
    }
}
