use crate::core::models::{HostDescriptor, UploadError};

/// Extracts the hosted URL from a 2xx response body, per the host descriptor.
///
/// Only ever called for 2xx responses; non-2xx bodies are never interpreted.
/// Hosts that report failure inside the body (a boolean status field plus a
/// message) are checked before the URL path is walked, so a failing body with
/// HTTP 200 surfaces the host's own message.
pub fn interpret_response(descriptor: &HostDescriptor, body: &str) -> Result<String, UploadError> {
    let parsed: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        log::debug!("[DISPATCH] Response body is not valid JSON: {}", e);
        UploadError::Parse
    })?;

    if let Some(status_field) = descriptor.body_status_field {
        match parsed.get(status_field).and_then(|v| v.as_bool()) {
            Some(true) => {}
            Some(false) => {
                let message = parsed
                    .get("message")
                    .and_then(|v| v.as_str())
                    .filter(|m| !m.is_empty());
                return match message {
                    Some(message) => Err(UploadError::Host(message.to_string())),
                    None => Err(UploadError::Parse),
                };
            }
            None => return Err(UploadError::Parse),
        }
    }

    let mut current = &parsed;
    for segment in descriptor.response_url_path {
        current = match current.get(segment) {
            Some(value) => value,
            None => return Err(UploadError::Parse),
        };
    }

    match current.as_str() {
        Some(url) if !url.is_empty() => Ok(url.to_string()),
        _ => Err(UploadError::Parse),
    }
}
