use std::sync::Arc;

use crate::core::host_registry::HostRegistry;
use crate::core::interfaces::adapters::{TransportRequest, UploadTransport};
use crate::core::models::{HostSettings, UploadError, UploadRequest, UploadSource};
use crate::core::response_interpreter::interpret_response;

/// Drives one upload attempt end to end: configuration check, optional fetch
/// of a remote source, one multipart POST, response interpretation.
///
/// Single attempt per request. Retry, queueing and cancellation are the
/// caller's business; the dispatcher never does any of them.
pub struct UploadDispatcher {
    registry: HostRegistry,
    transport: Arc<dyn UploadTransport>,
}

impl UploadDispatcher {
    pub fn build(transport: Arc<dyn UploadTransport>) -> Self {
        Self {
            registry: HostRegistry::new(),
            transport,
        }
    }

    pub fn registry(&self) -> &HostRegistry {
        &self.registry
    }

    pub fn is_configured(&self, host_id: &str, settings: &HostSettings) -> bool {
        self.registry.is_configured(host_id, settings)
    }

    /// Uploads one image and returns the hosted URL.
    ///
    /// Fails fast, before any network call, when the host is unknown or a
    /// required setting is empty.
    pub async fn dispatch(
        &self,
        request: UploadRequest,
        settings: &HostSettings,
    ) -> Result<String, UploadError> {
        let descriptor = self.registry.descriptor(&request.host_id)?;

        if !self.registry.is_configured(&request.host_id, settings) {
            log::warn!(
                "[DISPATCH] Host {} is not configured, refusing to upload",
                descriptor.id
            );
            return Err(UploadError::Configuration(format!(
                "{} is not configured: set {}",
                descriptor.display_name,
                descriptor.required_setting_keys.join(", ")
            )));
        }

        let image_bytes = match request.source {
            UploadSource::Bytes(bytes) => bytes,
            UploadSource::RemoteUrl(ref url) => {
                log::debug!("[DISPATCH] Fetching remote image from {}", url);
                self.transport.fetch_image(url).await?
            }
        };

        let endpoint = self.registry.resolve_endpoint(descriptor, settings)?;
        let authorization = descriptor.auth_scheme.authorization_header(settings);

        let extra_fields = match descriptor.extra_field {
            Some((part_name, setting_key)) => {
                let value = settings.get(setting_key).cloned().ok_or_else(|| {
                    UploadError::Configuration(format!(
                        "{} requires the '{}' setting",
                        descriptor.display_name, setting_key
                    ))
                })?;
                vec![(part_name.to_string(), value)]
            }
            None => Vec::new(),
        };

        log::info!(
            "[DISPATCH] Uploading {} bytes to {}",
            image_bytes.len(),
            descriptor.id
        );

        let response = self
            .transport
            .post_multipart(TransportRequest {
                endpoint,
                authorization,
                image_field_name: descriptor.image_field_name.to_string(),
                image_bytes,
                extra_fields,
            })
            .await?;

        if !response.is_success() {
            log::warn!(
                "[DISPATCH] Upload to {} failed: HTTP {} {}",
                descriptor.id,
                response.status,
                response.status_text
            );
            return Err(UploadError::transport(response.status, response.status_text));
        }

        let hosted_url = interpret_response(descriptor, &response.body)?;
        log::info!("[DISPATCH] Upload to {} succeeded: {}", descriptor.id, hosted_url);
        Ok(hosted_url)
    }
}
