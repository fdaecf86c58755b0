use async_trait::async_trait;

use crate::core::interfaces::adapters::{TransportRequest, TransportResponse, UploadTransport};
use crate::core::models::UploadError;
use crate::global_constants;

/// `UploadTransport` over a shared `reqwest::Client`.
///
/// One GET per remote fetch, one POST per upload, no retries. HTTP statuses
/// are passed back untouched; only network-level failures become errors here.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    fn build_form(request: &TransportRequest) -> Result<reqwest::multipart::Form, UploadError> {
        let part = reqwest::multipart::Part::bytes(request.image_bytes.clone())
            .file_name(global_constants::UPLOAD_PART_FILE_NAME)
            .mime_str(global_constants::UPLOAD_PART_MIME_TYPE)
            .map_err(|e| UploadError::Transport {
                status: 0,
                status_text: e.to_string(),
            })?;

        let mut form =
            reqwest::multipart::Form::new().part(request.image_field_name.clone(), part);

        for (name, value) in &request.extra_fields {
            form = form.text(name.clone(), value.clone());
        }

        Ok(form)
    }
}

#[async_trait]
impl UploadTransport for ReqwestTransport {
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, UploadError> {
        log::debug!("[TRANSPORT] GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| UploadError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("[TRANSPORT] Fetch of {} failed with {}", url, status);
            return Err(UploadError::Fetch(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| UploadError::Fetch(e.to_string()))?;

        log::debug!("[TRANSPORT] Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }

    async fn post_multipart(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, UploadError> {
        log::debug!(
            "[TRANSPORT] POST {} ({} bytes, field '{}')",
            request.endpoint,
            request.image_bytes.len(),
            request.image_field_name
        );

        let form = Self::build_form(&request)?;

        let mut builder = self
            .client
            .post(&request.endpoint)
            .header("Accept", "application/json")
            .multipart(form);

        if let Some(authorization) = &request.authorization {
            builder = builder.header("Authorization", authorization.clone());
        }

        let response = builder.send().await.map_err(|e| UploadError::Transport {
            status: 0,
            status_text: e.to_string(),
        })?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or("").to_string();
        let body = response.text().await.map_err(|e| UploadError::Transport {
            status: status.as_u16(),
            status_text: e.to_string(),
        })?;

        log::debug!("[TRANSPORT] Response {}: {}", status, body);

        Ok(TransportResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}
