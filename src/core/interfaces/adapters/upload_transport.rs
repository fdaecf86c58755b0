use async_trait::async_trait;

use crate::core::models::UploadError;

/// One multipart POST, fully resolved: no host knowledge left in here.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub endpoint: String,
    /// Already formatted by the host's auth scheme; absent for unauthenticated hosts.
    pub authorization: Option<String>,
    /// Name of the multipart part carrying the image bytes.
    pub image_field_name: String,
    pub image_bytes: Vec<u8>,
    /// Extra text parts, included only when the host requires them.
    pub extra_fields: Vec<(String, String)>,
}

/// Raw HTTP outcome; the dispatcher decides what the status means.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Seam to the network: one GET to retrieve remote image bytes, one POST to
/// deliver them. Errors here are network-level only; HTTP statuses come back
/// in the response for the caller to judge. No retries at this layer.
#[async_trait]
pub trait UploadTransport: Send + Sync {
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, UploadError>;

    async fn post_multipart(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, UploadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success_covers_the_2xx_range() {
        let mut response = TransportResponse {
            status: 200,
            status_text: "OK".to_string(),
            body: String::new(),
        };
        assert!(response.is_success());

        response.status = 299;
        assert!(response.is_success());

        response.status = 301;
        assert!(!response.is_success());

        response.status = 199;
        assert!(!response.is_success());
    }
}
