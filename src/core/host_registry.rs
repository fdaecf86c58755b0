use crate::core::models::{AuthScheme, HostDescriptor, HostSettings, UploadError};
use crate::global_constants;

/// The closed set of supported image hosts.
///
/// All host-specific knowledge lives in the descriptors; upload and parse
/// code never branches on host ids. Adding a host is one new entry here.
pub struct HostRegistry {
    descriptors: Vec<HostDescriptor>,
}

impl Default for HostRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl HostRegistry {
    pub fn new() -> Self {
        let descriptors = vec![
            HostDescriptor {
                id: global_constants::HOST_ID_IMGUR,
                display_name: "Imgur",
                endpoint_template: "https://api.imgur.com/3/upload",
                auth_scheme: AuthScheme::ClientIdHeader("client_id"),
                required_setting_keys: &["client_id"],
                image_field_name: "image",
                extra_field: None,
                response_url_path: &["data", "link"],
                body_status_field: None,
            },
            HostDescriptor {
                id: global_constants::HOST_ID_SMMS,
                display_name: "SM.MS",
                endpoint_template: "https://sm.ms/api/v2/upload",
                auth_scheme: AuthScheme::RawHeaderValue("api_token"),
                required_setting_keys: &["api_token"],
                image_field_name: "smfile",
                extra_field: None,
                response_url_path: &["data", "url"],
                body_status_field: Some("success"),
            },
            HostDescriptor {
                id: global_constants::HOST_ID_CLOUDINARY,
                display_name: "Cloudinary",
                endpoint_template: "https://api.cloudinary.com/v1_1/{cloud_name}/image/upload",
                auth_scheme: AuthScheme::None,
                required_setting_keys: &["cloud_name", "upload_preset"],
                image_field_name: "file",
                extra_field: Some(("upload_preset", "upload_preset")),
                response_url_path: &["secure_url"],
                body_status_field: None,
            },
            HostDescriptor {
                id: global_constants::HOST_ID_LSKY,
                display_name: "Lsky Pro",
                endpoint_template: "{server}/api/v1/upload",
                auth_scheme: AuthScheme::BearerHeader("token"),
                required_setting_keys: &["server", "token"],
                image_field_name: "file",
                extra_field: None,
                response_url_path: &["data", "links", "url"],
                body_status_field: Some("status"),
            },
        ];

        Self { descriptors }
    }

    pub fn descriptors(&self) -> &[HostDescriptor] {
        &self.descriptors
    }

    /// Looks up a descriptor; an unknown id is a configuration error, never a panic.
    pub fn descriptor(&self, host_id: &str) -> Result<&HostDescriptor, UploadError> {
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.id == host_id)
            .ok_or_else(|| UploadError::Configuration(format!("Unknown image host: {}", host_id)))
    }

    /// True iff the host exists and every required setting is a non-empty
    /// string. Pure function of its inputs, no network access.
    pub fn is_configured(&self, host_id: &str, settings: &HostSettings) -> bool {
        let Ok(descriptor) = self.descriptor(host_id) else {
            return false;
        };

        descriptor
            .required_setting_keys
            .iter()
            .all(|key| settings.get(*key).map(|v| !v.is_empty()).unwrap_or(false))
    }

    /// Substitutes every `{key}` placeholder in the endpoint template with the
    /// matching setting value. Literal endpoints pass through unchanged.
    pub fn resolve_endpoint(
        &self,
        descriptor: &HostDescriptor,
        settings: &HostSettings,
    ) -> Result<String, UploadError> {
        let mut endpoint = descriptor.endpoint_template.to_string();

        for key in descriptor.required_setting_keys {
            let placeholder = format!("{{{}}}", key);
            if !endpoint.contains(&placeholder) {
                continue;
            }

            let value = settings
                .get(*key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    UploadError::Configuration(format!(
                        "{} requires the '{}' setting",
                        descriptor.display_name, key
                    ))
                })?;

            endpoint = endpoint.replace(&placeholder, value);
        }

        log::debug!("[REGISTRY] Resolved endpoint for {}: {}", descriptor.id, endpoint);
        Ok(endpoint)
    }
}
