mod cursor_position;
mod host_descriptor;
mod plugin_settings;
mod upload;
mod upload_error;

pub use cursor_position::CursorPosition;
pub use host_descriptor::{AuthScheme, HostDescriptor};
pub use plugin_settings::PluginSettings;
pub use upload::{HostSettings, UploadRequest, UploadSource};
pub use upload_error::UploadError;
