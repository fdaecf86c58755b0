#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "Markdown Image Uploader";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_REGISTRY: &str = "[REGISTRY]";
pub const LOG_TAG_TRANSPORT: &str = "[TRANSPORT]";
pub const LOG_TAG_DISPATCH: &str = "[DISPATCH]";
pub const LOG_TAG_PLUGIN: &str = "[PLUGIN]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";

pub const PLACEHOLDER_MARKUP: &str = "![Uploading...]()";
pub const FAILURE_MARKUP_PLAIN: &str = "[Upload failed, please retry]";

pub const MESSAGE_UPLOAD_SUCCESS: &str = "Image uploaded successfully!";
pub const MESSAGE_UPLOAD_FAILED: &str = "Image upload failed!";
pub const MESSAGE_HOST_NOT_CONFIGURED: &str =
    "Please configure the selected image host in settings first";

pub const PARSE_FAILURE_REASON: &str = "Failed to parse response";

pub const HOST_ID_IMGUR: &str = "imgur";
pub const HOST_ID_SMMS: &str = "smms";
pub const HOST_ID_CLOUDINARY: &str = "cloudinary";
pub const HOST_ID_LSKY: &str = "lsky";

pub const DEFAULT_HOST_ID: &str = HOST_ID_IMGUR;

pub const SETTINGS_DIR_NAME: &str = "markdown-image-uploader";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const UPLOAD_PART_FILE_NAME: &str = "image.png";
pub const UPLOAD_PART_MIME_TYPE: &str = "image/png";
