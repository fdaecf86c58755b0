mod upload_dispatcher;
mod uploader_plugin;

pub use upload_dispatcher::UploadDispatcher;
pub use uploader_plugin::{EditorEventKind, ImageUploaderPlugin, SubscriptionHandle};
