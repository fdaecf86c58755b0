//! Uploads pasted and dropped images to a configurable image host and
//! rewrites the editor buffer to reference the hosted URL.
//!
//! The host editor, notifier and network are trait seams
//! (`core::interfaces::adapters`); everything host-specific about the
//! supported backends lives in descriptor data (`HostRegistry`), so a new
//! backend is a new descriptor entry rather than new upload or parse code.

pub mod adapters;
pub mod core;
pub mod global_constants;
pub mod utils;

pub use crate::adapters::ReqwestTransport;
pub use crate::core::host_registry::HostRegistry;
pub use crate::core::interfaces::adapters::{
    DropEvent, EditorAdapter, Notifier, PasteEvent, TransportRequest, TransportResponse,
    UploadTransport,
};
pub use crate::core::models::{
    AuthScheme, CursorPosition, HostDescriptor, HostSettings, PluginSettings, UploadError,
    UploadRequest, UploadSource,
};
pub use crate::core::orchestrators::{
    EditorEventKind, ImageUploaderPlugin, SubscriptionHandle, UploadDispatcher,
};
