mod editor_adapter;
mod notifier;
mod upload_transport;

pub use editor_adapter::{DropEvent, EditorAdapter, PasteEvent};
pub use notifier::Notifier;
pub use upload_transport::{TransportRequest, TransportResponse, UploadTransport};
