use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::core::interfaces::adapters::{
    DropEvent, EditorAdapter, Notifier, PasteEvent, UploadTransport,
};
use crate::core::models::{CursorPosition, PluginSettings, UploadError, UploadRequest};
use crate::core::orchestrators::UploadDispatcher;
use crate::global_constants;
use crate::utils;

/// Which editor event a subscription covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEventKind {
    Drop,
    Paste,
}

/// Opaque token returned when a handler is bound; passing it back to
/// `unbind` releases the subscription. Not Clone: one handle, one binding.
#[derive(Debug, PartialEq, Eq)]
pub struct SubscriptionHandle {
    id: u64,
    kind: EditorEventKind,
}

impl SubscriptionHandle {
    pub fn kind(&self) -> EditorEventKind {
        self.kind
    }
}

/// Editor-side glue: receives drop and paste events, inserts the uploading
/// placeholder, runs one dispatch, splices the outcome back into the buffer
/// and notifies the user.
///
/// Each event captures the cursor once and runs to completion independently;
/// concurrent events are neither queued nor serialized, matching the
/// single-attempt contract of the dispatcher.
pub struct ImageUploaderPlugin {
    editor: Arc<dyn EditorAdapter>,
    notifier: Arc<dyn Notifier>,
    dispatcher: UploadDispatcher,
    settings: PluginSettings,
    next_subscription_id: AtomicU64,
    active_subscriptions: Mutex<Vec<(u64, EditorEventKind)>>,
}

impl ImageUploaderPlugin {
    pub fn build(
        editor: Arc<dyn EditorAdapter>,
        notifier: Arc<dyn Notifier>,
        transport: Arc<dyn UploadTransport>,
        settings: PluginSettings,
    ) -> Self {
        log::info!(
            "[PLUGIN] Initializing with default host {}",
            settings.default_host
        );

        Self {
            editor,
            notifier,
            dispatcher: UploadDispatcher::build(transport),
            settings,
            next_subscription_id: AtomicU64::new(1),
            active_subscriptions: Mutex::new(Vec::new()),
        }
    }

    /// Binds one handler for `kind`; the returned handle is the only way to
    /// unbind it again.
    pub fn bind(&self, kind: EditorEventKind) -> SubscriptionHandle {
        let id = self.next_subscription_id.fetch_add(1, Ordering::Relaxed);
        self.active_subscriptions.lock().unwrap().push((id, kind));
        log::debug!("[PLUGIN] Bound {:?} handler (subscription {})", kind, id);
        SubscriptionHandle { id, kind }
    }

    /// Releases a subscription. Returns false when the handle was already
    /// unbound.
    pub fn unbind(&self, handle: SubscriptionHandle) -> bool {
        let mut subscriptions = self.active_subscriptions.lock().unwrap();
        let before = subscriptions.len();
        subscriptions.retain(|(id, _)| *id != handle.id);
        let removed = subscriptions.len() < before;
        if removed {
            log::debug!(
                "[PLUGIN] Unbound {:?} handler (subscription {})",
                handle.kind,
                handle.id
            );
        }
        removed
    }

    fn is_bound(&self, kind: EditorEventKind) -> bool {
        self.active_subscriptions
            .lock()
            .unwrap()
            .iter()
            .any(|(_, k)| *k == kind)
    }

    /// Handles a paste event. Returns true when the event was consumed.
    ///
    /// A pasted image file wins over pasted text; pasted text is only
    /// consumed when it looks like an image URL, in which case it takes the
    /// same path as a dropped URL.
    pub async fn handle_paste(&self, event: PasteEvent) -> bool {
        if !self.is_bound(EditorEventKind::Paste) {
            return false;
        }

        if let Some(bytes) = event.image_bytes {
            if !self.ensure_host_configured() {
                return false;
            }

            let host_id = self.settings.default_host.clone();
            let cursor = self.insert_placeholder();
            let result = self.dispatch(UploadRequest::from_bytes(host_id, bytes)).await;
            self.splice_outcome(cursor, result, None);
            return true;
        }

        if let Some(text) = event.text {
            if utils::is_image_url(&text) {
                return self.handle_drop(DropEvent { url: Some(text) }).await;
            }
        }

        false
    }

    /// Handles a drop event carrying a URL. Returns true when consumed.
    pub async fn handle_drop(&self, event: DropEvent) -> bool {
        if !self.is_bound(EditorEventKind::Drop) && !self.is_bound(EditorEventKind::Paste) {
            return false;
        }

        let Some(url) = event.url else {
            return false;
        };

        if !self.ensure_host_configured() {
            return false;
        }

        let host_id = self.settings.default_host.clone();
        let cursor = self.insert_placeholder();
        let result = self
            .dispatch(UploadRequest::from_remote_url(host_id, url.clone()))
            .await;
        self.splice_outcome(cursor, result, Some(url));
        true
    }

    fn ensure_host_configured(&self) -> bool {
        let host_id = &self.settings.default_host;
        let host_settings = self.settings.host_settings(host_id);

        if self.dispatcher.is_configured(host_id, &host_settings) {
            return true;
        }

        log::warn!("[PLUGIN] Host {} not configured, ignoring event", host_id);
        self.notify_warning(global_constants::MESSAGE_HOST_NOT_CONFIGURED, None);
        false
    }

    /// Clears the selection and drops the placeholder at the cursor captured
    /// at event time. That position anchors the later replacement.
    fn insert_placeholder(&self) -> CursorPosition {
        let cursor = self.editor.cursor();
        self.editor.replace_selection("");
        self.editor
            .replace_range(global_constants::PLACEHOLDER_MARKUP, cursor, cursor);
        cursor
    }

    async fn dispatch(&self, request: UploadRequest) -> Result<String, UploadError> {
        let host_settings = self.settings.host_settings(&request.host_id);
        self.dispatcher.dispatch(request, &host_settings).await
    }

    fn splice_outcome(
        &self,
        cursor: CursorPosition,
        result: Result<String, UploadError>,
        original_url: Option<String>,
    ) {
        let placeholder_end =
            cursor.advanced_by(global_constants::PLACEHOLDER_MARKUP.chars().count());

        match result {
            Ok(hosted_url) => {
                let markup = format!("![]({})", hosted_url);
                self.editor.replace_range(&markup, cursor, placeholder_end);
                self.notify_success(global_constants::MESSAGE_UPLOAD_SUCCESS, None);
            }
            Err(error) => {
                let markup = match original_url {
                    Some(url) if self.settings.retain_original_path => {
                        format!("[Upload failed: Click to view original]({})", url)
                    }
                    _ => global_constants::FAILURE_MARKUP_PLAIN.to_string(),
                };
                self.editor.replace_range(&markup, cursor, placeholder_end);

                let reason = error.to_string();
                self.notify_error(global_constants::MESSAGE_UPLOAD_FAILED, Some(&reason));
            }
        }
    }

    fn notify_success(&self, message: &str, detail: Option<&str>) {
        if self.settings.show_notifications {
            self.notifier.add_success(message, detail);
        }
    }

    fn notify_warning(&self, message: &str, detail: Option<&str>) {
        if self.settings.show_notifications {
            self.notifier.add_warning(message, detail);
        }
    }

    fn notify_error(&self, message: &str, detail: Option<&str>) {
        if self.settings.show_notifications {
            self.notifier.add_error(message, detail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::interfaces::adapters::{TransportRequest, TransportResponse};
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// In-memory single-line buffer that applies replacements like the host
    /// editor would, so tests can assert on the final markup.
    struct MockEditor {
        buffer: Mutex<String>,
        cursor: CursorPosition,
    }

    impl MockEditor {
        fn with_content(content: &str, cursor_ch: usize) -> Self {
            Self {
                buffer: Mutex::new(content.to_string()),
                cursor: CursorPosition::new(0, cursor_ch),
            }
        }

        fn contents(&self) -> String {
            self.buffer.lock().unwrap().clone()
        }
    }

    impl EditorAdapter for MockEditor {
        fn cursor(&self) -> CursorPosition {
            self.cursor
        }

        fn replace_selection(&self, text: &str) {
            // Tests run with an empty selection; inserting nothing is a no-op.
            assert!(text.is_empty());
        }

        fn replace_range(&self, text: &str, from: CursorPosition, to: CursorPosition) {
            let mut buffer = self.buffer.lock().unwrap();
            let chars: Vec<char> = buffer.chars().collect();
            let end = to.ch.min(chars.len());
            let head: String = chars[..from.ch].iter().collect();
            let tail: String = chars[end..].iter().collect();
            *buffer = format!("{}{}{}", head, text, tail);
        }
    }

    #[derive(Default)]
    struct MockNotifier {
        messages: Mutex<Vec<(String, String, Option<String>)>>,
    }

    impl MockNotifier {
        fn recorded(&self) -> Vec<(String, String, Option<String>)> {
            self.messages.lock().unwrap().clone()
        }

        fn record(&self, level: &str, message: &str, detail: Option<&str>) {
            self.messages.lock().unwrap().push((
                level.to_string(),
                message.to_string(),
                detail.map(str::to_string),
            ));
        }
    }

    impl Notifier for MockNotifier {
        fn add_info(&self, message: &str, detail: Option<&str>) {
            self.record("info", message, detail);
        }
        fn add_success(&self, message: &str, detail: Option<&str>) {
            self.record("success", message, detail);
        }
        fn add_warning(&self, message: &str, detail: Option<&str>) {
            self.record("warning", message, detail);
        }
        fn add_error(&self, message: &str, detail: Option<&str>) {
            self.record("error", message, detail);
        }
    }

    struct MockTransport {
        fetch_result: Result<Vec<u8>, UploadError>,
        post_result: Result<TransportResponse, UploadError>,
        post_count: Mutex<usize>,
    }

    impl MockTransport {
        fn succeeding_with(url: &str) -> Self {
            Self {
                fetch_result: Ok(vec![1, 2, 3]),
                post_result: Ok(TransportResponse {
                    status: 200,
                    status_text: "OK".to_string(),
                    body: format!(r#"{{"data":{{"link":"{}"}}}}"#, url),
                }),
                post_count: Mutex::new(0),
            }
        }

        fn fetch_failing_with_404() -> Self {
            let mut mock = Self::succeeding_with("https://unused.example/x.png");
            mock.fetch_result = Err(UploadError::Fetch("HTTP 404: Not Found".to_string()));
            mock
        }
    }

    #[async_trait]
    impl UploadTransport for MockTransport {
        async fn fetch_image(&self, _url: &str) -> Result<Vec<u8>, UploadError> {
            self.fetch_result.clone()
        }

        async fn post_multipart(
            &self,
            _request: TransportRequest,
        ) -> Result<TransportResponse, UploadError> {
            *self.post_count.lock().unwrap() += 1;
            self.post_result.clone()
        }
    }

    fn imgur_settings(client_id: &str) -> PluginSettings {
        let mut settings = PluginSettings::default();
        let mut imgur = HashMap::new();
        imgur.insert("client_id".to_string(), client_id.to_string());
        settings.hosts.insert("imgur".to_string(), imgur);
        settings
    }

    struct Fixture {
        editor: Arc<MockEditor>,
        notifier: Arc<MockNotifier>,
        transport: Arc<MockTransport>,
        plugin: ImageUploaderPlugin,
    }

    fn fixture(transport: MockTransport, settings: PluginSettings) -> Fixture {
        let editor = Arc::new(MockEditor::with_content("", 0));
        let notifier = Arc::new(MockNotifier::default());
        let transport = Arc::new(transport);
        let plugin = ImageUploaderPlugin::build(
            Arc::clone(&editor) as Arc<dyn EditorAdapter>,
            Arc::clone(&notifier) as Arc<dyn Notifier>,
            Arc::clone(&transport) as Arc<dyn UploadTransport>,
            settings,
        );
        plugin.bind(EditorEventKind::Drop);
        plugin.bind(EditorEventKind::Paste);
        Fixture {
            editor,
            notifier,
            transport,
            plugin,
        }
    }

    #[tokio::test]
    async fn test_pasted_image_ends_as_markdown_image_markup() {
        let fx = fixture(
            MockTransport::succeeding_with("https://i.imgur.com/x.png"),
            imgur_settings("abc"),
        );

        let consumed = fx
            .plugin
            .handle_paste(PasteEvent {
                image_bytes: Some(vec![0xFF, 0xD8]),
                text: None,
            })
            .await;

        assert!(consumed);
        assert_eq!(fx.editor.contents(), "![](https://i.imgur.com/x.png)");
        let recorded = fx.notifier.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].0, "success");
    }

    #[tokio::test]
    async fn test_unconfigured_host_notifies_without_touching_buffer_or_network() {
        let fx = fixture(
            MockTransport::succeeding_with("https://i.imgur.com/x.png"),
            imgur_settings(""),
        );

        let consumed = fx
            .plugin
            .handle_paste(PasteEvent {
                image_bytes: Some(vec![1]),
                text: None,
            })
            .await;

        assert!(!consumed);
        assert_eq!(fx.editor.contents(), "");
        assert_eq!(*fx.transport.post_count.lock().unwrap(), 0);
        let recorded = fx.notifier.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].0, "warning");
    }

    #[tokio::test]
    async fn test_dropped_url_is_fetched_then_uploaded() {
        let fx = fixture(
            MockTransport::succeeding_with("https://i.imgur.com/y.png"),
            imgur_settings("abc"),
        );

        let consumed = fx
            .plugin
            .handle_drop(DropEvent {
                url: Some("https://example.com/cat.png".to_string()),
            })
            .await;

        assert!(consumed);
        assert_eq!(fx.editor.contents(), "![](https://i.imgur.com/y.png)");
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_original_link_when_retain_is_on() {
        let fx = fixture(MockTransport::fetch_failing_with_404(), imgur_settings("abc"));

        fx.plugin
            .handle_drop(DropEvent {
                url: Some("https://example.com/gone.png".to_string()),
            })
            .await;

        assert_eq!(
            fx.editor.contents(),
            "[Upload failed: Click to view original](https://example.com/gone.png)"
        );
        assert_eq!(*fx.transport.post_count.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_fetch_failure_without_retain_uses_plain_failure_markup() {
        let mut settings = imgur_settings("abc");
        settings.retain_original_path = false;
        let fx = fixture(MockTransport::fetch_failing_with_404(), settings);

        fx.plugin
            .handle_drop(DropEvent {
                url: Some("https://example.com/gone.png".to_string()),
            })
            .await;

        assert_eq!(fx.editor.contents(), "[Upload failed, please retry]");
    }

    #[tokio::test]
    async fn test_pasted_image_failure_has_no_original_to_retain() {
        let mut transport = MockTransport::succeeding_with("https://unused.example/x.png");
        transport.post_result = Ok(TransportResponse {
            status: 500,
            status_text: "Internal Server Error".to_string(),
            body: String::new(),
        });
        let fx = fixture(transport, imgur_settings("abc"));

        fx.plugin
            .handle_paste(PasteEvent {
                image_bytes: Some(vec![1]),
                text: None,
            })
            .await;

        assert_eq!(fx.editor.contents(), "[Upload failed, please retry]");
        let recorded = fx.notifier.recorded();
        assert_eq!(recorded[0].0, "error");
        assert_eq!(
            recorded[0].2.as_deref(),
            Some("HTTP 500: Internal Server Error")
        );
    }

    #[tokio::test]
    async fn test_notifications_off_still_uploads_and_edits_buffer() {
        let mut settings = imgur_settings("abc");
        settings.show_notifications = false;
        let fx = fixture(
            MockTransport::succeeding_with("https://i.imgur.com/x.png"),
            settings,
        );

        let consumed = fx
            .plugin
            .handle_paste(PasteEvent {
                image_bytes: Some(vec![1]),
                text: None,
            })
            .await;

        assert!(consumed);
        assert_eq!(fx.editor.contents(), "![](https://i.imgur.com/x.png)");
        assert!(fx.notifier.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_pasted_image_url_text_takes_the_drop_path() {
        let fx = fixture(
            MockTransport::succeeding_with("https://i.imgur.com/z.png"),
            imgur_settings("abc"),
        );

        let consumed = fx
            .plugin
            .handle_paste(PasteEvent {
                image_bytes: None,
                text: Some("https://example.com/photo.jpg".to_string()),
            })
            .await;

        assert!(consumed);
        assert_eq!(fx.editor.contents(), "![](https://i.imgur.com/z.png)");
    }

    #[tokio::test]
    async fn test_pasted_plain_text_is_not_consumed() {
        let fx = fixture(
            MockTransport::succeeding_with("https://i.imgur.com/z.png"),
            imgur_settings("abc"),
        );

        let consumed = fx
            .plugin
            .handle_paste(PasteEvent {
                image_bytes: None,
                text: Some("just some words".to_string()),
            })
            .await;

        assert!(!consumed);
        assert_eq!(fx.editor.contents(), "");
    }

    #[tokio::test]
    async fn test_drop_without_url_is_ignored() {
        let fx = fixture(
            MockTransport::succeeding_with("https://i.imgur.com/z.png"),
            imgur_settings("abc"),
        );

        let consumed = fx.plugin.handle_drop(DropEvent { url: None }).await;

        assert!(!consumed);
        assert_eq!(fx.editor.contents(), "");
    }

    #[tokio::test]
    async fn test_placeholder_replacement_respects_surrounding_text() {
        let editor = Arc::new(MockEditor::with_content("before  after", 7));
        let notifier = Arc::new(MockNotifier::default());
        let transport = Arc::new(MockTransport::succeeding_with("https://i.imgur.com/x.png"));
        let plugin = ImageUploaderPlugin::build(
            Arc::clone(&editor) as Arc<dyn EditorAdapter>,
            Arc::clone(&notifier) as Arc<dyn Notifier>,
            transport as Arc<dyn UploadTransport>,
            imgur_settings("abc"),
        );
        plugin.bind(EditorEventKind::Paste);

        plugin
            .handle_paste(PasteEvent {
                image_bytes: Some(vec![1]),
                text: None,
            })
            .await;

        assert_eq!(
            editor.contents(),
            "before ![](https://i.imgur.com/x.png) after"
        );
    }

    #[tokio::test]
    async fn test_unbound_paste_handler_ignores_events() {
        let editor = Arc::new(MockEditor::with_content("", 0));
        let notifier = Arc::new(MockNotifier::default());
        let transport = Arc::new(MockTransport::succeeding_with("https://i.imgur.com/x.png"));
        let plugin = ImageUploaderPlugin::build(
            Arc::clone(&editor) as Arc<dyn EditorAdapter>,
            Arc::clone(&notifier) as Arc<dyn Notifier>,
            transport as Arc<dyn UploadTransport>,
            imgur_settings("abc"),
        );

        let handle = plugin.bind(EditorEventKind::Paste);
        assert!(plugin.unbind(handle));

        let consumed = plugin
            .handle_paste(PasteEvent {
                image_bytes: Some(vec![1]),
                text: None,
            })
            .await;

        assert!(!consumed);
        assert_eq!(editor.contents(), "");
        assert!(notifier.recorded().is_empty());
    }

    #[test]
    fn test_unbind_is_single_use() {
        let editor = Arc::new(MockEditor::with_content("", 0));
        let notifier = Arc::new(MockNotifier::default());
        let transport = Arc::new(MockTransport::succeeding_with("https://x.example/a.png"));
        let plugin = ImageUploaderPlugin::build(
            editor as Arc<dyn EditorAdapter>,
            notifier as Arc<dyn Notifier>,
            transport as Arc<dyn UploadTransport>,
            PluginSettings::default(),
        );

        let first = plugin.bind(EditorEventKind::Drop);
        let second = plugin.bind(EditorEventKind::Drop);

        assert!(plugin.unbind(first));
        // The other subscription keeps the drop handler bound.
        assert!(plugin.is_bound(EditorEventKind::Drop));
        assert!(plugin.unbind(second));
        assert!(!plugin.is_bound(EditorEventKind::Drop));
    }
}
