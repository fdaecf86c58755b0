use crate::core::models::CursorPosition;

/// Payload of a paste event, as handed over by the host editor.
///
/// `image_bytes` is set when the clipboard holds an image file; `text` when
/// it holds plain text (which may turn out to be an image URL).
#[derive(Debug, Clone, Default)]
pub struct PasteEvent {
    pub image_bytes: Option<Vec<u8>>,
    pub text: Option<String>,
}

/// Payload of a drop event: the dragged URL, when the drop carried one.
#[derive(Debug, Clone, Default)]
pub struct DropEvent {
    pub url: Option<String>,
}

/// Seam to the host editor's buffer: cursor lookup and text replacement.
///
/// The plugin never walks the buffer; it only captures a cursor position at
/// event time and replaces ranges relative to it.
pub trait EditorAdapter: Send + Sync {
    fn cursor(&self) -> CursorPosition;

    /// Replaces the current selection (possibly empty) with `text`.
    fn replace_selection(&self, text: &str);

    /// Replaces the characters between `from` and `to` with `text`.
    fn replace_range(&self, text: &str, from: CursorPosition, to: CursorPosition);
}
