/// A line/character coordinate in the editor buffer, as reported by the host
/// editor's cursor API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub line: usize,
    pub ch: usize,
}

impl CursorPosition {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }

    /// The position `width` characters to the right on the same line.
    pub fn advanced_by(&self, width: usize) -> Self {
        Self {
            line: self.line,
            ch: self.ch + width,
        }
    }
}
