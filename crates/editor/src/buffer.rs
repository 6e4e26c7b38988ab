//! Text Buffer
//!
//! Rope-backed document buffer. The text is owned exclusively by the editor
//! session and is only ever replaced wholesale: on load, on new-document and
//! on replace-all. All public offsets are zero-based character offsets.

use ropey::{Rope, RopeSlice};
use std::path::PathBuf;
use unicode_segmentation::UnicodeSegmentation;

use htmlpad_core::{HtmlPadError, Result};

/// Document buffer
pub struct TextBuffer {
    /// The rope containing the text
    rope: Rope,
    /// File path (if loaded from file)
    path: Option<PathBuf>,
    /// Whether the buffer has been modified since the last load or save
    dirty: bool,
}

impl TextBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            path: None,
            dirty: false,
        }
    }

    /// Create a buffer from a string
    pub fn from_str(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            path: None,
            dirty: false,
        }
    }

    /// Load a buffer from a file
    ///
    /// A read failure yields an error and no buffer; the caller keeps
    /// whatever buffer it already had.
    pub async fn from_file(path: PathBuf) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path).await?;
        let mut buffer = Self::from_str(&content);
        buffer.path = Some(path);
        Ok(buffer)
    }

    /// Save the buffer to its file
    ///
    /// A write failure leaves the dirty flag set; the in-memory document is
    /// never affected by a failed save.
    pub async fn save(&mut self) -> Result<()> {
        if let Some(path) = &self.path {
            tokio::fs::write(path, self.rope.to_string()).await?;
            self.dirty = false;
            Ok(())
        } else {
            Err(HtmlPadError::Document("no file path set".into()))
        }
    }

    /// Save the buffer to a new file
    pub async fn save_as(&mut self, path: PathBuf) -> Result<()> {
        tokio::fs::write(&path, self.rope.to_string()).await?;
        self.path = Some(path);
        self.dirty = false;
        Ok(())
    }

    /// Replace the entire buffer text
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.dirty = true;
    }

    /// Get the full text content
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Get a line by index (0-based)
    pub fn line(&self, line_idx: usize) -> Option<RopeSlice> {
        if line_idx < self.rope.len_lines() {
            Some(self.rope.line(line_idx))
        } else {
            None
        }
    }

    /// Get line content as string
    pub fn line_str(&self, line_idx: usize) -> Option<String> {
        self.line(line_idx).map(|l| l.to_string())
    }

    /// Get the number of lines
    ///
    /// A trailing line break counts an empty final line, matching the
    /// navigation functions in [`crate::navigate`].
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get the total character count
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get the byte length
    pub fn byte_len(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Count words in the buffer
    pub fn word_count(&self) -> usize {
        self.rope.to_string().unicode_words().count()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Check if the buffer has been modified
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Get the file path
    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    /// Convert a char offset to its 0-based line index
    pub fn char_to_line(&self, char_idx: usize) -> usize {
        self.rope.char_to_line(char_idx.min(self.rope.len_chars()))
    }

    /// Char offset of the first character of a 0-based line index
    pub fn line_to_char(&self, line_idx: usize) -> Option<usize> {
        if line_idx < self.rope.len_lines() {
            Some(self.rope.line_to_char(line_idx))
        } else {
            None
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let buffer = TextBuffer::from_str("Hello, World!");
        assert_eq!(buffer.text(), "Hello, World!");
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.char_count(), 13);
        assert!(!buffer.is_dirty());
    }

    #[test]
    fn test_set_text_is_wholesale() {
        let mut buffer = TextBuffer::from_str("old content");
        buffer.set_text("<html></html>");
        assert_eq!(buffer.text(), "<html></html>");
        assert!(buffer.is_dirty());
    }

    #[test]
    fn test_line_counts() {
        let buffer = TextBuffer::from_str("line1\nline2\nline3");
        assert_eq!(buffer.line_count(), 3);
        assert_eq!(buffer.line_to_char(1), Some(6));
        assert_eq!(buffer.line_to_char(3), None);
        assert_eq!(buffer.char_to_line(6), 1);

        // A trailing newline addresses an empty final line
        let buffer = TextBuffer::from_str("a\n");
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.line_to_char(1), Some(2));
    }

    #[test]
    fn test_word_count() {
        let buffer = TextBuffer::from_str("hello brave new world");
        assert_eq!(buffer.word_count(), 4);
        assert_eq!(TextBuffer::new().word_count(), 0);
    }

    #[test]
    fn test_char_offsets_not_bytes() {
        let buffer = TextBuffer::from_str("á\nb");
        assert_eq!(buffer.char_count(), 3);
        assert_eq!(buffer.line_to_char(1), Some(2));
    }

    #[tokio::test]
    async fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");

        let mut buffer = TextBuffer::from_str("<html><body>hi</body></html>");
        buffer.save_as(path.clone()).await.unwrap();
        assert!(!buffer.is_dirty());
        assert_eq!(buffer.path(), Some(&path));

        let reloaded = TextBuffer::from_file(path).await.unwrap();
        assert_eq!(reloaded.text(), "<html><body>hi</body></html>");
    }

    #[tokio::test]
    async fn test_save_without_path_fails() {
        let mut buffer = TextBuffer::from_str("unsaved");
        assert!(buffer.save().await.is_err());
    }

    #[tokio::test]
    async fn test_missing_file_fails() {
        let result = TextBuffer::from_file(PathBuf::from("/no/such/file.html")).await;
        assert!(result.is_err());
    }
}
