//! Document Metadata
//!
//! Classification and metadata for the file currently being edited.

use std::path::{Path, PathBuf};
use chrono::{DateTime, Local};
use tracing::debug;

use crate::error::Result;

/// Document kind classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Html,
    Text,
    Unknown,
}

impl DocumentKind {
    /// Detect document kind from extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "html" | "htm" | "xhtml" => DocumentKind::Html,
            "txt" => DocumentKind::Text,
            _ => DocumentKind::Unknown,
        }
    }

    /// Detect document kind from a path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .map(|e| Self::from_extension(&e.to_string_lossy()))
            .unwrap_or(DocumentKind::Unknown)
    }

    /// Human-readable kind label
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Html => "HTML",
            DocumentKind::Text => "plain text",
            DocumentKind::Unknown => "unknown",
        }
    }
}

/// Metadata about the open document
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    /// Full path to the document
    pub path: PathBuf,
    /// Detected document kind
    pub kind: DocumentKind,
    /// Last modification time, if the file exists on disk
    pub modified: Option<DateTime<Local>>,
}

impl DocumentInfo {
    /// Create metadata for a path without touching the filesystem
    pub fn new(path: PathBuf) -> Self {
        let kind = DocumentKind::from_path(&path);
        Self {
            path,
            kind,
            modified: None,
        }
    }

    /// Create metadata for a path, reading the modification time from disk
    ///
    /// A missing or unreadable file yields metadata without a timestamp
    /// rather than an error; the document may not have been saved yet.
    pub async fn probe(path: PathBuf) -> Result<Self> {
        let mut info = Self::new(path);

        match tokio::fs::metadata(&info.path).await {
            Ok(meta) => {
                info.modified = meta.modified().ok().map(DateTime::<Local>::from);
            }
            Err(e) => {
                debug!("No metadata for {:?}: {}", info.path, e);
            }
        }

        Ok(info)
    }

    /// Display title: the file name, or "Untitled" for pathless documents
    pub fn title(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(DocumentKind::from_extension("html"), DocumentKind::Html);
        assert_eq!(DocumentKind::from_extension("HTM"), DocumentKind::Html);
        assert_eq!(DocumentKind::from_extension("xhtml"), DocumentKind::Html);
        assert_eq!(DocumentKind::from_extension("txt"), DocumentKind::Text);
        assert_eq!(DocumentKind::from_extension("rs"), DocumentKind::Unknown);
    }

    #[test]
    fn test_kind_from_path() {
        assert_eq!(
            DocumentKind::from_path(Path::new("/tmp/index.html")),
            DocumentKind::Html
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("/tmp/no_extension")),
            DocumentKind::Unknown
        );
    }

    #[test]
    fn test_title() {
        let info = DocumentInfo::new(PathBuf::from("/tmp/page.html"));
        assert_eq!(info.title(), "page.html");
        assert_eq!(info.kind, DocumentKind::Html);
    }

    #[tokio::test]
    async fn test_probe_missing_file() {
        let info = DocumentInfo::probe(PathBuf::from("/definitely/not/here.html"))
            .await
            .unwrap();
        assert!(info.modified.is_none());
    }
}
