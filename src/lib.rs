//! HtmlPad - HTML text editor
//!
//! A small text editor specialized for HTML files, built entirely in Rust.
//!
//! ## Features
//!
//! - **Keyword highlighting**: flat reserved-word scan producing highlight
//!   spans, decoupled from rendering
//! - **Find / Replace**: case-sensitive first-match search and
//!   non-overlapping replace-all
//! - **Go-to-line**: 1-based line navigation with reportable input errors
//! - **File I/O and printing**: async load/save and a verbatim handoff to
//!   the system print spooler
//!
//! ## Architecture
//!
//! HtmlPad is organized into specialized crates:
//!
//! - `htmlpad-core`: configuration, errors, events and document metadata
//! - `htmlpad-editor`: the document buffer and the text operations engine

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod commands;
pub mod session;

// Re-export main components for library usage
pub use htmlpad_core as core;
pub use htmlpad_editor as editor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::session::{BufferStats, EditorSession};
    pub use htmlpad_core::{AppConfig, Event, EventBus, HtmlPadError};
    pub use htmlpad_editor::{Command, CommandExecutor, KeywordSet, TextBuffer};
}
