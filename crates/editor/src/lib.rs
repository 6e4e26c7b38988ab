//! HtmlPad Editor
//!
//! The text operations engine behind HtmlPad:
//! - Rope-based document buffer with wholesale replacement semantics
//! - Reserved-word highlighting as a pure span-producing scan
//! - Plain-substring find and replace-all
//! - 1-based line navigation

pub mod buffer;
pub mod commands;
pub mod highlight;
pub mod navigate;
pub mod search;

pub use buffer::TextBuffer;
pub use commands::{Command, CommandExecutor, CommandResult};
pub use highlight::{HighlightSpan, KeywordSet};
pub use navigate::GotoLineError;
pub use search::{FindOutcome, ReplaceOutcome};
