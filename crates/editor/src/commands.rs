//! Editor Commands
//!
//! The dispatch table from host actions to text operations. Each command
//! executes synchronously against the buffer and reports a user-facing
//! result; file-level actions live in the host session, not here.

use std::ops::Range;

use crate::buffer::TextBuffer;
use crate::navigate;
use crate::search::{self, FindOutcome};

/// Editor command type
#[derive(Debug, Clone)]
pub enum Command {
    /// Clear the buffer for a fresh document
    NewDocument,
    /// Find the first occurrence of a query and select it
    Find(String),
    /// Replace every occurrence of a search string
    ReplaceAll {
        search: String,
        replacement: String,
    },
    /// Move the caret to a 1-based line number (raw user input)
    GotoLine(String),
}

impl Command {
    /// Whether executing this command rewrites the buffer text
    ///
    /// After any mutating command the caller must recompute highlight
    /// spans; stale spans must not survive an edit.
    pub fn mutates_buffer(&self) -> bool {
        matches!(self, Command::NewDocument | Command::ReplaceAll { .. })
    }
}

/// Command execution result
#[derive(Debug)]
pub struct CommandResult {
    pub success: bool,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// Command executor
///
/// Holds the transient interaction state around the buffer: the last find
/// query, the current selection and the caret offset.
pub struct CommandExecutor {
    find_query: String,
    selection: Option<Range<usize>>,
    caret: usize,
}

impl CommandExecutor {
    pub fn new() -> Self {
        Self {
            find_query: String::new(),
            selection: None,
            caret: 0,
        }
    }

    /// Execute a command on a buffer
    pub fn execute(&mut self, command: Command, buffer: &mut TextBuffer) -> CommandResult {
        match command {
            Command::NewDocument => {
                buffer.set_text("");
                self.selection = None;
                self.caret = 0;
                CommandResult::ok()
            }

            Command::Find(query) => {
                let text = buffer.text();
                match search::find(&text, &query) {
                    FindOutcome::Found { start, end } => {
                        self.find_query = query;
                        self.selection = Some(start..end);
                        self.caret = start;
                        CommandResult::with_message(format!("Match at offset {}", start))
                    }
                    FindOutcome::NotFound => {
                        self.selection = None;
                        CommandResult::error("text not found")
                    }
                    // Empty query is a no-op, not a failed search
                    FindOutcome::EmptyQuery => CommandResult::ok(),
                }
            }

            Command::ReplaceAll {
                search: query,
                replacement,
            } => {
                if query.is_empty() {
                    return CommandResult::ok();
                }

                let outcome = search::replace_all(&buffer.text(), &query, &replacement);
                if outcome.count > 0 {
                    buffer.set_text(&outcome.buffer);
                    self.selection = None;
                    self.caret = self.caret.min(buffer.char_count());
                }
                CommandResult::with_message(format!("Replaced {} occurrences", outcome.count))
            }

            Command::GotoLine(input) => {
                let text = buffer.text();
                match navigate::goto_line(&text, &input) {
                    Ok(offset) => {
                        self.selection = None;
                        self.caret = offset;
                        CommandResult::with_message(format!(
                            "Line {} at offset {}",
                            input.trim(),
                            offset
                        ))
                    }
                    Err(e) => CommandResult::error(e.to_string()),
                }
            }
        }
    }

    /// The selection set by the last successful find
    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    /// Current caret offset
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// The last query a find matched
    pub fn find_query(&self) -> &str {
        &self.find_query
    }
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_selects_match() {
        let mut buffer = TextBuffer::from_str("foo bar foo");
        let mut executor = CommandExecutor::new();

        let result = executor.execute(Command::Find("bar".into()), &mut buffer);
        assert!(result.success);
        assert_eq!(executor.selection(), Some(4..7));
        assert_eq!(executor.caret(), 4);
        assert_eq!(executor.find_query(), "bar");
    }

    #[test]
    fn test_find_not_found_is_reportable() {
        let mut buffer = TextBuffer::from_str("foo");
        let mut executor = CommandExecutor::new();

        let result = executor.execute(Command::Find("baz".into()), &mut buffer);
        assert!(!result.success);
        assert_eq!(result.message.as_deref(), Some("text not found"));
        assert_eq!(executor.selection(), None);
    }

    #[test]
    fn test_find_empty_query_is_silent() {
        let mut buffer = TextBuffer::from_str("foo");
        let mut executor = CommandExecutor::new();

        let result = executor.execute(Command::Find(String::new()), &mut buffer);
        assert!(result.success);
        assert!(result.message.is_none());
    }

    #[test]
    fn test_replace_all_rewrites_buffer() {
        let mut buffer = TextBuffer::from_str("foo bar foo");
        let mut executor = CommandExecutor::new();

        let result = executor.execute(
            Command::ReplaceAll {
                search: "foo".into(),
                replacement: "baz".into(),
            },
            &mut buffer,
        );
        assert!(result.success);
        assert_eq!(result.message.as_deref(), Some("Replaced 2 occurrences"));
        assert_eq!(buffer.text(), "baz bar baz");
    }

    #[test]
    fn test_replace_all_empty_search_is_noop() {
        let mut buffer = TextBuffer::from_str("foo");
        let mut executor = CommandExecutor::new();

        let result = executor.execute(
            Command::ReplaceAll {
                search: String::new(),
                replacement: "x".into(),
            },
            &mut buffer,
        );
        assert!(result.success);
        assert_eq!(buffer.text(), "foo");
        assert!(!buffer.is_dirty());
    }

    #[test]
    fn test_goto_line_moves_caret() {
        let mut buffer = TextBuffer::from_str("line1\nline2\nline3");
        let mut executor = CommandExecutor::new();

        let result = executor.execute(Command::GotoLine("2".into()), &mut buffer);
        assert!(result.success);
        assert_eq!(executor.caret(), 6);
    }

    #[test]
    fn test_goto_line_error_messages() {
        let mut buffer = TextBuffer::from_str("one line");
        let mut executor = CommandExecutor::new();

        let result = executor.execute(Command::GotoLine("abc".into()), &mut buffer);
        assert_eq!(result.message.as_deref(), Some("invalid line number"));

        let result = executor.execute(Command::GotoLine("5".into()), &mut buffer);
        assert_eq!(result.message.as_deref(), Some("line number out of range"));
    }

    #[test]
    fn test_new_document_clears_state() {
        let mut buffer = TextBuffer::from_str("foo bar");
        let mut executor = CommandExecutor::new();

        executor.execute(Command::Find("bar".into()), &mut buffer);
        executor.execute(Command::NewDocument, &mut buffer);

        assert!(buffer.is_empty());
        assert_eq!(executor.selection(), None);
        assert_eq!(executor.caret(), 0);
    }
}
