//! Editor Session
//!
//! Owns the document buffer, the keyword set and the derived highlight
//! spans, and coordinates file I/O, printing and the text operations
//! engine. The session is the single writer of the buffer; every mutation
//! path recomputes the highlight spans before returning, so stale spans
//! never survive an edit.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;

use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use htmlpad_core::events::LogLevel;
use htmlpad_core::{AppConfig, DocumentInfo, Event, EventBus, HtmlPadError, Result};
use htmlpad_editor::buffer::TextBuffer;
use htmlpad_editor::commands::{Command, CommandExecutor, CommandResult};
use htmlpad_editor::highlight::{self, HighlightSpan, KeywordSet};

/// Line, character and word counts for the status readout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferStats {
    /// Total lines in the buffer
    pub lines: usize,
    /// Total characters in the buffer
    pub chars: usize,
    /// Total words in the buffer
    pub words: usize,
}

/// The editing session: one buffer, one keyword set, one owner
pub struct EditorSession {
    config: AppConfig,
    events: Arc<EventBus>,
    buffer: TextBuffer,
    keywords: KeywordSet,
    spans: Vec<HighlightSpan>,
    executor: CommandExecutor,
    document: Option<DocumentInfo>,
}

impl EditorSession {
    /// Create a session with an empty buffer and the default keyword set
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            events: Arc::new(EventBus::new()),
            buffer: TextBuffer::new(),
            keywords: KeywordSet::default(),
            spans: Vec::new(),
            executor: CommandExecutor::new(),
            document: None,
        }
    }

    /// Get the event bus for subscribing to session events
    pub fn events(&self) -> Arc<EventBus> {
        Arc::clone(&self.events)
    }

    /// Current configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The document buffer
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// The keyword set used for highlighting
    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Highlight spans for the current buffer content
    pub fn spans(&self) -> &[HighlightSpan] {
        &self.spans
    }

    /// Metadata for the open document, if any
    pub fn document(&self) -> Option<&DocumentInfo> {
        self.document.as_ref()
    }

    /// Selection set by the last successful find
    pub fn selection(&self) -> Option<std::ops::Range<usize>> {
        self.executor.selection()
    }

    /// Current caret offset
    pub fn caret(&self) -> usize {
        self.executor.caret()
    }

    /// Start a fresh untitled document
    pub fn new_document(&mut self) {
        self.buffer = TextBuffer::new();
        self.executor.execute(Command::NewDocument, &mut self.buffer);
        self.document = None;
        self.after_mutation();
    }

    /// Open a document from disk
    ///
    /// A read failure leaves the current buffer untouched.
    pub async fn open(&mut self, path: PathBuf) -> Result<()> {
        info!("Opening document: {:?}", path);

        let buffer = TextBuffer::from_file(path.clone()).await?;
        self.buffer = buffer;
        self.executor = CommandExecutor::new();
        self.document = Some(DocumentInfo::probe(path.clone()).await?);

        self.config.add_recent_file(path.clone());
        self.events.emit(Event::ConfigChanged);

        self.after_mutation();
        self.events.emit(Event::DocumentOpened(path));
        Ok(())
    }

    /// Save the document to its current path
    ///
    /// A write failure leaves the in-memory document unchanged.
    pub async fn save(&mut self) -> Result<()> {
        self.buffer.save().await?;

        if let Some(path) = self.buffer.path().cloned() {
            self.document = Some(DocumentInfo::probe(path.clone()).await?);
            self.events.emit(Event::DocumentSaved(path));
        }
        Ok(())
    }

    /// Save the document to a new path
    pub async fn save_as(&mut self, path: PathBuf) -> Result<()> {
        self.buffer.save_as(path.clone()).await?;
        self.document = Some(DocumentInfo::probe(path.clone()).await?);
        self.events.emit(Event::DocumentSaved(path));
        Ok(())
    }

    /// Find the first occurrence of a query and select it
    pub fn find(&mut self, query: &str) -> CommandResult {
        let result = self.execute(Command::Find(query.to_string()));
        if !query.is_empty() {
            self.events.emit(Event::SearchFinished {
                found: result.success,
            });
        }
        result
    }

    /// Replace every occurrence of a search string
    pub fn replace_all(&mut self, search: &str, replacement: &str) -> CommandResult {
        self.execute(Command::ReplaceAll {
            search: search.to_string(),
            replacement: replacement.to_string(),
        })
    }

    /// Move the caret to a 1-based line number given as raw input
    pub fn goto_line(&mut self, input: &str) -> CommandResult {
        self.execute(Command::GotoLine(input.to_string()))
    }

    /// Execute an editor command, restoring the highlight invariant after
    /// any mutation
    pub fn execute(&mut self, command: Command) -> CommandResult {
        let mutates = command.mutates_buffer();
        let result = self.executor.execute(command, &mut self.buffer);
        if mutates {
            self.after_mutation();
        }
        result
    }

    /// Line, character and word counts for the status line
    pub fn stats(&self) -> BufferStats {
        BufferStats {
            lines: self.buffer.line_count(),
            chars: self.buffer.char_count(),
            words: self.buffer.word_count(),
        }
    }

    /// Hand the buffer text verbatim to the configured print spooler
    pub async fn print(&self) -> Result<()> {
        let spooler = &self.config.print.spooler;
        info!("Spooling document to {}", spooler);

        let mut child = tokio::process::Command::new(spooler)
            .args(&self.config.print.args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| HtmlPadError::Print(format!("failed to start {}: {}", spooler, e)))?;

        // The pipe write can fail if the spooler exits early; report the
        // exit status first, it carries the clearer signal
        let text = self.buffer.text();
        let write_result = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()).await,
            None => Ok(()),
        };

        let status = child.wait().await?;
        if !status.success() {
            return Err(HtmlPadError::Print(format!(
                "{} exited with {}",
                spooler, status
            )));
        }
        write_result?;

        self.events.emit(Event::Log {
            level: LogLevel::Info,
            message: format!("spooled {} bytes to {}", text.len(), spooler),
        });
        Ok(())
    }

    /// Shut the session down: persist configuration and notify listeners
    pub async fn shutdown(&self) -> Result<()> {
        debug!("Session shutdown");
        self.config.save().await?;
        self.events.emit(Event::Shutdown);
        Ok(())
    }

    /// Recompute derived state after a buffer mutation
    ///
    /// Highlight spans are a function of the current buffer and keyword
    /// set; they are rebuilt in full here, never patched.
    fn after_mutation(&mut self) {
        let text = self.buffer.text();

        self.spans = if self.config.highlight.enabled {
            highlight::scan(&text, &self.keywords)
        } else {
            Vec::new()
        };

        self.events.emit(Event::DocumentReplaced {
            chars: self.buffer.char_count(),
            lines: self.buffer.line_count(),
        });
        self.events.emit(Event::HighlightsRecomputed {
            spans: self.spans.len(),
        });
    }
}
