//! CLI commands for HtmlPad
//!
//! The command-line host around the editor session. Each of the original
//! editor's menu actions maps to one command here; reportable outcomes
//! ("text not found", "invalid line number") are printed, not raised.

use std::path::PathBuf;

use anyhow::Result;
use serde_json::json;
use tracing::info;

use htmlpad_editor::highlight;

use crate::session::EditorSession;

/// Print a buffer line with its surrounding context per the configuration
fn print_context(session: &EditorSession, line_idx: usize) {
    let cfg = &session.config().editor;
    let context = cfg.context_lines as usize;

    let first = line_idx.saturating_sub(context);
    let last = (line_idx + context).min(session.buffer().line_count().saturating_sub(1));

    for idx in first..=last {
        if let Some(text) = session.buffer().line_str(idx) {
            let text = text.trim_end_matches('\n');
            if cfg.line_numbers {
                println!("{:>6}  {}", idx + 1, text);
            } else {
                println!("{}", text);
            }
        }
    }
}

/// Create a new empty document
pub struct NewCommand {
    /// Path of the document to create
    pub file: PathBuf,
}

impl NewCommand {
    /// Execute the new command
    pub async fn execute(&self, session: &mut EditorSession) -> Result<()> {
        if self.file.exists() {
            anyhow::bail!("{} already exists", self.file.display());
        }

        session.new_document();
        session.save_as(self.file.clone()).await?;

        info!("Created {:?}", self.file);
        println!("Created {}", self.file.display());
        Ok(())
    }
}

/// List reserved-word highlight spans for a document
pub struct HighlightCommand {
    /// Document to scan
    pub file: PathBuf,
    /// Emit machine-readable JSON instead of a table
    pub json: bool,
}

impl HighlightCommand {
    /// Execute the highlight command
    pub async fn execute(&self, session: &mut EditorSession) -> Result<()> {
        session.open(self.file.clone()).await?;

        let spans = session.spans();
        let keywords = session.keywords();

        if self.json {
            let items: Vec<_> = spans
                .iter()
                .map(|s| {
                    json!({
                        "start": s.start,
                        "len": s.len,
                        "keyword": keywords.get(s.keyword),
                    })
                })
                .collect();

            let doc = json!({
                "file": self.file.display().to_string(),
                "spans": items,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        } else {
            for s in spans {
                println!(
                    "{:>8} {:>4}  {}",
                    s.start,
                    s.len,
                    keywords.get(s.keyword).unwrap_or("?")
                );
            }

            let marks = highlight::keyword_marks(&session.buffer().text(), spans);
            let marked = marks.iter().filter(|m| m.is_some()).count();
            println!(
                "{} keyword spans, {} of {} characters marked",
                spans.len(),
                marked,
                marks.len()
            );
        }
        Ok(())
    }
}

/// Find the first occurrence of a query
pub struct FindCommand {
    /// Document to search
    pub file: PathBuf,
    /// Text to look for
    pub query: String,
}

impl FindCommand {
    /// Execute the find command
    pub async fn execute(&self, session: &mut EditorSession) -> Result<()> {
        session.open(self.file.clone()).await?;

        let result = session.find(&self.query);

        match session.selection() {
            Some(range) => {
                if let Some(message) = result.message {
                    println!("{}", message);
                }
                let line_idx = session.buffer().char_to_line(range.start);
                print_context(session, line_idx);
            }
            None => {
                // Empty queries stay silent; a miss is reportable
                if let Some(message) = result.message {
                    println!("{}", message);
                }
            }
        }
        Ok(())
    }
}

/// Replace every occurrence of a search string
pub struct ReplaceCommand {
    /// Document to rewrite
    pub file: PathBuf,
    /// Text to replace
    pub search: String,
    /// Replacement text (may be empty)
    pub replacement: String,
    /// Write the result to this path instead of stdout
    pub output: Option<PathBuf>,
    /// Write the result back to the document itself
    pub in_place: bool,
}

impl ReplaceCommand {
    /// Execute the replace command
    pub async fn execute(&self, session: &mut EditorSession) -> Result<()> {
        session.open(self.file.clone()).await?;

        let result = session.replace_all(&self.search, &self.replacement);
        let message = result.message.unwrap_or_default();

        if self.in_place {
            session.save().await?;
            println!("{}", message);
        } else if let Some(output) = &self.output {
            session.save_as(output.clone()).await?;
            println!("{}", message);
        } else {
            // Result text goes to stdout, the status to stderr
            eprintln!("{}", message);
            print!("{}", session.buffer().text());
        }
        Ok(())
    }
}

/// Jump to a 1-based line number
pub struct GotoCommand {
    /// Document to navigate
    pub file: PathBuf,
    /// Raw line-number input
    pub line: String,
}

impl GotoCommand {
    /// Execute the goto command
    pub async fn execute(&self, session: &mut EditorSession) -> Result<()> {
        session.open(self.file.clone()).await?;

        let result = session.goto_line(&self.line);
        if let Some(message) = &result.message {
            println!("{}", message);
        }

        if result.success {
            let line_idx = session.buffer().char_to_line(session.caret());
            print_context(session, line_idx);
        }
        Ok(())
    }
}

/// Show document metadata and counts
pub struct InfoCommand {
    /// Document to inspect
    pub file: PathBuf,
    /// Emit machine-readable JSON
    pub json: bool,
}

impl InfoCommand {
    /// Execute the info command
    pub async fn execute(&self, session: &mut EditorSession) -> Result<()> {
        session.open(self.file.clone()).await?;

        let stats = session.stats();

        if self.json {
            let doc = json!({
                "file": self.file.display().to_string(),
                "kind": session.document().map(|d| d.kind.label()),
                "modified": session
                    .document()
                    .and_then(|d| d.modified)
                    .map(|m| m.to_rfc3339()),
                "lines": stats.lines,
                "chars": stats.chars,
                "words": stats.words,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        } else {
            if let Some(doc) = session.document() {
                println!("{}  ({})", doc.title(), doc.kind.label());
                if let Some(modified) = doc.modified {
                    println!("Modified: {}", modified.format("%Y-%m-%d %H:%M:%S"));
                }
            }
            println!(
                "Lines: {}  Chars: {}  Words: {}",
                stats.lines, stats.chars, stats.words
            );
        }
        Ok(())
    }
}

/// Send a document to the print spooler
pub struct PrintCommand {
    /// Document to print
    pub file: PathBuf,
}

impl PrintCommand {
    /// Execute the print command
    pub async fn execute(&self, session: &mut EditorSession) -> Result<()> {
        session.open(self.file.clone()).await?;
        session.print().await?;

        println!(
            "Spooled {} to {}",
            self.file.display(),
            session.config().print.spooler
        );
        Ok(())
    }
}
