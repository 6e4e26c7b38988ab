//! HtmlPad Core - shared types
//!
//! This crate provides the shared foundation for the HtmlPad editor:
//! configuration, error taxonomy, the session event bus and document
//! metadata.

pub mod config;
pub mod document;
pub mod error;
pub mod events;

pub use config::AppConfig;
pub use document::{DocumentInfo, DocumentKind};
pub use error::{HtmlPadError, Result};
pub use events::{Event, EventBus};

/// HtmlPad version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "HtmlPad";
