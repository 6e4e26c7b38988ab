//! Application Configuration
//!
//! Manages all editor settings including:
//! - Find/goto display preferences
//! - Highlight presentation hints
//! - Print spooling
//! - Recently opened documents

use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use directories::ProjectDirs;
use tracing::{info, debug};

use crate::error::Result;

/// Editor display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Prefix displayed lines with their 1-based line number
    pub line_numbers: bool,
    /// Lines of surrounding context shown around a find match
    pub context_lines: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            line_numbers: true,
            context_lines: 1,
        }
    }
}

/// Highlight presentation configuration
///
/// The scan itself is fixed; these settings only tell the host how to
/// render the resulting spans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// Recompute and show reserved-word highlights
    pub enabled: bool,
    /// Color name the host uses when rendering keyword spans
    pub color: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color: "blue".to_string(),
        }
    }
}

/// Print spooling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintConfig {
    /// Spool command that receives the document on stdin
    pub spooler: String,
    /// Extra arguments passed to the spool command
    pub args: Vec<String>,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            spooler: "lpr".to_string(),
            args: Vec::new(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration version for migrations
    pub version: u32,
    /// Editor display settings
    pub editor: EditorConfig,
    /// Highlight presentation settings
    pub highlight: HighlightConfig,
    /// Print settings
    pub print: PrintConfig,
    /// Recently opened documents
    pub recent_files: Vec<PathBuf>,
    /// Maximum recent documents to store
    pub max_recent_files: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            editor: EditorConfig::default(),
            highlight: HighlightConfig::default(),
            print: PrintConfig::default(),
            recent_files: Vec::new(),
            max_recent_files: 10,
        }
    }
}

impl AppConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "htmlpad", "HtmlPad")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| dirs::home_dir().map(|home| home.join(".htmlpad")))
    }

    /// Get the configuration file path
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load configuration from file
    pub async fn load() -> Result<Self> {
        let config_file = Self::config_file()
            .ok_or_else(|| crate::error::HtmlPadError::Config("Cannot determine config path".into()))?;

        if config_file.exists() {
            debug!("Loading config from {:?}", config_file);
            let contents = tokio::fs::read_to_string(&config_file).await?;
            let config: AppConfig = toml::from_str(&contents)?;
            Ok(config)
        } else {
            info!("Config file not found, using defaults");
            let config = AppConfig::default();
            config.save().await?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub async fn save(&self) -> Result<()> {
        let config_file = Self::config_file()
            .ok_or_else(|| crate::error::HtmlPadError::Config("Cannot determine config path".into()))?;

        // Ensure directory exists
        if let Some(parent) = config_file.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let contents = toml::to_string_pretty(self)?;
        tokio::fs::write(&config_file, contents).await?;

        debug!("Config saved to {:?}", config_file);
        Ok(())
    }

    /// Add a recently opened document
    pub fn add_recent_file(&mut self, path: PathBuf) {
        // Remove if already exists
        self.recent_files.retain(|p| p != &path);

        // Add to front
        self.recent_files.insert(0, path);

        // Trim to max size
        self.recent_files.truncate(self.max_recent_files);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.highlight.enabled);
        assert_eq!(config.highlight.color, "blue");
        assert_eq!(config.print.spooler, "lpr");
        assert_eq!(config.editor.context_lines, 1);
    }

    #[test]
    fn test_recent_files() {
        let mut config = AppConfig::default();
        config.max_recent_files = 3;

        config.add_recent_file(PathBuf::from("/doc1.html"));
        config.add_recent_file(PathBuf::from("/doc2.html"));
        config.add_recent_file(PathBuf::from("/doc3.html"));
        config.add_recent_file(PathBuf::from("/doc4.html"));

        assert_eq!(config.recent_files.len(), 3);
        assert_eq!(config.recent_files[0], PathBuf::from("/doc4.html"));
    }

    #[test]
    fn test_recent_files_dedup() {
        let mut config = AppConfig::default();

        config.add_recent_file(PathBuf::from("/doc1.html"));
        config.add_recent_file(PathBuf::from("/doc2.html"));
        config.add_recent_file(PathBuf::from("/doc1.html"));

        assert_eq!(config.recent_files.len(), 2);
        assert_eq!(config.recent_files[0], PathBuf::from("/doc1.html"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let restored: AppConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(restored.version, config.version);
        assert_eq!(restored.print.spooler, config.print.spooler);
        assert_eq!(restored.editor.line_numbers, config.editor.line_numbers);
    }
}
