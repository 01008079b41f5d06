//! Configuration structures for the renaming pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{FakrenError, Result};
use crate::naming::SlashStyle;

/// Main configuration for fakren.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FakrenConfig {
    /// Filename composition configuration.
    pub naming: NamingConfig,

    /// PDF text-layer configuration.
    pub pdf: PdfConfig,

    /// Input intake limits.
    pub input: InputConfig,

    /// Output packaging configuration.
    pub output: OutputConfig,
}

/// Filename composition configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Replace `/` in the reference with a full-width slash instead of a hyphen.
    pub pretty_slash: bool,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self { pretty_slash: true }
    }
}

impl NamingConfig {
    /// Slash style selected by this configuration.
    pub fn slash_style(&self) -> SlashStyle {
        if self.pretty_slash {
            SlashStyle::FullWidth
        } else {
            SlashStyle::Hyphen
        }
    }
}

/// PDF text-layer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages of text to read (0 = unlimited).
    pub max_pages: usize,

    /// Separator inserted between the text of consecutive pages.
    pub page_separator: String,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            max_pages: 0,
            page_separator: "\n".to_string(),
        }
    }
}

/// Input intake limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Maximum combined size of all files in one batch, in bytes.
    pub max_total_bytes: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_total_bytes: 128 * 1024 * 1024,
        }
    }
}

/// Archive compression method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    #[default]
    Deflated,
    Stored,
}

/// Output packaging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name of the archive written when more than one file is renamed.
    pub archive_name: String,

    /// Compression used for archive entries.
    pub compression: Compression,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            archive_name: "renamed_pdfs.zip".to_string(),
            compression: Compression::Deflated,
        }
    }
}

impl FakrenConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| FakrenError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| FakrenError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
