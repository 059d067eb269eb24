//! Run Settings

use crate::error::Result;
use crate::tools::normalize::NormalizeOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_WIKI_BASE_URL: &str = "https://en.wikipedia.org/";
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://www.google.com/";
pub const DEFAULT_USER_AGENT: &str = concat!("wikibox/", env!("CARGO_PKG_VERSION"));

/// Everything a run can be tuned with. Every field has a default, so a config
/// file only needs the keys it wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub wiki_base_url: String,
    pub search_base_url: String,
    pub user_agent: String,
    /// Request timeout; `None` leaves requests unbounded.
    pub timeout_ms: Option<u64>,
    pub output_dir: PathBuf,
    pub normalize: NormalizeOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wiki_base_url: DEFAULT_WIKI_BASE_URL.into(),
            search_base_url: DEFAULT_SEARCH_BASE_URL.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            timeout_ms: None,
            output_dir: PathBuf::from("."),
            normalize: NormalizeOptions::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults for missing keys.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
