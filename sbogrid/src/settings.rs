//! Host settings.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::locale::Locale;

/// Settings shared by every table on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Locale tag, `tr` or `en`.
    pub locale: String,
    /// Pixels per matrix scroll nudge.
    pub scroll_step: u32,
    /// Directory of the file-backed layout store.
    pub layout_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: "tr".to_string(),
            scroll_step: Self::DEFAULT_SCROLL_STEP,
            layout_dir: None,
        }
    }
}

impl Settings {
    pub const DEFAULT_SCROLL_STEP: u32 = 30;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn locale_tag(mut self, tag: impl Into<String>) -> Self {
        self.locale = tag.into();
        self
    }

    pub fn scroll_step(mut self, step: u32) -> Self {
        self.scroll_step = step;
        self
    }

    pub fn layout_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.layout_dir = Some(dir.into());
        self
    }

    /// The configured locale. Unknown tags fall back to the default.
    pub fn locale(&self) -> Locale {
        Locale::by_tag(&self.locale).unwrap_or_else(|| {
            log::warn!("unknown locale {:?}, using default", self.locale);
            Locale::default()
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }
}
