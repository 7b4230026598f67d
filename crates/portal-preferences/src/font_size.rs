//! Root font size preference

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use portal_storage::LocalStorage;

use crate::read_item;
use crate::Result;

pub const FONT_SIZE_STORAGE_KEY: &str = "app-font-size-mode";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSizeMode {
    #[default]
    Normal,
    Large,
}

impl FontSizeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontSizeMode::Normal => "normal",
            FontSizeMode::Large => "large",
        }
    }

    /// Root font size in CSS pixels; every rem-based size scales from it.
    pub fn root_font_px(&self) -> u32 {
        match self {
            FontSizeMode::Normal => 16,
            FontSizeMode::Large => 18,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            FontSizeMode::Normal => FontSizeMode::Large,
            FontSizeMode::Large => FontSizeMode::Normal,
        }
    }
}

impl std::fmt::Display for FontSizeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FontSizeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "normal" => Ok(FontSizeMode::Normal),
            "large" => Ok(FontSizeMode::Large),
            _ => Err(format!("Unknown font size mode: {}", s)),
        }
    }
}

#[derive(Clone)]
pub struct FontSizePreference {
    storage: Arc<dyn LocalStorage>,
}

impl FontSizePreference {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> FontSizeMode {
        read_item(self.storage.as_ref(), FONT_SIZE_STORAGE_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn set(&self, mode: FontSizeMode) -> Result<()> {
        self.storage.set_item(FONT_SIZE_STORAGE_KEY, mode.as_str())?;
        tracing::debug!(mode = %mode, "Saved font size preference");
        Ok(())
    }

    pub fn toggle(&self) -> Result<FontSizeMode> {
        let mode = self.load().toggled();
        self.set(mode)?;
        Ok(mode)
    }
}
