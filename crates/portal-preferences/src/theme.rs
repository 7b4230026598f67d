//! Colour theme preference

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use portal_storage::LocalStorage;

use crate::read_item;
use crate::Result;

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    /// Follow the operating system
    System,
}

/// The theme actually applied once `System` is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// light -> dark -> system -> light
    pub fn next(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }

    pub fn resolve(&self, system_prefers_dark: bool) -> ResolvedTheme {
        match self {
            Theme::Light => ResolvedTheme::Light,
            Theme::Dark => ResolvedTheme::Dark,
            Theme::System if system_prefers_dark => ResolvedTheme::Dark,
            Theme::System => ResolvedTheme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

#[derive(Clone)]
pub struct ThemePreference {
    storage: Arc<dyn LocalStorage>,
}

impl ThemePreference {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self { storage }
    }

    /// The saved theme. A first visit, or an unrecognised value, saves and
    /// returns `Light`.
    pub fn load(&self) -> Theme {
        if let Some(theme) = read_item(self.storage.as_ref(), THEME_STORAGE_KEY)
            .and_then(|raw| raw.parse().ok())
        {
            return theme;
        }

        let theme = Theme::default();
        if let Err(e) = self.storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            tracing::warn!(error = %e, "Failed to save default theme");
        }
        theme
    }

    pub fn set(&self, theme: Theme) -> Result<()> {
        self.storage.set_item(THEME_STORAGE_KEY, theme.as_str())?;
        tracing::debug!(theme = %theme, "Saved theme preference");
        Ok(())
    }

    pub fn toggle(&self) -> Result<Theme> {
        let theme = self.load().next();
        self.set(theme)?;
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_storage::MemoryStorage;

    #[test]
    fn test_first_load_saves_light() {
        let storage = MemoryStorage::new();
        let pref = ThemePreference::new(Arc::new(storage.clone()));

        assert_eq!(pref.load(), Theme::Light);
        assert_eq!(
            storage.get_item(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("light")
        );

        storage.set_item(THEME_STORAGE_KEY, "sepia").unwrap();
        assert_eq!(pref.load(), Theme::Light);
        assert_eq!(
            storage.get_item(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("light")
        );
    }

    #[test]
    fn test_toggle_cycle() {
        let pref = ThemePreference::new(Arc::new(MemoryStorage::new()));
        assert_eq!(pref.toggle().unwrap(), Theme::Dark);
        assert_eq!(pref.toggle().unwrap(), Theme::System);
        assert_eq!(pref.toggle().unwrap(), Theme::Light);

        pref.set(Theme::System).unwrap();
        assert_eq!(pref.load(), Theme::System);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(Theme::Light.resolve(true), ResolvedTheme::Light);
        assert_eq!(Theme::Dark.resolve(false), ResolvedTheme::Dark);
        assert_eq!(Theme::System.resolve(true), ResolvedTheme::Dark);
        assert_eq!(Theme::System.resolve(false), ResolvedTheme::Light);
    }

    #[test]
    fn test_unavailable_storage() {
        let storage = MemoryStorage::new();
        storage.set_unavailable(true);
        let pref = ThemePreference::new(Arc::new(storage));

        assert_eq!(pref.load(), Theme::Light);
        assert!(pref.set(Theme::Dark).is_err());
    }
}
