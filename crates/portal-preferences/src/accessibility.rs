//! Accessibility toggles
//!
//! Five independent switches, each persisted as `"true"` / `"false"` under
//! its own key.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use portal_storage::LocalStorage;

use crate::read_item;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccessibilityOption {
    HighContrast,
    ScreenReaderMode,
    ReducedMotion,
    SoundEnabled,
    FocusIndicators,
}

impl AccessibilityOption {
    pub const ALL: [AccessibilityOption; 5] = [
        AccessibilityOption::HighContrast,
        AccessibilityOption::ScreenReaderMode,
        AccessibilityOption::ReducedMotion,
        AccessibilityOption::SoundEnabled,
        AccessibilityOption::FocusIndicators,
    ];

    pub fn storage_key(&self) -> &'static str {
        match self {
            AccessibilityOption::HighContrast => "accessibility-high-contrast",
            AccessibilityOption::ScreenReaderMode => "accessibility-screen-reader",
            AccessibilityOption::ReducedMotion => "accessibility-reduced-motion",
            AccessibilityOption::SoundEnabled => "accessibility-sound-enabled",
            AccessibilityOption::FocusIndicators => "accessibility-focus-indicators",
        }
    }

    pub fn default_value(&self) -> bool {
        matches!(
            self,
            AccessibilityOption::SoundEnabled | AccessibilityOption::FocusIndicators
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySettings {
    pub high_contrast: bool,
    pub screen_reader_mode: bool,
    pub reduced_motion: bool,
    pub sound_enabled: bool,
    pub focus_indicators: bool,
}

impl AccessibilitySettings {
    pub fn get(&self, option: AccessibilityOption) -> bool {
        match option {
            AccessibilityOption::HighContrast => self.high_contrast,
            AccessibilityOption::ScreenReaderMode => self.screen_reader_mode,
            AccessibilityOption::ReducedMotion => self.reduced_motion,
            AccessibilityOption::SoundEnabled => self.sound_enabled,
            AccessibilityOption::FocusIndicators => self.focus_indicators,
        }
    }

    fn set(&mut self, option: AccessibilityOption, enabled: bool) {
        let slot = match option {
            AccessibilityOption::HighContrast => &mut self.high_contrast,
            AccessibilityOption::ScreenReaderMode => &mut self.screen_reader_mode,
            AccessibilityOption::ReducedMotion => &mut self.reduced_motion,
            AccessibilityOption::SoundEnabled => &mut self.sound_enabled,
            AccessibilityOption::FocusIndicators => &mut self.focus_indicators,
        };
        *slot = enabled;
    }
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            high_contrast: false,
            screen_reader_mode: false,
            reduced_motion: false,
            sound_enabled: true,
            focus_indicators: true,
        }
    }
}

#[derive(Clone)]
pub struct AccessibilityPreferences {
    storage: Arc<dyn LocalStorage>,
}

impl AccessibilityPreferences {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> AccessibilitySettings {
        let mut settings = AccessibilitySettings::default();
        for option in AccessibilityOption::ALL {
            settings.set(option, self.get(option));
        }
        settings
    }

    /// Stored value, or the option's default when nothing usable is stored.
    pub fn get(&self, option: AccessibilityOption) -> bool {
        match read_item(self.storage.as_ref(), option.storage_key()).as_deref() {
            Some("true") => true,
            Some("false") => false,
            _ => option.default_value(),
        }
    }

    pub fn set(&self, option: AccessibilityOption, enabled: bool) -> Result<()> {
        self.storage
            .set_item(option.storage_key(), if enabled { "true" } else { "false" })?;
        tracing::debug!(option = ?option, enabled, "Saved accessibility preference");
        Ok(())
    }

    /// Flip an option and return its new value.
    pub fn toggle(&self, option: AccessibilityOption) -> Result<bool> {
        let enabled = !self.get(option);
        self.set(option, enabled)?;
        Ok(enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_storage::MemoryStorage;

    #[test]
    fn test_defaults() {
        let prefs = AccessibilityPreferences::new(Arc::new(MemoryStorage::new()));
        let settings = prefs.load();

        assert!(!settings.high_contrast);
        assert!(!settings.screen_reader_mode);
        assert!(!settings.reduced_motion);
        assert!(settings.sound_enabled);
        assert!(settings.focus_indicators);
        assert_eq!(settings, AccessibilitySettings::default());

        for option in AccessibilityOption::ALL {
            assert_eq!(settings.get(option), option.default_value());
        }
    }

    #[test]
    fn test_set_and_toggle() {
        let storage = MemoryStorage::new();
        let prefs = AccessibilityPreferences::new(Arc::new(storage.clone()));

        prefs.set(AccessibilityOption::HighContrast, true).unwrap();
        assert_eq!(
            storage.get_item("accessibility-high-contrast").unwrap().as_deref(),
            Some("true")
        );

        assert!(!prefs.toggle(AccessibilityOption::SoundEnabled).unwrap());
        assert!(prefs.toggle(AccessibilityOption::ScreenReaderMode).unwrap());

        let settings = prefs.load();
        assert!(settings.high_contrast);
        assert!(settings.screen_reader_mode);
        assert!(!settings.sound_enabled);
        assert!(settings.get(AccessibilityOption::FocusIndicators));
    }

    #[test]
    fn test_unrecognised_value_uses_default() {
        let storage = MemoryStorage::new();
        storage.set_item("accessibility-focus-indicators", "yes").unwrap();
        let prefs = AccessibilityPreferences::new(Arc::new(storage.clone()));

        assert!(prefs.get(AccessibilityOption::FocusIndicators));

        storage.set_unavailable(true);
        assert_eq!(prefs.load(), AccessibilitySettings::default());
        assert!(prefs.set(AccessibilityOption::ReducedMotion, true).is_err());
    }
}
