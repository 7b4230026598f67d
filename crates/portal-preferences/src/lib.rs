//! Tutoring Portal Preferences
//!
//! Each preference owns its own storage key. Reads that fail or find an
//! unrecognised value fall back to the default; writes report failure.

mod accessibility;
mod error;
mod font_size;
mod theme;

pub use accessibility::{AccessibilityOption, AccessibilityPreferences, AccessibilitySettings};
pub use error::PreferenceError;
pub use font_size::{FontSizeMode, FontSizePreference, FONT_SIZE_STORAGE_KEY};
pub use theme::{ResolvedTheme, Theme, ThemePreference, THEME_STORAGE_KEY};

pub type Result<T> = std::result::Result<T, PreferenceError>;

use portal_storage::LocalStorage;

/// Read a raw value, treating an unreadable store as an absent value.
pub(crate) fn read_item(storage: &dyn LocalStorage, key: &str) -> Option<String> {
    match storage.get_item(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Failed to read preference, using default");
            None
        }
    }
}
