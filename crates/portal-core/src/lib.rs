//! Tutoring Portal Core
//!
//! Wires the session store and the preference records onto one local
//! storage database. Construct one [`Portal`] per profile and hand out
//! references to it.

mod config;
mod error;
mod portal;

pub use config::Config;
pub use error::CoreError;
pub use portal::Portal;

// Re-export core components
pub use portal_preferences::{
    AccessibilityOption, AccessibilityPreferences, AccessibilitySettings, FontSizeMode,
    FontSizePreference, PreferenceError, ResolvedTheme, Theme, ThemePreference,
};
pub use portal_sessions::{
    Clock, DraftError, ManualClock, SessionDraft, SessionError, SessionInput, SessionPatch,
    SessionStats, SessionStatus, SessionStore, Subject, SystemClock, TutoringSession,
};
pub use portal_storage::{Database, LocalStorage, MemoryStorage, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
