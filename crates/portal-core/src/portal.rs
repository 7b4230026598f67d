//! Portal facade
//!
//! Owns the local storage database and the components built on it.

use std::sync::Arc;

use portal_preferences::{
    AccessibilityPreferences, AccessibilitySettings, FontSizeMode, FontSizePreference, Theme,
    ThemePreference,
};
use portal_sessions::{Clock, SessionDraft, SessionStore, SystemClock, TutoringSession};
use portal_storage::{Database, LocalStorage};

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

pub struct Portal {
    config: Config,
    db: Database,
    sessions: SessionStore,
    accessibility: AccessibilityPreferences,
    font_size: FontSizePreference,
    theme: ThemePreference,
}

impl Portal {
    /// Open (or create) the profile database named by `config`.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let db = Database::open(&config.database_path)?.with_quota(config.storage_quota_bytes);
        Ok(Self::assemble(config, db, Arc::new(SystemClock)))
    }

    /// A throwaway portal backed by an in-memory database.
    pub fn in_memory(clock: Arc<dyn Clock>) -> Result<Self> {
        let config = Config::new(Config::data_dir());
        let db = Database::open_in_memory()?.with_quota(config.storage_quota_bytes);
        Ok(Self::assemble(config, db, clock))
    }

    fn assemble(config: Config, db: Database, clock: Arc<dyn Clock>) -> Self {
        let storage: Arc<dyn LocalStorage> = Arc::new(db.clone());

        tracing::info!(
            database = %config.database_path.display(),
            quota = config.storage_quota_bytes,
            "Portal storage opened"
        );

        Self {
            sessions: SessionStore::with_clock(Arc::clone(&storage), clock),
            accessibility: AccessibilityPreferences::new(Arc::clone(&storage)),
            font_size: FontSizePreference::new(Arc::clone(&storage)),
            theme: ThemePreference::new(storage),
            config,
            db,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    // === Sessions ===

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Validate a creation form and store the resulting session.
    pub fn create_session_from_draft(&self, draft: &SessionDraft) -> Result<TutoringSession> {
        let input = draft.to_input().map_err(|errors| {
            tracing::debug!(error_count = errors.len(), "Rejected session draft");
            CoreError::InvalidDraft(errors)
        })?;
        Ok(self.sessions.create(input)?)
    }

    // === Preferences ===

    pub fn accessibility(&self) -> &AccessibilityPreferences {
        &self.accessibility
    }

    pub fn font_size(&self) -> &FontSizePreference {
        &self.font_size
    }

    pub fn theme(&self) -> &ThemePreference {
        &self.theme
    }

    /// Everything the shell needs to render its first frame.
    pub fn load_preferences(&self) -> (AccessibilitySettings, FontSizeMode, Theme) {
        (
            self.accessibility.load(),
            self.font_size.load(),
            self.theme.load(),
        )
    }

    /// Drop every stored key: sessions and preferences alike.
    pub fn reset(&self) -> Result<()> {
        self.db.clear()?;
        tracing::info!("Portal storage reset");
        Ok(())
    }
}

impl Clone for Portal {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            db: self.db.clone(),
            sessions: self.sessions.clone(),
            accessibility: self.accessibility.clone(),
            font_size: self.font_size.clone(),
            theme: self.theme.clone(),
        }
    }
}
