//! Session Store
//!
//! CRUD over the tutoring session collection. The collection is one JSON
//! array under [`SESSIONS_STORAGE_KEY`]; no other component writes that key.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use portal_storage::LocalStorage;

use crate::clock::{Clock, SystemClock};
use crate::error::SessionError;
use crate::session::{generate_session_id, SessionInput, SessionPatch, TutoringSession};
use crate::status::SessionStatus;
use crate::Result;

pub const SESSIONS_STORAGE_KEY: &str = "tutoring_sessions";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total: usize,
    pub upcoming: usize,
    pub live: usize,
    pub completed: usize,
    pub today: usize,
    pub tomorrow: usize,
}

pub struct SessionStore {
    storage: Arc<dyn LocalStorage>,
    clock: Arc<dyn Clock>,
    /// Serializes read-modify-write cycles within this process
    write_lock: Arc<Mutex<()>>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self::with_clock(storage, Arc::new(SystemClock))
    }

    pub fn with_clock(storage: Arc<dyn LocalStorage>, clock: Arc<dyn Clock>) -> Self {
        Self {
            storage,
            clock,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn generate_id(&self) -> String {
        generate_session_id(self.clock.now())
    }

    /// The stored records as plain JSON, one value per session.
    fn read_records(&self) -> Result<Vec<Value>> {
        match self.storage.get_item(SESSIONS_STORAGE_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(SessionError::MalformedData),
            None => Ok(Vec::new()),
        }
    }

    /// Records a mutation starts from. Storage failures propagate so nothing
    /// is written over data that could not be read; a blob that is not a JSON
    /// array is replaced.
    fn records_for_write(&self) -> Result<Vec<Value>> {
        match self.read_records() {
            Err(SessionError::MalformedData(e)) => {
                tracing::warn!(key = SESSIONS_STORAGE_KEY, error = %e, "Replacing stored sessions that are not a JSON array");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    fn persist(&self, records: &[Value]) -> Result<()> {
        let raw = serde_json::to_string(records).map_err(SessionError::Serialization)?;
        self.storage.set_item(SESSIONS_STORAGE_KEY, &raw)?;
        Ok(())
    }

    /// All sessions in insertion order. Never fails: absent, unreadable or
    /// corrupt data reads as an empty collection, and a record that does not
    /// decode is skipped on its own.
    pub fn get_all(&self) -> Vec<TutoringSession> {
        match self.read_records() {
            Ok(records) => records.iter().filter_map(decode).collect(),
            Err(e) => {
                tracing::warn!(key = SESSIONS_STORAGE_KEY, error = %e, "Discarding unreadable sessions");
                Vec::new()
            }
        }
    }

    pub fn get(&self, session_id: &str) -> Option<TutoringSession> {
        self.get_all().into_iter().find(|s| s.id == session_id)
    }

    /// Add a new session and persist the collection.
    pub fn create(&self, input: SessionInput) -> Result<TutoringSession> {
        let _guard = self.write_lock.lock();

        let session = TutoringSession::create(input, self.clock.now());
        let mut records = self.records_for_write()?;
        records.push(serde_json::to_value(&session).map_err(SessionError::Serialization)?);

        if let Err(e) = self.persist(&records) {
            tracing::error!(session_id = %session.id, error = %e, "Failed to save session");
            return Err(e);
        }

        tracing::info!(
            session_id = %session.id,
            title = %session.title,
            subject = %session.subject,
            "Created tutoring session"
        );

        Ok(session)
    }

    /// Merge `patch` into the session with `session_id`.
    pub fn update(&self, session_id: &str, patch: SessionPatch) -> Result<TutoringSession> {
        patch.validate()?;

        let _guard = self.write_lock.lock();

        let mut records = self.records_for_write()?;
        let index = records
            .iter()
            .position(|record| record_id(record) == Some(session_id))
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))?;

        // A record this version cannot read is left exactly as stored
        let mut session =
            TutoringSession::deserialize(&records[index]).map_err(SessionError::MalformedData)?;
        session.apply(patch, self.clock.now());
        records[index] = serde_json::to_value(&session).map_err(SessionError::Serialization)?;

        if let Err(e) = self.persist(&records) {
            tracing::error!(session_id = %session_id, error = %e, "Failed to update session");
            return Err(e);
        }

        tracing::debug!(
            session_id = %session.id,
            status = %session.status,
            "Updated tutoring session"
        );

        Ok(session)
    }

    /// Remove a session. Returns false if no session had that id.
    pub fn delete(&self, session_id: &str) -> Result<bool> {
        let _guard = self.write_lock.lock();

        let mut records = self.records_for_write()?;
        let before = records.len();
        records.retain(|record| record_id(record) != Some(session_id));

        if records.len() == before {
            tracing::debug!(session_id = %session_id, "No session to delete");
            return Ok(false);
        }

        self.persist(&records)?;
        tracing::info!(session_id = %session_id, "Deleted tutoring session");

        Ok(true)
    }

    pub fn get_by_status(&self, status: SessionStatus) -> Vec<TutoringSession> {
        self.get_all()
            .into_iter()
            .filter(|s| s.status == status)
            .collect()
    }

    pub fn is_today(&self, scheduled_time: &DateTime<Utc>) -> bool {
        local_date(scheduled_time) == self.clock.today()
    }

    pub fn is_tomorrow(&self, scheduled_time: &DateTime<Utc>) -> bool {
        self.clock
            .today()
            .checked_add_signed(Duration::days(1))
            .is_some_and(|tomorrow| local_date(scheduled_time) == tomorrow)
    }

    pub fn stats(&self) -> SessionStats {
        let today = self.clock.today();
        let tomorrow = today.checked_add_signed(Duration::days(1));

        self.get_all()
            .iter()
            .fold(SessionStats::default(), |mut stats, session| {
                stats.total += 1;
                match session.status {
                    SessionStatus::Upcoming => stats.upcoming += 1,
                    SessionStatus::Live => stats.live += 1,
                    SessionStatus::Completed => stats.completed += 1,
                }

                let day = local_date(&session.scheduled_time);
                if day == today {
                    stats.today += 1;
                } else if Some(day) == tomorrow {
                    stats.tomorrow += 1;
                }
                stats
            })
    }

    /// Drop the whole collection. Safe to call when nothing is stored.
    pub fn clear_all(&self) -> Result<()> {
        let _guard = self.write_lock.lock();
        self.storage.remove_item(SESSIONS_STORAGE_KEY)?;
        tracing::info!("Cleared all tutoring sessions");
        Ok(())
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            clock: Arc::clone(&self.clock),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

fn decode(record: &Value) -> Option<TutoringSession> {
    match TutoringSession::deserialize(record) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!(
                session_id = record_id(record).unwrap_or("<missing>"),
                error = %e,
                "Skipping incompatible session record"
            );
            None
        }
    }
}

fn local_date(timestamp: &DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}
