//! Tutoring session record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SessionError;
use crate::status::{SessionStatus, Subject};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutoringSession {
    /// Unique identifier, never changes
    pub id: String,
    pub title: String,
    pub subject: Subject,
    /// Start of the slot
    #[serde(with = "iso_millis")]
    pub scheduled_time: DateTime<Utc>,
    /// Length in minutes
    pub duration: u32,
    pub status: SessionStatus,
    pub description: String,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation
    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
}

/// Everything the caller supplies for a new session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInput {
    pub title: String,
    pub subject: Subject,
    #[serde(with = "iso_millis")]
    pub scheduled_time: DateTime<Utc>,
    pub duration: u32,
    pub status: SessionStatus,
    #[serde(default)]
    pub description: String,
}

/// Fields `update` may change. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionPatch {
    pub title: Option<String>,
    pub subject: Option<Subject>,
    pub scheduled_time: Option<DateTime<Utc>>,
    pub duration: Option<u32>,
    pub status: Option<SessionStatus>,
    pub description: Option<String>,
}

impl SessionPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subject(mut self, subject: Subject) -> Self {
        self.subject = Some(subject);
        self
    }

    pub fn scheduled_time(mut self, scheduled_time: DateTime<Utc>) -> Self {
        self.scheduled_time = Some(scheduled_time);
        self
    }

    pub fn duration(mut self, minutes: u32) -> Self {
        self.duration = Some(minutes);
        self
    }

    pub fn status(mut self, status: SessionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check each supplied field on its own before anything is merged.
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(SessionError::InvalidField {
                    field: "title",
                    reason: "must not be empty",
                });
            }
        }

        if self.duration == Some(0) {
            return Err(SessionError::InvalidField {
                field: "duration",
                reason: "must be a positive number of minutes",
            });
        }

        Ok(())
    }
}

impl TutoringSession {
    pub(crate) fn create(input: SessionInput, now: DateTime<Utc>) -> Self {
        Self {
            id: generate_session_id(now),
            title: input.title,
            subject: input.subject,
            scheduled_time: input.scheduled_time,
            duration: input.duration,
            status: input.status,
            description: input.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a validated patch. `updated_at` always moves forward, even when
    /// the clock has not advanced since the last mutation.
    pub(crate) fn apply(&mut self, patch: SessionPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(subject) = patch.subject {
            self.subject = subject;
        }
        if let Some(scheduled_time) = patch.scheduled_time {
            self.scheduled_time = scheduled_time;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }

        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + chrono::Duration::milliseconds(1)
        };
    }

    /// Scheduled end of the slot
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.scheduled_time + chrono::Duration::minutes(i64::from(self.duration))
    }
}

/// `session_<unix millis of now>_<9 random chars>`
pub fn generate_session_id(now: DateTime<Utc>) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("session_{}_{}", now.timestamp_millis(), &random[..9])
}

/// RFC 3339 in UTC with exactly three fractional digits and a `Z` suffix.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ts(raw: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
    }

    fn sample() -> TutoringSession {
        TutoringSession::create(
            SessionInput {
                title: "Phonics Basics".to_string(),
                subject: Subject::PhonemicAwareness,
                scheduled_time: ts("2025-09-01T10:00:00.000Z"),
                duration: 30,
                status: SessionStatus::Upcoming,
                description: String::new(),
            },
            ts("2025-08-20T08:00:00.000Z"),
        )
    }

    #[test]
    fn test_generate_session_id_unique() {
        let now = ts("2025-08-20T08:00:00.000Z");
        let ids: HashSet<String> = (0..1000).map(|_| generate_session_id(now)).collect();
        assert_eq!(ids.len(), 1000);

        let id = generate_session_id(now);
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "session");
        assert_eq!(parts[1], now.timestamp_millis().to_string());
        assert_eq!(parts[2].len(), 9);
    }

    #[test]
    fn test_wire_format() {
        let session = sample();
        let value = serde_json::to_value(&session).unwrap();

        assert_eq!(value["title"], "Phonics Basics");
        assert_eq!(value["subject"], "phonemicAwareness");
        assert_eq!(value["scheduledTime"], "2025-09-01T10:00:00.000Z");
        assert_eq!(value["duration"], 30);
        assert_eq!(value["status"], "upcoming");
        assert_eq!(value["description"], "");
        assert_eq!(value["createdAt"], "2025-08-20T08:00:00.000Z");
        assert_eq!(value["updatedAt"], value["createdAt"]);
    }

    #[test]
    fn test_reads_offset_timestamps() {
        let json = r#"{
            "id": "session_1_abc",
            "title": "Letters",
            "subject": "alphabet",
            "scheduledTime": "2025-09-01T12:00:00+02:00",
            "duration": 45,
            "status": "live",
            "description": "A to M",
            "createdAt": "2025-08-01T00:00:00Z",
            "updatedAt": "2025-08-02T00:00:00.5Z"
        }"#;
        let session: TutoringSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.scheduled_time, ts("2025-09-01T10:00:00Z"));
        assert_eq!(session.status, SessionStatus::Live);
        assert_eq!(session.ends_at(), ts("2025-09-01T10:45:00Z"));
    }

    #[test]
    fn test_apply_patch() {
        let mut session = sample();
        let before = session.clone();

        session.apply(SessionPatch::default().title("X"), ts("2025-08-21T00:00:00Z"));
        assert_eq!(session.title, "X");
        assert_eq!(session.updated_at, ts("2025-08-21T00:00:00Z"));
        assert_eq!(session.id, before.id);
        assert_eq!(session.subject, before.subject);
        assert_eq!(session.created_at, before.created_at);

        // Clock standing still still bumps updated_at
        let stamp = session.updated_at;
        session.apply(SessionPatch::default().status(SessionStatus::Live), stamp);
        assert!(session.updated_at > stamp);
    }

    #[test]
    fn test_patch_validation() {
        assert!(SessionPatch::default().is_empty());
        assert!(SessionPatch::default().validate().is_ok());
        assert!(SessionPatch::default().title("Sight words").duration(15).validate().is_ok());

        assert!(matches!(
            SessionPatch::default().title("   ").validate(),
            Err(SessionError::InvalidField { field: "title", .. })
        ));
        assert!(matches!(
            SessionPatch::default().duration(0).validate(),
            Err(SessionError::InvalidField { field: "duration", .. })
        ));
    }
}
