//! Raw form input for a new session
//!
//! The creation dialog collects plain strings. A draft is checked as a whole
//! so every problem can be shown next to its field at once.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::SessionInput;
use crate::status::{SessionStatus, Subject};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Unknown subject: {0}")]
    UnknownSubject(String),

    #[error("Invalid {field}: {value}")]
    InvalidFormat { field: &'static str, value: String },

    #[error("Duration must be a positive whole number of minutes")]
    InvalidDuration,
}

impl DraftError {
    /// Form field the error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            DraftError::Required(field) => field,
            DraftError::UnknownSubject(_) => "subject",
            DraftError::InvalidFormat { field, .. } => field,
            DraftError::InvalidDuration => "duration",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDraft {
    pub title: String,
    pub subject: String,
    /// `YYYY-MM-DD`
    pub scheduled_date: String,
    /// `HH:MM`, local time
    pub scheduled_time: String,
    pub duration: String,
    #[serde(default)]
    pub description: String,
}

impl SessionDraft {
    /// Every problem with the draft, in form order. Empty when valid.
    pub fn validate(&self) -> Vec<DraftError> {
        match self.to_input() {
            Ok(_) => Vec::new(),
            Err(errors) => errors,
        }
    }

    /// Build the store input: text trimmed, date and time combined in the
    /// local zone, status `upcoming`.
    pub fn to_input(&self) -> Result<SessionInput, Vec<DraftError>> {
        let mut errors = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push(DraftError::Required("title"));
        }

        let subject = match self.subject.trim() {
            "" => {
                errors.push(DraftError::Required("subject"));
                None
            }
            raw => match raw.parse::<Subject>() {
                Ok(subject) => Some(subject),
                Err(_) => {
                    errors.push(DraftError::UnknownSubject(raw.to_string()));
                    None
                }
            },
        };

        let date = match self.scheduled_date.trim() {
            "" => {
                errors.push(DraftError::Required("scheduledDate"));
                None
            }
            raw => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push(DraftError::InvalidFormat {
                        field: "scheduledDate",
                        value: raw.to_string(),
                    });
                    None
                }
            },
        };

        let time = match self.scheduled_time.trim() {
            "" => {
                errors.push(DraftError::Required("scheduledTime"));
                None
            }
            raw => match NaiveTime::parse_from_str(raw, "%H:%M")
                .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
            {
                Ok(time) => Some(time),
                Err(_) => {
                    errors.push(DraftError::InvalidFormat {
                        field: "scheduledTime",
                        value: raw.to_string(),
                    });
                    None
                }
            },
        };

        let duration = match self.duration.trim() {
            "" => {
                errors.push(DraftError::Required("duration"));
                None
            }
            raw => match raw.parse::<u32>() {
                Ok(minutes) if minutes > 0 => Some(minutes),
                _ => {
                    errors.push(DraftError::InvalidDuration);
                    None
                }
            },
        };

        // A wall-clock time skipped by a DST change has no instant
        let scheduled_time = match (date, time) {
            (Some(date), Some(time)) => {
                let naive = NaiveDateTime::new(date, time);
                match Local.from_local_datetime(&naive).earliest() {
                    Some(local) => Some(local.with_timezone(&Utc)),
                    None => {
                        errors.push(DraftError::InvalidFormat {
                            field: "scheduledTime",
                            value: self.scheduled_time.trim().to_string(),
                        });
                        None
                    }
                }
            }
            _ => None,
        };

        match (subject, scheduled_time, duration) {
            (Some(subject), Some(scheduled_time), Some(duration)) if errors.is_empty() => {
                Ok(SessionInput {
                    title: title.to_string(),
                    subject,
                    scheduled_time,
                    duration,
                    status: SessionStatus::Upcoming,
                    description: self.description.trim().to_string(),
                })
            }
            _ => Err(errors),
        }
    }
}
