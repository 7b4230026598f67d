//! Tutoring Session Store
//!
//! - Sessions are scheduled volunteer tutoring slots
//! - The whole collection lives as one JSON array under a single storage key
//! - Every mutation rewrites the full collection
//! - Corrupt or unreadable data degrades to an empty collection; failed writes propagate

mod clock;
mod draft;
mod error;
mod session;
mod status;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use draft::{DraftError, SessionDraft};
pub use error::SessionError;
pub use session::{generate_session_id, SessionInput, SessionPatch, TutoringSession};
pub use status::{SessionStatus, Subject};
pub use store::{SessionStats, SessionStore, SESSIONS_STORAGE_KEY};

pub type Result<T> = std::result::Result<T, SessionError>;
