//! Session status and subject tags

use serde::{Deserialize, Serialize};

/// Where a session is in its life. New sessions start as `Upcoming`;
/// nothing moves a session along automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Upcoming,
    Live,
    Completed,
}

impl SessionStatus {
    pub const ALL: [SessionStatus; 3] = [
        SessionStatus::Upcoming,
        SessionStatus::Live,
        SessionStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Upcoming => "upcoming",
            SessionStatus::Live => "live",
            SessionStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upcoming" => Ok(SessionStatus::Upcoming),
            "live" => Ok(SessionStatus::Live),
            "completed" => Ok(SessionStatus::Completed),
            _ => Err(format!("Unknown session status: {}", s)),
        }
    }
}

/// Literacy topic a session covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "alphabet")]
    Alphabet,
    #[serde(rename = "sightwords")]
    SightWords,
    #[serde(rename = "vocabulary")]
    Vocabulary,
    #[serde(rename = "phonemicAwareness")]
    PhonemicAwareness,
    #[serde(rename = "pointAndRead")]
    PointAndRead,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::Alphabet,
        Subject::SightWords,
        Subject::Vocabulary,
        Subject::PhonemicAwareness,
        Subject::PointAndRead,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Alphabet => "alphabet",
            Subject::SightWords => "sightwords",
            Subject::Vocabulary => "vocabulary",
            Subject::PhonemicAwareness => "phonemicAwareness",
            Subject::PointAndRead => "pointAndRead",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .iter()
            .find(|subject| subject.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown subject: {}", s))
    }
}
