use serde::{Deserialize, Serialize};
use std::fmt;

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

/// Lifecycle state of a progress record.
///
/// Labels are compared by exact string match. Unrecognized labels are kept
/// verbatim in `Other` so they round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProgressStatus {
    Completed,
    InProgress,
    OnHold,
    Other(String),
}

impl ProgressStatus {
    pub const COMPLETED: &'static str = "Completed";
    pub const IN_PROGRESS: &'static str = "In Progress";
    pub const ON_HOLD: &'static str = "On Hold";

    /// Statuses offered when creating a new entry.
    pub const CHOICES: [&'static str; 4] =
        [Self::IN_PROGRESS, Self::COMPLETED, Self::ON_HOLD, "Planned"];

    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            Self::COMPLETED => Self::Completed,
            Self::IN_PROGRESS => Self::InProgress,
            Self::ON_HOLD => Self::OnHold,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Completed => Self::COMPLETED,
            Self::InProgress => Self::IN_PROGRESS,
            Self::OnHold => Self::ON_HOLD,
            Self::Other(label) => label,
        }
    }

    /// Badge color bucket. Every status maps to exactly one tone.
    #[must_use]
    pub fn tone(&self) -> StatusTone {
        match self {
            Self::Completed => StatusTone::Green,
            Self::InProgress => StatusTone::Blue,
            Self::OnHold => StatusTone::Yellow,
            Self::Other(_) => StatusTone::Purple,
        }
    }
}

impl From<String> for ProgressStatus {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<ProgressStatus> for String {
    fn from(value: ProgressStatus) -> Self {
        match value {
            ProgressStatus::Other(label) => label,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color bucket used for status badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTone {
    Green,
    Blue,
    Yellow,
    Purple,
}

impl StatusTone {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
        }
    }
}

//
// ─── TEMPLATE ──────────────────────────────────────────────────────────────────
//

/// Category of a progress record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProgressTemplate {
    CompletedProject,
    Certification,
    Challenge,
    Workshop,
    Other(String),
}

impl ProgressTemplate {
    pub const COMPLETED_PROJECT: &'static str = "Completed Project/Task";
    pub const CERTIFICATION: &'static str = "Certification/Qualification";
    pub const CHALLENGE: &'static str = "Challenges/Competitions";
    pub const WORKSHOP: &'static str = "Workshops/Bootcamps";

    /// Templates offered when creating a new entry.
    pub const CHOICES: [&'static str; 4] = [
        Self::COMPLETED_PROJECT,
        Self::CERTIFICATION,
        Self::CHALLENGE,
        Self::WORKSHOP,
    ];

    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            Self::COMPLETED_PROJECT => Self::CompletedProject,
            Self::CERTIFICATION => Self::Certification,
            Self::CHALLENGE => Self::Challenge,
            Self::WORKSHOP => Self::Workshop,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::CompletedProject => Self::COMPLETED_PROJECT,
            Self::Certification => Self::CERTIFICATION,
            Self::Challenge => Self::CHALLENGE,
            Self::Workshop => Self::WORKSHOP,
            Self::Other(label) => label,
        }
    }
}

impl From<String> for ProgressTemplate {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<ProgressTemplate> for String {
    fn from(value: ProgressTemplate) -> Self {
        match value {
            ProgressTemplate::Other(label) => label,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ProgressTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
