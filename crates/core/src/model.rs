//! Reminder domain model.
//!
//! Defines the reminder entity, the client-supplied draft it is built from, and the closed
//! `Priority` / `Status` enumerations.
//!
//! Notes:
//! - `Reminder` values can only be built by a store, which is the sole owner of identifier
//!   assignment. Callers see read-only accessors.
//! - `status`, `is_deleted` and `updated_at` are write-once today: no transition operation
//!   exists, so every reminder keeps the defaults it was created with.

use crate::constants::FIRST_REMINDER_ID;
use crate::error::ParsePriorityError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned reminder identifier. Never zero.
pub type ReminderId = u64;

// ============================================================================
// Priority
// ============================================================================

/// How urgent a reminder is.
///
/// Parsing is case-insensitive (`"high"`, `"High"` and `"HIGH"` are the same member). The
/// canonical form, used for display and serialisation, is uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// All members in ascending order of urgency.
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    /// Canonical uppercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Critical => "CRITICAL",
        }
    }
}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|member| member.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| ParsePriorityError(value.to_owned()))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Priority {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Status
// ============================================================================

/// Lifecycle state of a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// Initial state of every created reminder.
    Pending,
    Completed,
    Cancelled,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "PENDING",
            Status::Completed => "COMPLETED",
            Status::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Draft / NewReminder / Reminder
// ============================================================================

/// Client-supplied reminder fields.
///
/// Text fields are not validated here; rejecting blank input is the boundary layer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderDraft {
    pub title: String,
    pub description: String,
    pub due_at: Option<NaiveDateTime>,
    pub priority: Priority,
}

/// A reminder with every field filled in except its identifier.
///
/// Built by the lifecycle service from a [`ReminderDraft`] and handed to a store, which
/// assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReminder {
    pub draft: ReminderDraft,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    pub is_deleted: bool,
    pub status: Status,
}

/// A stored reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    id: ReminderId,
    title: String,
    description: String,
    due_at: Option<NaiveDateTime>,
    created_at: NaiveDateTime,
    updated_at: Option<NaiveDateTime>,
    is_deleted: bool,
    status: Status,
    priority: Priority,
}

impl Reminder {
    /// Binds a store-assigned identifier to a new reminder.
    pub(crate) fn assign(id: ReminderId, new: NewReminder) -> Self {
        debug_assert!(id >= FIRST_REMINDER_ID, "reminder ids start at 1");
        let NewReminder {
            draft,
            created_at,
            updated_at,
            is_deleted,
            status,
        } = new;

        Self {
            id,
            title: draft.title,
            description: draft.description,
            due_at: draft.due_at,
            created_at,
            updated_at,
            is_deleted,
            status,
            priority: draft.priority,
        }
    }

    pub fn id(&self) -> ReminderId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn due_at(&self) -> Option<NaiveDateTime> {
        self.due_at
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        self.updated_at
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns whether this reminder carries the client-supplied fields of `draft`.
    #[cfg(test)]
    pub(crate) fn matches_draft(&self, draft: &ReminderDraft) -> bool {
        self.title == draft.title
            && self.description == draft.description
            && self.due_at == draft.due_at
            && self.priority == draft.priority
    }
}
