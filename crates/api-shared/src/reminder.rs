//! Reminder wire models and boundary validation.
//!
//! Responsibilities:
//! - Define the create request as clients send it
//! - Reject blank text fields with per-field messages before anything reaches the core
//! - Define the reminder representation returned to clients
//!
//! Notes:
//! - `priority` is parsed case-insensitively through the core `Priority` parser; an unknown
//!   value fails deserialisation of the whole request.
//! - Timestamps are zone-less ISO-8601 (`2026-02-01T10:00:00`). On input, seconds and
//!   fractional seconds are optional.

use chrono::NaiveDateTime;
use reminders_core::{Priority, Reminder, ReminderDraft, ReminderId, Status};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Field name → violation message.
pub type FieldErrors = BTreeMap<String, String>;

pub const TITLE_BLANK: &str = "Title cannot be blank";
pub const DESCRIPTION_BLANK: &str = "Description cannot be blank";
pub const PRIORITY_MISSING: &str = "Priority cannot be null";

/// Accepted `dueAt` layouts, tried in order.
const LOCAL_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Create reminder request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReminderReq {
    /// Title of the reminder
    #[schema(example = "Doctor Appointment")]
    #[serde(default)]
    pub title: Option<String>,

    /// More details about the reminder
    #[schema(example = "Visit cardiologist")]
    #[serde(default)]
    pub description: Option<String>,

    /// The date and time at which the reminder is due
    #[schema(value_type = Option<String>, format = DateTime, example = "2026-02-01T10:00:00")]
    #[serde(default, deserialize_with = "deserialize_local_date_time")]
    pub due_at: Option<NaiveDateTime>,

    /// One of LOW, MEDIUM, HIGH, CRITICAL (case-insensitive)
    #[schema(value_type = Option<String>, example = "HIGH")]
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl CreateReminderReq {
    /// Validates the request and converts it into a core draft.
    ///
    /// A text field is blank when it is missing, null, or whitespace only. Valid text is passed
    /// through untouched.
    ///
    /// # Errors
    ///
    /// Returns every violation at once, keyed by wire field name.
    pub fn into_draft(self) -> Result<ReminderDraft, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = non_blank(self.title);
        if title.is_none() {
            errors.insert("title".into(), TITLE_BLANK.into());
        }
        let description = non_blank(self.description);
        if description.is_none() {
            errors.insert("description".into(), DESCRIPTION_BLANK.into());
        }
        if self.priority.is_none() {
            errors.insert("priority".into(), PRIORITY_MISSING.into());
        }

        match (title, description, self.priority) {
            (Some(title), Some(description), Some(priority)) => Ok(ReminderDraft {
                title,
                description,
                due_at: self.due_at,
                priority,
            }),
            _ => Err(errors),
        }
    }
}

fn deserialize_local_date_time<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    LOCAL_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&raw, format).ok())
        .map(Some)
        .ok_or_else(|| {
            de::Error::custom(format!(
                "invalid date-time `{raw}`; expected YYYY-MM-DDTHH:MM[:SS[.fraction]]"
            ))
        })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Reminder as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRes {
    #[schema(example = 1)]
    pub id: ReminderId,
    pub title: String,
    pub description: String,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub due_at: Option<NaiveDateTime>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: NaiveDateTime,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub updated_at: Option<NaiveDateTime>,
    pub is_deleted: bool,
    #[schema(value_type = String, example = "PENDING")]
    pub status: Status,
    #[schema(value_type = String, example = "HIGH")]
    pub priority: Priority,
}

impl From<&Reminder> for ReminderRes {
    fn from(reminder: &Reminder) -> Self {
        Self {
            id: reminder.id(),
            title: reminder.title().to_owned(),
            description: reminder.description().to_owned(),
            due_at: reminder.due_at(),
            created_at: reminder.created_at(),
            updated_at: reminder.updated_at(),
            is_deleted: reminder.is_deleted(),
            status: reminder.status(),
            priority: reminder.priority(),
        }
    }
}

impl From<Reminder> for ReminderRes {
    fn from(reminder: Reminder) -> Self {
        Self::from(&reminder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reminders_core::{InMemoryReminderStore, ReminderService};
    use serde_json::json;
    use std::sync::Arc;

    fn parse(value: serde_json::Value) -> CreateReminderReq {
        serde_json::from_value(value).expect("request should deserialize")
    }

    #[test]
    fn test_into_draft_accepts_valid_request() {
        let req = parse(json!({
            "title": "Doctor Appointment",
            "description": "Visit cardiologist",
            "dueAt": "2026-02-01T10:00:00",
            "priority": "high"
        }));

        let draft = req.into_draft().expect("should be valid");
        assert_eq!(draft.title, "Doctor Appointment");
        assert_eq!(draft.description, "Visit cardiologist");
        assert_eq!(draft.priority, Priority::High);
        assert_eq!(
            draft.due_at.map(|d| d.to_string()),
            Some("2026-02-01 10:00:00".to_string())
        );
    }

    #[test]
    fn test_into_draft_allows_missing_due_at() {
        let req = parse(json!({
            "title": "Call mum",
            "description": "Sunday call",
            "dueAt": null,
            "priority": "LOW"
        }));
        assert_eq!(req.into_draft().expect("valid").due_at, None);
    }

    #[test]
    fn test_into_draft_reports_every_blank_field() {
        let req = parse(json!({
            "title": "   ",
            "description": null
        }));

        let errors = req.into_draft().expect_err("should be invalid");
        assert_eq!(errors.len(), 3);
        assert_eq!(errors["title"], TITLE_BLANK);
        assert_eq!(errors["description"], DESCRIPTION_BLANK);
        assert_eq!(errors["priority"], PRIORITY_MISSING);
    }

    #[test]
    fn test_unknown_priority_fails_deserialization() {
        let err = serde_json::from_value::<CreateReminderReq>(json!({
            "title": "t",
            "description": "d",
            "priority": "urgent"
        }))
        .expect_err("urgent is not a priority");
        assert!(err.to_string().contains("urgent"));
    }

    #[test]
    fn test_reminder_res_mirrors_stored_reminder() {
        let service = ReminderService::new(Arc::new(InMemoryReminderStore::new()));
        let reminder = service.create(ReminderDraft {
            title: "Doctor Appointment".into(),
            description: "Visit cardiologist".into(),
            due_at: None,
            priority: Priority::Critical,
        });

        let res = ReminderRes::from(&reminder);
        let json = serde_json::to_value(&res).expect("serialize");
        assert_eq!(json["id"], 1);
        assert_eq!(json["status"], "PENDING");
        assert_eq!(json["priority"], "CRITICAL");
        assert_eq!(json["isDeleted"], false);
        assert!(json["dueAt"].is_null());
        assert!(json["updatedAt"].is_null());
        assert_eq!(json["title"], "Doctor Appointment");
        assert_eq!(
            json.as_object().map(|o| o.len()),
            Some(9),
            "unexpected fields: {json}"
        );
    }

    #[test]
    fn test_reminder_res_formats_timestamps_without_zone() {
        let service = ReminderService::new(Arc::new(InMemoryReminderStore::new()));
        let draft = parse(json!({
            "title": "Doctor Appointment",
            "description": "Visit cardiologist",
            "dueAt": "2026-02-01T10:00:00",
            "priority": "HIGH"
        }))
        .into_draft()
        .expect("valid");

        let res = ReminderRes::from(service.create(draft));
        let json = serde_json::to_value(&res).expect("serialize");
        assert_eq!(json["dueAt"], "2026-02-01T10:00:00");
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_due_at_accepts_minutes_precision() {
        let req = parse(json!({
            "title": "t",
            "description": "d",
            "dueAt": "2026-02-01T10:00",
            "priority": "HIGH"
        }));
        let due_at = req.into_draft().expect("valid").due_at;
        assert_eq!(
            due_at.map(|d| d.to_string()),
            Some("2026-02-01 10:00:00".to_string())
        );
    }

    #[test]
    fn test_due_at_accepts_fractional_seconds() {
        let req = parse(json!({
            "title": "t",
            "description": "d",
            "dueAt": "2026-02-01T10:00:30.250",
            "priority": "HIGH"
        }));
        let due_at = req.into_draft().expect("valid").due_at;
        assert_eq!(
            due_at.map(|d| d.to_string()),
            Some("2026-02-01 10:00:30.250".to_string())
        );
    }

    #[test]
    fn test_due_at_rejects_non_date_text() {
        let err = serde_json::from_value::<CreateReminderReq>(json!({
            "title": "t",
            "description": "d",
            "dueAt": "tomorrow",
            "priority": "HIGH"
        }))
        .expect_err("not a date-time");
        assert!(err.to_string().contains("tomorrow"));
    }
}
