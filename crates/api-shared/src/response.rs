//! Response wrapper shared by every reminders endpoint.
//!
//! Every body, success or failure, has the shape `{message, status, data}` where `status`
//! names the HTTP status of the response (`"CREATED"`, `"NOT_FOUND"`, ...).

use crate::reminder::ReminderRes;
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

pub const REMINDER_CREATED: &str = "Reminder created";
pub const REMINDER_FOUND: &str = "Reminder found";
pub const REMINDERS_FOUND: &str = "Reminders found";
pub const REMINDER_NOT_FOUND: &str = "Reminder not found";
pub const INPUT_NOT_CORRECT: &str = "Input not correct";

/// HTTP statuses a reminders endpoint can answer with, serialised by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HttpStatus {
    Ok,
    Created,
    BadRequest,
    NotFound,
}

impl HttpStatus {
    /// Numeric status code sent on the HTTP response line.
    pub fn code(self) -> u16 {
        match self {
            HttpStatus::Ok => 200,
            HttpStatus::Created => 201,
            HttpStatus::BadRequest => 400,
            HttpStatus::NotFound => 404,
        }
    }
}

/// `{message, status, data}` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[aliases(
    ReminderApiRes = ApiResponse<ReminderRes>,
    ReminderListApiRes = ApiResponse<Vec<ReminderRes>>,
    ValidationApiRes = ApiResponse<BTreeMap<String, String>>,
    ErrorApiRes = ApiResponse<String>
)]
pub struct ApiResponse<T> {
    /// Human-readable summary of the outcome.
    pub message: String,
    /// Name of the HTTP status of the response.
    pub status: HttpStatus,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, status: HttpStatus, data: T) -> Self {
        Self {
            message: message.into(),
            status,
            data,
        }
    }
}
