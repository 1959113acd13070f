//! # API Shared
//!
//! Shared wire types for the reminders APIs.
//!
//! Contains:
//! - The `{message, status, data}` response wrapper
//! - Reminder request/response models with OpenAPI schemas
//! - Boundary validation that turns a create request into a core `ReminderDraft`
//! - Shared services like `HealthService`
//!
//! Used by `api-rest`; the core crate stays free of wire concerns.

pub mod health;
pub mod reminder;
pub mod response;

pub use health::{HealthRes, HealthService};
pub use reminder::{CreateReminderReq, FieldErrors, ReminderRes};
pub use response::{
    ApiResponse, ErrorApiRes, HttpStatus, ReminderApiRes, ReminderListApiRes, ValidationApiRes,
};
