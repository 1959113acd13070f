//! # Reminders Core
//!
//! Core business logic for the reminders service.
//!
//! This crate contains the reminder lifecycle:
//! - The reminder entity and its `Priority` / `Status` enumerations
//! - Process-local storage with store-assigned identifiers
//! - The lifecycle service that fills creation defaults and reports missing reminders
//!
//! **No API concerns**: request validation, HTTP routing and serialisation wrappers belong in
//! `api-shared` or `api-rest`.

pub mod constants;
pub mod error;
pub mod model;
pub mod service;
pub mod store;

pub use error::{ParsePriorityError, ReminderError, ReminderResult};
pub use model::{NewReminder, Priority, Reminder, ReminderDraft, ReminderId, Status};
pub use service::ReminderService;
pub use store::{InMemoryReminderStore, ReminderStore};
