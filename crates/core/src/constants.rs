//! Constants used throughout the reminders core crate.

/// Identifier handed out for the first reminder a store creates.
pub const FIRST_REMINDER_ID: u64 = 1;

/// Status every newly created reminder starts in.
pub const INITIAL_STATUS: crate::model::Status = crate::model::Status::Pending;
