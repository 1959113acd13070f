//! Reminder lifecycle service.
//!
//! Business-facing operations layered on a [`ReminderStore`]:
//!
//! - fills in the system-managed fields of a new reminder (creation time, initial status,
//!   deletion flag),
//! - turns an absent single-record lookup into [`ReminderError::NotFound`].
//!
//! Listing never fails: an empty store is an empty list.
//!
//! ## Pure Data Operations
//!
//! No API concerns live here. Input validation and HTTP mapping belong in `api-shared` and
//! `api-rest`.

use crate::constants::INITIAL_STATUS;
use crate::error::{ReminderError, ReminderResult};
use crate::model::{NewReminder, Reminder, ReminderDraft, ReminderId};
use crate::store::ReminderStore;
use chrono::Utc;
use std::sync::Arc;

/// Lifecycle manager for reminders.
///
/// Cheap to clone; clones share the same underlying store.
#[derive(Clone)]
pub struct ReminderService {
    store: Arc<dyn ReminderStore>,
}

impl ReminderService {
    /// Creates a service backed by `store`.
    ///
    /// The store should be built once per process and shared by every service clone.
    pub fn new(store: Arc<dyn ReminderStore>) -> Self {
        Self { store }
    }

    /// Creates a reminder from client-supplied fields.
    ///
    /// Sets `created_at` to the current UTC time, leaves `updated_at` empty, marks the reminder
    /// as not deleted and `PENDING`, then hands it to the store for identifier assignment.
    ///
    /// Text fields are stored as given, including blank ones.
    pub fn create(&self, draft: ReminderDraft) -> Reminder {
        let new = NewReminder {
            draft,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
            is_deleted: false,
            status: INITIAL_STATUS,
        };

        let reminder = self.store.create(new);
        tracing::debug!(
            reminder_id = reminder.id(),
            priority = %reminder.priority(),
            "reminder created"
        );
        reminder
    }

    /// Returns every stored reminder.
    pub fn find_all(&self) -> Vec<Reminder> {
        self.store.find_all()
    }

    /// Returns the reminder with identifier `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderError::NotFound`] carrying `id` if no such reminder exists.
    pub fn find_by_id(&self, id: ReminderId) -> ReminderResult<Reminder> {
        self.store.find_by_id(id).ok_or_else(|| {
            tracing::debug!(reminder_id = id, "reminder lookup missed");
            ReminderError::NotFound(id)
        })
    }
}

impl std::fmt::Debug for ReminderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReminderService").finish_non_exhaustive()
    }
}
