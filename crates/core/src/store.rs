//! Reminder storage and identifier assignment.
//!
//! This module owns keyed storage of reminders for the lifetime of the process. It has no
//! knowledge of HTTP or input validation.
//!
//! ## Identifier discipline
//!
//! Identifiers start at [`FIRST_REMINDER_ID`] and increase by one per created reminder. They
//! are never reused and never overwrite an existing entry.
//!
//! ## Concurrency
//!
//! [`InMemoryReminderStore`] keeps the id counter and the map behind one mutex, so assigning an
//! id and inserting the reminder happen as a single step. Reads clone out of the map and never
//! hand out references into it.

use crate::constants::FIRST_REMINDER_ID;
use crate::model::{NewReminder, Reminder, ReminderId};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Keyed reminder storage.
///
/// Absence is a normal outcome here and is returned as `None`; turning it into an error is the
/// caller's decision.
pub trait ReminderStore: Send + Sync {
    /// Assigns the next identifier to `reminder`, stores it, and returns the stored value.
    fn create(&self, reminder: NewReminder) -> Reminder;

    /// Returns a snapshot of every stored reminder in identifier order.
    fn find_all(&self) -> Vec<Reminder>;

    fn find_by_id(&self, id: ReminderId) -> Option<Reminder>;
}

#[derive(Debug)]
struct StoreState {
    next_id: ReminderId,
    reminders: BTreeMap<ReminderId, Reminder>,
}

/// Process-local reminder store.
#[derive(Debug)]
pub struct InMemoryReminderStore {
    state: Mutex<StoreState>,
}

impl InMemoryReminderStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState {
                next_id: FIRST_REMINDER_ID,
                reminders: BTreeMap::new(),
            }),
        }
    }

    /// Number of stored reminders.
    pub fn len(&self) -> usize {
        self.lock().reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while holding the lock cannot leave the state half-written: the counter is only
    // advanced after the insert succeeds.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryReminderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReminderStore for InMemoryReminderStore {
    fn create(&self, reminder: NewReminder) -> Reminder {
        let mut state = self.lock();

        let id = state.next_id;
        let stored = Reminder::assign(id, reminder);
        let previous = state.reminders.insert(id, stored.clone());
        debug_assert!(previous.is_none(), "reminder id {id} assigned twice");
        state.next_id = id + 1;

        tracing::debug!(reminder_id = id, "reminder stored");
        stored
    }

    fn find_all(&self) -> Vec<Reminder> {
        self.lock().reminders.values().cloned().collect()
    }

    fn find_by_id(&self, id: ReminderId) -> Option<Reminder> {
        self.lock().reminders.get(&id).cloned()
    }
}
