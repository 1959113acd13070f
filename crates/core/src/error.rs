use crate::model::ReminderId;

#[derive(Debug, thiserror::Error)]
pub enum ReminderError {
    #[error("Cannot find reminder with id: {0}")]
    NotFound(ReminderId),
}

pub type ReminderResult<T> = std::result::Result<T, ReminderError>;

/// Error returned when a priority string matches no `Priority` member.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown priority `{0}`; expected one of LOW, MEDIUM, HIGH, CRITICAL")]
pub struct ParsePriorityError(pub String);
