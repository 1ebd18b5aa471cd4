mod inmemory;

use calendar_reminders_domain::{Color, Reminder, ReminderValidationError, ID};
use chrono::{DateTime, Utc};
pub use inmemory::InMemoryReminderRepo;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReminderRepoError {
    #[error("A reminder with the id: {0} was already stored")]
    DuplicateId(ID),
}

/// Storage of `Reminder`s keyed by repository generated `ID`s.
///
/// Stored values are trusted as is, validation belongs to `ReminderBuilder`.
/// Query results have no particular order.
pub trait IReminderRepo: Send + Sync {
    /// Stores the reminder under a freshly generated id and returns that id
    fn create(&self, reminder: &Reminder) -> Result<ID, ReminderRepoError>;
    /// Replaces the whole reminder stored at `reminder_id`. Returns false if it does not exist
    fn update(&self, reminder_id: &ID, reminder: &Reminder) -> bool;
    /// Replaces the reminder stored at `reminder_id` by `edit` of its current value
    /// as one step, so concurrent edits of the same reminder are never lost.
    /// Returns `None` if it does not exist and keeps the stored value if `edit` fails.
    fn update_with(
        &self,
        reminder_id: &ID,
        edit: &dyn Fn(&Reminder) -> Result<Reminder, ReminderValidationError>,
    ) -> Option<Result<Reminder, ReminderValidationError>>;
    fn delete(&self, reminder_id: &ID) -> bool;
    fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    /// Case insensitive substring match on the description
    fn find_by_description(&self, description: &str) -> Vec<Reminder>;
    /// Reminders strictly after `start` and, if given, strictly before `end`
    fn find_by_date(&self, start: &DateTime<Utc>, end: Option<&DateTime<Utc>>) -> Vec<Reminder>;
    /// Case sensitive substring match on the city
    fn find_by_city_name(&self, city_name: &str) -> Vec<Reminder>;
    fn find_by_color(&self, color: &Color) -> Vec<Reminder>;
}
