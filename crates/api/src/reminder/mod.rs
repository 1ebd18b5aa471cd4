pub mod create_reminder;
pub mod delete_reminder;
pub mod get_reminder;
pub mod get_reminders_for_day;
pub mod search_reminders;
pub mod update_reminder;

use calendar_reminders_domain::{Reminder, ID};
pub use create_reminder::{seed_demo_reminders, CreateReminderUseCase};
pub use delete_reminder::DeleteReminderUseCase;
pub use get_reminder::GetReminderUseCase;
pub use get_reminders_for_day::GetRemindersForDayUseCase;
pub use search_reminders::{ReminderQuery, SearchRemindersUseCase};
use serde::Serialize;
pub use update_reminder::UpdateReminderUseCase;

/// A stored `Reminder` together with the id it is stored under
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReminderEntry {
    pub id: ID,
    #[serde(flatten)]
    pub reminder: Reminder,
}
