use super::ReminderEntry;
use crate::{error::ReminderAppError, shared::usecase::UseCase};
use calendar_reminders_domain::{Color, Reminder, ReminderBuilder, ReminderValidationError, ID};
use calendar_reminders_infra::ReminderContext;
use chrono::{DateTime, Utc};

/// Changes the given fields of a stored `Reminder`, leaving the rest as they are.
/// The edited `Reminder` is validated again and then replaces the stored one.
#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub reminder_id: ID,
    pub description: Option<String>,
    pub date_time: Option<DateTime<Utc>>,
    pub city: Option<String>,
    pub color: Option<Color>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    InvalidReminder(ReminderValidationError),
}

impl From<UseCaseError> for ReminderAppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::InvalidReminder(e) => Self::BadClientData(e.to_string()),
        }
    }
}

impl UseCase for UpdateReminderUseCase {
    type Response = ReminderEntry;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminder";

    fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let edit = |current: &Reminder| {
            let mut builder = ReminderBuilder::from(current);
            if let Some(description) = &self.description {
                builder.description(description.as_str());
            }
            if let Some(date_time) = self.date_time {
                builder.date_time(date_time);
            }
            if let Some(city) = &self.city {
                builder.city(city.as_str());
            }
            if let Some(color) = self.color {
                builder.color(color);
            }
            builder.build()
        };

        match ctx.repos.reminders.update_with(&self.reminder_id, &edit) {
            Some(Ok(reminder)) => Ok(ReminderEntry {
                id: self.reminder_id.clone(),
                reminder,
            }),
            Some(Err(e)) => Err(UseCaseError::InvalidReminder(e)),
            None => Err(UseCaseError::NotFound(self.reminder_id.clone())),
        }
    }
}
