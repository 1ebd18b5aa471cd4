use crate::{error::ReminderAppError, shared::usecase::UseCase};
use calendar_reminders_domain::ID;
use calendar_reminders_infra::ReminderContext;

#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for ReminderAppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
        }
    }
}

impl UseCase for DeleteReminderUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminder";

    fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.reminders.delete(&self.reminder_id) {
            Ok(())
        } else {
            Err(UseCaseError::NotFound(self.reminder_id.clone()))
        }
    }
}
