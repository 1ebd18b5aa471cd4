use crate::shared::usecase::UseCase;
use calendar_reminders_domain::{date::day_bounds, Reminder};
use calendar_reminders_infra::ReminderContext;
use chrono::{Duration, NaiveDate};
use std::convert::Infallible;

/// All `Reminder`s on a calendar day in the configured timezone, earliest first
#[derive(Debug)]
pub struct GetRemindersForDayUseCase {
    pub date: NaiveDate,
}

impl UseCase for GetRemindersForDayUseCase {
    type Response = Vec<Reminder>;

    type Error = Infallible;

    const NAME: &'static str = "GetRemindersForDay";

    fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let (start, end) = day_bounds(self.date, &ctx.config.timezone);
        // Date queries exclude the start instant, but midnight belongs to the day
        let after = start - Duration::nanoseconds(1);

        let mut reminders = ctx.repos.reminders.find_by_date(&after, Some(&end));
        reminders.sort_by_key(|reminder| *reminder.date_time());
        Ok(reminders)
    }
}
