use crate::shared::usecase::UseCase;
use calendar_reminders_domain::{Color, Reminder};
use calendar_reminders_infra::ReminderContext;
use chrono::{DateTime, Utc};
use std::convert::Infallible;

/// The ways the calendar can look up stored `Reminder`s
#[derive(Debug, Clone)]
pub enum ReminderQuery {
    /// Case insensitive part of the description
    Description(String),
    /// Strictly after `start` and, when given, strictly before `end`
    Date {
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    },
    /// Case sensitive part of the city name
    CityName(String),
    Color(Color),
}

#[derive(Debug)]
pub struct SearchRemindersUseCase {
    pub query: ReminderQuery,
}

impl UseCase for SearchRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = Infallible;

    const NAME: &'static str = "SearchReminders";

    fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let reminders = &ctx.repos.reminders;
        let res = match &self.query {
            ReminderQuery::Description(description) => reminders.find_by_description(description),
            ReminderQuery::Date { start, end } => reminders.find_by_date(start, end.as_ref()),
            ReminderQuery::CityName(city_name) => reminders.find_by_city_name(city_name),
            ReminderQuery::Color(color) => reminders.find_by_color(color),
        };
        Ok(res)
    }
}
