use crate::color::Color;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A `Reminder` is a described event happening at a given time in a given city,
/// shown in the calendar with its `Color`.
///
/// The only way to get one is through `ReminderBuilder::build`, so every
/// `Reminder` in the system satisfies the builder's validation rules and can be
/// handed to a repository without further checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// The text the user writes, edits and watches in the calendar
    pub(crate) description: String,
    /// When the user should be reminded
    pub(crate) date_time: DateTime<Utc>,
    /// The city the reminder is related to
    pub(crate) city: String,
    pub(crate) color: Color,
}

impl Reminder {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date_time(&self) -> &DateTime<Utc> {
        &self.date_time
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn color(&self) -> &Color {
        &self.color
    }
}
