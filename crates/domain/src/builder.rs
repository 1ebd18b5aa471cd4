use crate::{
    color::{Color, ColorChannel},
    reminder::Reminder,
};
use chrono::{DateTime, Utc};
use thiserror::Error;

pub const MAX_DESCRIPTION_LENGTH: usize = 30;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReminderValidationError {
    #[error("Empty description is not supported.")]
    EmptyDescription,
    #[error(
        "Descriptions longer than {} chars are not supported. Got {0} chars.",
        MAX_DESCRIPTION_LENGTH
    )]
    DescriptionTooLong(usize),
    #[error("Empty city name is not supported.")]
    EmptyCity,
    #[error(
        "Channel {0} out of boundaries. The value must be between 0 and {}.",
        Color::MAX_CHANNEL_VALUE
    )]
    ColorChannelOutOfRange(ColorChannel),
}

/// Accumulates the fields of a `Reminder` and validates them when `build` is called.
///
/// Setters store values as given. The builder is not consumed by `build` and can
/// be reconfigured and built again.
#[derive(Debug, Clone)]
pub struct ReminderBuilder {
    description: String,
    date_time: DateTime<Utc>,
    city: String,
    color: Color,
}

impl ReminderBuilder {
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    /// Same as `new` but with the given timestamp as the default reminder time,
    /// for callers that own their notion of "now"
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            description: String::new(),
            date_time: now,
            city: String::new(),
            color: Color::default(),
        }
    }

    pub fn description<S: Into<String>>(&mut self, description: S) -> &mut Self {
        self.description = description.into();
        self
    }

    pub fn date_time(&mut self, date_time: DateTime<Utc>) -> &mut Self {
        self.date_time = date_time;
        self
    }

    pub fn city<S: Into<String>>(&mut self, city: S) -> &mut Self {
        self.city = city.into();
        self
    }

    pub fn color(&mut self, color: Color) -> &mut Self {
        self.color = color;
        self
    }

    pub fn build(&self) -> Result<Reminder, ReminderValidationError> {
        self.validate()?;

        Ok(Reminder {
            description: self.description.clone(),
            date_time: self.date_time,
            city: self.city.clone(),
            color: self.color,
        })
    }

    fn validate(&self) -> Result<(), ReminderValidationError> {
        if self.description.is_empty() {
            return Err(ReminderValidationError::EmptyDescription);
        }
        let description_length = self.description.chars().count();
        if description_length > MAX_DESCRIPTION_LENGTH {
            return Err(ReminderValidationError::DescriptionTooLong(
                description_length,
            ));
        }

        if self.city.is_empty() {
            return Err(ReminderValidationError::EmptyCity);
        }

        match self.color.channel_above_range() {
            Some(channel) => Err(ReminderValidationError::ColorChannelOutOfRange(channel)),
            None => Ok(()),
        }
    }
}

impl Default for ReminderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Starts from the values of an existing `Reminder`, which is how
/// partial edits are applied before the result is built again
impl From<&Reminder> for ReminderBuilder {
    fn from(reminder: &Reminder) -> Self {
        Self {
            description: reminder.description.clone(),
            date_time: reminder.date_time,
            city: reminder.city.clone(),
            color: reminder.color,
        }
    }
}
