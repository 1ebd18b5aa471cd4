mod builder;
mod color;
pub mod date;
mod reminder;
mod shared;

pub use builder::{ReminderBuilder, ReminderValidationError, MAX_DESCRIPTION_LENGTH};
pub use color::{Color, ColorChannel};
pub use reminder::Reminder;
pub use shared::entity::{InvalidIDError, ID};
