mod error;
mod reminder;
mod shared;

pub use error::ReminderAppError;
pub use reminder::*;
pub use shared::usecase::{execute, UseCase};
