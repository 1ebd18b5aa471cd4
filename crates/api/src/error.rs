use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReminderAppError {
    #[error("Internal error")]
    InternalError,
    #[error("Invalid data provided: Error message: `{0}`")]
    BadClientData(String),
    #[error("Not found. Error message: `{0}`")]
    NotFound(String),
}
