use super::ReminderEntry;
use crate::{
    error::ReminderAppError,
    shared::usecase::{execute, UseCase},
};
use calendar_reminders_domain::{Color, ReminderBuilder, ReminderValidationError};
use calendar_reminders_infra::{ReminderContext, ReminderRepoError};
use chrono::{DateTime, Utc};
use tracing::{error, info};

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub description: String,
    /// Defaults to the current time
    pub date_time: Option<DateTime<Utc>>,
    pub city: String,
    /// Defaults to white
    pub color: Option<Color>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidReminder(ReminderValidationError),
    StorageError(ReminderRepoError),
}

impl From<UseCaseError> for ReminderAppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidReminder(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError(_) => Self::InternalError,
        }
    }
}

impl UseCase for CreateReminderUseCase {
    type Response = ReminderEntry;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let mut builder = ReminderBuilder::starting_at(ctx.sys.now());
        builder
            .description(self.description.as_str())
            .city(self.city.as_str());
        if let Some(date_time) = self.date_time {
            builder.date_time(date_time);
        }
        if let Some(color) = self.color {
            builder.color(color);
        }
        let reminder = builder.build().map_err(UseCaseError::InvalidReminder)?;

        match ctx.repos.reminders.create(&reminder) {
            Ok(id) => Ok(ReminderEntry { id, reminder }),
            Err(e) => {
                // Id generation handed out an id that is in use
                error!("Broken reminder id generation: {}", e);
                Err(UseCaseError::StorageError(e))
            }
        }
    }
}

/// Stores the demo `Reminder` when the config asks for it
pub fn seed_demo_reminders(
    ctx: &ReminderContext,
) -> Result<Vec<ReminderEntry>, ReminderAppError> {
    if !ctx.config.seed_demo_reminders {
        return Ok(Vec::new());
    }

    let usecase = CreateReminderUseCase {
        description: "Testing".into(),
        date_time: None,
        city: "Test".into(),
        color: Some(Color::new(100, 100, 100)),
    };
    let entry = execute(usecase, ctx)?;
    info!("Seeded demo reminder with id: {}", entry.id);

    Ok(vec![entry])
}

#[cfg(test)]
mod test {
    use super::*;
    use calendar_reminders_domain::{ColorChannel, ID};
    use calendar_reminders_infra::{ISys, InMemoryReminderRepo};
    use chrono::TimeZone;
    use std::sync::Arc;

    struct StaticTimeSys {}
    impl ISys for StaticTimeSys {
        fn now(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2021, 2, 21, 12, 0, 0).unwrap()
        }
    }

    fn setup() -> ReminderContext {
        let mut ctx = ReminderContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys {});
        ctx
    }

    fn valid_usecase() -> CreateReminderUseCase {
        CreateReminderUseCase {
            description: "The testing description".into(),
            date_time: None,
            city: "Testing city".into(),
            color: None,
        }
    }

    #[test]
    fn it_creates_reminder_with_defaults() {
        let ctx = setup();

        let entry = valid_usecase().execute(&ctx).expect("To create reminder");
        assert_eq!(*entry.reminder.date_time(), StaticTimeSys {}.now());
        assert_eq!(*entry.reminder.color(), Color::WHITE);
        assert_eq!(ctx.repos.reminders.find(&entry.id), Some(entry.reminder));
    }

    #[test]
    fn it_rejects_invalid_reminder() {
        let ctx = setup();

        let mut usecase = valid_usecase();
        usecase.color = Some(Color::new(0, 0, 256));
        let res = usecase.execute(&ctx);
        assert_eq!(
            res,
            Err(UseCaseError::InvalidReminder(
                ReminderValidationError::ColorChannelOutOfRange(ColorChannel::Blue)
            ))
        );
        assert!(ctx.repos.reminders.find_by_description("").is_empty());

        let mut usecase = valid_usecase();
        usecase.city = "".into();
        let err = ReminderAppError::from(usecase.execute(&ctx).unwrap_err());
        assert_eq!(
            err,
            ReminderAppError::BadClientData("Empty city name is not supported.".into())
        );
    }

    #[test]
    fn it_reports_duplicate_id_as_internal_error() {
        let mut ctx = setup();
        let id = ID::new();
        ctx.repos.reminders = Arc::new(InMemoryReminderRepo::with_id_generator(move || {
            id.clone()
        }));

        assert!(execute(valid_usecase(), &ctx).is_ok());
        let res = execute(valid_usecase(), &ctx);
        assert!(matches!(res, Err(UseCaseError::StorageError(_))));
        assert_eq!(
            ReminderAppError::from(res.unwrap_err()),
            ReminderAppError::InternalError
        );
    }

    #[test]
    fn it_seeds_demo_reminder_only_when_configured() {
        let mut ctx = setup();
        assert!(seed_demo_reminders(&ctx).unwrap().is_empty());
        assert!(ctx.repos.reminders.find_by_description("").is_empty());

        ctx.config.seed_demo_reminders = true;
        let seeded = seed_demo_reminders(&ctx).unwrap();
        assert_eq!(seeded.len(), 1);
        assert_eq!(seeded[0].reminder.description(), "Testing");
        assert_eq!(seeded[0].reminder.city(), "Test");
        assert_eq!(*seeded[0].reminder.color(), Color::new(100, 100, 100));
        assert_eq!(ctx.repos.reminders.find_by_description("test").len(), 1);
    }
}
