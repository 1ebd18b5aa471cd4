use calendar_reminders_infra::ReminderContext;
use std::fmt::Debug;
use tracing::error;

/// One operation the calendar can ask the reminders core to perform
pub trait UseCase: Debug {
    type Response;
    type Error;

    const NAME: &'static str;

    fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error>;
}

#[tracing::instrument(name = "Executing usecase", skip(usecase, ctx), fields(usecase = U::NAME))]
pub fn execute<U>(mut usecase: U, ctx: &ReminderContext) -> Result<U::Response, U::Error>
where
    U: UseCase,
    U::Error: Debug,
{
    let res = usecase.execute(ctx);

    if let Err(e) = &res {
        error!("Use case error: {:?}", e);
    }

    res
}
