mod telemetry;

use anyhow::Context;
use calendar_reminders_api::{execute, seed_demo_reminders, GetRemindersForDayUseCase};
use calendar_reminders_domain::date::is_valid_date;
use calendar_reminders_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};
use tracing::info;

/// Prints the reminders of the day given as `year-month-day`, or of today
fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("calendar_reminders".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context();
    seed_demo_reminders(&context)?;

    let date = match std::env::args().nth(1) {
        Some(datestr) => is_valid_date(&datestr)
            .with_context(|| format!("Invalid date: {}, expected year-month-day", datestr))?,
        None => context
            .sys
            .now()
            .with_timezone(&context.config.timezone)
            .date_naive(),
    };

    let reminders = match execute(GetRemindersForDayUseCase { date }, &context) {
        Ok(reminders) => reminders,
        Err(e) => match e {},
    };
    info!("Found {} reminders on {}", reminders.len(), date);

    println!("{}", serde_json::to_string_pretty(&reminders)?);
    Ok(())
}
