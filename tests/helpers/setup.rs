use calendar_reminders_infra::{ISys, ReminderContext};
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

pub struct StaticTimeSys {}
impl ISys for StaticTimeSys {
    fn now(&self) -> DateTime<Utc> {
        now()
    }
}

/// Sun Feb 21 2021 12:00:00 UTC
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 2, 21, 12, 0, 0).unwrap()
}

pub struct TestApp {
    pub ctx: ReminderContext,
}

/// Empty inmemory context where time stands still at `now()`
pub fn spawn_app() -> TestApp {
    let mut ctx = ReminderContext::create_inmemory();
    ctx.sys = Arc::new(StaticTimeSys {});

    TestApp { ctx }
}
