use calendar_reminders_domain::Reminder;
use chrono::{DateTime, TimeZone, Utc};

pub fn ymd(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub fn assert_equal_reminder_lists(reminders1: &[Reminder], reminders2: &[Reminder]) {
    assert_eq!(reminders1.len(), reminders2.len());
    let mut reminders1 = reminders1.to_vec();
    reminders1.sort_by(|r1, r2| r1.description().cmp(r2.description()));
    let mut reminders2 = reminders2.to_vec();
    reminders2.sort_by(|r1, r2| r1.description().cmp(r2.description()));
    assert_eq!(reminders1, reminders2);
}
