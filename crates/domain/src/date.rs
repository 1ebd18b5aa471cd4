use chrono::prelude::*;
use chrono_tz::Tz;

/// Parses a `year-month-day` string like `2021-2-28` or `2021-02-28`
pub fn is_valid_date(datestr: &str) -> anyhow::Result<NaiveDate> {
    let datestr = String::from(datestr);
    let dates = datestr.split('-').collect::<Vec<_>>();
    if dates.len() != 3 {
        return Err(anyhow::Error::msg(datestr));
    }
    let (year, month, day) = match (
        dates[0].parse::<i32>(),
        dates[1].parse::<u32>(),
        dates[2].parse::<u32>(),
    ) {
        (Ok(year), Ok(month), Ok(day)) => (year, month, day),
        _ => return Err(anyhow::Error::msg(datestr)),
    };

    if !(1970..=2100).contains(&year) || !(1..=12).contains(&month) {
        return Err(anyhow::Error::msg(datestr));
    }

    if day < 1 || day > get_month_length(year, month) {
        return Err(anyhow::Error::msg(datestr));
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow::Error::msg(datestr))
}

pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

// month: January -> 1
pub fn get_month_length(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Start of the given day and start of the next day in the timezone,
/// as UTC instants
pub fn day_bounds(date: NaiveDate, tz: &Tz) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = start_of_day(date, tz);
    let end = date
        .succ_opt()
        .map(|next| start_of_day(next, tz))
        .unwrap_or_else(|| start + chrono::Duration::days(1));
    (start, end)
}

fn start_of_day(date: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    // Days starting inside a DST gap get the first valid instant after it
    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            tz.from_local_datetime(&(midnight + chrono::Duration::hours(1)))
                .earliest()
        })
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono_tz::{America::Sao_Paulo, Europe::Oslo, UTC};

    #[test]
    fn it_accepts_valid_dates() {
        let valid_dates = vec![
            "2018-1-1",
            "2025-12-31",
            "2020-1-12",
            "2020-2-29",
            "2020-02-2",
            "2020-02-02",
            "2020-2-09",
        ];

        for date in &valid_dates {
            assert!(is_valid_date(date).is_ok());
        }
        assert_eq!(
            is_valid_date("2020-2-29").unwrap(),
            NaiveDate::from_ymd_opt(2020, 2, 29).unwrap()
        );
    }

    #[test]
    fn it_rejects_invalid_dates() {
        let invalid_dates = vec![
            "2018--1-1",
            "2020-1-32",
            "2020-2-30",
            "2021-2-29",
            "2020-0-1",
            "2020-13-1",
            "1969-12-31",
            "2020-1",
            "2020-1-1-1",
            "today",
        ];

        for date in &invalid_dates {
            assert!(is_valid_date(date).is_err());
        }
    }

    #[test]
    fn it_computes_utc_day_bounds() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let (start, end) = day_bounds(date, &UTC);
        assert_eq!(start, Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2000, 1, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn it_computes_day_bounds_in_timezone() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let (start, end) = day_bounds(date, &Oslo);
        assert_eq!(start, Utc.with_ymd_and_hms(1999, 12, 31, 23, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2000, 1, 1, 23, 0, 0).unwrap());
    }

    #[test]
    fn it_handles_days_starting_in_dst_gap() {
        // Clocks in Sao Paulo jumped from 00:00 to 01:00 on 2018-11-04
        let date = NaiveDate::from_ymd_opt(2018, 11, 4).unwrap();
        let (start, end) = day_bounds(date, &Sao_Paulo);
        assert_eq!(start, Utc.with_ymd_and_hms(2018, 11, 4, 3, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2018, 11, 5, 2, 0, 0).unwrap());
    }
}
