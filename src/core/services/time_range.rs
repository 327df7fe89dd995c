use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};

use crate::core::models::window::{PeriodUnit, TimeWindow};

/// Resolve a calendar period around `at` to a concrete [`TimeWindow`].
///
/// The window covers the whole period containing `at` in the timezone of
/// `at` itself: callers paging a live log pass `Local`, tests pass `Utc`.
/// Weeks follow ISO-8601 (Monday through Sunday); months account for
/// their variable length.
pub fn range<Tz: TimeZone>(unit: PeriodUnit, at: &DateTime<Tz>) -> TimeWindow {
    let tz = at.timezone();
    let date = at.date_naive();

    let (start, end) = match unit {
        PeriodUnit::Day => (date, date),
        PeriodUnit::Week => {
            let monday = date - Days::new(u64::from(date.weekday().num_days_from_monday()));
            (monday, monday + Days::new(6))
        }
        PeriodUnit::Month => {
            let first = date.with_day(1).expect("day 1 is always valid");
            (first, first + Months::new(1) - Days::new(1))
        }
    };

    let (prev, next) = match unit {
        PeriodUnit::Day => (start - Days::new(1), start + Days::new(1)),
        PeriodUnit::Week => (start - Days::new(7), start + Days::new(7)),
        PeriodUnit::Month => (start - Months::new(1), start + Months::new(1)),
    };

    TimeWindow {
        min: day_start(&tz, start).timestamp(),
        max: day_end(&tz, end).timestamp(),
        prev: day_start(&tz, prev).timestamp(),
        next: day_start(&tz, next).timestamp(),
        caption: caption(unit, start),
    }
}

/// 00:00:00 on `date`, or the first later instant that exists in `tz`.
fn day_start<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    local_instant(tz, date.and_hms_opt(0, 0, 0).expect("midnight is always valid"))
}

/// 23:59:59 on `date`.
fn day_end<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    local_instant(
        tz,
        date.and_hms_opt(23, 59, 59)
            .expect("23:59:59 is always valid"),
    )
}

/// Resolve a wall-clock time in `tz`. An ambiguous time (clocks rolled
/// back) takes the earlier instant; a time erased by a DST jump takes the
/// first later hour that exists.
fn local_instant<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
        return dt;
    }
    for hours in 1..=3 {
        let probe = naive + TimeDelta::hours(hours);
        if let Some(dt) = tz.from_local_datetime(&probe).earliest() {
            return dt;
        }
    }
    tz.from_utc_datetime(&naive)
}

/// Human-readable label for the period starting on `start`.
fn caption(unit: PeriodUnit, start: NaiveDate) -> String {
    match unit {
        PeriodUnit::Day => start.format("%A, %-d %B %Y").to_string(),
        PeriodUnit::Week => {
            let week = start.iso_week();
            format!("{} week of {}", ord_suffix(week.week()), week.year())
        }
        PeriodUnit::Month => start.format("%B %Y").to_string(),
    }
}

/// Convert 1, 2, 3, 4 to 1st, 2nd, 3rd, 4th and so on.
fn ord_suffix(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn week_window_for_iso_week_6_of_2024() {
        // Any instant inside the week resolves to Mon Feb 5 .. Sun Feb 11.
        for at in [
            utc(2024, 2, 5, 0, 0, 0),
            utc(2024, 2, 7, 15, 30, 0),
            utc(2024, 2, 11, 23, 59, 59),
        ] {
            let window = range(PeriodUnit::Week, &at);
            assert_eq!(window.min, utc(2024, 2, 5, 0, 0, 0).timestamp());
            assert_eq!(window.max, utc(2024, 2, 11, 23, 59, 59).timestamp());
        }
    }

    #[test]
    fn week_caption_uses_ordinal() {
        let window = range(PeriodUnit::Week, &utc(2024, 2, 7, 12, 0, 0));
        assert_eq!(window.caption, "6th week of 2024");
    }

    #[test]
    fn week_navigation_is_boundary_stable() {
        let window = range(PeriodUnit::Week, &utc(2024, 2, 7, 12, 0, 0));
        assert_eq!(window.prev, utc(2024, 1, 29, 0, 0, 0).timestamp());
        assert_eq!(window.next, utc(2024, 2, 12, 0, 0, 0).timestamp());

        // Paging to `next` yields a window that starts exactly there.
        let newer = range(PeriodUnit::Week, &Utc.timestamp_opt(window.next, 0).unwrap());
        assert_eq!(newer.min, window.next);
        assert_eq!(newer.prev, window.min);
    }

    #[test]
    fn day_window_covers_one_calendar_day() {
        let window = range(PeriodUnit::Day, &utc(2024, 3, 10, 14, 5, 0));
        assert_eq!(window.min, utc(2024, 3, 10, 0, 0, 0).timestamp());
        assert_eq!(window.max, utc(2024, 3, 10, 23, 59, 59).timestamp());
        assert_eq!(window.prev, utc(2024, 3, 9, 0, 0, 0).timestamp());
        assert_eq!(window.next, utc(2024, 3, 11, 0, 0, 0).timestamp());
        assert_eq!(window.caption, "Sunday, 10 March 2024");
    }

    #[test]
    fn month_window_handles_leap_february() {
        let window = range(PeriodUnit::Month, &utc(2024, 2, 15, 8, 0, 0));
        assert_eq!(window.min, utc(2024, 2, 1, 0, 0, 0).timestamp());
        assert_eq!(window.max, utc(2024, 2, 29, 23, 59, 59).timestamp());
        assert_eq!(window.caption, "February 2024");
    }

    #[test]
    fn month_navigation_crosses_year_boundary() {
        let window = range(PeriodUnit::Month, &utc(2023, 12, 15, 0, 0, 0));
        assert_eq!(window.prev, utc(2023, 11, 1, 0, 0, 0).timestamp());
        assert_eq!(window.next, utc(2024, 1, 1, 0, 0, 0).timestamp());
        assert_eq!(window.max, utc(2023, 12, 31, 23, 59, 59).timestamp());
    }

    #[test]
    fn iso_week_year_differs_from_calendar_year_at_the_seam() {
        // Dec 30 2024 is a Monday and belongs to ISO week 1 of 2025.
        let window = range(PeriodUnit::Week, &utc(2024, 12, 31, 10, 0, 0));
        assert_eq!(window.min, utc(2024, 12, 30, 0, 0, 0).timestamp());
        assert_eq!(window.caption, "1st week of 2025");
    }

    #[test]
    fn ordinal_suffixes() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (23, "23rd"),
            (52, "52nd"),
        ];
        for (n, expected) in cases {
            assert_eq!(ord_suffix(n), expected);
        }
    }
}
