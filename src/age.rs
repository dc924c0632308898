//! Calendar-aware age arithmetic.
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python's
//! relativedelta), so the borrowing rules are implemented manually:
//!   • day underflow (borrowing from the reference's previous month)
//!   • month underflow (borrowing from years)
//!   • leap years
//!   • varying month lengths

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::InvalidInput;

const DAY_MS: i64 = 86_400_000;
const HOUR_MS: i64 = 3_600_000;
const MINUTE_MS: i64 = 60_000;

/// Everything the age calculator knows about one birth/reference pair.
/// Computed once per invocation and never mutated; the next invocation
/// supersedes it with a fresh value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeResult {
    /// Calendar decomposition. `months` stays in `0..=11` and `days` in
    /// `0..=30` after borrowing.
    pub years: i32,
    pub months: u32,
    pub days: u32,
    /// Cumulative floor-truncated totals from birth to reference, not
    /// remainders. Display layers derive "hours within a day" themselves.
    pub total_days: i64,
    pub total_hours: i64,
    pub total_minutes: i64,
    /// Whole days until `next_birthday`, ceiling-rounded. Zero exactly when
    /// the reference instant is the anniversary midnight itself.
    pub days_to_next_birthday: i64,
    pub next_birthday: NaiveDate,
    /// The age turned on the upcoming anniversary.
    pub next_birthday_age: i32,
    /// The instant the results were computed against (display only).
    pub reference: NaiveDateTime,
}

impl fmt::Display for AgeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months as i32),
            self.days,
            plural(self.days as i32)
        )
    }
}

fn plural(n: i32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Parses `YYYY-MM-DD` form input.
pub fn parse_date(text: &str) -> Result<NaiveDate, InvalidInput> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|source| {
        InvalidInput::MalformedDate {
            text: text.trim().to_string(),
            source,
        }
    })
}

/// Computes the full age breakdown between two instants.
///
/// Fails only when `birth` is strictly after `reference`.
pub fn compute_age(
    birth: NaiveDateTime,
    reference: NaiveDateTime,
) -> Result<AgeResult, InvalidInput> {
    if birth > reference {
        return Err(InvalidInput::BirthAfterReference { birth, reference });
    }

    let birth_date = birth.date();
    let ref_date = reference.date();

    let mut years = ref_date.year() - birth_date.year();
    let mut months = ref_date.month() as i32 - birth_date.month() as i32;
    let mut days = ref_date.day() as i32 - birth_date.day() as i32;

    // Fix day underflow: borrow from the reference's previous calendar
    // month (28-31 days depending on month and leap year). A 31st-of-month
    // birthdate referenced right after a short February still owes days
    // after one borrow, so keep walking back until the deficit clears.
    let (mut prev_year, mut prev_month) = (ref_date.year(), ref_date.month());
    while days < 0 {
        months -= 1;

        (prev_year, prev_month) = if prev_month == 1 {
            (prev_year - 1, 12)
        } else {
            (prev_year, prev_month - 1)
        };

        days += days_in_month(prev_year, prev_month) as i32;
    }

    // Fix month underflow
    while months < 0 {
        years -= 1;
        months += 12;
    }

    let elapsed_ms = (reference - birth).num_milliseconds();

    let next_birthday = next_anniversary(birth_date, reference);
    let to_next_ms = (next_birthday.and_time(NaiveTime::MIN) - reference).num_milliseconds();

    Ok(AgeResult {
        years,
        months: months as u32,
        days: days as u32,
        total_days: elapsed_ms / DAY_MS,
        total_hours: elapsed_ms / HOUR_MS,
        total_minutes: elapsed_ms / MINUTE_MS,
        days_to_next_birthday: ceil_days(to_next_ms),
        next_birthday,
        next_birthday_age: next_birthday.year() - birth_date.year(),
        reference,
    })
}

/// First birthday anniversary whose midnight is at or after `reference`.
fn next_anniversary(birth: NaiveDate, reference: NaiveDateTime) -> NaiveDate {
    let this_year = anniversary_in(birth, reference.date().year());
    if this_year.and_time(NaiveTime::MIN) < reference {
        anniversary_in(birth, reference.date().year() + 1)
    } else {
        this_year
    }
}

/// The anniversary of `birth` in `year`. A Feb 29 birthdate lands on Mar 1
/// in non-leap years.
fn anniversary_in(birth: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .expect("month/day taken from a valid date, Feb 29 falls back to Mar 1")
}

/// Whole days, rounded up. `ms` is non-negative here.
fn ceil_days(ms: i64) -> i64 {
    (ms + DAY_MS - 1).div_euclid(DAY_MS)
}

/// Returns number of days in a given year/month (handles leap years)
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        date(y, m, d).and_time(NaiveTime::MIN)
    }

    #[test]
    fn quarter_century_on_the_anniversary() {
        let result = compute_age(midnight(2000, 1, 1), midnight(2025, 1, 1)).unwrap();

        assert_eq!((result.years, result.months, result.days), (25, 0, 0));
        // 18 common years plus 7 leap days (2000 through 2024).
        assert_eq!(result.total_days, 9132);
        assert_eq!(result.total_hours, 9132 * 24);
        assert_eq!(result.total_minutes, 9132 * 24 * 60);
        // The reference sits exactly on the anniversary midnight.
        assert_eq!(result.days_to_next_birthday, 0);
        assert_eq!(result.next_birthday, date(2025, 1, 1));
        assert_eq!(result.next_birthday_age, 25);
    }

    #[test]
    fn borrow_from_leap_february() {
        let result = compute_age(midnight(1990, 6, 15), midnight(2024, 3, 10)).unwrap();

        // Day-of-reference < day-of-birth, so a month is borrowed and the
        // 29 days of February 2024 are added back.
        assert_eq!((result.years, result.months, result.days), (33, 8, 24));
        assert_eq!(result.next_birthday, date(2024, 6, 15));
        assert_eq!(result.next_birthday_age, 34);
        assert_eq!(result.days_to_next_birthday, 97);
    }

    #[test]
    fn borrow_month_across_january() {
        let result = compute_age(midnight(1999, 12, 31), midnight(2000, 1, 1)).unwrap();

        assert_eq!((result.years, result.months, result.days), (0, 0, 1));
        assert_eq!(result.total_days, 1);
    }

    #[test]
    fn double_borrow_past_a_short_february() {
        // Jan 31 referenced on Mar 1: February alone cannot cover the
        // deficit, so January is borrowed too.
        let result = compute_age(midnight(2023, 1, 31), midnight(2023, 3, 1)).unwrap();

        assert_eq!((result.years, result.months, result.days), (0, 0, 29));
        assert_eq!(result.total_days, 29);
    }

    #[test]
    fn same_instant_is_all_zero() {
        let result = compute_age(midnight(2020, 5, 5), midnight(2020, 5, 5)).unwrap();

        assert_eq!((result.years, result.months, result.days), (0, 0, 0));
        assert_eq!(result.total_days, 0);
        assert_eq!(result.total_minutes, 0);
        assert_eq!(result.days_to_next_birthday, 0);
        assert_eq!(result.next_birthday_age, 0);
    }

    #[test]
    fn afternoon_reference_pushes_anniversary_to_next_year() {
        let noon = date(2020, 5, 5).and_hms_opt(12, 0, 0).unwrap();
        let result = compute_age(midnight(2020, 5, 5), noon).unwrap();

        assert_eq!((result.years, result.months, result.days), (0, 0, 0));
        assert_eq!(result.total_hours, 12);
        assert_eq!(result.next_birthday, date(2021, 5, 5));
        // 364.5 days away, rounded up.
        assert_eq!(result.days_to_next_birthday, 365);
        assert_eq!(result.next_birthday_age, 1);
    }

    #[test]
    fn leap_day_birthdate_anniversaries_on_march_first() {
        let result = compute_age(midnight(2000, 2, 29), midnight(2023, 1, 15)).unwrap();

        assert_eq!(result.next_birthday, date(2023, 3, 1));
        assert_eq!(result.days_to_next_birthday, 45);
        assert_eq!(result.next_birthday_age, 23);
    }

    #[test]
    fn leap_day_birthdate_on_a_leap_year_anniversary() {
        let result = compute_age(midnight(2000, 2, 29), midnight(2024, 2, 29)).unwrap();

        assert_eq!((result.years, result.months, result.days), (24, 0, 0));
        assert_eq!(result.next_birthday, date(2024, 2, 29));
        assert_eq!(result.days_to_next_birthday, 0);
    }

    #[test]
    fn birth_after_reference_is_rejected() {
        let err = compute_age(midnight(2025, 1, 2), midnight(2025, 1, 1)).unwrap_err();
        assert!(matches!(err, InvalidInput::BirthAfterReference { .. }));
    }

    #[test]
    fn malformed_dates_are_rejected() {
        assert!(matches!(
            parse_date("not-a-date"),
            Err(InvalidInput::MalformedDate { .. })
        ));
        assert!(matches!(
            parse_date("2023-02-30"),
            Err(InvalidInput::MalformedDate { .. })
        ));
        assert_eq!(parse_date(" 2023-02-28 ").unwrap(), date(2023, 2, 28));
    }

    #[test]
    fn decomposition_invariants_hold_over_a_grid() {
        let births = [
            midnight(1999, 12, 31),
            midnight(2000, 2, 29),
            midnight(1990, 6, 15),
            midnight(2004, 3, 31),
            midnight(2023, 1, 31),
        ];
        let offsets = [0i64, 1, 27, 28, 29, 30, 31, 59, 365, 366, 1000, 10_000];

        for birth in births {
            for offset in offsets {
                let reference = birth + Duration::days(offset);
                let result = compute_age(birth, reference).unwrap();

                assert!(result.years >= 0);
                assert!(result.months <= 11, "months={} at offset {offset}", result.months);
                assert!(result.days <= 30, "days={} at offset {offset}", result.days);
                assert_eq!(result.total_days, offset);
                assert!(result.days_to_next_birthday >= 0);
                assert!(result.next_birthday.and_time(NaiveTime::MIN) >= reference);
            }
        }
    }

    #[test]
    fn totals_are_reproducible() {
        let a = compute_age(midnight(1992, 6, 14), midnight(2024, 11, 1)).unwrap();
        let b = compute_age(midnight(1992, 6, 14), midnight(2024, 11, 1)).unwrap();
        assert_eq!(a, b);
    }
}
