//! Calendar helpers for the almanac approximation.
//!
//! The almanac uses the 1-based ordinal day of the year as its time base and produces
//! event times as hours of a UTC day. This module converts between those numbers and
//! calendar dates on the proleptic Gregorian calendar.

use crate::math::floor;
use crate::types::HoursUtc;
use crate::{Error, Result};
use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone, Utc};

/// Checks whether `year` is a leap year in the proleptic Gregorian calendar.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month.
///
/// # Errors
/// Returns `InvalidDate` if month is outside 1-12.
pub const fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => return Err(Error::invalid_date("month must be between 1 and 12")),
    };
    Ok(days)
}

/// Ordinal day of the year: 1 for January 1 through 365 or 366 for December 31.
///
/// # Errors
/// Returns `InvalidDate` if the month or the day of month does not exist.
///
/// # Example
/// ```
/// # use solar_events::time::day_of_year;
/// assert_eq!(day_of_year(2023, 1, 1).unwrap(), 1);
/// assert_eq!(day_of_year(2023, 12, 31).unwrap(), 365);
/// assert_eq!(day_of_year(2024, 12, 31).unwrap(), 366);
/// assert!(day_of_year(2023, 2, 29).is_err());
/// ```
pub fn day_of_year(year: i32, month: u32, day: u32) -> Result<u32> {
    if day == 0 || day > days_in_month(year, month)? {
        return Err(Error::invalid_date("day is not valid for the given month"));
    }

    let mut ordinal = day;
    for earlier in 1..month {
        ordinal += days_in_month(year, earlier)?;
    }
    Ok(ordinal)
}

/// Calendar date of an instant, taken in UTC.
pub fn utc_date<Tz: TimeZone>(datetime: &DateTime<Tz>) -> NaiveDate {
    datetime.with_timezone(&Utc).date_naive()
}

/// Ordinal day of the year of an instant, taken in UTC.
pub fn utc_day_of_year<Tz: TimeZone>(datetime: &DateTime<Tz>) -> u32 {
    utc_date(datetime).ordinal()
}

/// Places an almanac event time on the calendar.
///
/// The day offset of `time` moves `date` to the adjacent day when the event belongs there;
/// hour, minute and second are then read off the fractional hour, keeping whole
/// milliseconds of the remaining fraction.
///
/// Returns `None` if the resulting date is outside chrono's range or the hour is not
/// within `[0, 24)`.
#[must_use]
pub fn instant_on(date: NaiveDate, time: HoursUtc) -> Option<DateTime<Utc>> {
    let (day_offset, hours) = time.day_and_hours();
    if !(0.0..24.0).contains(&hours) {
        return None;
    }

    let day = date.checked_add_signed(TimeDelta::try_days(i64::from(day_offset))?)?;

    let hour = floor(hours);
    let minutes = (hours - hour) * 60.0;
    let minute = floor(minutes);
    let seconds = (minutes - minute) * 60.0;
    let second = floor(seconds);
    let millis = floor((seconds - second) * 1000.0).min(999.0);

    day.and_hms_milli_opt(hour as u32, minute as u32, second as u32, millis as u32)
        .map(|naive| naive.and_utc())
}
