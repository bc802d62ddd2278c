use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

use crate::CivilDateError;
use crate::consts::{DATE_SEPARATOR, ISO_LEN, MAX_DAY_LEXICAL, MAX_MONTH};
use crate::wall_clock::days_from_civil;

/// Renders a calendar date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{:04}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Renders the moment's local calendar date as `YYYY-MM-DD`.
pub fn format<Tz: TimeZone>(moment: &DateTime<Tz>) -> String {
    format_date(moment.date_naive())
}

/// Splits `YYYY-MM-DD` into its numeric fields when the string has the ISO
/// shape: four digits, a month `01..=12` and a day `01..=31`. Whether the day
/// exists in that month is not checked here.
pub fn split_fields(s: &str) -> Option<(i32, u32, u32)> {
    let bytes = s.as_bytes();
    if bytes.len() != ISO_LEN {
        return None;
    }

    let separator = u8::try_from(DATE_SEPARATOR).ok()?;
    if bytes[4] != separator || bytes[7] != separator {
        return None;
    }

    let year = parse_digits(&bytes[0..4])?;
    let month = parse_digits(&bytes[5..7])?;
    let day = parse_digits(&bytes[8..10])?;

    if !(1..=MAX_MONTH).contains(&month) || !(1..=MAX_DAY_LEXICAL).contains(&day) {
        return None;
    }

    Some((i32::try_from(year).ok()?, month, day))
}

/// Parses `YYYY-MM-DD` into a day count. No range check is applied.
///
/// # Errors
/// Returns `CivilDateError::InvalidCode` if the string is not ISO shaped and
/// `CivilDateError::InvalidDate` if it is but names a day that does not exist.
pub fn parse(s: &str) -> Result<i64, CivilDateError> {
    let (year, month, day) = split_fields(s).ok_or_else(|| CivilDateError::invalid_code(s))?;
    to_days(year, month, day).ok_or_else(|| CivilDateError::invalid_date(s))
}

/// Builds the calendar date and only accepts it if it reads back as the same
/// fields, so an overflowing day (Feb 30) can never roll into the next month.
pub(crate) fn to_days(year: i32, month: u32, day: u32) -> Option<i64> {
    NaiveDate::from_ymd_opt(year, month, day)
        .filter(|date| date.year() == year && date.month() == month && date.day() == day)
        .map(days_from_civil)
}

fn parse_digits(digits: &[u8]) -> Option<u32> {
    digits.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}
