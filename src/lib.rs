mod consts;
mod prelude;
mod types;

pub mod codec;
pub mod iso;
pub mod wall_clock;

pub use codec::{decode, encode};
pub use consts::*;
pub use iso::format as format_iso;
pub use types::DayCount;
pub use wall_clock::{Clock, FixedClock, SystemClock, from_local};

use crate::prelude::*;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone, Utc};
use std::str::FromStr;

/// A calendar day, independent of time of day and timezone.
///
/// Holds a single validated [`DayCount`]. The code, ISO string and moment
/// forms are all computed from it on demand. Displays as its three-character
/// code, which sorts the same way the days do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}", "self.to_code()")]
pub struct CivilDate {
    value: DayCount,
}

/// Error type for civil date conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CivilDateError {
    /// Day count outside `MIN_DAYS..=MAX_DAYS`.
    #[error("Days out of range")]
    DaysOutOfRange { days: i64 },

    /// Not a three-character radix-36 code (and not ISO shaped either).
    #[error("Invalid civil-date code")]
    InvalidCode { input: String },

    /// ISO shaped, but the day does not exist.
    #[error("Invalid date")]
    InvalidDate { input: String },
}

impl CivilDateError {
    pub(crate) fn invalid_code(input: &str) -> Self {
        Self::InvalidCode {
            input: input.to_owned(),
        }
    }

    pub(crate) fn invalid_date(input: &str) -> Self {
        Self::InvalidDate {
            input: input.to_owned(),
        }
    }
}

/// Everything a [`CivilDate`] can be built from.
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum CivilDateInput {
    /// The current local day, read from a [`Clock`].
    #[from(ignore)]
    Now,
    /// The local calendar date of a moment.
    Moment(DateTime<FixedOffset>),
    /// A raw day count.
    Days(i64),
    /// An ISO `YYYY-MM-DD` string or a three-character code.
    Text(String),
}

impl From<()> for CivilDateInput {
    fn from((): ()) -> Self {
        Self::Now
    }
}

impl From<i32> for CivilDateInput {
    fn from(days: i32) -> Self {
        Self::Days(i64::from(days))
    }
}

impl From<u16> for CivilDateInput {
    fn from(days: u16) -> Self {
        Self::Days(i64::from(days))
    }
}

impl From<DayCount> for CivilDateInput {
    fn from(days: DayCount) -> Self {
        Self::Days(days.as_i64())
    }
}

impl From<&str> for CivilDateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<DateTime<Utc>> for CivilDateInput {
    fn from(moment: DateTime<Utc>) -> Self {
        Self::Moment(moment.fixed_offset())
    }
}

impl From<DateTime<Local>> for CivilDateInput {
    fn from(moment: DateTime<Local>) -> Self {
        Self::Moment(moment.fixed_offset())
    }
}

impl CivilDate {
    /// First representable day, 1973-07-20 (`100`)
    pub const MIN: Self = Self { value: DayCount::MIN };
    /// Last representable day, 2097-09-26 (`ZZZ`)
    pub const MAX: Self = Self { value: DayCount::MAX };

    /// Builds a date from any supported input, reading "now" from the system clock.
    ///
    /// # Errors
    /// See [`CivilDate::new_with_clock`].
    pub fn new(input: impl Into<CivilDateInput>) -> Result<Self, CivilDateError> {
        Self::new_with_clock(input, &SystemClock)
    }

    /// Builds a date from any supported input, reading "now" from `clock`.
    ///
    /// Strings are tried as ISO dates first. A string with the ISO shape that
    /// names a day that does not exist is an error; anything without the ISO
    /// shape is decoded as a code instead.
    ///
    /// # Errors
    /// - `CivilDateError::InvalidDate` for an ISO-shaped string naming no real day.
    /// - `CivilDateError::InvalidCode` for a string that is neither ISO nor a code.
    /// - `CivilDateError::DaysOutOfRange` if the resulting day count is out of range.
    pub fn new_with_clock<C: Clock + ?Sized>(
        input: impl Into<CivilDateInput>,
        clock: &C,
    ) -> Result<Self, CivilDateError> {
        let input = input.into();
        let days = match &input {
            CivilDateInput::Now => Ok(wall_clock::today(clock)),
            CivilDateInput::Moment(moment) => Ok(from_local(moment)),
            CivilDateInput::Days(days) => Ok(*days),
            CivilDateInput::Text(text) => Self::days_from_text(text),
        };

        days.and_then(Self::from_days).inspect_err(|err| {
            tracing::debug!(input = ?input, error = %err, "rejected civil date input");
        })
    }

    /// The current local day according to the system clock.
    ///
    /// # Errors
    /// Returns `CivilDateError::DaysOutOfRange` if the system clock is outside the range.
    pub fn today() -> Result<Self, CivilDateError> {
        Self::today_with(&SystemClock)
    }

    /// The current local day according to `clock`.
    ///
    /// # Errors
    /// Returns `CivilDateError::DaysOutOfRange` if the clock is outside the range.
    pub fn today_with<C: Clock + ?Sized>(clock: &C) -> Result<Self, CivilDateError> {
        Self::from_days(wall_clock::today(clock))
    }

    /// Creates a date from a raw day count.
    ///
    /// # Errors
    /// Returns `CivilDateError::DaysOutOfRange` if `days` is out of range.
    pub fn from_days(days: i64) -> Result<Self, CivilDateError> {
        DayCount::new(days).map(Self::from)
    }

    /// Creates a date from the moment's local calendar date.
    ///
    /// # Errors
    /// Returns `CivilDateError::DaysOutOfRange` if that date is out of range.
    pub fn from_moment<Tz: TimeZone>(moment: &DateTime<Tz>) -> Result<Self, CivilDateError> {
        Self::from_days(from_local(moment))
    }

    fn days_from_text(text: &str) -> Result<i64, CivilDateError> {
        match iso::split_fields(text) {
            Some((year, month, day)) => {
                iso::to_days(year, month, day).ok_or_else(|| CivilDateError::invalid_date(text))
            },
            None => decode(text).map(i64::from),
        }
    }

    /// Days since 1970-01-01
    #[inline]
    pub const fn value(&self) -> u16 {
        self.value.get()
    }

    /// The validated day count
    #[inline]
    pub const fn day_count(&self) -> DayCount {
        self.value
    }

    /// Three-character uppercase code
    pub fn to_code(&self) -> String {
        codec::encode_day(self.value)
    }

    /// Midnight UTC at the start of this day.
    pub fn to_date(&self) -> DateTime<Utc> {
        wall_clock::to_utc_midnight(self.value)
    }

    /// The calendar date, read from the UTC fields of [`CivilDate::to_date`].
    pub fn to_naive_date(&self) -> NaiveDate {
        self.to_date().date_naive()
    }

    /// `YYYY-MM-DD` for this day.
    ///
    /// The UTC midnight fields are formatted as though they were local fields,
    /// so the result never shifts a day with the caller's timezone.
    pub fn to_iso_string(&self) -> String {
        iso::format_date(self.to_naive_date())
    }

    /// The following day, `None` at [`CivilDate::MAX`].
    pub fn succ(&self) -> Option<Self> {
        self.value.checked_add(1).map(Self::from)
    }

    /// The preceding day, `None` at [`CivilDate::MIN`].
    pub fn pred(&self) -> Option<Self> {
        self.value.checked_add(-1).map(Self::from)
    }

    /// Signed number of days from `self` to `other`.
    pub const fn days_until(&self, other: &Self) -> i64 {
        other.value.as_i64() - self.value.as_i64()
    }
}

/// A day count or a string, the inputs [`to_utc_midnight`] accepts.
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum DaysOrText {
    Days(i64),
    Text(String),
}

impl From<i32> for DaysOrText {
    fn from(days: i32) -> Self {
        Self::Days(i64::from(days))
    }
}

impl From<u16> for DaysOrText {
    fn from(days: u16) -> Self {
        Self::Days(i64::from(days))
    }
}

impl From<&str> for DaysOrText {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<DaysOrText> for CivilDateInput {
    fn from(input: DaysOrText) -> Self {
        match input {
            DaysOrText::Days(days) => Self::Days(days),
            DaysOrText::Text(text) => Self::Text(text),
        }
    }
}

/// Converts a day count, ISO string or code straight to its UTC midnight moment.
///
/// # Errors
/// Same as [`CivilDate::new`].
pub fn to_utc_midnight(input: impl Into<DaysOrText>) -> Result<DateTime<Utc>, CivilDateError> {
    CivilDate::new(input.into()).map(|date| date.to_date())
}

impl From<DayCount> for CivilDate {
    fn from(value: DayCount) -> Self {
        Self { value }
    }
}

impl From<CivilDate> for DayCount {
    fn from(date: CivilDate) -> Self {
        date.value
    }
}

impl From<CivilDate> for DateTime<Utc> {
    fn from(date: CivilDate) -> Self {
        date.to_date()
    }
}

impl FromStr for CivilDate {
    type Err = CivilDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::days_from_text(s).and_then(Self::from_days)
    }
}

impl TryFrom<&str> for CivilDate {
    type Error = CivilDateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<i64> for CivilDate {
    type Error = CivilDateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_days(value)
    }
}

impl TryFrom<f64> for CivilDate {
    type Error = CivilDateError;

    /// Floors before validating, like [`codec::encode_fractional`].
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        DayCount::from_floor(value).map(Self::from)
    }
}

impl serde::Serialize for CivilDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_code())
    }
}

impl<'de> serde::Deserialize<'de> for CivilDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::{CivilDate, DayCount};
    use chrono::{DateTime, FixedOffset};

    pub fn moment(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).expect("test moment should be valid RFC 3339")
    }

    pub fn day_count(days: i64) -> DayCount {
        DayCount::new(days).expect("test day count should be in range")
    }

    pub fn civil(input: &str) -> CivilDate {
        input.parse().expect("test civil date should parse")
    }
}
