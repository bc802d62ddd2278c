//! Conversions between moments and day counts.
//!
//! Ingestion reads the wall-clock date of a moment in its own zone, so every
//! moment on the same local calendar day maps to the same count. Emission goes
//! the other way at UTC: a day count becomes midnight UTC of that day. The two
//! directions only agree for observers whose local date at UTC midnight is the
//! same day; west of Greenwich the emitted instant still reads as "yesterday".

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};

use crate::consts::MS_PER_DAY;
use crate::types::DayCount;

/// Source of "now" for anything that needs the current local day.
///
/// The returned moment carries the observer's UTC offset, which is what makes
/// its wall-clock date meaningful.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Reads the process clock in the process's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always reports the same moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<FixedOffset>,
{
    fn now(&self) -> DateTime<FixedOffset> {
        self()
    }
}

/// Days since the epoch for a calendar date, taken as midnight UTC of the
/// same numeric fields.
pub fn days_from_civil(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .timestamp_millis()
        .div_euclid(MS_PER_DAY)
}

/// Day count of the moment's local calendar date. Time of day and offset are
/// discarded; no range check is applied.
pub fn from_local<Tz: TimeZone>(moment: &DateTime<Tz>) -> i64 {
    days_from_civil(moment.date_naive())
}

/// Midnight UTC at the start of `days`.
pub fn to_utc_midnight(days: DayCount) -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::milliseconds(days.as_i64() * MS_PER_DAY)
}

/// Day count of the clock's current local date.
pub fn today<C: Clock + ?Sized>(clock: &C) -> i64 {
    from_local(&clock.now())
}
