use crate::CivilDateError;
use crate::consts::{MAX_DAYS, MIN_DAYS};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Whole civil days since 1970-01-01, guaranteed to be in `MIN_DAYS..=MAX_DAYS`.
///
/// The range is exactly the span of three radix-36 digits from `100` to `ZZZ`,
/// so it fits in a `u16`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, Into, Serialize, Deserialize,
)]
#[display(fmt = "{}", "_0")]
#[serde(try_from = "i64", into = "u16")]
pub struct DayCount(u16);

impl DayCount {
    /// First representable day, 1973-07-20
    pub const MIN: Self = Self(MIN_DAYS);
    /// Last representable day, 2097-09-26
    pub const MAX: Self = Self(MAX_DAYS);

    /// Creates a new `DayCount`, validating the range.
    ///
    /// # Errors
    /// Returns `CivilDateError::DaysOutOfRange` if `days` is outside `MIN_DAYS..=MAX_DAYS`.
    pub fn new(days: i64) -> Result<Self, CivilDateError> {
        u16::try_from(days)
            .ok()
            .filter(|d| (MIN_DAYS..=MAX_DAYS).contains(d))
            .map(Self)
            .ok_or(CivilDateError::DaysOutOfRange { days })
    }

    /// Floors a fractional day count, then validates the floored value.
    ///
    /// # Errors
    /// Returns `CivilDateError::DaysOutOfRange` if the floored value is out of range
    /// or `days` is not finite.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_floor(days: f64) -> Result<Self, CivilDateError> {
        // `as` saturates infinities and maps NaN to 0, all of which are out of range
        Self::new(days.floor() as i64)
    }

    /// Returns the day count as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Returns the day count widened to i64 for timestamp arithmetic
    #[inline]
    pub const fn as_i64(self) -> i64 {
        self.0 as i64
    }

    /// Offsets by `delta` days, `None` when the result leaves the range.
    pub fn checked_add(self, delta: i64) -> Option<Self> {
        self.as_i64().checked_add(delta).and_then(|d| Self::new(d).ok())
    }
}

impl TryFrom<i64> for DayCount {
    type Error = CivilDateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
