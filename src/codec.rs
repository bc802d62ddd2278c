//! Radix-36 code for day counts.
//!
//! A code is three characters from `0-9A-Z`, most significant digit first.
//! Input is case-insensitive, output is always uppercase. Because the valid
//! day range is exactly `100..=ZZZ` every encoded value is three characters
//! wide; the zero padding only matters for callers who encode by hand.

use crate::CivilDateError;
use crate::consts::{ALPHABET, CODE_LEN, RADIX};
use crate::types::DayCount;

/// Encodes an already validated day count.
pub fn encode_day(days: DayCount) -> String {
    let mut buf = [b'0'; CODE_LEN];
    let mut rest = u32::from(days.get());
    for slot in buf.iter_mut().rev() {
        *slot = ALPHABET[(rest % RADIX) as usize];
        rest /= RADIX;
    }
    buf.iter().copied().map(char::from).collect()
}

/// Encodes a day count as its three-character code.
///
/// # Errors
/// Returns `CivilDateError::DaysOutOfRange` if `days` is outside `MIN_DAYS..=MAX_DAYS`.
pub fn encode(days: i64) -> Result<String, CivilDateError> {
    DayCount::new(days).map(encode_day)
}

/// Floors `days`, then encodes the floored value.
///
/// # Errors
/// Returns `CivilDateError::DaysOutOfRange` if the floored value is out of range.
pub fn encode_fractional(days: f64) -> Result<String, CivilDateError> {
    DayCount::from_floor(days).map(encode_day)
}

/// Decodes a three-character code, ignoring case.
///
/// Any well-formed code is accepted, including ones below `100` that no valid
/// day count encodes to; range enforcement is left to the caller.
///
/// # Errors
/// Returns `CivilDateError::InvalidCode` unless `code` is exactly three ASCII
/// alphanumerics.
pub fn decode(code: &str) -> Result<u16, CivilDateError> {
    if code.len() != CODE_LEN || !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(CivilDateError::invalid_code(code));
    }

    let value = code
        .chars()
        .try_fold(0u32, |acc, c| c.to_digit(RADIX).map(|digit| acc * RADIX + digit))
        .ok_or_else(|| CivilDateError::invalid_code(code))?;

    // 36^3 - 1 = 46655 always fits
    u16::try_from(value).map_err(|_| CivilDateError::invalid_code(code))
}
