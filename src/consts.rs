/// Smallest valid day count (1973-07-20), radix-36 `100`
pub const MIN_DAYS: u16 = 1296;

/// Largest valid day count (2097-09-26), radix-36 `ZZZ`
pub const MAX_DAYS: u16 = 46655;

/// Base of the code alphabet (`0-9` then `A-Z`)
pub const RADIX: u32 = 36;

/// Every code is exactly this many characters
pub const CODE_LEN: usize = 3;

/// Digit alphabet for encoding, index is the digit value
pub(crate) const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Milliseconds in one civil day
pub const MS_PER_DAY: i64 = 86_400_000;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Length of a `YYYY-MM-DD` string
pub const ISO_LEN: usize = 10;

/// Highest month number
pub(crate) const MAX_MONTH: u32 = 12;

/// Highest day-of-month the ISO shape admits lexically
pub(crate) const MAX_DAY_LEXICAL: u32 = 31;
