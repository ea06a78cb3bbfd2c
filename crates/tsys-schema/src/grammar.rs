//! Text grammars for dates, times and datetimes.
//!
//! Parsing happens in two stages. The regex decides whether the text has
//! the right shape ([`GrammarError::Format`]); chrono then decides whether
//! the components name a real value ([`GrammarError::Invalid`]). Digit
//! classes are spelled `[0-9]` because `\d` also matches non-ASCII digits.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tsys_core::DateTimeValue;

static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("date grammar compiles")
});

static TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2})(?:\.([0-9]{1,6}))?$")
        .expect("time grammar compiles")
});

static DATETIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})",
        r"[T ]([0-9]{2}):([0-9]{2}):([0-9]{2})(?:\.([0-9]{1,6}))?",
        r"(Z|[+-][0-9]{2}(?::?[0-9]{2})?)?$",
    ))
    .expect("datetime grammar compiles")
});

/// Why a temporal string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GrammarError {
    /// The text does not have the expected shape.
    Format,
    /// The shape is right but a component is out of range.
    Invalid,
}

/// Parse `YYYY-MM-DD`.
pub(crate) fn parse_date(text: &str) -> Result<NaiveDate, GrammarError> {
    let caps = DATE.captures(text).ok_or(GrammarError::Format)?;
    date_from(&caps, 1)
}

/// Parse `HH:MM:SS[.ffffff]`.
pub(crate) fn parse_time(text: &str) -> Result<NaiveTime, GrammarError> {
    let caps = TIME.captures(text).ok_or(GrammarError::Format)?;
    time_from(&caps, 1)
}

/// Parse `YYYY-M-D[T ]HH:MM:SS[.ffffff][Z|±HH[[:]MM]]`.
///
/// Without a zone the result is naive; with one it carries a fixed offset.
pub(crate) fn parse_datetime(text: &str) -> Result<DateTimeValue, GrammarError> {
    let caps = DATETIME.captures(text).ok_or(GrammarError::Format)?;
    let naive = NaiveDateTime::new(date_from(&caps, 1)?, time_from(&caps, 4)?);
    match caps.get(8) {
        None => Ok(DateTimeValue::Naive(naive)),
        Some(zone) => {
            let offset = parse_offset(zone.as_str())?;
            offset
                .from_local_datetime(&naive)
                .single()
                .map(DateTimeValue::Aware)
                .ok_or(GrammarError::Invalid)
        }
    }
}

fn number(caps: &Captures<'_>, index: usize) -> Result<u32, GrammarError> {
    caps.get(index)
        .ok_or(GrammarError::Format)?
        .as_str()
        .parse()
        .map_err(|_| GrammarError::Format)
}

fn date_from(caps: &Captures<'_>, first: usize) -> Result<NaiveDate, GrammarError> {
    let year = number(caps, first)?;
    let month = number(caps, first + 1)?;
    let day = number(caps, first + 2)?;
    // Calendars start at year 1.
    if year < 1 {
        return Err(GrammarError::Invalid);
    }
    let year = i32::try_from(year).map_err(|_| GrammarError::Invalid)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(GrammarError::Invalid)
}

fn time_from(caps: &Captures<'_>, first: usize) -> Result<NaiveTime, GrammarError> {
    let hour = number(caps, first)?;
    let minute = number(caps, first + 1)?;
    let second = number(caps, first + 2)?;
    // Fractions are right-padded, so ".001" is one millisecond.
    let micro = match caps.get(first + 3) {
        Some(fraction) => format!("{:0<6}", fraction.as_str())
            .parse()
            .map_err(|_| GrammarError::Format)?,
        None => 0,
    };
    // chrono reads second 59 plus a whole second of micros as a leap second.
    if second > 59 {
        return Err(GrammarError::Invalid);
    }
    NaiveTime::from_hms_micro_opt(hour, minute, second, micro).ok_or(GrammarError::Invalid)
}

fn parse_offset(zone: &str) -> Result<FixedOffset, GrammarError> {
    if zone == "Z" {
        return FixedOffset::east_opt(0).ok_or(GrammarError::Invalid);
    }
    let (sign, digits) = zone.split_at(1);
    let digits = digits.replace(':', "");
    let hours: i32 = digits[..2].parse().map_err(|_| GrammarError::Format)?;
    let minutes: i32 = match digits.get(2..) {
        Some(rest) if !rest.is_empty() => rest.parse().map_err(|_| GrammarError::Format)?,
        _ => 0,
    };
    if minutes > 59 {
        return Err(GrammarError::Invalid);
    }
    let seconds = hours * 3600 + minutes * 60;
    let seconds = if sign == "-" { -seconds } else { seconds };
    FixedOffset::east_opt(seconds).ok_or(GrammarError::Invalid)
}
