//! Time-of-day handling for Rejseplanen trip legs.
//!
//! Rejseplanen reports leg times as bare "HH:MM" or "HH:MM:SS" strings with
//! no reliable date attached. This module parses those strings and anchors
//! them to a calendar day relative to the current wall-clock time.

use chrono::{Duration, NaiveDateTime, NaiveTime};

/// How far in the past (in hours) an anchored time may lie before it is
/// assumed to belong to the next calendar day.
pub const ROLLOVER_GRACE_HOURS: i64 = 1;

/// Error returned when a leg time is in neither accepted format.
///
/// This indicates an upstream format change and is never treated as
/// "skip this trip".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected time format {input:?}: {reason}")]
pub struct TimeError {
    input: String,
    reason: &'static str,
}

impl TimeError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    /// A departure that has no time at all.
    pub fn missing() -> Self {
        Self::new("", "departure time missing")
    }

    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parse a time of day from "HH:MM" or "HH:MM:SS".
///
/// # Examples
///
/// ```
/// use board_server::domain::parse_clock_time;
///
/// assert_eq!(parse_clock_time("08:15"), parse_clock_time("08:15:00"));
/// assert!(parse_clock_time("23:59:59").is_ok());
///
/// assert!(parse_clock_time("0815").is_err());
/// assert!(parse_clock_time("8:15").is_err());
/// assert!(parse_clock_time("24:00").is_err());
/// ```
pub fn parse_clock_time(s: &str) -> Result<NaiveTime, TimeError> {
    let bytes = s.as_bytes();

    if bytes.len() != 5 && bytes.len() != 8 {
        return Err(TimeError::new(s, "expected HH:MM or HH:MM:SS"));
    }

    if bytes[2] != b':' {
        return Err(TimeError::new(s, "expected colon at position 2"));
    }

    let hour = parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new(s, "invalid hour"))?;
    if hour > 23 {
        return Err(TimeError::new(s, "hour must be 0-23"));
    }

    let minute =
        parse_two_digits(&bytes[3..5]).ok_or_else(|| TimeError::new(s, "invalid minute"))?;
    if minute > 59 {
        return Err(TimeError::new(s, "minute must be 0-59"));
    }

    let second = if bytes.len() == 8 {
        if bytes[5] != b':' {
            return Err(TimeError::new(s, "expected colon at position 5"));
        }
        let second =
            parse_two_digits(&bytes[6..8]).ok_or_else(|| TimeError::new(s, "invalid second"))?;
        if second > 59 {
            return Err(TimeError::new(s, "second must be 0-59"));
        }
        second
    } else {
        0
    };

    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| TimeError::new(s, "invalid time"))
}

/// Attach `now`'s date to a time of day, correcting for midnight rollover.
///
/// A departure reported as "00:05" while it is 23:50 belongs to tomorrow.
/// Anything earlier than `now - ROLLOVER_GRACE_HOURS` is moved forward one
/// day, so the result is never more than an hour in the past.
///
/// # Examples
///
/// ```
/// use board_server::domain::anchor_to_day;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let now = NaiveDate::from_ymd_opt(2024, 3, 15)
///     .unwrap()
///     .and_hms_opt(23, 50, 0)
///     .unwrap();
/// let dep = anchor_to_day(NaiveTime::from_hms_opt(0, 5, 0).unwrap(), now);
/// assert_eq!(dep.date(), NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
/// ```
pub fn anchor_to_day(time: NaiveTime, now: NaiveDateTime) -> NaiveDateTime {
    let anchored = now.date().and_time(time);
    if anchored < now - Duration::hours(ROLLOVER_GRACE_HOURS) {
        anchored + Duration::days(1)
    } else {
        anchored
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
