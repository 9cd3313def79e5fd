//! Input normalization: pure parsers for console answers
//!
//! Every parser takes the raw line and returns either a validated value or a
//! [`ParseError`] describing what to tell the user. Re-prompting is the
//! caller's job.

use chrono::{NaiveTime, Timelike};

use crate::error::ParseError;

/// Substituted when bedtime and wake-up time give an implausible span
pub const FALLBACK_SLEEP_HOURS: f64 = 8.0;

/// Longest span (in whole hours) accepted as a real night of sleep
pub const MAX_PLAUSIBLE_HOURS: u32 = 14;

/// Parse a time of day into an hour 0-23.
///
/// Accepted forms: `"10 pm"` / `"10PM"` (12-hour clock), `"22:30"` (24-hour
/// clock, minutes dropped) and a bare hour such as `"22"`.
pub fn parse_time(text: &str) -> Result<u32, ParseError> {
    let value = text.trim().to_lowercase();
    let unrecognized = || ParseError::UnrecognizedTime(text.to_string());

    if value.contains("am") || value.contains("pm") {
        let compact: String = value.split_whitespace().collect();
        let (digits, meridiem) = compact
            .strip_suffix("am")
            .map(|d| (d, "am"))
            .or_else(|| compact.strip_suffix("pm").map(|d| (d, "pm")))
            .ok_or_else(unrecognized)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(unrecognized());
        }
        let time = NaiveTime::parse_from_str(&format!("{digits}:00{meridiem}"), "%I:%M%p")
            .map_err(|_| unrecognized())?;
        return Ok(time.hour());
    }

    if value.contains(':') {
        let time = NaiveTime::parse_from_str(&value, "%H:%M").map_err(|_| unrecognized())?;
        return Ok(time.hour());
    }

    let hour: i64 = match value.parse() {
        Ok(hour) => hour,
        Err(_) => {
            // Overflowing whole numbers are still hours, just far out of range
            let (negative, digits) = match value.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, value.strip_prefix('+').unwrap_or(&value)),
            };
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(unrecognized());
            }
            if negative {
                i64::MIN
            } else {
                i64::MAX
            }
        }
    };
    if (0..=23).contains(&hour) {
        Ok(hour as u32)
    } else {
        Err(ParseError::HourOutOfRange(hour))
    }
}

/// Parse signed decimal text
pub fn parse_int(text: &str) -> Result<i64, ParseError> {
    text.trim()
        .parse()
        .map_err(|_| ParseError::NotANumber(text.to_string()))
}

/// Parse an integer within `min..=max`
pub fn parse_bounded(text: &str, min: i64, max: i64) -> Result<i64, ParseError> {
    let value = parse_int(text)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ParseError::OutOfRange { value, min, max })
    }
}

/// Parse a non-negative count of minutes
pub fn parse_minutes(text: &str) -> Result<u32, ParseError> {
    let value = parse_int(text)?;
    if value < 0 {
        return Err(ParseError::BelowMinimum { value, min: 0 });
    }
    u32::try_from(value).map_err(|_| ParseError::OutOfRange {
        value,
        min: 0,
        max: i64::from(u32::MAX),
    })
}

/// Stress level, 1-10
pub fn parse_stress(text: &str) -> Result<u32, ParseError> {
    parse_bounded(text, 1, 10).map(|v| v as u32)
}

/// Interruptions flag, 0 or 1
pub fn parse_interruptions(text: &str) -> Result<u8, ParseError> {
    parse_bounded(text, 0, 1).map(|v| v as u8)
}

/// Main menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewEntry,
    ViewGraph,
    Exit,
}

pub fn parse_choice(text: &str) -> Result<MenuChoice, ParseError> {
    match text.trim() {
        "1" => Ok(MenuChoice::NewEntry),
        "2" => Ok(MenuChoice::ViewGraph),
        "3" => Ok(MenuChoice::Exit),
        _ => Err(ParseError::InvalidChoice(text.to_string())),
    }
}

/// Hours of sleep derived from bedtime and wake-up hour
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SleepDuration {
    Measured(f64),
    /// Raw span was 0 or above [`MAX_PLAUSIBLE_HOURS`]
    Substituted { raw_hours: u32 },
}

impl SleepDuration {
    pub fn hours(&self) -> f64 {
        match self {
            SleepDuration::Measured(hours) => *hours,
            SleepDuration::Substituted { .. } => FALLBACK_SLEEP_HOURS,
        }
    }

    pub fn is_substituted(&self) -> bool {
        matches!(self, SleepDuration::Substituted { .. })
    }
}

/// `(wake - bed) mod 24`, with the fallback applied to implausible spans
pub fn sleep_duration(bedtime: u32, wake_time: u32) -> SleepDuration {
    let raw = (i64::from(wake_time) - i64::from(bedtime)).rem_euclid(24) as u32;
    if raw == 0 || raw > MAX_PLAUSIBLE_HOURS {
        tracing::debug!(
            bedtime,
            wake_time,
            raw_hours = raw,
            fallback_hours = FALLBACK_SLEEP_HOURS,
            "implausible sleep span, substituting fallback"
        );
        SleepDuration::Substituted { raw_hours: raw }
    } else {
        SleepDuration::Measured(f64::from(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_forms() {
        assert_eq!(parse_time("10 pm"), Ok(22));
        assert_eq!(parse_time("22:00"), Ok(22));
        assert_eq!(parse_time("6 am"), Ok(6));
        assert_eq!(parse_time("6"), Ok(6));
    }

    #[test]
    fn test_parse_time_meridiem_variants() {
        assert_eq!(parse_time("10PM"), Ok(22));
        assert_eq!(parse_time(" 11 Pm "), Ok(23));
        assert_eq!(parse_time("12 am"), Ok(0));
        assert_eq!(parse_time("12 pm"), Ok(12));
        assert_eq!(parse_time("06am"), Ok(6));
    }

    #[test]
    fn test_parse_time_24h_drops_minutes() {
        assert_eq!(parse_time("22:30"), Ok(22));
        assert_eq!(parse_time("06:45"), Ok(6));
        assert_eq!(parse_time("0:15"), Ok(0));
    }

    #[test]
    fn test_parse_time_rejects() {
        assert_eq!(parse_time("25"), Err(ParseError::HourOutOfRange(25)));
        assert_eq!(parse_time("-1"), Err(ParseError::HourOutOfRange(-1)));
        assert_eq!(
            parse_time("99999999999999999999"),
            Err(ParseError::HourOutOfRange(i64::MAX))
        );
        assert_eq!(
            parse_time("-99999999999999999999"),
            Err(ParseError::HourOutOfRange(i64::MIN))
        );
        assert!(matches!(
            parse_time("9999999999999999999x"),
            Err(ParseError::UnrecognizedTime(_))
        ));
        assert!(matches!(
            parse_time("abc"),
            Err(ParseError::UnrecognizedTime(_))
        ));
        assert!(matches!(
            parse_time("13 pm"),
            Err(ParseError::UnrecognizedTime(_))
        ));
        assert!(matches!(
            parse_time("0 am"),
            Err(ParseError::UnrecognizedTime(_))
        ));
        assert!(matches!(
            parse_time("24:00"),
            Err(ParseError::UnrecognizedTime(_))
        ));
        assert!(matches!(
            parse_time("pm"),
            Err(ParseError::UnrecognizedTime(_))
        ));
        assert!(matches!(
            parse_time("10:30 pm"),
            Err(ParseError::UnrecognizedTime(_))
        ));
        assert!(matches!(parse_time(""), Err(ParseError::UnrecognizedTime(_))));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("30"), Ok(30));
        assert_eq!(parse_int(" -5 "), Ok(-5));
        assert_eq!(parse_int("+7"), Ok(7));
        assert!(matches!(parse_int("ten"), Err(ParseError::NotANumber(_))));
        assert!(matches!(parse_int("3.5"), Err(ParseError::NotANumber(_))));
    }

    #[test]
    fn test_bounded_parsers() {
        assert_eq!(parse_stress("1"), Ok(1));
        assert_eq!(parse_stress("10"), Ok(10));
        assert!(matches!(
            parse_stress("11"),
            Err(ParseError::OutOfRange { value: 11, .. })
        ));
        assert!(matches!(parse_stress("0"), Err(ParseError::OutOfRange { .. })));
        assert_eq!(parse_interruptions("0"), Ok(0));
        assert_eq!(parse_interruptions("1"), Ok(1));
        assert!(parse_interruptions("2").is_err());
        assert_eq!(parse_minutes("45"), Ok(45));
        assert!(matches!(
            parse_minutes("-10"),
            Err(ParseError::BelowMinimum { value: -10, min: 0 })
        ));
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1"), Ok(MenuChoice::NewEntry));
        assert_eq!(parse_choice("2\n"), Ok(MenuChoice::ViewGraph));
        assert_eq!(parse_choice(" 3 "), Ok(MenuChoice::Exit));
        assert!(matches!(parse_choice("4"), Err(ParseError::InvalidChoice(_))));
        assert!(matches!(parse_choice("exit"), Err(ParseError::InvalidChoice(_))));
    }

    #[test]
    fn test_sleep_duration() {
        assert_eq!(sleep_duration(22, 6), SleepDuration::Measured(8.0));
        assert_eq!(sleep_duration(23, 6).hours(), 7.0);
        assert_eq!(sleep_duration(0, 7).hours(), 7.0);
    }

    #[test]
    fn test_sleep_duration_fallback() {
        let same = sleep_duration(22, 22);
        assert!(same.is_substituted());
        assert_eq!(same.hours(), 8.0);

        let long = sleep_duration(8, 23);
        assert_eq!(long, SleepDuration::Substituted { raw_hours: 15 });
        assert_eq!(long.hours(), 8.0);

        let edge = sleep_duration(20, 10);
        assert_eq!(edge, SleepDuration::Measured(14.0));
    }
}
