//! Interval durations and their validation.

use chrono::Duration;

/// Largest interval length, in minutes, that fits the `MM:SS` display.
pub const MAX_MINUTES: i64 = 99;

/// Validated interval lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Length of a work interval.
    pub work_duration: Duration,
    /// Length of a pause interval.
    pub pause_duration: Duration,
}

// Default value functions
const fn default_work_minutes() -> i64 {
    25
}

const fn default_pause_minutes() -> i64 {
    5
}

impl Config {
    /// Build a config from minute counts.
    ///
    /// # Errors
    ///
    /// Returns an error message if either value is outside `1..=99`.
    pub fn from_minutes(work: i64, pause: i64) -> Result<Self, String> {
        Ok(Self {
            work_duration: minutes_in_range(work, &work.to_string())?,
            pause_duration: minutes_in_range(pause, &pause.to_string())?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_duration: Duration::minutes(default_work_minutes()),
            pause_duration: Duration::minutes(default_pause_minutes()),
        }
    }
}

/// Parse a command-line minutes value into a duration.
///
/// Accepts positive integers up to [`MAX_MINUTES`]. The error message names
/// the rejected value; clap adds the option name in front of it.
///
/// # Errors
///
/// Returns a human-readable message for non-integers, non-positive values,
/// and values too long for the display.
pub fn parse_minutes(value: &str) -> Result<Duration, String> {
    let minutes = value
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("Invalid positive integer for minutes: {value}"))?;
    minutes_in_range(minutes, value)
}

fn minutes_in_range(minutes: i64, raw: &str) -> Result<Duration, String> {
    if minutes <= 0 {
        return Err(format!("Invalid positive integer for minutes: {raw}"));
    }
    if minutes > MAX_MINUTES {
        return Err(format!(
            "Duration cannot exceed {MAX_MINUTES} minutes: {raw}"
        ));
    }
    Ok(Duration::minutes(minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.work_duration, Duration::minutes(25));
        assert_eq!(config.pause_duration, Duration::minutes(5));
    }

    #[test]
    fn test_parse_minutes_valid() {
        assert_eq!(parse_minutes("1"), Ok(Duration::minutes(1)));
        assert_eq!(parse_minutes("25"), Ok(Duration::minutes(25)));
        assert_eq!(parse_minutes(" 7 "), Ok(Duration::minutes(7)));
        assert_eq!(parse_minutes("99"), Ok(Duration::minutes(99)));
    }

    #[test]
    fn test_parse_minutes_non_positive() {
        let err = parse_minutes("0").unwrap_err();
        assert_eq!(err, "Invalid positive integer for minutes: 0");

        let err = parse_minutes("-3").unwrap_err();
        assert!(err.contains("-3"));
    }

    #[test]
    fn test_parse_minutes_not_an_integer() {
        assert_eq!(
            parse_minutes("abc").unwrap_err(),
            "Invalid positive integer for minutes: abc"
        );
        assert!(parse_minutes("2.5").is_err());
        assert!(parse_minutes("").is_err());
    }

    #[test]
    fn test_parse_minutes_too_long() {
        let err = parse_minutes("100").unwrap_err();
        assert_eq!(err, "Duration cannot exceed 99 minutes: 100");
        assert!(parse_minutes("1440").is_err());
    }

    #[test]
    fn test_from_minutes() {
        let config = Config::from_minutes(50, 10).unwrap();
        assert_eq!(config.work_duration, Duration::minutes(50));
        assert_eq!(config.pause_duration, Duration::minutes(10));

        assert!(Config::from_minutes(0, 5).is_err());
        assert!(Config::from_minutes(25, 120).is_err());
    }
}
