use std::path::PathBuf;

use chrono::Duration;
use clap::Parser;

use crate::config::{parse_minutes, Config};

#[derive(Parser, Debug)]
#[command(name = "pomodoro")]
#[command(about = "Pomodoro timer")]
#[command(long_about = "pomodoro - A terminal pomodoro timer

Alternates work and pause intervals with a large countdown display.

KEYS:
  space    Start, pause, or resume the countdown; after an interval ends,
           switch to the next one
  b        Beep
  q        Quit

EXAMPLES:
  pomodoro                              25 minute work, 5 minute pause
  pomodoro --work-dur 50 --pause-dur 10
  pomodoro --log-file /tmp/pomodoro.log Write diagnostics to a file")]
#[command(version)]
pub struct Cli {
    /// Work duration in minutes (default: 25)
    ///
    /// Must be a whole number between 1 and 99.
    #[arg(
        long = "work-dur",
        value_name = "MINUTES",
        default_value = "25",
        value_parser = parse_minutes,
        env = "POMODORO_WORK_DUR"
    )]
    pub work_dur: Duration,

    /// Pause duration in minutes (default: 5)
    ///
    /// Must be a whole number between 1 and 99.
    #[arg(
        long = "pause-dur",
        value_name = "MINUTES",
        default_value = "5",
        value_parser = parse_minutes,
        env = "POMODORO_PAUSE_DUR"
    )]
    pub pause_dur: Duration,

    /// Write diagnostic logs to this file
    ///
    /// The terminal is taken over by the countdown, so logs are only
    /// written when a file is given. Filter with RUST_LOG.
    #[arg(long, value_name = "PATH", env = "POMODORO_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The validated interval durations.
    #[must_use]
    pub const fn config(&self) -> Config {
        Config {
            work_duration: self.work_dur,
            pause_duration: self.pause_dur,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["pomodoro"]).unwrap();
        assert_eq!(cli.config(), Config::default());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_custom_durations() {
        let cli =
            Cli::try_parse_from(["pomodoro", "--work-dur", "1", "--pause-dur", "2"]).unwrap();
        let config = cli.config();

        assert_eq!(config.work_duration, Duration::minutes(1));
        assert_eq!(config.pause_duration, Duration::minutes(2));
    }

    #[test]
    fn test_zero_is_rejected() {
        let err = Cli::try_parse_from(["pomodoro", "--work-dur", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let rendered = err.to_string();
        assert!(rendered.contains("--work-dur"));
        assert!(rendered.contains("Invalid positive integer for minutes: 0"));
    }

    #[test]
    fn test_non_integer_is_rejected() {
        let err = Cli::try_parse_from(["pomodoro", "--pause-dur", "abc"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_too_long_is_rejected() {
        let err = Cli::try_parse_from(["pomodoro", "--work-dur", "100"]).unwrap_err();
        assert!(err.to_string().contains("cannot exceed 99 minutes"));
    }

    #[test]
    fn test_log_file() {
        let cli = Cli::try_parse_from(["pomodoro", "--log-file", "/tmp/p.log"]).unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/p.log")));
    }
}
