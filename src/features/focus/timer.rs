//! Timer functionality for focus intervals.
//!
//! The timer stores absolute instants and recomputes what is left on every
//! read, so slow or skipped ticks never make the countdown drift.

use chrono::{DateTime, Duration, Utc};

use crate::config::MAX_MINUTES;
use crate::error::{FormatError, TimerError};
use crate::features::focus::clock::Clock;

/// A deadline-based countdown timer.
///
/// `remaining` may go to zero or below once the deadline passes. Deciding
/// that an interval is over is left to the caller.
#[derive(Debug, Clone)]
pub struct Timer<C: Clock> {
    clock: C,
    /// When the current run segment began.
    start_time: Option<DateTime<Utc>>,
    /// Absolute deadline of the current run segment.
    end_time: Option<DateTime<Utc>>,
    /// Time left as of the last start or pause.
    remaining_duration: Option<Duration>,
}

impl<C: Clock> Timer<C> {
    /// Create a timer that has not been started.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self {
            clock,
            start_time: None,
            end_time: None,
            remaining_duration: None,
        }
    }

    /// Start counting down from `duration`, discarding any earlier run.
    pub fn start(&mut self, duration: Duration) {
        let now = self.clock.now();
        self.start_time = Some(now);
        self.end_time = Some(now + duration);
        self.remaining_duration = Some(duration);
    }

    /// Capture the time left so it can be resumed later.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer was never started.
    pub fn pause(&mut self) -> Result<(), TimerError> {
        let remaining = self.live_remaining("pause")?;
        self.remaining_duration = Some(remaining);
        Ok(())
    }

    /// Re-anchor the deadline to now plus the captured time left.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer was never started.
    pub fn unpause(&mut self) -> Result<(), TimerError> {
        let remaining = self
            .remaining_duration
            .ok_or(TimerError::NotStarted { operation: "unpause" })?;
        let now = self.clock.now();
        self.start_time = Some(now);
        self.end_time = Some(now + remaining);
        Ok(())
    }

    /// Time until the deadline. Zero or negative once it has passed.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer was never started.
    pub fn remaining(&self) -> Result<Duration, TimerError> {
        self.live_remaining("read")
    }

    /// The time left captured by the last `start` or `pause`.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer was never started.
    pub fn snapshot(&self) -> Result<Duration, TimerError> {
        self.remaining_duration
            .ok_or(TimerError::NotStarted { operation: "read" })
    }

    /// When the current run segment began, if ever started.
    #[must_use]
    pub const fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    /// The current deadline, if ever started.
    #[must_use]
    pub const fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    fn live_remaining(&self, operation: &'static str) -> Result<Duration, TimerError> {
        let end = self.end_time.ok_or(TimerError::NotStarted { operation })?;
        Ok(end - self.clock.now())
    }
}

/// Format a duration as MM:SS.
///
/// Sub-second precision is floored away.
///
/// # Errors
///
/// Returns an error for negative spans, spans of 100 minutes or more, and
/// spans of a day or more.
pub fn format_duration_mmss(d: Duration) -> Result<String, FormatError> {
    if d < Duration::zero() {
        return Err(FormatError::Negative);
    }
    if d >= Duration::days(1) {
        return Err(FormatError::DayOrLonger);
    }
    let total_seconds = d.num_seconds();
    let (minutes, seconds) = (total_seconds / 60, total_seconds % 60);
    if minutes > MAX_MINUTES {
        return Err(FormatError::TooLong { minutes });
    }
    Ok(format!("{minutes:02}:{seconds:02}"))
}
