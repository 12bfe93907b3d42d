//! Error types for pomodoro.

use thiserror::Error;

/// Top-level error for everything the library can fail with.
#[derive(Debug, Error)]
pub enum PomodoroError {
    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal setup, drawing, or input failure.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// The timer was driven out of order.
    #[error(transparent)]
    Timer(#[from] TimerError),

    /// A duration could not be shown as `MM:SS`.
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Misuse of the countdown timer.
///
/// The session state machine only pauses, resumes, or reads a timer that
/// has been started, so seeing this error means a transition is wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimerError {
    /// An operation needed a deadline but `start` was never called.
    #[error("Cannot {operation} timer: timer has not been started yet")]
    NotStarted {
        /// The operation that was attempted.
        operation: &'static str,
    },
}

/// A duration outside what the `MM:SS` display can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Spans of 100 minutes or more do not fit in two minute digits.
    #[error("Duration cannot exceed 99 minutes (got {minutes} minutes)")]
    TooLong {
        /// Whole minutes in the rejected span.
        minutes: i64,
    },
    /// Spans of a day or longer.
    #[error("Duration cannot be longer than 24 hours")]
    DayOrLonger,
    /// Negative spans have no display form.
    #[error("Duration cannot be negative")]
    Negative,
}
