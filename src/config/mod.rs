//! Configuration for pomodoro.
//!
//! The only settings are the two interval lengths, supplied on the command
//! line and validated before the terminal is touched.

mod settings;

pub use settings::{parse_minutes, Config, MAX_MINUTES};
