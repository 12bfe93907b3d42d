//! Feature implementations for pomodoro.
//!
//! - Focus mode: the countdown timer and the session state machine
//!   that drives it

pub mod focus;
