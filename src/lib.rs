//! pomodoro - A terminal pomodoro timer
//!
//! This crate alternates work and pause intervals, rendering a large
//! countdown in the terminal and reacting to a handful of keypresses.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod tui;

pub use cli::args::Cli;
pub use config::Config;
pub use error::PomodoroError;
