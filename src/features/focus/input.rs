//! Keys the session reacts to and how long to wait for them.

use std::time::Duration;

/// A single keypress as seen by the session controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character, including `' '`.
    Char(char),
    /// Ctrl+C. Raw mode swallows the signal, so it arrives as a key.
    Interrupt,
    /// Anything else (arrows, function keys, ...).
    Other,
}

impl Key {
    /// The space bar.
    pub const SPACE: Self = Self::Char(' ');
}

/// How long an input poll may wait for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollPolicy {
    /// Wait until something happens.
    Blocking,
    /// Wait at most this long, then report no key.
    Timeout(Duration),
    /// Return at once.
    NonBlocking,
}
