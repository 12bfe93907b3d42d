//! Focus intervals and the session state machine.
//!
//! Provides the pieces behind the countdown screen:
//! - A clock abstraction so time can be faked in tests
//! - A deadline-based countdown timer with pause/resume
//! - The Idle/Running/Paused/Done session controller

pub mod clock;
pub mod input;
pub mod session;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use input::{Key, PollPolicy};
pub use session::{
    transition, Action, Display, Session, SessionState, Transition, View, BLINK_TICK, FAST_TICK,
};
pub use timer::{format_duration_mmss, Timer};
