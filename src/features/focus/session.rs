//! The session controller.
//!
//! Owns the Idle/Running/Paused/Done state machine, which interval comes
//! next, the blink toggle, and the one [`Timer`]. The render loop feeds it
//! at most one key per tick and asks it what to show.

use std::fmt;
use std::time::Duration as StdDuration;

use chrono::Duration;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{PomodoroError, TimerError};
use crate::features::focus::clock::Clock;
use crate::features::focus::input::{Key, PollPolicy};
use crate::features::focus::timer::{format_duration_mmss, Timer};

/// Poll interval while counting down.
pub const FAST_TICK: StdDuration = StdDuration::from_millis(30);

/// Poll interval while blinking in `Done`.
pub const BLINK_TICK: StdDuration = StdDuration::from_millis(500);

/// Session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Waiting to start the upcoming interval.
    #[default]
    Idle,
    /// Counting down.
    Running,
    /// Countdown frozen.
    Paused,
    /// Interval over, blinking `00:00`.
    Done,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "Idle",
            Self::Running => "Running",
            Self::Paused => "Paused",
            Self::Done => "Done",
        };
        f.write_str(name)
    }
}

/// Side effect requested by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do.
    None,
    /// Start the timer with the upcoming interval's duration.
    StartTimer,
    /// Freeze the timer.
    PauseTimer,
    /// Resume the frozen timer.
    ResumeTimer,
    /// Switch between work and pause.
    FlipInterval,
    /// Ring the terminal bell.
    Beep,
    /// Leave the render loop.
    Quit,
}

/// Result of feeding one key to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State after the key.
    pub next: SessionState,
    /// Side effect to perform.
    pub action: Action,
}

/// The transition table.
///
/// Pure: it never touches the timer, so it can be checked exhaustively.
/// Expiry (Running to Done) is not key driven and happens in
/// [`Session::tick`].
#[must_use]
pub const fn transition(state: SessionState, key: Key) -> Transition {
    let (next, action) = match (state, key) {
        (_, Key::Char('q') | Key::Interrupt) => (state, Action::Quit),
        (_, Key::Char('b')) => (state, Action::Beep),
        (SessionState::Idle, Key::Char(' ')) => (SessionState::Running, Action::StartTimer),
        (SessionState::Running, Key::Char(' ')) => (SessionState::Paused, Action::PauseTimer),
        (SessionState::Paused, Key::Char(' ')) => (SessionState::Running, Action::ResumeTimer),
        (SessionState::Done, Key::Char(' ')) => (SessionState::Idle, Action::FlipInterval),
        _ => (state, Action::None),
    };
    Transition { next, action }
}

/// What the big display shows this tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Display {
    /// An `MM:SS` readout.
    Digits(String),
    /// Nothing (the off phase of the blink, or the tick an interval ends).
    Blank,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Big centered content.
    pub display: Display,
    /// State named in the footer.
    pub state: SessionState,
    /// Whether the interval shown is work.
    pub is_work_time: bool,
}

/// A pomodoro session: state machine plus timer.
#[derive(Debug)]
pub struct Session<C: Clock> {
    config: Config,
    state: SessionState,
    /// True when the current or upcoming interval is work.
    is_work_time: bool,
    /// Blink phase while `Done`.
    show: bool,
    poll: PollPolicy,
    timer: Timer<C>,
}

impl<C: Clock> Session<C> {
    /// Create an idle session whose first interval is work.
    #[must_use]
    pub const fn new(config: Config, clock: C) -> Self {
        Self {
            config,
            state: SessionState::Idle,
            is_work_time: true,
            show: true,
            poll: PollPolicy::Blocking,
            timer: Timer::new(clock),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the current or upcoming interval is work.
    #[must_use]
    pub const fn is_work_time(&self) -> bool {
        self.is_work_time
    }

    /// How the loop should wait for the next key.
    #[must_use]
    pub const fn poll_policy(&self) -> PollPolicy {
        self.poll
    }

    /// The session's timer.
    #[must_use]
    pub const fn timer(&self) -> &Timer<C> {
        &self.timer
    }

    /// Configured length of the current or upcoming interval.
    #[must_use]
    pub const fn upcoming_duration(&self) -> Duration {
        if self.is_work_time {
            self.config.work_duration
        } else {
            self.config.pause_duration
        }
    }

    const fn interval_name(&self) -> &'static str {
        if self.is_work_time {
            "work"
        } else {
            "pause"
        }
    }

    /// Apply at most one key and return the action it caused.
    ///
    /// `Beep` and `Quit` are returned for the caller to carry out; timer
    /// actions are applied here.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer is paused or resumed before it was
    /// started, which the transition table rules out.
    pub fn handle_key(&mut self, key: Option<Key>) -> Result<Action, TimerError> {
        let Some(key) = key else {
            return Ok(Action::None);
        };
        let Transition { next, action } = transition(self.state, key);

        match action {
            Action::StartTimer => {
                let duration = self.upcoming_duration();
                self.timer.start(duration);
                self.poll = PollPolicy::Timeout(FAST_TICK);
                info!(
                    interval = self.interval_name(),
                    minutes = duration.num_minutes(),
                    "interval started"
                );
            }
            Action::PauseTimer => {
                self.timer.pause()?;
                self.poll = PollPolicy::Blocking;
            }
            Action::ResumeTimer => {
                self.timer.unpause()?;
                self.poll = PollPolicy::Timeout(FAST_TICK);
            }
            Action::FlipInterval => {
                self.is_work_time = !self.is_work_time;
                self.poll = PollPolicy::Blocking;
            }
            Action::Beep | Action::Quit | Action::None => {}
        }

        self.enter(next);
        Ok(action)
    }

    /// Work out what to show this tick.
    ///
    /// A running interval whose deadline has been reached (remaining time
    /// zero or less) moves to `Done` here and shows nothing this tick.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer is read before it was started or a
    /// duration cannot be formatted.
    pub fn tick(&mut self) -> Result<View, PomodoroError> {
        let display = match self.state {
            SessionState::Idle => Display::Digits(format_duration_mmss(self.upcoming_duration())?),
            SessionState::Running => {
                let remaining = self.timer.remaining()?;
                if remaining <= Duration::zero() {
                    self.finish();
                    Display::Blank
                } else {
                    Display::Digits(format_duration_mmss(remaining)?)
                }
            }
            SessionState::Paused => {
                let frozen = self.timer.snapshot()?.max(Duration::zero());
                Display::Digits(format_duration_mmss(frozen)?)
            }
            SessionState::Done => {
                let display = if self.show {
                    Display::Digits(format_duration_mmss(Duration::zero())?)
                } else {
                    Display::Blank
                };
                self.show = !self.show;
                display
            }
        };

        Ok(View {
            display,
            state: self.state,
            is_work_time: self.is_work_time,
        })
    }

    fn finish(&mut self) {
        info!(interval = self.interval_name(), "interval finished");
        self.show = true;
        self.poll = PollPolicy::Timeout(BLINK_TICK);
        self.enter(SessionState::Done);
    }

    fn enter(&mut self, next: SessionState) {
        if next != self.state {
            debug!(from = %self.state, to = %next, "state transition");
            self.state = next;
        }
    }
}
