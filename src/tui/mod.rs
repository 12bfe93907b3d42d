//! Terminal User Interface (TUI) for pomodoro.
//!
//! Owns the terminal for the life of the countdown and runs the
//! poll/update/draw loop. Built with ratatui and crossterm.

mod event;
mod glyphs;
mod ui;

pub use event::{translate, Bell, CrosstermInput, InputSource, TerminalBell};
pub use glyphs::{big_text, block_width, GLYPH_HEIGHT};
pub use ui::{centered_rect, render};

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::PomodoroError;
use crate::features::focus::{Action, Clock, Session, SystemClock};

/// Raw-mode, alternate-screen terminal that restores itself on drop.
///
/// Restoring in `Drop` means the terminal comes back even when the loop
/// returns an error or panics.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen, and hide the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up.
    pub fn acquire() -> Result<Self, PomodoroError> {
        enable_raw_mode()
            .map_err(|e| PomodoroError::Terminal(format!("Failed to enable raw mode: {e}")))?;

        let setup = || -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
            terminal.hide_cursor()?;
            Ok(terminal)
        };

        match setup() {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                disable_raw_mode().ok();
                execute!(io::stdout(), LeaveAlternateScreen).ok();
                Err(PomodoroError::Terminal(format!(
                    "Failed to setup terminal: {e}"
                )))
            }
        }
    }

    /// The wrapped terminal.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        disable_raw_mode().ok();
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen).ok();
        self.terminal.show_cursor().ok();
    }
}

/// Run the countdown on the real terminal until the user quits.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(config: Config) -> Result<(), PomodoroError> {
    info!(
        work_minutes = config.work_duration.num_minutes(),
        pause_minutes = config.pause_duration.num_minutes(),
        "starting pomodoro"
    );

    let mut guard = TerminalGuard::acquire()?;
    let mut session = Session::new(config, SystemClock);
    let result = run_app(
        guard.terminal(),
        &mut session,
        &mut CrosstermInput,
        &mut TerminalBell,
    );
    drop(guard);

    match &result {
        Ok(()) => info!("quit"),
        Err(e) => tracing::error!("{e}"),
    }
    result
}

/// Run the main application loop.
///
/// Draws the current view, then repeats: wait for at most one key using
/// the session's poll policy, apply it, and redraw.
///
/// # Errors
///
/// Returns an error if drawing, input, or a timer operation fails.
pub fn run_app<B, C, I, L>(
    terminal: &mut Terminal<B>,
    session: &mut Session<C>,
    input: &mut I,
    bell: &mut L,
) -> Result<(), PomodoroError>
where
    B: Backend,
    C: Clock,
    I: InputSource,
    L: Bell,
{
    draw(terminal, session)?;

    loop {
        let key = input.poll_key(session.poll_policy())?;
        if let Some(key) = key {
            debug!(?key, state = %session.state(), "key");
        }

        match session.handle_key(key)? {
            Action::Quit => break,
            Action::Beep => bell.ring()?,
            _ => {}
        }

        draw(terminal, session)?;
    }

    Ok(())
}

fn draw<B: Backend, C: Clock>(
    terminal: &mut Terminal<B>,
    session: &mut Session<C>,
) -> Result<(), PomodoroError> {
    let view = session.tick()?;
    terminal
        .draw(|frame| ui::render(frame, &view))
        .map_err(|e| PomodoroError::Terminal(format!("Failed to draw: {e}")))?;
    Ok(())
}
