//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::features::focus::{Display, SessionState, View};
use crate::tui::glyphs::{big_text, block_width};

/// Render one frame: the big readout centered, the state in the footer.
///
/// The frame size is read on every call, so resizes take effect on the
/// next tick.
pub fn render(frame: &mut Frame<'_>, view: &View) {
    let area = frame.area();

    if let Display::Digits(text) = &view.display {
        render_readout(frame, text, view.is_work_time, area);
    }
    render_footer(frame, view.state, area);
}

/// Render the countdown as glyph art.
fn render_readout(frame: &mut Frame<'_>, text: &str, is_work_time: bool, area: Rect) {
    let lines = big_text(text);
    let width = u16::try_from(block_width(&lines)).unwrap_or(u16::MAX);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);

    let color = if is_work_time { Color::Red } else { Color::Green };
    let readout = Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    frame.render_widget(readout, centered_rect(width, height, area));
}

/// Render the status footer on the last row.
fn render_footer(frame: &mut Frame<'_>, state: SessionState, area: Rect) {
    if area.height == 0 {
        return;
    }
    let row = Rect::new(area.x, area.bottom() - 1, area.width, 1);
    let footer = Paragraph::new(format!("Current State: {state}"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(footer, row);
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width / 2).saturating_sub(width / 2);
    let y = area.y + (area.height / 2).saturating_sub(height / 2);
    Rect::new(x, y, width, height).intersection(area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(view: &View, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, view)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn view(display: Display, state: SessionState) -> View {
        View {
            display,
            state,
            is_work_time: true,
        }
    }

    #[test]
    fn test_footer_on_last_row() {
        let rows = draw(&view(Display::Blank, SessionState::Paused), 40, 12);

        assert_eq!(rows[11].trim(), "Current State: Paused");
        assert!(rows[..11].iter().all(|r| r.trim().is_empty()));
    }

    #[test]
    fn test_readout_is_centered() {
        let rows = draw(
            &view(Display::Digits("25:00".to_string()), SessionState::Idle),
            47,
            15,
        );
        let art = big_text("25:00");

        // 47 wide, 27 wide art: x = 23 - 13 = 10; 15 high, 5 rows: y = 7 - 2 = 5
        for (i, line) in art.iter().enumerate() {
            let row = &rows[5 + i];
            assert_eq!(&row.chars().skip(10).take(27).collect::<String>(), line);
        }
        assert!(rows[4].trim().is_empty());
        assert!(rows[10].trim().is_empty());
        assert_eq!(rows[14].trim(), "Current State: Idle");
    }

    #[test]
    fn test_blank_display_draws_only_footer() {
        let rows = draw(&view(Display::Blank, SessionState::Done), 30, 8);
        let drawn: usize = rows.iter().filter(|r| !r.trim().is_empty()).count();
        assert_eq!(drawn, 1);
        assert_eq!(rows[7].trim(), "Current State: Done");
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let rows = draw(
            &view(Display::Digits("99:59".to_string()), SessionState::Running),
            6,
            2,
        );
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_centered_rect_clips() {
        let area = Rect::new(0, 0, 10, 4);
        let rect = centered_rect(27, 5, area);
        assert_eq!(rect, Rect::new(0, 0, 10, 4));

        let rect = centered_rect(4, 2, area);
        assert_eq!(rect, Rect::new(3, 1, 4, 2));
    }
}
