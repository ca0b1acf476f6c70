//! Timer line and help bar

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use fretdrill::SessionState;

/// Render the countdown ("Timer: N seconds left")
pub fn render_countdown(frame: &mut Frame, area: Rect, state: &SessionState, draws: u64) {
    let line = Line::from(vec![
        Span::raw("Timer: "),
        Span::styled(
            state.seconds_remaining.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" seconds left"),
        Span::styled(drawn_label(draws), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Running count of randomized combinations, shown after the timer
fn drawn_label(draws: u64) -> String {
    format!("   Shapes drawn: {draws}")
}

/// Render the key help; Stop is dimmed while idle
pub fn render_help(frame: &mut Frame, area: Rect, state: &SessionState) {
    let key = Style::default().fg(Color::DarkGray);
    let stop = if state.is_running {
        key
    } else {
        key.add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
    };

    let line = Line::from(vec![
        Span::styled(
            " [T] Tonality  [1-5] Position  [←/→] Root  [P] Pentatonic  [S] Shape  ",
            key,
        ),
        Span::styled("[R] Randomize  [Space] Start  ", key),
        Span::styled("[X] Stop", stop),
        Span::styled("  [Q] Quit", key),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
