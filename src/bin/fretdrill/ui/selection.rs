//! Selection bar widget - shows tonality, position, root, toggles and loop state

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use fretdrill::SessionState;

fn label(text: &str) -> Span<'static> {
    Span::styled(
        format!("{text}: "),
        Style::default().add_modifier(Modifier::BOLD),
    )
}

fn checkbox(on: bool) -> &'static str {
    if on {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Render the selection bar
pub fn render_selection(frame: &mut Frame, area: Rect, state: &SessionState) {
    let block = Block::default().title(" fretdrill ").borders(Borders::ALL);

    let run_symbol = if state.is_running { "▶" } else { "⏸" };
    let run_state = if state.is_running { "Running" } else { "Idle" };

    let line = Line::from(vec![
        Span::raw(" "),
        label("Tonality"),
        Span::styled(
            format!("{}  ", state.tonality),
            Style::default().fg(Color::Cyan),
        ),
        label("Position"),
        Span::styled(
            format!("{}  ", state.position),
            Style::default().fg(Color::Cyan),
        ),
        label("Root"),
        Span::styled(format!("{}  ", state.root), Style::default().fg(Color::Cyan)),
        label("Pentatonic"),
        Span::raw(format!("{}  ", checkbox(state.pentatonic))),
        label("Show shape"),
        Span::raw(format!("{}    ", checkbox(state.show_shape))),
        Span::styled(
            format!("{run_symbol} {run_state}"),
            Style::default().fg(if state.is_running {
                Color::Green
            } else {
                Color::Yellow
            }),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
