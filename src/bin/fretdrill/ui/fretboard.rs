//! Fretboard widget - one row per string, one cell per fret slot

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use fretdrill::{render::RenderedFret, render_shape, SessionState};

/// Width of one fret cell, including padding
const CELL_WIDTH: usize = 5;

fn cell(fret: &RenderedFret) -> Span<'static> {
    match fret.label {
        Some(label) => {
            let style = if fret.is_root {
                Style::default()
                    .bg(Color::Red)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            };
            Span::styled(format!("{:^width$}", label, width = CELL_WIDTH), style)
        }
        None => Span::styled("─".repeat(CELL_WIDTH), Style::default().fg(Color::DarkGray)),
    }
}

/// Render the fretboard grid, or a hint when the shape is hidden
pub fn render_fretboard(frame: &mut Frame, area: Rect, state: &SessionState) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    if !state.show_shape {
        let hint = Paragraph::new("Shape hidden. Press [S] to show it.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, area);
        return;
    }

    let shape = render_shape(state.position, state.tonality, state.pentatonic);
    let wire = Style::default().fg(Color::Gray);

    let lines: Vec<Line> = shape
        .strings
        .iter()
        .map(|string| {
            let mut spans = Vec::with_capacity(2 + string.frets.len() * 2);
            spans.push(Span::styled(
                format!("{} {} ", string.number, string.name),
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled("║", wire));
            for fret in &string.frets {
                spans.push(cell(fret));
                spans.push(Span::styled("│", wire));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
