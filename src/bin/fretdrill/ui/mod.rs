//! TUI module for fretdrill
//!
//! Draws the session state and forwards keyboard input to the session
//! controller, driving its timers from the wall clock.

mod countdown;
mod fretboard;
mod keys;
mod selection;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    DefaultTerminal, Frame,
};
use std::time::{Duration, Instant};

use fretdrill::{headline, Command, Session};

use countdown::{render_countdown, render_help};
use fretboard::render_fretboard;
use keys::{action_for, Action};
use selection::render_selection;

/// Input poll interval (~60fps)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// UI application state
pub struct UiApp {
    /// The practice session being displayed
    session: Session,
    /// Wall-clock origin for session time
    started_at: Instant,
    /// Start the timed loop on the first frame
    autostart: bool,
    /// Whether the app should quit
    should_quit: bool,
}

impl UiApp {
    pub fn new(session: Session, autostart: bool) -> Self {
        Self {
            session,
            started_at: Instant::now(),
            autostart,
            should_quit: false,
        }
    }

    /// Combinations drawn so far
    pub fn draws(&self) -> u64 {
        self.session.draws()
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        self.started_at = Instant::now();
        if self.autostart {
            self.session.command(Command::Start);
        }

        while !self.should_quit {
            // Fire any due timer ticks so the frame shows settled state
            self.tick();

            terminal.draw(|frame| self.render(frame))?;

            if event::poll(FRAME_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.tick();
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    fn tick(&mut self) {
        self.session.advance_to(self.started_at.elapsed());
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: crossterm::event::KeyCode) {
        match action_for(key, self.session.state()) {
            Some(Action::Input(input)) => self.session.apply(input),
            Some(Action::Command(command)) => self.session.command(command),
            Some(Action::Quit) => self.should_quit = true,
            None => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let state = self.session.state();
        let area = frame.area();

        // Main layout: selection, headline, fretboard, timer, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Selection bar
                Constraint::Length(2), // Headline
                Constraint::Min(8),    // Fretboard
                Constraint::Length(1), // Timer
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        render_selection(frame, chunks[0], state);

        let title = Paragraph::new(Line::from(headline(state)))
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(title, chunks[1]);

        let board_block = Block::default().title(" Shape ").borders(Borders::ALL);
        let board_inner = board_block.inner(chunks[2]);
        frame.render_widget(board_block, chunks[2]);
        render_fretboard(frame, board_inner, state);

        render_countdown(frame, chunks[3], state, self.session.draws());
        render_help(frame, chunks[4], state);
    }
}
