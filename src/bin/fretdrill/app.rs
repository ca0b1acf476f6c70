//! Fretdrill - application builder and runner

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing::info;

use fretdrill::{Input, Position, Root, Session, SessionConfig, Tonality};

use super::cli::Args;
use super::ui::UiApp;

/// Main application builder
pub struct Fretdrill {
    session: Session,
    autostart: bool,
}

impl Fretdrill {
    /// Create a new app with default selections
    pub fn new(config: SessionConfig) -> Self {
        Self {
            session: Session::new(config),
            autostart: false,
        }
    }

    /// Build from parsed command-line options
    pub fn from_args(args: &Args) -> EyreResult<Self> {
        let config = args
            .session_config()
            .wrap_err("invalid session configuration")?;

        let mut app = Self::new(config)
            .pentatonic(args.pentatonic)
            .show_shape(!args.hide_shape)
            .autostart(args.autostart);
        if let Some(tonality) = args.tonality {
            app = app.tonality(tonality);
        }
        if let Some(position) = args.position {
            app = app.position(position);
        }
        if let Some(root) = args.root {
            app = app.root(root);
        }
        Ok(app)
    }

    pub fn tonality(mut self, tonality: Tonality) -> Self {
        self.session.apply(Input::SetTonality(tonality));
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.session.apply(Input::SetPosition(position));
        self
    }

    pub fn root(mut self, root: Root) -> Self {
        self.session.apply(Input::SetRoot(root));
        self
    }

    pub fn pentatonic(mut self, on: bool) -> Self {
        self.session.apply(Input::SetPentatonic(on));
        self
    }

    pub fn show_shape(mut self, on: bool) -> Self {
        self.session.apply(Input::SetShowShape(on));
        self
    }

    /// Start the timed loop as soon as the UI is up
    pub fn autostart(mut self, on: bool) -> Self {
        self.autostart = on;
        self
    }

    /// Run the application (takes over the terminal until quit)
    pub fn run(self) -> EyreResult<()> {
        let config = *self.session.config();
        info!(
            countdown = config.countdown_secs(),
            mode = %config.timer_mode(),
            seeded = config.seed().is_some(),
            "session starting"
        );

        let mut ui = UiApp::new(self.session, self.autostart);

        let mut terminal = ratatui::init();
        let res = ui.run(&mut terminal);
        ratatui::restore();

        info!(draws = ui.draws(), "session ended");
        res
    }
}
