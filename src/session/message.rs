use crate::theory::{Position, Root, Tonality};

/// Selection changes forwarded from the view
///
/// These only touch the selection fields; timers are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    SetTonality(Tonality),
    SetPosition(Position),
    SetRoot(Root),
    SetPentatonic(bool),
    SetShowShape(bool),
}

/// Commands that drive the randomizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stop the loop and draw one new combination
    Randomize,
    /// (Re)start the timed loop
    Start,
    /// Stop the timed loop
    Stop,
}
