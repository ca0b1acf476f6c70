#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::theory::{Position, Root, Tonality};

/// Default countdown between randomizations, in seconds
pub const DEFAULT_COUNTDOWN_SECS: u32 = 60;

/// Everything the view needs to draw a frame
///
/// Handed out by value or shared reference only after a handler has run to
/// completion, so observers never see a partial update.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub tonality: Tonality,
    pub position: Position,
    pub root: Root,
    /// Hide the 4th and 7th degrees
    pub pentatonic: bool,
    /// Draw the fretboard grid at all
    pub show_shape: bool,
    /// Seconds until the next randomization
    pub seconds_remaining: u32,
    /// Whether the randomize loop is running
    pub is_running: bool,
}

impl SessionState {
    /// Fresh state with the countdown set to `countdown_secs`
    pub fn with_countdown(countdown_secs: u32) -> Self {
        Self {
            tonality: Tonality::Major,
            position: Position::default(),
            root: Root::C,
            pentatonic: false,
            show_shape: true,
            seconds_remaining: countdown_secs,
            is_running: false,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::with_countdown(DEFAULT_COUNTDOWN_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let state = SessionState::default();
        assert_eq!(state.tonality, Tonality::Major);
        assert_eq!(state.position.number(), 1);
        assert_eq!(state.root, Root::C);
        assert!(!state.pentatonic);
        assert!(state.show_shape);
        assert_eq!(state.seconds_remaining, 60);
        assert!(!state.is_running);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn state_round_trips_through_json() {
        let state = SessionState {
            tonality: Tonality::Minor,
            position: Position::new(4).unwrap(),
            root: Root::FSharp,
            pentatonic: true,
            show_shape: false,
            seconds_remaining: 17,
            is_running: true,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<SessionState>(&json).unwrap(), state);
    }

    #[test]
    fn state_with_bad_position_is_rejected() {
        let mut value = serde_json::to_value(SessionState::default()).unwrap();
        value["position"] = serde_json::json!(6);
        assert!(serde_json::from_value::<SessionState>(value).is_err());
    }
}
