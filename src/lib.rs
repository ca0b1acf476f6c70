pub mod render; // Marker-to-label translation
pub mod session; // Selection state and the timed randomizer
pub mod theory; // Static shape and interval tables

pub use render::{headline, is_root_marker, render_marker, render_shape, RenderedShape};
pub use session::{Command, Input, Session, SessionConfig, SessionState, TimerMode};
pub use theory::{Marker, Position, Root, Tonality};
