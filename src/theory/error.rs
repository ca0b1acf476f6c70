use thiserror::Error;

/// Errors raised when building theory values from raw input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Position number outside 1-5
    #[error("position must be between 1 and 5, got {0}")]
    PositionOutOfRange(u8),
    /// Position that isn't a number
    #[error("position must be a number between 1 and 5, got `{0}`")]
    InvalidPosition(String),
    /// Not one of the 12 root names
    #[error("unknown root note `{0}` (expected one of A, A#, B, C, C#, D, D#, E, F, F#, G, G#)")]
    UnknownRoot(String),
    /// Neither major nor minor
    #[error("unknown tonality `{0}` (expected major or minor)")]
    UnknownTonality(String),
    /// Marker code outside 0-7
    #[error("unknown scale-degree marker `{0}` (expected 0-7)")]
    UnknownMarker(String),
}
