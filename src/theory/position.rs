use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::TheoryError;

/// One of the five CAGED-style fretboard positions (1-5)
///
/// The number is validated on construction, so shape lookups by
/// position never miss.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(u8);

impl Position {
    pub const COUNT: usize = 5;

    pub const ALL: [Position; Self::COUNT] = [
        Position(1),
        Position(2),
        Position(3),
        Position(4),
        Position(5),
    ];

    /// Create a position from its number
    pub fn new(number: u8) -> Result<Self, TheoryError> {
        if (1..=Self::COUNT as u8).contains(&number) {
            Ok(Position(number))
        } else {
            Err(TheoryError::PositionOutOfRange(number))
        }
    }

    /// Position number (1-5)
    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based index into tables
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Next position, wrapping 5 to 1
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Previous position, wrapping 1 to 5
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }
}

impl Default for Position {
    fn default() -> Self {
        Position(1)
    }
}

impl TryFrom<u8> for Position {
    type Error = TheoryError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Position::new(number)
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> u8 {
        position.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Position {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .trim()
            .parse::<u8>()
            .map_err(|_| TheoryError::InvalidPosition(s.to_string()))?;
        Position::new(number)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_as_number() {
        let position = Position::new(3).unwrap();
        assert_eq!(serde_json::to_string(&position).unwrap(), "3");
        assert_eq!(serde_json::from_str::<Position>("3").unwrap(), position);
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        assert!(serde_json::from_str::<Position>("0").is_err());
        assert!(serde_json::from_str::<Position>("6").is_err());
    }
}
