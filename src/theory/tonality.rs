use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::TheoryError;

/// Major or (relative) minor reading of a shape
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tonality {
    #[default]
    Major,
    Minor,
}

impl Tonality {
    pub const ALL: [Tonality; 2] = [Tonality::Major, Tonality::Minor];

    pub fn name(self) -> &'static str {
        match self {
            Tonality::Major => "Major",
            Tonality::Minor => "Minor",
        }
    }

    /// The other tonality
    pub fn toggle(self) -> Self {
        match self {
            Tonality::Major => Tonality::Minor,
            Tonality::Minor => Tonality::Major,
        }
    }

    pub fn is_minor(self) -> bool {
        self == Tonality::Minor
    }
}

impl fmt::Display for Tonality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tonality {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" | "maj" => Ok(Tonality::Major),
            "minor" | "min" | "m" => Ok(Tonality::Minor),
            _ => Err(TheoryError::UnknownTonality(s.to_string())),
        }
    }
}
