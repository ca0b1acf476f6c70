use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::TheoryError;

/// One of the 12 pitch classes, in chromatic order starting at A
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Root {
    A,
    ASharp,
    B,
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
}

impl Root {
    /// All roots in chromatic order from A
    pub const ALL: [Root; 12] = [
        Root::A,
        Root::ASharp,
        Root::B,
        Root::C,
        Root::CSharp,
        Root::D,
        Root::DSharp,
        Root::E,
        Root::F,
        Root::FSharp,
        Root::G,
        Root::GSharp,
    ];

    /// Display name, sharps spelled with `#`
    pub fn name(self) -> &'static str {
        match self {
            Root::A => "A",
            Root::ASharp => "A#",
            Root::B => "B",
            Root::C => "C",
            Root::CSharp => "C#",
            Root::D => "D",
            Root::DSharp => "D#",
            Root::E => "E",
            Root::F => "F",
            Root::FSharp => "F#",
            Root::G => "G",
            Root::GSharp => "G#",
        }
    }

    /// Chromatic index (A = 0, G# = 11)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Root at a chromatic index, wrapping past G#
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Next root up the chromatic scale (G# wraps to A)
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Previous root down the chromatic scale (A wraps to G#)
    pub fn prev(self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }

    /// Root of the relative minor key
    pub fn relative_minor(self) -> Self {
        match self {
            Root::C => Root::A,
            Root::CSharp => Root::ASharp,
            Root::D => Root::B,
            Root::DSharp => Root::C,
            Root::E => Root::CSharp,
            Root::F => Root::D,
            Root::FSharp => Root::DSharp,
            Root::G => Root::E,
            Root::GSharp => Root::F,
            Root::A => Root::FSharp,
            Root::ASharp => Root::G,
            Root::B => Root::GSharp,
        }
    }
}

/// Root of the relative minor of `major_root`
pub fn relative_minor_root(major_root: Root) -> Root {
    major_root.relative_minor()
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Root {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Root::ALL
            .into_iter()
            .find(|root| root.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TheoryError::UnknownRoot(s.to_string()))
    }
}
