/*
Scale-Degree Markers
====================

Every fret slot in a shape carries a marker: either a rest (code "0", no note
played there) or a degree of the MAJOR scale (codes "1".."7").

Minor labels are derived, never stored. Reading a major shape as its relative
minor renames each degree relative to the minor root (major degree 6):

    major:  0   1   2   3   4   5   6   7
    minor:  0   b3  4   5   b6  b7  1   2
*/

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::TheoryError;

/// A degree of the major scale
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Degree {
    I = 1,
    II = 2,
    III = 3,
    IV = 4,
    V = 5,
    VI = 6,
    VII = 7,
}

impl Degree {
    pub const ALL: [Degree; 7] = [
        Degree::I,
        Degree::II,
        Degree::III,
        Degree::IV,
        Degree::V,
        Degree::VI,
        Degree::VII,
    ];

    /// Major-mode label ("1".."7")
    pub fn label(self) -> &'static str {
        match self {
            Degree::I => "1",
            Degree::II => "2",
            Degree::III => "3",
            Degree::IV => "4",
            Degree::V => "5",
            Degree::VI => "6",
            Degree::VII => "7",
        }
    }

    /// Label of this degree read against the relative minor root
    pub fn minor_label(self) -> &'static str {
        match self {
            Degree::I => "b3",
            Degree::II => "4",
            Degree::III => "5",
            Degree::IV => "b6",
            Degree::V => "b7",
            Degree::VI => "1",
            Degree::VII => "2",
        }
    }

    /// Degrees a pentatonic scale leaves out (major-mode 4th and 7th)
    pub fn is_pentatonic_omission(self) -> bool {
        matches!(self, Degree::IV | Degree::VII)
    }
}

/// Contents of one fret slot in a shape
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// No note on this slot
    Rest,
    /// A note at this major-scale degree
    Degree(Degree),
}

impl Marker {
    /// Numeric code, "0" for a rest
    pub fn code(self) -> &'static str {
        match self {
            Marker::Rest => "0",
            Marker::Degree(degree) => degree.label(),
        }
    }

    pub fn degree(self) -> Option<Degree> {
        match self {
            Marker::Rest => None,
            Marker::Degree(degree) => Some(degree),
        }
    }

    pub fn is_rest(self) -> bool {
        self == Marker::Rest
    }
}

/// Translate a major-mode marker to its relative-minor label
///
/// Total over every marker: a rest maps to "0".
pub fn minor_degree(marker: Marker) -> &'static str {
    match marker {
        Marker::Rest => "0",
        Marker::Degree(degree) => degree.minor_label(),
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Marker {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Marker::Rest),
            code => Degree::ALL
                .into_iter()
                .find(|degree| degree.label() == code)
                .map(Marker::Degree)
                .ok_or_else(|| TheoryError::UnknownMarker(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minor_map_matches_table() {
        let expected = [
            ("0", "0"),
            ("1", "b3"),
            ("2", "4"),
            ("3", "5"),
            ("4", "b6"),
            ("5", "b7"),
            ("6", "1"),
            ("7", "2"),
        ];
        for (code, minor) in expected {
            let marker: Marker = code.parse().unwrap();
            assert_eq!(minor_degree(marker), minor, "marker {code}");
        }
    }

    #[test]
    fn only_sixth_becomes_minor_root() {
        let roots: Vec<Degree> = Degree::ALL
            .into_iter()
            .filter(|d| d.minor_label() == "1")
            .collect();
        assert_eq!(roots, vec![Degree::VI]);
    }

    #[test]
    fn pentatonic_omits_fourth_and_seventh() {
        let omitted: Vec<Degree> = Degree::ALL
            .into_iter()
            .filter(|d| d.is_pentatonic_omission())
            .collect();
        assert_eq!(omitted, vec![Degree::IV, Degree::VII]);
    }

    #[test]
    fn parses_codes() {
        assert_eq!("0".parse(), Ok(Marker::Rest));
        assert_eq!("5".parse(), Ok(Marker::Degree(Degree::V)));
        assert_eq!("8".parse::<Marker>(), Err(TheoryError::UnknownMarker("8".into())));
        assert!("b3".parse::<Marker>().is_err());
    }

    #[test]
    fn degree_repr_matches_label() {
        for degree in Degree::ALL {
            assert_eq!(degree.label(), (degree as u8).to_string());
        }
    }
}
