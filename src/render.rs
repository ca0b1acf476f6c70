//! Fret-label rendering
//!
//! Turns shape markers into the labels the fretboard shows, applying the
//! pentatonic filter and the relative-minor translation.

use crate::session::SessionState;
use crate::theory::{
    minor_degree, shape_for, Marker, Position, Tonality, FRETS_PER_STRING, STRING_COUNT,
};

/// Label shown for one fret slot, or `None` when nothing is played there
///
/// Pentatonic filtering looks at the major-mode degree, so it runs before
/// any minor translation.
pub fn render_marker(marker: Marker, tonality: Tonality, pentatonic: bool) -> Option<&'static str> {
    let degree = marker.degree()?;
    if pentatonic && degree.is_pentatonic_omission() {
        return None;
    }
    Some(translate(marker, tonality))
}

/// Whether a marker is the root of the key being displayed
///
/// Uses the same translation as [`render_marker`] so highlight and label
/// always agree.
pub fn is_root_marker(marker: Marker, tonality: Tonality) -> bool {
    !marker.is_rest() && translate(marker, tonality) == "1"
}

fn translate(marker: Marker, tonality: Tonality) -> &'static str {
    if tonality.is_minor() {
        minor_degree(marker)
    } else {
        marker.code()
    }
}

/// One rendered fret slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedFret {
    pub label: Option<&'static str>,
    pub is_root: bool,
}

/// One rendered string row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedString {
    /// String number, 1 (high E) to 6 (low E)
    pub number: usize,
    /// Open-string note name
    pub name: &'static str,
    pub frets: [RenderedFret; FRETS_PER_STRING],
}

/// Full label grid for a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedShape {
    pub strings: [RenderedString; STRING_COUNT],
}

impl RenderedShape {
    /// Number of slots that show a note
    pub fn note_count(&self) -> usize {
        self.strings
            .iter()
            .flat_map(|s| s.frets.iter())
            .filter(|f| f.label.is_some())
            .count()
    }
}

/// Render every slot of the shape for `position`
pub fn render_shape(position: Position, tonality: Tonality, pentatonic: bool) -> RenderedShape {
    let shape = shape_for(position);
    let empty_fret = RenderedFret {
        label: None,
        is_root: false,
    };
    let mut strings = [RenderedString {
        number: 0,
        name: "",
        frets: [empty_fret; FRETS_PER_STRING],
    }; STRING_COUNT];

    for (row, (number, name, markers)) in strings.iter_mut().zip(shape.strings()) {
        row.number = number;
        row.name = name;
        for (fret, &marker) in row.frets.iter_mut().zip(markers.iter()) {
            *fret = RenderedFret {
                label: render_marker(marker, tonality, pentatonic),
                is_root: is_root_marker(marker, tonality),
            };
        }
    }

    RenderedShape { strings }
}

/// Heading naming the position and the key to play in, e.g.
/// `"Position 3 pentatonic: play in Am"`
pub fn headline(state: &SessionState) -> String {
    let key = match state.tonality {
        Tonality::Major => state.root.to_string(),
        Tonality::Minor => format!("{}m", state.root.relative_minor()),
    };
    let pentatonic = if state.pentatonic { " pentatonic" } else { "" };
    format!("Position {}{}: play in {}", state.position, pentatonic, key)
}
