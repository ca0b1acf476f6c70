/*
Shape Tables
============

Five CAGED-style shapes of the major scale, one per position. Each shape has
six rows, one per string, high E (string 1) first, and five fret slots per
row. Slots hold a major-scale degree or a rest.

The tables are written in the major key; minor readings and pentatonic
filtering are applied at render time.
*/

use super::marker::{Degree, Marker};
use super::position::Position;

/// Strings on a six-string guitar
pub const STRING_COUNT: usize = 6;
/// Fret slots covered by one shape
pub const FRETS_PER_STRING: usize = 5;
/// Open-string names, string 1 (high E) to string 6 (low E)
pub const STRING_NAMES: [&str; STRING_COUNT] = ["E", "B", "G", "D", "A", "E"];

const O: Marker = Marker::Rest;
const D1: Marker = Marker::Degree(Degree::I);
const D2: Marker = Marker::Degree(Degree::II);
const D3: Marker = Marker::Degree(Degree::III);
const D4: Marker = Marker::Degree(Degree::IV);
const D5: Marker = Marker::Degree(Degree::V);
const D6: Marker = Marker::Degree(Degree::VI);
const D7: Marker = Marker::Degree(Degree::VII);

/// Markers for one string across the shape
pub type StringRow = [Marker; FRETS_PER_STRING];

/// Fret markers for every string in one position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    rows: [StringRow; STRING_COUNT],
}

impl Shape {
    const fn new(rows: [StringRow; STRING_COUNT]) -> Self {
        Self { rows }
    }

    /// Markers for a string, numbered 1 (high E) to 6 (low E)
    pub fn string(&self, number: usize) -> Option<&StringRow> {
        number.checked_sub(1).and_then(|i| self.rows.get(i))
    }

    /// Iterate `(string number, open-string name, markers)` from high E down
    pub fn strings(&self) -> impl Iterator<Item = (usize, &'static str, &StringRow)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| (i + 1, STRING_NAMES[i], row))
    }

    /// Every marker in the shape, row by row
    pub fn markers(&self) -> impl Iterator<Item = Marker> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }
}

static SHAPES: [Shape; Position::COUNT] = [
    // Position 1
    Shape::new([
        [O, D7, D1, O, D2],
        [O, O, D5, O, D6],
        [O, D2, O, D3, D4],
        [O, D6, O, D7, D1],
        [O, D3, D4, O, D5],
        [O, D7, D1, O, D2],
    ]),
    // Position 2
    Shape::new([
        [O, D2, O, D3, D4],
        [O, D6, O, D7, D1],
        [D3, D4, O, D5, O],
        [D7, D1, O, D2, O],
        [O, D5, O, D6, O],
        [O, D2, O, D3, D4],
    ]),
    // Position 3
    Shape::new([
        [O, D3, D4, O, D5],
        [O, D7, D1, O, D2],
        [O, D5, O, D6, O],
        [O, D2, O, D3, D4],
        [O, D6, O, D7, D1],
        [O, D3, D4, O, D5],
    ]),
    // Position 4
    Shape::new([
        [O, D5, O, D6, O],
        [O, D2, O, D3, D4],
        [D6, O, D7, D1, O],
        [D3, D4, O, D5, O],
        [D7, D1, O, D2, O],
        [O, D5, O, D6, O],
    ]),
    // Position 5
    Shape::new([
        [O, D6, O, D7, D1],
        [O, D3, D4, O, D5],
        [D7, D1, O, D2, O],
        [O, D5, O, D6, O],
        [O, D2, O, D3, D4],
        [O, D6, O, D7, D1],
    ]),
];

/// Shape template for a position
pub fn shape_for(position: Position) -> &'static Shape {
    &SHAPES[position.index()]
}
