pub mod error;
pub mod marker;
pub mod position;
pub mod root;
pub mod shapes; // Fretboard shape templates per position
pub mod tonality;

pub use error::TheoryError;
pub use marker::{minor_degree, Degree, Marker};
pub use position::Position;
pub use root::{relative_minor_root, Root};
pub use shapes::{shape_for, Shape, FRETS_PER_STRING, STRING_COUNT, STRING_NAMES};
pub use tonality::Tonality;
