#![warn(clippy::pedantic)]

//! State engine for an N×N×N Rubik's cube.
//!
//! The cube is a dense grid of sticker [`Value`]s addressed by
//! [`Position`]. A [`Layer`] names a slice of the cube parallel to one
//! face, and [`CubeState::turn`] permutes the stickers carried by that
//! slice. Nothing here knows about rendering or input; callers sample
//! and mutate the state and draw it however they like.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

mod cube;

pub use cube::CubeState;

/// A single sticker value.
///
/// `0..=5` are the six solved-face colors (face `f` is solved when every
/// cell on it holds `f`). [`BLANK`] marks a cell with no sticker
/// assigned.
pub type Value = i8;

/// The "no sticker assigned" sentinel value.
pub const BLANK: Value = -1;

/// One face of the cube.
///
/// The discriminant ordering is load-bearing: for any face `f`, the face
/// `(f + 3) % 6` is its opposite, and `(f + 1) % 6`, `(f + 2) % 6`,
/// `(f + 4) % 6`, `(f + 5) % 6` are the four adjacent faces in a fixed
/// rotational sense. The turn algorithm in [`CubeState`] is wired
/// directly to this relationship, which is why the variants run
/// `R, U, F, L, D, B` rather than in opposite pairs.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    R = 0,
    U = 1,
    F = 2,
    L = 3,
    D = 4,
    B = 5,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("face index {0} is out of range 0..6")]
pub struct FaceFromIntError(pub u8);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown face name {0:?}; expected one of R, U, F, L, D, B")]
pub struct ParseFaceError(String);

impl Face {
    /// All six faces in discriminant order.
    pub const ALL: [Face; 6] = [Face::R, Face::U, Face::F, Face::L, Face::D, Face::B];

    /// The face's discriminant, usable as a grid index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The face's discriminant as a sticker [`Value`], i.e. the color the
    /// face holds when the cube is solved.
    #[must_use]
    pub const fn value(self) -> Value {
        self as i8
    }

    /// The face `n` steps further along the cyclic face ordering.
    #[must_use]
    pub fn offset(self, n: usize) -> Face {
        Face::ALL[(self.index() + n) % 6]
    }

    /// The face on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Face {
        self.offset(3)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Face::R => "R",
            Face::U => "U",
            Face::F => "F",
            Face::L => "L",
            Face::D => "D",
            Face::B => "B",
        }
    }
}

impl TryFrom<u8> for Face {
    type Error = FaceFromIntError;

    fn try_from(index: u8) -> Result<Face, FaceFromIntError> {
        match Face::ALL.get(usize::from(index)) {
            Some(&face) => Ok(face),
            None => Err(FaceFromIntError(index)),
        }
    }
}

impl FromStr for Face {
    type Err = ParseFaceError;

    fn from_str(s: &str) -> Result<Face, ParseFaceError> {
        match s {
            "R" => Ok(Face::R),
            "U" => Ok(Face::U),
            "F" => Ok(Face::F),
            "L" => Ok(Face::L),
            "D" => Ok(Face::D),
            "B" => Ok(Face::B),
            _ => Err(ParseFaceError(s.to_owned())),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One sticker position: a face and face-local `(x, y)` coordinates.
///
/// The orientation of `x`/`y` relative to neighboring faces is fixed by
/// the turn algorithm's wiring; anything that walks positions across
/// faces must agree with [`CubeState::turn`] by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub face: Face,
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[must_use]
    pub const fn new(face: Face, x: usize, y: usize) -> Position {
        Position { face, x, y }
    }
}

/// One slice of the cube, `depth` layers inward from `face`.
///
/// `depth == 0` is the face itself; `depth == size - 1` touches the
/// opposite face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Layer {
    pub face: Face,
    pub depth: usize,
}

impl Layer {
    #[must_use]
    pub const fn new(face: Face, depth: usize) -> Layer {
        Layer { face, depth }
    }

    /// The face on the far side of the slice.
    #[must_use]
    pub fn opposite_face(self) -> Face {
        self.face.opposite()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.face, self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_faces_pair_up() {
        assert_eq!(Face::R.opposite(), Face::L);
        assert_eq!(Face::U.opposite(), Face::D);
        assert_eq!(Face::F.opposite(), Face::B);

        for face in Face::ALL {
            assert_eq!(face.opposite().opposite(), face);
            assert_ne!(face.opposite(), face);
        }
    }

    #[test]
    fn adjacent_ring_excludes_self_and_opposite() {
        for face in Face::ALL {
            for offset in [1, 2, 4, 5] {
                let adjacent = face.offset(offset);
                assert_ne!(adjacent, face);
                assert_ne!(adjacent, face.opposite());
            }
        }
    }

    #[test]
    fn offset_wraps_modulo_six() {
        assert_eq!(Face::B.offset(1), Face::R);
        assert_eq!(Face::D.offset(5), Face::L);
        for face in Face::ALL {
            assert_eq!(face.offset(6), face);
            assert_eq!(face.offset(0), face);
        }
    }

    #[test]
    fn face_from_index() {
        for (index, face) in Face::ALL.into_iter().enumerate() {
            assert_eq!(Face::try_from(u8::try_from(index).unwrap()), Ok(face));
            assert_eq!(face.index(), index);
        }
        assert_eq!(Face::try_from(6), Err(FaceFromIntError(6)));
    }

    #[test]
    fn face_name_round_trips() {
        for face in Face::ALL {
            assert_eq!(face.to_string().parse::<Face>(), Ok(face));
        }
        assert!("X".parse::<Face>().is_err());
        assert!("r".parse::<Face>().is_err());
    }
}
