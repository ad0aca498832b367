//! The cube grid and the layer-turn permutation algorithm.

use std::ops::{Index, IndexMut};

use log::debug;

use crate::{BLANK, Face, Layer, Position, Value};

/// The sticker grid of an N×N×N cube.
///
/// Values live in one contiguous buffer of `6 · size²` cells, one per
/// sticker, at the fixed linear index `x + y·size + face·size²`. The
/// buffer is exclusively owned; all mutation goes through `&mut self`.
///
/// Indexing with a [`Position`] panics when the position is out of
/// range. That is the right behavior for algorithm internals, where a
/// bad index is a bug. Coordinates derived from user input (hit tests,
/// unprojected clicks) should go through the permissive [`get`] /
/// [`get_mut`] accessors instead.
///
/// [`get`]: CubeState::get
/// [`get_mut`]: CubeState::get_mut
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeState {
    size: usize,
    values: Vec<Value>,
}

impl CubeState {
    /// Construct a cube whose cell contents are unspecified.
    ///
    /// Fill the cube before reading it; callers must not rely on the
    /// initial contents.
    #[must_use]
    pub fn uninitialized(size: usize) -> CubeState {
        CubeState::filled(size, BLANK)
    }

    /// Construct a cube with every cell set to `value`.
    #[must_use]
    pub fn filled(size: usize, value: Value) -> CubeState {
        CubeState {
            size,
            values: vec![value; 6 * size * size],
        }
    }

    /// Construct a cube with every cell set to [`BLANK`].
    #[must_use]
    pub fn blank(size: usize) -> CubeState {
        CubeState::filled(size, BLANK)
    }

    /// Construct a solved cube: every cell on face `f` holds `f`.
    #[must_use]
    pub fn solved(size: usize) -> CubeState {
        let mut cube = CubeState::uninitialized(size);
        for face in Face::ALL {
            cube.fill_face(face, face.value());
        }
        cube
    }

    /// Stickers per side of the cube (the N in "N×N×N").
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The whole grid in linear index order, `x + y·size + face·size²`.
    ///
    /// This is the layout any external serialization of the cube should
    /// preserve.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Check that the position addresses a cell of this cube.
    #[must_use]
    pub fn position_in_range(&self, position: Position) -> bool {
        position.x < self.size && position.y < self.size
    }

    /// Check that the layer names a slice of this cube.
    #[must_use]
    pub fn layer_in_range(&self, layer: Layer) -> bool {
        layer.depth < self.size
    }

    fn index_of(&self, position: Position) -> usize {
        position.x + position.y * self.size + position.face.index() * self.size * self.size
    }

    /// The value at `position`, or `None` when the position is out of
    /// range.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<Value> {
        self.position_in_range(position)
            .then(|| self.values[self.index_of(position)])
    }

    /// Mutable access to the value at `position`, or `None` when the
    /// position is out of range.
    pub fn get_mut(&mut self, position: Position) -> Option<&mut Value> {
        if self.position_in_range(position) {
            let index = self.index_of(position);
            Some(&mut self.values[index])
        } else {
            None
        }
    }

    /// Set every cell on the cube to `value`.
    pub fn fill(&mut self, value: Value) {
        self.values.fill(value);
    }

    /// Set every cell on one face to `value`.
    pub fn fill_face(&mut self, face: Face, value: Value) {
        let area = self.size * self.size;
        let start = face.index() * area;
        self.values[start..start + area].fill(value);
    }

    /// Returns `true` iff every cell holds its own face's color.
    ///
    /// Vacuously `true` for a cube of size zero.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let area = self.size * self.size;
        Face::ALL.into_iter().all(|face| {
            let start = face.index() * area;
            self.values[start..start + area]
                .iter()
                .all(|&value| value == face.value())
        })
    }

    /// Rotate a layer anticlockwise by `count` quarter-turns.
    ///
    /// "Anticlockwise" is relative to the layer's own coordinate frame;
    /// only the consistency of the direction matters to callers, not its
    /// absolute handedness. `count` may be any integer; only
    /// `count mod 4` is visible, and `0` is a no-op.
    ///
    /// The turned slice's side strips on the four adjacent faces always
    /// move. When the layer is the face itself (`depth == 0`) the face's
    /// own stickers rotate too, and when it is the last slice
    /// (`depth == size - 1`) the opposite face's stickers rotate
    /// instead. A size-1 cube satisfies both, so both faces rotate.
    ///
    /// # Panics
    ///
    /// Panics when `layer` is out of range. Turning an invalid layer is
    /// a caller bug, not a recoverable condition.
    pub fn turn(&mut self, layer: Layer, count: i32) {
        assert!(
            self.layer_in_range(layer),
            "layer {layer} is out of range for a cube of size {}",
            self.size
        );

        self.turn_sides_only(layer, count);

        if layer.depth == 0 {
            self.turn_face_only(layer.face, count);
        }

        if layer.depth == self.size - 1 {
            self.turn_face_only(layer.opposite_face(), count);
        }
    }

    /// Rotate the values held at four positions by `count` steps.
    ///
    /// The positions must be listed in anticlockwise order and in range.
    fn rotate4(&mut self, positions: [Position; 4], count: i32) {
        let [i1, i2, i3, i4] = positions.map(|p| self.index_of(p));
        let values = &mut self.values;

        match count.rem_euclid(4) {
            1 => {
                let temp = values[i1];
                values[i1] = values[i4];
                values[i4] = values[i3];
                values[i3] = values[i2];
                values[i2] = temp;
            }
            2 => {
                values.swap(i1, i3);
                values.swap(i2, i4);
            }
            3 => {
                let temp = values[i1];
                values[i1] = values[i2];
                values[i2] = values[i3];
                values[i3] = values[i4];
                values[i4] = temp;
            }
            _ => {}
        }
    }

    /// Rotate one face's own stickers anticlockwise. No side strips move.
    ///
    /// The face decomposes into concentric square rings; each ring into
    /// 4-cycles of positions related by a quarter-turn about the face
    /// center.
    fn turn_face_only(&mut self, face: Face, count: i32) {
        for i in 0..self.size / 2 {
            for j in i..self.size - 1 - i {
                let i_r = self.size - 1 - i;
                let j_r = self.size - 1 - j;

                self.rotate4(
                    [
                        Position::new(face, i, j),
                        Position::new(face, j_r, i),
                        Position::new(face, i_r, j_r),
                        Position::new(face, j, i_r),
                    ],
                    count,
                );
            }
        }
    }

    /// Rotate a layer's side strips anticlockwise. The layer's own face,
    /// if it has one, does not move.
    ///
    /// The four strips live on the faces at cyclic offsets +1, +2, +4
    /// and +5 from the layer's face. The +1/+2 strips sit at the layer's
    /// depth and the +4/+5 strips at the mirrored depth, because
    /// opposite faces are mirror-imaged in the shared coordinate
    /// convention.
    fn turn_sides_only(&mut self, layer: Layer, count: i32) {
        let f1 = layer.face.offset(1);
        let f2 = layer.face.offset(2);
        let f4 = layer.face.offset(4);
        let f5 = layer.face.offset(5);

        let d = layer.depth;
        let d_r = self.size - 1 - layer.depth;

        for i in 0..self.size {
            self.rotate4(
                [
                    Position::new(f1, i, d),
                    Position::new(f2, d, i),
                    Position::new(f4, i, d_r),
                    Position::new(f5, d_r, i),
                ],
                count,
            );
        }
    }

    /// Apply a random move sequence long enough to mix any cube size.
    ///
    /// Every move turns a uniformly random layer by a uniformly random
    /// count in `1..=3`. The random source is injected so callers can
    /// seed it; a cube of size zero has no layers and is left untouched.
    pub fn scramble(&mut self, rng: &mut fastrand::Rng) {
        if self.size == 0 {
            return;
        }

        let move_count = 2 * (self.size * self.size + 1) + rng.usize(0..=7);
        debug!("scrambling size-{} cube with {move_count} moves", self.size);

        for _ in 0..move_count {
            let face = Face::ALL[rng.usize(0..6)];
            let depth = rng.usize(0..self.size);
            let count = rng.i32(1..=3);

            self.turn(Layer::new(face, depth), count);
        }
    }
}

impl Index<Position> for CubeState {
    type Output = Value;

    fn index(&self, position: Position) -> &Value {
        assert!(
            self.position_in_range(position),
            "position {position:?} is out of range for a cube of size {}",
            self.size
        );
        &self.values[self.index_of(position)]
    }
}

impl IndexMut<Position> for CubeState {
    fn index_mut(&mut self, position: Position) -> &mut Value {
        assert!(
            self.position_in_range(position),
            "position {position:?} is out of range for a cube of size {}",
            self.size
        );
        let index = self.index_of(position);
        &mut self.values[index]
    }
}
