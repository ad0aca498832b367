//! Terminal rendering of a cube as an unfolded net.

use cube_state::{BLANK, CubeState, Face, Position, Value};
use owo_colors::{AnsiColors, OwoColorize};

/// Terminal color per solved-face value, in [`Face::ALL`] order.
const FACE_COLORS: [AnsiColors; 6] = [
    AnsiColors::Red,     // R
    AnsiColors::White,   // U
    AnsiColors::Green,   // F
    AnsiColors::Magenta, // L
    AnsiColors::Yellow,  // D
    AnsiColors::Blue,    // B
];

fn sticker(value: Value) -> String {
    if value == BLANK {
        return "·".to_owned();
    }

    match usize::try_from(value) {
        Ok(index) if index < 6 => format!("{}", value.color(FACE_COLORS[index])),
        _ => value.to_string(),
    }
}

fn face_row(cube: &CubeState, face: Face, y: usize) -> String {
    (0..cube.size())
        .map(|x| sticker(cube[Position::new(face, x, y)]))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print the cube as a cross-shaped net:
///
/// ```text
///       U
///     L F R B
///       D
/// ```
///
/// Rows are printed with `y` decreasing so `y = 0` ends up at the
/// bottom of each face block.
pub fn print_net(cube: &CubeState) {
    let size = cube.size();
    let margin = " ".repeat(2 * size);

    for y in (0..size).rev() {
        println!("{margin}{}", face_row(cube, Face::U, y));
    }
    for y in (0..size).rev() {
        let row = [Face::L, Face::F, Face::R, Face::B]
            .into_iter()
            .map(|face| face_row(cube, face, y))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{row}");
    }
    for y in (0..size).rev() {
        println!("{margin}{}", face_row(cube, Face::D, y));
    }
}
