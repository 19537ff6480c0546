//! The 3x3x3 cube, stored as six 3x3 grids of stickers.
//!
//! Every face is viewed from outside the cube. The side faces have their top row against the
//! `Top` face, with `x = 0` on the `Back`/`Left`/`Front`/`Right` edge for `Left`/`Front`/`Right`/
//! `Back` respectively, so the top rows of the four sides read as one continuous ring. `Top` is
//! viewed from above with its top row against `Back`, and `Bottom` is viewed from below with its
//! top row against `Front`. In both cases `x = 0` lies against `Left`.

mod axis;
pub mod cfop;
pub mod geometry;
pub mod move_list;
pub mod moves;

pub use axis::Axis;

use std::fmt;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// A sticker colour. Colours share their index with the face they occupy on a solved cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub enum Color {
    Yellow,
    White,
    Red,
    Orange,
    Green,
    Blue,
}

/// A face of the cube, named by its position in space rather than by its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub enum Face {
    Top,
    Bottom,
    Left,
    Right,
    Front,
    Back,
}

impl Color {
    /// Every colour, in index order.
    pub const ALL: [Color; 6] = [
        Color::Yellow,
        Color::White,
        Color::Red,
        Color::Orange,
        Color::Green,
        Color::Blue,
    ];

    /// The face this colour occupies on a solved cube.
    pub const fn default_face(self) -> Face {
        Face::ALL[self as usize]
    }

    /// The single letter used for this colour in printed cubes.
    pub fn letter(self) -> char {
        match self {
            Color::Yellow => 'Y',
            Color::White => 'W',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl Face {
    /// Every face, in index order.
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Bottom,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
    ];

    /// The four faces around the `Top`/`Bottom` axis.
    pub const SIDES: [Face; 4] = [Face::Front, Face::Right, Face::Back, Face::Left];

    /// The colour of this face on a solved cube.
    pub const fn default_color(self) -> Color {
        Color::ALL[self as usize]
    }

    /// The face on the other side of the cube.
    pub fn opposite(self) -> Face {
        match self {
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }
}

/// A cube as 54 stickers. Created solved; moves permute the stickers, so every reachable state
/// keeps nine stickers of each colour.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    faces: [[Color; 9]; 6],
}

const fn solved_faces() -> [[Color; 9]; 6] {
    let mut faces = [[Color::Yellow; 9]; 6];
    let mut i = 0;
    while i < 6 {
        faces[i] = [Color::ALL[i]; 9];
        i += 1;
    }
    faces
}

impl Default for Cube {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl Cube {
    /// The solved cube, with every face showing its default colour.
    pub const SOLVED: Cube = Cube {
        faces: solved_faces(),
    };

    /// Create a solved cube.
    pub fn new() -> Self {
        Self::SOLVED
    }

    /// The colour at cell `(x, y)` of `face`.
    pub fn get(&self, face: Face, x: usize, y: usize) -> Color {
        debug_assert!(x < 3 && y < 3, "({x}, {y}) is off the face");
        self.faces[face as usize][y * 3 + x]
    }

    /// Overwrite the colour at cell `(x, y)` of `face`.
    pub fn set(&mut self, face: Face, x: usize, y: usize, color: Color) {
        debug_assert!(x < 3 && y < 3, "({x}, {y}) is off the face");
        self.faces[face as usize][y * 3 + x] = color;
    }

    /// The nine stickers of a face in row major order.
    pub fn face(&self, face: Face) -> [Color; 9] {
        self.faces[face as usize]
    }

    /// Overwrite all nine stickers of a face, given in row major order.
    pub fn set_face(&mut self, face: Face, stickers: [Color; 9]) {
        self.faces[face as usize] = stickers;
    }

    /// The identity colour of a face, which is the colour of its centre.
    pub fn color_of_face(&self, face: Face) -> Color {
        self.get(face, 1, 1)
    }

    /// The face whose centre has the given colour. Centres only move with slices and rotations,
    /// so on any valid cube every colour has exactly one such face.
    pub fn face_of_color(&self, color: Color) -> Option<Face> {
        Face::ALL
            .into_iter()
            .find(|&face| self.color_of_face(face) == color)
    }

    /// Whether every face is a single colour.
    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|stickers| stickers.iter().all(|&c| c == stickers[4]))
    }

    /// Reset to the solved state.
    pub fn set_solved(&mut self) {
        *self = Self::SOLVED;
    }

    fn write_row(f: &mut fmt::Formatter<'_>, stickers: &[Color]) -> fmt::Result {
        for (i, c) in stickers.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Prints the unfolded net: `Top`, then `Left Front Right Back`, then `Bottom`.
impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pad = "      ";
        for y in 0..3 {
            write!(f, "{pad}")?;
            Cube::write_row(f, &self.faces[Face::Top as usize][y * 3..y * 3 + 3])?;
            writeln!(f)?;
        }
        for y in 0..3 {
            let row: Vec<Color> = [Face::Left, Face::Front, Face::Right, Face::Back]
                .into_iter()
                .flat_map(|face| (0..3).map(move |x| (face, x)))
                .map(|(face, x)| self.get(face, x, y))
                .collect();
            Cube::write_row(f, &row)?;
            writeln!(f)?;
        }
        for y in 0..3 {
            write!(f, "{pad}")?;
            Cube::write_row(f, &self.faces[Face::Bottom as usize][y * 3..y * 3 + 3])?;
            writeln!(f)?;
        }
        Ok(())
    }
}

// Failed assertions print the net.
impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn default_state() {
        let mut cube = Cube::new();
        cube.set(Face::Front, 0, 0, Color::Red);
        assert!(!cube.is_solved());
        cube.set_solved();

        for color in Color::ALL {
            let face = cube.face_of_color(color).unwrap();
            assert_eq!(face, color.default_face());
            assert_eq!(face.default_color(), color);
            assert_eq!(cube.color_of_face(face), color);
            assert!(cube.face(face).iter().all(|&c| c == color));
        }
        assert!(cube.is_solved());
    }

    #[test]
    fn missing_color() {
        let mut cube = Cube::new();
        cube.set(Face::Left, 1, 1, Color::White);
        assert_eq!(cube.face_of_color(Color::Red), None);
    }

    #[test]
    fn solved_net() {
        // a continuation would eat the padding of the first row
        let expected = "
      Y Y Y
      Y Y Y
      Y Y Y
R R R G G G O O O B B B
R R R G G G O O O B B B
R R R G G G O O O B B B
      W W W
      W W W
      W W W
";
        let expected = expected.trim_start_matches('\n');
        assert!(expected.starts_with("      Y Y Y\n"));
        assert_eq!(Cube::new().to_string(), expected);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "off the face")]
    fn set_off_the_grid() {
        // (3, 0) would otherwise land on (0, 1)
        Cube::new().set(Face::Front, 3, 0, Color::Red);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "off the face")]
    fn get_off_the_grid() {
        Cube::new().get(Face::Top, 1, 3);
    }

    proptest! {
        #[test]
        fn get_after_set(face in any::<Face>(), x in 0..3usize, y in 0..3usize, color in any::<Color>()) {
            let mut cube = Cube::new();
            cube.set(face, x, y, color);
            prop_assert_eq!(cube.get(face, x, y), color);
            prop_assert_eq!(cube.face(face)[y * 3 + x], color);
        }

        #[test]
        fn opposite_is_an_involution(face in any::<Face>()) {
            prop_assert_ne!(face.opposite(), face);
            prop_assert_eq!(face.opposite().opposite(), face);
        }
    }
}
