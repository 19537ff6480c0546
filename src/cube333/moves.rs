//! Moves of the 3x3x3: their notation, the list of all 54, and how each one permutes the
//! stickers of a [`Cube`].

use super::axis::Axis;
use super::{Cube, Face};
use crate::error::ParseMoveError;
use crate::moves::{Cancellation, MoveSequence};

use log::warn;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// Represents each type of move. Note that the `Move333` struct uses this variable along with a
/// counter to represent moves such as R2 or U'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Move333Type {
    /// Right
    R,
    /// Left
    L,
    /// Up
    U,
    /// Down
    D,
    /// Front
    F,
    /// Back
    B,
    /// Right two layers
    Rw,
    /// Left two layers
    Lw,
    /// Up two layers
    Uw,
    /// Down two layers
    Dw,
    /// Front two layers
    Fw,
    /// Back two layers
    Bw,
    /// Middle slice, turning like L
    M,
    /// Equator slice, turning like D
    E,
    /// Standing slice, turning like F
    S,
    /// Whole cube rotation, turning like R
    X,
    /// Whole cube rotation, turning like U
    Y,
    /// Whole cube rotation, turning like F
    Z,
}

impl Move333Type {
    /// Every move type, in declaration order.
    pub const ALL: [Move333Type; 18] = {
        use Move333Type::*;
        [R, L, U, D, F, B, Rw, Lw, Uw, Dw, Fw, Bw, M, E, S, X, Y, Z]
    };

    /// The axis this move turns around.
    pub fn axis(self) -> Axis {
        use Move333Type as MT;
        match self {
            MT::R | MT::L | MT::Rw | MT::Lw | MT::M | MT::X => Axis::X,
            MT::U | MT::D | MT::Uw | MT::Dw | MT::E | MT::Y => Axis::Y,
            MT::F | MT::B | MT::Fw | MT::Bw | MT::S | MT::Z => Axis::Z,
        }
    }

    /// The outer face turn for `self` and its wide version. `None` for slices and rotations.
    fn outer(self) -> Option<Move333Type> {
        use Move333Type as MT;
        match self {
            MT::R | MT::Rw => Some(MT::R),
            MT::L | MT::Lw => Some(MT::L),
            MT::U | MT::Uw => Some(MT::U),
            MT::D | MT::Dw => Some(MT::D),
            MT::F | MT::Fw => Some(MT::F),
            MT::B | MT::Bw => Some(MT::B),
            _ => None,
        }
    }

    fn is_wide(self) -> bool {
        use Move333Type as MT;
        matches!(self, MT::Rw | MT::Lw | MT::Uw | MT::Dw | MT::Fw | MT::Bw)
    }

    /// The move type on the face opposite to the given one. Slices and rotations are their own
    /// opposite.
    pub fn opposite(self) -> Move333Type {
        use Move333Type as MT;
        match self {
            MT::R => MT::L,
            MT::L => MT::R,
            MT::U => MT::D,
            MT::D => MT::U,
            MT::F => MT::B,
            MT::B => MT::F,
            MT::Rw => MT::Lw,
            MT::Lw => MT::Rw,
            MT::Uw => MT::Dw,
            MT::Dw => MT::Uw,
            MT::Fw => MT::Bw,
            MT::Bw => MT::Fw,
            other => other,
        }
    }
}

/// Stores a move type and counter. An anti-clockwise move will have a count of 3.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct Move333 {
    pub ty: Move333Type,
    #[cfg_attr(test, proptest(strategy = "1..=3u8"))]
    pub count: u8,
}

impl crate::moves::Move for Move333 {
    fn inverse(self) -> Self {
        Self {
            ty: self.ty,
            count: 4u8.wrapping_sub(self.count).rem_euclid(4),
        }
    }

    fn commutes_with(&self, b: &Self) -> bool {
        self.ty.axis() == b.ty.axis()
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self.ty == b.ty {
            let count = (self.count + b.count) % 4;
            if count == 0 {
                Cancellation::NoMove
            } else {
                Cancellation::OneMove(Move333 { ty: self.ty, count })
            }
        } else {
            Cancellation::TwoMove(self, b)
        }
    }
}

impl fmt::Display for Move333Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move333Type::X => write!(f, "x"),
            Move333Type::Y => write!(f, "y"),
            Move333Type::Z => write!(f, "z"),
            other => write!(f, "{other:?}"),
        }
    }
}

impl fmt::Display for Move333 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.count {
            1 => write!(f, "{}", self.ty),
            3 => write!(f, "{}'", self.ty),
            _ => write!(f, "{}{}", self.ty, self.count),
        }
    }
}

// I don't want to have the default derive debug for this!
impl fmt::Debug for Move333 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

/// A trait to classify a type as a move generator, a fixed list of moves that states are built
/// from.
pub trait MoveGenerator {
    /// The amount of moves that are available in the moveset.
    const SIZE: usize;
    /// A list of all valid moves.
    const MOVE_LIST: &'static [Move333];
}

/// The index of a move in [`ALL_MOVES`].
///
/// # Panics
/// Panics if the count is not 1, 2 or 3, since no other count is in the list.
impl From<Move333> for usize {
    fn from(mv: Move333) -> usize {
        assert!(
            (1..=3).contains(&mv.count),
            "{mv} has no index, counts run from 1 to 3"
        );
        (mv.count as usize - 1) * Move333Type::ALL.len() + mv.ty as usize
    }
}

/// Create a move by specifying a move type and move count. Note that you do not need to specify
/// for example Move333Type::R, you only need to specify R.
#[macro_export]
macro_rules! mv {
    ($ty:ident, $count: expr) => {
        Move333 {
            ty: Move333Type::$ty,
            count: $count,
        }
    };
}

const fn all_moves() -> [Move333; 54] {
    let mut list = [mv!(R, 1); 54];
    let mut i = 0;
    while i < 54 {
        list[i] = Move333 {
            ty: Move333Type::ALL[i % 18],
            count: (i / 18) as u8 + 1,
        };
        i += 1;
    }
    list
}

/// Every move the cube understands: outer, wide and slice turns plus rotations, each as a
/// quarter turn, half turn and anticlockwise quarter turn. A move's index in the list is
/// `usize::from(move)`.
pub struct AllMoves;

/// All 54 moves, quarter turns first, then half turns, then anticlockwise turns.
pub const ALL_MOVES: [Move333; 54] = all_moves();

impl MoveGenerator for AllMoves {
    const SIZE: usize = 54;
    const MOVE_LIST: &'static [Move333] = &ALL_MOVES;
}

fn notation_table() -> &'static HashMap<String, Move333> {
    static TABLE: OnceLock<HashMap<String, Move333>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = HashMap::new();
        for &m in AllMoves::MOVE_LIST {
            let name = m.to_string();
            // r is Rw, and X is accepted for x
            if m.ty.is_wide() {
                table.insert(name.replacen('w', "", 1).to_lowercase(), m);
            }
            if matches!(m.ty, Move333Type::X | Move333Type::Y | Move333Type::Z) {
                table.insert(name.to_uppercase(), m);
            }
            table.insert(name, m);
        }
        table
    })
}

impl FromStr for Move333 {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseMoveError::Empty);
        }
        notation_table()
            .get(s)
            .copied()
            .ok_or_else(|| ParseMoveError::UnknownMove(s.to_string()))
    }
}

fn tokens(notation: &str) -> impl Iterator<Item = &str> {
    notation
        .split(|c: char| c.is_whitespace() || c == '(' || c == ')')
        .filter(|t| !t.is_empty())
}

/// Parse whitespace separated move notation. Parentheses are treated as whitespace so grouped
/// algorithms such as `(R U R' U')` read as written. Fails on the first unknown token.
pub fn parse_moves(notation: &str) -> Result<MoveSequence<Move333>, ParseMoveError> {
    tokens(notation)
        .map(str::parse)
        .collect::<Result<Vec<_>, _>>()
        .map(MoveSequence)
}

/// Parse move notation, skipping tokens that are not moves. The skipped tokens are logged and
/// returned alongside the moves that were read.
pub fn parse_moves_lossy(notation: &str) -> (MoveSequence<Move333>, Vec<ParseMoveError>) {
    let mut moves = Vec::new();
    let mut errors = Vec::new();
    for token in tokens(notation) {
        match token.parse() {
            Ok(m) => moves.push(m),
            Err(e) => {
                warn!("skipping move token: {e}");
                errors.push(e);
            }
        }
    }
    (MoveSequence(moves), errors)
}

/// The grid, axis, layer and cycle direction of an outer face turn.
fn outer_layer(ty: Move333Type) -> (Face, Axis, usize, i8) {
    use Move333Type as MT;
    match ty {
        MT::U => (Face::Top, Axis::Y, 0, 1),
        MT::D => (Face::Bottom, Axis::Y, 2, -1),
        MT::R => (Face::Right, Axis::X, 0, 1),
        MT::L => (Face::Left, Axis::X, 2, -1),
        MT::F => (Face::Front, Axis::Z, 0, 1),
        MT::B => (Face::Back, Axis::Z, 2, -1),
        _ => unreachable!("{ty:?} is not an outer face turn"),
    }
}

/// The slice turned together with an outer face in a wide move, and whether that slice turns in
/// the same direction as its own notation (`1`) or the opposite one (`-1`).
fn adjacent_slice(outer: Move333Type) -> (Move333Type, i8) {
    use Move333Type as MT;
    match outer {
        MT::U => (MT::E, -1),
        MT::D => (MT::E, 1),
        MT::R => (MT::M, -1),
        MT::L => (MT::M, 1),
        MT::F => (MT::S, 1),
        MT::B => (MT::S, -1),
        _ => unreachable!("{outer:?} is not an outer face turn"),
    }
}

impl Cube {
    fn outer_turn(&mut self, ty: Move333Type, quarter_turns: i8) {
        let (face, axis, layer, direction) = outer_layer(ty);
        self.rotate_face(face, quarter_turns);
        self.cycle_layer(axis, layer, quarter_turns * direction);
    }

    fn slice_turn(&mut self, ty: Move333Type, quarter_turns: i8) {
        // M follows L and E follows D, both against their axis' layer 0 face
        let direction = match ty {
            Move333Type::M | Move333Type::E => -1,
            _ => 1,
        };
        self.cycle_layer(ty.axis(), 1, quarter_turns * direction);
    }

    /// Apply a move to the cube in place.
    pub fn apply_move(&mut self, mv: Move333) {
        use Move333Type as MT;
        let turns = mv.count as i8;

        match mv.ty {
            MT::M | MT::E | MT::S => self.slice_turn(mv.ty, turns),
            MT::X | MT::Y | MT::Z => {
                let outer = match mv.ty {
                    MT::X => MT::R,
                    MT::Y => MT::U,
                    _ => MT::F,
                };
                let (slice, direction) = adjacent_slice(outer);
                self.outer_turn(outer, turns);
                self.outer_turn(outer.opposite(), -turns);
                self.slice_turn(slice, turns * direction);
            }
            ty => {
                let outer = ty.outer().unwrap_or(ty);
                self.outer_turn(outer, turns);
                if ty.is_wide() {
                    let (slice, direction) = adjacent_slice(outer);
                    self.slice_turn(slice, turns * direction);
                }
            }
        }
    }

    /// Apply every move of a sequence in place.
    pub fn apply_moves<'a>(&mut self, mvs: impl IntoIterator<Item = &'a Move333>) {
        for &m in mvs {
            self.apply_move(m);
        }
    }

    /// Apply a move to a cube.
    pub fn make_move(mut self, mv: Move333) -> Cube {
        self.apply_move(mv);
        self
    }

    /// Apply an algorithm to a cube
    pub fn make_moves(mut self, mvs: MoveSequence<Move333>) -> Cube {
        self.apply_moves(&mvs.0);
        self
    }
}
