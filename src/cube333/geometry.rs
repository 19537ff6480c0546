//! Which stickers belong to the same piece.
//!
//! Every edge cell of a face touches exactly one edge cell of a neighbouring face, and every
//! corner cell shares its piece with one cell on a `Top`/`Bottom` face, one on a `Left`/`Right`
//! face and one on a `Front`/`Back` face.

use super::{Color, Cube, Face};
use crate::coord::{CornerPosition, EdgePosition, FacePosition};

/// The edge cell on the neighbouring face that shares a piece with `(face, edge)`.
pub fn adjacent_edge(face: Face, edge: EdgePosition) -> (Face, EdgePosition) {
    use EdgePosition as E;
    use Face as F;

    match (face, edge) {
        (F::Front, E::Top) => (F::Top, E::Bottom),
        (F::Front, E::Left) => (F::Left, E::Right),
        (F::Front, E::Right) => (F::Right, E::Left),
        (F::Front, E::Bottom) => (F::Bottom, E::Top),

        (F::Back, E::Top) => (F::Top, E::Top),
        (F::Back, E::Left) => (F::Right, E::Right),
        (F::Back, E::Right) => (F::Left, E::Left),
        (F::Back, E::Bottom) => (F::Bottom, E::Bottom),

        (F::Left, E::Top) => (F::Top, E::Left),
        (F::Left, E::Left) => (F::Back, E::Right),
        (F::Left, E::Right) => (F::Front, E::Left),
        (F::Left, E::Bottom) => (F::Bottom, E::Left),

        (F::Right, E::Top) => (F::Top, E::Right),
        (F::Right, E::Left) => (F::Front, E::Right),
        (F::Right, E::Right) => (F::Back, E::Left),
        (F::Right, E::Bottom) => (F::Bottom, E::Right),

        (F::Top, E::Top) => (F::Back, E::Top),
        (F::Top, E::Left) => (F::Left, E::Top),
        (F::Top, E::Right) => (F::Right, E::Top),
        (F::Top, E::Bottom) => (F::Front, E::Top),

        (F::Bottom, E::Top) => (F::Front, E::Bottom),
        (F::Bottom, E::Left) => (F::Left, E::Bottom),
        (F::Bottom, E::Right) => (F::Right, E::Bottom),
        (F::Bottom, E::Bottom) => (F::Back, E::Bottom),
    }
}

/// The three cells of one corner piece, one per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerDescriptor {
    /// The cell on `Top` or `Bottom`
    pub y: (Face, CornerPosition),
    /// The cell on `Left` or `Right`
    pub x: (Face, CornerPosition),
    /// The cell on `Front` or `Back`
    pub z: (Face, CornerPosition),
}

impl CornerDescriptor {
    /// The cells in `y`, `x`, `z` order.
    pub fn cells(self) -> [(Face, CornerPosition); 3] {
        [self.y, self.x, self.z]
    }
}

const fn desc(
    y: (Face, CornerPosition),
    x: (Face, CornerPosition),
    z: (Face, CornerPosition),
) -> CornerDescriptor {
    CornerDescriptor { y, x, z }
}

use CornerPosition::{BottomLeft as BL, BottomRight as BR, TopLeft as TL, TopRight as TR};
use Face::{Back, Bottom, Front, Left, Right, Top};

// Indexed by face, then by corner in `CornerPosition::ALL` order. The eight pieces each appear
// once for every cell they own.
const CORNERS: [[CornerDescriptor; 4]; 6] = [
    // Top
    [
        desc((Top, TL), (Left, TL), (Back, TR)),
        desc((Top, TR), (Right, TR), (Back, TL)),
        desc((Top, BL), (Left, TR), (Front, TL)),
        desc((Top, BR), (Right, TL), (Front, TR)),
    ],
    // Bottom
    [
        desc((Bottom, TL), (Left, BR), (Front, BL)),
        desc((Bottom, TR), (Right, BL), (Front, BR)),
        desc((Bottom, BL), (Left, BL), (Back, BR)),
        desc((Bottom, BR), (Right, BR), (Back, BL)),
    ],
    // Left
    [
        desc((Top, TL), (Left, TL), (Back, TR)),
        desc((Top, BL), (Left, TR), (Front, TL)),
        desc((Bottom, BL), (Left, BL), (Back, BR)),
        desc((Bottom, TL), (Left, BR), (Front, BL)),
    ],
    // Right
    [
        desc((Top, BR), (Right, TL), (Front, TR)),
        desc((Top, TR), (Right, TR), (Back, TL)),
        desc((Bottom, TR), (Right, BL), (Front, BR)),
        desc((Bottom, BR), (Right, BR), (Back, BL)),
    ],
    // Front
    [
        desc((Top, BL), (Left, TR), (Front, TL)),
        desc((Top, BR), (Right, TL), (Front, TR)),
        desc((Bottom, TL), (Left, BR), (Front, BL)),
        desc((Bottom, TR), (Right, BL), (Front, BR)),
    ],
    // Back
    [
        desc((Top, TR), (Right, TR), (Back, TL)),
        desc((Top, TL), (Left, TL), (Back, TR)),
        desc((Bottom, BR), (Right, BR), (Back, BL)),
        desc((Bottom, BL), (Left, BL), (Back, BR)),
    ],
];

/// The corner piece that owns `(face, corner)`.
pub fn corner_descriptor(face: Face, corner: CornerPosition) -> CornerDescriptor {
    CORNERS[face as usize][corner as usize]
}

impl Cube {
    /// The colour of an edge cell.
    pub fn edge_color(&self, face: Face, edge: EdgePosition) -> Color {
        let (x, y) = edge.xy();
        self.get(face, x, y)
    }

    /// The colour of the other sticker on the edge piece at `(face, edge)`.
    pub fn adjacent_edge_color(&self, face: Face, edge: EdgePosition) -> Color {
        let (other, other_edge) = adjacent_edge(face, edge);
        self.edge_color(other, other_edge)
    }

    /// Whether the edge piece at `(face, edge)` has the colours `first` and `second`. Returns
    /// `Some(false)` when `first` is the sticker on `face`, `Some(true)` when the piece is
    /// flipped so that `second` is on `face`, and `None` when it is a different piece.
    pub fn edge_in_position(
        &self,
        face: Face,
        edge: EdgePosition,
        first: Color,
        second: Color,
    ) -> Option<bool> {
        let here = self.edge_color(face, edge);
        let there = self.adjacent_edge_color(face, edge);
        if here == first && there == second {
            Some(false)
        } else if here == second && there == first {
            Some(true)
        } else {
            None
        }
    }

    /// The colour of a corner cell.
    pub fn corner_color(&self, face: Face, corner: CornerPosition) -> Color {
        let (x, y) = corner.xy();
        self.get(face, x, y)
    }

    /// The three colours of the corner piece at `(face, corner)`, in `y`, `x`, `z` order of its
    /// cells.
    pub fn corner_colors(&self, face: Face, corner: CornerPosition) -> [Color; 3] {
        corner_descriptor(face, corner)
            .cells()
            .map(|(f, c)| self.corner_color(f, c))
    }

    /// Whether the corner piece at `(face, corner)` has exactly the given colours, in any twist.
    pub fn corner_in_position(&self, face: Face, corner: CornerPosition, colors: [Color; 3]) -> bool {
        let mut have = self.corner_colors(face, corner);
        let mut want = colors;
        have.sort();
        want.sort();
        have == want
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::moves::parse_moves;

    use proptest::prelude::*;

    #[test]
    fn adjacency_is_symmetric() {
        for face in Face::ALL {
            for &edge in EdgePosition::ALL {
                let (other, other_edge) = adjacent_edge(face, edge);
                assert_ne!(other, face);
                assert_ne!(other, face.opposite());
                assert_eq!(adjacent_edge(other, other_edge), (face, edge));
            }
        }
    }

    #[test]
    fn descriptors_agree() {
        for face in Face::ALL {
            for &corner in CornerPosition::ALL {
                let d = corner_descriptor(face, corner);
                assert!(d.cells().contains(&(face, corner)), "{face:?} {corner:?}");
                assert!(matches!(d.y.0, Face::Top | Face::Bottom));
                assert!(matches!(d.x.0, Face::Left | Face::Right));
                assert!(matches!(d.z.0, Face::Front | Face::Back));
                for (f, c) in d.cells() {
                    assert_eq!(corner_descriptor(f, c), d);
                }
            }
        }
    }

    #[test]
    fn solved_pieces() {
        let cube = Cube::new();
        for face in Face::ALL {
            for &edge in EdgePosition::ALL {
                let (other, _) = adjacent_edge(face, edge);
                let (a, b) = (face.default_color(), other.default_color());
                assert_eq!(cube.edge_in_position(face, edge, a, b), Some(false));
                assert_eq!(cube.edge_in_position(face, edge, b, a), Some(true));
                assert_eq!(cube.edge_in_position(face, edge, a, a), None);
            }
            for &corner in CornerPosition::ALL {
                let d = corner_descriptor(face, corner);
                let expected = d.cells().map(|(f, _)| f.default_color());
                assert_eq!(cube.corner_colors(face, corner), expected);
                let [y, x, z] = expected;
                assert!(cube.corner_in_position(face, corner, [z, y, x]));
                assert!(!cube.corner_in_position(face, corner, [y, x, y]));
            }
        }
    }

    #[test]
    fn r_moves_front_right_pair() {
        let cube = Cube::new().make_moves(parse_moves("R").unwrap());
        use Color::*;
        // the front right edge goes to the top right, keeping green on the top
        assert_eq!(
            cube.edge_in_position(Face::Top, EdgePosition::Right, Green, Orange),
            Some(false)
        );
        assert_eq!(
            cube.corner_colors(Face::Top, CornerPosition::BottomRight),
            [Green, Orange, White]
        );
    }

    proptest! {
        #[test]
        fn pieces_keep_their_colours(moves in proptest::collection::vec(any::<crate::cube333::moves::Move333>(), 0..30)) {
            let mut cube = Cube::new();
            for m in moves {
                cube.apply_move(m);
            }
            for face in Face::ALL {
                for &edge in EdgePosition::ALL {
                    let a = cube.edge_color(face, edge);
                    let b = cube.adjacent_edge_color(face, edge);
                    prop_assert_ne!(a, b);
                    prop_assert_ne!(a, b.default_face().opposite().default_color());
                }
                for &corner in CornerPosition::ALL {
                    let mut colors = cube.corner_colors(face, corner);
                    colors.sort();
                    prop_assert!(colors[0] != colors[1] && colors[1] != colors[2]);
                }
            }
        }
    }
}
