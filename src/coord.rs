//! Named coordinates into the 3x3 grid of a single face. Solving code reads in terms of "the top
//! edge" or "the bottom right corner" and only this module knows the `(x, y)` behind them.

#[cfg(test)]
use proptest_derive::Arbitrary;

/// A named cell of a face grid.
pub trait FacePosition: Copy + Eq + Sized + 'static {
    /// Every position of this kind, in a fixed order.
    const ALL: &'static [Self];

    /// The `(x, y)` cell of this position, with `(0, 0)` the top left of the face.
    fn xy(self) -> (usize, usize);
}

/// One of the four edge cells of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum EdgePosition {
    /// The middle of the top row
    Top,
    /// The middle of the left column
    Left,
    /// The middle of the right column
    Right,
    /// The middle of the bottom row
    Bottom,
}

/// One of the four corner cells of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum CornerPosition {
    #[allow(missing_docs)]
    TopLeft,
    #[allow(missing_docs)]
    TopRight,
    #[allow(missing_docs)]
    BottomLeft,
    #[allow(missing_docs)]
    BottomRight,
}

impl FacePosition for EdgePosition {
    const ALL: &'static [Self] = &[
        EdgePosition::Top,
        EdgePosition::Left,
        EdgePosition::Right,
        EdgePosition::Bottom,
    ];

    fn xy(self) -> (usize, usize) {
        match self {
            EdgePosition::Top => (1, 0),
            EdgePosition::Left => (0, 1),
            EdgePosition::Right => (2, 1),
            EdgePosition::Bottom => (1, 2),
        }
    }
}

impl FacePosition for CornerPosition {
    const ALL: &'static [Self] = &[
        CornerPosition::TopLeft,
        CornerPosition::TopRight,
        CornerPosition::BottomLeft,
        CornerPosition::BottomRight,
    ];

    fn xy(self) -> (usize, usize) {
        match self {
            CornerPosition::TopLeft => (0, 0),
            CornerPosition::TopRight => (2, 0),
            CornerPosition::BottomLeft => (0, 2),
            CornerPosition::BottomRight => (2, 2),
        }
    }
}
