//! The three axes of the cube and the two primitive sticker permutations every move is composed
//! of: turning the grid of one face, and carrying a layer of stickers around an axis.

use super::{Color, Cube, Face};

/// An axis of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left-Right axis, the axis of R, L, M and x
    X,
    /// Up-Down axis, the axis of U, D, E and y
    Y,
    /// Front-Back axis, the axis of F, B, S and z
    Z,
}

type Cell = (Face, usize, usize);

impl Axis {
    /// The four strips of three stickers around `layer` of this axis. Layer 0 is the R, U or F
    /// layer and layer 2 the L, D or B layer. A clockwise turn of the layer 0 face carries strip
    /// `k` onto strip `k + 1`, cell by cell.
    fn strips(self, layer: usize) -> [[Cell; 3]; 4] {
        use std::array::from_fn;

        match self {
            Axis::Y => [Face::Front, Face::Left, Face::Back, Face::Right]
                .map(|face| from_fn(|i| (face, i, layer))),
            Axis::X => {
                let col = 2 - layer;
                [
                    from_fn(|i| (Face::Front, col, i)),
                    from_fn(|i| (Face::Top, col, i)),
                    // back is mirrored when travelling over the top
                    from_fn(|i| (Face::Back, 2 - col, 2 - i)),
                    from_fn(|i| (Face::Bottom, col, i)),
                ]
            }
            Axis::Z => [
                from_fn(|i| (Face::Top, i, 2 - layer)),
                from_fn(|i| (Face::Right, layer, i)),
                from_fn(|i| (Face::Bottom, 2 - i, layer)),
                from_fn(|i| (Face::Left, 2 - layer, 2 - i)),
            ],
        }
    }
}

impl Cube {
    /// Turn the sticker grid of a face clockwise (as seen looking at that face) `quarter_turns`
    /// times. Negative counts turn anticlockwise.
    pub(super) fn rotate_face(&mut self, face: Face, quarter_turns: i8) {
        for _ in 0..quarter_turns.rem_euclid(4) {
            let old = self.face(face);
            let mut new = old;
            for y in 0..3 {
                for x in 0..3 {
                    new[y * 3 + x] = old[(2 - x) * 3 + y];
                }
            }
            self.set_face(face, new);
        }
    }

    /// Carry one layer of stickers around `axis` by `quarter_turns` quarter turns, in the
    /// direction of the layer 0 face. Negative counts go the other way.
    pub(super) fn cycle_layer(&mut self, axis: Axis, layer: usize, quarter_turns: i8) {
        let strips = axis.strips(layer);
        for _ in 0..quarter_turns.rem_euclid(4) {
            let saved: [[Color; 3]; 4] = strips.map(|s| s.map(|(f, x, y)| self.get(f, x, y)));
            for (k, colors) in saved.iter().enumerate() {
                for (&(f, x, y), &c) in strips[(k + 1) % 4].iter().zip(colors) {
                    self.set(f, x, y, c);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use Color::*;

    #[test]
    fn rotate_face_clockwise() {
        // The four states of one face as it is turned clockwise a quarter at a time.
        let cw0 = [Yellow, Red, Green, Green, Orange, Blue, Orange, Blue, White];
        let cw1 = [Orange, Green, Yellow, Blue, Orange, Red, White, Blue, Green];
        let cw2 = [White, Blue, Orange, Blue, Orange, Green, Green, Red, Yellow];
        let cw3 = [Green, Blue, White, Red, Orange, Blue, Yellow, Green, Orange];

        let mut cube = Cube::new();
        cube.set_face(Face::Top, cw0);
        for expected in [cw1, cw2, cw3, cw0] {
            cube.rotate_face(Face::Top, 1);
            assert_eq!(cube.face(Face::Top), expected);
        }
        for expected in [cw3, cw2, cw1, cw0] {
            cube.rotate_face(Face::Top, -1);
            assert_eq!(cube.face(Face::Top), expected);
        }
        cube.rotate_face(Face::Top, 2);
        assert_eq!(cube.face(Face::Top), cw2);
    }

    #[test]
    fn strips_are_disjoint() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            for layer in 0..3 {
                let mut cells: Vec<Cell> = axis.strips(layer).into_iter().flatten().collect();
                cells.sort();
                cells.dedup();
                assert_eq!(cells.len(), 12, "{axis:?} layer {layer}");
            }
        }
    }

    #[test]
    fn cycle_layer_has_order_four() {
        let mut cube = Cube::new();
        cube.set(Face::Front, 0, 0, Blue);
        cube.set(Face::Top, 2, 1, Red);
        let start = cube.clone();
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            for layer in 0..3 {
                cube.cycle_layer(axis, layer, 1);
                assert_ne!(cube, start);
                cube.cycle_layer(axis, layer, 3);
                assert_eq!(cube, start);
                cube.cycle_layer(axis, layer, -2);
                cube.cycle_layer(axis, layer, 2);
                assert_eq!(cube, start);
            }
        }
    }

    #[test]
    fn y_layer_moves_front_to_left() {
        let mut cube = Cube::new();
        cube.cycle_layer(Axis::Y, 0, 1);
        assert!((0..3).all(|x| cube.get(Face::Left, x, 0) == Green));
        assert!((0..3).all(|x| cube.get(Face::Back, x, 0) == Red));
        assert!((0..3).all(|x| cube.get(Face::Front, x, 1) == Green));
    }
}
