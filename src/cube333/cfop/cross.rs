//! The cross: the four edges around the bottom centre.
//!
//! Edges are solved one at a time. The face whose edge is missing is turned to the right, so
//! every case below inserts the edge between `Right` and `Bottom`.

use super::{side_to_right, Phase, PhaseKind, BOTTOM_COLOR, SIDE_ORDER};
use crate::coord::EdgePosition;
use crate::cube333::move_list::MoveList;
use crate::cube333::moves::{Move333, Move333Type};
use crate::cube333::{Cube, Face};
use crate::error::SolveError;
use crate::mv;

use log::debug;

pub(super) struct Cross;

/// Flips the edge on the right of the bottom layer without disturbing the rest of the cross.
const FLIP_RIGHT_EDGE: [Move333; 3] = [mv!(Uw, 1), mv!(R, 3), mv!(Uw, 3)];

/// Whether the cross edge under `face` is placed and oriented.
pub(super) fn edge_solved(cube: &Cube, face: Face) -> bool {
    cube.edge_in_position(
        face,
        EdgePosition::Bottom,
        cube.color_of_face(face),
        BOTTOM_COLOR,
    ) == Some(false)
}

/// Whether the bottom centre and all four cross edges are solved.
pub(super) fn cross_solved(cube: &Cube) -> bool {
    cube.color_of_face(Face::Bottom) == BOTTOM_COLOR
        && Face::SIDES.iter().all(|&face| edge_solved(cube, face))
}

impl Phase for Cross {
    const KIND: PhaseKind = PhaseKind::Cross;

    fn solve(list: &mut MoveList<'_>) -> Result<(), SolveError> {
        for _ in 0..4 {
            let Some(face) = SIDE_ORDER
                .into_iter()
                .find(|&face| !edge_solved(list.cube(), face))
            else {
                break;
            };
            solve_edge(list, face);
        }
        Ok(())
    }

    fn self_test(cube: &Cube) -> bool {
        cross_solved(cube)
    }
}

fn solve_edge(list: &mut MoveList<'_>, face: Face) {
    side_to_right(list, face);
    if !from_bottom(list) && !from_top(list) {
        // the edge is in the left or right face; anything on the left goes to the top of the
        // right face first
        from_left(list);
        from_right(list);
    }
    debug!("cross edge under {face:?}: {} moves", list.pending_len());
    list.accept_pending();
}

/// The edge is in the bottom layer, in front of or behind the bottom centre.
fn from_bottom(list: &mut MoveList<'_>) -> bool {
    let color = list.cube().color_of_face(Face::Right);
    let cube = list.cube();

    let moves: &[Move333] = match (
        cube.edge_in_position(Face::Bottom, EdgePosition::Top, BOTTOM_COLOR, color),
        cube.edge_in_position(Face::Bottom, EdgePosition::Bottom, BOTTOM_COLOR, color),
    ) {
        (Some(false), _) => &[mv!(F, 2), mv!(U, 3), mv!(R, 2)],
        (Some(true), _) => &[mv!(F, 3), mv!(R, 3)],
        (None, Some(false)) => &[mv!(B, 2), mv!(U, 1), mv!(R, 2)],
        (None, Some(true)) => &[mv!(B, 1), mv!(R, 1)],
        (None, None) => return false,
    };
    list.push_moves(moves);
    true
}

/// The edge is in the top layer, in front of or behind the top centre.
fn from_top(list: &mut MoveList<'_>) -> bool {
    let color = list.cube().color_of_face(Face::Right);
    let cube = list.cube();
    let back_solved = edge_solved(cube, Face::Back);
    let front_solved = edge_solved(cube, Face::Front);

    match (
        cube.edge_in_position(Face::Top, EdgePosition::Top, BOTTOM_COLOR, color),
        cube.edge_in_position(Face::Top, EdgePosition::Bottom, BOTTOM_COLOR, color),
    ) {
        (Some(false), _) => list.push_moves(&[mv!(U, 1), mv!(R, 2)]),
        (Some(true), _) => {
            list.push_moves(&[mv!(B, 3), mv!(R, 1)]);
            if back_solved {
                list.push_move(mv!(B, 1));
            }
        }
        (None, Some(false)) => list.push_moves(&[mv!(U, 3), mv!(R, 2)]),
        (None, Some(true)) => {
            list.push_moves(&[mv!(F, 1), mv!(R, 3)]);
            if front_solved {
                list.push_move(mv!(F, 3));
            }
        }
        (None, None) => return false,
    }
    true
}

/// Move the edge from anywhere on the left face to the top of the right face, restoring the
/// left cross edge if it was solved.
fn from_left(list: &mut MoveList<'_>) {
    use EdgePosition as E;

    let color = list.cube().color_of_face(Face::Right);
    let left_solved = edge_solved(list.cube(), Face::Left);
    let Some(edge) = [E::Top, E::Left, E::Right, E::Bottom].into_iter().find(|&e| {
        list.cube()
            .edge_in_position(Face::Left, e, color, BOTTOM_COLOR)
            .is_some()
    }) else {
        return;
    };

    match edge {
        E::Top => list.push_move(mv!(U, 2)),
        E::Bottom => list.push_moves(&[mv!(L, 2), mv!(U, 2)]),
        E::Left => {
            list.push_moves(&[mv!(L, 1), mv!(U, 2)]);
            if left_solved {
                list.push_move(mv!(L, 3));
            }
        }
        E::Right => {
            list.push_moves(&[mv!(L, 3), mv!(U, 2)]);
            if left_solved {
                list.push_move(mv!(L, 1));
            }
        }
    }
}

/// Insert the edge from anywhere on the right face.
fn from_right(list: &mut MoveList<'_>) {
    use EdgePosition as E;

    let color = list.cube().color_of_face(Face::Right);
    let Some((edge, flipped)) = [E::Top, E::Left, E::Right, E::Bottom]
        .into_iter()
        .find_map(|e| {
            list.cube()
                .edge_in_position(Face::Right, e, color, BOTTOM_COLOR)
                .map(|flipped| (e, flipped))
        })
    else {
        return;
    };

    match (edge, flipped) {
        (E::Top, false) => list.push_move(mv!(R, 2)),
        (E::Top, true) => {
            list.push_move(mv!(R, 1));
            list.push_moves(&FLIP_RIGHT_EDGE);
        }
        // flipped in place, since the face was not solved
        (E::Bottom, _) => {
            list.push_move(mv!(R, 3));
            list.push_moves(&FLIP_RIGHT_EDGE);
        }
        (E::Left, false) => list.push_move(mv!(R, 3)),
        (E::Left, true) => {
            list.push_move(mv!(R, 2));
            list.push_moves(&FLIP_RIGHT_EDGE);
        }
        (E::Right, false) => list.push_move(mv!(R, 1)),
        (E::Right, true) => list.push_moves(&FLIP_RIGHT_EDGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::moves::parse_moves;

    fn solve_cross(scramble: &str) -> Cube {
        let mut cube = Cube::new().make_moves(parse_moves(scramble).unwrap());
        let mut list = MoveList::new(&mut cube);
        Cross::solve(&mut list).unwrap();
        assert_eq!(list.pending_len(), 0);
        drop(list);
        cube
    }

    #[test_log::test]
    fn solved_cross_needs_nothing() {
        let mut cube = Cube::new().make_moves(parse_moves("R U R' U'").unwrap());
        assert!(cross_solved(&cube));
        let before = cube.clone();

        let mut list = MoveList::new(&mut cube);
        Cross::solve(&mut list).unwrap();
        assert!(list.into_moves().is_empty());
        assert_eq!(cube, before);
    }

    #[test]
    fn one_edge_out() {
        let cube = Cube::new().make_moves(parse_moves("R U").unwrap());
        assert!(!edge_solved(&cube, Face::Right));
        assert!(edge_solved(&cube, Face::Front));
        assert!(edge_solved(&cube, Face::Back));
        assert!(edge_solved(&cube, Face::Left));
        assert!(!cross_solved(&cube));
    }

    #[test_log::test]
    fn every_edge_position() {
        // each scramble moves a cross edge into a different spot
        for scramble in [
            "F", "F'", "F2", "B", "B'", "B2", "R", "R'", "L", "L'", "L2", "R2 U", "R2 U'",
            "F' U F", "E", "E2", "R E R'", "F E' F'", "D", "D2", "D'", "L' U' L",
        ] {
            let cube = solve_cross(scramble);
            assert!(cross_solved(&cube), "{scramble}");
        }
    }

    #[test_log::test]
    fn scrambled_cross() {
        let cube = solve_cross("D R2 U' F B' L D2 R U F2 B' D");
        assert!(Cross::self_test(&cube));
        assert_eq!(cube.color_of_face(Face::Bottom), BOTTOM_COLOR);
    }
}
