//! The first two layers, one corner and edge pair at a time.
//!
//! Each pair is worked on in the front right slot. The corner is first brought to the slot or
//! just above it, and the edge to the top layer or the slot, after which the pair is one of a
//! fixed set of cases, each with its own algorithm.

use super::catalog::{CornerAt, EdgeAt, Shows, F2L_CASES};
use super::cross::cross_solved;
use super::patterns::algorithm;
use super::{side_to_right, Phase, PhaseKind, BOTTOM_COLOR, SIDE_ORDER};
use crate::coord::{CornerPosition, EdgePosition};
use crate::cube333::move_list::MoveList;
use crate::cube333::moves::{Move333, Move333Type};
use crate::cube333::{Color, Cube, Face};
use crate::error::SolveError;
use crate::moves::MoveSequence;
use crate::mv;

use log::debug;
use std::sync::OnceLock;

pub(super) struct F2l;

/// The staged position of a pair, which picks its algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CaseKey {
    corner: CornerAt,
    edge: EdgeAt,
    edge_shows: Shows,
    corner_shows: Shows,
}

struct Case {
    name: &'static str,
    key: CaseKey,
    moves: MoveSequence<Move333>,
}

fn cases() -> &'static [Case] {
    static CASES: OnceLock<Vec<Case>> = OnceLock::new();
    CASES.get_or_init(|| {
        F2L_CASES
            .iter()
            .map(|case| Case {
                name: case.name,
                key: CaseKey {
                    corner: case.corner,
                    edge: case.edge,
                    edge_shows: case.edge_shows,
                    corner_shows: case.corner_shows,
                },
                moves: algorithm(case.name, case.algorithm),
            })
            .collect()
    })
}

/// The front and right centres, which are the colours of the pair for the front right slot.
fn slot_colors(cube: &Cube) -> (Color, Color) {
    (
        cube.color_of_face(Face::Front),
        cube.color_of_face(Face::Right),
    )
}

/// Whether the front right pair is solved.
pub(super) fn pair_solved(cube: &Cube) -> bool {
    let (front, right) = slot_colors(cube);
    cube.edge_in_position(Face::Front, EdgePosition::Right, front, right) == Some(false)
        && cube.corner_colors(Face::Front, CornerPosition::BottomRight)
            == [BOTTOM_COLOR, right, front]
}

impl Phase for F2l {
    const KIND: PhaseKind = PhaseKind::F2l;

    fn solve(list: &mut MoveList<'_>) -> Result<(), SolveError> {
        for _ in 0..4 {
            let mut solved_one = false;
            for face in SIDE_ORDER {
                if solve_slot(list, face)? {
                    solved_one = true;
                    break;
                }
            }
            if !solved_one {
                break;
            }
        }
        Ok(())
    }

    fn self_test(cube: &Cube) -> bool {
        let mut cube = cube.clone();
        cross_solved(&cube)
            && (0..4).all(|_| {
                let solved = pair_solved(&cube);
                cube.apply_move(mv!(Y, 1));
                solved
            })
    }
}

/// Solve the pair in the slot between `face` and the side clockwise from it, as seen from
/// above. Returns whether anything was done.
fn solve_slot(list: &mut MoveList<'_>, face: Face) -> Result<bool, SolveError> {
    side_to_right(list, face);
    if pair_solved(list.cube()) {
        list.reject_pending();
        return Ok(false);
    }

    position_corner(list);
    position_edge(list);
    let case = find_case(list.cube())?;
    debug!("F2L {} for the {face:?} slot", case.name);
    list.push_moves(&case.moves.0);

    if !pair_solved(list.cube()) {
        return Err(SolveError::SelfTestFailed(PhaseKind::F2l));
    }
    list.accept_pending();
    Ok(true)
}

/// Bring the corner to the front right of the top layer, unless it is already there or in its
/// slot.
fn position_corner(list: &mut MoveList<'_>) {
    use CornerPosition as C;

    let (front, right) = slot_colors(list.cube());
    let colors = [front, right, BOTTOM_COLOR];
    let spots: [(Face, CornerPosition, &[Move333]); 6] = [
        (Face::Front, C::TopLeft, &[mv!(U, 3)]),
        (Face::Front, C::BottomLeft, &[mv!(L, 3), mv!(U, 3), mv!(L, 1)]),
        (Face::Back, C::TopLeft, &[mv!(U, 1)]),
        (Face::Back, C::TopRight, &[mv!(U, 2)]),
        (
            Face::Back,
            C::BottomLeft,
            &[mv!(Y, 1), mv!(R, 1), mv!(U, 1), mv!(R, 3), mv!(Y, 3)],
        ),
        (
            Face::Back,
            C::BottomRight,
            &[mv!(Y, 3), mv!(L, 3), mv!(U, 2), mv!(L, 1), mv!(Y, 1)],
        ),
    ];

    let found = spots
        .iter()
        .find(|(face, corner, _)| list.cube().corner_in_position(*face, *corner, colors))
        .map(|&(_, _, moves)| moves);
    if let Some(moves) = found {
        list.push_moves(moves);
    }
}

/// Bring the edge out of the middle layer, and if the corner is in its slot, turn the top layer
/// so the edge sits where the cases expect it.
fn position_edge(list: &mut MoveList<'_>) {
    use EdgePosition as E;

    let (front, right) = slot_colors(list.cube());
    let cube = list.cube();
    let corner_down = cube.corner_in_position(
        Face::Front,
        CornerPosition::BottomRight,
        [front, right, BOTTOM_COLOR],
    );
    let edge_at = |face, edge| cube.edge_in_position(face, edge, front, right).is_some();

    let extract: &[Move333] = if edge_at(Face::Front, E::Left) {
        if corner_down {
            &[mv!(L, 3), mv!(U, 3), mv!(L, 1)]
        } else {
            &[mv!(Y, 3), mv!(R, 1), mv!(U, 3), mv!(R, 3), mv!(Y, 1)]
        }
    } else if edge_at(Face::Back, E::Left) {
        if corner_down {
            &[mv!(R, 3), mv!(U, 1), mv!(R, 1)]
        } else {
            &[mv!(R, 3), mv!(U, 3), mv!(R, 1)]
        }
    } else if edge_at(Face::Back, E::Right) {
        if corner_down {
            &[mv!(L, 1), mv!(U, 3), mv!(L, 3)]
        } else {
            &[mv!(L, 1), mv!(U, 3), mv!(L, 3), mv!(U, 1)]
        }
    } else {
        &[]
    };
    list.push_moves(extract);

    if !corner_down {
        return;
    }

    // (turn when flipped, turn otherwise)
    let aligns: [(EdgePosition, Option<Move333>, Option<Move333>); 4] = [
        (E::Left, Some(mv!(U, 3)), Some(mv!(U, 2))),
        (E::Top, Some(mv!(U, 2)), Some(mv!(U, 1))),
        (E::Right, Some(mv!(U, 1)), None),
        (E::Bottom, None, Some(mv!(U, 3))),
    ];
    let cube = list.cube();
    let turn = aligns.iter().find_map(|&(edge, flipped, unflipped)| {
        cube.edge_in_position(Face::Top, edge, front, right)
            .map(|f| if f { flipped } else { unflipped })
    });
    if let Some(Some(m)) = turn {
        list.push_move(m);
    }
}

fn find_case(cube: &Cube) -> Result<&'static Case, SolveError> {
    use EdgePosition as E;

    let (front, right) = slot_colors(cube);
    let no_case = SolveError::NoF2lCase { front, right };
    let shows = |color: Color| {
        if color == front {
            Some(Shows::Front)
        } else if color == right {
            Some(Shows::Right)
        } else if color == BOTTOM_COLOR {
            Some(Shows::Bottom)
        } else {
            None
        }
    };

    let corner_up = cube.corner_in_position(
        Face::Front,
        CornerPosition::TopRight,
        [front, right, BOTTOM_COLOR],
    );
    let corner = if corner_up {
        CornerAt::Up
    } else {
        CornerAt::Down
    };
    let corner_sticker = cube.corner_color(
        Face::Front,
        if corner_up {
            CornerPosition::TopRight
        } else {
            CornerPosition::BottomRight
        },
    );

    let on_top = [
        (E::Top, EdgeAt::UB),
        (E::Left, EdgeAt::UL),
        (E::Right, EdgeAt::UR),
        (E::Bottom, EdgeAt::UF),
    ]
    .into_iter()
    .find(|&(e, _)| cube.edge_in_position(Face::Top, e, front, right).is_some());
    let (edge, edge_sticker) = match on_top {
        Some((e, at)) => (at, cube.edge_color(Face::Top, e)),
        None => (EdgeAt::FR, cube.edge_color(Face::Front, E::Right)),
    };

    let key = CaseKey {
        corner,
        edge,
        edge_shows: shows(edge_sticker).ok_or(no_case.clone())?,
        corner_shows: shows(corner_sticker).ok_or(no_case.clone())?,
    };
    cases().iter().find(|c| c.key == key).ok_or(no_case)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::moves::parse_moves;

    fn centres(cube: &Cube) -> [Color; 6] {
        Face::ALL.map(|f| cube.color_of_face(f))
    }

    #[test]
    fn case_keys_are_distinct() {
        let cases = cases();
        assert_eq!(cases.len(), 41);
        for (i, a) in cases.iter().enumerate() {
            for b in &cases[i + 1..] {
                assert_ne!(a.key, b.key, "{} and {}", a.name, b.name);
            }
        }
    }

    #[test]
    fn algorithms_keep_orientation() {
        for case in cases() {
            let cube = Cube::new().make_moves(case.moves.clone());
            assert_eq!(centres(&cube), centres(&Cube::SOLVED), "{}", case.name);
        }
    }

    #[test]
    fn cases_are_recognised() {
        // undoing an algorithm on a solved cube sets up its case, with the cross intact
        for case in cases() {
            let cube = Cube::new().make_moves(case.moves.clone().inverse());
            assert!(cross_solved(&cube), "{}", case.name);
            let found = find_case(&cube).unwrap();
            assert_eq!(found.key, case.key, "{}", case.name);
            assert!(pair_solved(&cube.make_moves(found.moves.clone())));
        }
    }

    #[test]
    fn solved_pairs() {
        assert!(pair_solved(&Cube::new()));
        assert!(F2l::self_test(&Cube::new()));
        let cube = Cube::new().make_moves(parse_moves("R U R'").unwrap());
        assert!(!pair_solved(&cube));
        assert!(!F2l::self_test(&cube));
        // the back left pair is untouched
        assert!(pair_solved(&cube.make_move(mv!(Y, 2))));
    }

    #[test_log::test]
    fn single_pair_out() {
        for scramble in ["R U R'", "R U' R'", "F' U F", "L' U L", "B U2 B'", "R U2 R' U' R U R'"] {
            let mut cube = Cube::new().make_moves(parse_moves(scramble).unwrap());
            let mut list = MoveList::new(&mut cube);
            F2l::solve(&mut list).unwrap();
            assert_eq!(list.pending_len(), 0);
            assert!(F2l::self_test(list.cube()), "{scramble}");
        }
    }

    #[test]
    fn unknown_colours() {
        // a corner sticker no pair has
        let mut cube = Cube::new();
        cube.set(Face::Front, 2, 2, Color::Yellow);
        assert_eq!(
            find_case(&cube).err(),
            Some(SolveError::NoF2lCase {
                front: Color::Green,
                right: Color::Orange,
            })
        );
    }
}
