//! The last layer: orienting it with one OLL algorithm, then permuting it with one PLL algorithm
//! and a final turn of the top layer.

use super::patterns::{find_and_execute, oll_patterns, pll_patterns};
use super::{rotate_color_to_bottom, Phase, PhaseKind, BOTTOM_COLOR};
use crate::cube333::move_list::MoveList;
use crate::cube333::moves::{Move333, Move333Type};
use crate::cube333::{Cube, Face};
use crate::error::SolveError;
use crate::mv;

use log::debug;

pub(super) struct Oll;
pub(super) struct Pll;

/// Whether every sticker on the top face shows the top colour.
fn top_oriented(cube: &Cube) -> bool {
    let top = cube.color_of_face(Face::Top);
    cube.face(Face::Top).iter().all(|&c| c == top)
}

/// Whether the last layer is oriented and every side's top row is a single colour, so that at
/// most a turn of the top layer is left.
fn last_layer_permuted(cube: &Cube) -> bool {
    top_oriented(cube)
        && Face::SIDES.iter().all(|&face| {
            let first = cube.get(face, 0, 0);
            (1..3).all(|x| cube.get(face, x, 0) == first)
        })
}

impl Phase for Oll {
    const KIND: PhaseKind = PhaseKind::Oll;

    fn solve(list: &mut MoveList<'_>) -> Result<(), SolveError> {
        if top_oriented(list.cube()) {
            debug!("OLL skip");
            return Ok(());
        }
        if find_and_execute(list, oll_patterns()) {
            Ok(())
        } else {
            Err(SolveError::NoOllMatch)
        }
    }

    fn self_test(cube: &Cube) -> bool {
        top_oriented(cube)
    }
}

impl Phase for Pll {
    const KIND: PhaseKind = PhaseKind::Pll;

    fn solve(list: &mut MoveList<'_>) -> Result<(), SolveError> {
        if last_layer_permuted(list.cube()) {
            debug!("PLL skip");
        } else if !find_and_execute(list, pll_patterns()) {
            return Err(SolveError::NoPllMatch);
        }

        rotate_color_to_bottom(list, BOTTOM_COLOR)?;
        align_top_layer(list);
        list.accept_pending();
        Ok(())
    }

    fn self_test(cube: &Cube) -> bool {
        cube.is_solved()
    }
}

/// Turn the top layer so that it lines up with the centres below it.
fn align_top_layer(list: &mut MoveList<'_>) {
    let cube = list.cube();
    let front_row = cube.get(Face::Front, 0, 0);
    let turn = if front_row == cube.color_of_face(Face::Right) {
        Some(mv!(U, 3))
    } else if front_row == cube.color_of_face(Face::Left) {
        Some(mv!(U, 1))
    } else if front_row == cube.color_of_face(Face::Back) {
        Some(mv!(U, 2))
    } else {
        None
    };
    if let Some(m) = turn {
        list.push_move(m);
    }
}
