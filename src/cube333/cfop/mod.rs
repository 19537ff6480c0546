//! A CFOP solver: cross, first two layers, orientation of the last layer, then permutation of
//! the last layer.
//!
//! Every phase reads the stickers, picks a case and drives a [`MoveList`]. Phases only commit
//! moves once they are sure of them, so a phase either leaves the cube closer to solved or
//! reports an error.

mod catalog;
mod cross;
mod f2l;
mod last_layer;
mod patterns;

use super::move_list::MoveList;
use super::moves::{Move333, Move333Type};
use super::{Color, Cube, Face};
use crate::error::SolveError;
use crate::moves::MoveSequence;
use crate::mv;

use log::info;
use std::fmt;

/// The colour that ends up on the `Bottom` face.
pub const BOTTOM_COLOR: Color = Color::White;

/// The phases of a solve, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    /// Rotating the cube so that [`BOTTOM_COLOR`] is on the bottom
    Orient,
    /// Solving the four bottom edges
    Cross,
    /// Solving the four corner and edge pairs of the first two layers
    F2l,
    /// Orienting the last layer
    Oll,
    /// Permuting the last layer
    Pll,
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhaseKind::Orient => "Orienting",
            PhaseKind::Cross => "Cross",
            PhaseKind::F2l => "F2L",
            PhaseKind::Oll => "OLL",
            PhaseKind::Pll => "PLL",
        };
        f.write_str(name)
    }
}

/// Options for a [`Solver`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Keep a copy of the cube after every phase.
    pub show_cube_after_each_step: bool,
    /// Mark every fifth move when printing move lists.
    pub add_separators: bool,
}

impl SolverConfig {
    /// Set whether to keep a copy of the cube after every phase.
    pub fn show_cube_after_each_step(mut self, show: bool) -> Self {
        self.show_cube_after_each_step = show;
        self
    }

    /// Set whether to mark every fifth move when printing move lists.
    pub fn add_separators(mut self, add: bool) -> Self {
        self.add_separators = add;
        self
    }
}

/// The moves one phase made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseReport {
    /// Which phase this is
    pub phase: PhaseKind,
    /// The moves committed by the phase
    pub moves: MoveSequence<Move333>,
    /// The cube after the phase, if the solver was asked to keep it
    pub snapshot: Option<Cube>,
}

/// The result of a solve, phase by phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    phases: Vec<PhaseReport>,
    add_separators: bool,
}

impl Solution {
    /// The report of every phase, in order.
    pub fn phases(&self) -> &[PhaseReport] {
        &self.phases
    }

    /// Every move of the solve.
    pub fn moves(&self) -> MoveSequence<Move333> {
        MoveSequence(
            self.phases
                .iter()
                .flat_map(|p| p.moves.0.iter().copied())
                .collect(),
        )
    }

    /// The total number of moves.
    pub fn len(&self) -> usize {
        self.phases.iter().map(|p| p.moves.len()).sum()
    }

    /// Whether the cube needed no moves at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in &self.phases {
            if report.phase == PhaseKind::Orient && report.moves.is_empty() {
                continue;
            }
            if report.moves.is_empty() {
                writeln!(f, "{}: Already solved", report.phase)?;
            } else {
                writeln!(
                    f,
                    "{}: {}",
                    report.phase,
                    report.moves.serialize(self.add_separators)
                )?;
            }
            if let Some(cube) = &report.snapshot {
                write!(f, "{cube}")?;
            }
        }
        Ok(())
    }
}

/// One stage of the method. A phase may leave moves pending only by returning an error.
trait Phase {
    const KIND: PhaseKind;

    fn solve(list: &mut MoveList<'_>) -> Result<(), SolveError>;

    /// Whether the goal of this phase, and of every phase before it, holds.
    fn self_test(cube: &Cube) -> bool;
}

struct Orient;

impl Phase for Orient {
    const KIND: PhaseKind = PhaseKind::Orient;

    fn solve(list: &mut MoveList<'_>) -> Result<(), SolveError> {
        rotate_color_to_bottom(list, BOTTOM_COLOR)?;
        list.accept_pending();
        Ok(())
    }

    fn self_test(cube: &Cube) -> bool {
        cube.color_of_face(Face::Bottom) == BOTTOM_COLOR
    }
}

/// Push the rotation that brings the face with the given centre to the bottom, if it is not
/// there already.
fn rotate_color_to_bottom(list: &mut MoveList<'_>, color: Color) -> Result<(), SolveError> {
    let face = list
        .cube()
        .face_of_color(color)
        .ok_or(SolveError::MissingColor(color))?;
    let rotation = match face {
        Face::Bottom => return Ok(()),
        Face::Front => mv!(X, 3),
        Face::Back => mv!(X, 1),
        Face::Left => mv!(Z, 3),
        Face::Right => mv!(Z, 1),
        Face::Top => mv!(X, 2),
    };
    list.push_move(rotation);
    Ok(())
}

/// Push the rotation that brings a side face round to the right.
fn side_to_right(list: &mut MoveList<'_>, face: Face) {
    let rotation = match face {
        Face::Right => return,
        Face::Front => mv!(Y, 3),
        Face::Back => mv!(Y, 1),
        Face::Left => mv!(Y, 2),
        Face::Top | Face::Bottom => unreachable!("{face:?} is not a side face"),
    };
    list.push_move(rotation);
}

/// The order in which side faces are worked on.
const SIDE_ORDER: [Face; 4] = [Face::Right, Face::Front, Face::Back, Face::Left];

/// Solves cubes with CFOP.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Create a solver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with the given configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The configuration the solver runs with.
    pub fn config(&self) -> SolverConfig {
        self.config
    }

    /// Solve the cube in place, returning the moves each phase made. On error the cube is left
    /// part way through the failing phase.
    pub fn solve(&self, cube: &mut Cube) -> Result<Solution, SolveError> {
        let mut list = MoveList::new(cube);
        let phases = vec![
            self.run_phase::<Orient>(&mut list)?,
            self.run_phase::<cross::Cross>(&mut list)?,
            self.run_phase::<f2l::F2l>(&mut list)?,
            self.run_phase::<last_layer::Oll>(&mut list)?,
            self.run_phase::<last_layer::Pll>(&mut list)?,
        ];

        let solution = Solution {
            phases,
            add_separators: self.config.add_separators,
        };
        info!("solved in {} moves", solution.len());
        Ok(solution)
    }

    fn run_phase<P: Phase>(&self, list: &mut MoveList<'_>) -> Result<PhaseReport, SolveError> {
        let start = list.moves().len();
        P::solve(list)?;
        if !P::self_test(list.cube()) {
            return Err(SolveError::SelfTestFailed(P::KIND));
        }

        let moves = MoveSequence(list.moves()[start..].to_vec());
        info!("{}: {} moves", P::KIND, moves.len());
        Ok(PhaseReport {
            phase: P::KIND,
            moves,
            snapshot: self
                .config
                .show_cube_after_each_step
                .then(|| list.cube().clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::moves::{parse_moves, AllMoves, MoveGenerator};

    use proptest::collection::vec;
    use proptest::prelude::*;
    use rand::Rng;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn check_solve(scramble: MoveSequence<Move333>) -> Solution {
        let start = Cube::new().make_moves(scramble.clone());
        let mut cube = start.clone();
        let solution = match Solver::new().solve(&mut cube) {
            Ok(solution) => solution,
            Err(e) => panic!("{e} after {scramble}"),
        };
        assert!(cube.is_solved(), "{scramble}");
        assert_eq!(start.make_moves(solution.moves()), cube);
        solution
    }

    #[test_log::test]
    fn solved_cube() {
        let solution = check_solve(MoveSequence::default());
        assert!(solution.is_empty());
        assert_eq!(solution.phases().len(), 5);
        assert_eq!(
            solution.to_string(),
            "Cross: Already solved\nF2L: Already solved\nOLL: Already solved\nPLL: Already solved\n"
        );
    }

    #[test_log::test]
    fn upside_down_cube() {
        let solution = check_solve(parse_moves("x2").unwrap());
        assert_eq!(solution.phases()[0].moves.0, vec![mv!(X, 2)]);
        assert_eq!(solution.len(), 1);
        assert!(solution.to_string().starts_with("Orienting: x2\nCross: Already solved\n"));
    }

    #[test_log::test]
    fn sexy_move() {
        let solution = check_solve(parse_moves("R U R' U'").unwrap());
        assert!(solution.phases()[0].moves.is_empty());
    }

    #[test_log::test]
    fn seeded_scrambles() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        for _ in 0..200 {
            let len = rng.random_range(0..40);
            let scramble: Vec<Move333> = (0..len)
                .map(|_| AllMoves::MOVE_LIST[rng.random_range(0..AllMoves::SIZE)])
                .collect();
            let solution = check_solve(MoveSequence(scramble));
            for report in solution.phases() {
                assert!(report.snapshot.is_none());
            }
        }
    }

    #[test_log::test]
    fn snapshots_and_separators() {
        let config = SolverConfig::default()
            .show_cube_after_each_step(true)
            .add_separators(true);
        assert!(config.show_cube_after_each_step && config.add_separators);

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let scramble: Vec<Move333> = (0..25)
            .map(|_| AllMoves::MOVE_LIST[rng.random_range(0..AllMoves::SIZE)])
            .collect();
        let mut cube = Cube::new().make_moves(MoveSequence(scramble));

        let solution = Solver::with_config(config).solve(&mut cube).unwrap();
        assert!(cube.is_solved());
        assert_eq!(solution.phases().last().unwrap().snapshot.as_ref(), Some(&cube));
        for report in solution.phases() {
            assert!(report.snapshot.is_some());
        }

        let printed = solution.to_string();
        assert!(printed.contains(&cube.to_string()));
        let f2l = printed.lines().find(|l| l.starts_with("F2L: ")).unwrap();
        if solution.phases()[2].moves.len() > 5 {
            assert!(f2l.contains(" - "));
        }
    }

    #[test]
    fn missing_colour() {
        let mut cube = Cube::new().make_move(mv!(X, 1));
        cube.set(Face::Front, 1, 1, Color::Red);
        assert_eq!(
            Solver::new().solve(&mut cube),
            Err(SolveError::MissingColor(Color::White))
        );
    }

    proptest! {
        #[test]
        fn solves_anything(mvs in vec(any::<Move333>(), 0..50).prop_map(MoveSequence)) {
            let start = Cube::new().make_moves(mvs);
            let mut cube = start.clone();
            let solution = Solver::new().solve(&mut cube);
            prop_assert!(solution.is_ok());
            prop_assert!(cube.is_solved());
            prop_assert_eq!(start.make_moves(solution.unwrap().moves()), cube);
        }
    }
}
