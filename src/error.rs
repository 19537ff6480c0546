//! This module defines general error types used throughout the crate.

use thiserror::Error;

use crate::cube333::cfop::PhaseKind;
use crate::cube333::Color;

/// Error type for reading move notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    /// attempted to parse an empty token
    #[error("attempted to parse an empty move token")]
    Empty,
    /// the token is not one of the 54 known moves
    #[error("unknown move `{0}`")]
    UnknownMove(String),
}

/// Errors that stop the CFOP solver. None of these can happen on a cube that was reached from
/// the solved state by moves; they mean the solver met a state its tables do not cover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// no OLL case matched in any of the four top layer orientations
    #[error("no OLL case matches the last layer")]
    NoOllMatch,
    /// no PLL case matched in any of the four top layer orientations
    #[error("no PLL case matches the last layer")]
    NoPllMatch,
    /// the F2L pair could not be classified
    #[error("no F2L case matches the {front:?}/{right:?} pair")]
    NoF2lCase {
        /// colour of the front centre while solving the pair
        front: Color,
        /// colour of the right centre while solving the pair
        right: Color,
    },
    /// no centre carries the colour, so the cube is not a valid cube
    #[error("no face has a {0:?} centre")]
    MissingColor(Color),
    /// a phase finished without reaching its goal
    #[error("{0} did not leave the cube in the expected state")]
    SelfTestFailed(PhaseKind),
}
