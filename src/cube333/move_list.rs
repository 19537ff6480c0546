//! Speculative move application.
//!
//! A [`MoveList`] owns the only mutable borrow of the cube being solved. Every move goes onto the
//! cube straight away and into a pending buffer. Pending moves are either accepted onto the
//! committed log, or rolled back by replaying their inverses, so probing a candidate never needs
//! a copy of the cube.

use super::moves::Move333;
use super::Cube;
use crate::moves::{Move, MoveSequence};

use log::trace;

/// A position in the pending buffer to roll back to. Only valid for the [`MoveList`] that
/// created it, and only until the buffer is accepted or rolled back past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// A cube together with the moves that have been applied to it.
#[derive(Debug)]
pub struct MoveList<'a> {
    cube: &'a mut Cube,
    moves: Vec<Move333>,
    pending: Vec<Move333>,
}

impl<'a> MoveList<'a> {
    /// Start recording moves on a cube.
    pub fn new(cube: &'a mut Cube) -> Self {
        Self {
            cube,
            moves: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// The live cube, with every pending move applied.
    pub fn cube(&self) -> &Cube {
        self.cube
    }

    /// Apply a move and add it to the pending buffer.
    pub fn push_move(&mut self, m: Move333) {
        self.cube.apply_move(m);
        self.pending.push(m);
    }

    /// Apply moves in order, adding each to the pending buffer.
    pub fn push_moves<'m>(&mut self, mvs: impl IntoIterator<Item = &'m Move333>) {
        for &m in mvs {
            self.push_move(m);
        }
    }

    /// Apply a move and commit it along with everything pending.
    pub fn commit_move(&mut self, m: Move333) {
        self.push_move(m);
        self.accept_pending();
    }

    /// Move the pending buffer onto the committed log. The cube is left as it is.
    pub fn accept_pending(&mut self) {
        self.moves.append(&mut self.pending);
    }

    /// Undo every pending move and clear the buffer.
    pub fn reject_pending(&mut self) {
        self.rollback(Checkpoint(0));
    }

    /// Mark the current end of the pending buffer.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.pending.len())
    }

    /// Undo the pending moves made after `checkpoint`, newest first.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        assert!(
            checkpoint.0 <= self.pending.len(),
            "checkpoint is past the end of the pending moves"
        );
        let undone = self.pending.split_off(checkpoint.0);
        if !undone.is_empty() {
            trace!("rolling back {}", MoveSequence(undone.clone()));
        }
        for m in undone.into_iter().rev() {
            self.cube.apply_move(m.inverse());
        }
    }

    /// The number of moves that are applied but not yet committed.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// The committed log.
    ///
    /// # Panics
    /// Panics if there are pending moves, since they are neither part of the result nor undone.
    pub fn moves(&self) -> &[Move333] {
        assert!(self.pending.is_empty(), "read moves with moves still pending");
        &self.moves
    }

    /// Consume the list, returning the committed log.
    ///
    /// # Panics
    /// Panics if there are pending moves.
    pub fn into_moves(self) -> MoveSequence<Move333> {
        assert!(self.pending.is_empty(), "read moves with moves still pending");
        MoveSequence(self.moves)
    }
}
