//! Module for puzzle move generics and related functionality

use std::fmt;

/// Enum for representing the cancellation of two moves.
/// See [`cancel`](Move::cancel).
#[derive(Debug, Eq, PartialEq)]
pub enum Cancellation<M: Move> {
    /// The moves cancelled completely.
    ///
    /// e.g. `R R'` cancels completely
    NoMove,
    /// The moves cancelled into one move.
    ///
    /// e.g. `R R` cancels into `R2`
    OneMove(M),
    /// The moves didn't cancel
    ///
    /// e.g. `R U` stays as `R U` when cancelling
    TwoMove(M, M),
}

/// A move, for use in writing expressions or algorithms. A term of this trait is a power of a
/// symbol in some group presentation, satisfying laws that allow simplification.
///
/// The relations moves satisfy include an order for each term (e.g. R4 is the identity on a
/// 3x3x3) and that some terms commute (e.g. R and L commute on a 3x3x3). Commutativity relations
/// are encoded in the `commutes_with` method and order relations are encoded in the `cancel`
/// method. These relations are all that `MoveSequence::cancel` assumes.
pub trait Move: Eq + Clone {
    /// Take the inverse of a move. These inverses must satisfy the invertibility conditions of
    /// a group, i.e. that `X X^{-1} = X^{-1} X = e` where `e` is the empty sequence.
    fn inverse(self) -> Self
    where
        Self: Sized;

    /// Returns whether the two moves commute, i.e. can be swapped when adjacent. It is required
    /// that this property is transitive.
    ///
    /// If A and B are moves, then `A.commutes_with(B)` iff
    /// `A B = B A`
    /// moreover, if `B.commutes_with(C)`, then it must be true that `A.commutes_with(C)`
    fn commutes_with(&self, b: &Self) -> bool;

    /// Return the cancellation of two moves.
    ///
    /// It is assumed that group axioms hold when applying cancellations.
    ///
    /// ```rust
    /// # fn main() {
    /// use cfop_cube::mv;
    /// use cfop_cube::cube333::moves::{Move333, Move333Type};
    /// use cfop_cube::moves::{Cancellation, Move};
    ///
    /// assert!(mv!(R, 1).cancel(mv!(U, 3)) == Cancellation::TwoMove(mv!(R, 1), mv!(U, 3)));
    /// assert!(mv!(R, 1).cancel(mv!(R, 1)) == Cancellation::OneMove(mv!(R, 2)));
    /// assert!(mv!(R, 1).cancel(mv!(R, 3)) == Cancellation::NoMove);
    /// # }
    /// ```
    fn cancel(self, b: Self) -> Cancellation<Self>
    where
        Self: Sized;
}

/// A sequence of moves (also known as an algorithm) for some specific type of move.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MoveSequence<M: Move>(pub Vec<M>);

impl<M: Move> MoveSequence<M> {
    /// Invert a sequence of moves: reverse the order and invert every move.
    ///
    /// If `X` is a sequence of moves and `X^{-1}` is its inverse and `o` is composition, then
    /// `X o X^{-1} = X^{-1} o X = e` where `e` is the empty sequence.
    pub fn inverse(self) -> Self {
        Self(self.0.into_iter().rev().map(|m| m.inverse()).collect())
    }

    /// Cancel an alg completely, including rearrangement of commutative moves.
    pub fn cancel(self) -> Self {
        let mut cancellation: Vec<M> = Vec::new();

        for next_mv in self.0 {
            // Walk back from the end of the already reduced prefix over every move that commutes
            // with the new one, merging with the first move on the same layer.
            let mut cancelled = false;

            for i in (0..cancellation.len()).rev() {
                match cancellation[i].clone().cancel(next_mv.clone()) {
                    Cancellation::NoMove => {
                        cancellation.remove(i);
                        cancelled = true;
                        break;
                    }
                    Cancellation::OneMove(m) => {
                        cancellation[i] = m;
                        cancelled = true;
                        break;
                    }
                    Cancellation::TwoMove(_, _) => {}
                }

                if !next_mv.commutes_with(&cancellation[i]) {
                    break;
                }
            }

            if !cancelled {
                cancellation.push(next_mv);
            }
        }

        Self(cancellation)
    }

    /// The number of moves in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenate another sequence onto the end of this one.
    pub fn append(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }
}

impl<M: Move + fmt::Display> MoveSequence<M> {
    /// Write the sequence as space separated notation. With `add_separators` a `"- "` marker
    /// follows every fifth move.
    pub fn serialize(&self, add_separators: bool) -> String {
        let mut out = String::new();
        for (i, m) in self.0.iter().enumerate() {
            if i > 0 {
                out.push(' ');
                if add_separators && i % 5 == 0 {
                    out.push_str("- ");
                }
            }
            out.push_str(&m.to_string());
        }
        out
    }
}

impl<M: Move + fmt::Display> fmt::Display for MoveSequence<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize(false))
    }
}

// Derived `Default` would require `M: Default`.
impl<M: Move> Default for MoveSequence<M> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<M: Move> From<Vec<M>> for MoveSequence<M> {
    fn from(moves: Vec<M>) -> Self {
        Self(moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::moves::{parse_moves, Move333};

    #[test]
    fn empty_sequences() {
        // Move333 has no Default of its own
        let empty = MoveSequence::<Move333>::default();
        assert!(empty.is_empty());
        assert_eq!(empty, MoveSequence(Vec::new()));
        assert_eq!(empty.serialize(true), "");

        let alg = parse_moves("R U").unwrap();
        assert_eq!(MoveSequence::default().append(alg.clone()), alg);
    }
}
