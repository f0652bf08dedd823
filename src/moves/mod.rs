//! Module for puzzle move generics and related functionality

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
/// generator of the puzzle's group, e.g. `R2` or `U'`.
///
/// Moves know two kinds of relation: an order for each generator (R4 is the identity on a 3x3x3),
/// encoded by `cancel`, and commutativity between some generators (R and L commute on a 3x3x3),
/// encoded by `commutes_with`. These are all that `MoveSequence::cancel` relies on.
pub trait Move: Eq + Clone {
    /// Take the inverse of a move, so that `X X^{-1} = X^{-1} X = e` where `e` is the empty
    /// sequence.
    fn inverse(self) -> Self
    where
        Self: Sized;

    /// Returns whether the two moves commute, i.e. can be swapped when adjacent. This must be
    /// transitive: if `A` commutes with `B` and `B` with `C`, then `A` commutes with `C`.
    fn commutes_with(&self, b: &Self) -> bool;

    /// Return the cancellation of two moves.
    ///
    /// ```rust
    /// # fn main() {
    /// use cube_solver::mv;
    /// use cube_solver::cube333::moves::{Move333, Move333Type};
    /// use cube_solver::moves::{Cancellation, Move};
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
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct MoveSequence<M: Move>(pub Vec<M>);

impl<M: Move> MoveSequence<M> {
    /// The number of moves in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenate two sequences, `self` first. No cancellation happens at the junction.
    pub fn append(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }

    /// Invert a sequence of moves.
    ///
    /// If `X` is a sequence of moves and `X^{-1}` is its inverse and `o` is composition, then
    /// `X o X^{-1} = X^{-1} o X = e` where `e` is the empty sequence.
    pub fn inverse(self) -> Self {
        Self(self.0.into_iter().rev().map(|m| m.inverse()).collect())
    }

    /// Cancel a sequence completely, including rearrangement of commuting moves.
    pub fn cancel(mut self) -> Self {
        let mut cancellation: Vec<M> = Vec::new();

        for next_mv in self.0.drain(..) {
            // Walk back over the already reduced prefix as long as the new move commutes past it.
            // A move that merges with ours is moved to the back and merged there. The prefix was
            // fully reduced, so this cannot expose any further cancellation.
            let mut cancelled = false;

            for i in (0..cancellation.len()).rev() {
                match cancellation[i].clone().cancel(next_mv.clone()) {
                    Cancellation::NoMove => {
                        cancellation.remove(i);
                        cancelled = true;
                        break;
                    }
                    Cancellation::OneMove(merged) => {
                        cancellation.remove(i);
                        cancellation.push(merged);
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
}

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

impl<M: Move> FromIterator<M> for MoveSequence<M> {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
