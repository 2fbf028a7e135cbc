//! Module for puzzle move generics and related functionality

/// Enum for representing the cancellation of two moves.
/// See [`cancel`](Move::cancel).
#[derive(Debug, Clone, Eq, PartialEq)]
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

/// A move, for use in writing expressions or algorithms. A term of this trait
/// is a power of a generator in some group presentation, and the trait encodes
/// the order relations of the generators (e.g. R4 is the identity on a 3x3x3)
/// through the `cancel` method.
pub trait Move: Eq + Clone {
    /// Take the inverse of a move. These inverses must satisfy the invertibility conditions of
    /// a group, i.e. that `X X^{-1} = X^{-1} X = e` where `e` is the empty sequence.
    fn inverse(self) -> Self
    where
        Self: Sized;

    /// Return the cancellation of two adjacent moves.
    ///
    /// It is assumed that group axioms hold when applying cancellations.
    ///
    /// ```rust
    /// # fn main() {
    /// use cube_coords::mv;
    /// use cube_coords::cube333::moves::{Face, Move333, Turn};
    /// use cube_coords::moves::{Cancellation, Move};
    ///
    /// // In the context of a 3x3x3 Rubik's cube
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
    /// The number of moves in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence contains no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append another sequence to the end of this one.
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

    /// Cancel adjacent moves in the sequence until no adjacent pair cancels.
    ///
    /// We keep a fully reduced prefix and merge each incoming move with its
    /// tail. A complete cancellation exposes the previous move, which may now
    /// cancel with the next incoming one, so we just keep reducing against the
    /// back of the prefix.
    pub fn cancel(self) -> Self {
        let mut reduced: Vec<M> = Vec::with_capacity(self.0.len());

        for mv in self.0 {
            let mut next = Some(mv);
            while let Some(m) = next.take() {
                match reduced.pop() {
                    None => reduced.push(m),
                    Some(last) => match last.cancel(m) {
                        Cancellation::NoMove => {}
                        Cancellation::OneMove(merged) => next = Some(merged),
                        Cancellation::TwoMove(a, b) => {
                            reduced.push(a);
                            reduced.push(b);
                        }
                    },
                }
            }
        }

        Self(reduced)
    }
}
