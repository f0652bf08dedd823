//! We give a general description of a coordinate, which is a type used to encode coset information
//! of a puzzle as a small dense integer (an ordinal).
//!
//! A coordinate is a pair of strategies over a puzzle: [`Coordinate::from_puzzle`] encodes the
//! relevant part of a puzzle into an ordinal, and [`FromCoordinate::set_coord`] writes an ordinal
//! back onto a puzzle, touching only the part of the puzzle the coordinate describes.

/// A coordinate type, encoding cosets of the puzzle P.
pub trait Coordinate<P>: Copy + Default + Eq {
    /// Obtain the coordinate that corresponds to the given puzzle.
    fn from_puzzle(puzzle: &P) -> Self;

    /// Determine whether the given coordinate represents a solved state. Most coordinates put the
    /// solved state at 0, the ones that don't override this.
    fn solved(self) -> bool {
        self.repr() == 0
    }

    /// The number of possible coordinate states.
    fn count() -> usize;

    /// A representation of this coordinate as a usize, for use in table lookups.
    fn repr(self) -> usize;

    /// Convert the representation of a coordinate to the coordinate itself. `n` must be less than
    /// `count()`.
    fn from_repr(n: usize) -> Self;
}

/// Gives the ability to set a coordinate onto a puzzle.
pub trait FromCoordinate<C>: Sized
where
    C: Coordinate<Self>,
{
    /// Modify the puzzle so that its coordinate for `C` is `coord`. Parts of the puzzle not
    /// described by `C` are left alone, although some coordinates require those parts to be in a
    /// particular state beforehand (see the individual coordinates).
    fn set_coord(&mut self, coord: C);
}
