//! Face turns of the 3x3x3 and their effect on a `CubieCube`.

use super::axis::{Axis, AxisTurn};
use super::{CornerTwist, CubieCube, EdgeFlip};
use crate::error::MoveParseError;
use crate::moves::{Cancellation, MoveSequence};
use crate::notation::Notation;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// Represents each type of move. Note that the `Move333` struct uses this along with a counter to
/// represent moves such as R2 or U'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Move333Type {
    /// Right
    R,
    /// Left
    L,
    /// Up
    U,
    /// Down
    D,
    /// Front
    F,
    /// Back
    B,
}

impl Move333Type {
    /// The move type on the face opposite to the given one.
    pub fn opposite(self) -> Move333Type {
        match self {
            Move333Type::R => Move333Type::L,
            Move333Type::L => Move333Type::R,
            Move333Type::U => Move333Type::D,
            Move333Type::D => Move333Type::U,
            Move333Type::F => Move333Type::B,
            Move333Type::B => Move333Type::F,
        }
    }

    /// The axis this face turns about.
    pub fn axis(self) -> Axis {
        match self {
            Move333Type::R | Move333Type::L => Axis::LR,
            Move333Type::U | Move333Type::D => Axis::UD,
            Move333Type::F | Move333Type::B => Axis::FB,
        }
    }
}

/// Stores a move type and counter. An anti-clockwise move will have a count of 3.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct Move333 {
    pub ty: Move333Type,
    #[cfg_attr(test, proptest(strategy = "1..=3u8"))]
    pub count: u8,
}

impl crate::moves::Move for Move333 {
    fn inverse(self) -> Self {
        Self {
            ty: self.ty,
            count: (4 - self.count % 4) % 4,
        }
    }

    fn commutes_with(&self, b: &Self) -> bool {
        self.ty.axis() == b.ty.axis()
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self.ty == b.ty {
            let count = (self.count + b.count) % 4;
            if count == 0 {
                Cancellation::NoMove
            } else {
                Cancellation::OneMove(Move333 { ty: self.ty, count })
            }
        } else {
            Cancellation::TwoMove(self, b)
        }
    }
}

// I don't want to have the default derive debug for this!
impl std::fmt::Debug for Move333 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.count {
            1 => write!(f, "{:?}", self.ty),
            3 => write!(f, "{:?}'", self.ty),
            _ => write!(f, "{:?}{}", self.ty, self.count),
        }
    }
}

/// A trait to classify a type as a move generator, i.e. a set of moves whose combinations reach
/// every state of the puzzle (or of some subgroup).
pub trait MoveGenerator {
    /// The amount of moves that are available in the moveset.
    const SIZE: usize;
    /// A list of all valid moves. The index of a move in this list will be the same index used
    /// when accessing the move table.
    const MOVE_LIST: &'static [Move333];
}

/// The index of a move in the `Htm` list: the three turns of a face are contiguous.
impl From<Move333> for usize {
    fn from(mv: Move333) -> usize {
        mv.ty as usize * 3 + (mv.count as usize - 1)
    }
}

/// Create a move by specifying a move type and move count. Note that you do not need to specify
/// for example Move333Type::R, you only need to specify R.
#[macro_export]
macro_rules! mv {
    ($ty:ident, $count: expr) => {
        Move333 {
            ty: Move333Type::$ty,
            count: $count,
        }
    };
}

/// Type for Half Turn Metric
pub struct Htm;

impl MoveGenerator for Htm {
    const SIZE: usize = 18;
    const MOVE_LIST: &'static [Move333] = &[
        mv!(R, 1),
        mv!(R, 2),
        mv!(R, 3),
        mv!(L, 1),
        mv!(L, 2),
        mv!(L, 3),
        mv!(U, 1),
        mv!(U, 2),
        mv!(U, 3),
        mv!(D, 1),
        mv!(D, 2),
        mv!(D, 3),
        mv!(F, 1),
        mv!(F, 2),
        mv!(F, 3),
        mv!(B, 1),
        mv!(B, 2),
        mv!(B, 3),
    ];
}

const O: CornerTwist = CornerTwist::Oriented;
const C: CornerTwist = CornerTwist::Clockwise;
const A: CornerTwist = CornerTwist::AntiClockwise;
const N: EdgeFlip = EdgeFlip::Oriented;
const Y: EdgeFlip = EdgeFlip::Flipped;

// A clockwise quarter turn moves the cubie at position CP_OFFSETS[i] to position i, adding
// CO_OFFSETS[i] to its twist. Likewise for edges.
const CO_OFFSETS: [[CornerTwist; 8]; 6] = [
    [C, O, O, A, A, O, O, C],
    [O, A, C, O, O, C, A, O],
    [O; 8],
    [O; 8],
    [A, C, O, O, C, A, O, O],
    [O, O, A, C, O, O, C, A],
];
const CP_OFFSETS: [[u8; 8]; 6] = [
    [4, 1, 2, 0, 7, 5, 6, 3],
    [0, 2, 6, 3, 4, 1, 5, 7],
    [3, 0, 1, 2, 4, 5, 6, 7],
    [0, 1, 2, 3, 5, 6, 7, 4],
    [1, 5, 2, 3, 0, 4, 6, 7],
    [0, 1, 3, 7, 4, 5, 2, 6],
];
const EO_OFFSETS: [[EdgeFlip; 12]; 6] = [
    [N, N, N, Y, N, N, N, Y, Y, N, N, Y],
    [N, Y, N, N, N, Y, N, N, N, Y, Y, N],
    [N; 12],
    [N; 12],
    [N; 12],
    [N; 12],
];
const EP_OFFSETS: [[u8; 12]; 6] = [
    [0, 1, 2, 8, 4, 5, 6, 11, 7, 9, 10, 3],
    [0, 10, 2, 3, 4, 9, 6, 7, 8, 1, 5, 11],
    [3, 0, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11],
    [0, 1, 2, 3, 5, 6, 7, 4, 8, 9, 10, 11],
    [9, 1, 2, 3, 8, 5, 6, 7, 0, 4, 10, 11],
    [0, 1, 11, 3, 4, 5, 10, 7, 8, 9, 2, 6],
];

impl CubieCube {
    /// Apply an algorithm to a cube
    pub fn make_moves(self, mvs: MoveSequence<Move333>) -> CubieCube {
        mvs.0.into_iter().fold(self, |c, m| c.make_move(m))
    }

    /// Apply a move to a cube.
    pub fn make_move(mut self, mv: Move333) -> CubieCube {
        self.apply_move(mv);
        self
    }

    /// Apply a move to this cube in place.
    pub fn apply_move(&mut self, mv: Move333) {
        for _ in 0..mv.count % 4 {
            self.apply_quarter_turn(mv.ty);
        }
    }

    /// Make a single clockwise quarter turn of a face.
    fn apply_quarter_turn(&mut self, ty: Move333Type) {
        let face = ty as usize;
        let (co, cp, eo, ep) = (self.co, self.cp, self.eo, self.ep);

        for i in 0..8 {
            let src = CP_OFFSETS[face][i] as usize;
            self.co[i] = co[src].twist_by(CO_OFFSETS[face][i]);
            self.cp[i] = cp[src];
        }

        for i in 0..12 {
            let src = EP_OFFSETS[face][i] as usize;
            self.eo[i] = eo[src].flip_by(EO_OFFSETS[face][i]);
            self.ep[i] = ep[src];
        }
    }
}

impl MoveSequence<Move333> {
    /// Read whitespace separated move tokens through a notation. Every token must name a single
    /// face turn.
    ///
    /// ```rust
    /// use cube_solver::cube333::moves::Move333;
    /// use cube_solver::moves::MoveSequence;
    /// use cube_solver::notation::DefaultNotation;
    ///
    /// let alg = MoveSequence::<Move333>::parse("R U R' U'", &DefaultNotation).unwrap();
    /// assert_eq!(alg.len(), 4);
    /// ```
    pub fn parse(text: &str, notation: &dyn Notation) -> Result<Self, MoveParseError> {
        text.split_whitespace()
            .map(|token| {
                let turn = notation.token_to_move(token)?;
                Move333::from_axis_turn(turn)
                    .ok_or_else(|| MoveParseError::NotAFaceTurn(token.to_owned()))
            })
            .collect()
    }

    /// Render the moves through a notation, separated by spaces.
    pub fn render(&self, notation: &dyn Notation) -> String {
        self.0
            .iter()
            .map(|&mv| {
                let turn = AxisTurn::from(mv);
                notation
                    .move_to_token(turn.axis, turn.layer_mask, turn.angle)
                    .unwrap_or_else(|| format!("{mv:?}"))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
