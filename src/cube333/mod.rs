//! The 3x3x3 Rubik's cube at the level of cubies: which corner and edge pieces sit in which
//! positions, and how each of them is twisted or flipped.

pub mod axis;
pub mod facelet;
pub mod moves;
pub mod two_phase_solver;

use crate::combinatorics::permutation_parity;
use crate::error::TryFromIntToEnumError;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// Implements the conversions between a fieldless enum and its `u8` discriminant.
macro_rules! u8_enum {
    ($name:ident, [$($variant:ident),+ $(,)?]) => {
        impl From<$name> for u8 {
            fn from(v: $name) -> u8 {
                v as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = TryFromIntToEnumError;

            fn try_from(n: u8) -> Result<Self, Self::Error> {
                const ALL: &[$name] = &[$($name::$variant),+];
                ALL.get(n as usize)
                    .copied()
                    .ok_or(TryFromIntToEnumError::OutOfBounds)
            }
        }
    };
}

/// A corner position or the corner cubie whose home is that position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Corner {
    URF,
    UFL,
    ULB,
    UBR,
    DFR,
    DLF,
    DBL,
    DRB,
}

/// An edge position or the edge cubie whose home is that position. The last four edges are the
/// slice edges, whose home is the layer between U and D.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Edge {
    UF,
    UL,
    UB,
    UR,
    DF,
    DL,
    DB,
    DR,
    RF,
    LF,
    LB,
    RB,
}

/// The orientation of a corner cubie, as the number of clockwise twists taking its U or D
/// facelet to the U or D face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum CornerTwist {
    Oriented = 0,
    Clockwise = 1,
    AntiClockwise = 2,
}

/// The orientation of an edge cubie.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum EdgeFlip {
    Oriented = 0,
    Flipped = 1,
}

u8_enum!(Corner, [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB]);
u8_enum!(Edge, [UF, UL, UB, UR, DF, DL, DB, DR, RF, LF, LB, RB]);
u8_enum!(CornerTwist, [Oriented, Clockwise, AntiClockwise]);
u8_enum!(EdgeFlip, [Oriented, Flipped]);

impl Corner {
    /// All corners, in index order.
    pub const ALL: [Corner; 8] = [
        Corner::URF,
        Corner::UFL,
        Corner::ULB,
        Corner::UBR,
        Corner::DFR,
        Corner::DLF,
        Corner::DBL,
        Corner::DRB,
    ];
}

impl Edge {
    /// All edges, in index order.
    pub const ALL: [Edge; 12] = [
        Edge::UF,
        Edge::UL,
        Edge::UB,
        Edge::UR,
        Edge::DF,
        Edge::DL,
        Edge::DB,
        Edge::DR,
        Edge::RF,
        Edge::LF,
        Edge::LB,
        Edge::RB,
    ];

    /// Whether this edge belongs in the slice between the U and D layers.
    pub fn e_slice(self) -> bool {
        self as u8 >= Edge::RF as u8
    }
}

impl CornerTwist {
    /// Twist one step further clockwise.
    pub fn clockwise(self) -> CornerTwist {
        self.twist_by(CornerTwist::Clockwise)
    }

    /// Twist one step anticlockwise.
    pub fn anticlockwise(self) -> CornerTwist {
        self.twist_by(CornerTwist::AntiClockwise)
    }

    /// Compose two twists.
    pub fn twist_by(self, other: CornerTwist) -> CornerTwist {
        match (self as u8 + other as u8) % 3 {
            0 => CornerTwist::Oriented,
            1 => CornerTwist::Clockwise,
            _ => CornerTwist::AntiClockwise,
        }
    }

    /// The twist that undoes this one.
    pub fn inverse(self) -> CornerTwist {
        match self {
            CornerTwist::Oriented => CornerTwist::Oriented,
            CornerTwist::Clockwise => CornerTwist::AntiClockwise,
            CornerTwist::AntiClockwise => CornerTwist::Clockwise,
        }
    }
}

impl EdgeFlip {
    /// Flip the edge.
    pub fn flip(self) -> EdgeFlip {
        self.flip_by(EdgeFlip::Flipped)
    }

    /// Compose two flips.
    pub fn flip_by(self, other: EdgeFlip) -> EdgeFlip {
        if self == other {
            EdgeFlip::Oriented
        } else {
            EdgeFlip::Flipped
        }
    }
}

/// A cube state as a permutation and orientation of the corner and edge cubies. Position `i` of
/// `cp` holds the corner cubie sitting in corner position `i`, and `co[i]` is that cubie's twist;
/// likewise for edges.
///
/// Any combination of values can be stored, but only the ones passing
/// [`is_solvable`](CubieCube::is_solvable) can be reached by turning faces.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub struct CubieCube {
    pub co: [CornerTwist; 8],
    pub cp: [Corner; 8],
    pub eo: [EdgeFlip; 12],
    pub ep: [Edge; 12],
}

impl Default for CubieCube {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl CubieCube {
    /// The solved cube: every cubie at home and oriented.
    pub const SOLVED: CubieCube = CubieCube {
        co: [CornerTwist::Oriented; 8],
        cp: Corner::ALL,
        eo: [EdgeFlip::Oriented; 12],
        ep: Edge::ALL,
    };

    /// Put every cubie back at home, oriented.
    pub fn reset(&mut self) {
        *self = Self::SOLVED;
    }

    /// Whether the cube is solved.
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Sum of the corner twists, modulo 3.
    pub fn twist_sum(&self) -> u8 {
        self.co.iter().map(|&t| t as u8).sum::<u8>() % 3
    }

    /// Number of flipped edges, modulo 2.
    pub fn flip_sum(&self) -> u8 {
        self.eo.iter().map(|&f| f as u8).sum::<u8>() % 2
    }

    /// Whether the corner permutation is odd.
    pub fn corner_parity(&self) -> bool {
        permutation_parity(&self.cp.map(u8::from))
    }

    /// Whether the edge permutation is odd.
    pub fn edge_parity(&self) -> bool {
        permutation_parity(&self.ep.map(u8::from))
    }

    /// Whether the state can be reached from the solved cube by turning faces: the cubies form
    /// permutations, the twists sum to a multiple of 3, an even number of edges is flipped and
    /// the corner and edge permutations have the same parity.
    pub fn is_solvable(&self) -> bool {
        let mut corners = [false; 8];
        let mut edges = [false; 12];
        self.cp.iter().for_each(|&c| corners[c as usize] = true);
        self.ep.iter().for_each(|&e| edges[e as usize] = true);

        corners.into_iter().all(|b| b)
            && edges.into_iter().all(|b| b)
            && self.twist_sum() == 0
            && self.flip_sum() == 0
            && self.corner_parity() == self.edge_parity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_conversions() {
        assert_eq!(Corner::try_from(7), Ok(Corner::DRB));
        assert_eq!(Corner::try_from(8), Err(TryFromIntToEnumError::OutOfBounds));
        assert_eq!(Edge::try_from(11), Ok(Edge::RB));
        assert_eq!(Edge::try_from(12), Err(TryFromIntToEnumError::OutOfBounds));
        assert_eq!(CornerTwist::try_from(2), Ok(CornerTwist::AntiClockwise));
        assert_eq!(EdgeFlip::try_from(2), Err(TryFromIntToEnumError::OutOfBounds));
        for (i, c) in Corner::ALL.into_iter().enumerate() {
            assert_eq!(u8::from(c), i as u8);
        }
        for (i, e) in Edge::ALL.into_iter().enumerate() {
            assert_eq!(u8::from(e), i as u8);
        }
    }

    #[test]
    fn twists_form_a_group() {
        use CornerTwist as T;
        for t in [T::Oriented, T::Clockwise, T::AntiClockwise] {
            assert_eq!(t.twist_by(t.inverse()), T::Oriented);
            assert_eq!(t.clockwise().anticlockwise(), t);
            assert_eq!(t.clockwise().clockwise().clockwise(), t);
        }
        assert_eq!(EdgeFlip::Flipped.flip(), EdgeFlip::Oriented);
    }

    #[test]
    fn solved_is_solvable() {
        assert!(CubieCube::SOLVED.is_solvable());
        assert!(CubieCube::default().is_solved());
    }

    #[test]
    fn unsolvable_states() {
        let mut twisted = CubieCube::SOLVED;
        twisted.co[0] = CornerTwist::Clockwise;
        assert!(!twisted.is_solvable());

        let mut flipped = CubieCube::SOLVED;
        flipped.eo[3] = EdgeFlip::Flipped;
        assert!(!flipped.is_solvable());

        let mut swapped = CubieCube::SOLVED;
        swapped.ep.swap(0, 1);
        assert!(!swapped.is_solvable());
        swapped.cp.swap(0, 1);
        assert!(swapped.is_solvable());

        let mut duplicated = CubieCube::SOLVED;
        duplicated.cp[0] = Corner::UFL;
        assert!(!duplicated.is_solvable());

        duplicated.reset();
        assert!(duplicated.is_solved());
    }
}
