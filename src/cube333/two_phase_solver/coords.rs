//! This module contains the coordinate representations of cube states relevant to the two phases
//! of the solver.
//!
//! Phase 1 works with the corner twists, the edge flips and the choice of positions holding the
//! slice edges. Phase 2 starts from a cube where all three of those are solved, and works with the
//! corner permutation and the permutations of the U/D edges and of the slice edges.

use crate::combinatorics::{
    combination_from_ordinal, combination_ordinal, ordinal_to_permutation, permutation_to_ordinal,
};
use crate::coord::{Coordinate, FromCoordinate};
use crate::cube333::{Corner, CornerTwist, CubieCube, Edge, EdgeFlip};

/// Twists of the first seven corners, in base 3. The last twist is implied by the others.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct TwistCoord(u16);

/// Flips of the first eleven edges, in base 2. The last flip is implied by the others.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct FlipCoord(u16);

/// Which four of the twelve edge positions hold slice edges, regardless of their order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct ChoiceCoord(u16);

/// The permutation of the eight corners.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct CornerPermCoord(u16);

/// The permutation of the eight U/D edges among the U/D edge positions. Only meaningful when
/// the slice edges are in the slice.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct UdEdgePermCoord(u16);

/// The permutation of the four slice edges among the slice positions. Only meaningful when the
/// slice edges are in the slice.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct SliceEdgePermCoord(u8);

/// The choice of the solved cube, with the slice edges in the last four positions.
const SOLVED_CHOICE: u16 = 494;

impl Default for ChoiceCoord {
    fn default() -> Self {
        ChoiceCoord(SOLVED_CHOICE)
    }
}

impl Coordinate<CubieCube> for TwistCoord {
    fn from_puzzle(puzzle: &CubieCube) -> Self {
        TwistCoord(puzzle.co[..7].iter().fold(0, |acc, &t| acc * 3 + t as u16))
    }

    fn count() -> usize {
        // 3^7
        2187
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        debug_assert!(n < Self::count());
        TwistCoord(n as u16)
    }
}

impl FromCoordinate<TwistCoord> for CubieCube {
    fn set_coord(&mut self, coord: TwistCoord) {
        let mut n = coord.0;
        let mut last = CornerTwist::Oriented;

        for i in (0..7).rev() {
            self.co[i] = match n % 3 {
                0 => CornerTwist::Oriented,
                1 => CornerTwist::Clockwise,
                _ => CornerTwist::AntiClockwise,
            };
            last = last.twist_by(self.co[i].inverse());
            n /= 3;
        }

        self.co[7] = last;
    }
}

impl Coordinate<CubieCube> for FlipCoord {
    fn from_puzzle(puzzle: &CubieCube) -> Self {
        FlipCoord(puzzle.eo[..11].iter().fold(0, |acc, &f| acc * 2 + f as u16))
    }

    fn count() -> usize {
        // 2^11
        2048
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        debug_assert!(n < Self::count());
        FlipCoord(n as u16)
    }
}

impl FromCoordinate<FlipCoord> for CubieCube {
    fn set_coord(&mut self, coord: FlipCoord) {
        let mut n = coord.0;
        let mut last = EdgeFlip::Oriented;

        for i in (0..11).rev() {
            self.eo[i] = if n % 2 == 0 {
                EdgeFlip::Oriented
            } else {
                EdgeFlip::Flipped
            };
            last = last.flip_by(self.eo[i]);
            n /= 2;
        }

        self.eo[11] = last;
    }
}

impl Coordinate<CubieCube> for ChoiceCoord {
    fn from_puzzle(puzzle: &CubieCube) -> Self {
        let mut positions = [0; 4];
        let slice_positions = (0..12).filter(|&i| puzzle.ep[i].e_slice());
        for (slot, pos) in positions.iter_mut().zip(slice_positions) {
            *slot = pos;
        }

        ChoiceCoord(combination_ordinal(&positions, 12) as u16)
    }

    fn solved(self) -> bool {
        self.0 == SOLVED_CHOICE
    }

    fn count() -> usize {
        // 12 choose 4
        495
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        debug_assert!(n < Self::count());
        ChoiceCoord(n as u16)
    }
}

/// Sets the whole edge permutation: the slice edges fill the chosen positions in order, and the
/// U/D edges fill the rest in order.
impl FromCoordinate<ChoiceCoord> for CubieCube {
    fn set_coord(&mut self, coord: ChoiceCoord) {
        let mut positions = [0; 4];
        combination_from_ordinal(coord.0 as usize, 12, &mut positions);

        let mut slice = Edge::ALL[8..].iter();
        let mut ud = Edge::ALL[..8].iter();
        for (i, e) in self.ep.iter_mut().enumerate() {
            let next = if positions.contains(&i) {
                slice.next()
            } else {
                ud.next()
            };
            if let Some(&next) = next {
                *e = next;
            }
        }
    }
}

impl Coordinate<CubieCube> for CornerPermCoord {
    fn from_puzzle(puzzle: &CubieCube) -> Self {
        CornerPermCoord(permutation_to_ordinal(&puzzle.cp.map(u8::from)) as u16)
    }

    fn count() -> usize {
        // 8!
        40320
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        debug_assert!(n < Self::count());
        CornerPermCoord(n as u16)
    }
}

impl FromCoordinate<CornerPermCoord> for CubieCube {
    fn set_coord(&mut self, coord: CornerPermCoord) {
        let mut perm = [0; 8];
        ordinal_to_permutation(coord.0 as usize, &mut perm, 0);
        self.cp = perm.map(|c| Corner::ALL[c as usize]);
    }
}

impl Coordinate<CubieCube> for UdEdgePermCoord {
    fn from_puzzle(puzzle: &CubieCube) -> Self {
        let mut perm = [0; 8];
        for (p, &e) in perm.iter_mut().zip(&puzzle.ep[..8]) {
            *p = e as u8;
        }
        UdEdgePermCoord(permutation_to_ordinal(&perm) as u16)
    }

    fn count() -> usize {
        // 8!
        40320
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        debug_assert!(n < Self::count());
        UdEdgePermCoord(n as u16)
    }
}

/// Sets the first eight edge positions only.
impl FromCoordinate<UdEdgePermCoord> for CubieCube {
    fn set_coord(&mut self, coord: UdEdgePermCoord) {
        let mut perm = [0; 8];
        ordinal_to_permutation(coord.0 as usize, &mut perm, 0);
        for (e, p) in self.ep[..8].iter_mut().zip(perm) {
            *e = Edge::ALL[p as usize];
        }
    }
}

impl Coordinate<CubieCube> for SliceEdgePermCoord {
    fn from_puzzle(puzzle: &CubieCube) -> Self {
        let mut perm = [0; 4];
        for (p, &e) in perm.iter_mut().zip(&puzzle.ep[8..]) {
            *p = e as u8;
        }
        SliceEdgePermCoord(permutation_to_ordinal(&perm) as u8)
    }

    fn count() -> usize {
        // 4!
        24
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        debug_assert!(n < Self::count());
        SliceEdgePermCoord(n as u8)
    }
}

/// Sets the last four edge positions only.
impl FromCoordinate<SliceEdgePermCoord> for CubieCube {
    fn set_coord(&mut self, coord: SliceEdgePermCoord) {
        let mut perm = [0; 4];
        ordinal_to_permutation(coord.0 as usize, &mut perm, Edge::RF as u8);
        for (e, p) in self.ep[8..].iter_mut().zip(perm) {
            *e = Edge::ALL[p as usize];
        }
    }
}
