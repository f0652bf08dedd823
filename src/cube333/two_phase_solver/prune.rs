//! Pruning tables for the two phase solver.
//!
//! A pruning table stores, for every pair of coordinates `(a, b)`, the least number of moves
//! needed to bring both to their solved values. Each phase bounds its remaining search depth with
//! the largest of its pruning table lookups. Distances are found by a breadth first search out
//! from the solved pair, and stored as nibbles, two entries per byte.

use super::cache::CachedTable;
use super::coords::{
    ChoiceCoord, CornerPermCoord, FlipCoord, SliceEdgePermCoord, TwistCoord, UdEdgePermCoord,
};
use super::move_tables::{DrMove, MoveTable, SubMove};
use crate::coord::Coordinate;
use crate::cube333::{CubieCube, moves::Move333};
use crate::error::CacheError;

use log::debug;

use std::marker::PhantomData;

/// Marks an entry the search has not reached. It is also the first distance that can't be stored.
pub const EMPTY: u8 = 0xf;

/// A distance table over pairs of coordinates `A` and `B`, both moved by moves of type `M`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruningTable<M: SubMove, A: Coordinate<CubieCube>, B: Coordinate<CubieCube>> {
    table: Box<[u8]>,
    _phantom: PhantomData<(M, A, B)>,
}

impl<M: SubMove, A: Coordinate<CubieCube>, B: Coordinate<CubieCube>> PruningTable<M, A, B> {
    fn size() -> usize {
        A::count() * B::count()
    }

    fn index(a: A, b: B) -> usize {
        a.repr() * B::count() + b.repr()
    }

    fn get(&self, i: usize) -> u8 {
        (self.table[i >> 1] >> ((i & 1) * 4)) & 0xf
    }

    fn set(&mut self, i: usize, val: u8) {
        debug_assert!(val <= EMPTY);
        let shift = (i & 1) * 4;
        self.table[i >> 1] &= !(0xf << shift);
        self.table[i >> 1] |= val << shift;
    }

    /// Generate the table from the move tables of its two coordinates.
    pub fn generate<const MOVES: usize>(
        a_table: &MoveTable<M, A, MOVES>,
        b_table: &MoveTable<M, B, MOVES>,
    ) -> Self {
        let mut table = Self {
            table: vec![0xff; Self::size().div_ceil(2)].into_boxed_slice(),
            _phantom: PhantomData,
        };

        let start = (
            A::from_puzzle(&CubieCube::SOLVED),
            B::from_puzzle(&CubieCube::SOLVED),
        );
        table.set(Self::index(start.0, start.1), 0);
        let mut stack = vec![start];
        let mut next = vec![];
        let mut depth = 1;
        let mut filled = 1;

        while !stack.is_empty() && depth < EMPTY {
            while let Some((a, b)) = stack.pop() {
                for &m in M::MOVE_LIST {
                    let a2 = a_table.make_move(a, m);
                    let b2 = b_table.make_move(b, m);
                    let i = Self::index(a2, b2);
                    if table.get(i) == EMPTY {
                        table.set(i, depth);
                        next.push((a2, b2));
                    }
                }
            }

            filled += next.len();
            debug!("depth {depth}: {} new entries, {filled} of {}", next.len(), Self::size());

            stack = next;
            next = vec![];
            depth += 1;
        }

        table
    }

    /// A lower bound on the number of moves needed to solve both coordinates, or `EMPTY` if the
    /// pair can't be reached.
    pub fn distance(&self, a: A, b: B) -> u8 {
        self.get(Self::index(a, b))
    }
}

impl<M: SubMove, A: Coordinate<CubieCube>, B: Coordinate<CubieCube>> CachedTable
    for PruningTable<M, A, B>
{
    const EXTENSION: &'static str = "ptb";

    fn to_bytes(&self) -> Vec<u8> {
        self.table.to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CacheError> {
        let expected = Self::size().div_ceil(2);
        if bytes.len() != expected {
            return Err(CacheError::SizeMismatch {
                expected,
                found: bytes.len(),
            });
        }

        let table = Self {
            table: bytes.into(),
            _phantom: PhantomData,
        };
        if table.distance(
            A::from_puzzle(&CubieCube::SOLVED),
            B::from_puzzle(&CubieCube::SOLVED),
        ) != 0
        {
            return Err(CacheError::OutOfRange);
        }

        Ok(table)
    }
}

pub type TwistFlipPrune = PruningTable<Move333, TwistCoord, FlipCoord>;
pub type TwistChoicePrune = PruningTable<Move333, TwistCoord, ChoiceCoord>;
pub type FlipChoicePrune = PruningTable<Move333, FlipCoord, ChoiceCoord>;
pub type CornerSlicePrune = PruningTable<DrMove, CornerPermCoord, SliceEdgePermCoord>;
pub type UdEdgeSlicePrune = PruningTable<DrMove, UdEdgePermCoord, SliceEdgePermCoord>;
