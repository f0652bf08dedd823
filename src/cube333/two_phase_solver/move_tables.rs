//! Move tables for each coordinate type

use super::cache::{CachedTable, bytes_to_words, words_to_bytes};
use super::coords::{
    ChoiceCoord, CornerPermCoord, FlipCoord, SliceEdgePermCoord, TwistCoord, UdEdgePermCoord,
};
use crate::coord::{Coordinate, FromCoordinate};
use crate::cube333::CubieCube;
use crate::cube333::moves::{Move333, Move333Type, MoveGenerator};
use crate::error::CacheError;
use crate::moves::{Cancellation, Move};

use std::marker::PhantomData;

#[cfg(test)]
use crate::moves::MoveSequence;
#[cfg(test)]
use proptest::strategy::Strategy;
#[cfg(test)]
use proptest_derive::Arbitrary;

/// A type that encodes a subset of the set of 3x3 moves, e.g. the moves of phase 2.
pub trait SubMove: Move + Copy
where
    Self: 'static,
{
    /// Interpret a move as a normal move to be applied to a `CubieCube`.
    fn into_move(self) -> Move333;

    /// The number of moves that exist
    fn count() -> usize;

    /// The list of all moves that this type encodes, in table column order. The length of the
    /// list should be `count()`.
    const MOVE_LIST: &'static [Self];

    /// Get the index of this move in the move list.
    fn index(self) -> usize;

    /// The face this move turns.
    fn face(self) -> Move333Type {
        self.into_move().ty
    }
}

/// A move table, which stores mappings of coordinate + move pairs to the coordinate that results
/// from applying the move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTable<M: SubMove, C: Coordinate<CubieCube>, const MOVES: usize> {
    table: Box<[[C; MOVES]]>,
    _phantom: PhantomData<M>,
}

impl<M: SubMove, C: Coordinate<CubieCube>, const MOVES: usize> MoveTable<M, C, MOVES>
where
    CubieCube: FromCoordinate<C>,
{
    /// Generate a move table. Every coordinate is decoded onto a scratch cube, then each move is
    /// applied, the result encoded, and the move undone again.
    pub fn generate() -> Self {
        debug_assert_eq!(M::count(), MOVES);
        debug_assert_eq!(M::MOVE_LIST.len(), MOVES);

        let mut cube = CubieCube::SOLVED;
        let table: Box<[[C; MOVES]]> = (0..C::count())
            .map(|n| {
                cube.set_coord(C::from_repr(n));
                std::array::from_fn(|i| {
                    let mv = M::MOVE_LIST[i].into_move();
                    cube.apply_move(mv);
                    let next = C::from_puzzle(&cube);
                    cube.apply_move(mv.inverse());
                    next
                })
            })
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Self {
            table,
            _phantom: PhantomData,
        }
    }
}

impl<M: SubMove, C: Coordinate<CubieCube>, const MOVES: usize> MoveTable<M, C, MOVES> {
    /// Determine what coordinate comes from applying a move.
    pub fn make_move(&self, coord: C, mv: M) -> C {
        self.table[coord.repr()][mv.index()]
    }

    /// Determine what coordinate comes from applying a sequence of moves.
    #[cfg(test)]
    pub fn make_moves(&self, coord: C, alg: MoveSequence<M>) -> C {
        alg.0.into_iter().fold(coord, |c, m| self.make_move(c, m))
    }
}

impl<M: SubMove, C: Coordinate<CubieCube>, const MOVES: usize> CachedTable
    for MoveTable<M, C, MOVES>
{
    const EXTENSION: &'static str = "mtb";

    fn to_bytes(&self) -> Vec<u8> {
        words_to_bytes(self.table.iter().flatten().map(|c| c.repr() as u32))
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CacheError> {
        let words = bytes_to_words(bytes, C::count() * MOVES)?;
        if words.iter().any(|&w| w as usize >= C::count()) {
            return Err(CacheError::OutOfRange);
        }

        let table = words
            .chunks_exact(MOVES)
            .map(|row| std::array::from_fn(|i| C::from_repr(row[i] as usize)))
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Ok(Self {
            table,
            _phantom: PhantomData,
        })
    }
}

impl SubMove for Move333 {
    fn into_move(self) -> Move333 {
        self
    }

    fn count() -> usize {
        18
    }

    const MOVE_LIST: &'static [Move333] = crate::cube333::moves::Htm::MOVE_LIST;

    fn index(self) -> usize {
        self.into()
    }
}

/// A move of phase 2: any turn of U or D, and half turns of the other faces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub enum DrMove {
    R2,
    L2,
    F2,
    B2,
    #[cfg_attr(test, proptest(strategy = "(1..=3u8).prop_map(DrMove::U)", weight = 3))]
    U(u8),
    #[cfg_attr(test, proptest(strategy = "(1..=3u8).prop_map(DrMove::D)", weight = 3))]
    D(u8),
}

impl Move for DrMove {
    fn inverse(self) -> Self {
        match self {
            DrMove::U(n) => DrMove::U((4 - n % 4) % 4),
            DrMove::D(n) => DrMove::D((4 - n % 4) % 4),
            _ => self,
        }
    }

    fn commutes_with(&self, b: &Self) -> bool {
        self.into_move().ty.axis() == b.into_move().ty.axis()
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        use DrMove as M;
        match (self, b) {
            (M::R2, M::R2) | (M::L2, M::L2) | (M::F2, M::F2) | (M::B2, M::B2) => {
                Cancellation::NoMove
            }
            (M::U(n), M::U(m)) if (n + m) % 4 == 0 => Cancellation::NoMove,
            (M::D(n), M::D(m)) if (n + m) % 4 == 0 => Cancellation::NoMove,
            (M::U(n), M::U(m)) => Cancellation::OneMove(M::U((n + m) % 4)),
            (M::D(n), M::D(m)) => Cancellation::OneMove(M::D((n + m) % 4)),
            _ => Cancellation::TwoMove(self, b),
        }
    }
}

impl SubMove for DrMove {
    fn into_move(self) -> Move333 {
        use crate::mv;
        match self {
            DrMove::R2 => mv!(R, 2),
            DrMove::L2 => mv!(L, 2),
            DrMove::F2 => mv!(F, 2),
            DrMove::B2 => mv!(B, 2),
            DrMove::U(n) => mv!(U, n),
            DrMove::D(n) => mv!(D, n),
        }
    }

    fn count() -> usize {
        10
    }

    // Same face order as `Htm`
    const MOVE_LIST: &'static [DrMove] = &[
        DrMove::R2,
        DrMove::L2,
        DrMove::U(1),
        DrMove::U(2),
        DrMove::U(3),
        DrMove::D(1),
        DrMove::D(2),
        DrMove::D(3),
        DrMove::F2,
        DrMove::B2,
    ];

    fn index(self) -> usize {
        match self {
            DrMove::R2 => 0,
            DrMove::L2 => 1,
            // n is always in 1..=3
            DrMove::U(n) => 1 + n as usize,
            DrMove::D(n) => 4 + n as usize,
            DrMove::F2 => 8,
            DrMove::B2 => 9,
        }
    }
}

pub type TwistMoveTable = MoveTable<Move333, TwistCoord, 18>;
pub type FlipMoveTable = MoveTable<Move333, FlipCoord, 18>;
pub type ChoiceMoveTable = MoveTable<Move333, ChoiceCoord, 18>;
pub type CornerPermMoveTable = MoveTable<DrMove, CornerPermCoord, 10>;
pub type UdEdgePermMoveTable = MoveTable<DrMove, UdEdgePermCoord, 10>;
pub type SliceEdgePermMoveTable = MoveTable<DrMove, SliceEdgePermCoord, 10>;

#[cfg(test)]
mod test {
    use super::*;

    use proptest::collection::vec;
    use proptest::prelude::*;

    use std::sync::OnceLock;

    struct Tables {
        twist: TwistMoveTable,
        flip: FlipMoveTable,
        choice: ChoiceMoveTable,
        corner: CornerPermMoveTable,
        ud_edge: UdEdgePermMoveTable,
        slice_edge: SliceEdgePermMoveTable,
    }

    fn tables() -> &'static Tables {
        static TABLES: OnceLock<Tables> = OnceLock::new();
        TABLES.get_or_init(|| Tables {
            twist: MoveTable::generate(),
            flip: MoveTable::generate(),
            choice: MoveTable::generate(),
            corner: MoveTable::generate(),
            ud_edge: MoveTable::generate(),
            slice_edge: MoveTable::generate(),
        })
    }

    #[test]
    fn move_lists_match_indices() {
        for (i, &m) in DrMove::MOVE_LIST.iter().enumerate() {
            assert_eq!(m.index(), i);
        }
        for (i, &m) in Move333::MOVE_LIST.iter().enumerate() {
            assert_eq!(m.index(), i);
        }
        assert_eq!(DrMove::MOVE_LIST.len(), DrMove::count());
    }

    /// Applying a move and then its inverse gives back every coordinate.
    fn undoes<M: SubMove, C: Coordinate<CubieCube> + std::fmt::Debug, const MOVES: usize>(
        table: &MoveTable<M, C, MOVES>,
    ) {
        for n in 0..C::count() {
            let c = C::from_repr(n);
            for &m in M::MOVE_LIST {
                assert_eq!(table.make_move(table.make_move(c, m), m.inverse()), c);
            }
        }
    }

    #[test]
    fn inverse_moves_undo() {
        let t = tables();
        undoes(&t.twist);
        undoes(&t.flip);
        undoes(&t.choice);
        undoes(&t.corner);
        undoes(&t.ud_edge);
        undoes(&t.slice_edge);
    }

    #[test]
    fn solved_is_fixed_by_phase_two() {
        let t = tables();
        let solved = CubieCube::SOLVED;
        for &m in DrMove::MOVE_LIST {
            let c = solved.clone().make_move(m.into_move());
            assert!(TwistCoord::from_puzzle(&c).solved());
            assert!(FlipCoord::from_puzzle(&c).solved());
            assert!(ChoiceCoord::from_puzzle(&c).solved());
        }
        let twist = TwistCoord::from_puzzle(&solved);
        assert_eq!(t.twist.make_move(twist, Move333::MOVE_LIST[1]), twist);
    }

    #[test]
    fn cache_round_trip() {
        let t = tables();
        let bytes = t.choice.to_bytes();
        assert_eq!(bytes.len(), ChoiceCoord::count() * 18 * 4);
        assert_eq!(ChoiceMoveTable::from_bytes(&bytes).unwrap(), t.choice);
        assert!(matches!(
            CornerPermMoveTable::from_bytes(&bytes),
            Err(CacheError::SizeMismatch { .. })
        ));
        let mut bad = bytes.clone();
        bad[0] = 0xff;
        bad[1] = 0xff;
        assert!(matches!(
            ChoiceMoveTable::from_bytes(&bad),
            Err(CacheError::OutOfRange)
        ));
    }

    /* We check that the following diagram commutes
     *
     *   CubieCube --apply_move--> CubieCube
     *      |                         |
     *      |                         |
     * from_puzzle              from_puzzle
     *      |                         |
     *      |                         |
     *      v                         v
     *    Coord -----apply_move---> Coord
     *
     * Move application should be compatible with coordinate translation.
     */

    fn diagram_commutes<
        M: SubMove,
        C: Coordinate<CubieCube> + std::fmt::Debug,
        const MOVES: usize,
    >(
        table: &MoveTable<M, C, MOVES>,
        p: CubieCube,
        mvs: MoveSequence<M>,
    ) {
        let l = table.make_moves(C::from_puzzle(&p), mvs.clone());
        let r = C::from_puzzle(&p.make_moves(mvs.0.into_iter().map(|m| m.into_move()).collect()));
        assert_eq!(l, r);
    }

    #[test]
    fn commutes_normal() {
        let t = tables();
        proptest!(|(scramble in vec(any::<Move333>(), 0..20).prop_map(MoveSequence), mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence))| {
            let p = CubieCube::SOLVED.make_moves(scramble);
            diagram_commutes(&t.twist, p.clone(), mvs.clone());
            diagram_commutes(&t.flip, p.clone(), mvs.clone());
            diagram_commutes(&t.choice, p, mvs);
        });
    }

    #[test]
    fn commutes_domino() {
        let t = tables();
        proptest!(|(scramble in vec(any::<DrMove>(), 0..20), mvs in vec(any::<DrMove>(), 0..20).prop_map(MoveSequence))| {
            let p = CubieCube::SOLVED.make_moves(scramble.into_iter().map(SubMove::into_move).collect());
            diagram_commutes(&t.corner, p.clone(), mvs.clone());
            diagram_commutes(&t.ud_edge, p.clone(), mvs.clone());
            diagram_commutes(&t.slice_edge, p, mvs);
        });
    }
}
