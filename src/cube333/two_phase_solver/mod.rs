//! An implementation of the two phase solver described [here](https://kociemba.org/cube.htm).
//!
//! Phase 1 turns the cube into the subgroup generated by `U, D, R2, L2, F2, B2`, where every
//! corner and edge is oriented and the slice edges sit in the slice. Phase 2 solves the cube using
//! only moves of that subgroup. Each phase is an iterative deepening search bounded by pruning
//! tables. Every phase 1 solution is handed to phase 2, and the search keeps going to find shorter
//! total solutions until it can prove it has the shortest one, runs out of its node budget, or is
//! cancelled.

mod cache;
mod coords;
mod move_tables;
mod prune;

use cache::{TableCache, load_or_generate};
use coords::{
    ChoiceCoord, CornerPermCoord, FlipCoord, SliceEdgePermCoord, TwistCoord, UdEdgePermCoord,
};
use move_tables::{
    ChoiceMoveTable, CornerPermMoveTable, DrMove, FlipMoveTable, SliceEdgePermMoveTable, SubMove,
    TwistMoveTable, UdEdgePermMoveTable,
};
use prune::{
    CornerSlicePrune, EMPTY, FlipChoicePrune, TwistChoicePrune, TwistFlipPrune, UdEdgeSlicePrune,
};

use super::facelet::FaceletCube;
use super::{CubieCube, moves::Move333};
use crate::coord::Coordinate;
use crate::error::FaceletError;
use crate::moves::MoveSequence;
use crate::notation::{DefaultNotation, Notation};
use crate::progress::ProgressObserver;

use log::{debug, info, warn};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Bigger than any bound the search deals with.
const HUGE: usize = 10_000;

/// No phase needs more moves than this.
const MAX_PHASE_LENGTH: usize = 30;

/// How many nodes a search may expand before it settles for the best solution it has.
pub const DEFAULT_NODE_LIMIT: u64 = 10_000_000;

/// Settings for a [`Solver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Where generated tables are stored between runs. Tables are always generated in memory
    /// when this is `None`.
    pub cache_dir: Option<PathBuf>,
    /// Once this many nodes have been expanded and some solution is known, the search stops and
    /// reports that solution.
    pub node_limit: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            cache_dir: None,
            node_limit: DEFAULT_NODE_LIMIT,
        }
    }
}

impl SolverConfig {
    /// A configuration that stops at the first complete solution.
    pub fn first_solution() -> Self {
        Self::default().with_node_limit(1)
    }

    /// Cache tables in `dir`.
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    /// Set the node limit.
    pub fn with_node_limit(mut self, node_limit: u64) -> Self {
        self.node_limit = node_limit;
        self
    }
}

/// How a search ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    /// No solution exists within the search bounds. Legal cubes never end up here.
    NotFound,
    /// A solution was found, but there may be a shorter one.
    Found,
    /// The solution found is the shortest the search can produce.
    OptimumFound,
    /// The search was cancelled.
    Abort,
}

/// The result of a search: its status and the best solution found, if any. A cancelled search
/// still reports the best solution it had found before stopping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    /// How the search ended.
    pub status: SolveStatus,
    /// The best solution found.
    pub solution: Option<Solution>,
}

/// A solution, split at the point where the cube enters the phase 2 subgroup.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    phase1: MoveSequence<Move333>,
    phase2: MoveSequence<Move333>,
}

impl Solution {
    /// The moves taking the cube into the phase 2 subgroup.
    pub fn phase1(&self) -> &MoveSequence<Move333> {
        &self.phase1
    }

    /// The moves solving the cube from there.
    pub fn phase2(&self) -> &MoveSequence<Move333> {
        &self.phase2
    }

    /// The whole solution, with moves that cancel across the two phases merged.
    pub fn moves(&self) -> MoveSequence<Move333> {
        self.phase1.clone().append(self.phase2.clone()).cancel()
    }

    /// Number of moves in both phases, without cancelling anything.
    pub fn len(&self) -> usize {
        self.phase1.len() + self.phase2.len()
    }

    /// Whether the solution has no moves, meaning the cube was already solved.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render the solution like `R U . F2 (3f)`: the two phases separated by a dot, followed by
    /// the length. The length is marked with a `*` when phase 2 is empty.
    pub fn render(&self, notation: &dyn Notation) -> String {
        let mut parts = Vec::new();
        if !self.phase1.is_empty() {
            parts.push(self.phase1.render(notation));
        }
        parts.push(".".to_owned());
        if !self.phase2.is_empty() {
            parts.push(self.phase2.render(notation));
        }
        let star = if self.phase2.is_empty() { "*" } else { "" };
        parts.push(format!("({}f{star})", self.len()));
        parts.join(" ")
    }
}

trait PhaseCube: Copy {
    type Move: SubMove;

    fn from_cubie(cube: &CubieCube) -> Self;

    fn make_move(self, mover: &Mover, m: Self::Move) -> Self;

    /// A lower bound on the moves left in this phase.
    fn bound(self, pruner: &Pruner) -> usize;
}

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Hash)]
struct P1Cube {
    twist: TwistCoord,
    flip: FlipCoord,
    choice: ChoiceCoord,
}

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Hash)]
struct P2Cube {
    corner: CornerPermCoord,
    ud_edge: UdEdgePermCoord,
    slice: SliceEdgePermCoord,
}

/// Pruning distances of `EMPTY` mean the state can't be solved at all.
fn prune_value(d: u8) -> usize {
    if d == EMPTY { HUGE } else { d as usize }
}

impl PhaseCube for P1Cube {
    type Move = Move333;

    fn from_cubie(c: &CubieCube) -> P1Cube {
        P1Cube {
            twist: TwistCoord::from_puzzle(c),
            flip: FlipCoord::from_puzzle(c),
            choice: ChoiceCoord::from_puzzle(c),
        }
    }

    fn make_move(self, mover: &Mover, m: Move333) -> P1Cube {
        P1Cube {
            twist: mover.twist.make_move(self.twist, m),
            flip: mover.flip.make_move(self.flip, m),
            choice: mover.choice.make_move(self.choice, m),
        }
    }

    fn bound(self, pruner: &Pruner) -> usize {
        let twist_flip = pruner.twist_flip.distance(self.twist, self.flip);
        let twist_choice = pruner.twist_choice.distance(self.twist, self.choice);
        let flip_choice = pruner.flip_choice.distance(self.flip, self.choice);
        prune_value(twist_flip.max(twist_choice).max(flip_choice))
    }
}

impl PhaseCube for P2Cube {
    type Move = DrMove;

    fn from_cubie(c: &CubieCube) -> P2Cube {
        P2Cube {
            corner: CornerPermCoord::from_puzzle(c),
            ud_edge: UdEdgePermCoord::from_puzzle(c),
            slice: SliceEdgePermCoord::from_puzzle(c),
        }
    }

    fn make_move(self, mover: &Mover, m: DrMove) -> P2Cube {
        P2Cube {
            corner: mover.corner_perm.make_move(self.corner, m),
            ud_edge: mover.ud_edge_perm.make_move(self.ud_edge, m),
            slice: mover.slice_edge_perm.make_move(self.slice, m),
        }
    }

    fn bound(self, pruner: &Pruner) -> usize {
        let corner_slice = pruner.corner_slice.distance(self.corner, self.slice);
        let ud_edge_slice = pruner.ud_edge_slice.distance(self.ud_edge, self.slice);
        prune_value(corner_slice.max(ud_edge_slice))
    }
}

/// Whether `m` can be skipped after `history` without losing any solutions: turning the same
/// face twice in a row, turning opposite faces in the non canonical order, and `X Y X` with `Y`
/// opposite to `X` can all be written shorter or in another order.
fn is_redundant<M: SubMove>(history: &[M], m: M) -> bool {
    let face = m.face();
    match history {
        [.., prev] if prev.face() == face => true,
        [.., prev] if prev.face() == face.opposite() && face < prev.face() => true,
        [.., before, prev] => before.face() == face && prev.face() == face.opposite(),
        _ => false,
    }
}

struct Mover {
    twist: TwistMoveTable,
    flip: FlipMoveTable,
    choice: ChoiceMoveTable,
    corner_perm: CornerPermMoveTable,
    ud_edge_perm: UdEdgePermMoveTable,
    slice_edge_perm: SliceEdgePermMoveTable,
}

struct Pruner {
    twist_flip: TwistFlipPrune,
    twist_choice: TwistChoicePrune,
    flip_choice: FlipChoicePrune,
    corner_slice: CornerSlicePrune,
    ud_edge_slice: UdEdgeSlicePrune,
}

struct Tables {
    mover: Mover,
    pruner: Pruner,
}

impl Tables {
    fn load(cache: Option<&TableCache>) -> Self {
        let mover = Mover {
            twist: load_or_generate(cache, "Twist", TwistMoveTable::generate),
            flip: load_or_generate(cache, "Flip", FlipMoveTable::generate),
            choice: load_or_generate(cache, "Choice", ChoiceMoveTable::generate),
            corner_perm: load_or_generate(cache, "CrnrPerm", CornerPermMoveTable::generate),
            ud_edge_perm: load_or_generate(cache, "EdgePerm", UdEdgePermMoveTable::generate),
            slice_edge_perm: load_or_generate(cache, "SlicPerm", SliceEdgePermMoveTable::generate),
        };

        let pruner = Pruner {
            twist_flip: load_or_generate(cache, "TwstFlip", || {
                TwistFlipPrune::generate(&mover.twist, &mover.flip)
            }),
            twist_choice: load_or_generate(cache, "TwstChce", || {
                TwistChoicePrune::generate(&mover.twist, &mover.choice)
            }),
            flip_choice: load_or_generate(cache, "FlipChce", || {
                FlipChoicePrune::generate(&mover.flip, &mover.choice)
            }),
            corner_slice: load_or_generate(cache, "CrnrSlic", || {
                CornerSlicePrune::generate(&mover.corner_perm, &mover.slice_edge_perm)
            }),
            ud_edge_slice: load_or_generate(cache, "EdgeSlic", || {
                UdEdgeSlicePrune::generate(&mover.ud_edge_perm, &mover.slice_edge_perm)
            }),
        };

        Self { mover, pruner }
    }
}

/// A cube solver that uses Kociemba's two phase algorithm.
///
/// Building a solver generates (or loads) all of its tables, which takes a while. The tables are
/// immutable afterwards and shared between clones, so a solver can be cloned into other threads.
#[derive(Clone)]
pub struct Solver {
    tables: Arc<Tables>,
    config: SolverConfig,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl Solver {
    /// Create a solver.
    pub fn new(config: SolverConfig) -> Self {
        let start = Instant::now();
        let cache = config.cache_dir.clone().map(TableCache::new);
        let tables = Arc::new(Tables::load(cache.as_ref()));
        info!("tables ready in {:.2?}", start.elapsed());

        Self { tables, config }
    }

    /// The solver's configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// A solver sharing this one's tables, with a different node limit.
    pub fn with_node_limit(&self, node_limit: u64) -> Self {
        Self {
            tables: Arc::clone(&self.tables),
            config: self.config.clone().with_node_limit(node_limit),
        }
    }

    /// Search for a sequence of moves solving the cube. Progress notes are sent to `progress`,
    /// which is also polled for cancellation at every node.
    pub fn solve(&self, cube: &CubieCube, progress: &dyn ProgressObserver) -> SolveOutcome {
        if !cube.is_solvable() {
            warn!("cube can't be solved, not searching");
            progress.complete();
            return SolveOutcome {
                status: SolveStatus::NotFound,
                solution: None,
            };
        }

        progress.set_note("Searching...");
        let start = Instant::now();
        let mut search = Search::new(&self.tables, &self.config, cube, progress);
        let outcome = search.run();
        progress.complete();

        let status = if search.canceled || progress.is_canceled() {
            SolveStatus::Abort
        } else if outcome != Outcome::Optimum && search.best.is_some() {
            SolveStatus::Found
        } else {
            match outcome {
                Outcome::NotFound => SolveStatus::NotFound,
                Outcome::Found => SolveStatus::Found,
                Outcome::Optimum => SolveStatus::OptimumFound,
                Outcome::Abort => SolveStatus::Abort,
            }
        };

        info!(
            "{status:?} after {} nodes in {:.2?}",
            search.nodes,
            start.elapsed()
        );

        SolveOutcome {
            status,
            solution: search.best,
        }
    }

    /// Validate facelet markings and solve the resulting cube.
    pub fn solve_facelets(
        &self,
        facelets: &FaceletCube,
        progress: &dyn ProgressObserver,
    ) -> Result<SolveOutcome, FaceletError> {
        let cube = facelets.validate()?;
        Ok(self.solve(&cube, progress))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Outcome {
    NotFound,
    Found,
    Optimum,
    Abort,
}

/// The state of one search.
struct Search<'a> {
    tables: &'a Tables,
    progress: &'a dyn ProgressObserver,
    scramble: &'a CubieCube,
    node_limit: u64,
    nodes: u64,
    canceled: bool,
    phase1: Vec<Move333>,
    phase2: Vec<DrMove>,
    threshold1: usize,
    new_threshold1: usize,
    threshold2: usize,
    new_threshold2: usize,
    min_len: usize,
    best: Option<Solution>,
}

impl<'a> Search<'a> {
    fn new(
        tables: &'a Tables,
        config: &SolverConfig,
        scramble: &'a CubieCube,
        progress: &'a dyn ProgressObserver,
    ) -> Self {
        Self {
            tables,
            progress,
            scramble,
            node_limit: config.node_limit,
            nodes: 0,
            canceled: false,
            phase1: Vec::new(),
            phase2: Vec::new(),
            threshold1: 0,
            new_threshold1: HUGE,
            threshold2: 0,
            new_threshold2: HUGE,
            min_len: HUGE,
            best: None,
        }
    }

    fn poll_canceled(&mut self) -> bool {
        if !self.canceled && self.progress.is_canceled() {
            debug!("cancelled after {} nodes", self.nodes);
            self.canceled = true;
        }
        self.canceled
    }

    fn run(&mut self) -> Outcome {
        let root = P1Cube::from_cubie(self.scramble);
        self.threshold1 = root.bound(&self.tables.pruner);

        loop {
            if self.threshold1 > MAX_PHASE_LENGTH {
                return Outcome::NotFound;
            }
            debug!("phase 1 threshold {}", self.threshold1);

            self.new_threshold1 = HUGE;
            let outcome = self.search1(root);
            if outcome != Outcome::NotFound {
                return outcome;
            }
            self.threshold1 = self.new_threshold1;
        }
    }

    fn search1(&mut self, cube: P1Cube) -> Outcome {
        let tables = self.tables;
        let depth = self.phase1.len();
        let cost = cube.bound(&tables.pruner);

        if cost == 0 {
            let outcome = self.solve2();
            if outcome == Outcome::Optimum || (outcome == Outcome::Found && depth == 0) {
                return outcome;
            }
            if (self.nodes >= self.node_limit && self.best.is_some()) || self.canceled {
                return Outcome::Abort;
            }
        }

        let total = depth + cost;
        if total > self.threshold1 {
            self.new_threshold1 = self.new_threshold1.min(total);
            return Outcome::NotFound;
        }
        if depth >= self.min_len {
            return Outcome::Optimum;
        }

        for &m in Move333::MOVE_LIST {
            if is_redundant(&self.phase1, m) {
                continue;
            }
            if self.poll_canceled() {
                return Outcome::Abort;
            }
            self.nodes += 1;

            let next = cube.make_move(&tables.mover, m);
            self.phase1.push(m);
            let outcome = self.search1(next);
            self.phase1.pop();

            if outcome != Outcome::NotFound {
                return outcome;
            }
        }

        Outcome::NotFound
    }

    fn solve2(&mut self) -> Outcome {
        let mut cube = self.scramble.clone();
        for &m in &self.phase1 {
            cube.apply_move(m);
        }
        let root = P2Cube::from_cubie(&cube);
        self.threshold2 = root.bound(&self.tables.pruner);

        loop {
            if self.threshold2 > MAX_PHASE_LENGTH {
                return Outcome::NotFound;
            }

            self.new_threshold2 = HUGE;
            let outcome = self.search2(root);
            if outcome != Outcome::NotFound {
                return outcome;
            }
            self.threshold2 = self.new_threshold2;
        }
    }

    fn search2(&mut self, cube: P2Cube) -> Outcome {
        let tables = self.tables;
        let depth = self.phase2.len();
        let cost = cube.bound(&tables.pruner);

        if cost == 0 {
            self.remember_solution();
            return if depth == 0 {
                Outcome::Optimum
            } else {
                Outcome::Found
            };
        }

        let total = depth + cost;
        if total > self.threshold2 {
            self.new_threshold2 = self.new_threshold2.min(total);
            return Outcome::NotFound;
        }
        // at least one more move is needed, so nothing shorter than the best can be found here
        if self.phase1.len() + depth + 1 >= self.min_len {
            return Outcome::Abort;
        }

        for &m in DrMove::MOVE_LIST {
            if is_redundant(&self.phase2, m) {
                continue;
            }
            if self.poll_canceled() {
                return Outcome::Abort;
            }
            self.nodes += 1;

            let next = cube.make_move(&tables.mover, m);
            self.phase2.push(m);
            let outcome = self.search2(next);
            self.phase2.pop();

            if outcome != Outcome::NotFound {
                return outcome;
            }
        }

        Outcome::NotFound
    }

    fn remember_solution(&mut self) {
        let len = self.phase1.len() + self.phase2.len();
        if len >= self.min_len {
            return;
        }

        let solution = Solution {
            phase1: MoveSequence(self.phase1.clone()),
            phase2: self.phase2.iter().map(|&m| m.into_move()).collect(),
        };
        debug!("{len} move solution after {} nodes", self.nodes);
        self.progress
            .set_note(&format!("Found: {}", solution.render(&DefaultNotation)));

        self.min_len = len;
        self.best = Some(solution);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cube333::CornerTwist;
    use crate::cube333::moves::Move333Type;
    use crate::mv;
    use crate::progress::{CancelToken, NullProgress};

    use proptest::collection::vec;
    use proptest::prelude::*;
    use proptest::test_runner::{Config, TestRunner};

    use std::sync::OnceLock;

    fn solver() -> &'static Solver {
        static SOLVER: OnceLock<Solver> = OnceLock::new();
        SOLVER.get_or_init(Solver::default)
    }

    fn scramble(alg: &str) -> CubieCube {
        let mvs = MoveSequence::<Move333>::parse(alg, &DefaultNotation).unwrap();
        CubieCube::SOLVED.make_moves(mvs)
    }

    fn check_solves(cube: &CubieCube, outcome: &SolveOutcome) {
        let solution = outcome.solution.as_ref().unwrap();
        assert!(cube.clone().make_moves(solution.moves()).is_solved());
    }

    #[test]
    fn solved_cube_needs_no_moves() {
        let outcome = solver().solve(&CubieCube::SOLVED, &NullProgress);
        assert_eq!(outcome.status, SolveStatus::OptimumFound);
        assert!(outcome.solution.unwrap().is_empty());
    }

    #[test]
    fn short_scramble_is_solved_optimally() {
        let cube = scramble("R U");
        let outcome = solver().solve(&cube, &NullProgress);
        assert_eq!(outcome.status, SolveStatus::OptimumFound);
        check_solves(&cube, &outcome);
        assert_eq!(outcome.solution.unwrap().len(), 2);
    }

    #[test]
    fn phase_two_scramble() {
        // already in the phase 2 subgroup, so the first phase 2 solution is reported
        let cube = scramble("U R2");
        let outcome = solver().solve(&cube, &NullProgress);
        assert_eq!(outcome.status, SolveStatus::Found);
        check_solves(&cube, &outcome);
        let solution = outcome.solution.unwrap();
        assert!(solution.phase1().is_empty());
        assert_eq!(solution.phase2().0, vec![mv!(R, 2), mv!(U, 3)]);
    }

    #[test]
    fn solves_random_scrambles() {
        let solver = solver().with_node_limit(1);
        let mut runner = TestRunner::new(Config::with_cases(16));
        runner
            .run(
                &vec(any::<Move333>(), 0..25).prop_map(MoveSequence),
                |mvs| {
                    let cube = CubieCube::SOLVED.make_moves(mvs);
                    let outcome = solver.solve(&cube, &NullProgress);
                    prop_assert!(matches!(
                        outcome.status,
                        SolveStatus::Found | SolveStatus::OptimumFound
                    ));
                    check_solves(&cube, &outcome);
                    Ok(())
                },
            )
            .unwrap();
    }

    #[test]
    fn cancelled_search_aborts() {
        let token = CancelToken::new();
        token.cancel();
        let outcome = solver().solve(&scramble("R U F D2 L' B"), &token);
        assert_eq!(outcome.status, SolveStatus::Abort);
    }

    /// Cancels on the first poll after `after` polls, or on the first poll after a solution is
    /// reported when `after` is `None`.
    struct CancelLater {
        after: Option<u64>,
        polls: std::cell::Cell<u64>,
        found: std::cell::Cell<bool>,
    }

    impl CancelLater {
        fn new(after: Option<u64>) -> Self {
            Self {
                after,
                polls: Default::default(),
                found: Default::default(),
            }
        }
    }

    impl ProgressObserver for CancelLater {
        fn set_note(&self, note: &str) {
            if note.starts_with("Found: ") {
                self.found.set(true);
            }
        }

        fn is_canceled(&self) -> bool {
            self.polls.set(self.polls.get() + 1);
            match self.after {
                Some(after) => self.polls.get() > after,
                None => self.found.get(),
            }
        }

        fn complete(&self) {}
    }

    const LONG_SCRAMBLE: &str = "R U F D2 L' B R2 U' F' D L2 B' U R' F2 D' L B2";

    #[test]
    fn cancelling_mid_search_stops_promptly() {
        let progress = CancelLater::new(Some(5000));
        let outcome = solver().solve(&scramble(LONG_SCRAMBLE), &progress);
        assert_eq!(outcome.status, SolveStatus::Abort);
        // every expanded node is polled first, and polling stops once cancelled
        assert!(progress.polls.get() <= 5001);
    }

    #[test]
    fn cancelled_search_keeps_best_solution() {
        let cube = scramble(LONG_SCRAMBLE);
        let progress = CancelLater::new(None);
        let outcome = solver().solve(&cube, &progress);
        assert_eq!(outcome.status, SolveStatus::Abort);
        check_solves(&cube, &outcome);
    }

    #[test]
    fn unsolvable_cube_is_not_searched() {
        let mut cube = CubieCube::SOLVED;
        cube.co[0] = CornerTwist::Clockwise;
        let outcome = solver().solve(&cube, &NullProgress);
        assert_eq!(outcome.status, SolveStatus::NotFound);
        assert_eq!(outcome.solution, None);
    }

    #[test]
    fn solves_facelets() {
        let cube = scramble("F R' D2 B U L");
        let facelets = FaceletCube::from(&cube);
        let outcome = solver()
            .with_node_limit(1)
            .solve_facelets(&facelets, &NullProgress)
            .unwrap();
        check_solves(&cube, &outcome);

        let mut markers = *facelets.markers();
        markers[13] = markers[4];
        assert_eq!(
            solver().solve_facelets(&FaceletCube::new(markers), &NullProgress),
            Err(FaceletError::DuplicateCenterMarking)
        );
    }

    #[test]
    fn renders_solutions() {
        let solution = Solution {
            phase1: MoveSequence(vec![mv!(R, 1), mv!(U, 3)]),
            phase2: MoveSequence(vec![mv!(F, 2)]),
        };
        assert_eq!(solution.render(&DefaultNotation), "R U' . F2 (3f)");
        assert_eq!(solution.len(), 3);

        let solution = Solution {
            phase1: MoveSequence(vec![mv!(R, 1), mv!(U, 3)]),
            phase2: MoveSequence::default(),
        };
        assert_eq!(solution.render(&DefaultNotation), "R U' . (2f*)");
        assert_eq!(Solution::default().render(&DefaultNotation), ". (0f*)");
    }

    #[test]
    fn phases_are_joined_with_cancellation() {
        let solution = Solution {
            phase1: MoveSequence(vec![mv!(R, 1), mv!(U, 1)]),
            phase2: MoveSequence(vec![mv!(U, 2), mv!(F, 2)]),
        };
        assert_eq!(solution.moves().0, vec![mv!(R, 1), mv!(U, 3), mv!(F, 2)]);
    }

    #[test]
    fn redundant_moves() {
        assert!(!is_redundant(&[], mv!(R, 1)));
        assert!(is_redundant(&[mv!(R, 1)], mv!(R, 2)));
        assert!(!is_redundant(&[mv!(R, 1)], mv!(L, 1)));
        assert!(is_redundant(&[mv!(L, 1)], mv!(R, 1)));
        assert!(is_redundant(&[mv!(L, 1), mv!(R, 2)], mv!(L, 3)));
        assert!(!is_redundant(&[mv!(L, 1), mv!(U, 2)], mv!(L, 3)));
        assert!(is_redundant(&[DrMove::U(1)], DrMove::U(3)));
        assert!(is_redundant(&[DrMove::D(1)], DrMove::U(3)));
        assert!(!is_redundant(&[DrMove::U(1)], DrMove::D(3)));
    }

    #[test]
    fn reports_progress() {
        use std::cell::RefCell;

        #[derive(Default)]
        struct Notes {
            notes: RefCell<Vec<String>>,
            completed: RefCell<bool>,
        }

        impl ProgressObserver for Notes {
            fn set_note(&self, note: &str) {
                self.notes.borrow_mut().push(note.to_owned());
            }

            fn is_canceled(&self) -> bool {
                false
            }

            fn complete(&self) {
                *self.completed.borrow_mut() = true;
            }
        }

        let progress = Notes::default();
        solver().solve(&scramble("R U"), &progress);
        let notes = progress.notes.borrow();
        assert_eq!(notes[0], "Searching...");
        assert!(notes.last().unwrap().starts_with("Found: "));
        assert!(notes.last().unwrap().ends_with("(2f*)"));
        assert!(*progress.completed.borrow());
    }

    #[test]
    fn config_builders() {
        let config = SolverConfig::first_solution().with_cache_dir("/tmp/tables");
        assert_eq!(config.node_limit, 1);
        assert_eq!(config.cache_dir, Some(PathBuf::from("/tmp/tables")));
        assert_eq!(SolverConfig::default().node_limit, DEFAULT_NODE_LIMIT);
        assert_eq!(solver().with_node_limit(5).config().node_limit, 5);
    }

    #[test]
    fn cached_tables_are_reused() {
        let dir = cache::test::temp_dir("solver");
        let config = SolverConfig::first_solution().with_cache_dir(&dir);
        let first = Solver::new(config.clone());
        assert!(dir.join("TwstFlip.ptb").exists());
        assert!(dir.join("Twist.mtb").exists());

        let second = Solver::new(config);
        let cube = scramble("B2 L U' R F");
        assert_eq!(
            first.solve(&cube, &NullProgress),
            second.solve(&cube, &NullProgress)
        );
        let _ = std::fs::remove_dir_all(&dir);
    }
}
