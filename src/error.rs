//! This module defines general error types used throughout the crate.

use thiserror::Error;

/// Error type for converting integers to (C like) enums using TryFrom
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TryFromIntToEnumError {
    /// attempted to convert integer into enum value, but integer was out of bounds
    #[error("attempted to convert integer into enum value, but integer was out of bounds")]
    OutOfBounds,
}

/// The ways a set of facelet markings can fail to describe a reachable cube. Validation stops at
/// the first stage that fails, so only one of these is ever reported for a given cube.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FaceletError {
    /// A facelet carries a marking that no center facelet carries.
    #[error("Facelet marking does not match any center marking")]
    InvalidMarker,
    /// Some marking does not appear on exactly 9 facelets.
    #[error("There must be 9 facelets for each marking")]
    InvalidFaceletCount,
    /// Two centers carry the same marking.
    #[error("Duplicate center marking")]
    DuplicateCenterMarking,
    /// The three facelets of some corner do not form a corner cubie.
    #[error("Invalid corner markings")]
    InvalidCornerMarkings,
    /// The corner twists do not sum to a multiple of 3.
    #[error("Invalid corner orientation parity")]
    InvalidCornerParity,
    /// The two facelets of some edge do not form an edge cubie.
    #[error("Invalid edge markings")]
    InvalidEdgeMarkings,
    /// An odd number of edges are flipped.
    #[error("Invalid edge orientation parity")]
    InvalidEdgeParity,
    /// The corner and edge permutations have different parities.
    #[error("Invalid total permutation parity")]
    InvalidTotalParity,
}

/// Errors from reading a textual cube description.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// A face specifier names a face other than U, D, L, R, F or B.
    #[error("Invalid face specifier")]
    InvalidFace,
    /// A marker in a plain facelet string is not a printable ASCII character.
    #[error("Invalid marker")]
    InvalidMarker,
    /// Not every face was specified exactly once, or there are not 54 markers.
    #[error("Incomplete input")]
    IncompleteInput,
    /// The input is not six face specifiers of the shape `f:mmmmmmmmm` with printable markers.
    #[error("Syntax error")]
    SyntaxError,
}

/// Error for move tokens which could not be read by a notation.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum MoveParseError {
    /// The notation does not know this token.
    #[error("unknown move token `{0}`")]
    UnknownToken(String),
    /// The token names a turn that is not a single outer face turn of a 3x3x3.
    #[error("`{0}` is not a face turn")]
    NotAFaceTurn(String),
}

/// Errors from reading or writing a cached table. These never escape the solver: a table that
/// cannot be loaded is generated instead.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The file could not be read or written.
    #[error("cache file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The file holds a different number of entries than the table needs.
    #[error("cache file holds {found} entries, expected {expected}")]
    SizeMismatch {
        /// Entries the table needs.
        expected: usize,
        /// Entries found in the file.
        found: usize,
    },
    /// An entry is not a valid value for the table.
    #[error("cache file holds an out of range entry")]
    OutOfRange,
}
