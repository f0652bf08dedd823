//! The facelet (sticker) level of a cube, and its conversion to and from `CubieCube`.
//!
//! Facelets are numbered face by face in the order U, D, L, R, F, B. Each face is read left to
//! right, top to bottom, looking at it from outside the cube with these faces on top:
//!
//! ```text
//! U (B on top)   0..=8        R (U on top)   27..=35
//! D (F on top)   9..=17       F (U on top)   36..=44
//! L (U on top)  18..=26       B (U on top)   45..=53
//! ```
//!
//! Any marker alphabet can be used, as long as the nine facelets of a face share the marker of its
//! center and the six centers are distinct.

use super::{Corner, CornerTwist, CubieCube, Edge, EdgeFlip};
use crate::error::{FaceletError, ParseError};

use std::fmt;
use std::str::FromStr;

/// A face of the cube, numbered in facelet order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Face {
    U,
    D,
    L,
    R,
    F,
    B,
}

impl Face {
    /// All faces, in facelet order.
    pub const ALL: [Face; 6] = [Face::U, Face::D, Face::L, Face::R, Face::F, Face::B];

    /// The letter naming this face.
    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::L => 'L',
            Face::R => 'R',
            Face::F => 'F',
            Face::B => 'B',
        }
    }

    /// The face named by a letter.
    pub fn from_letter(c: char) -> Option<Face> {
        Face::ALL.into_iter().find(|f| f.letter() == c)
    }

    /// The index of this face's center facelet.
    pub fn center(self) -> usize {
        self as usize * 9 + 4
    }
}

use Face::{B, D, F, L, R, U};

/// The facelets of each corner position, read clockwise starting from the U or D facelet.
const CORNER_FACELETS: [[usize; 3]; 8] = [
    [8, 27, 38],
    [6, 36, 20],
    [0, 18, 47],
    [2, 45, 29],
    [11, 44, 33],
    [9, 26, 42],
    [15, 53, 24],
    [17, 35, 51],
];

/// The facelets of each edge position, U or D facelet first (F or B for the slice edges).
const EDGE_FACELETS: [[usize; 2]; 12] = [
    [7, 37],
    [3, 19],
    [1, 46],
    [5, 28],
    [10, 43],
    [12, 25],
    [16, 52],
    [14, 34],
    [30, 41],
    [23, 39],
    [21, 50],
    [32, 48],
];

/// Row `3 * c + t` holds the faces of corner cubie `c` as read at a position where it has twist
/// `t`.
const CORNER_CUBIES: [[Face; 3]; 24] = [
    [U, R, F],
    [R, F, U],
    [F, U, R],
    [U, F, L],
    [F, L, U],
    [L, U, F],
    [U, L, B],
    [L, B, U],
    [B, U, L],
    [U, B, R],
    [B, R, U],
    [R, U, B],
    [D, F, R],
    [F, R, D],
    [R, D, F],
    [D, L, F],
    [L, F, D],
    [F, D, L],
    [D, B, L],
    [B, L, D],
    [L, D, B],
    [D, R, B],
    [R, B, D],
    [B, D, R],
];

/// Row `2 * e + f` holds the faces of edge cubie `e` as read at a position where it has flip `f`.
const EDGE_CUBIES: [[Face; 2]; 24] = [
    [U, F],
    [F, U],
    [U, L],
    [L, U],
    [U, B],
    [B, U],
    [U, R],
    [R, U],
    [D, F],
    [F, D],
    [D, L],
    [L, D],
    [D, B],
    [B, D],
    [D, R],
    [R, D],
    [R, F],
    [F, R],
    [L, F],
    [F, L],
    [L, B],
    [B, L],
    [R, B],
    [B, R],
];

const fn corner_code(faces: [Face; 3]) -> u8 {
    (faces[0] as u8 * 6 + faces[1] as u8) * 6 + faces[2] as u8
}

const fn edge_code(faces: [Face; 2]) -> u8 {
    faces[0] as u8 * 6 + faces[1] as u8
}

const CORNER_MAP: [u8; 24] = {
    let mut map = [0; 24];
    let mut i = 0;
    while i < 24 {
        map[i] = corner_code(CORNER_CUBIES[i]);
        i += 1;
    }
    map
};

const EDGE_MAP: [u8; 24] = {
    let mut map = [0; 24];
    let mut i = 0;
    while i < 24 {
        map[i] = edge_code(EDGE_CUBIES[i]);
        i += 1;
    }
    map
};

/// The 54 facelet markers of a cube, see the module documentation for the layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceletCube {
    markers: [char; 54],
}

impl FaceletCube {
    /// Create a facelet cube from its markers.
    pub fn new(markers: [char; 54]) -> Self {
        Self { markers }
    }

    /// The markers, in facelet order.
    pub fn markers(&self) -> &[char; 54] {
        &self.markers
    }

    /// The nine markers of a face.
    pub fn face(&self, face: Face) -> &[char] {
        let start = face as usize * 9;
        &self.markers[start..start + 9]
    }

    /// Replace the nine markers of a face.
    pub fn set_face(&mut self, face: Face, markers: [char; 9]) {
        let start = face as usize * 9;
        self.markers[start..start + 9].copy_from_slice(&markers);
    }

    /// Check that the markers describe a cube reachable from the solved state by turning faces,
    /// and build that state.
    ///
    /// The checks run in order and the first failing one is reported: distinct centers, markers
    /// and their counts, corner cubies and their twists, edge cubies and their flips, then the
    /// permutation parity.
    pub fn validate(&self) -> Result<CubieCube, FaceletError> {
        let faces = self.facelet_faces()?;
        let (co, cp) = validate_corners(&faces)?;
        let (eo, ep) = validate_edges(&faces)?;

        let cube = CubieCube { co, cp, eo, ep };
        if cube.corner_parity() != cube.edge_parity() {
            return Err(FaceletError::InvalidTotalParity);
        }

        Ok(cube)
    }

    /// Translate every marker to the face whose center carries it.
    fn facelet_faces(&self) -> Result<[Face; 54], FaceletError> {
        let centers = Face::ALL.map(|f| self.markers[f.center()]);
        for (i, c) in centers.iter().enumerate() {
            if centers[i + 1..].contains(c) {
                return Err(FaceletError::DuplicateCenterMarking);
            }
        }

        let mut faces = [Face::U; 54];
        let mut counts = [0; 6];
        for (face, &marker) in faces.iter_mut().zip(self.markers.iter()) {
            let i = centers
                .iter()
                .position(|&c| c == marker)
                .ok_or(FaceletError::InvalidMarker)?;
            *face = Face::ALL[i];
            counts[i] += 1;
        }

        if counts.iter().any(|&n| n != 9) {
            return Err(FaceletError::InvalidFaceletCount);
        }

        Ok(faces)
    }
}

fn validate_corners(faces: &[Face; 54]) -> Result<([CornerTwist; 8], [Corner; 8]), FaceletError> {
    let mut co = [CornerTwist::Oriented; 8];
    let mut cp = [Corner::URF; 8];
    let mut seen = [false; 8];

    for (pos, facelets) in CORNER_FACELETS.iter().enumerate() {
        let code = corner_code(facelets.map(|i| faces[i]));
        let row = CORNER_MAP
            .iter()
            .position(|&c| c == code)
            .ok_or(FaceletError::InvalidCornerMarkings)?;

        let cubie = row / 3;
        if std::mem::replace(&mut seen[cubie], true) {
            return Err(FaceletError::InvalidCornerMarkings);
        }
        cp[pos] = Corner::ALL[cubie];
        co[pos] = match row % 3 {
            0 => CornerTwist::Oriented,
            1 => CornerTwist::Clockwise,
            _ => CornerTwist::AntiClockwise,
        };
    }

    if co.iter().map(|&t| t as u8).sum::<u8>() % 3 != 0 {
        return Err(FaceletError::InvalidCornerParity);
    }

    Ok((co, cp))
}

fn validate_edges(faces: &[Face; 54]) -> Result<([EdgeFlip; 12], [Edge; 12]), FaceletError> {
    let mut eo = [EdgeFlip::Oriented; 12];
    let mut ep = [Edge::UF; 12];
    let mut seen = [false; 12];

    for (pos, facelets) in EDGE_FACELETS.iter().enumerate() {
        let code = edge_code(facelets.map(|i| faces[i]));
        let row = EDGE_MAP
            .iter()
            .position(|&c| c == code)
            .ok_or(FaceletError::InvalidEdgeMarkings)?;

        let cubie = row / 2;
        if std::mem::replace(&mut seen[cubie], true) {
            return Err(FaceletError::InvalidEdgeMarkings);
        }
        ep[pos] = Edge::ALL[cubie];
        eo[pos] = if row % 2 == 0 {
            EdgeFlip::Oriented
        } else {
            EdgeFlip::Flipped
        };
    }

    if eo.iter().filter(|&&f| f == EdgeFlip::Flipped).count() % 2 != 0 {
        return Err(FaceletError::InvalidEdgeParity);
    }

    Ok((eo, ep))
}

/// Render a cube with the face letters as markers.
impl From<&CubieCube> for FaceletCube {
    fn from(cube: &CubieCube) -> Self {
        let mut markers = [' '; 54];
        for f in Face::ALL {
            markers[f.center()] = f.letter();
        }

        for (pos, facelets) in CORNER_FACELETS.iter().enumerate() {
            let row = cube.cp[pos] as usize * 3 + cube.co[pos] as usize;
            for (&i, face) in facelets.iter().zip(CORNER_CUBIES[row]) {
                markers[i] = face.letter();
            }
        }

        for (pos, facelets) in EDGE_FACELETS.iter().enumerate() {
            let row = cube.ep[pos] as usize * 2 + cube.eo[pos] as usize;
            for (&i, face) in facelets.iter().zip(EDGE_CUBIES[row]) {
                markers[i] = face.letter();
            }
        }

        Self { markers }
    }
}

/// Shown as six face specifiers `f:mmmmmmmmm`, which [`FromStr`] reads back.
impl fmt::Display for FaceletCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, face) in Face::ALL.into_iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:", face.letter())?;
            for c in self.face(face) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// Reads either six whitespace separated face specifiers `f:mmmmmmmmm` (faces in any order), or
/// 54 markers in facelet order with any whitespace ignored.
impl FromStr for FaceletCube {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(':') {
            parse_face_specifiers(s)
        } else {
            parse_markers(s)
        }
    }
}

fn parse_face_specifiers(s: &str) -> Result<FaceletCube, ParseError> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    if tokens.len() != 6 {
        return Err(ParseError::SyntaxError);
    }

    let mut cube = FaceletCube::new([' '; 54]);
    let mut specified = [0; 6];

    for token in tokens {
        let chars: Vec<char> = token.chars().collect();
        if chars.len() != 11 {
            return Err(ParseError::SyntaxError);
        }
        let face = Face::from_letter(chars[0]).ok_or(ParseError::InvalidFace)?;
        if chars[1] != ':' {
            return Err(ParseError::SyntaxError);
        }
        if !chars[2..].iter().all(char::is_ascii_graphic) {
            return Err(ParseError::SyntaxError);
        }

        let mut markers = [' '; 9];
        markers.copy_from_slice(&chars[2..]);
        cube.set_face(face, markers);
        specified[face as usize] += 1;
    }

    if specified.iter().any(|&n| n != 1) {
        return Err(ParseError::IncompleteInput);
    }

    Ok(cube)
}

fn parse_markers(s: &str) -> Result<FaceletCube, ParseError> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    if !chars.iter().all(char::is_ascii_graphic) {
        return Err(ParseError::InvalidMarker);
    }

    let markers: [char; 54] = chars
        .try_into()
        .map_err(|_| ParseError::IncompleteInput)?;

    Ok(FaceletCube::new(markers))
}
