//! Describe face turns relative to the three axes of the cube (L/R, U/D, F/B).
//!
//! Every turn of a 3x3x3 is a rotation of some set of layers about one axis. Layers along an axis
//! are numbered from the negative face (L, D, B) to the positive face (R, U, F), and a set of
//! layers is a bit mask: bit 0 is the negative outer layer, bit 1 the middle slice and bit 2 the
//! positive outer layer. Angles are quarter turns, measured clockwise when looking at the positive
//! face.

use super::moves::{Move333, Move333Type};

/// An axis of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    /// Left-Right axis
    LR,
    /// Up-Down axis
    UD,
    /// Front-Back axis
    FB,
}

impl Axis {
    /// All axes, in index order.
    pub const ALL: [Axis; 3] = [Axis::LR, Axis::UD, Axis::FB];

    /// The face turned by the positive outer layer of this axis.
    pub fn positive_face(self) -> Move333Type {
        match self {
            Axis::LR => Move333Type::R,
            Axis::UD => Move333Type::U,
            Axis::FB => Move333Type::F,
        }
    }

    /// The face turned by the negative outer layer of this axis.
    pub fn negative_face(self) -> Move333Type {
        self.positive_face().opposite()
    }
}

/// Layer mask of the negative outer layer (L, D or B).
pub const NEGATIVE_LAYER: u8 = 0b001;
/// Layer mask of the middle slice.
pub const MIDDLE_LAYER: u8 = 0b010;
/// Layer mask of the positive outer layer (R, U or F).
pub const POSITIVE_LAYER: u8 = 0b100;
/// Layer mask of all three layers, i.e. a whole cube rotation.
pub const ALL_LAYERS: u8 = 0b111;

/// A turn of some layers about an axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AxisTurn {
    /// The axis turned about.
    pub axis: Axis,
    /// The layers turned, see the module documentation.
    pub layer_mask: u8,
    /// Quarter turns, clockwise when looking at the positive face of the axis. Only the value
    /// modulo 4 matters.
    pub angle: i8,
}

impl AxisTurn {
    /// The turn that undoes this one.
    pub fn inverse(self) -> AxisTurn {
        AxisTurn {
            angle: -self.angle,
            ..self
        }
    }
}

impl From<Move333> for AxisTurn {
    fn from(mv: Move333) -> AxisTurn {
        let ty = mv.ty;
        let axis = ty.axis();
        // Clockwise on a negative face is anticlockwise seen from the positive face
        let (layer_mask, sign) = if ty == axis.positive_face() {
            (POSITIVE_LAYER, 1)
        } else {
            (NEGATIVE_LAYER, -1)
        };
        let angle = match mv.count {
            2 => 2,
            3 => -sign,
            _ => sign,
        };

        AxisTurn {
            axis,
            layer_mask,
            angle,
        }
    }
}

impl Move333 {
    /// Interpret an axis turn as a single face turn. Turns of the middle slice, of several layers
    /// and turns by a multiple of four quarter turns have no such interpretation.
    pub fn from_axis_turn(turn: AxisTurn) -> Option<Move333> {
        let (ty, sign) = match turn.layer_mask {
            POSITIVE_LAYER => (turn.axis.positive_face(), 1),
            NEGATIVE_LAYER => (turn.axis.negative_face(), -1),
            _ => return None,
        };
        let count = (turn.angle * sign).rem_euclid(4) as u8;

        (count != 0).then_some(Move333 { ty, count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;
    use crate::mv;

    use proptest::prelude::*;

    #[test]
    fn face_turn_angles() {
        let r = AxisTurn::from(mv!(R, 1));
        assert_eq!((r.axis, r.layer_mask, r.angle), (Axis::LR, POSITIVE_LAYER, 1));
        let l = AxisTurn::from(mv!(L, 1));
        assert_eq!((l.axis, l.layer_mask, l.angle), (Axis::LR, NEGATIVE_LAYER, -1));
        let d2 = AxisTurn::from(mv!(D, 2));
        assert_eq!((d2.axis, d2.layer_mask, d2.angle), (Axis::UD, NEGATIVE_LAYER, 2));
        let f3 = AxisTurn::from(mv!(F, 3));
        assert_eq!((f3.axis, f3.layer_mask, f3.angle), (Axis::FB, POSITIVE_LAYER, -1));
    }

    #[test]
    fn non_face_turns() {
        let slice = AxisTurn {
            axis: Axis::LR,
            layer_mask: MIDDLE_LAYER,
            angle: 1,
        };
        assert_eq!(Move333::from_axis_turn(slice), None);
        let identity = AxisTurn {
            axis: Axis::UD,
            layer_mask: POSITIVE_LAYER,
            angle: 4,
        };
        assert_eq!(Move333::from_axis_turn(identity), None);
    }

    proptest! {
        #[test]
        fn axis_turn_round_trip(mv in any::<Move333>()) {
            prop_assert_eq!(Move333::from_axis_turn(AxisTurn::from(mv)), Some(mv));
        }

        #[test]
        fn inverse_agrees(mv in any::<Move333>()) {
            prop_assert_eq!(AxisTurn::from(mv.inverse()).angle.rem_euclid(4), AxisTurn::from(mv).inverse().angle.rem_euclid(4));
        }
    }
}
