//! Text notations for cube moves.
//!
//! The solver only ever produces face turns, but a notation is free to name any axis turn (slices,
//! wide turns, rotations). Solutions are rendered and scrambles read through the [`Notation`]
//! trait so a front end can swap in its own tokens.

use crate::cube333::axis::{
    ALL_LAYERS, Axis, AxisTurn, MIDDLE_LAYER, NEGATIVE_LAYER, POSITIVE_LAYER,
};
use crate::error::MoveParseError;

/// Maps axis turns to printable tokens and back.
pub trait Notation {
    /// Render a turn of the layers in `layer_mask` about `axis` by `angle` quarter turns. Returns
    /// `None` when the notation has no token for the turn.
    fn move_to_token(&self, axis: Axis, layer_mask: u8, angle: i8) -> Option<String>;

    /// Read a single token back into the turn it names.
    fn token_to_move(&self, token: &str) -> Result<AxisTurn, MoveParseError>;
}

/// The usual notation: `R`, `R'`, `R2` for face turns, `M E S` for slices, `Rw`-style wide turns
/// and `x y z` for rotations.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct DefaultNotation;

// (name, axis, layers, direction of the name's clockwise turn relative to the axis)
const NAMES: [(&str, Axis, u8, i8); 18] = [
    ("R", Axis::LR, POSITIVE_LAYER, 1),
    ("L", Axis::LR, NEGATIVE_LAYER, -1),
    ("U", Axis::UD, POSITIVE_LAYER, 1),
    ("D", Axis::UD, NEGATIVE_LAYER, -1),
    ("F", Axis::FB, POSITIVE_LAYER, 1),
    ("B", Axis::FB, NEGATIVE_LAYER, -1),
    ("M", Axis::LR, MIDDLE_LAYER, -1),
    ("E", Axis::UD, MIDDLE_LAYER, -1),
    ("S", Axis::FB, MIDDLE_LAYER, 1),
    ("Rw", Axis::LR, POSITIVE_LAYER | MIDDLE_LAYER, 1),
    ("Lw", Axis::LR, NEGATIVE_LAYER | MIDDLE_LAYER, -1),
    ("Uw", Axis::UD, POSITIVE_LAYER | MIDDLE_LAYER, 1),
    ("Dw", Axis::UD, NEGATIVE_LAYER | MIDDLE_LAYER, -1),
    ("Fw", Axis::FB, POSITIVE_LAYER | MIDDLE_LAYER, 1),
    ("Bw", Axis::FB, NEGATIVE_LAYER | MIDDLE_LAYER, -1),
    ("x", Axis::LR, ALL_LAYERS, 1),
    ("y", Axis::UD, ALL_LAYERS, 1),
    ("z", Axis::FB, ALL_LAYERS, 1),
];

impl Notation for DefaultNotation {
    fn move_to_token(&self, axis: Axis, layer_mask: u8, angle: i8) -> Option<String> {
        let &(name, _, _, sign) = NAMES
            .iter()
            .find(|&&(_, a, l, _)| a == axis && l == layer_mask)?;

        let suffix = match (angle * sign).rem_euclid(4) {
            1 => "",
            2 => "2",
            3 => "'",
            _ => return None,
        };

        Some(format!("{name}{suffix}"))
    }

    fn token_to_move(&self, token: &str) -> Result<AxisTurn, MoveParseError> {
        let unknown = || MoveParseError::UnknownToken(token.to_owned());

        let (name, count) = if let Some(name) = token.strip_suffix("2'") {
            (name, 2)
        } else if let Some(name) = token.strip_suffix('2') {
            (name, 2)
        } else if let Some(name) = token.strip_suffix('\'') {
            (name, 3)
        } else {
            (token, 1)
        };

        let &(_, axis, layer_mask, sign) = NAMES
            .iter()
            .find(|&&(n, _, _, _)| n == name)
            .ok_or_else(unknown)?;

        Ok(AxisTurn {
            axis,
            layer_mask,
            angle: match count {
                2 => 2,
                3 => -sign,
                _ => sign,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_face_turns() {
        let n = DefaultNotation;
        assert_eq!(n.move_to_token(Axis::LR, POSITIVE_LAYER, 1).as_deref(), Some("R"));
        assert_eq!(n.move_to_token(Axis::LR, NEGATIVE_LAYER, 1).as_deref(), Some("L'"));
        assert_eq!(n.move_to_token(Axis::UD, NEGATIVE_LAYER, -2).as_deref(), Some("D2"));
        assert_eq!(n.move_to_token(Axis::FB, POSITIVE_LAYER, -1).as_deref(), Some("F'"));
        assert_eq!(n.move_to_token(Axis::FB, POSITIVE_LAYER, 0), None);
        assert_eq!(n.move_to_token(Axis::FB, NEGATIVE_LAYER | POSITIVE_LAYER, 1), None);
    }

    #[test]
    fn parses_every_name() {
        let n = DefaultNotation;
        for (name, axis, layer_mask, _) in NAMES {
            for suffix in ["", "'", "2"] {
                let token = format!("{name}{suffix}");
                let turn = n.token_to_move(&token).unwrap();
                assert_eq!((turn.axis, turn.layer_mask), (axis, layer_mask));
                assert_eq!(
                    n.move_to_token(turn.axis, turn.layer_mask, turn.angle).unwrap(),
                    token
                );
            }
        }
        assert_eq!(n.token_to_move("U2'").unwrap().angle, 2);
    }

    #[test]
    fn rejects_unknown_tokens() {
        let n = DefaultNotation;
        assert_eq!(
            n.token_to_move("Q"),
            Err(MoveParseError::UnknownToken("Q".to_owned()))
        );
        assert!(n.token_to_move("").is_err());
        assert!(n.token_to_move("R3").is_err());
    }
}
