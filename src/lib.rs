//! A Rubik's cube solver library built around Kociemba's two phase algorithm. Cubes can be entered
//! as facelet markings, validated, and solved to a short (or optimal) sequence of face turns.

#![deny(missing_docs)]

pub mod combinatorics;
pub mod coord;
pub mod cube333;
pub mod error;
pub mod moves;
pub mod notation;
pub mod progress;
