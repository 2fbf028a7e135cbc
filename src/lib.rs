//! A cubie-level model of the 3x3x3 Rubik's cube, together with the integer
//! coordinates a Kociemba-style two-phase solver uses to index its move and
//! pruning tables. The solver itself lives elsewhere; this crate only
//! represents cube states and measures them.

#![deny(missing_docs)]

pub mod coord;
pub mod cube333;
pub mod error;
pub mod moves;
