//! Core vocabulary types: coordinates, dimensions, errors, move records, RNG.
//!
//! This module contains the building blocks the board engine is phrased in.
//! Nothing here mutates a board; the toggle rules and the phase machine
//! live in `crate::board`.

pub mod coord;
pub mod dims;
pub mod error;
pub mod moves;
pub mod rng;

pub use coord::Coord;
pub use dims::Dims;
pub use error::BoardError;
pub use moves::{MoveOrigin, MoveRecord};
pub use rng::{ScrambleRng, ScrambleRngState};
