//! # lights-out
//!
//! A Lights Out puzzle engine: toggle rules and deterministic scrambles
//! behind a frontend-agnostic API.
//!
//! ## Design Principles
//!
//! 1. **Engine, Not App**: No rendering and no input handling. A
//!    frontend reports pressed coordinates and reads cell state back;
//!    completion arrives through registered hooks.
//!
//! 2. **Cell State Is Data**: Lit/unlit is an explicit boolean per cell,
//!    never an artifact of how a frontend happens to draw it.
//!
//! 3. **Scramble By Playing**: Random boards are produced by applying
//!    ordinary moves, so every puzzle the engine deals is solvable.
//!
//! ## Architecture
//!
//! - **Tail Evaluation**: Completion is judged as the tail of the move
//!   that might have caused it, so the solved transition is observable
//!   exactly once.
//!
//! - **Persistent History**: The move journal is an `im` vector, making
//!   session snapshots O(1) to clone.
//!
//! - **Seeded Randomness**: Scrambles draw from a ChaCha8 source; a seed
//!   reproduces a whole session.
//!
//! ## Modules
//!
//! - `core`: Coordinates, dimensions, errors, move records, RNG
//! - `board`: Grid storage, phase machine, completion hooks, the engine
//!
//! ## Example
//!
//! ```
//! use lights_out::{BoardEngine, Coord, ScrambleRng};
//!
//! let mut engine = BoardEngine::classic();
//!
//! engine.on_completion(|event| {
//!     println!("solved in {} moves", event.moves_made);
//! });
//!
//! let mut rng = ScrambleRng::new(42);
//! engine.scramble(&mut rng);
//! assert_eq!(engine.moves_made(), 0);
//!
//! // Press the center; the engine toggles its plus-shaped neighborhood.
//! engine.apply_move(Coord::new(2, 2));
//! ```

pub mod board;
pub mod core;

// Re-export commonly used types
pub use crate::core::{
    BoardError, Coord, Dims,
    MoveOrigin, MoveRecord,
    ScrambleRng, ScrambleRngState,
};

pub use crate::board::{
    BoardEngine, CompletionEvent, CompletionHook, CompletionHooks, Grid, HookId, Phase,
};
