//! The board engine: grid storage, phase machine, completion hooks, and
//! the session object that ties them together.
//!
//! `Grid` is the pure rules layer (toggle sets, uniformity), `Phase` the
//! two-state lock around completion, and `BoardEngine` the session object
//! that wires them to the move journal and the hook registry.

pub mod engine;
pub mod grid;
pub mod hooks;
pub mod phase;

pub use engine::BoardEngine;
pub use grid::Grid;
pub use hooks::{CompletionEvent, CompletionHook, CompletionHooks, HookId};
pub use phase::Phase;
