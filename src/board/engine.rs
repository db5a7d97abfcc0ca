//! The board engine: player moves, scrambles, completion signaling, and
//! the session journal.
//!
//! ## Operation Flow
//!
//! A frontend reports the pressed coordinate; the engine applies the
//! toggle set, journals the move, and evaluates completion as the tail of
//! the same operation. The "just solved" transition is therefore
//! observable exactly once, at the moment it happens, and completion locks
//! the engine until [`BoardEngine::clear`] or [`BoardEngine::scramble`].
//!
//! ## Scrambling
//!
//! A scramble draws a move count `n` in `[0, columns * rows)` and applies
//! `n` moves at uniformly drawn coordinates. Because scrambling plays
//! ordinary moves, every scrambled board is reachable from all-unlit and
//! therefore solvable. Intermediate scramble positions are never evaluated
//! for completion; only the final position is, once.

use im::Vector;
use tracing::{debug, instrument, trace};

use crate::core::{BoardError, Coord, Dims, MoveOrigin, MoveRecord, ScrambleRng};

use super::grid::Grid;
use super::hooks::{CompletionEvent, CompletionHooks, HookId};
use super::phase::Phase;

/// A Lights Out play session: grid, phase machine, move journal, and
/// completion hooks.
///
/// All operations are synchronous; one engine serves one board.
///
/// ```
/// use lights_out::{BoardEngine, Coord};
///
/// let mut engine = BoardEngine::with_dimensions(3, 3).unwrap();
/// engine.apply_move(Coord::new(1, 1));
///
/// assert!(engine.is_lit(Coord::new(1, 1)));
/// assert!(engine.is_lit(Coord::new(0, 1)));
/// assert!(!engine.is_lit(Coord::new(0, 0)));
/// assert_eq!(engine.moves_made(), 1);
/// ```
pub struct BoardEngine {
    grid: Grid,
    phase: Phase,
    /// Every applied move since construction or the last clear.
    /// `im::Vector` keeps history snapshots O(1) to clone.
    history: Vector<MoveRecord>,
    /// Accepted player moves since the last clear or scramble.
    moves_made: u32,
    next_sequence: u32,
    hooks: CompletionHooks,
}

impl BoardEngine {
    /// Create an engine with an all-unlit board of the given dimensions.
    #[must_use]
    pub fn new(dims: Dims) -> Self {
        Self {
            grid: Grid::new(dims),
            phase: Phase::Active,
            history: Vector::new(),
            moves_made: 0,
            next_sequence: 0,
            hooks: CompletionHooks::new(),
        }
    }

    /// Create an engine from raw column and row counts.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] when either count is zero
    /// or negative.
    pub fn with_dimensions(columns: i32, rows: i32) -> Result<Self, BoardError> {
        Ok(Self::new(Dims::new(columns, rows)?))
    }

    /// Create the conventional 5x5 board.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(Dims::CLASSIC)
    }

    // === Queries ===

    /// Board dimensions.
    #[must_use]
    pub fn dims(&self) -> Dims {
        self.grid.dims()
    }

    /// Read-only view of the grid, for rendering.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether a cell is lit. Off-board positions read as unlit.
    #[must_use]
    pub fn is_lit(&self, coord: Coord) -> bool {
        self.grid.is_lit(coord)
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether player moves are currently refused.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.phase.is_locked()
    }

    /// Accepted player moves since the last clear or scramble.
    #[must_use]
    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    /// The move journal since construction or the last clear.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Completion hooks ===

    /// Register a hook that runs on every transition into
    /// [`Phase::Finished`], exactly once per transition.
    pub fn on_completion(&mut self, hook: impl FnMut(&CompletionEvent) + 'static) -> HookId {
        self.hooks.register(hook)
    }

    /// Remove a previously registered hook. Returns whether it existed.
    pub fn remove_completion_hook(&mut self, id: HookId) -> bool {
        self.hooks.unregister(id)
    }

    // === Operations ===

    /// Apply a player move at `coord`.
    ///
    /// Toggles the pressed cell and each in-range orthogonal neighbor,
    /// then evaluates completion. Silent no-op when `coord` is off the
    /// board or the engine is finished.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, coord: Coord) {
        if self.phase.is_locked() {
            trace!("move refused: board is finished");
            return;
        }
        if !self.record_move(coord, MoveOrigin::Player) {
            trace!("move ignored: coordinate off the board");
            return;
        }
        self.moves_made += 1;
        self.evaluate_completion();
    }

    /// Reset every cell to unlit and unlock the engine.
    ///
    /// This is a reset, not an evaluation: no completion check runs and no
    /// hook fires, even though a cleared board is trivially uniform. The
    /// journal and the player-move counter restart from zero.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.grid.clear();
        self.phase = Phase::Active;
        self.history.clear();
        self.moves_made = 0;
        self.next_sequence = 0;
        debug!("board cleared");
    }

    /// Scramble the board by playing random moves.
    ///
    /// Draws a move count `n` uniformly from `[0, columns * rows)`, then
    /// applies `n` moves at uniformly drawn coordinates. Scramble moves
    /// are journaled but not counted as player moves, and the player-move
    /// counter resets: a scramble starts a fresh solve.
    ///
    /// Completion is evaluated once, against the final position. A
    /// scramble that lands on a uniform board finishes the engine (firing
    /// hooks if that is a fresh transition); landing on a mixed board
    /// reactivates a finished engine. A zero-move draw leaves the board
    /// and phase untouched.
    #[instrument(skip(self, rng))]
    pub fn scramble(&mut self, rng: &mut ScrambleRng) {
        let dims = self.grid.dims();
        let n = rng.gen_range_usize(0..dims.cell_count());
        debug!(moves = n, seed = rng.seed(), "scrambling board");

        for _ in 0..n {
            let coord = Coord::new(
                rng.gen_range(0..dims.columns()),
                rng.gen_range(0..dims.rows()),
            );
            self.record_move(coord, MoveOrigin::Scramble);
        }

        self.moves_made = 0;
        if n > 0 {
            self.evaluate_completion();
        }
    }

    // === Internals ===

    /// Apply the toggle set for `coord` and journal it.
    ///
    /// Returns `false`, leaving the board untouched, when the pressed cell
    /// is off the board. Does not evaluate completion; callers decide when
    /// the position should be judged.
    fn record_move(&mut self, coord: Coord, origin: MoveOrigin) -> bool {
        let toggled = self.grid.apply_move(coord);
        if toggled.is_empty() {
            return false;
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.history
            .push_back(MoveRecord::new(coord, origin, sequence, toggled));
        true
    }

    /// Settle the phase against the completion predicate, firing hooks on
    /// a fresh transition into [`Phase::Finished`].
    fn evaluate_completion(&mut self) {
        match self.grid.uniform_state() {
            Some(all_lit) => {
                if self.phase == Phase::Active {
                    self.phase = Phase::Finished;
                    debug!(all_lit, moves = self.moves_made, "board completed");
                    let event = CompletionEvent {
                        all_lit,
                        moves_made: self.moves_made,
                    };
                    self.hooks.notify(&event);
                }
            }
            None => self.phase = Phase::Active,
        }
    }
}

impl Default for BoardEngine {
    /// The classic 5x5 board.
    fn default() -> Self {
        Self::classic()
    }
}

impl std::fmt::Debug for BoardEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardEngine")
            .field("dims", &self.grid.dims())
            .field("phase", &self.phase)
            .field("moves_made", &self.moves_made)
            .field("history_len", &self.history.len())
            .field("hooks", &self.hooks)
            .finish()
    }
}
