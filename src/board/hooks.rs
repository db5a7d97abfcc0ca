//! Completion notification hooks.
//!
//! The engine signals completion through registered callbacks rather than
//! owning any presentation concern: a frontend attaches a hook to stop
//! input or show a banner, and detaches it when its view goes away. Hooks
//! run synchronously inside the move that completed the board, and the
//! contract is exactly one notification per transition into the finished
//! phase. Re-detecting an already-finished board never re-fires.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Payload delivered to completion hooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEvent {
    /// The shared state every cell ended in: `true` all lit, `false` all
    /// unlit.
    pub all_lit: bool,
    /// Accepted player moves since the last clear or scramble. Zero when a
    /// scramble itself landed on a uniform board.
    pub moves_made: u32,
}

/// Unique identifier for a registered hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HookId(pub u32);

impl HookId {
    /// Create a hook ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for HookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hook({})", self.0)
    }
}

/// Callback invoked when the board completes.
pub type CompletionHook = Box<dyn FnMut(&CompletionEvent)>;

/// Registry of completion hooks with ID-based unregistration.
#[derive(Default)]
pub struct CompletionHooks {
    hooks: FxHashMap<HookId, CompletionHook>,
    next_id: u32,
}

impl CompletionHooks {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook and return its ID.
    pub fn register(&mut self, hook: impl FnMut(&CompletionEvent) + 'static) -> HookId {
        let id = HookId::new(self.next_id);
        self.next_id += 1;
        self.hooks.insert(id, Box::new(hook));
        id
    }

    /// Unregister a hook. Returns whether it was registered.
    pub fn unregister(&mut self, id: HookId) -> bool {
        self.hooks.remove(&id).is_some()
    }

    /// Invoke every hook with the event.
    ///
    /// Hooks run in registration order; IDs are allocated monotonically,
    /// so sorting by ID restores that order.
    pub fn notify(&mut self, event: &CompletionEvent) {
        let mut ids: Vec<HookId> = self.hooks.keys().copied().collect();
        ids.sort_by_key(|id| id.raw());

        for id in ids {
            if let Some(hook) = self.hooks.get_mut(&id) {
                hook(event);
            }
        }
    }

    /// Number of registered hooks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether no hooks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl std::fmt::Debug for CompletionHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionHooks")
            .field("len", &self.hooks.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
