//! Correction stash.
//!
//! The render effect may not mutate reactive state it (transitively)
//! depends on, so it cannot commit realized heights directly: that
//! would re-enter the derived graph mid-effect. Instead it stashes the
//! latest batch here and the event loop commits it on the next tick,
//! after the frame is already on screen. Stashing twice before a tick
//! overwrites: last write wins, matching the pipeline's restart
//! semantics for superseded passes.

use std::cell::RefCell;

use crate::types::CardId;

thread_local! {
    static PENDING: RefCell<Option<(u64, Vec<(CardId, f32)>)>> = const { RefCell::new(None) };
}

/// Stash a batch of realized heights taken against a card generation.
pub fn stash(generation: u64, realized: Vec<(CardId, f32)>) {
    PENDING.with(|p| *p.borrow_mut() = Some((generation, realized)));
}

/// Take the pending batch, leaving the stash empty.
pub fn take() -> Option<(u64, Vec<(CardId, f32)>)> {
    PENDING.with(|p| p.borrow_mut().take())
}
