//! Card store and measured-height store.
//!
//! Thread-local registries paired with version signals. Deriveds read
//! the version signal first (establishing the reactive dependency),
//! then snapshot the store. Replacing the card collection, changing the
//! estimate config, or committing new measurements bumps the matching
//! version and re-runs the flow derived.
//!
//! Measured heights are keyed by [`CardId`] and tagged with the card
//! generation they were taken against: a correction that arrives after
//! the collection has changed is stale and is dropped, never merged.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use spark_signals::signal;

use crate::layout::EstimateConfig;
use crate::types::{Card, CardId};

thread_local! {
    static CARDS: RefCell<Rc<Vec<Card>>> = RefCell::new(Rc::new(Vec::new()));
    static CARDS_VERSION: RefCell<spark_signals::Signal<u64>> = RefCell::new(signal(0));
    static MEASURED: RefCell<HashMap<CardId, f32>> = RefCell::new(HashMap::new());
    static MEASURED_VERSION: RefCell<spark_signals::Signal<u64>> = RefCell::new(signal(0));
    static ESTIMATE_CONFIG: RefCell<EstimateConfig> = RefCell::new(EstimateConfig::cells());
}

fn bump(version: &'static std::thread::LocalKey<RefCell<spark_signals::Signal<u64>>>) {
    version.with(|v| {
        let sig = v.borrow();
        let next = sig.get().wrapping_add(1);
        sig.set(next);
    });
}

// =============================================================================
// Card collection
// =============================================================================

/// Replace the card collection.
///
/// Clears all measured heights (measurements taken against the old
/// collection must not leak into the next packing pass) and bumps the
/// card generation, which re-runs the flow derived from estimation.
pub fn set_cards(cards: Vec<Card>) {
    CARDS.with(|c| *c.borrow_mut() = Rc::new(cards));
    MEASURED.with(|m| m.borrow_mut().clear());
    bump(&CARDS_VERSION);
}

/// Snapshot of the current card collection.
pub fn cards() -> Rc<Vec<Card>> {
    CARDS.with(|c| c.borrow().clone())
}

/// Current card generation. Reading this inside a derived creates a
/// dependency on the card collection.
pub fn cards_generation() -> u64 {
    CARDS_VERSION.with(|v| v.borrow().get())
}

// =============================================================================
// Estimate config
// =============================================================================

/// The estimate config used by the flow derived.
pub fn estimate_config() -> EstimateConfig {
    ESTIMATE_CONFIG.with(|c| *c.borrow())
}

/// Replace the estimate config. Bumps the card generation so the flow
/// derived re-estimates; pending corrections from the previous config
/// become stale and are dropped.
pub fn set_estimate_config(config: EstimateConfig) {
    ESTIMATE_CONFIG.with(|c| *c.borrow_mut() = config);
    bump(&CARDS_VERSION);
}

// =============================================================================
// Measured heights
// =============================================================================

/// Realized height for a card, if one has been committed.
pub fn measured_height(id: CardId) -> Option<f32> {
    MEASURED.with(|m| m.borrow().get(&id).copied())
}

/// Reading this inside a derived creates a dependency on the measured
/// height store.
pub fn measured_generation() -> u64 {
    MEASURED_VERSION.with(|v| v.borrow().get())
}

/// Commit a batch of realized heights taken against `generation`.
///
/// Returns true if the store changed and the flow derived will re-run.
/// Two cases deliberately return false:
///
/// - `generation` no longer matches the current card generation: the
///   measurements describe cards that have since been replaced.
/// - every height in the batch is already recorded: pass 2 has
///   converged, and bumping the version again would re-run the pipeline
///   forever.
pub fn commit_measured(generation: u64, batch: &[(CardId, f32)]) -> bool {
    if generation != cards_generation() {
        return false;
    }

    let changed = MEASURED.with(|m| {
        let mut store = m.borrow_mut();
        let mut changed = false;
        for &(id, height) in batch {
            if !height.is_finite() || height <= 0.0 {
                continue;
            }
            let previous = store.insert(id, height);
            if previous.map(f32::to_bits) != Some(height.to_bits()) {
                changed = true;
            }
        }
        changed
    });

    if changed {
        bump(&MEASURED_VERSION);
    }
    changed
}

// =============================================================================
// Reset (tests)
// =============================================================================

/// Clear cards, measurements, and config back to their initial state.
pub fn reset_flow_state() {
    CARDS.with(|c| *c.borrow_mut() = Rc::new(Vec::new()));
    MEASURED.with(|m| m.borrow_mut().clear());
    ESTIMATE_CONFIG.with(|c| *c.borrow_mut() = EstimateConfig::cells());
    bump(&CARDS_VERSION);
    bump(&MEASURED_VERSION);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_cards_replaces_collection() {
        reset_flow_state();

        set_cards(vec![Card::new(1, "a", ""), Card::new(2, "b", "")]);
        assert_eq!(cards().len(), 2);

        set_cards(vec![Card::new(3, "c", "")]);
        assert_eq!(cards().len(), 1);
        assert_eq!(cards()[0].id, 3);
    }

    #[test]
    fn test_set_cards_clears_measurements() {
        reset_flow_state();
        set_cards(vec![Card::new(1, "a", "")]);

        assert!(commit_measured(cards_generation(), &[(1, 7.0)]));
        assert_eq!(measured_height(1), Some(7.0));

        set_cards(vec![Card::new(1, "a", "")]);
        assert_eq!(measured_height(1), None);
    }

    #[test]
    fn test_stale_commit_is_dropped() {
        reset_flow_state();
        set_cards(vec![Card::new(1, "a", "")]);
        let old_generation = cards_generation();

        set_cards(vec![Card::new(1, "a", "")]);
        assert!(!commit_measured(old_generation, &[(1, 7.0)]));
        assert_eq!(measured_height(1), None);
    }

    #[test]
    fn test_identical_commit_does_not_bump() {
        reset_flow_state();
        set_cards(vec![Card::new(1, "a", "")]);
        let generation = cards_generation();

        assert!(commit_measured(generation, &[(1, 7.0)]));
        let measured_gen = measured_generation();

        // Same batch again: converged, no version bump.
        assert!(!commit_measured(generation, &[(1, 7.0)]));
        assert_eq!(measured_generation(), measured_gen);

        // A genuinely new height bumps.
        assert!(commit_measured(generation, &[(1, 9.0)]));
        assert_ne!(measured_generation(), measured_gen);
    }

    #[test]
    fn test_bad_heights_never_enter_the_store() {
        reset_flow_state();
        set_cards(vec![Card::new(1, "a", "")]);
        let generation = cards_generation();

        assert!(!commit_measured(generation, &[(1, 0.0)]));
        assert!(!commit_measured(generation, &[(1, f32::NAN)]));
        assert!(!commit_measured(generation, &[(1, -4.0)]));
        assert_eq!(measured_height(1), None);
    }
}
