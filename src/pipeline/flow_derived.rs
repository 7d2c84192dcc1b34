//! Flow derived - reactive waterfall layout computation.
//!
//! Creates a Derived that recomputes the layout whenever:
//! - The card collection is replaced
//! - Measured heights are committed
//! - The container width, column count, or gap changes
//!
//! The estimated first pass and the corrected second pass are the same
//! code path: pass 1 runs with an empty measured store, pass 2 runs
//! after the render effect commits realized heights. Any trigger while
//! a correction is pending simply restarts from estimation with the
//! latest inputs; the derived graph has no queue of stale triggers.

use spark_signals::{derived, Derived};

use crate::layout::{column_width, pack, resolve_heights, FlowLayout};

use super::cards;
use super::viewport::{column_count_signal, container_width_signal, gap_signal};

/// Create the flow derived.
///
/// Returns a Derived that packs the current cards and automatically
/// re-runs when any layout input changes.
pub fn create_flow_derived() -> Derived<FlowLayout> {
    let width_signal = container_width_signal();
    let columns_signal = column_count_signal();
    let gap_signal = gap_signal();

    derived(move || {
        // Read viewport inputs (creates reactive dependencies).
        let container = width_signal.get() as f32;
        let columns = columns_signal.get() as usize;
        let gap = gap_signal.get() as f32;

        // Reading the generations creates dependencies on the card
        // collection and the measured-height store.
        let _ = cards::cards_generation();
        let _ = cards::measured_generation();

        let cards_snapshot = cards::cards();
        let config = cards::estimate_config();

        let col_width = column_width(container, columns, gap);
        let heights = resolve_heights(&cards_snapshot, col_width, &config, cards::measured_height);

        pack(&heights, container, columns, gap)
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::cards::{commit_measured, cards_generation, reset_flow_state, set_cards};
    use crate::pipeline::viewport::{set_column_count, set_container_width, set_gap};
    use crate::types::Card;

    fn setup() {
        reset_flow_state();
        set_container_width(41);
        set_column_count(2);
        set_gap(1);
    }

    fn four_cards() -> Vec<Card> {
        (1..=4).map(|i| Card::new(i, "t", "body text")).collect()
    }

    #[test]
    fn test_flow_derived_empty() {
        setup();

        let flow = create_flow_derived();
        let layout = flow.get();

        assert!(layout.positions.is_empty());
        assert_eq!(layout.container_height, 0.0);
    }

    #[test]
    fn test_flow_derived_positions_every_card() {
        setup();
        set_cards(four_cards());

        let flow = create_flow_derived();
        let layout = flow.get();

        assert_eq!(layout.positions.len(), 4);
        for p in &layout.positions {
            assert!(p.column < 2);
        }
    }

    #[test]
    fn test_flow_derived_reacts_to_resize() {
        setup();
        set_cards(four_cards());

        let flow = create_flow_derived();
        let before = flow.get();
        assert_eq!(before.column_width, 20.0);

        // 400 -> 800: every left/width changes, column assignment holds.
        set_container_width(81);
        let after = flow.get();
        assert_eq!(after.column_width, 40.0);

        for (a, b) in before.positions.iter().zip(after.positions.iter()) {
            assert_eq!(a.column, b.column);
            assert_ne!(a.width, b.width);
            if a.column > 0 {
                assert_ne!(a.left, b.left);
            }
        }
    }

    #[test]
    fn test_flow_derived_reacts_to_card_change() {
        setup();
        set_cards(four_cards());

        let flow = create_flow_derived();
        assert_eq!(flow.get().positions.len(), 4);

        set_cards(vec![Card::new(9, "t", "body")]);
        assert_eq!(flow.get().positions.len(), 1);
    }

    #[test]
    fn test_flow_derived_correction_repacks_the_column() {
        setup();
        // Uniform estimates: cards 1,3 go left, cards 2,4 go right.
        set_cards(four_cards());

        let flow = create_flow_derived();
        let pass1 = flow.get();
        let estimated = pass1.positions[0].height;

        // Card 3 (index 2) rendered far taller than estimated. Its
        // column is card 1's; the right column must be untouched.
        assert!(commit_measured(cards_generation(), &[(3, estimated + 20.0)]));
        let pass2 = flow.get();

        assert_eq!(pass2.positions[2].height, estimated + 20.0);
        assert_eq!(pass2.positions[1], pass1.positions[1]);
        assert_eq!(pass2.positions[3], pass1.positions[3]);
        assert!(pass2.container_height > pass1.container_height);
    }

    #[test]
    fn test_flow_derived_reacts_to_column_count() {
        setup();
        set_cards(four_cards());

        let flow = create_flow_derived();
        assert_eq!(flow.get().column_heights.len(), 2);

        set_column_count(3);
        assert_eq!(flow.get().column_heights.len(), 3);
    }

    #[test]
    fn test_flow_derived_zero_width_is_a_noop() {
        setup();
        set_cards(four_cards());
        set_container_width(0);

        let flow = create_flow_derived();
        let layout = flow.get();
        assert!(layout.positions.is_empty());
        assert_eq!(layout.container_height, 0.0);
    }
}
