//! Frame derived - reactive frame computation.
//!
//! Creates a Derived that draws every positioned card into a
//! [`CellBuffer`] whenever the flow layout changes. Pure computation:
//! realized heights are collected as data for the render effect to
//! commit. The derived itself never touches the measured-height store.

use spark_signals::{derived, Derived};

use crate::layout::FlowLayout;
use crate::renderer::{draw_card, realized_card_height, CellBuffer};
use crate::types::CardId;

use super::cards;
use super::viewport::container_width_signal;

/// Result of frame computation.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    /// The rendered frame.
    pub buffer: CellBuffer,
    /// Realized height of every drawn card, in input order.
    pub realized: Vec<(CardId, f32)>,
    /// Card generation the frame was drawn against. Corrections carry
    /// this tag so a stale correction can be dropped.
    pub generation: u64,
    /// Positions whose card index no longer resolved to a card. These
    /// slots render as nothing; a non-zero count means the layout and
    /// the card store were observed mid-change and the next derived run
    /// will reconcile them.
    pub skipped: usize,
}

/// Create the frame derived.
///
/// Takes the flow derived as input and returns a Derived producing the
/// drawn frame plus the realized card heights.
pub fn create_frame_derived(flow_derived: Derived<FlowLayout>) -> Derived<FrameResult> {
    let width_signal = container_width_signal();

    derived(move || {
        let container_width = width_signal.get();
        let generation = cards::cards_generation();
        let flow = flow_derived.get();
        let cards_snapshot = cards::cards();

        let mut skipped = 0usize;
        let mut placed = Vec::with_capacity(flow.positions.len());
        let mut realized = Vec::with_capacity(flow.positions.len());
        let mut extent = 0u16;

        for position in &flow.positions {
            let Some(card) = cards_snapshot.get(position.index) else {
                skipped += 1;
                continue;
            };

            let x = position.left.round().max(0.0) as u16;
            let y = position.top.round().max(0.0) as u16;
            let width = position.width.round().max(0.0) as u16;

            // A zero realized height means the column is too narrow for
            // a bordered card. Drawing anyway would spill into the next
            // column, and a zero must never be committed as a
            // measurement, so the card is left out of this frame.
            let height = realized_card_height(card, width);
            if height == 0 {
                continue;
            }
            realized.push((card.id, height as f32));
            extent = extent.max(y.saturating_add(height));
            placed.push((position.index, x, y, width));
        }

        let mut buffer = CellBuffer::new(container_width, extent);
        for (index, x, y, width) in placed {
            draw_card(&mut buffer, &cards_snapshot[index], x, y, width);
        }

        FrameResult {
            buffer,
            realized,
            generation,
            skipped,
        }
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::cards::{commit_measured, reset_flow_state, set_cards};
    use crate::pipeline::flow_derived::create_flow_derived;
    use crate::pipeline::viewport::{set_column_count, set_container_width, set_gap};
    use crate::types::Card;

    fn setup() {
        reset_flow_state();
        set_container_width(41);
        set_column_count(2);
        set_gap(1);
    }

    #[test]
    fn test_frame_derived_empty() {
        setup();

        let frame = create_frame_derived(create_flow_derived());
        let result = frame.get();

        assert_eq!(result.buffer.height(), 0);
        assert!(result.realized.is_empty());
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn test_frame_derived_draws_every_card() {
        setup();
        set_cards(vec![
            Card::new(1, "First", "body"),
            Card::new(2, "Second", "body"),
        ]);

        let frame = create_frame_derived(create_flow_derived());
        let result = frame.get();

        assert_eq!(result.realized.len(), 2);
        assert_eq!(result.skipped, 0);

        // Both cards on the top row, side by side.
        let top = result.buffer.row_string(0);
        assert!(top.contains('╭'));
        assert_eq!(result.buffer.row_string(1).matches('│').count(), 4);
        assert!(result.buffer.row_string(1).contains("First"));
        assert!(result.buffer.row_string(1).contains("Second"));
        assert!(!top.is_empty());
    }

    #[test]
    fn test_frame_extends_past_estimated_container() {
        setup();
        // A long body realizes far taller than the floor estimate.
        set_cards(vec![Card::new(1, "t", "dream ".repeat(40))]);
        set_column_count(1);

        let flow = create_flow_derived();
        let frame = create_frame_derived(flow.clone());

        let result = frame.get();
        let (_, realized) = result.realized[0];

        // Before correction the packer used the estimate; the buffer
        // still covers the realized extent.
        assert!(result.buffer.height() as f32 >= realized);

        // After committing, the flow adopts the realized height.
        assert!(commit_measured(result.generation, &result.realized));
        assert_eq!(flow.get().positions[0].height, realized);
    }

    #[test]
    fn test_narrow_columns_never_spill() {
        setup();
        set_cards(vec![Card::new(1, "a", "x"), Card::new(2, "b", "y")]);
        // Two columns of width 2: too narrow for any bordered card.
        set_container_width(5);

        let frame = create_frame_derived(create_flow_derived());
        let result = frame.get();

        assert!(result.realized.is_empty());
        assert_eq!(result.buffer.height(), 0);
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn test_frame_reacts_to_resize() {
        setup();
        set_cards(vec![Card::new(1, "Wide", "body")]);
        set_column_count(1);

        let frame = create_frame_derived(create_flow_derived());
        assert_eq!(frame.get().buffer.width(), 41);

        set_container_width(61);
        assert_eq!(frame.get().buffer.width(), 61);
    }
}
