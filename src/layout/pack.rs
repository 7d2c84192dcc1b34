//! Greedy shortest-column-next packing.
//!
//! One deterministic pass over the cards in input order: each card goes
//! to the column with the lowest accumulated height, ties broken by the
//! lowest column index. This is the standard waterfall heuristic: it
//! balances column heights well for feed-like content and is O(cards ×
//! columns), not an optimal bin-balancing algorithm.
//!
//! Every pass replaces the whole position set. There is no incremental
//! patching: the same inputs always produce bit-identical output, which
//! is what lets the correction pass simply re-run the packer with
//! realized heights.

// =============================================================================
// Output types
// =============================================================================

/// Placement of one card within the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPosition {
    /// Index of the card in the input order.
    pub index: usize,
    /// Column the card was assigned to, in `[0, columns)`.
    pub column: usize,
    /// Absolute offset from the container's left edge.
    pub left: f32,
    /// Absolute offset from the container's top edge.
    pub top: f32,
    /// Card width (equals the computed column width).
    pub width: f32,
    /// The height the card was packed with (estimated or realized).
    pub height: f32,
}

/// Result of one packing pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowLayout {
    /// One position per input card, in input order.
    pub positions: Vec<CardPosition>,
    /// Accumulated height per column at the end of the pass.
    pub column_heights: Vec<f32>,
    /// Width of each column.
    pub column_width: f32,
    /// Height to reserve for the container: `max(column_heights) - gap`,
    /// clamped to 0 and always finite.
    pub container_height: f32,
}

// =============================================================================
// Packing
// =============================================================================

/// Width of one column for a given container width, column count, and
/// gap. Clamped to 0 for containers too narrow to fit the gaps.
pub fn column_width(container_width: f32, columns: usize, gap: f32) -> f32 {
    let columns = columns.max(1);
    let gap = if gap.is_finite() { gap.max(0.0) } else { 0.0 };
    ((container_width - gap * (columns - 1) as f32) / columns as f32).max(0.0)
}

/// Pack `heights` into `columns` columns of equal width.
///
/// A non-positive or non-finite `container_width` means the container
/// is not mounted yet; the pass is skipped entirely and an empty layout
/// is returned. This is a benign no-op, not an error.
pub fn pack(heights: &[f32], container_width: f32, columns: usize, gap: f32) -> FlowLayout {
    if !container_width.is_finite() || container_width <= 0.0 {
        return FlowLayout::default();
    }

    let columns = columns.max(1);
    let gap = if gap.is_finite() { gap.max(0.0) } else { 0.0 };
    let column_width = column_width(container_width, columns, gap);

    let mut column_heights = vec![0.0_f32; columns];
    let mut positions = Vec::with_capacity(heights.len());

    for (index, &raw) in heights.iter().enumerate() {
        let height = if raw.is_finite() { raw.max(0.0) } else { 0.0 };

        // Linear first-min scan: ties resolve to the leftmost column.
        let mut column = 0;
        for (i, &h) in column_heights.iter().enumerate() {
            if h < column_heights[column] {
                column = i;
            }
        }

        positions.push(CardPosition {
            index,
            column,
            left: column as f32 * (column_width + gap),
            top: column_heights[column],
            width: column_width,
            height,
        });

        column_heights[column] += height + gap;
    }

    let tallest = column_heights.iter().cloned().fold(0.0_f32, f32::max);
    let container_height = {
        let h = tallest - gap;
        if h.is_finite() { h.max(0.0) } else { 0.0 }
    };

    FlowLayout {
        positions,
        column_heights,
        column_width,
        container_height,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_column_scenario() {
        // 4 cards, 2 columns, gap 10, all heights 100.
        let flow = pack(&[100.0; 4], 370.0, 2, 10.0);

        assert_eq!(flow.column_width, 180.0);
        assert_eq!(flow.positions.len(), 4);

        let p = &flow.positions;
        assert_eq!((p[0].column, p[0].top), (0, 0.0));
        assert_eq!((p[1].column, p[1].top), (1, 0.0));
        assert_eq!((p[2].column, p[2].top), (0, 110.0));
        assert_eq!((p[3].column, p[3].top), (1, 110.0));

        assert_eq!(p[1].left, 190.0);
        assert_eq!(flow.container_height, 210.0);
    }

    #[test]
    fn test_ties_break_leftmost() {
        let flow = pack(&[50.0, 50.0, 50.0], 300.0, 3, 0.0);
        assert_eq!(flow.positions[0].column, 0);
        assert_eq!(flow.positions[1].column, 1);
        assert_eq!(flow.positions[2].column, 2);
    }

    #[test]
    fn test_shortest_column_wins() {
        // Tall first card pushes the next two into the second column.
        let flow = pack(&[300.0, 80.0, 80.0], 200.0, 2, 0.0);
        assert_eq!(flow.positions[1].column, 1);
        assert_eq!(flow.positions[2].column, 1);
        assert_eq!(flow.positions[2].top, 80.0);
    }

    #[test]
    fn test_empty_input() {
        let flow = pack(&[], 400.0, 2, 10.0);
        assert!(flow.positions.is_empty());
        assert_eq!(flow.container_height, 0.0);
        assert_eq!(flow.column_heights, vec![0.0, 0.0]);
    }

    #[test]
    fn test_unmounted_container_is_a_noop() {
        for width in [0.0, -10.0, f32::NAN, f32::INFINITY] {
            let flow = pack(&[100.0, 100.0], width, 2, 10.0);
            assert!(flow.positions.is_empty());
            assert_eq!(flow.container_height, 0.0);
        }
    }

    #[test]
    fn test_non_finite_heights_are_sanitized() {
        let flow = pack(&[f32::NAN, f32::INFINITY, -20.0, 50.0], 200.0, 2, 0.0);
        assert_eq!(flow.positions.len(), 4);
        assert!(flow.container_height.is_finite());
        for p in &flow.positions {
            assert!(p.height.is_finite());
            assert!(p.height >= 0.0);
        }
    }

    #[test]
    fn test_zero_columns_clamps_to_one() {
        let flow = pack(&[100.0, 100.0], 200.0, 0, 10.0);
        assert_eq!(flow.column_heights.len(), 1);
        assert_eq!(flow.positions[1].top, 110.0);
    }

    #[test]
    fn test_deterministic() {
        let heights = [120.0, 340.0, 90.0, 200.0, 150.0, 60.0];
        let a = pack(&heights, 400.0, 3, 12.0);
        let b = pack(&heights, 400.0, 3, 12.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_columns_stay_balanced_for_uniform_heights() {
        let heights = vec![100.0_f32; 17];
        let flow = pack(&heights, 600.0, 3, 10.0);

        let max = flow.column_heights.iter().cloned().fold(f32::MIN, f32::max);
        let min = flow.column_heights.iter().cloned().fold(f32::MAX, f32::min);
        assert!(max - min <= 100.0 + 10.0);
    }

    #[test]
    fn test_columns_do_not_overlap() {
        let heights = [80.0, 200.0, 40.0, 120.0, 90.0, 300.0, 50.0];
        let flow = pack(&heights, 500.0, 2, 8.0);

        for col in 0..2 {
            let mut spans: Vec<(f32, f32)> = flow
                .positions
                .iter()
                .filter(|p| p.column == col)
                .map(|p| (p.top, p.top + p.height))
                .collect();
            spans.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
            for pair in spans.windows(2) {
                assert!(pair[0].1 <= pair[1].0);
            }
        }
    }
}
