//! Height estimation for unrendered cards.
//!
//! Before a card has ever been drawn, its height is unknown. The
//! estimator produces a provisional height from content heuristics so
//! the first packing pass can place every card with a near-correct
//! layout. After the first frame, realized heights from the rendering
//! surface replace the estimates (see [`resolve_heights`]).
//!
//! The constants are empirical tuning for one visual design, not a
//! contract. What the engine relies on is the ordering: a card with an
//! image and long text must estimate taller than one without, all else
//! equal, and no estimate ever falls below the configured floor.

use crate::types::{Card, CardId};

use super::text_measure::measure_text_height;

// =============================================================================
// Config
// =============================================================================

/// Tunable constants for height estimation.
///
/// `default()` is pixel-tuned for a ~180px column. [`EstimateConfig::cells`]
/// is tuned for terminal cells and matches the card renderer's chrome, so
/// terminal estimates start close to realized heights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateConfig {
    /// Fixed card chrome: borders, title row, padding.
    pub base_height: f32,
    /// Added when the card carries a cover image block.
    pub image_height: f32,
    /// Height of one wrapped body line.
    pub line_height: f32,
    /// Approximate width of one character, used to derive characters
    /// per line from the column width.
    pub char_width: f32,
    /// Cap on the number of body lines counted toward the estimate.
    pub max_lines: u32,
    /// Added when the card has at least one tag.
    pub tag_row_height: f32,
    /// Lower bound on any estimate.
    pub min_height: f32,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            base_height: 120.0,
            image_height: 200.0,
            line_height: 20.0,
            char_width: 8.0,
            max_lines: 40,
            tag_row_height: 30.0,
            min_height: 150.0,
        }
    }
}

impl EstimateConfig {
    /// Tuning for terminal cells (1 unit = 1 row).
    ///
    /// Matches the card renderer: two border rows plus a title row, a
    /// four-row image placeholder, one row per body line capped at the
    /// renderer's body preview cap, one tag row.
    pub fn cells() -> Self {
        Self {
            base_height: 3.0,
            image_height: 4.0,
            line_height: 1.0,
            char_width: 1.0,
            max_lines: 6,
            tag_row_height: 1.0,
            min_height: 4.0,
        }
    }
}

// =============================================================================
// Estimation
// =============================================================================

/// Estimate the height of a card laid out at `column_width`.
///
/// Pure function: no side effects, deterministic, result is always
/// finite and at least `config.min_height`.
pub fn estimate_height(card: &Card, column_width: f32, config: &EstimateConfig) -> f32 {
    let mut height = config.base_height;

    if card.has_image {
        height += config.image_height;
    }

    // Derive characters per line from the column width; degenerate
    // widths fall back to one character per line rather than NaN. The
    // line count comes from the same cell-based wrapping the renderer
    // uses, so explicit newlines and wide characters are counted.
    let chars_per_line = if column_width.is_finite() && column_width > config.char_width {
        (column_width / config.char_width).floor() as u16
    } else {
        1
    };

    let lines = measure_text_height(&card.body, chars_per_line.max(1)) as f32;
    height += lines.min(config.max_lines as f32) * config.line_height;

    if !card.tags.is_empty() {
        height += config.tag_row_height;
    }

    height.max(config.min_height)
}

/// Resolve the packing height for every card: the realized height from
/// the rendering surface when one is available, the estimate otherwise.
///
/// `lookup` abstracts the surface: given a card id, return the realized
/// height of that card if it is currently mounted. A missing,
/// non-finite, or non-positive measurement falls back to the estimate,
/// since a zero height reaching the packer would collapse the card's
/// column onto it.
pub fn resolve_heights<F>(
    cards: &[Card],
    column_width: f32,
    config: &EstimateConfig,
    lookup: F,
) -> Vec<f32>
where
    F: Fn(CardId) -> Option<f32>,
{
    cards
        .iter()
        .map(|card| match lookup(card.id) {
            Some(h) if h.is_finite() && h > 0.0 => h,
            _ => estimate_height(card, column_width, config),
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
