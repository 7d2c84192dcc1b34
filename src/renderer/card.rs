//! Card rendering.
//!
//! Renders one card into a bordered box: truncated title, optional
//! image placeholder block, wrapped body preview capped with an
//! ellipsis, and a tag row. The row count this renderer produces for a
//! given width is the realized height the correction pass feeds back
//! into the packer, so [`realized_card_height`] and [`draw_card`] must
//! agree exactly.

use crate::layout::{truncate_text, wrap_text};
use crate::types::{Attr, BorderStyle, Card};

use super::buffer::CellBuffer;

/// Rows taken by the image placeholder block.
pub const IMAGE_BLOCK_ROWS: u16 = 4;

/// Cap on body preview lines. Matches `EstimateConfig::cells().max_lines`.
pub const MAX_BODY_LINES: usize = 6;

/// Narrowest card that still gets a border and one content column.
/// Below this, [`draw_card`] draws nothing and [`realized_card_height`]
/// is 0.
pub const MIN_CARD_WIDTH: u16 = 3;

fn title_of(card: &Card) -> &str {
    if card.title.is_empty() {
        "Untitled"
    } else {
        &card.title
    }
}

/// Content lines of a card at `inner_width` (the width inside the
/// border), top to bottom, without the border rows.
pub fn card_lines(card: &Card, inner_width: u16) -> Vec<String> {
    let inner_width = inner_width.max(1);
    let mut lines = Vec::new();

    lines.push(truncate_text(title_of(card), inner_width));

    if card.has_image {
        let block: String = "▒".repeat(inner_width as usize);
        for _ in 0..IMAGE_BLOCK_ROWS {
            lines.push(block.clone());
        }
    }

    if !card.body.is_empty() {
        let mut body = wrap_text(&card.body, inner_width);
        if body.len() > MAX_BODY_LINES {
            body.truncate(MAX_BODY_LINES);
            if let Some(last) = body.pop() {
                body.push(truncate_text(&format!("{last} …"), inner_width));
            }
        }
        lines.append(&mut body);
    }

    if !card.tags.is_empty() {
        let row = card
            .tags
            .iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(truncate_text(&row, inner_width));
    }

    lines
}

/// Realized height in rows of a card drawn at `width` (border included).
///
/// At least 3 (border rows plus the title row) for any drawable width.
/// Widths below [`MIN_CARD_WIDTH`] cannot fit a bordered card; they
/// realize as 0, and nothing is drawn. The zero never reaches the
/// packer: `resolve_heights` and `commit_measured` both reject
/// non-positive heights, so such cards keep their estimates.
pub fn realized_card_height(card: &Card, width: u16) -> u16 {
    if width < MIN_CARD_WIDTH {
        return 0;
    }
    card_lines(card, width - 2).len() as u16 + 2
}

/// Draw a card at (x, y). Returns the height drawn, which equals
/// [`realized_card_height`] for the same width. The card is drawn at
/// exactly `width` cells; a width below [`MIN_CARD_WIDTH`] draws
/// nothing and returns 0.
pub fn draw_card(buf: &mut CellBuffer, card: &Card, x: u16, y: u16, width: u16) -> u16 {
    if width < MIN_CARD_WIDTH {
        return 0;
    }
    let inner = width - 2;
    let lines = card_lines(card, inner);
    let height = lines.len() as u16 + 2;

    buf.draw_box(x, y, width, height, BorderStyle::Rounded);

    for (i, line) in lines.iter().enumerate() {
        let attrs = if i == 0 {
            Attr::BOLD
        } else if card.has_image && (1..=IMAGE_BLOCK_ROWS as usize).contains(&i) {
            Attr::DIM
        } else if !card.tags.is_empty() && i == lines.len() - 1 {
            Attr::DIM
        } else {
            Attr::NONE
        };
        buf.draw_text(x + 1, y + 1 + i as u16, line, attrs);
    }

    height
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_row_and_border() {
        let card = Card::new(1, "Falling", "");
        assert_eq!(realized_card_height(&card, 12), 3);

        let mut buf = CellBuffer::new(12, 3);
        let h = draw_card(&mut buf, &card, 0, 0, 12);
        assert_eq!(h, 3);
        assert_eq!(buf.row_string(0), "╭──────────╮");
        assert_eq!(buf.row_string(1), "│Falling   │");
        assert_eq!(buf.row_string(2), "╰──────────╯");
    }

    #[test]
    fn test_untitled_fallback() {
        let card = Card::new(1, "", "");
        let lines = card_lines(&card, 10);
        assert_eq!(lines[0], "Untitled");
    }

    #[test]
    fn test_image_block_rows() {
        let mut card = Card::new(1, "t", "");
        let without = realized_card_height(&card, 12);
        card.has_image = true;
        let with = realized_card_height(&card, 12);
        assert_eq!(with - without, IMAGE_BLOCK_ROWS);
    }

    #[test]
    fn test_body_preview_is_capped() {
        let card = Card::new(1, "t", "x".repeat(1000));
        let lines = card_lines(&card, 10);
        // title + capped body
        assert_eq!(lines.len(), 1 + MAX_BODY_LINES);
        assert!(lines.last().unwrap().ends_with('…'));
    }

    #[test]
    fn test_tag_row() {
        let mut card = Card::new(1, "t", "");
        card.tags = vec!["lucid".into(), "flying".into()];
        let lines = card_lines(&card, 20);
        assert_eq!(lines.last().unwrap(), "#lucid #flying");
    }

    #[test]
    fn test_draw_matches_realized_height() {
        let mut card = Card::new(1, "A long dream title", "Some body text that wraps a few times over");
        card.has_image = true;
        card.tags = vec!["vivid".into()];

        for width in [3u16, 8, 14, 25] {
            let expected = realized_card_height(&card, width);
            let mut buf = CellBuffer::new(40, 40);
            let drawn = draw_card(&mut buf, &card, 0, 0, width);
            assert_eq!(drawn, expected);
        }
    }

    #[test]
    fn test_realized_height_at_narrow_widths() {
        let card = Card::default();
        for width in [3u16, 4, 10] {
            assert!(realized_card_height(&card, width) >= 3);
        }
        for width in [0u16, 1, 2] {
            assert_eq!(realized_card_height(&card, width), 0);
        }
    }

    #[test]
    fn test_too_narrow_to_draw() {
        let card = Card::new(1, "Falling", "body");
        let blank = CellBuffer::new(10, 5);

        for width in [0u16, 1, 2] {
            let mut buf = CellBuffer::new(10, 5);
            assert_eq!(draw_card(&mut buf, &card, 0, 0, width), 0);
            assert_eq!(buf, blank);
        }
    }
}
