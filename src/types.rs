//! Core types shared across the layout core, pipeline, and renderer.

// =============================================================================
// Cards
// =============================================================================

/// Identifier for a card, assigned by the caller.
///
/// The engine never generates ids; it only uses them to correlate a
/// positioned card with its realized height on the rendering surface.
pub type CardId = u64;

/// A single card in the feed.
///
/// Owned by the caller. The layout engine never mutates a card; it reads
/// only the fields that feed height estimation (`has_image`, `body`,
/// `tags`) and the fields the card renderer displays.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Card {
    pub id: CardId,
    /// Card title. Rendered truncated to one line; empty titles get a
    /// placeholder at render time.
    pub title: String,
    /// Body text. Length drives estimation; the renderer wraps it and
    /// caps the preview.
    pub body: String,
    /// Whether the card carries a cover image block.
    pub has_image: bool,
    /// Tag labels shown on one row below the body.
    pub tags: Vec<String>,
}

impl Card {
    /// Convenience constructor for the common case.
    pub fn new(id: CardId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            ..Default::default()
        }
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::DIM`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 4;
    }
}

// =============================================================================
// Cell - The atomic unit of terminal rendering
// =============================================================================

/// A single terminal cell.
///
/// The frame derived computes these, the renderer outputs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// Border style
// =============================================================================

/// Border drawn around a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// No border; the card body starts at its top-left corner.
    None,
    /// Single-line box drawing characters.
    #[default]
    Single,
    /// Rounded corners.
    Rounded,
}

impl BorderStyle {
    /// Corner and edge characters: (top-left, top-right, bottom-left,
    /// bottom-right, horizontal, vertical).
    pub fn chars(self) -> Option<(char, char, char, char, char, char)> {
        match self {
            BorderStyle::None => None,
            BorderStyle::Single => Some(('┌', '┐', '└', '┘', '─', '│')),
            BorderStyle::Rounded => Some(('╭', '╮', '╰', '╯', '─', '│')),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
