//! Terminal binding: cell buffer, card renderer, crossterm output.
//!
//! The card renderer doubles as the measurement source: the number of
//! rows it produces for a card at a given width is the realized height
//! the correction pass commits back to the layout.

mod buffer;
mod card;
mod term;

pub use buffer::CellBuffer;
pub use card::{
    card_lines, draw_card, realized_card_height, IMAGE_BLOCK_ROWS, MAX_BODY_LINES, MIN_CARD_WIDTH,
};
pub use term::TermRenderer;
