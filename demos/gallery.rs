//! Gallery demo - a journal card feed in the terminal.
//!
//! Demonstrates the full pipeline:
//! - Cards with mixed content (images, long bodies, tags)
//! - Estimated first pass, corrected second pass
//! - Live recompute on terminal resize
//!
//! Run with: cargo run --example gallery
//! Press 1/2/3 to change the column count, q or Esc to quit.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use cascade_tui::pipeline::apply_pending_correction;
use cascade_tui::{mount, set_cards, set_column_count, set_container_width, set_gap, Card};

fn sample_cards() -> Vec<Card> {
    let mut cards = Vec::new();

    let mut falling = Card::new(
        1,
        "Falling",
        "I was falling through layers of clouds, each one a different color. \
         The fall never frightened me; it felt like being handed down gently.",
    );
    falling.tags = vec!["recurring".into(), "calm".into()];
    cards.push(falling);

    let mut library = Card::new(
        2,
        "The endless library",
        "Shelves curved upward out of sight. Every book I opened was about a \
         day I had already lived, except the endings were different.",
    );
    library.has_image = true;
    library.tags = vec!["vivid".into()];
    cards.push(library);

    cards.push(Card::new(3, "Short one", "Just a door, slightly open."));

    let mut ocean = Card::new(
        4,
        "Glass ocean",
        "The sea had frozen into glass and I walked across it, watching \
         whales drift underneath like slow clouds. Someone kept calling my \
         name from the shore but the shore kept moving away.",
    );
    ocean.has_image = true;
    ocean.tags = vec!["water".into(), "lucid".into()];
    cards.push(ocean);

    cards.push(Card::new(5, "", "A dream I forgot the moment I woke up."));

    let mut train = Card::new(
        6,
        "Night train",
        "A train with no driver, windows showing seasons instead of places.",
    );
    train.tags = vec!["travel".into()];
    cards.push(train);

    cards
}

fn main() -> io::Result<()> {
    set_cards(sample_cards());
    set_column_count(2);
    set_gap(2);

    let handle = mount()?;

    while handle.is_running() {
        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Resize(width, _) => set_container_width(width),
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => handle.stop(),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        handle.stop()
                    }
                    KeyCode::Char('1') => set_column_count(1),
                    KeyCode::Char('2') => set_column_count(2),
                    KeyCode::Char('3') => set_column_count(3),
                    _ => {}
                },
                _ => {}
            }
        }

        apply_pending_correction();
    }

    handle.unmount();
    Ok(())
}
