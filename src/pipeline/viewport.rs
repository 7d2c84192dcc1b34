//! Viewport state signals.
//!
//! Root signals for the container width, column count, and inter-card
//! gap. Any change re-runs the flow derived and, from there, the whole
//! pipeline.

use spark_signals::signal;
use std::cell::RefCell;

thread_local! {
    static CONTAINER_WIDTH: RefCell<spark_signals::Signal<u16>> = RefCell::new(signal(80));
    static COLUMN_COUNT: RefCell<spark_signals::Signal<u16>> = RefCell::new(signal(2));
    static GAP: RefCell<spark_signals::Signal<u16>> = RefCell::new(signal(2));
}

/// Get the current container width in cells.
pub fn container_width() -> u16 {
    CONTAINER_WIDTH.with(|w| w.borrow().get())
}

/// Set the container width (called on resize events).
pub fn set_container_width(width: u16) {
    CONTAINER_WIDTH.with(|w| w.borrow().set(width));
}

/// Get the container width signal for reactive tracking.
pub fn container_width_signal() -> spark_signals::Signal<u16> {
    CONTAINER_WIDTH.with(|w| w.borrow().clone())
}

/// Get the current column count.
pub fn column_count() -> u16 {
    COLUMN_COUNT.with(|c| c.borrow().get())
}

/// Set the column count. Clamped to at least 1.
pub fn set_column_count(columns: u16) {
    COLUMN_COUNT.with(|c| c.borrow().set(columns.max(1)));
}

/// Get the column count signal for reactive tracking.
pub fn column_count_signal() -> spark_signals::Signal<u16> {
    COLUMN_COUNT.with(|c| c.borrow().clone())
}

/// Get the current inter-card gap in cells.
pub fn gap() -> u16 {
    GAP.with(|g| g.borrow().get())
}

/// Set the inter-card gap.
pub fn set_gap(gap: u16) {
    GAP.with(|g| g.borrow().set(gap));
}

/// Get the gap signal for reactive tracking.
pub fn gap_signal() -> spark_signals::Signal<u16> {
    GAP.with(|g| g.borrow().clone())
}

/// Detect and set the container width from the terminal.
pub fn detect_container_width() {
    if let Ok((width, _)) = crossterm::terminal::size() {
        set_container_width(width);
    }
}
