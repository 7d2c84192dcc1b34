//! # cascade-tui
//!
//! Reactive waterfall (masonry) layout engine for terminal card feeds.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! Cards of unknown height are arranged into N equal-width columns in
//! two passes: a fast first pass using estimated heights, then a
//! corrected pass once the rendered frame has realized heights. The
//! whole flow is derived-based:
//!
//! ```text
//! card store + viewport signals → flowDerived → frameDerived → render effect
//! ```
//!
//! Replacing the cards, resizing the container, or changing the column
//! count re-runs the chain from estimation with the latest inputs.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Card, Cell, Attr, BorderStyle)
//! - [`layout`] - Pure layout core: estimator, greedy column packer,
//!   text measurement
//! - [`pipeline`] - Reactive stores, deriveds, mount/run event loop
//! - [`renderer`] - Terminal binding (cell buffer, card renderer,
//!   crossterm output)

pub mod layout;
pub mod pipeline;
pub mod renderer;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use layout::{
    column_width, estimate_height, measure_text_height, pack, resolve_heights, string_width,
    truncate_text, wrap_text, CardPosition, EstimateConfig, FlowLayout,
};

pub use pipeline::{
    cards, commit_measured, create_flow_derived, create_frame_derived, detect_container_width,
    mount, reset_flow_state, run, set_cards, set_column_count, set_container_width,
    set_estimate_config, set_gap, tick, unmount, FrameResult, MountHandle,
};

pub use renderer::{draw_card, realized_card_height, CellBuffer, TermRenderer};
