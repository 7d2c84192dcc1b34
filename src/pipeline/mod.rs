//! Reactive pipeline.
//!
//! Connects the card store to the terminal output:
//!
//! ```text
//! card store + viewport signals → flowDerived → frameDerived → render effect
//!                    ↑                                              │
//!                    └────────── correction commit (tick) ──────────┘
//! ```
//!
//! ## Data flow
//!
//! 1. **flowDerived** - Estimates heights, packs cards into columns
//! 2. **frameDerived** - Draws positioned cards, collects realized heights
//! 3. **render effect** - Writes the frame to the terminal, stashes the
//!    realized heights
//! 4. **tick** - Commits the stash; the flow derived re-runs with
//!    measured heights (the corrected pass)
//!
//! ## Key design principles
//!
//! - **Pure deriveds**: flowDerived and frameDerived are pure computations
//! - **Side effects in the effect**: only the render effect touches the
//!   terminal, and only tick mutates the measured-height store
//! - **Restart, don't queue**: any input change re-runs the whole chain
//!   with the latest values; stale corrections are dropped by generation

pub mod cards;
pub mod correction;
pub mod flow_derived;
pub mod frame_derived;
pub mod mount;
pub mod viewport;

pub use cards::{
    cards, cards_generation, commit_measured, estimate_config, measured_height, reset_flow_state,
    set_cards, set_estimate_config,
};
pub use flow_derived::create_flow_derived;
pub use frame_derived::{create_frame_derived, FrameResult};
pub use mount::{apply_pending_correction, mount, run, tick, unmount, MountHandle};
pub use viewport::{
    column_count, container_width, detect_container_width, gap, set_column_count,
    set_container_width, set_gap,
};
