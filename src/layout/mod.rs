//! Waterfall layout core.
//!
//! Pure functions, no reactivity and no terminal I/O. The pipeline
//! module wires these into the derived graph:
//!
//! 1. [`estimate_height`] gives every card a provisional height before
//!    anything has been rendered.
//! 2. [`pack`] assigns each card, in input order, to the currently
//!    shortest column.
//! 3. After a frame has been rendered, [`resolve_heights`] swaps
//!    estimates for realized heights and the packer re-runs.
//!
//! Heights and offsets are `f32` layout units. The terminal binding
//! uses one unit per cell row; nothing in this module assumes that.

mod estimate;
mod pack;
mod text_measure;

pub use estimate::{estimate_height, resolve_heights, EstimateConfig};
pub use pack::{column_width, pack, CardPosition, FlowLayout};
pub use text_measure::{measure_text_height, string_width, truncate_text, wrap_text};
