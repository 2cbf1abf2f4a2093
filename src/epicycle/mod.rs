//! Epicycle decomposition and animation.
//!
//! Turns a DFT's complex output into an ordered chain of rotating circles and
//! moves that chain through time.

mod indexer;
mod set;

// Re-export public types
pub use indexer::{map_index, ordinal_bins, signed_frequency, try_map_index};
pub use set::{Epicycle, EpicycleSet, DEGENERATE_DC_EPSILON};
