//! Parameter definitions with units and documented semantics.
//!
//! All tunable numbers live here with:
//! - Units (pixels, seconds, epicycle time)
//! - Documented ranges and meanings
//! - A `validate()` per concern

mod animation;
mod render;
mod signal;

// Re-export all types
pub use animation::AnimationConfig;
pub use render::{RecordingConfig, RenderConfig};
pub use signal::SignalConfig;
