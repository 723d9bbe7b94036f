//! Shimmer core.
//!
//! - [`config`]: immutable parameters and their derived gradient arrays
//! - [`sweep`]: per-frame band placement
//! - [`animator`]: the time-based progress driver
//! - [`drawable`]: ties the above to a rect and a canvas
//! - [`preset`]: TOML presets layered over the builder

pub mod animator;
pub mod config;
pub mod drawable;
pub mod preset;
pub mod sweep;
mod uniforms;

pub use animator::{AnimatorListener, AnimatorState, SweepAnimator, Tick};
pub use config::{
    Direction, HighlightMode, RepeatCount, RepeatMode, STOP_COUNT, Shape, ShimmerBuilder,
    ShimmerConfig, gradient_positions,
};
pub use drawable::{Invalidate, ShimmerDrawable};
pub use preset::ShimmerPreset;
pub use uniforms::ShimmerUniforms;
