//! Shimmer engine crate.
//!
//! This crate owns the shimmer core and the drawing primitives it renders
//! through. Hosts embed a [`shimmer::ShimmerDrawable`] and feed it bounds,
//! frames and a [`canvas::Canvas`].

pub mod canvas;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod shimmer;
pub mod time;

mod error;

pub use error::{Result, ShimmerError};
