//! Paint model shared between the shimmer core and canvases.
//!
//! Scope:
//! - color representation (linear premultiplied alpha, packed ARGB input)
//! - paint sources (solid, linear and radial gradients)
//! - blend modes used when filling
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
mod paint;

pub use color::{Argb, Color};
pub use gradient::{ColorStop, LinearGradient, RadialGradient};
pub use paint::{BlendMode, Paint};
