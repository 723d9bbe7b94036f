//! Geometry types shared by the paint model, canvases and the shimmer core.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Positive rotation angles turn +X towards +Y (clockwise on screen).

mod affine;
mod rect;
mod vec2;

pub use affine::Affine;
pub use rect::Rect;
pub use vec2::Vec2;
