//! Drawing-surface abstraction.
//!
//! The shimmer core decides *what* to fill; a [`Canvas`] decides how pixels
//! end up on screen. Two implementations ship with the engine:
//! - [`DrawList`]: records commands for a host renderer (GPU or otherwise)
//! - [`Raster`]: a small software compositor, used for previews and tests

mod list;
mod raster;

pub use list::{DrawCmd, DrawList};
pub use raster::Raster;

use crate::coords::Rect;
use crate::paint::{BlendMode, Paint};

/// A surface the shimmer and its host content are drawn onto.
pub trait Canvas {
    /// Fills `rect` with `paint`, combined with existing pixels by `blend`.
    fn fill_rect(&mut self, rect: Rect, paint: &Paint, blend: BlendMode);

    /// Begins an offscreen layer. Fills until the matching [`pop_layer`]
    /// only see pixels drawn inside the layer.
    ///
    /// [`pop_layer`]: Canvas::pop_layer
    fn push_layer(&mut self) {}

    /// Composites the most recent layer onto its parent with `SrcOver`.
    fn pop_layer(&mut self) {}
}
