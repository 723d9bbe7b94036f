//! Shimmer UI: a host container on top of `shimmer-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use shimmer_ui::prelude::*;
//!
//! let mut layout = ShimmerLayout::new(
//!     Placeholder::new(grey)
//!         .bar(Rect::new(8.0, 8.0, 48.0, 48.0))
//!         .bar(Rect::new(64.0, 12.0, 160.0, 12.0)),
//! );
//! layout.on_attached();
//! layout.layout(rect);
//!
//! // In your frame callback:
//! layout.on_frame();
//! if layout.take_needs_redraw() {
//!     draw_list.clear();
//!     layout.dispatch_draw(&mut draw_list);
//!     // Pass draw_list to your renderer.
//! }
//! ```

pub mod content;
pub mod layout;

pub use content::{Content, Placeholder};
pub use layout::ShimmerLayout;

/// Everything a host needs. Import this where the layout is embedded.
pub mod prelude {
    pub use crate::content::{Content, Placeholder};
    pub use crate::layout::ShimmerLayout;

    // Re-export the engine primitives everyone needs.
    pub use shimmer_engine::canvas::{Canvas, DrawCmd, DrawList, Raster};
    pub use shimmer_engine::coords::{Rect, Vec2};
    pub use shimmer_engine::paint::{Argb, BlendMode, Color, Paint};
    pub use shimmer_engine::shimmer::{
        AnimatorListener, Direction, HighlightMode, RepeatCount, RepeatMode, Shape,
        ShimmerBuilder, ShimmerConfig, ShimmerPreset,
    };
}
