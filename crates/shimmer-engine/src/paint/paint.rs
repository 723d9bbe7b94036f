use crate::coords::{Affine, Vec2};
use crate::paint::Color;
use crate::paint::gradient::{LinearGradient, RadialGradient};

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
    RadialGradient(RadialGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Replaces the shader-local to device transform of gradient paints.
    ///
    /// Solid paints are position-independent and ignore it.
    #[inline]
    pub fn set_local_matrix(&mut self, matrix: Affine) {
        match self {
            Paint::Solid(_) => {}
            Paint::LinearGradient(g) => g.local_matrix = matrix,
            Paint::RadialGradient(g) => g.local_matrix = matrix,
        }
    }

    /// Source color at a device-space point.
    #[inline]
    pub fn color_at(&self, device: Vec2) -> Color {
        match self {
            Paint::Solid(c) => *c,
            Paint::LinearGradient(g) => g.color_at(device),
            Paint::RadialGradient(g) => g.color_at(device),
        }
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

/// How a fill combines its source with what is already on the canvas.
///
/// Premultiplied formulas (`s` source, `d` destination):
/// - `SrcOver`: `s + d * (1 - s.a)`
/// - `SrcIn`:   `s * d.a` (source color, kept only where content exists)
/// - `DstIn`:   `d * s.a` (content kept, its alpha scaled by the source)
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BlendMode {
    #[default]
    SrcOver,
    SrcIn,
    DstIn,
}

impl BlendMode {
    #[inline]
    pub fn blend(self, src: Color, dst: Color) -> Color {
        match self {
            BlendMode::SrcOver => Color::from_premul(
                src.r + dst.r * (1.0 - src.a),
                src.g + dst.g * (1.0 - src.a),
                src.b + dst.b * (1.0 - src.a),
                src.a + dst.a * (1.0 - src.a),
            ),
            BlendMode::SrcIn => src.scale(dst.a),
            BlendMode::DstIn => dst.scale(src.a),
        }
    }
}
