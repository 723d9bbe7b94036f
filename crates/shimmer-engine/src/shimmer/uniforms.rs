use bytemuck::{Pod, Zeroable};

use crate::coords::{Affine, Rect, Vec2};
use crate::paint::{BlendMode, Color};

use super::config::{STOP_COUNT, Shape, ShimmerConfig};

/// Uniform block for hosts that evaluate the shimmer gradient in a fragment
/// shader instead of going through [`Canvas`](crate::canvas::Canvas).
///
/// Layout (160 bytes, std140-compatible):
///
///  offset   0  inv_matrix  [[f32; 4]; 2]  device -> shader-local rows (a, b, tx, _)
///  offset  32  rect        [f32; 4]       origin.xy, size.xy
///  offset  48  gradient    [f32; 4]       linear: start.xy end.xy / radial: center.xy radius _
///  offset  64  positions   [f32; 4]
///  offset  80  colors      [[f32; 4]; 4]  premultiplied
///  offset 144  shape       u32            0 linear, 1 radial
///  offset 148  blend       u32            0 src-over, 1 src-in, 2 dst-in
///  offset 152  _pad        [u32; 2]
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ShimmerUniforms {
    pub inv_matrix: [[f32; 4]; 2],
    pub rect: [f32; 4],
    pub gradient: [f32; 4],
    pub positions: [f32; STOP_COUNT],
    pub colors: [[f32; 4]; STOP_COUNT],
    pub shape: u32,
    pub blend: u32,
    pub _pad: [u32; 2],
}

impl ShimmerUniforms {
    pub const SHAPE_LINEAR: u32 = 0;
    pub const SHAPE_RADIAL: u32 = 1;

    /// Packs one frame of shimmer state.
    ///
    /// `band` is the band size in pixels and `matrix` the shader-local to
    /// device transform for the current progress. A singular matrix packs
    /// as identity.
    pub fn new(config: &ShimmerConfig, bounds: Rect, band: Vec2, matrix: Affine) -> Self {
        let inv = matrix.inverse().unwrap_or(Affine::IDENTITY);

        let (shape, gradient) = match config.shape() {
            Shape::Linear if config.direction().is_vertical() => {
                (Self::SHAPE_LINEAR, [0.0, 0.0, 0.0, band.y])
            }
            Shape::Linear => (Self::SHAPE_LINEAR, [0.0, 0.0, band.x, 0.0]),
            Shape::Radial => (
                Self::SHAPE_RADIAL,
                [band.x / 2.0, band.y / 2.0, radial_radius(band), 0.0],
            ),
        };

        let mut colors = [[0.0; 4]; STOP_COUNT];
        for (dst, &argb) in colors.iter_mut().zip(config.colors()) {
            let c = Color::from(argb);
            *dst = [c.r, c.g, c.b, c.a];
        }

        Self {
            inv_matrix: inv.rows(),
            rect: [bounds.origin.x, bounds.origin.y, bounds.width(), bounds.height()],
            gradient,
            positions: *config.positions(),
            colors,
            shape,
            blend: blend_code(config.blend_mode()),
            _pad: [0; 2],
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Radius that reaches the band's corners from its center.
#[inline]
pub(crate) fn radial_radius(band: Vec2) -> f32 {
    band.x.max(band.y) / std::f32::consts::SQRT_2
}

fn blend_code(mode: BlendMode) -> u32 {
    match mode {
        BlendMode::SrcOver => 0,
        BlendMode::SrcIn => 1,
        BlendMode::DstIn => 2,
    }
}
