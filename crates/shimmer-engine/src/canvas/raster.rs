use crate::coords::{Rect, Vec2};
use crate::paint::{BlendMode, Color, Paint};

use super::Canvas;

/// Software canvas over a premultiplied pixel buffer.
///
/// Pixels are sampled at their centers with no anti-aliasing: a pixel is
/// covered when its center lies inside the filled rect. Each layer is a
/// full-size transparent buffer composited with `SrcOver` when popped.
#[derive(Debug, Clone)]
pub struct Raster {
    width: u32,
    height: u32,
    base: Vec<Color>,
    layers: Vec<Vec<Color>>,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            base: vec![Color::transparent(); width as usize * height as usize],
            layers: Vec::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width as f32, self.height as f32)
    }

    /// Pixel of the base buffer. Out-of-range coordinates read as transparent.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        if x >= self.width || y >= self.height {
            return Color::transparent();
        }
        self.base[(y * self.width + x) as usize]
    }

    /// Clears the base buffer and drops any open layers.
    pub fn clear(&mut self, color: Color) {
        self.base.fill(color);
        self.layers.clear();
    }

    /// Straight-alpha RGBA8 bytes, row-major, suitable for image encoders.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.base.iter().flat_map(|c| c.to_rgba8()).collect()
    }

    fn target(&mut self) -> &mut Vec<Color> {
        match self.layers.last_mut() {
            Some(layer) => layer,
            None => &mut self.base,
        }
    }
}

impl Canvas for Raster {
    fn fill_rect(&mut self, rect: Rect, paint: &Paint, blend: BlendMode) {
        let Some(area) = rect.intersect(self.bounds()) else {
            return;
        };

        // Pixel centers inside the rect.
        let x0 = (area.origin.x - 0.5).ceil().max(0.0) as u32;
        let y0 = (area.origin.y - 0.5).ceil().max(0.0) as u32;
        let x1 = ((area.max().x - 0.5).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((area.max().y - 0.5).ceil().max(0.0) as u32).min(self.height);

        let width = self.width;
        let pixels = self.target();
        for y in y0..y1 {
            for x in x0..x1 {
                let src = paint.color_at(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
                let idx = (y * width + x) as usize;
                pixels[idx] = blend.blend(src, pixels[idx]);
            }
        }
    }

    fn push_layer(&mut self) {
        self.layers.push(vec![Color::transparent(); self.base.len()]);
    }

    fn pop_layer(&mut self) {
        let Some(layer) = self.layers.pop() else {
            return;
        };
        let parent = self.target();
        for (dst, src) in parent.iter_mut().zip(layer) {
            *dst = BlendMode::SrcOver.blend(src, *dst);
        }
    }
}
