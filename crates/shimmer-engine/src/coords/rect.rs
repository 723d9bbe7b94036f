use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// This is the unit of host bounds: hosts report the drawable's allocated
/// rect through it and canvases fill it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// A rect of the given size anchored at the origin.
    #[inline]
    pub const fn from_size(w: f32, h: f32) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    /// Center point in the rect's own coordinate space (not offset by origin).
    #[inline]
    pub fn local_center(self) -> Vec2 {
        self.size / 2.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.origin.x.max(other.origin.x);
        let y0 = self.origin.y.max(other.origin.y);
        let x1 = self.max().x.min(other.max().x);
        let y1 = self.max().y.min(other.max().y);

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }
}
