use crate::coords::{Affine, Vec2};

use super::Color;

/// A single gradient stop.
///
/// `t` is expected in [0, 1]. Stops must be sorted by `t`; equal offsets
/// produce a hard edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Builds a stop list from index-aligned color and offset arrays.
pub fn stops_from<C: Into<Color> + Copy>(colors: &[C], positions: &[f32]) -> Vec<ColorStop> {
    colors
        .iter()
        .zip(positions)
        .map(|(&c, &t)| ColorStop::new(t, c.into()))
        .collect()
}

/// Evaluates a sorted stop list at `t`. Out-of-range `t` takes the edge
/// stop's color.
pub fn sample_stops(stops: &[ColorStop], t: f32) -> Color {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Color::transparent();
    };

    if t <= first.t {
        return first.color;
    }
    if t >= last.t {
        return last.color;
    }

    for pair in stops.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if t <= hi.t {
            let span = hi.t - lo.t;
            if span <= f32::EPSILON {
                return hi.color;
            }
            return lo.color.lerp(hi.color, (t - lo.t) / span);
        }
    }

    last.color
}

/// Linear gradient definition in shader-local pixel space.
///
/// Semantics:
/// - `start` and `end` are positions in shader-local space.
/// - `local_matrix` maps shader-local space to device space.
/// - Stops define premultiplied linear colors.
/// - Points past either end take the edge stop's color.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub local_matrix: Affine,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self {
            start,
            end,
            stops,
            local_matrix: Affine::IDENTITY,
        }
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }

    /// Gradient parameter of a shader-local point (projection onto the axis).
    #[inline]
    pub fn param_at(&self, local: Vec2) -> f32 {
        let axis = self.end - self.start;
        let len2 = axis.dot(axis);
        if len2 <= 0.0 {
            return 0.0;
        }
        (local - self.start).dot(axis) / len2
    }

    /// Color at a device-space point.
    pub fn color_at(&self, device: Vec2) -> Color {
        let Some(inv) = self.local_matrix.inverse() else {
            return Color::transparent();
        };
        let t = self.param_at(inv.map_point(device)).clamp(0.0, 1.0);
        sample_stops(&self.stops, t)
    }
}

/// Radial gradient definition in shader-local pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub stops: Vec<ColorStop>,
    pub local_matrix: Affine,
}

impl RadialGradient {
    pub fn new(center: Vec2, radius: f32, stops: Vec<ColorStop>) -> Self {
        Self {
            center,
            radius,
            stops,
            local_matrix: Affine::IDENTITY,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.radius > 0.0
            && self.stops.len() >= 2
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
    }

    #[inline]
    pub fn param_at(&self, local: Vec2) -> f32 {
        (local - self.center).length() / self.radius
    }

    pub fn color_at(&self, device: Vec2) -> Color {
        let Some(inv) = self.local_matrix.inverse() else {
            return Color::transparent();
        };
        let t = self.param_at(inv.map_point(device)).clamp(0.0, 1.0);
        sample_stops(&self.stops, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn black_white() -> Vec<ColorStop> {
        vec![
            ColorStop::new(0.0, Color::from_straight(0.0, 0.0, 0.0, 1.0)),
            ColorStop::new(1.0, Color::from_straight(1.0, 1.0, 1.0, 1.0)),
        ]
    }

    #[test]
    fn hard_edge_between_equal_offsets() {
        let red = Color::from_straight(1.0, 0.0, 0.0, 1.0);
        let blue = Color::from_straight(0.0, 0.0, 1.0, 1.0);
        let stops = vec![
            ColorStop::new(0.0, red),
            ColorStop::new(0.5, red),
            ColorStop::new(0.5, blue),
            ColorStop::new(1.0, blue),
        ];
        assert_eq!(sample_stops(&stops, 0.25), red);
        assert_eq!(sample_stops(&stops, 0.75), blue);
    }

    #[test]
    fn linear_midpoint_and_clamp() {
        let g = LinearGradient::new(Vec2::zero(), Vec2::new(100.0, 0.0), black_white());
        assert!(g.is_valid());
        assert!(approx_eq(g.color_at(Vec2::new(50.0, 7.0)).r, 0.5));
        assert_eq!(g.color_at(Vec2::new(-40.0, 0.0)).r, 0.0);
        assert_eq!(g.color_at(Vec2::new(400.0, 0.0)).r, 1.0);
    }

    #[test]
    fn linear_respects_local_matrix() {
        let mut g = LinearGradient::new(Vec2::zero(), Vec2::new(100.0, 0.0), black_white());
        g.local_matrix = Affine::translate(50.0, 0.0);
        // Device x = 50 is local x = 0.
        assert!(approx_eq(g.color_at(Vec2::new(50.0, 0.0)).r, 0.0));
        assert!(approx_eq(g.color_at(Vec2::new(100.0, 0.0)).r, 0.5));
    }

    #[test]
    fn radial_falls_off_with_distance() {
        let g = RadialGradient::new(Vec2::new(10.0, 10.0), 10.0, black_white());
        assert!(g.is_valid());
        assert_eq!(g.color_at(Vec2::new(10.0, 10.0)).r, 0.0);
        assert!(approx_eq(g.color_at(Vec2::new(15.0, 10.0)).r, 0.5));
        assert_eq!(g.color_at(Vec2::new(40.0, 10.0)).r, 1.0);
    }

    #[test]
    fn degenerate_axis_is_invalid() {
        let g = LinearGradient::new(Vec2::zero(), Vec2::zero(), black_white());
        assert!(!g.is_valid());
    }
}
