//! Per-frame sweep geometry.
//!
//! Given the drawable bounds, the sweep direction, the band tilt and a
//! progress value, these functions produce the shader-local matrix that
//! places the gradient band for the current frame.

use crate::coords::{Affine, Rect, Vec2};

use super::config::Direction;

#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Maps a raw driver value into the [0, 1] range used for placement.
///
/// Values past 1 belong to the repeat-delay dwell, where the band stays
/// parked at its end position. NaN maps to 0.
#[inline]
pub fn clamp_progress(raw: f32) -> f32 {
    if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) }
}

/// Distance the band travels on each axis so that a tilted band fully
/// clears the rect at both ends of the sweep.
///
/// At zero tilt this is exactly `(w, h)`.
#[inline]
pub fn travel(w: f32, h: f32, tilt_degrees: f32) -> Vec2 {
    let tilt_tan = tilt_degrees.to_radians().tan();
    Vec2::new(w + tilt_tan * h, h + tilt_tan * w)
}

/// Band translation for direction and progress `t`.
pub fn sweep_offset(direction: Direction, travel: Vec2, t: f32) -> Vec2 {
    match direction {
        Direction::LeftToRight => Vec2::new(lerp(-travel.x, travel.x, t), 0.0),
        Direction::RightToLeft => Vec2::new(lerp(travel.x, -travel.x, t), 0.0),
        Direction::TopToBottom => Vec2::new(0.0, lerp(-travel.y, travel.y, t)),
        Direction::BottomToTop => Vec2::new(0.0, lerp(travel.y, -travel.y, t)),
    }
}

/// Shader-local matrix for one frame.
///
/// Rotation by `tilt_degrees` about the rect center, with the sweep
/// translation applied before it (in the rotated band's frame). Pivot and
/// offsets are relative to the rect; the rect origin is added last so the
/// result maps into device space.
pub fn sweep_matrix(bounds: Rect, direction: Direction, tilt_degrees: f32, t: f32) -> Affine {
    let travel = travel(bounds.width(), bounds.height(), tilt_degrees);
    let offset = sweep_offset(direction, travel, t);

    Affine::translate(bounds.origin.x, bounds.origin.y)
        .then(&Affine::rotate_about(tilt_degrees, bounds.local_center()))
        .pre_translate(offset.x, offset.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn clamp_progress_parks_band_during_delay() {
        assert_eq!(clamp_progress(1.2), 1.0);
        assert_eq!(clamp_progress(0.4), 0.4);
        assert_eq!(clamp_progress(-0.1), 0.0);
        assert_eq!(clamp_progress(f32::NAN), 0.0);
    }

    #[test]
    fn zero_tilt_travel_is_rect_size() {
        assert_eq!(travel(100.0, 50.0, 0.0), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn tilted_travel_adds_cross_term() {
        let t = travel(100.0, 50.0, 45.0);
        assert!(approx_eq(t.x, 150.0));
        assert!(approx_eq(t.y, 150.0));
    }

    #[test]
    fn offsets_per_direction() {
        let tr = Vec2::new(100.0, 50.0);
        assert_eq!(sweep_offset(Direction::LeftToRight, tr, 0.0), Vec2::new(-100.0, 0.0));
        assert_eq!(sweep_offset(Direction::LeftToRight, tr, 1.0), Vec2::new(100.0, 0.0));
        assert_eq!(sweep_offset(Direction::RightToLeft, tr, 0.0), Vec2::new(100.0, 0.0));
        assert_eq!(sweep_offset(Direction::TopToBottom, tr, 0.25), Vec2::new(0.0, -25.0));
        assert_eq!(sweep_offset(Direction::BottomToTop, tr, 1.0), Vec2::new(0.0, -50.0));
    }

    #[test]
    fn midpoint_without_tilt_is_identity() {
        let m = sweep_matrix(Rect::from_size(100.0, 50.0), Direction::LeftToRight, 0.0, 0.5);
        let tr = m.translation();
        assert!(approx_eq(tr.x, 0.0));
        assert!(approx_eq(tr.y, 0.0));
        assert!(approx_eq(m.data[0], 1.0));
        assert!(approx_eq(m.data[1], 0.0));
    }

    #[test]
    fn start_of_sweep_parks_band_left_of_rect() {
        let m = sweep_matrix(Rect::from_size(100.0, 50.0), Direction::LeftToRight, 0.0, 0.0);
        // Shader-local x = 100 (band far edge) lands on the rect's left edge.
        let p = m.map_point(Vec2::new(100.0, 0.0));
        assert!(approx_eq(p.x, 0.0));
    }

    #[test]
    fn tilted_translation_runs_along_band_frame() {
        // A tilted horizontal sweep moves along the tilted axis, not along x.
        let bounds = Rect::from_size(100.0, 100.0);
        let a = sweep_matrix(bounds, Direction::LeftToRight, 30.0, 0.25).map_point(Vec2::zero());
        let b = sweep_matrix(bounds, Direction::LeftToRight, 30.0, 0.75).map_point(Vec2::zero());
        let slope = (b.y - a.y) / (b.x - a.x);
        assert!(approx_eq(slope, 30f32.to_radians().tan()));
    }

    #[test]
    fn origin_offset_moves_matrix() {
        let m = sweep_matrix(Rect::new(10.0, 20.0, 100.0, 50.0), Direction::LeftToRight, 0.0, 0.5);
        assert_eq!(m.translation(), Vec2::new(10.0, 20.0));
    }
}
