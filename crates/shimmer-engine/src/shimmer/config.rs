use std::time::Duration;

use crate::error::{Result, ShimmerError};
use crate::paint::{Argb, BlendMode};

/// Number of gradient stops every shimmer uses.
pub const STOP_COUNT: usize = 4;

/// Keeps the solid core of a linear band from collapsing to zero width.
const CORE_EPSILON: f32 = 0.001;

/// Shape of the highlight.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// A straight band, like light reflecting off a surface.
    #[default]
    Linear,
    /// A spotlight fading out from the band center.
    Radial,
}

/// Direction of the sweep.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    LeftToRight,
    TopToBottom,
    RightToLeft,
    BottomToTop,
}

impl Direction {
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::TopToBottom | Direction::BottomToTop)
    }
}

/// How the highlight is composited over the content.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightMode {
    /// The band modulates the content's alpha (`DstIn`).
    #[default]
    Alpha,
    /// The band paints its own colors where content exists (`SrcIn`).
    Color,
}

impl HighlightMode {
    #[inline]
    pub fn blend_mode(self) -> BlendMode {
        match self {
            HighlightMode::Alpha => BlendMode::DstIn,
            HighlightMode::Color => BlendMode::SrcIn,
        }
    }
}

/// What happens when a sweep finishes and another one follows.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatMode {
    /// Jump back to the start.
    #[default]
    Restart,
    /// Play every other sweep backwards.
    Reverse,
}

/// How many extra sweeps follow the first one.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum RepeatCount {
    #[default]
    Infinite,
    /// `Finite(0)` plays once, `Finite(2)` three times.
    Finite(u32),
}

/// Immutable shimmer parameters plus the derived gradient arrays.
///
/// Built with [`ShimmerBuilder`]. To change a parameter, start a new builder
/// with [`ShimmerBuilder::from_config`] and build again.
#[derive(Debug, Clone, PartialEq)]
pub struct ShimmerConfig {
    pub(crate) shape: Shape,
    pub(crate) direction: Direction,
    pub(crate) highlight_mode: HighlightMode,
    pub(crate) highlight_color: Argb,
    pub(crate) base_color: Argb,
    pub(crate) fixed_width: u32,
    pub(crate) fixed_height: u32,
    pub(crate) width_ratio: f32,
    pub(crate) height_ratio: f32,
    pub(crate) intensity: f32,
    pub(crate) dropoff: f32,
    pub(crate) tilt: f32,
    pub(crate) clip_to_children: bool,
    pub(crate) auto_start: bool,
    pub(crate) repeat_count: RepeatCount,
    pub(crate) repeat_mode: RepeatMode,
    pub(crate) duration: Duration,
    pub(crate) repeat_delay: Duration,
    pub(crate) start_delay: Duration,

    colors: [Argb; STOP_COUNT],
    positions: [f32; STOP_COUNT],
}

impl Default for ShimmerConfig {
    fn default() -> Self {
        ShimmerBuilder::alpha().build()
    }
}

impl ShimmerConfig {
    fn unbuilt() -> Self {
        Self {
            shape: Shape::Linear,
            direction: Direction::LeftToRight,
            highlight_mode: HighlightMode::Alpha,
            highlight_color: Argb::WHITE,
            base_color: Argb(0x4CFF_FFFF),
            fixed_width: 0,
            fixed_height: 0,
            width_ratio: 1.0,
            height_ratio: 1.0,
            intensity: 0.0,
            dropoff: 0.5,
            tilt: 20.0,
            clip_to_children: true,
            auto_start: true,
            repeat_count: RepeatCount::Infinite,
            repeat_mode: RepeatMode::Restart,
            duration: Duration::from_millis(1000),
            repeat_delay: Duration::ZERO,
            start_delay: Duration::ZERO,
            colors: [Argb::TRANSPARENT; STOP_COUNT],
            positions: [0.0; STOP_COUNT],
        }
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn highlight_mode(&self) -> HighlightMode {
        self.highlight_mode
    }

    #[inline]
    pub fn highlight_color(&self) -> Argb {
        self.highlight_color
    }

    /// Base color. In alpha mode only its alpha is meaningful.
    #[inline]
    pub fn base_color(&self) -> Argb {
        self.base_color
    }

    /// Fixed band width in pixels; 0 means use [`width_ratio`](Self::width_ratio).
    #[inline]
    pub fn fixed_width(&self) -> u32 {
        self.fixed_width
    }

    #[inline]
    pub fn fixed_height(&self) -> u32 {
        self.fixed_height
    }

    #[inline]
    pub fn width_ratio(&self) -> f32 {
        self.width_ratio
    }

    #[inline]
    pub fn height_ratio(&self) -> f32 {
        self.height_ratio
    }

    #[inline]
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    #[inline]
    pub fn dropoff(&self) -> f32 {
        self.dropoff
    }

    /// Band tilt in degrees.
    #[inline]
    pub fn tilt(&self) -> f32 {
        self.tilt
    }

    #[inline]
    pub fn clip_to_children(&self) -> bool {
        self.clip_to_children
    }

    #[inline]
    pub fn auto_start(&self) -> bool {
        self.auto_start
    }

    /// Sweeps after the first one.
    #[inline]
    pub fn repeat_count(&self) -> RepeatCount {
        self.repeat_count
    }

    #[inline]
    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat_mode
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Pause between sweeps, with the band parked past the far edge.
    #[inline]
    pub fn repeat_delay(&self) -> Duration {
        self.repeat_delay
    }

    #[inline]
    pub fn start_delay(&self) -> Duration {
        self.start_delay
    }

    /// Gradient colors, index-aligned with [`positions`](Self::positions).
    #[inline]
    pub fn colors(&self) -> &[Argb; STOP_COUNT] {
        &self.colors
    }

    /// Gradient stop offsets in [0, 1], non-decreasing.
    #[inline]
    pub fn positions(&self) -> &[f32; STOP_COUNT] {
        &self.positions
    }

    #[inline]
    pub fn blend_mode(&self) -> BlendMode {
        self.highlight_mode.blend_mode()
    }

    /// Whether the host must keep what is under the shimmer visible.
    ///
    /// An opaque shimmer may be drawn without a layer and without blending
    /// against content.
    #[inline]
    pub fn is_translucent(&self) -> bool {
        self.clip_to_children || self.highlight_mode == HighlightMode::Alpha
    }

    /// Band width for a container of the given width.
    #[inline]
    pub fn band_width(&self, container: f32) -> f32 {
        band_extent(self.fixed_width, self.width_ratio, container)
    }

    /// Band height for a container of the given height.
    #[inline]
    pub fn band_height(&self, container: f32) -> f32 {
        band_extent(self.fixed_height, self.height_ratio, container)
    }

    fn update_colors(&mut self) {
        let (hi, base) = (self.highlight_color, self.base_color);
        self.colors = match self.shape {
            Shape::Linear => [base, hi, hi, base],
            Shape::Radial => [hi, hi, base, base],
        };
    }

    fn update_positions(&mut self) {
        self.positions = gradient_positions(self.shape, self.intensity, self.dropoff);
    }
}

fn band_extent(fixed: u32, ratio: f32, container: f32) -> f32 {
    if fixed > 0 {
        fixed as f32
    } else {
        (ratio * container).round()
    }
}

/// Stop offsets for a shape, intensity and dropoff.
///
/// Linear bands are symmetric around 0.5; radial stops run from the center
/// outwards. Every offset is clamped into [0, 1].
pub fn gradient_positions(shape: Shape, intensity: f32, dropoff: f32) -> [f32; STOP_COUNT] {
    match shape {
        Shape::Linear => {
            let core_start = ((1.0 - intensity - CORE_EPSILON) / 2.0).max(0.0);
            let core_end = ((1.0 + intensity + CORE_EPSILON) / 2.0).min(1.0);
            // A dropoff narrower than the core epsilon must not cross the core.
            [
                ((1.0 - intensity - dropoff) / 2.0).max(0.0).min(core_start),
                core_start,
                core_end,
                ((1.0 + intensity + dropoff) / 2.0).min(1.0).max(core_end),
            ]
        }
        Shape::Radial => [
            0.0,
            intensity.min(1.0),
            (intensity + dropoff).min(1.0),
            1.0,
        ],
    }
}

/// Accumulates validated parameters for a [`ShimmerConfig`].
///
/// Fallible setters reject bad input right away, so a chain reads:
///
/// ```
/// # use shimmer_engine::shimmer::{ShimmerBuilder, Shape};
/// # fn main() -> shimmer_engine::Result<()> {
/// let config = ShimmerBuilder::color()
///     .shape(Shape::Radial)
///     .intensity(0.35)?
///     .dropoff(0.1)?
///     .build();
/// # assert!((config.positions()[2] - 0.45).abs() < 1e-6);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ShimmerBuilder {
    config: ShimmerConfig,
}

impl Default for ShimmerBuilder {
    fn default() -> Self {
        Self::alpha()
    }
}

impl ShimmerBuilder {
    /// Builder for a shimmer that modulates content alpha.
    pub fn alpha() -> Self {
        Self { config: ShimmerConfig::unbuilt() }
    }

    /// Builder for a shimmer that paints highlight and base colors.
    pub fn color() -> Self {
        Self::alpha().highlight_mode(HighlightMode::Color)
    }

    /// Starts from an existing configuration.
    pub fn from_config(config: &ShimmerConfig) -> Self {
        Self { config: config.clone() }
    }

    pub fn highlight_mode(mut self, mode: HighlightMode) -> Self {
        self.config.highlight_mode = mode;
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.config.shape = shape;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.config.direction = direction;
        self
    }

    /// Fixed band width in pixels; `0` falls back to the width ratio.
    pub fn fixed_width(mut self, px: i32) -> Result<Self> {
        self.config.fixed_width = non_negative_px("fixed width", px)?;
        Ok(self)
    }

    /// Fixed band height in pixels; `0` falls back to the height ratio.
    pub fn fixed_height(mut self, px: i32) -> Result<Self> {
        self.config.fixed_height = non_negative_px("fixed height", px)?;
        Ok(self)
    }

    /// Band width as a fraction of the container width.
    pub fn width_ratio(mut self, ratio: f32) -> Result<Self> {
        self.config.width_ratio = non_negative("width ratio", ratio)?;
        Ok(self)
    }

    /// Band height as a fraction of the container height.
    pub fn height_ratio(mut self, ratio: f32) -> Result<Self> {
        self.config.height_ratio = non_negative("height ratio", ratio)?;
        Ok(self)
    }

    /// Size of the solid core. Larger values give a wider band.
    pub fn intensity(mut self, intensity: f32) -> Result<Self> {
        self.config.intensity = non_negative("intensity", intensity)?;
        Ok(self)
    }

    /// Width of the fade edges around the core.
    pub fn dropoff(mut self, dropoff: f32) -> Result<Self> {
        self.config.dropoff = non_negative("dropoff", dropoff)?;
        Ok(self)
    }

    /// Band rotation in degrees.
    pub fn tilt(mut self, degrees: f32) -> Result<Self> {
        if !degrees.is_finite() {
            return Err(ShimmerError::invalid("tilt", degrees));
        }
        self.config.tilt = degrees;
        Ok(self)
    }

    /// Alpha of the base color, in [0, 1]. Out-of-range values are clamped.
    pub fn base_alpha(mut self, alpha: f32) -> Self {
        self.config.base_color = self.config.base_color.with_alpha_f32(alpha);
        self
    }

    /// Alpha of the highlight color, in [0, 1]. Out-of-range values are clamped.
    pub fn highlight_alpha(mut self, alpha: f32) -> Self {
        self.config.highlight_color = self.config.highlight_color.with_alpha_f32(alpha);
        self
    }

    /// Highlight color, alpha included.
    ///
    /// Only the alpha channel matters in [`HighlightMode::Alpha`].
    pub fn highlight_color(mut self, color: Argb) -> Self {
        self.config.highlight_color = color;
        self
    }

    /// Base color RGB. The current base alpha is kept; use
    /// [`base_alpha`](Self::base_alpha) to change it.
    pub fn base_color(mut self, color: Argb) -> Self {
        self.config.base_color = self.config.base_color.with_rgb_of(color);
        self
    }

    /// Mask the sweep by the content (true) or draw it over everything (false).
    pub fn clip_to_children(mut self, clip: bool) -> Self {
        self.config.clip_to_children = clip;
        self
    }

    pub fn auto_start(mut self, auto_start: bool) -> Self {
        self.config.auto_start = auto_start;
        self
    }

    pub fn repeat_count(mut self, count: RepeatCount) -> Self {
        self.config.repeat_count = count;
        self
    }

    pub fn repeat_mode(mut self, mode: RepeatMode) -> Self {
        self.config.repeat_mode = mode;
        self
    }

    /// Length of one sweep.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.config.duration = duration;
        self
    }

    /// Pause between sweeps, spent with the band parked at its end position.
    pub fn repeat_delay(mut self, delay: Duration) -> Self {
        self.config.repeat_delay = delay;
        self
    }

    /// Wait before the first sweep after starting.
    pub fn start_delay(mut self, delay: Duration) -> Self {
        self.config.start_delay = delay;
        self
    }

    pub fn duration_ms(self, ms: i64) -> Result<Self> {
        Ok(self.duration(non_negative_ms("duration", ms)?))
    }

    pub fn repeat_delay_ms(self, ms: i64) -> Result<Self> {
        Ok(self.repeat_delay(non_negative_ms("repeat delay", ms)?))
    }

    pub fn start_delay_ms(self, ms: i64) -> Result<Self> {
        Ok(self.start_delay(non_negative_ms("start delay", ms)?))
    }

    /// Finalizes the configuration and derives the gradient arrays.
    pub fn build(self) -> ShimmerConfig {
        let mut config = self.config;
        config.update_colors();
        config.update_positions();
        config
    }
}

fn non_negative(what: &'static str, v: f32) -> Result<f32> {
    if v.is_finite() && v >= 0.0 {
        Ok(v)
    } else {
        Err(ShimmerError::invalid(what, v))
    }
}

fn non_negative_px(what: &'static str, px: i32) -> Result<u32> {
    u32::try_from(px).map_err(|_| ShimmerError::invalid(what, px))
}

fn non_negative_ms(what: &'static str, ms: i64) -> Result<Duration> {
    u64::try_from(ms)
        .map(Duration::from_millis)
        .map_err(|_| ShimmerError::invalid(what, ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn defaults() {
        let c = ShimmerConfig::default();
        assert_eq!(c.shape(), Shape::Linear);
        assert_eq!(c.direction(), Direction::LeftToRight);
        assert_eq!(c.highlight_mode(), HighlightMode::Alpha);
        assert_eq!(c.base_color(), Argb(0x4CFF_FFFF));
        assert_eq!(c.highlight_color(), Argb::WHITE);
        assert_eq!(c.tilt(), 20.0);
        assert_eq!(c.dropoff(), 0.5);
        assert_eq!(c.duration(), Duration::from_millis(1000));
        assert_eq!(c.repeat_count(), RepeatCount::Infinite);
        assert!(c.auto_start());
        assert!(c.clip_to_children());
        assert_eq!(c.blend_mode(), BlendMode::DstIn);
    }

    #[test]
    fn linear_default_positions() {
        let p = *ShimmerConfig::default().positions();
        assert!(approx_eq(p[0], 0.25));
        assert!(approx_eq(p[1], 0.4995));
        assert!(approx_eq(p[2], 0.5005));
        assert!(approx_eq(p[3], 0.75));
    }

    #[test]
    fn linear_positions_stay_ordered_and_in_range() {
        let samples = [0.0, 0.001, 0.1, 0.5, 0.999, 1.0, 2.0, 50.0, 1.0e6];
        for &i in &samples {
            for &d in &samples {
                let p = gradient_positions(Shape::Linear, i, d);
                for w in p.windows(2) {
                    assert!(w[0] <= w[1], "unordered {p:?} for i={i} d={d}");
                }
                assert!(p.iter().all(|v| (0.0..=1.0).contains(v)), "out of range {p:?}");
                assert!(p[1] <= p[2]);
            }
        }
    }

    #[test]
    fn radial_positions_and_colors() {
        let c = ShimmerBuilder::color()
            .shape(Shape::Radial)
            .intensity(0.35)
            .unwrap()
            .dropoff(0.1)
            .unwrap()
            .build();
        let p = c.positions();
        assert_eq!(p[0], 0.0);
        assert!(approx_eq(p[1], 0.35));
        assert!(approx_eq(p[2], 0.45));
        assert_eq!(p[3], 1.0);

        let (hi, base) = (c.highlight_color(), c.base_color());
        assert_eq!(c.colors(), &[hi, hi, base, base]);
    }

    #[test]
    fn tiny_dropoff_does_not_cross_core() {
        let p = gradient_positions(Shape::Linear, 0.0, 0.0);
        assert!(p[0] <= p[1]);
        assert!(p[2] <= p[3]);
        assert_eq!(p[0], p[1]);
        assert_eq!(p[2], p[3]);
    }

    #[test]
    fn radial_positions_clamp() {
        assert_eq!(gradient_positions(Shape::Radial, 3.0, 1.0), [0.0, 1.0, 1.0, 1.0]);
        assert_eq!(gradient_positions(Shape::Radial, 0.7, 0.6), [0.0, 0.7, 1.0, 1.0]);
    }

    #[test]
    fn linear_colors_are_symmetric() {
        let c = ShimmerConfig::default();
        let (hi, base) = (c.highlight_color(), c.base_color());
        assert_eq!(c.colors(), &[base, hi, hi, base]);
    }

    #[test]
    fn band_size_from_ratio_or_fixed() {
        let c = ShimmerConfig::default();
        assert_eq!(c.band_width(320.0), 320.0);
        assert_eq!(c.band_height(48.0), 48.0);

        let c = ShimmerBuilder::alpha()
            .width_ratio(0.5)
            .unwrap()
            .fixed_width(120)
            .unwrap()
            .build();
        assert_eq!(c.band_width(320.0), 120.0);
        assert_eq!(c.band_width(10.0), 120.0);

        let c = ShimmerBuilder::alpha().height_ratio(0.33).unwrap().build();
        assert_eq!(c.band_height(100.0), 33.0);
    }

    #[test]
    fn rejects_negative_and_non_finite_values() {
        assert!(ShimmerBuilder::alpha().fixed_width(-1).is_err());
        assert!(ShimmerBuilder::alpha().fixed_height(-5).is_err());
        assert!(ShimmerBuilder::alpha().width_ratio(-0.1).is_err());
        assert!(ShimmerBuilder::alpha().height_ratio(f32::NAN).is_err());
        assert!(ShimmerBuilder::alpha().intensity(-0.5).is_err());
        assert!(ShimmerBuilder::alpha().dropoff(f32::INFINITY).is_err());
        assert!(ShimmerBuilder::alpha().tilt(f32::NAN).is_err());
        assert!(ShimmerBuilder::alpha().duration_ms(-1).is_err());
        assert!(ShimmerBuilder::alpha().repeat_delay_ms(-1).is_err());
        assert!(ShimmerBuilder::alpha().start_delay_ms(-1).is_err());

        let err = ShimmerBuilder::alpha().intensity(-0.5).unwrap_err();
        assert_eq!(
            err,
            ShimmerError::InvalidArgument { what: "intensity", value: "-0.5".into() }
        );
    }

    #[test]
    fn zero_values_are_accepted() {
        let c = ShimmerBuilder::alpha()
            .fixed_width(0)
            .unwrap()
            .width_ratio(0.0)
            .unwrap()
            .duration_ms(0)
            .unwrap()
            .build();
        assert_eq!(c.band_width(100.0), 0.0);
        assert_eq!(c.duration(), Duration::ZERO);
    }

    #[test]
    fn alpha_setters_map_into_color_channels() {
        let c = ShimmerBuilder::alpha().base_alpha(0.3).highlight_alpha(0.5).build();
        assert_eq!(c.base_color().alpha(), 76);
        assert_eq!(c.highlight_color().alpha(), 127);
        assert_eq!(c.highlight_color().with_alpha(0xFF), Argb::WHITE);
    }

    #[test]
    fn base_color_keeps_alpha() {
        let c = ShimmerBuilder::color().base_color(Argb(0xFF11_2233)).build();
        assert_eq!(c.base_color(), Argb(0x4C11_2233));
        assert_eq!(c.blend_mode(), BlendMode::SrcIn);
    }

    #[test]
    fn rebuilding_same_config_is_stable() {
        let a = ShimmerBuilder::alpha().intensity(0.2).unwrap().build();
        let b = ShimmerBuilder::from_config(&a).build();
        assert_eq!(a, b);
        assert_eq!(a.colors(), b.colors());
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn from_config_rederives_arrays() {
        let linear = ShimmerConfig::default();
        let radial = ShimmerBuilder::from_config(&linear).shape(Shape::Radial).build();
        assert_eq!(radial.positions()[0], 0.0);
        assert_eq!(radial.colors()[0], radial.highlight_color());
    }

    #[test]
    fn translucency_hint() {
        let opaque = ShimmerBuilder::color().clip_to_children(false).build();
        assert!(!opaque.is_translucent());
        assert!(ShimmerBuilder::alpha().clip_to_children(false).build().is_translucent());
        assert!(ShimmerBuilder::color().build().is_translucent());
    }
}
