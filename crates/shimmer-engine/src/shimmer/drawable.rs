use log::{debug, trace};

use crate::canvas::Canvas;
use crate::coords::{Affine, Rect, Vec2};
use crate::paint::gradient::{LinearGradient, RadialGradient, stops_from};
use crate::paint::Paint;
use crate::time::{SystemClock, TimeSource};

use super::animator::{AnimatorListener, SweepAnimator, Tick};
use super::config::{Shape, ShimmerConfig};
use super::sweep::{clamp_progress, sweep_matrix};
use super::uniforms::{ShimmerUniforms, radial_radius};

/// Redraw request handed to the drawable by its host.
pub type Invalidate = Box<dyn FnMut()>;

/// Renders a shimmer sweep over a rect.
///
/// The drawable owns its gradient paint and animation driver. A host:
/// - attaches an invalidation callback with [`attach`](Self::attach)
/// - reports its rect through [`on_bounds_changed`](Self::on_bounds_changed)
/// - calls [`on_frame`](Self::on_frame) once per frame, and
///   [`draw`](Self::draw) whenever a redraw was requested
///
/// Missing config, zero-size bounds and a detached host are normal
/// transient states: the affected calls do nothing.
pub struct ShimmerDrawable {
    clock: Box<dyn TimeSource>,
    invalidate: Option<Invalidate>,

    config: Option<ShimmerConfig>,
    bounds: Rect,
    /// Gradient in shader-local space. Rebuilt on bounds or config change.
    paint: Option<Paint>,
    band: Vec2,

    animator: Option<SweepAnimator>,
    listener: Option<Box<dyn AnimatorListener>>,
    static_progress: Option<f32>,
}

impl Default for ShimmerDrawable {
    fn default() -> Self {
        Self::new()
    }
}

impl ShimmerDrawable {
    pub fn new() -> Self {
        Self::with_time_source(Box::new(SystemClock))
    }

    pub fn with_time_source(clock: Box<dyn TimeSource>) -> Self {
        Self {
            clock,
            invalidate: None,
            config: None,
            bounds: Rect::default(),
            paint: None,
            band: Vec2::zero(),
            animator: None,
            listener: None,
            static_progress: None,
        }
    }

    // ── host attachment ───────────────────────────────────────────────────

    /// Connects the drawable to a host. `invalidate` is called whenever the
    /// drawable wants to be redrawn.
    pub fn attach(&mut self, invalidate: impl FnMut() + 'static) {
        self.invalidate = Some(Box::new(invalidate));
    }

    pub fn detach(&mut self) {
        self.invalidate = None;
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.invalidate.is_some()
    }

    // ── configuration ─────────────────────────────────────────────────────

    /// Replaces the configuration.
    ///
    /// Rebuilds the paint and the driver. A running sweep keeps running
    /// under the new parameters, restarted from the beginning. `None`
    /// stops the sweep and disables drawing.
    pub fn set_config(&mut self, config: Option<ShimmerConfig>) {
        debug!(
            "shimmer config {}",
            if config.is_some() { "replaced" } else { "cleared" }
        );
        self.config = config;
        self.update_paint();
        self.update_animator();
        self.request_redraw();
    }

    #[inline]
    pub fn config(&self) -> Option<&ShimmerConfig> {
        self.config.as_ref()
    }

    // ── animation ─────────────────────────────────────────────────────────

    /// Starts the sweep. No-op when already started, detached or without a
    /// configuration.
    pub fn start(&mut self) {
        if !self.can_start() {
            return;
        }
        if self.animator.is_none() {
            let Some(config) = &self.config else {
                return;
            };
            debug!("shimmer driver rebuilt");
            self.animator = Some(SweepAnimator::from_config(config));
        }

        let now = self.clock.now();
        if let Some(animator) = self.animator.as_mut() {
            animator.start(now);
        }
        self.request_redraw();
    }

    /// Like [`start`](Self::start), reporting lifecycle events to
    /// `listener`. The listener replaces any previous one and survives
    /// driver rebuilds. It is dropped unused when the start is a no-op.
    pub fn start_with_listener(&mut self, listener: Box<dyn AnimatorListener>) {
        if !self.can_start() {
            return;
        }
        self.listener = Some(listener);
        self.start();
    }

    fn can_start(&self) -> bool {
        if !self.is_attached() {
            trace!("shimmer start skipped: detached");
            return false;
        }
        if self.is_started() {
            return false;
        }
        if self.animator.is_none() && self.config.is_none() {
            trace!("shimmer start skipped: no config");
            return false;
        }
        true
    }

    /// Cancels the sweep and drops the driver. The next start builds a
    /// fresh one from the current configuration.
    pub fn stop(&mut self) {
        let Some(mut animator) = self.animator.take() else {
            return;
        };
        if animator.cancel() {
            if let Some(listener) = self.listener.as_mut() {
                listener.on_cancel();
                listener.on_end();
            }
        }
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.animator.as_ref().is_some_and(SweepAnimator::is_started)
    }

    /// Started and past the start delay.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.animator.as_ref().is_some_and(SweepAnimator::is_running)
    }

    /// Starts the sweep if the configuration asks for auto-start.
    pub fn maybe_start(&mut self) {
        if self.config.as_ref().is_some_and(ShimmerConfig::auto_start) && !self.is_started() {
            self.start();
        }
    }

    // ── host frame loop ───────────────────────────────────────────────────

    pub fn on_bounds_changed(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.update_paint();
        self.maybe_start();
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Advances the driver to the current time. Requests a redraw and
    /// returns `true` when the drawn progress moved.
    pub fn on_frame(&mut self) -> bool {
        let now = self.clock.now();
        let before = self.progress();
        let Some(animator) = self.animator.as_mut() else {
            return false;
        };

        let tick = animator.tick(now);
        self.dispatch(tick);

        if self.progress() != before || tick.started {
            self.request_redraw();
            true
        } else {
            false
        }
    }

    fn dispatch(&mut self, tick: Tick) {
        let Some(listener) = self.listener.as_mut() else {
            return;
        };
        if tick.started {
            listener.on_start();
        }
        if let Some(iteration) = tick.repeated {
            listener.on_repeat(iteration);
        }
        if tick.ended {
            listener.on_end();
        }
    }

    // ── progress ──────────────────────────────────────────────────────────

    /// Pins the drawn progress, for scrubbing and previews.
    ///
    /// Negative values clear the override; values above 1 draw as 1.
    pub fn set_static_progress(&mut self, progress: f32) {
        if progress.is_nan() || progress < 0.0 {
            self.clear_static_progress();
            return;
        }
        let progress = progress.min(1.0);
        if self.static_progress == Some(progress) {
            return;
        }
        self.static_progress = Some(progress);
        self.request_redraw();
    }

    /// Returns to the live driver value.
    pub fn clear_static_progress(&mut self) {
        if self.static_progress.take().is_some() {
            self.request_redraw();
        }
    }

    #[inline]
    pub fn static_progress(&self) -> Option<f32> {
        self.static_progress
    }

    /// Progress used for drawing, in [0, 1].
    pub fn progress(&self) -> f32 {
        if let Some(p) = self.static_progress {
            return p;
        }
        self.animator
            .as_ref()
            .map_or(0.0, |a| clamp_progress(a.animated_value()))
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Shader-local to device transform for the current progress.
    pub fn current_matrix(&self) -> Affine {
        match &self.config {
            Some(config) => sweep_matrix(self.bounds, config.direction(), config.tilt(), self.progress()),
            None => Affine::IDENTITY,
        }
    }

    /// Fills the bounds with the shimmer paint.
    ///
    /// Only the paint's local matrix changes per frame; the gradient itself
    /// is reused.
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        let matrix = self.current_matrix();
        let (Some(config), Some(paint)) = (&self.config, self.paint.as_mut()) else {
            trace!("shimmer draw skipped: no paint");
            return;
        };

        paint.set_local_matrix(matrix);
        canvas.fill_rect(self.bounds, paint, config.blend_mode());
    }

    /// The gradient paint as of the last draw.
    #[inline]
    pub fn paint(&self) -> Option<&Paint> {
        self.paint.as_ref()
    }

    /// The current frame as a GPU uniform block, or `None` when nothing
    /// would be drawn.
    pub fn uniforms(&self) -> Option<ShimmerUniforms> {
        let config = self.config.as_ref()?;
        self.paint.as_ref()?;
        Some(ShimmerUniforms::new(config, self.bounds, self.band, self.current_matrix()))
    }

    /// Whether the shimmer covers what is beneath it.
    pub fn is_opaque(&self) -> bool {
        self.config.as_ref().is_some_and(|c| !c.is_translucent())
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn request_redraw(&mut self) {
        if let Some(invalidate) = self.invalidate.as_mut() {
            invalidate();
        }
    }

    fn update_paint(&mut self) {
        self.paint = None;
        self.band = Vec2::zero();

        let Some(config) = &self.config else {
            return;
        };
        let (w, h) = (self.bounds.width(), self.bounds.height());
        if !(w > 0.0 && h > 0.0) {
            trace!("shimmer paint skipped: empty bounds");
            return;
        }

        let band = Vec2::new(config.band_width(w), config.band_height(h));
        if !(band.x > 0.0 && band.y > 0.0) {
            trace!("shimmer paint skipped: empty band");
            return;
        }

        let stops = stops_from(config.colors(), config.positions());
        let paint = match config.shape() {
            Shape::Linear => {
                let end = if config.direction().is_vertical() {
                    Vec2::new(0.0, band.y)
                } else {
                    Vec2::new(band.x, 0.0)
                };
                Paint::LinearGradient(LinearGradient::new(Vec2::zero(), end, stops))
            }
            Shape::Radial => {
                let center = Vec2::new(band.x / 2.0, band.y / 2.0);
                Paint::RadialGradient(RadialGradient::new(center, radial_radius(band), stops))
            }
        };
        let valid = match &paint {
            Paint::LinearGradient(g) => g.is_valid(),
            Paint::RadialGradient(g) => g.is_valid(),
            Paint::Solid(_) => true,
        };
        if !valid {
            trace!("shimmer paint skipped: degenerate gradient");
            return;
        }

        self.paint = Some(paint);
        self.band = band;
    }

    fn update_animator(&mut self) {
        let was_started = self.is_started();
        self.animator = None;

        let Some(config) = &self.config else {
            return;
        };
        let mut animator = SweepAnimator::from_config(config);
        if was_started {
            animator.start(self.clock.now());
        }
        debug!("shimmer driver rebuilt (started: {was_started})");
        self.animator = Some(animator);
    }
}
