use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use shimmer_engine::canvas::Canvas;
use shimmer_engine::coords::Rect;
use shimmer_engine::shimmer::{AnimatorListener, ShimmerConfig, ShimmerDrawable};
use shimmer_engine::time::{SystemClock, TimeSource};

use crate::content::Content;

/// A container that draws its content with a shimmer on top.
///
/// The host forwards its lifecycle to the layout:
/// - [`on_attached`](Self::on_attached) / [`on_detached`](Self::on_detached)
/// - [`on_visibility_changed`](Self::on_visibility_changed)
/// - [`layout`](Self::layout) whenever the allocated rect changes
/// - [`on_frame`](Self::on_frame) once per frame, then
///   [`dispatch_draw`](Self::dispatch_draw) if
///   [`take_needs_redraw`](Self::take_needs_redraw) says so
///
/// A new layout carries the default alpha shimmer and starts sweeping as
/// soon as it is attached and laid out.
pub struct ShimmerLayout {
    content: Box<dyn Content>,
    drawable: ShimmerDrawable,
    bounds: Rect,

    attached: bool,
    show_shimmer: bool,
    stopped_because_hidden: bool,
    needs_redraw: Rc<Cell<bool>>,
}

impl ShimmerLayout {
    pub fn new(content: impl Content) -> Self {
        Self::with_time_source(content, Box::new(SystemClock))
    }

    pub fn with_time_source(content: impl Content, clock: Box<dyn TimeSource>) -> Self {
        let mut layout = Self {
            content: Box::new(content),
            drawable: ShimmerDrawable::with_time_source(clock),
            bounds: Rect::default(),
            attached: false,
            show_shimmer: true,
            stopped_because_hidden: false,
            needs_redraw: Rc::new(Cell::new(false)),
        };
        layout.set_config(Some(ShimmerConfig::default()));
        layout
    }

    #[inline]
    pub fn drawable(&self) -> &ShimmerDrawable {
        &self.drawable
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    // ── configuration ─────────────────────────────────────────────────────

    /// Replaces the shimmer parameters. With `clip_to_children` the content
    /// and the shimmer are composited in their own layer.
    pub fn set_config(&mut self, config: Option<ShimmerConfig>) {
        let layered = config.as_ref().is_some_and(ShimmerConfig::clip_to_children);
        debug!("shimmer layout config set (layered: {layered})");
        self.drawable.set_config(config);
    }

    #[inline]
    pub fn config(&self) -> Option<&ShimmerConfig> {
        self.drawable.config()
    }

    // ── shimmer control ───────────────────────────────────────────────────

    /// Starts the sweep. Ignored until the layout is attached.
    pub fn start_shimmer(&mut self) {
        if self.attached {
            self.drawable.start();
        }
    }

    pub fn start_shimmer_with_listener(&mut self, listener: Box<dyn AnimatorListener>) {
        if self.attached {
            self.drawable.start_with_listener(listener);
        }
    }

    pub fn stop_shimmer(&mut self) {
        self.stopped_because_hidden = false;
        self.drawable.stop();
    }

    #[inline]
    pub fn is_shimmer_started(&self) -> bool {
        self.drawable.is_started()
    }

    #[inline]
    pub fn is_shimmer_running(&self) -> bool {
        self.drawable.is_running()
    }

    /// Shows the shimmer again, optionally restarting the sweep.
    pub fn show_shimmer(&mut self, start: bool) {
        self.show_shimmer = true;
        if start {
            self.start_shimmer();
        }
        self.invalidate();
    }

    /// Stops the sweep and draws the content alone.
    pub fn hide_shimmer(&mut self) {
        self.stop_shimmer();
        self.show_shimmer = false;
        self.invalidate();
    }

    #[inline]
    pub fn is_shimmer_visible(&self) -> bool {
        self.show_shimmer
    }

    pub fn set_static_progress(&mut self, progress: f32) {
        self.drawable.set_static_progress(progress);
    }

    pub fn clear_static_progress(&mut self) {
        self.drawable.clear_static_progress();
    }

    // ── host lifecycle ────────────────────────────────────────────────────

    pub fn on_attached(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;
        let needs_redraw = self.needs_redraw.clone();
        self.drawable.attach(move || needs_redraw.set(true));
        self.drawable.maybe_start();
    }

    pub fn on_detached(&mut self) {
        self.stop_shimmer();
        self.drawable.detach();
        self.attached = false;
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Pauses the sweep while hidden and resumes it once shown again.
    pub fn on_visibility_changed(&mut self, visible: bool) {
        if !visible {
            if self.is_shimmer_started() {
                self.stop_shimmer();
                self.stopped_because_hidden = true;
            }
        } else if self.stopped_because_hidden {
            self.drawable.maybe_start();
            self.stopped_because_hidden = false;
        }
    }

    pub fn layout(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.drawable.on_bounds_changed(bounds);
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Advances the sweep. Returns whether it moved.
    pub fn on_frame(&mut self) -> bool {
        self.drawable.on_frame()
    }

    /// Reads and clears the redraw request.
    pub fn take_needs_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }

    /// Draws the content, then the shimmer over it.
    pub fn dispatch_draw(&mut self, canvas: &mut dyn Canvas) {
        let layered = self.config().is_some_and(ShimmerConfig::clip_to_children);
        if layered {
            canvas.push_layer();
        }

        self.content.paint(canvas, self.bounds);
        if self.show_shimmer {
            self.drawable.draw(canvas);
        }

        if layered {
            canvas.pop_layer();
        }
    }

    fn invalidate(&self) {
        self.needs_redraw.set(true);
    }
}
