use std::time::{Duration, Instant};

use super::config::{RepeatCount, RepeatMode, ShimmerConfig};

/// Callbacks for sweep lifecycle events.
///
/// Every method has an empty default, so implementors only override what
/// they need. Events are delivered from [`ShimmerDrawable::on_frame`] and
/// [`ShimmerDrawable::stop`] on the host's UI thread.
///
/// [`ShimmerDrawable::on_frame`]: super::ShimmerDrawable::on_frame
/// [`ShimmerDrawable::stop`]: super::ShimmerDrawable::stop
pub trait AnimatorListener {
    /// The start delay elapsed and the first sweep began.
    fn on_start(&mut self) {}
    /// A new sweep began. `iteration` counts from 1 for the first repeat.
    fn on_repeat(&mut self, iteration: u32) {
        let _ = iteration;
    }
    /// The last sweep of a finite repeat count finished, or the animation
    /// was cancelled (after `on_cancel`).
    fn on_end(&mut self) {}
    fn on_cancel(&mut self) {}
}

/// Lifecycle of a [`SweepAnimator`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AnimatorState {
    /// Built, never started.
    Idle,
    /// Started, waiting out the start delay.
    Pending,
    Running,
    /// Finished its last repeat.
    Ended,
    Cancelled,
}

/// Events produced by one [`SweepAnimator::tick`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Tick {
    /// The animated value moved; the host should redraw.
    pub changed: bool,
    pub started: bool,
    /// Iteration index of the newest sweep begun since the last tick.
    pub repeated: Option<u32>,
    pub ended: bool,
}

/// Time-based driver producing the raw sweep value.
///
/// The value runs linearly over `[0, raw_end]` once per cycle, where
/// `raw_end = 1 + repeat_delay / duration` and the cycle lasts
/// `duration + repeat_delay`. The part past 1 is the repeat-delay dwell.
/// A zero duration has no sweep: the value sits at 1 for the whole cycle.
#[derive(Debug, Clone)]
pub struct SweepAnimator {
    raw_end: f32,
    duration: Duration,
    cycle: Duration,
    start_delay: Duration,
    repeat_count: RepeatCount,
    repeat_mode: RepeatMode,

    state: AnimatorState,
    started_at: Option<Instant>,
    announced: bool,
    iteration: u32,
    value: f32,
}

/// Position within the animation for some elapsed active time.
struct Sample {
    iteration: u32,
    value: f32,
    finished: bool,
}

impl SweepAnimator {
    pub fn new(
        duration: Duration,
        repeat_delay: Duration,
        start_delay: Duration,
        repeat_count: RepeatCount,
        repeat_mode: RepeatMode,
    ) -> Self {
        let raw_end = if duration.is_zero() {
            1.0
        } else {
            1.0 + (repeat_delay.as_secs_f64() / duration.as_secs_f64()) as f32
        };

        Self {
            raw_end,
            duration,
            cycle: duration + repeat_delay,
            start_delay,
            repeat_count,
            repeat_mode,
            state: AnimatorState::Idle,
            started_at: None,
            announced: false,
            iteration: 0,
            value: 0.0,
        }
    }

    pub fn from_config(config: &ShimmerConfig) -> Self {
        Self::new(
            config.duration(),
            config.repeat_delay(),
            config.start_delay(),
            config.repeat_count(),
            config.repeat_mode(),
        )
    }

    /// Upper end of the raw value range.
    #[inline]
    pub fn raw_end(&self) -> f32 {
        self.raw_end
    }

    /// Length of one sweep including its repeat delay.
    #[inline]
    pub fn cycle(&self) -> Duration {
        self.cycle
    }

    #[inline]
    pub fn state(&self) -> AnimatorState {
        self.state
    }

    /// Started and not yet ended or cancelled, start delay included.
    #[inline]
    pub fn is_started(&self) -> bool {
        matches!(self.state, AnimatorState::Pending | AnimatorState::Running)
    }

    /// Past the start delay and advancing.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == AnimatorState::Running
    }

    /// Current raw value in `[0, raw_end]`.
    #[inline]
    pub fn animated_value(&self) -> f32 {
        self.value
    }

    /// Starts from the beginning. No-op while already started.
    pub fn start(&mut self, now: Instant) {
        if self.is_started() {
            return;
        }
        self.started_at = Some(now);
        self.announced = false;
        self.iteration = 0;
        self.value = 0.0;
        self.state = if self.start_delay.is_zero() {
            AnimatorState::Running
        } else {
            AnimatorState::Pending
        };
    }

    /// Stops where it is. Returns whether the animator was started.
    pub fn cancel(&mut self) -> bool {
        if !self.is_started() {
            return false;
        }
        self.state = AnimatorState::Cancelled;
        true
    }

    /// Advances to `now`.
    pub fn tick(&mut self, now: Instant) -> Tick {
        let mut tick = Tick::default();
        let Some(started_at) = self.started_at else {
            return tick;
        };
        if !self.is_started() {
            return tick;
        }

        let elapsed = now.saturating_duration_since(started_at);
        let Some(active) = elapsed.checked_sub(self.start_delay) else {
            return tick;
        };

        self.state = AnimatorState::Running;
        if !self.announced {
            self.announced = true;
            tick.started = true;
        }

        let sample = self.sample(active);
        if sample.iteration > self.iteration {
            self.iteration = sample.iteration;
            tick.repeated = Some(sample.iteration);
        }
        if sample.value != self.value {
            self.value = sample.value;
            tick.changed = true;
        }
        if sample.finished {
            self.state = AnimatorState::Ended;
            tick.ended = true;
        }

        tick
    }

    fn sample(&self, active: Duration) -> Sample {
        let last = match self.repeat_count {
            RepeatCount::Infinite => None,
            RepeatCount::Finite(n) => Some(n),
        };

        // Time into the current cycle, in seconds.
        let (iteration, in_cycle, finished) = if self.cycle.is_zero() {
            (last.unwrap_or(0), 0.0, last.is_some())
        } else {
            let cycle = self.cycle.as_secs_f64();
            let cycles = active.as_secs_f64() / cycle;
            let whole = cycles.floor();
            match last {
                Some(n) if whole > n as f64 => (n, cycle, true),
                _ => (whole.min(u32::MAX as f64) as u32, (cycles - whole) * cycle, false),
            }
        };

        let in_cycle = match self.repeat_mode {
            RepeatMode::Reverse if iteration % 2 == 1 => self.cycle.as_secs_f64() - in_cycle,
            _ => in_cycle,
        };

        let value = if self.duration.is_zero() {
            self.raw_end
        } else {
            ((in_cycle / self.duration.as_secs_f64()) as f32).min(self.raw_end)
        };

        Sample {
            iteration,
            value,
            finished,
        }
    }
}
