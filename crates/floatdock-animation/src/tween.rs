//! Polled tween jobs sampled with explicit frame timestamps.

use crate::Easing;

/// Monotonic timestamp in nanoseconds, as delivered by the host frame loop.
pub type TimeNanos = u64;

const NANOS_PER_MILLI: u64 = 1_000_000;

/// Animation specification combining duration, easing, and start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting the animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween spec with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween spec.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    fn delay_nanos(&self) -> u64 {
        self.delay_millis * NANOS_PER_MILLI
    }

    fn duration_nanos(&self) -> u64 {
        (self.duration_millis * NANOS_PER_MILLI).max(1)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

/// A single in-flight value animation, polled by the control loop.
///
/// The start time latches on the first `sample` call, so a job created in
/// one event handler begins animating on the next frame it is polled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    start: f32,
    end: f32,
    spec: AnimationSpec,
    start_time: Option<TimeNanos>,
}

impl Tween {
    pub fn new(start: f32, end: f32, spec: AnimationSpec) -> Self {
        Self {
            start,
            end,
            spec,
            start_time: None,
        }
    }

    /// Latch the start time eagerly so the job's clock runs from `now`
    /// rather than from the first poll.
    pub fn start_at(mut self, now: TimeNanos) -> Self {
        self.start_time = Some(now);
        self
    }

    pub fn start_value(&self) -> f32 {
        self.start
    }

    pub fn end_value(&self) -> f32 {
        self.end
    }

    /// Sample the animated value at `now`, latching the start time on the
    /// first call. Holds the start value through the delay window and pins
    /// to the end value once the duration has elapsed.
    pub fn sample(&mut self, now: TimeNanos) -> f32 {
        let started = *self.start_time.get_or_insert(now);
        let elapsed = now.saturating_sub(started);

        let delay = self.spec.delay_nanos();
        if elapsed < delay {
            return self.start;
        }

        let linear =
            ((elapsed - delay) as f32 / self.spec.duration_nanos() as f32).clamp(0.0, 1.0);
        let progress = self.spec.easing.transform(linear);
        self.start + (self.end - self.start) * progress
    }

    /// Whether the job has run to completion by `now`. A job that was never
    /// sampled has not started and is never finished.
    pub fn is_finished(&self, now: TimeNanos) -> bool {
        match self.start_time {
            Some(started) => {
                now.saturating_sub(started) >= self.spec.delay_nanos() + self.spec.duration_nanos()
            }
            None => false,
        }
    }
}
