//! Animation support for Floatdock
//!
//! Provides easing curves and a polled tween job. There is no frame clock
//! here: jobs are sampled with explicit timestamps by whoever owns the
//! control loop, which keeps every animation deterministic under test.

mod easing;
mod tween;

pub use easing::*;
pub use tween::*;
