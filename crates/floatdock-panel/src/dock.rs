//! Idle-triggered fold-then-dock sequencing.

use floatdock_animation::TimeNanos;

const NANOS_PER_MILLI: u64 = 1_000_000;

/// Phases of the idle docking sequence.
///
/// The slide is serialized after the fold by a fixed delay equal to the
/// fold's full duration, not by a completion callback: both animations
/// touch layout-affecting state and must never overlap within a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockPhase {
    Idle,
    /// Fold collapse in flight; the slide starts once `slide_at` passes.
    Folding { slide_at: TimeNanos },
    /// Slide toward the edge in flight.
    Sliding,
    /// Parked off-edge with only the icon visible.
    Docked,
}

/// Tracks where the panel is in the idle docking sequence.
#[derive(Debug)]
pub struct DockController {
    phase: DockPhase,
}

impl DockController {
    pub fn new() -> Self {
        Self {
            phase: DockPhase::Idle,
        }
    }

    pub fn phase(&self) -> DockPhase {
        self.phase
    }

    /// The idle signal arrived. From Open the slide waits out the fold's
    /// fixed duration; from Closed it starts immediately. Returns true when
    /// the caller should start the slide right now.
    pub fn on_idle(&mut self, open: bool, now: TimeNanos, fold_duration_millis: u64) -> bool {
        if self.phase != DockPhase::Idle {
            return false;
        }
        if open {
            self.phase = DockPhase::Folding {
                slide_at: now + fold_duration_millis * NANOS_PER_MILLI,
            };
            false
        } else {
            self.phase = DockPhase::Sliding;
            true
        }
    }

    /// True exactly once, when the scheduled slide deadline has passed.
    pub fn take_due_slide(&mut self, now: TimeNanos) -> bool {
        if let DockPhase::Folding { slide_at } = self.phase {
            if now >= slide_at {
                self.phase = DockPhase::Sliding;
                return true;
            }
        }
        false
    }

    /// The slide animation completed; the panel is parked.
    pub fn finish_slide(&mut self) {
        self.phase = DockPhase::Docked;
    }

    /// Leave the sequence (undock completed, or a drag pulled the panel
    /// away).
    pub fn reset(&mut self) {
        self.phase = DockPhase::Idle;
    }
}

impl Default for DockController {
    fn default() -> Self {
        Self::new()
    }
}
