//! Cancellable inactivity countdown.

use floatdock_animation::TimeNanos;

const NANOS_PER_SEC: u64 = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Countdown {
    Cancelled,
    Active {
        started_at: TimeNanos,
        ticks_emitted: u32,
    },
}

/// Counts whole seconds of inactivity and fires exactly once per
/// uninterrupted window when the threshold tick is reached.
///
/// The countdown is polled from the control loop with frame timestamps;
/// there is no background timer. `restart` disposes any previous countdown
/// first, so overlapping windows cannot exist.
#[derive(Debug)]
pub struct IdleTimer {
    state: Countdown,
    threshold_ticks: u32,
}

impl IdleTimer {
    pub fn new(threshold_secs: u32) -> Self {
        Self {
            state: Countdown::Cancelled,
            threshold_ticks: threshold_secs,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, Countdown::Active { .. })
    }

    /// Dispose any running countdown and begin a fresh one at `now`.
    pub fn restart(&mut self, now: TimeNanos) {
        self.state = Countdown::Active {
            started_at: now,
            ticks_emitted: 0,
        };
    }

    pub fn cancel(&mut self) {
        self.state = Countdown::Cancelled;
    }

    /// Emit any one-second ticks that have elapsed. Returns true exactly
    /// when the threshold tick fires; the countdown then retires until the
    /// next `restart`.
    pub fn poll(&mut self, now: TimeNanos) -> bool {
        let Countdown::Active {
            started_at,
            mut ticks_emitted,
        } = self.state
        else {
            return false;
        };

        while ticks_emitted < self.threshold_ticks
            && now.saturating_sub(started_at) >= (ticks_emitted as u64 + 1) * NANOS_PER_SEC
        {
            ticks_emitted += 1;
        }

        if ticks_emitted == self.threshold_ticks {
            log::trace!("idle threshold reached");
            self.state = Countdown::Cancelled;
            true
        } else {
            self.state = Countdown::Active {
                started_at,
                ticks_emitted,
            };
            false
        }
    }
}
