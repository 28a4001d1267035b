//! Tap/drag classification for a three-phase touch sequence.

use floatdock_core::Point;

/// Classification of a completed touch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    Drag,
}

/// Live state between press and release; destroyed on release.
#[derive(Debug, Clone, Copy)]
struct GestureSession {
    start: Point,
    last: Point,
    moved: bool,
}

/// Classifies a press / moves / release sequence as tap vs. drag using a
/// distance threshold, and produces incremental drag deltas.
#[derive(Debug)]
pub struct GestureTracker {
    click_distance_px: f32,
    session: Option<GestureSession>,
}

impl GestureTracker {
    pub fn new(click_distance_px: f32) -> Self {
        Self {
            click_distance_px,
            session: None,
        }
    }

    /// Whether a sequence is in progress.
    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the current sequence has crossed the drag threshold.
    pub fn is_drag(&self) -> bool {
        self.session.map_or(false, |s| s.moved)
    }

    /// Begin a sequence at the press point.
    pub fn press(&mut self, at: Point) {
        self.session = Some(GestureSession {
            start: at,
            last: at,
            moved: false,
        });
    }

    /// Process a move. Once the Euclidean distance from the press point
    /// exceeds the click threshold the sequence is a drag for good, and
    /// every subsequent move yields the delta from the previous sample.
    pub fn movement(&mut self, to: Point) -> Option<(f32, f32)> {
        let session = self.session.as_mut()?;
        if !session.moved && session.start.distance_to(to) > self.click_distance_px {
            session.moved = true;
        }
        let delta = (to.x - session.last.x, to.y - session.last.y);
        session.last = to;
        session.moved.then_some(delta)
    }

    /// End the sequence, classifying it. Returns `None` if no press was
    /// tracked (the sequence was rejected or never started).
    pub fn release(&mut self) -> Option<Gesture> {
        self.session.take().map(|session| {
            if session.moved {
                Gesture::Drag
            } else {
                Gesture::Tap
            }
        })
    }
}
