//! Edge selection and resting positions.

use crate::command::Side;

/// Decides which horizontal edge the panel belongs to and where it rests
/// against that edge in each mode.
///
/// `usable_width` throughout is the parent width with the edge margin
/// already folded in, the form the drag bounds use.
#[derive(Debug)]
pub struct EdgeSnapEngine {
    side: Side,
}

impl EdgeSnapEngine {
    pub fn new(initial_side: Side) -> Self {
        Self { side: initial_side }
    }

    /// Edge the panel is currently anchored to.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Pick the nearer edge for a release at `release_x`. Deterministic, no
    /// hysteresis: at or past the midpoint is Right, otherwise Left.
    pub fn choose_side(&mut self, release_x: f32, usable_width: f32) -> Side {
        self.side = if release_x >= usable_width / 2.0 {
            Side::Right
        } else {
            Side::Left
        };
        self.side
    }

    /// Resting x after a drag release: a `padding` margin from the chosen
    /// edge.
    pub fn rest_x(&self, usable_width: f32, panel_width: f32, padding: f32) -> f32 {
        match self.side {
            Side::Right => usable_width - panel_width,
            Side::Left => padding,
        }
    }

    /// Resting x while docked: flush against the chosen edge, one
    /// `padding` beyond the rest position.
    pub fn docked_x(&self, usable_width: f32, panel_width: f32, padding: f32) -> f32 {
        match self.side {
            Side::Right => usable_width + padding - panel_width,
            Side::Left => 0.0,
        }
    }

    /// Horizontal delta that slides the panel back out of the dock.
    pub fn undock_delta(&self, padding: f32) -> f32 {
        match self.side {
            Side::Right => -padding,
            Side::Left => padding,
        }
    }
}
