//! Panel configuration constants.

use floatdock_core::Dp;

/// Margin the panel keeps from (or overhangs past) the nominal parent edge.
pub const EDGE_PADDING: Dp = Dp(20.0);

/// Width of the icon bar; the only part left visible while docked.
pub const ICON_BAR_WIDTH: Dp = Dp(46.0);

/// Maximum displacement from the press point for a sequence to count as a
/// tap. Matches the platform touch-slop convention.
pub const MAX_CLICK_DISTANCE: Dp = Dp(8.0);

/// Seconds of inactivity before the panel folds and docks.
pub const IDLE_THRESHOLD_SECS: u32 = 5;

/// Duration of the open/closed width animation.
pub const FOLD_DURATION_MILLIS: u64 = 300;

/// Duration of the dock and undock slides.
pub const DOCK_DURATION_MILLIS: u64 = 100;

/// Duration of the edge-snap slide after a drag release.
pub const SNAP_DURATION_MILLIS: u64 = 300;

/// Opacity applied to the icon while the panel is docked.
pub const DOCKED_ICON_OPACITY: f32 = 0.6;

/// Tunable parameters for a [`crate::FloatPanel`].
///
/// The defaults reproduce the stock behavior; hosts may externalize any of
/// them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelConfig {
    pub edge_padding: Dp,
    pub icon_bar_width: Dp,
    pub click_distance: Dp,
    pub idle_threshold_secs: u32,
    pub fold_duration_millis: u64,
    pub dock_duration_millis: u64,
    pub snap_duration_millis: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            edge_padding: EDGE_PADDING,
            icon_bar_width: ICON_BAR_WIDTH,
            click_distance: MAX_CLICK_DISTANCE,
            idle_threshold_secs: IDLE_THRESHOLD_SECS,
            fold_duration_millis: FOLD_DURATION_MILLIS,
            dock_duration_millis: DOCK_DURATION_MILLIS,
            snap_duration_millis: SNAP_DURATION_MILLIS,
        }
    }
}
