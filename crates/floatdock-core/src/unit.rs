//! Unit types: Dp, Px, and density conversions

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: Density) -> f32 {
        self.0 * density.0
    }
}

/// Raw pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Px(pub f32);

/// Display density factor (pixels per dp).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Density(pub f32);

impl Density {
    /// Convert a dp value to whole pixels, rounding half up.
    ///
    /// Matches the platform convention `(density * dp + 0.5).toInt()` so
    /// thresholds authored in dp land on the same pixel values a native
    /// view would use.
    pub fn dip_to_px(&self, dp: Dp) -> f32 {
        (self.0 * dp.0 + 0.5).floor()
    }
}

impl Default for Density {
    fn default() -> Self {
        Self(1.0)
    }
}
