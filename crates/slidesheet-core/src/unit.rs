//! Unit types: Dp and conversions

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    /// Converts to whole pixels the way platform dimension resources do:
    /// rounded, but never collapsing a non-zero size to zero.
    pub fn to_px_size(&self, density: f32) -> i32 {
        let px = self.to_px(density);
        let rounded = px.round() as i32;
        if rounded == 0 && px > 0.0 {
            1
        } else {
            rounded
        }
    }

    pub fn from_px(px: f32, density: f32) -> Self {
        Self(px / density)
    }
}
