//! Shared gesture constants and the per-display configuration derived from
//! them.
//!
//! The dp values match the platform defaults that drag/settle helpers on
//! mobile toolkits are tuned against. [`ViewConfiguration::for_density`]
//! turns them into pixels for a concrete display.

use slidesheet_core::Dp;

/// Distance a pointer must travel before a press turns into a drag.
pub const TOUCH_SLOP: Dp = Dp(8.0);

/// Width of the band along each container edge that counts as an edge touch.
pub const EDGE_SIZE: Dp = Dp(20.0);

/// Smallest peek a sheet collapses to when the peek size is computed.
pub const MIN_PEEK_SIZE: Dp = Dp(64.0);

/// Velocities below this (px/sec at baseline density) are treated as zero.
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Velocity cap (px/sec at baseline density) applied to released drags.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Duration used when a settle has no velocity to derive one from.
pub const BASE_SETTLE_DURATION_MS: i64 = 256;

/// Upper bound for any settle animation.
pub const MAX_SETTLE_DURATION_MS: i64 = 600;

/// Pixel thresholds for one display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfiguration {
    pub touch_slop: i32,
    pub edge_size: i32,
    pub min_peek_size: i32,
    pub min_fling_velocity: f32,
    pub max_fling_velocity: f32,
}

impl Default for ViewConfiguration {
    fn default() -> Self {
        Self::for_density(1.0)
    }
}

impl ViewConfiguration {
    pub fn for_density(density: f32) -> Self {
        Self {
            touch_slop: TOUCH_SLOP.to_px_size(density),
            edge_size: EDGE_SIZE.to_px_size(density),
            min_peek_size: MIN_PEEK_SIZE.to_px_size(density),
            min_fling_velocity: MIN_FLING_VELOCITY * density,
            max_fling_velocity: MAX_FLING_VELOCITY * density,
        }
    }

    pub fn with_touch_slop(mut self, touch_slop: i32) -> Self {
        self.touch_slop = touch_slop.max(0);
        self
    }

    pub fn with_min_peek_size(mut self, min_peek_size: i32) -> Self {
        self.min_peek_size = min_peek_size.max(0);
        self
    }
}
