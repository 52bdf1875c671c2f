//! Release-velocity estimation along a single axis.
//!
//! Uses the impulse strategy: each pair of consecutive samples contributes
//! the kinetic energy it would impart on a unit mass, and the accumulated
//! energy is converted back into a velocity. This weighs the end of a
//! gesture more heavily than a straight least-squares fit without being as
//! noisy as the last two samples alone.

use crate::input::PointerEvent;
use slidesheet_core::Orientation;

const HISTORY_SIZE: usize = 20;

/// Samples older than this relative to the newest one are ignored.
const HORIZON_MS: i64 = 100;

/// A gap this long between samples means the pointer came to rest.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// Tracks pointer positions along one axis and reports velocity in px/sec.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    ring: [Option<Sample>; HISTORY_SIZE],
    newest: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            ring: [None; HISTORY_SIZE],
            newest: 0,
        }
    }

    pub fn add_data_point(&mut self, time_ms: i64, position: f32) {
        self.newest = (self.newest + 1) % HISTORY_SIZE;
        self.ring[self.newest] = Some(Sample { time_ms, position });
    }

    /// Records `event`'s coordinate along `orientation`.
    pub fn add_movement(&mut self, event: &PointerEvent, orientation: Orientation) {
        self.add_data_point(event.uptime_ms, event.along(orientation));
    }

    /// Velocity in px/sec, 0.0 when fewer than two recent samples exist.
    pub fn calculate_velocity(&self) -> f32 {
        let Some(newest) = self.ring[self.newest] else {
            return 0.0;
        };

        // Collected newest first; times are stored as negative ages.
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut ages = [0.0f32; HISTORY_SIZE];
        let mut count = 0;
        let mut index = self.newest;
        let mut previous_time = newest.time_ms;

        while count < HISTORY_SIZE {
            let Some(sample) = self.ring[index] else {
                break;
            };
            let age = newest.time_ms - sample.time_ms;
            let gap = (previous_time - sample.time_ms).abs();
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            positions[count] = sample.position;
            ages[count] = -(age as f32);
            previous_time = sample.time_ms;
            count += 1;
            index = (index + HISTORY_SIZE - 1) % HISTORY_SIZE;
        }

        if count < 2 {
            return 0.0;
        }

        impulse_velocity(&positions[..count], &ages[..count]) * 1000.0
    }

    /// Velocity in px/sec clamped to `[-max_velocity, max_velocity]`.
    pub fn compute_velocity(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.calculate_velocity();
        if velocity == 0.0 || velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn clear(&mut self) {
        self.ring = [None; HISTORY_SIZE];
        self.newest = 0;
    }
}

/// `positions`/`times` are ordered newest first; result is px/ms.
fn impulse_velocity(positions: &[f32], times: &[f32]) -> f32 {
    let oldest = positions.len() - 1;
    let mut work = 0.0f32;

    for i in (1..=oldest).rev() {
        let (t_from, t_to) = (times[i], times[i - 1]);
        if t_from == t_to {
            continue;
        }
        let v_curr = (positions[i - 1] - positions[i]) / (t_to - t_from);
        let v_prev = energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    energy_to_velocity(work)
}

#[inline]
fn energy_to_velocity(energy: f32) -> f32 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}
