//! Time management utilities

use std::ops::{Add, Mul};
use std::time::Instant;

/// Duration of one frame in seconds
///
/// Handed to every layer's `on_update` so movement can be scaled by elapsed
/// time instead of frame count.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Timestep(f32);

impl Timestep {
    /// Create a timestep from seconds
    pub const fn from_seconds(seconds: f32) -> Self {
        Self(seconds)
    }

    /// Elapsed time in seconds
    pub const fn seconds(self) -> f32 {
        self.0
    }

    /// Elapsed time in milliseconds
    pub fn milliseconds(self) -> f32 {
        self.0 * 1000.0
    }
}

impl From<f32> for Timestep {
    fn from(seconds: f32) -> Self {
        Self(seconds)
    }
}

impl From<Timestep> for f32 {
    fn from(ts: Timestep) -> Self {
        ts.0
    }
}

impl Mul<f32> for Timestep {
    type Output = f32;

    fn mul(self, rhs: f32) -> f32 {
        self.0 * rhs
    }
}

impl Mul<Timestep> for f32 {
    type Output = f32;

    fn mul(self, rhs: Timestep) -> f32 {
        self * rhs.0
    }
}

impl Add for Timestep {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

/// High-precision timer for frame timing
pub struct Timer {
    last_frame: Instant,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance one frame and return its timestep
    pub fn tick(&mut self) -> Timestep {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.total_time += delta;
        self.last_frame = now;
        self.frame_count += 1;
        Timestep(delta)
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_timestep_conversions() {
        let ts = Timestep::from_seconds(0.016);
        assert_relative_eq!(ts.seconds(), 0.016);
        assert_relative_eq!(ts.milliseconds(), 16.0, epsilon = 1e-4);
        assert_relative_eq!(5.0 * ts, 0.08, epsilon = 1e-6);
        assert_relative_eq!(ts * 5.0, 0.08, epsilon = 1e-6);
    }

    #[test]
    fn test_timer_counts_frames() {
        let mut timer = Timer::new();
        let first = timer.tick();
        let second = timer.tick();
        assert!(first.seconds() >= 0.0);
        assert!(second.seconds() >= 0.0);
        assert_eq!(timer.frame_count(), 2);
        assert!(timer.total_time() >= second.seconds());
    }
}
