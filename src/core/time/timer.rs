//=========================================================================
// Timer
//=========================================================================
//
// Wall-clock frame timer backed by `std::time::Instant`.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::{Duration, Instant};

//=== Internal Dependencies ===============================================

use super::FrameTimer;

//=== Timer ===============================================================

/// Monotonic frame timer.
#[derive(Debug, Clone)]
pub struct Timer {
    created: Instant,
    frame_start: Instant,
    elapsed: Duration,
    time_scale: f32,
}

impl Timer {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            created: now,
            frame_start: now,
            elapsed: Duration::ZERO,
            time_scale: 1.0,
        }
    }

    /// Unscaled wall time since the timer was created.
    pub fn total_time(&self) -> Duration {
        self.created.elapsed()
    }
}

impl FrameTimer for Timer {
    fn reset(&mut self) {
        self.frame_start = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    fn update(&mut self) {
        self.elapsed = self.frame_start.elapsed();
    }

    fn delta_time(&self) -> f32 {
        self.elapsed.as_secs_f32() * self.time_scale
    }

    fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// # Panics
    ///
    /// Panics if `scale` is negative or not finite.
    fn set_time_scale(&mut self, scale: f32) {
        assert!(
            scale.is_finite() && scale >= 0.0,
            "Time scale must be finite and non-negative, got {}",
            scale
        );
        self.time_scale = scale;
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
