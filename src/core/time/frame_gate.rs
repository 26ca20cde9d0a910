//=========================================================================
// Frame Gate
//=========================================================================
//
// Admits a frame once accumulated delta reaches `1 / frame_rate`.
//
// The gate is a polling check: it never blocks for exact timing. What
// happens on a rejected iteration is chosen by `IdleStrategy`.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::config::IdleStrategy;

//=== FrameGate ===========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameGate {
    threshold: f32,
    idle: IdleStrategy,
}

impl FrameGate {
    /// # Panics
    ///
    /// Panics if `frame_rate <= 0.0`.
    pub fn new(frame_rate: f32, idle: IdleStrategy) -> Self {
        assert!(frame_rate > 0.0, "Frame rate must be positive, got {}", frame_rate);
        Self {
            threshold: 1.0 / frame_rate,
            idle,
        }
    }

    /// Returns `true` if `delta` admits a frame.
    pub fn admits(&self, delta: f32) -> bool {
        delta >= self.threshold
    }

    /// Time left before `delta` would be admitted.
    pub fn remaining(&self, delta: f32) -> Duration {
        Duration::from_secs_f32((self.threshold - delta).max(0.0))
    }

    /// Runs the idle strategy for a rejected iteration.
    pub fn idle(&self, delta: f32) {
        match self.idle {
            IdleStrategy::Spin => {}
            IdleStrategy::Sleep => {
                thread::sleep(self.remaining(delta).min(IdleStrategy::MAX_SLEEP));
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
