//=========================================================================
// Timing
//=========================================================================
//
// Frame clock and frame gate.
//
// The frame clock measures wall time since its last reset. The loop
// advances it on every iteration and resets it at the start of every
// admitted frame, so `delta_time()` is the time accumulated since the
// previous frame began.
//
//=========================================================================

//=== Module Declarations =================================================

mod frame_gate;
mod timer;

//=== Public API ==========================================================

pub use frame_gate::FrameGate;
pub use timer::Timer;

//=== FrameTimer ==========================================================

/// Frame clock consumed by the orchestrator.
///
/// [`Timer`] is the wall-clock implementation. The trait exists so hosts
/// can drive the loop from a different time source.
pub trait FrameTimer {
    /// Zeroes the frame clock.
    fn reset(&mut self);

    /// Advances the frame clock to the current time.
    fn update(&mut self);

    /// Scaled seconds between the last reset and the last update.
    fn delta_time(&self) -> f32;

    /// Multiplier applied to measured time. Defaults to `1.0`.
    fn time_scale(&self) -> f32 {
        1.0
    }

    /// Sets the multiplier applied to measured time.
    fn set_time_scale(&mut self, _scale: f32) {}
}
