//=========================================================================
// Engine Configuration
//=========================================================================
//
// Compile-time defaults and the immutable configuration record handed to
// every subsystem at construction.
//
// Values are fixed once the orchestrator is built. Hosts override them
// through `OrchestratorBuilder` before construction only.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::PathBuf;

//=== Constants ===========================================================

/// Frame-rate ceiling in frames per second.
pub const FRAME_RATE: f32 = 60.0;

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: u32 = 800;

/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: u32 = 600;

/// Default window title.
pub const WINDOW_TITLE: &str = "QuickLoop Engine";

/// Default directory assets are resolved against.
pub const ASSET_ROOT: &str = "assets";

//=== IdleStrategy ========================================================

/// What the loop does on an iteration the frame gate rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdleStrategy {
    /// Re-poll immediately. Burns a core between frames.
    #[default]
    Spin,

    /// Sleep for the remaining time to the next gate, capped at
    /// [`IdleStrategy::MAX_SLEEP`].
    Sleep,
}

impl IdleStrategy {
    /// Upper bound on a single idle sleep.
    pub const MAX_SLEEP: std::time::Duration = std::time::Duration::from_millis(1);
}

//=== EngineConfig ========================================================

/// Immutable configuration shared by the orchestrator and its managers.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Frame-rate ceiling (frames per second, > 0).
    pub frame_rate: f32,

    /// Screen width in pixels.
    pub screen_width: u32,

    /// Screen height in pixels.
    pub screen_height: u32,

    /// Title of the native window, when one is created.
    pub window_title: String,

    /// Directory asset paths are relative to.
    pub asset_root: PathBuf,

    /// Behaviour between gated frames.
    pub idle: IdleStrategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            frame_rate: FRAME_RATE,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            window_title: WINDOW_TITLE.to_owned(),
            asset_root: PathBuf::from(ASSET_ROOT),
            idle: IdleStrategy::Spin,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
