//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use quickloop_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Orchestration
pub use crate::core::{EngineConfig, IdleStrategy, LoopState, Orchestrator, Phase, Subsystem};
pub use crate::engine::{OrchestratorBuilder, OrchestratorCell};

// Entities
pub use crate::core::scene::{Entity, Grid, GridStyle, SceneRoot, UpdateContext, Vector2};

// Input
pub use crate::core::input::{InputManager, KeyCode, Modifiers, MouseButton};

// Rendering
pub use crate::core::graphics::{Color, Graphics, HeadlessGraphics, Rect};

// Audio and assets
pub use crate::core::assets::AssetManager;
pub use crate::core::audio::{AudioManager, Loops};

// Timing
pub use crate::core::time::{FrameTimer, Timer};
