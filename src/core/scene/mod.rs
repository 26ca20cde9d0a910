//=========================================================================
// Scene System
//=========================================================================
//
// Entities dispatched to by the orchestrator's Update, LateUpdate and
// Render phases.
//
// Architecture:
//   SceneRoot
//     └─ entities: Vec<Box<dyn Entity>>   (dispatch in insertion order)
//
// Entities never hold manager handles. Everything they may touch during
// a phase is lent to them through `UpdateContext` or `&mut dyn Graphics`.
//
//=========================================================================

//=== Module Declarations =================================================

mod grid;
mod scene_root;
mod vector;

//=== Public API ==========================================================

pub use grid::{Grid, GridStyle};
pub use scene_root::SceneRoot;
pub use vector::Vector2;

//=== Internal Dependencies ===============================================

use crate::core::assets::AssetManager;
use crate::core::audio::AudioManager;
use crate::core::graphics::Graphics;
use crate::core::input::InputManager;

//=== UpdateContext =======================================================

/// Managers lent to entities for the Update and LateUpdate phases.
pub struct UpdateContext<'a> {
    /// Input sampled during this frame's EarlyUpdate.
    pub input: &'a InputManager,

    pub audio: &'a mut AudioManager,

    pub assets: &'a mut AssetManager,

    /// Seconds accumulated since the previous frame began.
    pub delta_time: f32,

    /// Index of the frame being executed, starting at 0.
    pub frame: u64,
}

//=== Entity Trait ========================================================

/// Something that lives in the scene root.
///
/// Only `update` and `render` are required.
pub trait Entity {
    fn position(&self) -> Vector2;

    fn set_position(&mut self, position: Vector2);

    /// Gameplay step. Must not render.
    fn update(&mut self, context: &mut UpdateContext<'_>);

    /// Post-update resolution (collisions). Runs after every entity's
    /// `update` and before the previous input snapshot advances.
    fn late_update(&mut self, _context: &mut UpdateContext<'_>) {}

    /// Draws into the back buffer.
    fn render(&self, graphics: &mut dyn Graphics);
}
