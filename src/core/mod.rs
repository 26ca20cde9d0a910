//=========================================================================
// Core Systems
//=========================================================================
//
// Engine subsystems and the orchestrator that drives them.
//
// Ownership:
// ```text
//   Orchestrator
//     ├─ Managers
//     │    ├─ Graphics (Box<dyn Graphics>, owns the native event loop)
//     │    ├─ AssetManager
//     │    ├─ InputManager
//     │    ├─ AudioManager
//     │    └─ FrameTimer (Box<dyn FrameTimer>)
//     ├─ EventQueue ◄── Graphics::pump_events()
//     ├─ FrameGate
//     └─ SceneRoot
//          └─ Box<dyn Entity> ...
// ```
//
// Everything runs on the thread that called `run()`.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod assets;
pub mod audio;
pub mod config;
pub mod graphics;
pub mod input;
pub mod platform_bridge;
pub mod scene;
pub mod time;

pub(crate) mod managers;
mod orchestrator;

#[cfg(test)]
pub(crate) mod test_support;

//=== Public API ==========================================================

pub use config::{EngineConfig, IdleStrategy};
pub use managers::Subsystem;
pub use orchestrator::{LoopState, Orchestrator, Phase};
