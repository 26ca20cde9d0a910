//=========================================================================
// QuickLoop Engine Library Root
//
// Single-threaded frame-loop orchestrator for small 2D games.
//
// Responsibilities:
// - Expose the orchestrator and its builder
// - Expose the subsystems entities talk to (input, audio, assets, scene)
// - Keep the winit backend (`platform`) hidden behind the `Graphics` trait
//
// Typical usage:
// ```no_run
// use quickloop_engine::OrchestratorBuilder;
// use quickloop_engine::core::scene::{Grid, SceneRoot};
//
// fn main() {
//     OrchestratorBuilder::new()
//         .with_scene(|| SceneRoot::new().with(Grid::new(40, 20, 20.0, 20.0, 2.0)))
//         .build()
//         .run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the orchestrator and every subsystem it owns.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` is the winit window backend, only reachable as the default
// graphics of `OrchestratorBuilder` on desktop targets.
//
#[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
mod platform;
mod engine;

//--- Public Exports ------------------------------------------------------

pub use crate::core::{Orchestrator, Subsystem};
pub use engine::{OrchestratorBuilder, OrchestratorCell};
