//=========================================================================
// QuickLoop Demo
//=========================================================================
//
// Opens the default window with a 40 × 20 toggle grid centred on screen.
// Left click toggles a cell, `R` clears the grid, closing the window
// quits.
//
// Log level follows `RUST_LOG` (default: info).
//
//=========================================================================

use env_logger::{Builder, Env};
use log::info;

use quickloop_engine::core::scene::{Grid, SceneRoot};
use quickloop_engine::{OrchestratorBuilder, OrchestratorCell};

fn main() {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut engine = OrchestratorCell::new(|| {
        OrchestratorBuilder::new()
            .with_scene(|| SceneRoot::new().with(Grid::new(40, 20, 20.0, 20.0, 2.0)))
            .build()
    });

    engine.instance().run();

    let frames = engine.instance().frame_count();
    let released = engine.release();
    info!(target: "engine", "Ran {} frames, released {:?}", frames, released);
}
