//=========================================================================
// QuickLoop Engine
//=========================================================================
//
// Host-facing entry points.
//
// Architecture:
// ```text
//     OrchestratorBuilder ──build()──> Orchestrator ──run()──> [frame loop]
//         │                                 ▲
//         ├─ with_frame_rate()              │ instance() / release()
//         ├─ with_screen_size()             │
//         ├─ with_graphics()          OrchestratorCell
//         ├─ with_timer()               (lazy, one live instance)
//         └─ with_scene()
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::PathBuf;

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::config::{EngineConfig, IdleStrategy};
use crate::core::graphics::Graphics;
use crate::core::managers::{GraphicsFactory, Subsystem, TimerFactory};
use crate::core::scene::SceneRoot;
use crate::core::time::{FrameTimer, Timer};
use crate::core::Orchestrator;

//=== OrchestratorBuilder =================================================

/// Builder for configuring and constructing an [`Orchestrator`].
///
/// # Default Values
///
/// - **Frame rate**: 60.0
/// - **Screen**: 800 × 600
/// - **Graphics**: a winit window on desktop targets, headless elsewhere
/// - **Timer**: wall-clock [`Timer`]
/// - **Scene**: empty
///
/// # Examples
///
/// ```no_run
/// use quickloop_engine::OrchestratorBuilder;
/// use quickloop_engine::core::scene::{Grid, SceneRoot};
///
/// let mut orchestrator = OrchestratorBuilder::new()
///     .with_frame_rate(60.0)
///     .with_scene(|| SceneRoot::new().with(Grid::new(40, 20, 20.0, 20.0, 2.0)))
///     .build();
///
/// orchestrator.run();
/// ```
pub struct OrchestratorBuilder {
    config: EngineConfig,
    graphics: Option<GraphicsFactory>,
    timer: Option<TimerFactory>,
    scene: Option<SceneFactory>,
}

type SceneFactory = Box<dyn FnOnce() -> SceneRoot>;

impl OrchestratorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            graphics: None,
            timer: None,
            scene: None,
        }
    }

    /// Sets the frame-rate ceiling.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `frame_rate <= 0.0`.
    pub fn with_frame_rate(mut self, frame_rate: f32) -> Self {
        assert!(frame_rate > 0.0, "Frame rate must be positive, got {}", frame_rate);
        self.config.frame_rate = frame_rate;
        self
    }

    /// Sets the logical screen size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_screen_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Screen size must be non-zero, got {}x{}", width, height);
        self.config.screen_width = width;
        self.config.screen_height = height;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.window_title = title.into();
        self
    }

    /// Directory asset names are resolved against.
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.asset_root = root.into();
        self
    }

    /// What the loop does between admitted frames.
    ///
    /// Default: [`IdleStrategy::Spin`]
    pub fn with_idle_strategy(mut self, idle: IdleStrategy) -> Self {
        self.config.idle = idle;
        self
    }

    /// Replaces the graphics backend. Called first during construction.
    pub fn with_graphics<F>(mut self, factory: F) -> Self
    where
        F: FnOnce(&EngineConfig) -> Box<dyn Graphics> + 'static,
    {
        self.graphics = Some(Box::new(factory));
        self
    }

    /// Replaces the frame clock.
    pub fn with_timer<F>(mut self, factory: F) -> Self
    where
        F: FnOnce() -> Box<dyn FrameTimer> + 'static,
    {
        self.timer = Some(Box::new(factory));
        self
    }

    /// Supplies the scene, built after every manager exists.
    pub fn with_scene<F>(mut self, factory: F) -> Self
    where
        F: FnOnce() -> SceneRoot + 'static,
    {
        self.scene = Some(Box::new(factory));
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Builds the orchestrator and every subsystem.
    pub fn build(self) -> Orchestrator {
        info!(
            target: "engine",
            "Building orchestrator ({} fps, {}x{})",
            self.config.frame_rate,
            self.config.screen_width,
            self.config.screen_height
        );

        let graphics = self
            .graphics
            .unwrap_or_else(|| Box::new(default_graphics) as GraphicsFactory);
        let timer = self
            .timer
            .unwrap_or_else(|| Box::new(default_timer) as TimerFactory);
        let scene = self.scene.unwrap_or_else(|| Box::new(SceneRoot::new) as SceneFactory);

        Orchestrator::construct(self.config, graphics, timer, scene)
    }
}

impl Default for OrchestratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn default_timer() -> Box<dyn FrameTimer> {
    Box::new(Timer::new())
}

#[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
fn default_graphics(config: &EngineConfig) -> Box<dyn Graphics> {
    Box::new(crate::platform::WindowGraphics::new(config))
}

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
fn default_graphics(config: &EngineConfig) -> Box<dyn Graphics> {
    Box::new(crate::core::graphics::HeadlessGraphics::new(config.screen_width, config.screen_height))
}

//=== OrchestratorCell ====================================================

/// Lazily constructed, explicitly released orchestrator slot.
///
/// `instance()` builds on first use and returns the same orchestrator
/// until `release()`. The next `instance()` after a release builds a
/// fresh one.
///
/// ```no_run
/// use quickloop_engine::{OrchestratorBuilder, OrchestratorCell};
///
/// let mut cell = OrchestratorCell::new(|| OrchestratorBuilder::new().build());
/// cell.instance().run();
/// cell.release();
/// ```
pub struct OrchestratorCell<F>
where
    F: FnMut() -> Orchestrator,
{
    factory: F,
    current: Option<Orchestrator>,
}

impl<F> OrchestratorCell<F>
where
    F: FnMut() -> Orchestrator,
{
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            current: None,
        }
    }

    /// Returns the live orchestrator, constructing it if needed.
    pub fn instance(&mut self) -> &mut Orchestrator {
        let Self { factory, current } = self;
        current.get_or_insert_with(|| {
            debug!(target: "engine", "Constructing orchestrator instance");
            factory()
        })
    }

    /// Shuts down and drops the live orchestrator.
    ///
    /// Returns the subsystem release order, or an empty list if nothing
    /// was live.
    pub fn release(&mut self) -> Vec<Subsystem> {
        match self.current.take() {
            Some(mut orchestrator) => orchestrator.shutdown(),
            None => {
                debug!(target: "engine", "Release with no live orchestrator");
                Vec::new()
            }
        }
    }

    pub fn is_live(&self) -> bool {
        self.current.is_some()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
