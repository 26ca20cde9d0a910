//=========================================================================
// Orchestrator
//=========================================================================
//
// Owns every subsystem plus the scene root and drives the frame loop.
//
// Loop iteration (one poll):
// ```text
//   timer.update()
//   graphics.pump_events(sink) → EventQueue::drain() → input / quit flag
//   delta ≥ 1 / frame_rate ?
//     yes → EarlyUpdate → Update → LateUpdate → Render
//     no  → idle strategy
// ```
//
// Frame phases:
// ```text
//   EarlyUpdate   timer.reset(), input.update()
//   Update        scene.update()
//   LateUpdate    scene.late_update(), input.update_prev_input()
//   Render        clear_back_buffer(), scene.render(), graphics.render()
// ```
//
// A quit request seen during the drain stops the loop only after the
// current iteration finishes, so an admitted frame still completes.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::sync::atomic::{AtomicU64, Ordering};

//=== External Dependencies ===============================================

use log::{debug, info, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::assets::AssetManager;
use crate::core::audio::AudioManager;
use crate::core::config::EngineConfig;
use crate::core::graphics::Graphics;
use crate::core::input::InputManager;
use crate::core::managers::{GraphicsFactory, Managers, Subsystem, TimerFactory};
use crate::core::platform_bridge::{EventQueue, EventSink, TickControl};
use crate::core::scene::{SceneRoot, Vector2};
use crate::core::time::FrameGate;

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

//=== Phase ===============================================================

/// One stage of a frame, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    EarlyUpdate,
    Update,
    LateUpdate,
    Render,
}

//=== LoopState ===========================================================

/// `Running → Quit` is the only transition; it never reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Quit,
}

//=== Orchestrator ========================================================

pub struct Orchestrator {
    id: u64,
    config: EngineConfig,
    gate: FrameGate,
    quit: bool,
    frames: u64,
    events: EventQueue,
    sink: EventSink,
    scene: SceneRoot,
    managers: Option<Managers>,
}

impl Orchestrator {
    //--- Construction -----------------------------------------------------

    /// Builds every manager, then the scene, centred on screen.
    ///
    /// Graphics failing to initialize is logged and puts the orchestrator
    /// straight into the quit state; construction itself never fails.
    pub(crate) fn construct(
        config: EngineConfig,
        graphics: GraphicsFactory,
        timer: TimerFactory,
        scene: impl FnOnce() -> SceneRoot,
    ) -> Self {
        let id = NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed);
        let gate = FrameGate::new(config.frame_rate, config.idle);
        let (managers, initialized) = Managers::create(&config, graphics, timer);

        let (width, height) = managers.graphics.screen_size();
        let mut scene = scene();
        scene.set_origin(Vector2::new(width as f32 * 0.5, height as f32 * 0.5));

        let events = EventQueue::new();
        let sink = events.sink();

        info!(
            target: "orchestrator",
            "Orchestrator #{} ready ({}x{}, {} fps ceiling, {} entities)",
            id,
            width,
            height,
            config.frame_rate,
            scene.len()
        );

        Self {
            id,
            config,
            gate,
            quit: !initialized,
            frames: 0,
            events,
            sink,
            scene,
            managers: Some(managers),
        }
    }

    //--- Loop -------------------------------------------------------------

    /// Polls until quit is requested.
    ///
    /// Returns immediately if the orchestrator is already quitting, which
    /// is the case when graphics failed to initialize.
    pub fn run(&mut self) {
        if self.quit {
            warn!(target: "orchestrator", "Orchestrator #{} is quitting; loop not entered", self.id);
            return;
        }

        info!(target: "orchestrator", "Entering frame loop");
        while !self.quit {
            self.poll();
        }
        info!(target: "orchestrator", "Frame loop exited after {} frames", self.frames);
    }

    /// Runs one loop iteration.
    ///
    /// Returns `true` if the iteration executed a frame. Once quitting,
    /// nothing runs and no events are pumped.
    pub fn poll(&mut self) -> bool {
        if self.quit {
            trace!(target: "orchestrator", "Poll while quitting ignored");
            return false;
        }
        let Some(managers) = self.managers.as_mut() else {
            return false;
        };

        managers.timer.update();
        managers.graphics.pump_events(&self.sink);
        if self.events.drain(&mut managers.input) == TickControl::Exit {
            info!(target: "orchestrator", "Quit requested");
            self.quit = true;
        }

        let delta = managers.timer.delta_time();
        if !self.gate.admits(delta) {
            if !self.quit {
                self.gate.idle(delta);
            }
            return false;
        }

        let frame = self.frames;
        Self::early_update(managers, frame);
        Self::update(managers, &mut self.scene, delta, frame);
        Self::late_update(managers, &mut self.scene, delta, frame);
        Self::render(managers, &self.scene, frame);
        self.frames += 1;
        true
    }

    /// Requests the loop stop after the current iteration.
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    //--- Phases -----------------------------------------------------------

    fn early_update(managers: &mut Managers, frame: u64) {
        trace!(target: "orchestrator", "{:?} (frame {})", Phase::EarlyUpdate, frame);
        managers.timer.reset();
        managers.input.update();
    }

    fn update(managers: &mut Managers, scene: &mut SceneRoot, delta: f32, frame: u64) {
        trace!(target: "orchestrator", "{:?} (frame {})", Phase::Update, frame);
        scene.update(&mut managers.context(delta, frame));
    }

    fn late_update(managers: &mut Managers, scene: &mut SceneRoot, delta: f32, frame: u64) {
        trace!(target: "orchestrator", "{:?} (frame {})", Phase::LateUpdate, frame);
        scene.late_update(&mut managers.context(delta, frame));
        managers.input.update_prev_input();
    }

    fn render(managers: &mut Managers, scene: &SceneRoot, frame: u64) {
        trace!(target: "orchestrator", "{:?} (frame {})", Phase::Render, frame);
        let graphics = managers.graphics.as_mut();
        graphics.clear_back_buffer();
        scene.render(graphics);
        graphics.render();
    }

    //--- Teardown ---------------------------------------------------------

    /// Releases every manager in [`Subsystem::RELEASE_ORDER`] and enters
    /// the quit state.
    ///
    /// Returns the release order performed, or an empty list if the
    /// managers were already released.
    pub fn shutdown(&mut self) -> Vec<Subsystem> {
        self.quit = true;
        match self.managers.take() {
            Some(managers) => {
                let released = managers.release();
                info!(
                    target: "orchestrator",
                    "Orchestrator #{} shut down after {} frames",
                    self.id,
                    self.frames
                );
                released
            }
            None => {
                debug!(target: "orchestrator", "Orchestrator #{} already shut down", self.id);
                Vec::new()
            }
        }
    }

    //--- Accessors --------------------------------------------------------

    /// Process-unique id; two lifetimes never share one.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> LoopState {
        if self.quit {
            LoopState::Quit
        } else {
            LoopState::Running
        }
    }

    pub fn is_quitting(&self) -> bool {
        self.quit
    }

    /// Frames executed so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Multiplier applied to measured frame time. `None` once shut down.
    pub fn time_scale(&self) -> Option<f32> {
        self.managers.as_ref().map(|m| m.timer.time_scale())
    }

    /// Scales measured frame time from the next update on. The gate
    /// compares the scaled delta, so a scale below `1.0` also lowers the
    /// frame rate.
    pub fn set_time_scale(&mut self, scale: f32) {
        match self.managers.as_mut() {
            Some(managers) => managers.timer.set_time_scale(scale),
            None => warn!(target: "orchestrator", "Time scale set after shutdown; ignored"),
        }
    }

    pub fn scene(&self) -> &SceneRoot {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut SceneRoot {
        &mut self.scene
    }

    /// `None` once shut down.
    pub fn input(&self) -> Option<&InputManager> {
        self.managers.as_ref().map(|m| &m.input)
    }

    pub fn graphics(&self) -> Option<&dyn Graphics> {
        self.managers.as_ref().map(|m| m.graphics.as_ref())
    }

    pub fn audio_mut(&mut self) -> Option<&mut AudioManager> {
        self.managers.as_mut().map(|m| &mut m.audio)
    }

    pub fn assets_mut(&mut self) -> Option<&mut AssetManager> {
        self.managers.as_mut().map(|m| &mut m.assets)
    }
}

impl Drop for Orchestrator {
    fn drop(&mut self) {
        self.shutdown();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
