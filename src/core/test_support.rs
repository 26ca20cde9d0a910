//=========================================================================
// Test Support
//=========================================================================
//
// Scripted and recording collaborators for orchestrator tests.
//
// Every stub writes into a shared `CallLog`, so a test can assert the
// exact interleaving of timer, graphics and entity calls across phases.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::{Arc, Weak};

//=== Internal Dependencies ===============================================

use crate::core::assets::AssetManager;
use crate::core::audio::AudioManager;
use crate::core::graphics::{Color, Graphics, Rect};
use crate::core::input::{InputManager, KeyCode};
use crate::core::platform_bridge::{EventSink, PlatformEvent};
use crate::core::scene::{Entity, UpdateContext, Vector2};
use crate::core::time::FrameTimer;

//=== Call Log ============================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Call {
    TimerUpdate,
    TimerReset,
    Pump,
    Clear,
    FillRect,
    Present,
    EntityUpdate(usize),
    EntityLateUpdate(usize),
    EntityRender(usize),
    /// Whether a watched clip was still referenced when graphics dropped.
    ClipLiveAtGraphicsDrop(bool),
    Dropped(&'static str),
}

#[derive(Debug, Clone, Default)]
pub(crate) struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    pub(crate) fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub(crate) fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    pub(crate) fn count(&self, call: Call) -> usize {
        self.0.borrow().iter().filter(|c| **c == call).count()
    }
}

//=== ClipWatch ===========================================================

/// Weak handle on asset bytes, read when a `StubGraphics` drops.
///
/// Audio and assets both hold strong references to a playing clip, so a
/// dead handle at that point means both were released first.
#[derive(Debug, Clone, Default)]
pub(crate) struct ClipWatch(Rc<RefCell<Option<Weak<[u8]>>>>);

impl ClipWatch {
    pub(crate) fn watch(&self, clip: &Arc<[u8]>) {
        *self.0.borrow_mut() = Some(Arc::downgrade(clip));
    }

    fn live(&self) -> Option<bool> {
        self.0.borrow().as_ref().map(|clip| clip.strong_count() > 0)
    }
}

//=== ScriptedTimer =======================================================

/// Frame clock that advances by scripted steps instead of wall time.
///
/// Each `update()` adds the next step to the accumulated delta;
/// `reset()` zeroes it. Once the script runs out, `fallback` is used.
pub(crate) struct ScriptedTimer {
    steps: VecDeque<f32>,
    fallback: f32,
    elapsed: f32,
    scale: f32,
    log: CallLog,
}

impl ScriptedTimer {
    pub(crate) fn new(steps: &[f32], fallback: f32, log: &CallLog) -> Self {
        Self {
            steps: steps.iter().copied().collect(),
            fallback,
            elapsed: 0.0,
            scale: 1.0,
            log: log.clone(),
        }
    }
}

impl FrameTimer for ScriptedTimer {
    fn reset(&mut self) {
        self.elapsed = 0.0;
        self.log.push(Call::TimerReset);
    }

    fn update(&mut self) {
        self.elapsed += self.steps.pop_front().unwrap_or(self.fallback);
        self.log.push(Call::TimerUpdate);
    }

    fn delta_time(&self) -> f32 {
        self.elapsed * self.scale
    }

    fn time_scale(&self) -> f32 {
        self.scale
    }

    fn set_time_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}

impl Drop for ScriptedTimer {
    fn drop(&mut self) {
        self.log.push(Call::Dropped("timer"));
    }
}

//=== StubGraphics ========================================================

/// Graphics backend that records calls and replays scripted events.
///
/// `pump_events` delivers one scripted batch per call. When the script is
/// exhausted it requests quit so loops under test always terminate.
pub(crate) struct StubGraphics {
    initialized: bool,
    size: (u32, u32),
    script: VecDeque<Vec<PlatformEvent>>,
    clip: ClipWatch,
    log: CallLog,
}

impl StubGraphics {
    pub(crate) fn new(log: &CallLog) -> Self {
        Self {
            initialized: true,
            size: (800, 600),
            script: VecDeque::new(),
            clip: ClipWatch::default(),
            log: log.clone(),
        }
    }

    /// Reports the watched clip's liveness on drop.
    pub(crate) fn watching(mut self, clip: &ClipWatch) -> Self {
        self.clip = clip.clone();
        self
    }

    pub(crate) fn failing(log: &CallLog) -> Self {
        let mut graphics = Self::new(log);
        graphics.initialized = false;
        graphics
    }

    /// Appends one pump's worth of events.
    pub(crate) fn then(mut self, batch: Vec<PlatformEvent>) -> Self {
        self.script.push_back(batch);
        self
    }

    /// Appends `polls` empty pumps.
    pub(crate) fn idle_for(mut self, polls: usize) -> Self {
        self.script.extend(std::iter::repeat_with(Vec::new).take(polls));
        self
    }
}

impl Graphics for StubGraphics {
    fn initialized(&self) -> bool {
        self.initialized
    }

    fn screen_size(&self) -> (u32, u32) {
        self.size
    }

    fn pump_events(&mut self, sink: &EventSink) {
        self.log.push(Call::Pump);
        match self.script.pop_front() {
            Some(batch) => batch.into_iter().for_each(|event| sink.push(event)),
            None => sink.push(PlatformEvent::QuitRequested),
        }
    }

    fn clear_back_buffer(&mut self) {
        self.log.push(Call::Clear);
    }

    fn fill_rect(&mut self, _rect: Rect, _color: Color) {
        self.log.push(Call::FillRect);
    }

    fn render(&mut self) {
        self.log.push(Call::Present);
    }
}

impl Drop for StubGraphics {
    fn drop(&mut self) {
        if let Some(live) = self.clip.live() {
            self.log.push(Call::ClipLiveAtGraphicsDrop(live));
        }
        self.log.push(Call::Dropped("graphics"));
    }
}

//=== RecordingEntity =====================================================

/// Entity that logs its phase calls and what input it saw.
pub(crate) struct RecordingEntity {
    id: usize,
    position: Vector2,
    log: CallLog,
    /// `(frame, space_pressed)` observed during each update.
    pub(crate) seen: Rc<RefCell<Vec<(u64, bool)>>>,
}

impl RecordingEntity {
    pub(crate) fn new(id: usize, log: &CallLog) -> Self {
        Self::at(id, Vector2::ZERO, log)
    }

    pub(crate) fn at(id: usize, position: Vector2, log: &CallLog) -> Self {
        Self {
            id,
            position,
            log: log.clone(),
            seen: Rc::default(),
        }
    }
}

impl Entity for RecordingEntity {
    fn position(&self) -> Vector2 {
        self.position
    }

    fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    fn update(&mut self, context: &mut UpdateContext<'_>) {
        self.log.push(Call::EntityUpdate(self.id));
        self.seen
            .borrow_mut()
            .push((context.frame, context.input.key_pressed(KeyCode::Space)));
    }

    fn late_update(&mut self, _context: &mut UpdateContext<'_>) {
        self.log.push(Call::EntityLateUpdate(self.id));
    }

    fn render(&self, graphics: &mut dyn Graphics) {
        self.log.push(Call::EntityRender(self.id));
        graphics.fill_rect(Rect::new(self.position.x, self.position.y, 1.0, 1.0), Color::WHITE);
    }
}

//=== ContextFixture ======================================================

/// Owns the managers an `UpdateContext` borrows.
pub(crate) struct ContextFixture {
    pub(crate) input: InputManager,
    pub(crate) audio: AudioManager,
    pub(crate) assets: AssetManager,
}

impl ContextFixture {
    pub(crate) fn new() -> Self {
        Self {
            input: InputManager::new(),
            audio: AudioManager::new(),
            assets: AssetManager::new("does-not-exist"),
        }
    }

    pub(crate) fn context(&mut self, delta_time: f32, frame: u64) -> UpdateContext<'_> {
        UpdateContext {
            input: &self.input,
            audio: &mut self.audio,
            assets: &mut self.assets,
            delta_time,
            frame,
        }
    }
}
