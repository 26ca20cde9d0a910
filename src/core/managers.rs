//=========================================================================
// Managers
//=========================================================================
//
// The five subsystems owned by the orchestrator, with their fixed
// construction and release orders.
//
// ```text
//   construct:  Graphics → Assets → Input → Audio → Timer
//   release:    Audio → Assets → Graphics → Input → Timer
// ```
//
// The release order is spelled out in `release()` rather than left to
// field drop order.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error, info};

//=== Internal Dependencies ===============================================

use crate::core::assets::AssetManager;
use crate::core::audio::AudioManager;
use crate::core::config::EngineConfig;
use crate::core::graphics::Graphics;
use crate::core::input::InputManager;
use crate::core::scene::UpdateContext;
use crate::core::time::FrameTimer;

//=== Subsystem ===========================================================

/// Identifies one managed subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subsystem {
    Graphics,
    Assets,
    Input,
    Audio,
    Timer,
}

impl Subsystem {
    /// Order in which subsystems are constructed.
    pub const CONSTRUCTION_ORDER: [Subsystem; 5] = [
        Subsystem::Graphics,
        Subsystem::Assets,
        Subsystem::Input,
        Subsystem::Audio,
        Subsystem::Timer,
    ];

    /// Order in which subsystems are released.
    pub const RELEASE_ORDER: [Subsystem; 5] = [
        Subsystem::Audio,
        Subsystem::Assets,
        Subsystem::Graphics,
        Subsystem::Input,
        Subsystem::Timer,
    ];
}

//=== Factories ===========================================================

pub(crate) type GraphicsFactory = Box<dyn FnOnce(&EngineConfig) -> Box<dyn Graphics>>;
pub(crate) type TimerFactory = Box<dyn FnOnce() -> Box<dyn FrameTimer>>;

//=== Managers ============================================================

pub(crate) struct Managers {
    pub(crate) audio: AudioManager,
    pub(crate) assets: AssetManager,
    pub(crate) graphics: Box<dyn Graphics>,
    pub(crate) input: InputManager,
    pub(crate) timer: Box<dyn FrameTimer>,
}

impl Managers {
    /// Builds every manager in construction order.
    ///
    /// Returns the managers and whether graphics initialized. A failed
    /// graphics backend does not stop the remaining managers from being
    /// built.
    pub(crate) fn create(
        config: &EngineConfig,
        graphics: GraphicsFactory,
        timer: TimerFactory,
    ) -> (Self, bool) {
        let graphics = graphics(config);
        let initialized = graphics.initialized();
        if initialized {
            info!(target: "orchestrator", "Graphics initialized");
        } else {
            error!(target: "orchestrator", "Graphics failed to initialize; no frames will run");
        }

        let assets = AssetManager::new(config.asset_root.clone());
        let input = InputManager::new();
        let audio = AudioManager::new();
        let timer = timer();

        let managers = Self {
            audio,
            assets,
            graphics,
            input,
            timer,
        };
        (managers, initialized)
    }

    /// Lends input, audio and assets to entities for one phase.
    pub(crate) fn context(&mut self, delta_time: f32, frame: u64) -> UpdateContext<'_> {
        UpdateContext {
            input: &self.input,
            audio: &mut self.audio,
            assets: &mut self.assets,
            delta_time,
            frame,
        }
    }

    /// Releases every manager in [`Subsystem::RELEASE_ORDER`].
    ///
    /// Returns the order actually performed.
    pub(crate) fn release(self) -> Vec<Subsystem> {
        let Self {
            audio,
            assets,
            graphics,
            input,
            timer,
        } = self;

        let mut released = Vec::with_capacity(Subsystem::RELEASE_ORDER.len());
        release_one(Subsystem::Audio, audio, &mut released);
        release_one(Subsystem::Assets, assets, &mut released);
        release_one(Subsystem::Graphics, graphics, &mut released);
        release_one(Subsystem::Input, input, &mut released);
        release_one(Subsystem::Timer, timer, &mut released);
        released
    }
}

fn release_one<T>(kind: Subsystem, subsystem: T, released: &mut Vec<Subsystem>) {
    drop(subsystem);
    debug!(target: "orchestrator", "Released {:?}", kind);
    released.push(kind);
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::audio::Loops;
    use crate::core::test_support::{Call, CallLog, ClipWatch, ScriptedTimer, StubGraphics};

    fn build(log: &CallLog, initialized: bool) -> (Managers, bool) {
        let graphics_log = log.clone();
        let timer_log = log.clone();
        Managers::create(
            &EngineConfig::default(),
            Box::new(move |_: &EngineConfig| {
                let graphics = if initialized {
                    StubGraphics::new(&graphics_log)
                } else {
                    StubGraphics::failing(&graphics_log)
                };
                Box::new(graphics) as Box<dyn Graphics>
            }),
            Box::new(move || Box::new(ScriptedTimer::new(&[], 0.0, &timer_log)) as Box<dyn FrameTimer>),
        )
    }

    #[test]
    fn create_reports_graphics_status() {
        let log = CallLog::default();
        assert!(build(&log, true).1);
        assert!(!build(&log, false).1);
    }

    #[test]
    fn failed_graphics_still_builds_everything() {
        let log = CallLog::default();
        let (mut managers, initialized) = build(&log, false);

        assert!(!initialized);
        managers.timer.update();
        managers.input.update();
        assert_eq!(managers.audio.active_channels(), 0);
    }

    #[test]
    fn release_follows_fixed_order() {
        let log = CallLog::default();
        let (managers, _) = build(&log, true);

        assert_eq!(managers.release(), Subsystem::RELEASE_ORDER.to_vec());
        // Graphics is dropped before the timer, as the order demands
        assert_eq!(log.take(), vec![Call::Dropped("graphics"), Call::Dropped("timer")]);
    }

    #[test]
    fn audio_and_assets_are_gone_before_graphics() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("theme.ogg"), b"OggS").unwrap();
        let config = EngineConfig {
            asset_root: dir.path().to_path_buf(),
            ..EngineConfig::default()
        };

        let log = CallLog::default();
        let watch = ClipWatch::default();
        let graphics = StubGraphics::new(&log).watching(&watch);
        let timer_log = log.clone();
        let (mut managers, _) = Managers::create(
            &config,
            Box::new(move |_: &EngineConfig| Box::new(graphics) as Box<dyn Graphics>),
            Box::new(move || Box::new(ScriptedTimer::new(&[], 0.0, &timer_log)) as Box<dyn FrameTimer>),
        );

        let clip = managers.assets.load("theme.ogg").unwrap();
        managers
            .audio
            .play_music(&mut managers.assets, "theme.ogg", Loops::Forever)
            .unwrap();
        watch.watch(&clip);
        drop(clip);

        managers.release();

        // Input holds no shared state, so its slot between graphics and
        // the timer is only visible through the returned order.
        assert_eq!(
            log.take(),
            vec![
                Call::ClipLiveAtGraphicsDrop(false),
                Call::Dropped("graphics"),
                Call::Dropped("timer"),
            ]
        );
    }

    #[test]
    fn release_order_differs_from_construction_order() {
        assert_ne!(Subsystem::RELEASE_ORDER, Subsystem::CONSTRUCTION_ORDER);
    }
}
