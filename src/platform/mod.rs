//=========================================================================
// Window Platform
//=========================================================================
//
// Desktop graphics backend built on winit.
//
// Architecture:
// ```text
//  Orchestrator::poll()
//     │
//     └─► WindowGraphics::pump_events(sink)
//            │
//            ├─ EventLoop::pump_app_events(Some(0))   (never blocks)
//            │     └─► WindowApp (ApplicationHandler)
//            │            ├─ EventTranslator: WindowEvent → PlatformEvent
//            │            └─ pending: Vec<PlatformEvent>
//            │
//            └─ flush pending → EventSink
// ```
//
// The orchestrator polls, winit calls back. `pump_app_events` with a zero
// timeout bridges the two: each loop iteration processes whatever the OS
// has queued, then returns control.
//
// The window is created in `resumed()`, which winit delivers during the
// first pumps. Construction pumps until it arrives or gives up, and any
// failure leaves the backend reporting `initialized() == false`.
//
// Frames are composed in a CPU `Canvas`; presenting swaps the canvas and
// notifies the window. Pixels are not uploaded to the surface.
//
// Winit allows one event loop per process, so a second `WindowGraphics`
// in the same process fails to initialize.
//
//=========================================================================

//=== Submodules ==========================================================

mod translate;

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== External Crates =====================================================

use log::{debug, error, info, trace};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::config::EngineConfig;
use crate::core::graphics::{Canvas, Color, Graphics, Rect};
use crate::core::platform_bridge::{EventSink, PlatformError, PlatformEvent};
use translate::EventTranslator;

/// Pumps allowed for the first `resumed()` to arrive.
const RESUME_PUMPS: usize = 16;

//=== WindowApp ===========================================================

/// Winit callback target. Collects translated events until the pump
/// returns.
struct WindowApp {
    title: String,
    size: (u32, u32),
    window: Option<Window>,
    translator: EventTranslator,
    pending: Vec<PlatformEvent>,
    failure: Option<PlatformError>,
}

impl WindowApp {
    fn new(config: &EngineConfig) -> Self {
        Self {
            title: config.window_title.clone(),
            size: (config.screen_width, config.screen_height),
            window: None,
            translator: EventTranslator::new(),
            pending: Vec::new(),
            failure: None,
        }
    }

    fn flush(&mut self, sink: &EventSink) {
        if !self.pending.is_empty() {
            trace!(target: "platform", "Flushing {} events", self.pending.len());
        }
        for event in self.pending.drain(..) {
            sink.push(event);
        }
    }
}

impl ApplicationHandler for WindowApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Resumed with window already open");
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.size.0, self.size.1))
            .with_resizable(false);

        match event_loop.create_window(attributes) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.translator.set_scale_factor(window.scale_factor());
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                self.failure = Some(PlatformError::WindowCreation(e.to_string()));
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let WindowEvent::CloseRequested = event {
            info!(target: "platform", "Window close requested");
        }

        if let Some(event) = self.translator.translate(&event) {
            self.pending.push(event);
        }
    }
}

//=== WindowGraphics ======================================================

/// Native window plus CPU canvas.
pub struct WindowGraphics {
    event_loop: Option<EventLoop<()>>,
    app: WindowApp,
    canvas: Canvas,
    exited: bool,
}

impl WindowGraphics {
    /// Opens the window. Failures are logged and produce a backend that
    /// reports `initialized() == false`.
    pub fn new(config: &EngineConfig) -> Self {
        match Self::open(config) {
            Ok(graphics) => graphics,
            Err(e) => {
                error!(target: "platform", "Window graphics unavailable: {}", e);
                Self::unavailable(config)
            }
        }
    }

    fn open(config: &EngineConfig) -> Result<Self, PlatformError> {
        let mut event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;
        let mut app = WindowApp::new(config);

        for _ in 0..RESUME_PUMPS {
            let status = event_loop.pump_app_events(Some(Duration::ZERO), &mut app);
            if let Some(failure) = app.failure.take() {
                return Err(failure);
            }
            if app.window.is_some() {
                break;
            }
            if let PumpStatus::Exit(code) = status {
                debug!(target: "platform", "Event loop exited during startup ({})", code);
                break;
            }
        }

        if app.window.is_none() {
            return Err(PlatformError::NeverResumed(RESUME_PUMPS));
        }

        Ok(Self {
            event_loop: Some(event_loop),
            app,
            canvas: Canvas::new(config.screen_width, config.screen_height),
            exited: false,
        })
    }

    fn unavailable(config: &EngineConfig) -> Self {
        Self {
            event_loop: None,
            app: WindowApp::new(config),
            canvas: Canvas::new(config.screen_width, config.screen_height),
            exited: true,
        }
    }
}

impl Graphics for WindowGraphics {
    fn initialized(&self) -> bool {
        self.event_loop.is_some() && self.app.window.is_some()
    }

    fn screen_size(&self) -> (u32, u32) {
        self.canvas.size()
    }

    fn pump_events(&mut self, sink: &EventSink) {
        if self.exited {
            sink.push(PlatformEvent::QuitRequested);
            return;
        }

        if let Some(event_loop) = self.event_loop.as_mut() {
            if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(Duration::ZERO), &mut self.app) {
                info!(target: "platform", "Event loop exited ({})", code);
                self.exited = true;
                self.app.pending.push(PlatformEvent::QuitRequested);
            }
        }

        self.app.flush(sink);
    }

    fn clear_back_buffer(&mut self) {
        self.canvas.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.canvas.fill_rect(rect, color);
    }

    fn render(&mut self) {
        if let Some(window) = &self.app.window {
            window.pre_present_notify();
        }
        self.canvas.present();
        if let Some(window) = &self.app.window {
            window.request_redraw();
        }
    }
}

impl Drop for WindowGraphics {
    fn drop(&mut self) {
        if self.app.window.take().is_some() {
            info!(target: "platform", "Window closed");
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, InputManager, KeyCode, Modifiers};
    use crate::core::platform_bridge::{EventQueue, TickControl};

    #[test]
    fn unavailable_backend_is_not_initialized() {
        let graphics = WindowGraphics::unavailable(&EngineConfig::default());

        assert!(!graphics.initialized());
        assert_eq!(graphics.screen_size(), (800, 600));
    }

    #[test]
    fn unavailable_backend_requests_quit_on_pump() {
        let mut graphics = WindowGraphics::unavailable(&EngineConfig::default());
        let queue = EventQueue::new();
        let mut input = InputManager::new();

        graphics.pump_events(&queue.sink());

        assert_eq!(queue.drain(&mut input), TickControl::Exit);
    }

    #[test]
    fn render_without_window_still_presents() {
        let mut graphics = WindowGraphics::unavailable(&EngineConfig::default());

        graphics.clear_back_buffer();
        graphics.fill_rect(Rect::new(0.0, 0.0, 2.0, 2.0), Color::WHITE);
        graphics.render();

        assert_eq!(graphics.canvas.front_pixel(1, 1), Some(Color::WHITE));
    }

    #[test]
    fn flush_forwards_pending_in_order() {
        let mut app = WindowApp::new(&EngineConfig::default());
        let queue = EventQueue::new();
        let mut input = InputManager::new();

        app.pending.push(PlatformEvent::Input(InputEvent::KeyDown {
            key: KeyCode::KeyA,
            modifiers: Modifiers::NONE,
        }));
        app.pending.push(PlatformEvent::FocusChanged(true));
        app.flush(&queue.sink());

        assert!(app.pending.is_empty());
        queue.drain(&mut input);
        assert_eq!(input.pending_len(), 1);
    }

    #[test]
    fn platform_error_messages() {
        assert_eq!(
            PlatformError::NeverResumed(RESUME_PUMPS).to_string(),
            format!("Event loop did not become active after {} pumps", RESUME_PUMPS)
        );
        assert!(PlatformError::WindowCreation("denied".into()).to_string().contains("denied"));
    }
}
