//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Contract between a native event source and the orchestrator.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Sender;
use log::warn;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// One native event, normalized.
///
/// The orchestrator acts on `QuitRequested` and forwards `Input` to the
/// InputManager. Everything else is ignored by the loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformEvent {
    /// Window close, OS shutdown, or any other request to stop.
    QuitRequested,

    /// Keyboard or mouse input.
    Input(InputEvent),

    /// Drawable area changed size (pixels).
    Resized { width: u32, height: u32 },

    /// Window gained (`true`) or lost (`false`) focus.
    FocusChanged(bool),
}

//=== EventSink ===========================================================

/// Write end of the orchestrator's event queue.
///
/// Handed to [`Graphics::pump_events`](crate::core::graphics::Graphics::pump_events)
/// on every loop iteration.
#[derive(Debug, Clone)]
pub struct EventSink {
    sender: Sender<PlatformEvent>,
}

impl EventSink {
    pub(crate) fn new(sender: Sender<PlatformEvent>) -> Self {
        Self { sender }
    }

    /// Enqueues an event for the current drain.
    pub fn push(&self, event: PlatformEvent) {
        if self.sender.send(event).is_err() {
            warn!(target: "platform", "Event queue closed, dropping {:?}", event);
        }
    }
}

//=== PlatformError =======================================================

/// Native platform initialization errors.
///
/// Never cross the orchestrator boundary: a backend that hits one reports
/// `initialized() == false` instead.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    #[error("Event loop creation failed: {0}")]
    EventLoopCreation(String),

    /// Window creation failed.
    #[error("Window creation failed: {0}")]
    WindowCreation(String),

    /// The event loop never delivered a resume to create the window in.
    #[error("Event loop did not become active after {0} pumps")]
    NeverResumed(usize),
}
