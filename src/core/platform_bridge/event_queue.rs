//=========================================================================
// Event Queue
//=========================================================================
//
// Core-side end of the native event queue.
//
// Architecture:
//   Graphics::pump_events(sink) → channel → drain() → TickControl
//                                              └─► InputManager::queue()
//
// Single-threaded: the channel is used as a FIFO between the pump and
// the drain within one loop iteration. `drain()` never blocks.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::trace;

//=== Internal Dependencies ===============================================

use super::{EventSink, PlatformEvent};
use crate::core::input::InputManager;

//=== TickControl =========================================================

/// Whether the loop keeps running after a drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventQueue ==========================================================

pub(crate) struct EventQueue {
    sender: Sender<PlatformEvent>,
    receiver: Receiver<PlatformEvent>,
}

impl EventQueue {
    pub(crate) fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Returns a write handle for event producers.
    pub(crate) fn sink(&self) -> EventSink {
        EventSink::new(self.sender.clone())
    }

    /// Drains every pending event.
    ///
    /// Input is forwarded to `input`. A quit request is remembered but
    /// draining continues so no event is left behind.
    pub(crate) fn drain(&self, input: &mut InputManager) -> TickControl {
        let mut control = TickControl::Continue;

        for event in self.receiver.try_iter() {
            match event {
                PlatformEvent::QuitRequested => {
                    trace!(target: "orchestrator", "Quit requested");
                    control = TickControl::Exit;
                }
                PlatformEvent::Input(input_event) => input.queue(input_event),
                other => trace!(target: "orchestrator", "Ignoring {:?}", other),
            }
        }

        control
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode, Modifiers};

    #[test]
    fn drain_handles_empty_queue() {
        let queue = EventQueue::new();
        let mut input = InputManager::new();

        assert_eq!(queue.drain(&mut input), TickControl::Continue);
        assert_eq!(input.pending_len(), 0);
    }

    #[test]
    fn drain_forwards_input_events() {
        let queue = EventQueue::new();
        let sink = queue.sink();
        let mut input = InputManager::new();

        sink.push(PlatformEvent::Input(InputEvent::KeyDown {
            key: KeyCode::KeyA,
            modifiers: Modifiers::NONE,
        }));
        sink.push(PlatformEvent::Input(InputEvent::MouseMoved { x: 10.0, y: 20.0 }));

        assert_eq!(queue.drain(&mut input), TickControl::Continue);
        assert_eq!(input.pending_len(), 2);
        assert!(queue.receiver.is_empty());
    }

    #[test]
    fn quit_request_still_drains_the_rest() {
        let queue = EventQueue::new();
        let sink = queue.sink();
        let mut input = InputManager::new();

        sink.push(PlatformEvent::QuitRequested);
        sink.push(PlatformEvent::Input(InputEvent::KeyDown {
            key: KeyCode::Escape,
            modifiers: Modifiers::NONE,
        }));

        assert_eq!(queue.drain(&mut input), TickControl::Exit);
        assert!(queue.receiver.is_empty());
        assert_eq!(input.pending_len(), 1);
    }

    #[test]
    fn window_events_are_ignored() {
        let queue = EventQueue::new();
        let sink = queue.sink();
        let mut input = InputManager::new();

        sink.push(PlatformEvent::Resized { width: 1024, height: 768 });
        sink.push(PlatformEvent::FocusChanged(false));

        assert_eq!(queue.drain(&mut input), TickControl::Continue);
        assert_eq!(input.pending_len(), 0);
    }
}
