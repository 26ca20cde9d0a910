//=========================================================================
// Input Buffer
//=========================================================================
//
// Pending input between event draining and the next snapshot sample.
//
// The orchestrator drains native events on every loop iteration, but the
// snapshot only advances on admitted frames. Events accumulate here in
// between.
//
// - Discrete events keep arrival order; an exact repeat of the last one
//   is dropped (key auto-repeat).
// - Continuous events collapse to the latest position.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::event::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    latest_motion: Option<InputEvent>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 64;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            latest_motion: None,
        }
    }

    /// Queues one event.
    pub(crate) fn push(&mut self, event: InputEvent) {
        if event.is_continuous() {
            self.latest_motion = Some(event);
        } else if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    /// Yields queued events in application order and leaves the buffer
    /// empty. Capacity is retained for the next frame.
    pub(crate) fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        let motion = self.latest_motion.take();
        self.discrete.drain(..).chain(motion)
    }

    pub(crate) fn len(&self) -> usize {
        self.discrete.len() + usize::from(self.latest_motion.is_some())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
