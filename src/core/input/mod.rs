//=========================================================================
// Input Manager
//=========================================================================
//
// Two-snapshot input state with edge detection.
//
// Architecture:
// ```text
//   queue(event) ──► InputBuffer (pending, every loop iteration)
//                         │
//   update()  ────────────┴──► current snapshot     (EarlyUpdate)
//   update_prev_input() ──────► previous = current  (LateUpdate)
// ```
//
// Queries compare `current` against `previous`:
// - down:      held in current
// - pressed:   held in current, not in previous
// - released:  held in previous, not in current
//
// A press and release that both land between two samples cancel out and
// are not observed.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod input_buffer;
mod snapshot;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use snapshot::InputSnapshot;

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use input_buffer::InputBuffer;

//=== InputManager ========================================================

/// Owns the current and previous input snapshots.
pub struct InputManager {
    pending: InputBuffer,
    current: InputSnapshot,
    previous: InputSnapshot,
}

impl InputManager {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            pending: InputBuffer::new(),
            current: InputSnapshot::new(),
            previous: InputSnapshot::new(),
        }
    }

    //--- Frame Lifecycle --------------------------------------------------

    /// Queues a native input event for the next [`update`](Self::update).
    pub fn queue(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Samples queued events into the current snapshot.
    pub fn update(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let mut changed = false;
        for event in self.pending.drain() {
            changed |= self.current.apply(&event);
        }

        if changed {
            trace!(target: "input", "Snapshot updated: {:?}", self.current);
        }
    }

    /// Copies the current snapshot into the previous one.
    ///
    /// Establishes the baseline for the next frame's edge queries.
    pub fn update_prev_input(&mut self) {
        self.previous.copy_from(&self.current);
    }

    //=====================================================================
    // Query API - Keyboard
    //=====================================================================

    /// Returns `true` while the key is held.
    pub fn key_down(&self, key: KeyCode) -> bool {
        self.current.key_down(key)
    }

    /// Returns `true` on the frame the key went down.
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.current.key_down(key) && !self.previous.key_down(key)
    }

    /// Returns `true` on the frame the key went up.
    pub fn key_released(&self, key: KeyCode) -> bool {
        !self.current.key_down(key) && self.previous.key_down(key)
    }

    //=====================================================================
    // Query API - Mouse
    //=====================================================================

    /// Like [`key_down`](Self::key_down) but for mouse buttons.
    pub fn mouse_button_down(&self, button: MouseButton) -> bool {
        self.current.button_down(button)
    }

    /// Like [`key_pressed`](Self::key_pressed) but for mouse buttons.
    pub fn mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.current.button_down(button) && !self.previous.button_down(button)
    }

    /// Like [`key_released`](Self::key_released) but for mouse buttons.
    pub fn mouse_button_released(&self, button: MouseButton) -> bool {
        !self.current.button_down(button) && self.previous.button_down(button)
    }

    /// Cursor position in screen pixels, top-left origin.
    pub fn mouse_position(&self) -> (f32, f32) {
        self.current.mouse_position()
    }

    /// Cursor movement between the previous and current snapshot.
    pub fn mouse_delta(&self) -> (f32, f32) {
        let (cx, cy) = self.current.mouse_position();
        let (px, py) = self.previous.mouse_position();
        (cx - px, cy - py)
    }

    //=====================================================================
    // Query API - Modifiers & Snapshots
    //=====================================================================

    pub fn modifiers(&self) -> Modifiers {
        self.current.modifiers()
    }

    pub fn current(&self) -> &InputSnapshot {
        &self.current
    }

    pub fn previous(&self) -> &InputSnapshot {
        &self.previous
    }

    /// Number of events waiting for the next sample.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
