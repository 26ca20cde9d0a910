//=========================================================================
// Input Snapshot
//=========================================================================
//
// Held state of keyboard, mouse buttons, cursor and modifiers at one
// sampling point. The InputManager keeps two of these (current and
// previous) and answers edge queries by comparing them.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== InputSnapshot =======================================================

/// Persistent input state at a sampling point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),
    modifiers: Modifiers,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Mutation ---------------------------------------------------------

    /// Folds one event into the held state.
    ///
    /// Returns `true` if the held state changed.
    pub(super) fn apply(&mut self, event: &InputEvent) -> bool {
        let modifiers_changed = match event.modifiers() {
            Some(modifiers) if modifiers != self.modifiers => {
                self.modifiers = modifiers;
                true
            }
            _ => false,
        };

        match *event {
            InputEvent::KeyDown { key, .. } => self.keys_down.insert(key),
            InputEvent::KeyUp { key, .. } => self.keys_down.remove(&key),
            InputEvent::MouseButtonDown { button, .. } => self.buttons_down.insert(button),
            InputEvent::MouseButtonUp { button, .. } => self.buttons_down.remove(&button),
            InputEvent::ModifiersChanged(_) => modifiers_changed,
            InputEvent::MouseMoved { x, y } => {
                let moved = self.mouse_position != (x, y);
                self.mouse_position = (x, y);
                moved
            }
        }
    }

    /// Overwrites this snapshot with `other`, reusing allocations.
    pub(super) fn copy_from(&mut self, other: &Self) {
        self.keys_down.clone_from(&other.keys_down);
        self.buttons_down.clone_from(&other.buttons_down);
        self.mouse_position = other.mouse_position;
        self.modifiers = other.modifiers;
    }

    //--- Queries ----------------------------------------------------------

    pub fn key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn keys_down(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_down.iter()
    }

    pub fn buttons_down(&self) -> impl Iterator<Item = &MouseButton> {
        self.buttons_down.iter()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
