//=========================================================================
// Input Events
//=========================================================================
//
// Platform-neutral input vocabulary consumed by the InputManager.
//
// Event Flow:
// ```text
// Native event loop (winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputManager::queue() → pending buffer
//         ↓
//    InputManager::update() → current snapshot
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Wheel click.
    Middle,

    /// Side, thumb and macro buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents key location, not the produced character: `KeyA` is the
/// same key on QWERTY and AZERTY layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Function Keys ----------------------------------------------------
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,

    //--- Arrow Keys -------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Key reported by the platform that has no mapping here.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier key state at the time of an event.
///
/// Left and right variants are not distinguished. On macOS, Command maps
/// to `ctrl` and Option to `alt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };

    /// Shift only.
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false };

    /// Ctrl only.
    pub const CTRL: Self = Self { shift: false, ctrl: true, alt: false };

    /// Alt only.
    pub const ALT: Self = Self { shift: false, ctrl: false, alt: true };

    /// Returns `true` if no modifier is held.
    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }
}

//=== InputEvent ==========================================================

/// One normalized input event.
///
/// Key and button events carry the modifier state observed when they
/// fired. `ModifiersChanged` reports a modifier change with no key or
/// button attached. `MouseMoved` coordinates are logical screen pixels,
/// top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown { key: KeyCode, modifiers: Modifiers },
    KeyUp { key: KeyCode, modifiers: Modifiers },
    MouseButtonDown { button: MouseButton, modifiers: Modifiers },
    MouseButtonUp { button: MouseButton, modifiers: Modifiers },
    ModifiersChanged(Modifiers),
    MouseMoved { x: f32, y: f32 },
}

impl InputEvent {
    /// Returns `true` for position updates that may be coalesced.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::MouseMoved { .. })
    }

    /// Modifier state carried by the event, if any.
    pub fn modifiers(&self) -> Option<Modifiers> {
        match self {
            Self::KeyDown { modifiers, .. }
            | Self::KeyUp { modifiers, .. }
            | Self::MouseButtonDown { modifiers, .. }
            | Self::MouseButtonUp { modifiers, .. }
            | Self::ModifiersChanged(modifiers) => Some(*modifiers),
            Self::MouseMoved { .. } => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
