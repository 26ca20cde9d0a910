//=========================================================================
// Event Translation
//=========================================================================
//
// Maps winit window events onto `PlatformEvent`s.
//
// Modifier state arrives as its own winit event. It is forwarded as
// `ModifiersChanged` and cached here to stamp onto every following key and
// button event. OS key repeats are dropped: a held key is already visible
// through the snapshot.
//
// Cursor positions arrive in physical pixels and leave in logical pixels,
// the space the canvas and scene draw in.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton, WindowEvent},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton};
use crate::core::platform_bridge::PlatformEvent;

//=== EventTranslator =====================================================

#[derive(Debug)]
pub(crate) struct EventTranslator {
    modifiers: Modifiers,
    scale_factor: f64,
}

impl EventTranslator {
    pub(crate) fn new() -> Self {
        Self {
            modifiers: Modifiers::NONE,
            scale_factor: 1.0,
        }
    }

    /// Translates one window event. `None` for events the engine has no
    /// use for.
    pub(crate) fn translate(&mut self, event: &WindowEvent) -> Option<PlatformEvent> {
        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => Some(PlatformEvent::QuitRequested),

            WindowEvent::Resized(size) => Some(PlatformEvent::Resized {
                width: size.width,
                height: size.height,
            }),

            WindowEvent::Focused(focused) => Some(PlatformEvent::FocusChanged(*focused)),

            WindowEvent::ModifiersChanged(state) => Some(PlatformEvent::Input(
                self.set_modifiers(state.state()),
            )),

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(*scale_factor);
                None
            }

            WindowEvent::CursorMoved { position, .. } => {
                Some(PlatformEvent::Input(self.cursor_moved(*position)))
            }

            WindowEvent::KeyboardInput { event, .. } => self.key(event).map(PlatformEvent::Input),

            WindowEvent::MouseInput { state, button, .. } => {
                Some(PlatformEvent::Input(self.mouse_button(*button, *state)))
            }

            _ => None,
        }
    }

    //--- Pieces -----------------------------------------------------------

    pub(crate) fn set_modifiers(&mut self, state: ModifiersState) -> InputEvent {
        trace!(target: "platform::input", "Modifiers changed: {:?}", state);
        self.modifiers = Modifiers::from(state);
        InputEvent::ModifiersChanged(self.modifiers)
    }

    pub(crate) fn set_scale_factor(&mut self, scale_factor: f64) {
        trace!(target: "platform::input", "Scale factor changed: {}", scale_factor);
        self.scale_factor = scale_factor;
    }

    fn key(&self, event: &KeyEvent) -> Option<InputEvent> {
        if event.repeat {
            return None;
        }
        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };
        self.key_code(KeyCode::from(code), event.state)
    }

    /// `None` for keys with no engine mapping.
    pub(crate) fn key_code(&self, key: KeyCode, state: ElementState) -> Option<InputEvent> {
        if key == KeyCode::Unidentified {
            trace!(target: "platform::input", "Unmapped key ignored");
            return None;
        }

        let modifiers = self.modifiers;
        Some(match state {
            ElementState::Pressed => InputEvent::KeyDown { key, modifiers },
            ElementState::Released => InputEvent::KeyUp { key, modifiers },
        })
    }

    pub(crate) fn mouse_button(&self, button: WinitMouseButton, state: ElementState) -> InputEvent {
        let button = MouseButton::from(button);
        let modifiers = self.modifiers;
        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown { button, modifiers },
            ElementState::Released => InputEvent::MouseButtonUp { button, modifiers },
        }
    }

    pub(crate) fn cursor_moved(&self, position: PhysicalPosition<f64>) -> InputEvent {
        let logical = position.to_logical::<f64>(self.scale_factor);
        InputEvent::MouseMoved {
            x: logical.x as f32,
            y: logical.y as f32,
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Winit already folds macOS Command into control and Option into alt.
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode as W;
        match code {
            W::Digit0 => KeyCode::Digit0,
            W::Digit1 => KeyCode::Digit1,
            W::Digit2 => KeyCode::Digit2,
            W::Digit3 => KeyCode::Digit3,
            W::Digit4 => KeyCode::Digit4,
            W::Digit5 => KeyCode::Digit5,
            W::Digit6 => KeyCode::Digit6,
            W::Digit7 => KeyCode::Digit7,
            W::Digit8 => KeyCode::Digit8,
            W::Digit9 => KeyCode::Digit9,

            W::KeyA => KeyCode::KeyA,
            W::KeyB => KeyCode::KeyB,
            W::KeyC => KeyCode::KeyC,
            W::KeyD => KeyCode::KeyD,
            W::KeyE => KeyCode::KeyE,
            W::KeyF => KeyCode::KeyF,
            W::KeyG => KeyCode::KeyG,
            W::KeyH => KeyCode::KeyH,
            W::KeyI => KeyCode::KeyI,
            W::KeyJ => KeyCode::KeyJ,
            W::KeyK => KeyCode::KeyK,
            W::KeyL => KeyCode::KeyL,
            W::KeyM => KeyCode::KeyM,
            W::KeyN => KeyCode::KeyN,
            W::KeyO => KeyCode::KeyO,
            W::KeyP => KeyCode::KeyP,
            W::KeyQ => KeyCode::KeyQ,
            W::KeyR => KeyCode::KeyR,
            W::KeyS => KeyCode::KeyS,
            W::KeyT => KeyCode::KeyT,
            W::KeyU => KeyCode::KeyU,
            W::KeyV => KeyCode::KeyV,
            W::KeyW => KeyCode::KeyW,
            W::KeyX => KeyCode::KeyX,
            W::KeyY => KeyCode::KeyY,
            W::KeyZ => KeyCode::KeyZ,

            W::F1 => KeyCode::F1,
            W::F2 => KeyCode::F2,
            W::F3 => KeyCode::F3,
            W::F4 => KeyCode::F4,
            W::F5 => KeyCode::F5,
            W::F6 => KeyCode::F6,
            W::F7 => KeyCode::F7,
            W::F8 => KeyCode::F8,
            W::F9 => KeyCode::F9,
            W::F10 => KeyCode::F10,
            W::F11 => KeyCode::F11,
            W::F12 => KeyCode::F12,

            W::ArrowUp => KeyCode::ArrowUp,
            W::ArrowDown => KeyCode::ArrowDown,
            W::ArrowLeft => KeyCode::ArrowLeft,
            W::ArrowRight => KeyCode::ArrowRight,

            W::Space => KeyCode::Space,
            W::Enter | W::NumpadEnter => KeyCode::Enter,
            W::Escape => KeyCode::Escape,
            W::Tab => KeyCode::Tab,
            W::Backspace => KeyCode::Backspace,
            W::Delete => KeyCode::Delete,

            _ => KeyCode::Unidentified,
        }
    }
}

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    fn shift_alt() -> ModifiersState {
        ModifiersState::SHIFT | ModifiersState::ALT
    }

    #[test]
    fn close_requests_quit() {
        let mut translator = EventTranslator::new();
        assert_eq!(
            translator.translate(&WindowEvent::CloseRequested),
            Some(PlatformEvent::QuitRequested)
        );
    }

    #[test]
    fn resize_and_focus_are_forwarded() {
        let mut translator = EventTranslator::new();
        assert_eq!(
            translator.translate(&WindowEvent::Resized(PhysicalSize::new(1024, 768))),
            Some(PlatformEvent::Resized { width: 1024, height: 768 })
        );
        assert_eq!(
            translator.translate(&WindowEvent::Focused(false)),
            Some(PlatformEvent::FocusChanged(false))
        );
    }

    #[test]
    fn mouse_move_carries_no_modifiers() {
        let mut translator = EventTranslator::new();
        translator.set_modifiers(ModifiersState::CONTROL);

        let event = translator.cursor_moved(PhysicalPosition::new(12.5, 40.0));
        assert_eq!(event, InputEvent::MouseMoved { x: 12.5, y: 40.0 });
        assert_eq!(event.modifiers(), None);
    }

    #[test]
    fn cursor_position_is_logical_on_hidpi() {
        let mut translator = EventTranslator::new();
        translator.set_scale_factor(2.0);

        assert_eq!(
            translator.cursor_moved(PhysicalPosition::new(300.0, 120.0)),
            InputEvent::MouseMoved { x: 150.0, y: 60.0 }
        );
    }

    #[test]
    fn modifier_change_is_forwarded() {
        let mut translator = EventTranslator::new();

        let expected = Modifiers { shift: true, ctrl: false, alt: true };
        assert_eq!(translator.set_modifiers(shift_alt()), InputEvent::ModifiersChanged(expected));
        assert_eq!(translator.modifiers, expected);
    }

    #[test]
    fn modifiers_stick_to_following_events() {
        let mut translator = EventTranslator::new();
        translator.set_modifiers(shift_alt());

        let expected = Modifiers { shift: true, ctrl: false, alt: true };
        assert_eq!(
            translator.mouse_button(WinitMouseButton::Left, ElementState::Pressed),
            InputEvent::MouseButtonDown { button: MouseButton::Left, modifiers: expected }
        );
        assert_eq!(
            translator.key_code(KeyCode::KeyS, ElementState::Released),
            Some(InputEvent::KeyUp { key: KeyCode::KeyS, modifiers: expected })
        );
    }

    #[test]
    fn unidentified_keys_are_dropped() {
        let translator = EventTranslator::new();
        assert_eq!(KeyCode::from(WinitKeyCode::F13), KeyCode::Unidentified);
        assert_eq!(translator.key_code(KeyCode::Unidentified, ElementState::Pressed), None);
    }

    #[test]
    fn function_and_enter_keys_map() {
        assert_eq!(KeyCode::from(WinitKeyCode::F1), KeyCode::F1);
        assert_eq!(KeyCode::from(WinitKeyCode::F12), KeyCode::F12);
        assert_eq!(KeyCode::from(WinitKeyCode::NumpadEnter), KeyCode::Enter);
    }

    #[test]
    fn extra_mouse_buttons_collapse_to_other() {
        assert_eq!(MouseButton::from(WinitMouseButton::Back), MouseButton::Other);
        assert_eq!(MouseButton::from(WinitMouseButton::Other(7)), MouseButton::Other);
    }
}
