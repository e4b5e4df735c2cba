// winit adapter: turns window events into raw device events
//
// winit merges all keyboards and all mice, so the adapter registers one
// keyboard device and one pointer device on attach.

use super::codes::{ascii_key, keycode, pointer, ButtonCode, NONE};
use super::device::{Capabilities, Device, DeviceClass, DeviceId};
use super::event::ActionKind;
use super::manager::{Dispatch, InputManager};
use super::InputError;
use glam::{IVec2, UVec2};
use log::debug;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Keyboard code for a physical key, `None` for keys without one
pub fn keyboard_code(key: KeyCode) -> Option<ButtonCode> {
    let code = match key {
        KeyCode::KeyA => ascii_key('a'),
        KeyCode::KeyB => ascii_key('b'),
        KeyCode::KeyC => ascii_key('c'),
        KeyCode::KeyD => ascii_key('d'),
        KeyCode::KeyE => ascii_key('e'),
        KeyCode::KeyF => ascii_key('f'),
        KeyCode::KeyG => ascii_key('g'),
        KeyCode::KeyH => ascii_key('h'),
        KeyCode::KeyI => ascii_key('i'),
        KeyCode::KeyJ => ascii_key('j'),
        KeyCode::KeyK => ascii_key('k'),
        KeyCode::KeyL => ascii_key('l'),
        KeyCode::KeyM => ascii_key('m'),
        KeyCode::KeyN => ascii_key('n'),
        KeyCode::KeyO => ascii_key('o'),
        KeyCode::KeyP => ascii_key('p'),
        KeyCode::KeyQ => ascii_key('q'),
        KeyCode::KeyR => ascii_key('r'),
        KeyCode::KeyS => ascii_key('s'),
        KeyCode::KeyT => ascii_key('t'),
        KeyCode::KeyU => ascii_key('u'),
        KeyCode::KeyV => ascii_key('v'),
        KeyCode::KeyW => ascii_key('w'),
        KeyCode::KeyX => ascii_key('x'),
        KeyCode::KeyY => ascii_key('y'),
        KeyCode::KeyZ => ascii_key('z'),
        KeyCode::Digit0 => ascii_key('0'),
        KeyCode::Digit1 => ascii_key('1'),
        KeyCode::Digit2 => ascii_key('2'),
        KeyCode::Digit3 => ascii_key('3'),
        KeyCode::Digit4 => ascii_key('4'),
        KeyCode::Digit5 => ascii_key('5'),
        KeyCode::Digit6 => ascii_key('6'),
        KeyCode::Digit7 => ascii_key('7'),
        KeyCode::Digit8 => ascii_key('8'),
        KeyCode::Digit9 => ascii_key('9'),
        KeyCode::Space => ascii_key(' '),
        KeyCode::Minus => ascii_key('-'),
        KeyCode::Equal => ascii_key('='),
        KeyCode::BracketLeft => ascii_key('['),
        KeyCode::BracketRight => ascii_key(']'),
        KeyCode::Backslash => ascii_key('\\'),
        KeyCode::Semicolon => ascii_key(';'),
        KeyCode::Quote => ascii_key('\''),
        KeyCode::Comma => ascii_key(','),
        KeyCode::Period => ascii_key('.'),
        KeyCode::Slash => ascii_key('/'),
        KeyCode::Backquote => ascii_key('`'),
        KeyCode::Escape => keycode::ESCAPE,
        KeyCode::Enter | KeyCode::NumpadEnter => keycode::ENTER,
        KeyCode::AltLeft => keycode::LALT,
        KeyCode::AltRight => keycode::RALT,
        KeyCode::ShiftLeft => keycode::LSHIFT,
        KeyCode::ShiftRight => keycode::RSHIFT,
        KeyCode::ControlLeft => keycode::LCTRL,
        KeyCode::ControlRight => keycode::RCTRL,
        KeyCode::SuperLeft => keycode::LMETA,
        KeyCode::SuperRight => keycode::RMETA,
        KeyCode::ArrowUp => keycode::UP,
        KeyCode::ArrowRight => keycode::RIGHT,
        KeyCode::ArrowDown => keycode::DOWN,
        KeyCode::ArrowLeft => keycode::LEFT,
        KeyCode::Backspace => keycode::BACK_SPACE,
        KeyCode::ContextMenu => keycode::MENU,
        KeyCode::Home => keycode::HOME,
        KeyCode::End => keycode::END,
        KeyCode::Insert => keycode::INSERT,
        KeyCode::Delete => keycode::DELETE,
        KeyCode::Tab => keycode::TAB,
        KeyCode::ScrollLock => keycode::SCROLL_LOCK,
        KeyCode::CapsLock => keycode::CAPS,
        KeyCode::Pause => keycode::PAUSE,
        KeyCode::PageUp => keycode::PGUP,
        KeyCode::PageDown => keycode::PGDOWN,
        KeyCode::F1 => keycode::F1,
        KeyCode::F2 => keycode::F2,
        KeyCode::F3 => keycode::F3,
        KeyCode::F4 => keycode::F4,
        KeyCode::F5 => keycode::F5,
        KeyCode::F6 => keycode::F6,
        KeyCode::F7 => keycode::F7,
        KeyCode::F8 => keycode::F8,
        KeyCode::F9 => keycode::F9,
        KeyCode::F10 => keycode::F10,
        KeyCode::F11 => keycode::F11,
        KeyCode::F12 => keycode::F12,
        KeyCode::AudioVolumeUp => keycode::VOL_UP,
        KeyCode::AudioVolumeDown => keycode::VOL_DOWN,
        _ => return None,
    };
    Some(code)
}

pub fn mouse_button_code(button: MouseButton) -> Option<ButtonCode> {
    match button {
        MouseButton::Left => Some(pointer::LEFT),
        MouseButton::Middle => Some(pointer::MIDDLE),
        MouseButton::Right => Some(pointer::RIGHT),
        MouseButton::Back => Some(pointer::BACK),
        MouseButton::Forward => Some(pointer::FORWARD),
        MouseButton::Other(_) => None,
    }
}

pub fn element_action(state: ElementState) -> ActionKind {
    match state {
        ElementState::Pressed => ActionKind::Pushed,
        ElementState::Released => ActionKind::Released,
    }
}

/// Window event source for one [`InputManager`]
#[derive(Debug, Default)]
pub struct WinitInput {
    keyboard: Option<DeviceId>,
    pointer: Option<DeviceId>,
    cursor: IVec2,
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the window's keyboard and pointer with the manager
    pub fn attach(&mut self, manager: &mut InputManager) -> Result<(), InputError> {
        self.keyboard = Some(manager.add_device(Device::new(
            "Keyboard",
            DeviceClass::Keyboard,
            Capabilities::KEYBOARD,
        ))?);
        self.pointer = Some(manager.add_device(Device::new(
            "Mouse",
            DeviceClass::Pointer,
            Capabilities::POINTER,
        ))?);
        Ok(())
    }

    pub fn keyboard(&self) -> Option<DeviceId> {
        self.keyboard
    }

    pub fn pointer(&self) -> Option<DeviceId> {
        self.pointer
    }

    /// Feed one window event; `None` if it isn't input
    pub fn process_window_event(
        &mut self,
        manager: &mut InputManager,
        event: &WindowEvent,
    ) -> Option<Dispatch> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                // Held keys are a single push
                if event.repeat {
                    return None;
                }
                let PhysicalKey::Code(key) = event.physical_key else {
                    return None;
                };
                let Some(code) = keyboard_code(key) else {
                    debug!("Unmapped key {:?}", key);
                    return None;
                };
                Some(manager.button_event(self.keyboard?, code, element_action(event.state)))
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = IVec2::new(position.x as i32, position.y as i32);
                Some(manager.pointer_event(self.pointer?, NONE, ActionKind::Moved, self.cursor))
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let code = mouse_button_code(*button)?;
                Some(manager.pointer_event(
                    self.pointer?,
                    code,
                    element_action(*state),
                    self.cursor,
                ))
            }
            WindowEvent::CursorEntered { .. } => Some(manager.pointer_event(
                self.pointer?,
                NONE,
                ActionKind::EnteredView,
                self.cursor,
            )),
            WindowEvent::CursorLeft { .. } => Some(manager.pointer_event(
                self.pointer?,
                NONE,
                ActionKind::LeftView,
                self.cursor,
            )),
            WindowEvent::Resized(size) => {
                manager.set_view_size(UVec2::new(size.width, size.height));
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::config::InputSettings;
    use crate::engine::system::SystemKind;

    #[test]
    fn test_letters_map_to_lowercase_ascii() {
        assert_eq!(keyboard_code(KeyCode::KeyA), Some(ascii_key('a')));
        assert_eq!(keyboard_code(KeyCode::KeyZ), Some(ascii_key('z')));
        assert_eq!(keyboard_code(KeyCode::Digit5), Some(ascii_key('5')));
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(keyboard_code(KeyCode::Escape), Some(keycode::ESCAPE));
        assert_eq!(keyboard_code(KeyCode::NumpadEnter), Some(keycode::ENTER));
        assert_eq!(keyboard_code(KeyCode::ArrowLeft), Some(keycode::LEFT));
        assert_eq!(keyboard_code(KeyCode::F12), Some(keycode::F12));
        assert_eq!(keyboard_code(KeyCode::NumLock), None);
    }

    #[test]
    fn test_mouse_buttons() {
        assert_eq!(mouse_button_code(MouseButton::Left), Some(pointer::LEFT));
        assert_eq!(mouse_button_code(MouseButton::Back), Some(pointer::BACK));
        assert_eq!(mouse_button_code(MouseButton::Other(9)), None);
    }

    #[test]
    fn test_element_action() {
        assert_eq!(element_action(ElementState::Pressed), ActionKind::Pushed);
        assert_eq!(element_action(ElementState::Released), ActionKind::Released);
    }

    #[test]
    fn test_attach_registers_devices() {
        let mut manager = InputManager::new(SystemKind::Gba.create(), InputSettings::default());
        let mut input = WinitInput::new();
        input.attach(&mut manager).unwrap();

        assert_eq!(manager.registry().len(), 2);
        assert!(manager.key_input_present());
        let kb = input.keyboard().unwrap();
        assert_eq!(manager.registry().get(kb).unwrap().class(), DeviceClass::Keyboard);
    }
}
