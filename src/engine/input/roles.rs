// Default UI roles of buttons, independent of user bindings
//
// Menus use these to navigate with any connected device. `swapped` exchanges
// the confirm and cancel roles for every device class.

use super::codes::{
    gamepad, icade, icontrolpad, keycode, pointer, ps3, wiimote, zeemote, ButtonCode,
};
use super::device::{DeviceClass, DeviceMap, DeviceSubtype};

/// Fixed UI navigation role of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavRole {
    Confirm,
    Cancel,
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
}

pub fn is_confirm(map: DeviceMap, code: ButtonCode, swapped: bool) -> bool {
    if swapped {
        return is_cancel(map, code, false);
    }
    match map.class {
        DeviceClass::Keyboard => match map.subtype {
            DeviceSubtype::Ps3Controller => code == keycode::GAME_X,
            DeviceSubtype::None => matches!(
                code,
                keycode::ENTER | keycode::CENTER | keycode::GAME_A | keycode::GAME_1
            ),
        },
        DeviceClass::Gamepad => code == gamepad::SOUTH,
        DeviceClass::Wiimote => matches!(code, wiimote::_1 | wiimote::B | wiimote::NUN_Z),
        DeviceClass::IControlPad => code == icontrolpad::X,
        DeviceClass::Zeemote => code == zeemote::A,
        DeviceClass::ICade => matches!(code, icade::A | icade::B),
        DeviceClass::Ps3Pad => code == ps3::CROSS,
        DeviceClass::Pointer => false,
    }
}

pub fn is_cancel(map: DeviceMap, code: ButtonCode, swapped: bool) -> bool {
    if swapped {
        return is_confirm(map, code, false);
    }
    match map.class {
        DeviceClass::Keyboard => match map.subtype {
            DeviceSubtype::Ps3Controller => code == keycode::GAME_Y,
            DeviceSubtype::None => matches!(
                code,
                keycode::ESCAPE | keycode::GAME_B | keycode::GAME_2
            ),
        },
        DeviceClass::Gamepad => code == gamepad::EAST,
        DeviceClass::Wiimote => matches!(code, wiimote::_2 | wiimote::A | wiimote::NUN_C),
        DeviceClass::IControlPad => code == icontrolpad::B,
        DeviceClass::Zeemote => code == zeemote::B,
        DeviceClass::ICade => matches!(code, icade::C | icade::D),
        DeviceClass::Ps3Pad => code == ps3::CIRCLE,
        DeviceClass::Pointer => code == pointer::BACK,
    }
}

pub fn is_left(map: DeviceMap, code: ButtonCode) -> bool {
    match map.class {
        DeviceClass::Keyboard => matches!(code, keycode::LEFT | keycode::JS1_XAXIS_NEG),
        DeviceClass::Gamepad => matches!(code, gamepad::DPAD_LEFT | gamepad::LSTICK_LEFT),
        DeviceClass::Wiimote => matches!(
            code,
            wiimote::LEFT | wiimote::CC_LSTICK_LEFT | wiimote::NUN_STICK_LEFT
        ),
        DeviceClass::IControlPad => matches!(code, icontrolpad::LEFT | icontrolpad::LNUB_LEFT),
        DeviceClass::Zeemote => code == zeemote::LEFT,
        DeviceClass::ICade => code == icade::LEFT,
        DeviceClass::Ps3Pad => code == ps3::LEFT,
        DeviceClass::Pointer => false,
    }
}

pub fn is_right(map: DeviceMap, code: ButtonCode) -> bool {
    match map.class {
        DeviceClass::Keyboard => matches!(code, keycode::RIGHT | keycode::JS1_XAXIS_POS),
        DeviceClass::Gamepad => matches!(code, gamepad::DPAD_RIGHT | gamepad::LSTICK_RIGHT),
        DeviceClass::Wiimote => matches!(
            code,
            wiimote::RIGHT | wiimote::CC_LSTICK_RIGHT | wiimote::NUN_STICK_RIGHT
        ),
        DeviceClass::IControlPad => matches!(code, icontrolpad::RIGHT | icontrolpad::LNUB_RIGHT),
        DeviceClass::Zeemote => code == zeemote::RIGHT,
        DeviceClass::ICade => code == icade::RIGHT,
        DeviceClass::Ps3Pad => code == ps3::RIGHT,
        DeviceClass::Pointer => false,
    }
}

pub fn is_up(map: DeviceMap, code: ButtonCode) -> bool {
    match map.class {
        DeviceClass::Keyboard => matches!(code, keycode::UP | keycode::JS1_YAXIS_NEG),
        DeviceClass::Gamepad => matches!(code, gamepad::DPAD_UP | gamepad::LSTICK_UP),
        DeviceClass::Wiimote => matches!(
            code,
            wiimote::UP | wiimote::CC_LSTICK_UP | wiimote::NUN_STICK_UP
        ),
        DeviceClass::IControlPad => matches!(code, icontrolpad::UP | icontrolpad::LNUB_UP),
        DeviceClass::Zeemote => code == zeemote::UP,
        DeviceClass::ICade => code == icade::UP,
        DeviceClass::Ps3Pad => code == ps3::UP,
        DeviceClass::Pointer => false,
    }
}

pub fn is_down(map: DeviceMap, code: ButtonCode) -> bool {
    match map.class {
        DeviceClass::Keyboard => matches!(code, keycode::DOWN | keycode::JS1_YAXIS_POS),
        DeviceClass::Gamepad => matches!(code, gamepad::DPAD_DOWN | gamepad::LSTICK_DOWN),
        DeviceClass::Wiimote => matches!(
            code,
            wiimote::DOWN | wiimote::CC_LSTICK_DOWN | wiimote::NUN_STICK_DOWN
        ),
        DeviceClass::IControlPad => matches!(code, icontrolpad::DOWN | icontrolpad::LNUB_DOWN),
        DeviceClass::Zeemote => code == zeemote::DOWN,
        DeviceClass::ICade => code == icade::DOWN,
        DeviceClass::Ps3Pad => code == ps3::DOWN,
        DeviceClass::Pointer => false,
    }
}

pub fn is_page_up(map: DeviceMap, code: ButtonCode) -> bool {
    match map.class {
        DeviceClass::Keyboard => matches!(code, keycode::PGUP | keycode::GAME_L1),
        DeviceClass::Gamepad => code == gamepad::L1,
        DeviceClass::Wiimote => matches!(code, wiimote::PLUS | wiimote::L),
        DeviceClass::IControlPad => code == icontrolpad::L,
        DeviceClass::ICade => code == icade::E,
        DeviceClass::Ps3Pad => code == ps3::L1,
        DeviceClass::Zeemote | DeviceClass::Pointer => false,
    }
}

pub fn is_page_down(map: DeviceMap, code: ButtonCode) -> bool {
    match map.class {
        DeviceClass::Keyboard => matches!(code, keycode::PGDOWN | keycode::GAME_R1),
        DeviceClass::Gamepad => code == gamepad::R1,
        DeviceClass::Wiimote => matches!(code, wiimote::MINUS | wiimote::R),
        DeviceClass::IControlPad => code == icontrolpad::R,
        DeviceClass::ICade => code == icade::F,
        DeviceClass::Ps3Pad => code == ps3::R1,
        DeviceClass::Zeemote | DeviceClass::Pointer => false,
    }
}

/// The navigation role of a button, if it has one
pub fn classify(map: DeviceMap, code: ButtonCode, swapped: bool) -> Option<NavRole> {
    if is_confirm(map, code, swapped) {
        Some(NavRole::Confirm)
    } else if is_cancel(map, code, swapped) {
        Some(NavRole::Cancel)
    } else if is_left(map, code) {
        Some(NavRole::Left)
    } else if is_right(map, code) {
        Some(NavRole::Right)
    } else if is_up(map, code) {
        Some(NavRole::Up)
    } else if is_down(map, code) {
        Some(NavRole::Down)
    } else if is_page_up(map, code) {
        Some(NavRole::PageUp)
    } else if is_page_down(map, code) {
        Some(NavRole::PageDown)
    } else {
        None
    }
}
