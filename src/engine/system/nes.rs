// NES controller port

use super::{
    EmuSystem, FrontendKey, KeyCategory, KeyIndex, Translation, VControllerElement,
    SYSTEM_KEY_MAP_START,
};
use crate::engine::input::codes::{ascii_key, gamepad, icade, keycode, ps3, wiimote, ButtonCode};
use crate::engine::input::device::DeviceClass;
use bitflags::bitflags;

bitflags! {
    /// Controller shift register bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NesKeys: u32 {
        const A = 0x01;
        const B = 0x02;
        const SELECT = 0x04;
        const START = 0x08;
        const UP = 0x10;
        const DOWN = 0x20;
        const LEFT = 0x40;
        const RIGHT = 0x80;
    }
}

pub mod keys {
    use super::{KeyIndex, SYSTEM_KEY_MAP_START};

    pub const UP: KeyIndex = SYSTEM_KEY_MAP_START;
    pub const RIGHT: KeyIndex = UP + 1;
    pub const DOWN: KeyIndex = UP + 2;
    pub const LEFT: KeyIndex = UP + 3;
    pub const LEFT_UP: KeyIndex = UP + 4;
    pub const RIGHT_UP: KeyIndex = UP + 5;
    pub const RIGHT_DOWN: KeyIndex = UP + 6;
    pub const LEFT_DOWN: KeyIndex = UP + 7;
    pub const SELECT: KeyIndex = UP + 8;
    pub const START: KeyIndex = UP + 9;
    pub const A: KeyIndex = UP + 10;
    pub const B: KeyIndex = UP + 11;
    pub const A_TURBO: KeyIndex = UP + 12;
    pub const B_TURBO: KeyIndex = UP + 13;
}

const KEY_NAMES: [&str; 14] = [
    "Up",
    "Right",
    "Down",
    "Left",
    "Left+Up",
    "Right+Up",
    "Right+Down",
    "Left+Down",
    "Select",
    "Start",
    "A",
    "B",
    "Turbo A",
    "Turbo B",
];

const CATEGORY: KeyCategory = KeyCategory {
    name: "Gamepad Controls",
    keys: &KEY_NAMES,
    base: SYSTEM_KEY_MAP_START,
};

const VCONTROLLER_KEYS: [(VControllerElement, KeyIndex); 12] = [
    (VControllerElement::Face(0), keys::B),
    (VControllerElement::Face(1), keys::A),
    (VControllerElement::Center(0), keys::SELECT),
    (VControllerElement::Center(1), keys::START),
    (VControllerElement::Dpad(0), keys::LEFT_UP),
    (VControllerElement::Dpad(1), keys::UP),
    (VControllerElement::Dpad(2), keys::RIGHT_UP),
    (VControllerElement::Dpad(3), keys::LEFT),
    (VControllerElement::Dpad(5), keys::RIGHT),
    (VControllerElement::Dpad(6), keys::LEFT_DOWN),
    (VControllerElement::Dpad(7), keys::DOWN),
    (VControllerElement::Dpad(8), keys::RIGHT_DOWN),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Nes;

impl EmuSystem for Nes {
    fn name(&self) -> &'static str {
        "NES"
    }

    fn key_category(&self) -> &KeyCategory {
        &CATEGORY
    }

    fn translate(&self, key: KeyIndex) -> Translation {
        let bits = match key {
            keys::UP => NesKeys::UP,
            keys::RIGHT => NesKeys::RIGHT,
            keys::DOWN => NesKeys::DOWN,
            keys::LEFT => NesKeys::LEFT,
            keys::LEFT_UP => NesKeys::UP | NesKeys::LEFT,
            keys::RIGHT_UP => NesKeys::UP | NesKeys::RIGHT,
            keys::RIGHT_DOWN => NesKeys::DOWN | NesKeys::RIGHT,
            keys::LEFT_DOWN => NesKeys::DOWN | NesKeys::LEFT,
            keys::SELECT => NesKeys::SELECT,
            keys::START => NesKeys::START,
            keys::A => NesKeys::A,
            keys::B => NesKeys::B,
            keys::A_TURBO => return Translation::turbo(NesKeys::A.bits()),
            keys::B_TURBO => return Translation::turbo(NesKeys::B.bits()),
            _ => panic!("NES logical key {} outside {:?}", key, CATEGORY.range()),
        };
        Translation::plain(bits.bits())
    }

    fn idle_register(&self) -> u32 {
        NesKeys::all().bits()
    }

    fn vcontroller_keys(&self) -> &'static [(VControllerElement, KeyIndex)] {
        &VCONTROLLER_KEYS
    }

    fn default_bindings(&self, class: DeviceClass) -> Vec<(ButtonCode, KeyIndex)> {
        match class {
            DeviceClass::Keyboard => vec![
                (keycode::ESCAPE, FrontendKey::OpenMenu.index()),
                (keycode::TAB, FrontendKey::ToggleFastForward.index()),
                (keycode::F2, FrontendKey::SaveState.index()),
                (keycode::F4, FrontendKey::LoadState.index()),
                (keycode::UP, keys::UP),
                (keycode::RIGHT, keys::RIGHT),
                (keycode::DOWN, keys::DOWN),
                (keycode::LEFT, keys::LEFT),
                (ascii_key(' '), keys::SELECT),
                (keycode::ENTER, keys::START),
                (ascii_key('x'), keys::A),
                (ascii_key('z'), keys::B),
                (ascii_key('s'), keys::A_TURBO),
                (ascii_key('a'), keys::B_TURBO),
            ],
            DeviceClass::Gamepad => vec![
                (gamepad::MODE, FrontendKey::OpenMenu.index()),
                (gamepad::DPAD_UP, keys::UP),
                (gamepad::DPAD_RIGHT, keys::RIGHT),
                (gamepad::DPAD_DOWN, keys::DOWN),
                (gamepad::DPAD_LEFT, keys::LEFT),
                (gamepad::SELECT, keys::SELECT),
                (gamepad::START, keys::START),
                (gamepad::EAST, keys::A),
                (gamepad::SOUTH, keys::B),
                (gamepad::NORTH, keys::A_TURBO),
                (gamepad::WEST, keys::B_TURBO),
            ],
            DeviceClass::Wiimote => vec![
                (wiimote::HOME, FrontendKey::OpenMenu.index()),
                (wiimote::UP, keys::UP),
                (wiimote::RIGHT, keys::RIGHT),
                (wiimote::DOWN, keys::DOWN),
                (wiimote::LEFT, keys::LEFT),
                (wiimote::MINUS, keys::SELECT),
                (wiimote::PLUS, keys::START),
                (wiimote::_2, keys::A),
                (wiimote::_1, keys::B),
            ],
            DeviceClass::ICade => vec![
                (icade::UP, keys::UP),
                (icade::RIGHT, keys::RIGHT),
                (icade::DOWN, keys::DOWN),
                (icade::LEFT, keys::LEFT),
                (icade::H, keys::SELECT),
                (icade::G, keys::START),
                (icade::A, keys::A),
                (icade::B, keys::B),
                (icade::C, keys::A_TURBO),
                (icade::D, keys::B_TURBO),
            ],
            DeviceClass::Ps3Pad => vec![
                (ps3::UP, keys::UP),
                (ps3::RIGHT, keys::RIGHT),
                (ps3::DOWN, keys::DOWN),
                (ps3::LEFT, keys::LEFT),
                (ps3::SELECT, keys::SELECT),
                (ps3::START, keys::START),
                (ps3::CIRCLE, keys::A),
                (ps3::CROSS, keys::B),
                (ps3::TRIANGLE, keys::A_TURBO),
                (ps3::SQUARE, keys::B_TURBO),
            ],
            _ => Vec::new(),
        }
    }
}
