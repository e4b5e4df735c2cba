// Game Boy Advance keypad

use super::{
    EmuSystem, FrontendKey, KeyCategory, KeyIndex, Translation, VControllerElement,
    SYSTEM_KEY_MAP_START,
};
use crate::engine::input::codes::{ascii_key, gamepad, icade, keycode, wiimote, ButtonCode};
use crate::engine::input::device::DeviceClass;
use bitflags::bitflags;

bitflags! {
    /// KEYINPUT register bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GbaKeys: u32 {
        const A = 1 << 0;
        const B = 1 << 1;
        const SELECT = 1 << 2;
        const START = 1 << 3;
        const RIGHT = 1 << 4;
        const LEFT = 1 << 5;
        const UP = 1 << 6;
        const DOWN = 1 << 7;
        const R = 1 << 8;
        const L = 1 << 9;
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
    pub const L: KeyIndex = UP + 12;
    pub const R: KeyIndex = UP + 13;
    pub const A_TURBO: KeyIndex = UP + 14;
    pub const B_TURBO: KeyIndex = UP + 15;
    pub const AB: KeyIndex = UP + 16;
    pub const RB: KeyIndex = UP + 17;
}

const KEY_NAMES: [&str; 18] = [
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
    "L",
    "R",
    "Turbo A",
    "Turbo B",
    "A+B",
    "R+B",
];

const CATEGORY: KeyCategory = KeyCategory {
    name: "Gamepad Controls",
    keys: &KEY_NAMES,
    base: SYSTEM_KEY_MAP_START,
};

const VCONTROLLER_KEYS: [(VControllerElement, KeyIndex); 14] = [
    (VControllerElement::Face(0), keys::A),
    (VControllerElement::Face(1), keys::B),
    (VControllerElement::Face(2), keys::L),
    (VControllerElement::Face(3), keys::R),
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
pub struct Gba;

impl EmuSystem for Gba {
    fn name(&self) -> &'static str {
        "Game Boy Advance"
    }

    fn key_category(&self) -> &KeyCategory {
        &CATEGORY
    }

    fn translate(&self, key: KeyIndex) -> Translation {
        let bits = match key {
            keys::UP => GbaKeys::UP,
            keys::RIGHT => GbaKeys::RIGHT,
            keys::DOWN => GbaKeys::DOWN,
            keys::LEFT => GbaKeys::LEFT,
            keys::LEFT_UP => GbaKeys::UP | GbaKeys::LEFT,
            keys::RIGHT_UP => GbaKeys::UP | GbaKeys::RIGHT,
            keys::RIGHT_DOWN => GbaKeys::DOWN | GbaKeys::RIGHT,
            keys::LEFT_DOWN => GbaKeys::DOWN | GbaKeys::LEFT,
            keys::SELECT => GbaKeys::SELECT,
            keys::START => GbaKeys::START,
            keys::A => GbaKeys::A,
            keys::B => GbaKeys::B,
            keys::L => GbaKeys::L,
            keys::R => GbaKeys::R,
            keys::A_TURBO => return Translation::turbo(GbaKeys::A.bits()),
            keys::B_TURBO => return Translation::turbo(GbaKeys::B.bits()),
            keys::AB => GbaKeys::A | GbaKeys::B,
            keys::RB => GbaKeys::R | GbaKeys::B,
            _ => panic!(
                "GBA logical key {} outside {:?}",
                key,
                CATEGORY.range()
            ),
        };
        Translation::plain(bits.bits())
    }

    fn idle_register(&self) -> u32 {
        GbaKeys::all().bits()
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
                (ascii_key('a'), keys::L),
                (ascii_key('s'), keys::R),
                (ascii_key('c'), keys::A_TURBO),
                (ascii_key('v'), keys::B_TURBO),
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
                (gamepad::L1, keys::L),
                (gamepad::R1, keys::R),
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
                (wiimote::L, keys::L),
                (wiimote::R, keys::R),
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
                (icade::F, keys::L),
                (icade::E, keys::R),
            ],
            _ => Vec::new(),
        }
    }
}
