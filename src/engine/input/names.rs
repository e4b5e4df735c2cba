// Human-readable button labels per device class

use super::codes::{
    gamepad, icade, icontrolpad, keycode, pointer, ps3, wiimote, zeemote, ButtonCode,
};
use super::config::ICadeNaming;
use super::device::DeviceClass;

/// Label for codes missing from a class table
pub const UNKNOWN: &str = "Unknown";

/// Printable ASCII, indexed from '!'
const PRINTABLE: &str = "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

const GAME_NUMBERED: [&str; 16] = [
    "G1", "G2", "G3", "G4", "G5", "G6", "G7", "G8", "G9", "G10", "G11", "G12", "G13", "G14",
    "G15", "G16",
];

/// Look up the label of a raw button code
///
/// Never fails: codes without an entry are reported as [`UNKNOWN`].
pub fn button_name(
    class: DeviceClass,
    code: ButtonCode,
    icade_naming: ICadeNaming,
) -> &'static str {
    match class {
        DeviceClass::Keyboard => key_name(code),
        DeviceClass::Gamepad => gamepad_name(code),
        DeviceClass::Wiimote => wiimote_name(code),
        DeviceClass::IControlPad => icp_name(code),
        DeviceClass::Zeemote => zeemote_name(code),
        DeviceClass::ICade => {
            let name = icade_name(code, icade_naming.icontrolpad_labels);
            if name == UNKNOWN && icade_naming.fallback_to_keyboard {
                // iCade devices are keyboards; unmapped keys keep their key names
                key_name(code)
            } else {
                name
            }
        }
        DeviceClass::Ps3Pad => ps3_name(code),
        DeviceClass::Pointer => pointer_name(code),
    }
}

fn key_name(code: ButtonCode) -> &'static str {
    match code {
        0 => "None",
        0x20 => "Space",
        0x21..=0x7E => {
            let i = (code - 0x21) as usize;
            &PRINTABLE[i..i + 1]
        }
        keycode::ESCAPE => "Escape",
        keycode::ENTER => "Enter",
        keycode::LALT => "Left Alt",
        keycode::RALT => "Right Alt",
        keycode::LSHIFT => "Left Shift",
        keycode::RSHIFT => "Right Shift",
        keycode::LCTRL => "Left Ctrl",
        keycode::RCTRL => "Right Ctrl",
        keycode::UP => "Up",
        keycode::RIGHT => "Right",
        keycode::DOWN => "Down",
        keycode::LEFT => "Left",
        keycode::BACK_SPACE => "Back Space",
        keycode::MENU => "Menu",
        keycode::HOME => "Home",
        keycode::END => "End",
        keycode::INSERT => "Insert",
        keycode::DELETE => "Delete",
        keycode::TAB => "Tab",
        keycode::SCROLL_LOCK => "Scroll Lock",
        keycode::CAPS => "Caps Lock",
        keycode::PAUSE => "Pause",
        keycode::LMETA => "Left Meta",
        keycode::RMETA => "Right Meta",
        keycode::PGUP => "Page Up",
        keycode::PGDOWN => "Page Down",
        keycode::SEARCH => "Search",
        keycode::F1 => "F1",
        keycode::F2 => "F2",
        keycode::F3 => "F3",
        keycode::F4 => "F4",
        keycode::F5 => "F5",
        keycode::F6 => "F6",
        keycode::F7 => "F7",
        keycode::F8 => "F8",
        keycode::F9 => "F9",
        keycode::F10 => "F10",
        keycode::F11 => "F11",
        keycode::F12 => "F12",
        keycode::CENTER => "Center",
        keycode::CAMERA => "Camera",
        keycode::CALL => "Call",
        keycode::END_CALL => "End Call",
        keycode::CLEAR => "Clear",
        keycode::SYMBOL => "Sym",
        keycode::EXPLORER => "Explorer",
        keycode::MAIL => "Mail",
        keycode::NUM => "Num",
        keycode::FUNCTION => "Function",
        keycode::VOL_UP => "Vol Up",
        keycode::VOL_DOWN => "Vol Down",
        keycode::FOCUS => "Focus",
        keycode::GAME_A => "A",
        keycode::GAME_B => "B",
        keycode::GAME_C => "C",
        keycode::GAME_X => "X",
        keycode::GAME_Y => "Y",
        keycode::GAME_Z => "Z",
        keycode::GAME_L1 => "L1",
        keycode::GAME_R1 => "R1",
        keycode::GAME_L2 => "L2",
        keycode::GAME_R2 => "R2",
        keycode::GAME_LEFT_THUMB => "L-Thumb",
        keycode::GAME_RIGHT_THUMB => "R-Thumb",
        keycode::GAME_START => "Start",
        keycode::GAME_SELECT => "Select",
        keycode::GAME_MODE => "Mode",
        keycode::GAME_1..=keycode::GAME_16 => GAME_NUMBERED[(code - keycode::GAME_1) as usize],
        keycode::JS1_XAXIS_POS => "X Axis+",
        keycode::JS1_XAXIS_NEG => "X Axis-",
        keycode::JS1_YAXIS_POS => "Y Axis+",
        keycode::JS1_YAXIS_NEG => "Y Axis-",
        keycode::JS2_XAXIS_POS => "X Axis+ 2",
        keycode::JS2_XAXIS_NEG => "X Axis- 2",
        keycode::JS2_YAXIS_POS => "Y Axis+ 2",
        keycode::JS2_YAXIS_NEG => "Y Axis- 2",
        keycode::JS3_XAXIS_POS => "X Axis+ 3",
        keycode::JS3_XAXIS_NEG => "X Axis- 3",
        keycode::JS3_YAXIS_POS => "Y Axis+ 3",
        keycode::JS3_YAXIS_NEG => "Y Axis- 3",
        keycode::JS_LTRIGGER_AXIS => "L Trigger",
        keycode::JS_RTRIGGER_AXIS => "R Trigger",
        _ => UNKNOWN,
    }
}

fn gamepad_name(code: ButtonCode) -> &'static str {
    match code {
        0 => "None",
        gamepad::SOUTH => "A",
        gamepad::EAST => "B",
        gamepad::NORTH => "Y",
        gamepad::WEST => "X",
        gamepad::L1 => "L1",
        gamepad::R1 => "R1",
        gamepad::L2 => "L2",
        gamepad::R2 => "R2",
        gamepad::SELECT => "Select",
        gamepad::START => "Start",
        gamepad::MODE => "Mode",
        gamepad::LEFT_THUMB => "L-Thumb",
        gamepad::RIGHT_THUMB => "R-Thumb",
        gamepad::DPAD_UP => "Up",
        gamepad::DPAD_RIGHT => "Right",
        gamepad::DPAD_DOWN => "Down",
        gamepad::DPAD_LEFT => "Left",
        gamepad::LSTICK_UP => "L:Up",
        gamepad::LSTICK_RIGHT => "L:Right",
        gamepad::LSTICK_DOWN => "L:Down",
        gamepad::LSTICK_LEFT => "L:Left",
        gamepad::RSTICK_UP => "R:Up",
        gamepad::RSTICK_RIGHT => "R:Right",
        gamepad::RSTICK_DOWN => "R:Down",
        gamepad::RSTICK_LEFT => "R:Left",
        _ => UNKNOWN,
    }
}

fn wiimote_name(code: ButtonCode) -> &'static str {
    match code {
        0 => "None",
        wiimote::_1 => "1",
        wiimote::_2 => "2",
        wiimote::A => "A",
        wiimote::B => "B",
        wiimote::PLUS => "+",
        wiimote::MINUS => "-",
        wiimote::HOME => "Home",
        wiimote::L => "L",
        wiimote::R => "R",
        wiimote::ZL => "ZL",
        wiimote::ZR => "ZR",
        wiimote::X => "X",
        wiimote::Y => "Y",
        wiimote::CC_LSTICK_LEFT => "L:Left",
        wiimote::CC_LSTICK_RIGHT => "L:Right",
        wiimote::CC_LSTICK_UP => "L:Up",
        wiimote::CC_LSTICK_DOWN => "L:Down",
        wiimote::CC_RSTICK_LEFT => "R:Left",
        wiimote::CC_RSTICK_RIGHT => "R:Right",
        wiimote::CC_RSTICK_UP => "R:Up",
        wiimote::CC_RSTICK_DOWN => "R:Down",
        wiimote::UP => "Up",
        wiimote::RIGHT => "Right",
        wiimote::DOWN => "Down",
        wiimote::LEFT => "Left",
        wiimote::NUN_C => "C",
        wiimote::NUN_Z => "Z",
        wiimote::NUN_STICK_LEFT => "N:Left",
        wiimote::NUN_STICK_RIGHT => "N:Right",
        wiimote::NUN_STICK_UP => "N:Up",
        wiimote::NUN_STICK_DOWN => "N:Down",
        _ => UNKNOWN,
    }
}

fn icp_name(code: ButtonCode) -> &'static str {
    match code {
        0 => "None",
        icontrolpad::A => "A",
        icontrolpad::B => "B",
        icontrolpad::X => "X",
        icontrolpad::Y => "Y",
        icontrolpad::L => "L",
        icontrolpad::R => "R",
        icontrolpad::START => "Start",
        icontrolpad::SELECT => "Select",
        icontrolpad::LNUB_LEFT => "L:Left",
        icontrolpad::LNUB_RIGHT => "L:Right",
        icontrolpad::LNUB_UP => "L:Up",
        icontrolpad::LNUB_DOWN => "L:Down",
        icontrolpad::RNUB_LEFT => "R:Left",
        icontrolpad::RNUB_RIGHT => "R:Right",
        icontrolpad::RNUB_UP => "R:Up",
        icontrolpad::RNUB_DOWN => "R:Down",
        icontrolpad::UP => "Up",
        icontrolpad::RIGHT => "Right",
        icontrolpad::DOWN => "Down",
        icontrolpad::LEFT => "Left",
        _ => UNKNOWN,
    }
}

fn zeemote_name(code: ButtonCode) -> &'static str {
    match code {
        0 => "None",
        zeemote::A => "A",
        zeemote::B => "B",
        zeemote::C => "C",
        zeemote::POWER => "Power",
        zeemote::UP => "Up",
        zeemote::RIGHT => "Right",
        zeemote::DOWN => "Down",
        zeemote::LEFT => "Left",
        _ => UNKNOWN,
    }
}

fn icade_name(code: ButtonCode, icontrolpad_labels: bool) -> &'static str {
    // Face buttons optionally show where they sit on an iControlPad in iCade mode
    let (plain, icp) = match code {
        0 => return "None",
        icade::UP => return "Up",
        icade::RIGHT => return "Right",
        icade::DOWN => return "Down",
        icade::LEFT => return "Left",
        icade::A => ("A", "A (iCP A)"),
        icade::B => ("B", "B (iCP B)"),
        icade::C => ("C", "C (iCP X)"),
        icade::D => ("D", "D (iCP Y)"),
        icade::E => ("E", "E (iCP R)"),
        icade::F => ("F", "F (iCP L)"),
        icade::G => ("G", "G (iCP Start)"),
        icade::H => ("H", "H (iCP Select)"),
        _ => return UNKNOWN,
    };
    if icontrolpad_labels {
        icp
    } else {
        plain
    }
}

fn ps3_name(code: ButtonCode) -> &'static str {
    match code {
        0 => "None",
        ps3::CROSS => "Cross",
        ps3::CIRCLE => "Circle",
        ps3::SQUARE => "Square",
        ps3::TRIANGLE => "Triangle",
        ps3::L1 => "L1",
        ps3::L2 => "L2",
        ps3::L3 => "L3",
        ps3::R1 => "R1",
        ps3::R2 => "R2",
        ps3::R3 => "R3",
        ps3::SELECT => "Select",
        ps3::START => "Start",
        ps3::UP => "Up",
        ps3::RIGHT => "Right",
        ps3::DOWN => "Down",
        ps3::LEFT => "Left",
        _ => UNKNOWN,
    }
}

fn pointer_name(code: ButtonCode) -> &'static str {
    match code {
        0 => "None",
        pointer::LEFT => "Left Click",
        pointer::MIDDLE => "Middle Click",
        pointer::RIGHT => "Right Click",
        pointer::BACK => "Back",
        pointer::FORWARD => "Forward",
        _ => UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::codes::ascii_key;

    const PLAIN: ICadeNaming = ICadeNaming {
        fallback_to_keyboard: true,
        icontrolpad_labels: false,
    };

    #[test]
    fn test_known_keys() {
        assert_eq!(button_name(DeviceClass::Keyboard, keycode::ENTER, PLAIN), "Enter");
        assert_eq!(button_name(DeviceClass::Keyboard, ascii_key(' '), PLAIN), "Space");
        assert_eq!(button_name(DeviceClass::Keyboard, ascii_key('q'), PLAIN), "q");
        assert_eq!(button_name(DeviceClass::Keyboard, ascii_key('~'), PLAIN), "~");
        assert_eq!(button_name(DeviceClass::Keyboard, keycode::GAME_1 + 11, PLAIN), "G12");
        assert_eq!(button_name(DeviceClass::Wiimote, wiimote::NUN_Z, PLAIN), "Z");
        assert_eq!(button_name(DeviceClass::Ps3Pad, ps3::TRIANGLE, PLAIN), "Triangle");
    }

    #[test]
    fn test_unknown_codes_degrade() {
        for class in DeviceClass::ALL {
            assert_eq!(button_name(class, 0xFFFF, PLAIN), UNKNOWN);
        }
        assert_eq!(button_name(DeviceClass::Zeemote, 0, PLAIN), "None");
    }

    #[test]
    fn test_every_table_entry_is_named() {
        for class in DeviceClass::ALL {
            for code in 1..0x300 {
                let first = button_name(class, code, PLAIN);
                assert!(!first.is_empty(), "{:?} {:#x}", class, code);
                assert_eq!(first, button_name(class, code, PLAIN));
            }
        }
    }

    #[test]
    fn test_icade_falls_back_to_keyboard_names() {
        assert_eq!(button_name(DeviceClass::ICade, icade::UP, PLAIN), "Up");
        assert_eq!(button_name(DeviceClass::ICade, icade::A, PLAIN), "A");
        // 'e' is the release code of iCade Up, not an iCade button itself
        assert_eq!(button_name(DeviceClass::ICade, ascii_key('e'), PLAIN), "e");
        assert_eq!(button_name(DeviceClass::ICade, keycode::F5, PLAIN), "F5");
    }

    #[test]
    fn test_icade_without_fallback() {
        let strict = ICadeNaming {
            fallback_to_keyboard: false,
            icontrolpad_labels: true,
        };
        assert_eq!(button_name(DeviceClass::ICade, icade::C, strict), "C (iCP X)");
        assert_eq!(button_name(DeviceClass::ICade, keycode::F5, strict), UNKNOWN);
    }
}
