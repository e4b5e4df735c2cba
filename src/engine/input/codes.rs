// Raw button code namespaces, one per device class
//
// Codes are opaque per class: the same integer means different buttons on a
// keyboard and on a Wiimote. `NONE` (0) is shared by every class.

/// Raw button code as delivered by the platform layer
pub type ButtonCode = u32;

/// "No button" in every namespace
pub const NONE: ButtonCode = 0;

/// Keyboard code for a printable ASCII character
pub const fn ascii_key(c: char) -> ButtonCode {
    c as ButtonCode
}

/// Keyboard keys outside the printable ASCII range
pub mod keycode {
    use super::ButtonCode;

    pub const ESCAPE: ButtonCode = 0x100;
    pub const ENTER: ButtonCode = 0x101;
    pub const LALT: ButtonCode = 0x102;
    pub const RALT: ButtonCode = 0x103;
    pub const LSHIFT: ButtonCode = 0x104;
    pub const RSHIFT: ButtonCode = 0x105;
    pub const LCTRL: ButtonCode = 0x106;
    pub const RCTRL: ButtonCode = 0x107;
    pub const UP: ButtonCode = 0x108;
    pub const RIGHT: ButtonCode = 0x109;
    pub const DOWN: ButtonCode = 0x10A;
    pub const LEFT: ButtonCode = 0x10B;
    pub const BACK_SPACE: ButtonCode = 0x10C;
    pub const MENU: ButtonCode = 0x10D;
    pub const HOME: ButtonCode = 0x10E;
    pub const END: ButtonCode = 0x10F;
    pub const INSERT: ButtonCode = 0x110;
    pub const DELETE: ButtonCode = 0x111;
    pub const TAB: ButtonCode = 0x112;
    pub const SCROLL_LOCK: ButtonCode = 0x113;
    pub const CAPS: ButtonCode = 0x114;
    pub const PAUSE: ButtonCode = 0x115;
    pub const LMETA: ButtonCode = 0x116;
    pub const RMETA: ButtonCode = 0x117;
    pub const PGUP: ButtonCode = 0x118;
    pub const PGDOWN: ButtonCode = 0x119;
    pub const SEARCH: ButtonCode = 0x11A;
    pub const F1: ButtonCode = 0x120;
    pub const F2: ButtonCode = 0x121;
    pub const F3: ButtonCode = 0x122;
    pub const F4: ButtonCode = 0x123;
    pub const F5: ButtonCode = 0x124;
    pub const F6: ButtonCode = 0x125;
    pub const F7: ButtonCode = 0x126;
    pub const F8: ButtonCode = 0x127;
    pub const F9: ButtonCode = 0x128;
    pub const F10: ButtonCode = 0x129;
    pub const F11: ButtonCode = 0x12A;
    pub const F12: ButtonCode = 0x12B;

    // Handset and gamepad keys reported through the keyboard namespace
    pub const CENTER: ButtonCode = 0x200;
    pub const CAMERA: ButtonCode = 0x201;
    pub const CALL: ButtonCode = 0x202;
    pub const END_CALL: ButtonCode = 0x203;
    pub const CLEAR: ButtonCode = 0x204;
    pub const SYMBOL: ButtonCode = 0x205;
    pub const EXPLORER: ButtonCode = 0x206;
    pub const MAIL: ButtonCode = 0x207;
    pub const NUM: ButtonCode = 0x208;
    pub const FUNCTION: ButtonCode = 0x209;
    pub const VOL_UP: ButtonCode = 0x20A;
    pub const VOL_DOWN: ButtonCode = 0x20B;
    pub const FOCUS: ButtonCode = 0x20C;

    pub const GAME_A: ButtonCode = 0x220;
    pub const GAME_B: ButtonCode = 0x221;
    pub const GAME_C: ButtonCode = 0x222;
    pub const GAME_X: ButtonCode = 0x223;
    pub const GAME_Y: ButtonCode = 0x224;
    pub const GAME_Z: ButtonCode = 0x225;
    pub const GAME_L1: ButtonCode = 0x226;
    pub const GAME_R1: ButtonCode = 0x227;
    pub const GAME_L2: ButtonCode = 0x228;
    pub const GAME_R2: ButtonCode = 0x229;
    pub const GAME_LEFT_THUMB: ButtonCode = 0x22A;
    pub const GAME_RIGHT_THUMB: ButtonCode = 0x22B;
    pub const GAME_START: ButtonCode = 0x22C;
    pub const GAME_SELECT: ButtonCode = 0x22D;
    pub const GAME_MODE: ButtonCode = 0x22E;
    /// First of the sixteen numbered game buttons (`GAME_1 + n - 1`)
    pub const GAME_1: ButtonCode = 0x230;
    pub const GAME_2: ButtonCode = GAME_1 + 1;
    pub const GAME_16: ButtonCode = GAME_1 + 15;

    pub const JS1_XAXIS_POS: ButtonCode = 0x250;
    pub const JS1_XAXIS_NEG: ButtonCode = 0x251;
    pub const JS1_YAXIS_POS: ButtonCode = 0x252;
    pub const JS1_YAXIS_NEG: ButtonCode = 0x253;
    pub const JS2_XAXIS_POS: ButtonCode = 0x254;
    pub const JS2_XAXIS_NEG: ButtonCode = 0x255;
    pub const JS2_YAXIS_POS: ButtonCode = 0x256;
    pub const JS2_YAXIS_NEG: ButtonCode = 0x257;
    pub const JS3_XAXIS_POS: ButtonCode = 0x258;
    pub const JS3_XAXIS_NEG: ButtonCode = 0x259;
    pub const JS3_YAXIS_POS: ButtonCode = 0x25A;
    pub const JS3_YAXIS_NEG: ButtonCode = 0x25B;
    pub const JS_LTRIGGER_AXIS: ButtonCode = 0x25C;
    pub const JS_RTRIGGER_AXIS: ButtonCode = 0x25D;
}

/// Generic gamepad buttons (positional face button naming)
pub mod gamepad {
    use super::ButtonCode;

    pub const SOUTH: ButtonCode = 1;
    pub const EAST: ButtonCode = 2;
    pub const NORTH: ButtonCode = 3;
    pub const WEST: ButtonCode = 4;
    pub const L1: ButtonCode = 5;
    pub const R1: ButtonCode = 6;
    pub const L2: ButtonCode = 7;
    pub const R2: ButtonCode = 8;
    pub const SELECT: ButtonCode = 9;
    pub const START: ButtonCode = 10;
    pub const MODE: ButtonCode = 11;
    pub const LEFT_THUMB: ButtonCode = 12;
    pub const RIGHT_THUMB: ButtonCode = 13;
    pub const DPAD_UP: ButtonCode = 14;
    pub const DPAD_RIGHT: ButtonCode = 15;
    pub const DPAD_DOWN: ButtonCode = 16;
    pub const DPAD_LEFT: ButtonCode = 17;
    pub const LSTICK_UP: ButtonCode = 18;
    pub const LSTICK_RIGHT: ButtonCode = 19;
    pub const LSTICK_DOWN: ButtonCode = 20;
    pub const LSTICK_LEFT: ButtonCode = 21;
    pub const RSTICK_UP: ButtonCode = 22;
    pub const RSTICK_RIGHT: ButtonCode = 23;
    pub const RSTICK_DOWN: ButtonCode = 24;
    pub const RSTICK_LEFT: ButtonCode = 25;
}

pub mod wiimote {
    use super::ButtonCode;

    pub const _1: ButtonCode = 1;
    pub const _2: ButtonCode = 2;
    pub const A: ButtonCode = 3;
    pub const B: ButtonCode = 4;
    pub const PLUS: ButtonCode = 5;
    pub const MINUS: ButtonCode = 6;
    pub const HOME: ButtonCode = 7;
    pub const L: ButtonCode = 8;
    pub const R: ButtonCode = 9;
    pub const ZL: ButtonCode = 10;
    pub const ZR: ButtonCode = 11;
    pub const X: ButtonCode = 12;
    pub const Y: ButtonCode = 13;
    pub const CC_LSTICK_LEFT: ButtonCode = 14;
    pub const CC_LSTICK_RIGHT: ButtonCode = 15;
    pub const CC_LSTICK_UP: ButtonCode = 16;
    pub const CC_LSTICK_DOWN: ButtonCode = 17;
    pub const CC_RSTICK_LEFT: ButtonCode = 18;
    pub const CC_RSTICK_RIGHT: ButtonCode = 19;
    pub const CC_RSTICK_UP: ButtonCode = 20;
    pub const CC_RSTICK_DOWN: ButtonCode = 21;
    pub const UP: ButtonCode = 22;
    pub const RIGHT: ButtonCode = 23;
    pub const DOWN: ButtonCode = 24;
    pub const LEFT: ButtonCode = 25;
    pub const NUN_C: ButtonCode = 26;
    pub const NUN_Z: ButtonCode = 27;
    pub const NUN_STICK_LEFT: ButtonCode = 28;
    pub const NUN_STICK_RIGHT: ButtonCode = 29;
    pub const NUN_STICK_UP: ButtonCode = 30;
    pub const NUN_STICK_DOWN: ButtonCode = 31;
}

pub mod icontrolpad {
    use super::ButtonCode;

    pub const A: ButtonCode = 1;
    pub const B: ButtonCode = 2;
    pub const X: ButtonCode = 3;
    pub const Y: ButtonCode = 4;
    pub const L: ButtonCode = 5;
    pub const R: ButtonCode = 6;
    pub const START: ButtonCode = 7;
    pub const SELECT: ButtonCode = 8;
    pub const LNUB_LEFT: ButtonCode = 9;
    pub const LNUB_RIGHT: ButtonCode = 10;
    pub const LNUB_UP: ButtonCode = 11;
    pub const LNUB_DOWN: ButtonCode = 12;
    pub const RNUB_LEFT: ButtonCode = 13;
    pub const RNUB_RIGHT: ButtonCode = 14;
    pub const RNUB_UP: ButtonCode = 15;
    pub const RNUB_DOWN: ButtonCode = 16;
    pub const UP: ButtonCode = 17;
    pub const RIGHT: ButtonCode = 18;
    pub const DOWN: ButtonCode = 19;
    pub const LEFT: ButtonCode = 20;
}

pub mod zeemote {
    use super::ButtonCode;

    pub const A: ButtonCode = 1;
    pub const B: ButtonCode = 2;
    pub const C: ButtonCode = 3;
    pub const POWER: ButtonCode = 4;
    pub const UP: ButtonCode = 5;
    pub const RIGHT: ButtonCode = 6;
    pub const DOWN: ButtonCode = 7;
    pub const LEFT: ButtonCode = 8;
}

/// iCade buttons, identified by the ASCII character sent when pressed
pub mod icade {
    use super::{ascii_key, ButtonCode};

    pub const UP: ButtonCode = ascii_key('w');
    pub const RIGHT: ButtonCode = ascii_key('d');
    pub const DOWN: ButtonCode = ascii_key('x');
    pub const LEFT: ButtonCode = ascii_key('a');
    pub const A: ButtonCode = ascii_key('y');
    pub const B: ButtonCode = ascii_key('h');
    pub const C: ButtonCode = ascii_key('u');
    pub const D: ButtonCode = ascii_key('j');
    pub const E: ButtonCode = ascii_key('i');
    pub const F: ButtonCode = ascii_key('k');
    pub const G: ButtonCode = ascii_key('o');
    pub const H: ButtonCode = ascii_key('l');
}

pub mod ps3 {
    use super::ButtonCode;

    pub const CROSS: ButtonCode = 1;
    pub const CIRCLE: ButtonCode = 2;
    pub const SQUARE: ButtonCode = 3;
    pub const TRIANGLE: ButtonCode = 4;
    pub const L1: ButtonCode = 5;
    pub const L2: ButtonCode = 6;
    pub const L3: ButtonCode = 7;
    pub const R1: ButtonCode = 8;
    pub const R2: ButtonCode = 9;
    pub const R3: ButtonCode = 10;
    pub const SELECT: ButtonCode = 11;
    pub const START: ButtonCode = 12;
    pub const UP: ButtonCode = 13;
    pub const RIGHT: ButtonCode = 14;
    pub const DOWN: ButtonCode = 15;
    pub const LEFT: ButtonCode = 16;
}

/// Mouse / touch buttons
pub mod pointer {
    use super::ButtonCode;

    pub const LEFT: ButtonCode = 1;
    pub const MIDDLE: ButtonCode = 2;
    pub const RIGHT: ButtonCode = 3;
    pub const BACK: ButtonCode = 4;
    pub const FORWARD: ButtonCode = 5;
}
