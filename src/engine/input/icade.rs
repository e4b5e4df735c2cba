// iCade protocol decoding
//
// An iCade controller is a keyboard that types one letter when a button goes
// down and a different letter when it comes back up. Only key presses carry
// meaning; the keyboard's own release events are noise.

use super::codes::{ascii_key, icade, ButtonCode};
use super::event::ActionKind;

/// (button, character typed on press, character typed on release)
const ICADE_KEYS: [(ButtonCode, char, char); 12] = [
    (icade::UP, 'w', 'e'),
    (icade::RIGHT, 'd', 'c'),
    (icade::DOWN, 'x', 'z'),
    (icade::LEFT, 'a', 'q'),
    (icade::A, 'y', 't'),
    (icade::B, 'h', 'r'),
    (icade::C, 'u', 'f'),
    (icade::D, 'j', 'n'),
    (icade::E, 'i', 'm'),
    (icade::F, 'k', 'p'),
    (icade::G, 'o', 'g'),
    (icade::H, 'l', 'v'),
];

/// Result of feeding one keyboard event through the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ICadeInput {
    /// The key encodes an iCade button transition
    Button(ButtonCode, ActionKind),
    /// The key belongs to the protocol but carries no transition
    Swallow,
    /// Not an iCade key; deliver it unchanged
    Passthrough,
}

/// Decode a raw keyboard event from a device in iCade mode
pub fn decode(code: ButtonCode, action: ActionKind) -> ICadeInput {
    let entry = ICADE_KEYS
        .iter()
        .find(|(_, down, up)| ascii_key(*down) == code || ascii_key(*up) == code);

    match (entry, action) {
        (None, _) => ICadeInput::Passthrough,
        (Some((button, down, _)), ActionKind::Pushed) => {
            if ascii_key(*down) == code {
                ICadeInput::Button(*button, ActionKind::Pushed)
            } else {
                ICadeInput::Button(*button, ActionKind::Released)
            }
        }
        (Some(_), _) => ICadeInput::Swallow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::codes::keycode;

    #[test]
    fn test_press_and_release_characters() {
        assert_eq!(
            decode(ascii_key('w'), ActionKind::Pushed),
            ICadeInput::Button(icade::UP, ActionKind::Pushed)
        );
        assert_eq!(
            decode(ascii_key('e'), ActionKind::Pushed),
            ICadeInput::Button(icade::UP, ActionKind::Released)
        );
        assert_eq!(
            decode(ascii_key('v'), ActionKind::Pushed),
            ICadeInput::Button(icade::H, ActionKind::Released)
        );
    }

    #[test]
    fn test_key_releases_are_swallowed() {
        assert_eq!(decode(ascii_key('w'), ActionKind::Released), ICadeInput::Swallow);
        assert_eq!(decode(ascii_key('e'), ActionKind::Released), ICadeInput::Swallow);
    }

    #[test]
    fn test_other_keys_pass_through() {
        assert_eq!(decode(keycode::ESCAPE, ActionKind::Pushed), ICadeInput::Passthrough);
        assert_eq!(decode(ascii_key('b'), ActionKind::Released), ICadeInput::Passthrough);
    }

    #[test]
    fn test_protocol_characters_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for (_, down, up) in ICADE_KEYS {
            assert!(seen.insert(down));
            assert!(seen.insert(up));
        }
    }
}
