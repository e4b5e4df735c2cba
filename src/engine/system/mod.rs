// Emulated systems: logical keys and their translation to hardware bits
//
// Every system exposes a key category starting at `SYSTEM_KEY_MAP_START`.
// Indices below that are front-end keys shared by all systems.

mod gba;
mod nes;

pub use gba::Gba;
pub use nes::Nes;

use crate::engine::input::codes::ButtonCode;
use crate::engine::input::device::DeviceClass;
use crate::engine::input::event::ActionKind;
use std::collections::HashMap;
use std::ops::Range;

/// Index of a logical key, shared by front-end and system keys
pub type KeyIndex = usize;

/// Keys handled by the front-end itself rather than the emulated hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrontendKey {
    OpenMenu,
    ToggleFastForward,
    SaveState,
    LoadState,
    DecStateSlot,
    IncStateSlot,
    Screenshot,
    Exit,
}

impl FrontendKey {
    pub const ALL: [FrontendKey; 8] = [
        FrontendKey::OpenMenu,
        FrontendKey::ToggleFastForward,
        FrontendKey::SaveState,
        FrontendKey::LoadState,
        FrontendKey::DecStateSlot,
        FrontendKey::IncStateSlot,
        FrontendKey::Screenshot,
        FrontendKey::Exit,
    ];

    pub fn index(self) -> KeyIndex {
        self as KeyIndex
    }

    pub fn from_index(index: KeyIndex) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::OpenMenu => "Open Menu",
            Self::ToggleFastForward => "Toggle Fast-forward",
            Self::SaveState => "Save State",
            Self::LoadState => "Load State",
            Self::DecStateSlot => "Decrement State Slot",
            Self::IncStateSlot => "Increment State Slot",
            Self::Screenshot => "Game Screenshot",
            Self::Exit => "Exit to Menu",
        }
    }
}

/// First logical key index owned by the emulated system
pub const SYSTEM_KEY_MAP_START: KeyIndex = FrontendKey::ALL.len();

/// Ordered, named logical keys of one system
#[derive(Debug, Clone, Copy)]
pub struct KeyCategory {
    pub name: &'static str,
    pub keys: &'static [&'static str],
    pub base: KeyIndex,
}

impl KeyCategory {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn range(&self) -> Range<KeyIndex> {
        self.base..self.base + self.keys.len()
    }

    pub fn contains(&self, key: KeyIndex) -> bool {
        self.range().contains(&key)
    }

    pub fn key_name(&self, key: KeyIndex) -> Option<&'static str> {
        key.checked_sub(self.base)
            .and_then(|i| self.keys.get(i))
            .copied()
    }
}

/// Name of any logical key, front-end or system
pub fn logical_key_name(system: &dyn EmuSystem, key: KeyIndex) -> Option<&'static str> {
    FrontendKey::from_index(key)
        .map(FrontendKey::name)
        .or_else(|| system.key_category().key_name(key))
}

/// Hardware bits for one logical key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub mask: u32,
    /// The key auto-fires while held; toggling is the frame loop's job
    pub turbo: bool,
}

impl Translation {
    pub const fn plain(mask: u32) -> Self {
        Self { mask, turbo: false }
    }

    pub const fn turbo(mask: u32) -> Self {
        Self { mask, turbo: true }
    }
}

/// On-screen touch controller element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VControllerElement {
    /// Face button, numbered from 0
    Face(u8),
    /// Center button (select/start row), numbered from 0
    Center(u8),
    /// D-pad cell in a 3x3 grid, row-major, 4 is the dead center
    Dpad(u8),
}

/// Touch controller element to hardware bits
pub type VControllerMap = HashMap<VControllerElement, u32>;

/// An emulated system's input side
pub trait EmuSystem {
    fn name(&self) -> &'static str;

    fn key_category(&self) -> &KeyCategory;

    /// Hardware bits of a system logical key
    ///
    /// # Panics
    ///
    /// If `key` is outside the system's key category. Logical keys only come
    /// from that category, so this is a caller bug.
    fn translate(&self, key: KeyIndex) -> Translation;

    /// Register value with nothing pressed
    fn idle_register(&self) -> u32;

    /// Logical key behind each touch controller element
    fn vcontroller_keys(&self) -> &'static [(VControllerElement, KeyIndex)];

    /// Out-of-the-box bindings for a device class
    fn default_bindings(&self, class: DeviceClass) -> Vec<(ButtonCode, KeyIndex)>;

    /// Build the touch controller map through `translate`, so touch and
    /// physical keys always agree
    fn vcontroller_map(&self) -> VControllerMap {
        self.vcontroller_keys()
            .iter()
            .map(|(elem, key)| (*elem, self.translate(*key).mask))
            .collect()
    }

    fn vcontroller_action(&self, elem: VControllerElement) -> Option<u32> {
        self.vcontroller_keys()
            .iter()
            .find(|(e, _)| *e == elem)
            .map(|(_, key)| self.translate(*key).mask)
    }
}

/// Which system to create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemKind {
    Gba,
    Nes,
}

impl SystemKind {
    pub fn create(self) -> Box<dyn EmuSystem> {
        match self {
            Self::Gba => Box::new(Gba),
            Self::Nes => Box::new(Nes),
        }
    }
}

/// Emulated input register, active-low: a pressed button reads as 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputRegister {
    bits: u32,
    idle: u32,
}

impl InputRegister {
    pub fn new(idle: u32) -> Self {
        Self { bits: idle, idle }
    }

    /// Apply a button transition to the bits in `mask`
    ///
    /// Only pushes and releases touch the register.
    pub fn apply(&mut self, action: ActionKind, mask: u32) {
        match action {
            ActionKind::Pushed => self.bits &= !mask,
            ActionKind::Released => self.bits |= mask,
            _ => {}
        }
    }

    /// Release everything
    pub fn clear(&mut self) {
        self.bits = self.idle;
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// All bits of `mask` currently pressed
    pub fn is_pressed(&self, mask: u32) -> bool {
        self.bits & mask == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_is_active_low() {
        let mut reg = InputRegister::new(0x03FF);
        reg.apply(ActionKind::Pushed, 0x01);
        assert_eq!(reg.bits() & 0x01, 0);
        assert!(reg.is_pressed(0x01));

        reg.apply(ActionKind::Released, 0x01);
        assert_eq!(reg.bits() & 0x01, 0x01);
        assert_eq!(reg.bits(), 0x03FF);
    }

    #[test]
    fn test_register_ignores_motion() {
        let mut reg = InputRegister::new(0xFF);
        reg.apply(ActionKind::Moved, 0xFF);
        reg.apply(ActionKind::EnteredView, 0xFF);
        assert_eq!(reg.bits(), 0xFF);
    }

    #[test]
    fn test_register_clear() {
        let mut reg = InputRegister::new(0xFF);
        reg.apply(ActionKind::Pushed, 0x0F);
        reg.clear();
        assert_eq!(reg.bits(), 0xFF);
    }

    #[test]
    fn test_frontend_key_indices() {
        for (i, key) in FrontendKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
            assert_eq!(FrontendKey::from_index(i), Some(*key));
        }
        assert_eq!(FrontendKey::from_index(SYSTEM_KEY_MAP_START), None);
    }

    #[test]
    fn test_logical_key_names() {
        let gba = Gba;
        assert_eq!(logical_key_name(&gba, 0), Some("Open Menu"));
        assert_eq!(logical_key_name(&gba, SYSTEM_KEY_MAP_START), Some("Up"));
        assert_eq!(logical_key_name(&gba, 1000), None);
    }

    #[test]
    fn test_vcontroller_matches_translation() {
        for kind in [SystemKind::Gba, SystemKind::Nes] {
            let system = kind.create();
            let map = system.vcontroller_map();
            for (elem, key) in system.vcontroller_keys() {
                assert_eq!(map[elem], system.translate(*key).mask);
                assert_eq!(system.vcontroller_action(*elem), Some(map[elem]));
            }
            assert_eq!(system.vcontroller_action(VControllerElement::Dpad(4)), None);
        }
    }

    #[test]
    fn test_default_bindings_stay_in_range() {
        for kind in [SystemKind::Gba, SystemKind::Nes] {
            let system = kind.create();
            let end = system.key_category().range().end;
            for class in DeviceClass::ALL {
                for (_, key) in system.default_bindings(class) {
                    assert!(key < end, "{} {:?} key {}", system.name(), class, key);
                }
            }
        }
    }
}
