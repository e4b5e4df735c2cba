// Uniform input event record

use super::codes::{ButtonCode, NONE};
use super::device::{Device, DeviceClass, DeviceId, DeviceMap};
use super::roles::{self, NavRole};
use glam::IVec2;

/// What happened to a button or pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Pushed,
    Released,
    Moved,
    MovedRelative,
    EnteredView,
    LeftView,
}

impl ActionKind {
    /// Human-readable name for logs and input test screens
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pushed => "Pushed",
            Self::Released => "Released",
            Self::Moved => "Moved",
            Self::MovedRelative => "Moved Relative",
            Self::EnteredView => "Entered View",
            Self::LeftView => "Left View",
        }
    }

    /// Pushed or released, as opposed to motion/focus changes
    pub fn is_button(&self) -> bool {
        matches!(self, Self::Pushed | Self::Released)
    }
}

/// A single input event from one device
///
/// `device` is a handle only: the device may be removed before the event is
/// processed, in which case lookups through the registry fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub device: DeviceId,
    pub map: DeviceMap,
    pub code: ButtonCode,
    pub action: ActionKind,
    /// Pointer position in transformed view space, zero for button events
    pub pos: IVec2,
}

impl Event {
    /// Button event interpreted in the device's current map
    pub fn button(device: &Device, code: ButtonCode, action: ActionKind) -> Self {
        Self::with_map(device.id(), device.map(), code, action)
    }

    /// Button event with an explicit map, used when a device's codes are
    /// re-interpreted (e.g. iCade decoding)
    pub fn with_map(
        device: DeviceId,
        map: DeviceMap,
        code: ButtonCode,
        action: ActionKind,
    ) -> Self {
        Self {
            device,
            map,
            code,
            action,
            pos: IVec2::ZERO,
        }
    }

    /// Pointer event; `pos` must already be transformed
    pub fn pointer(device: &Device, code: ButtonCode, action: ActionKind, pos: IVec2) -> Self {
        Self {
            device: device.id(),
            map: DeviceMap::new(DeviceClass::Pointer),
            code,
            action,
            pos,
        }
    }

    pub fn is_pushed(&self) -> bool {
        self.action == ActionKind::Pushed
    }

    pub fn is_released(&self) -> bool {
        self.action == ActionKind::Released
    }

    pub fn is_pointer(&self) -> bool {
        self.map.class == DeviceClass::Pointer
    }

    pub fn has_button(&self) -> bool {
        self.code != NONE
    }

    pub fn is_confirm(&self, swapped: bool) -> bool {
        roles::is_confirm(self.map, self.code, swapped)
    }

    pub fn is_cancel(&self, swapped: bool) -> bool {
        roles::is_cancel(self.map, self.code, swapped)
    }

    pub fn nav_role(&self, swapped: bool) -> Option<NavRole> {
        roles::classify(self.map, self.code, swapped)
    }
}
