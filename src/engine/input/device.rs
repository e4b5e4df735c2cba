// Input devices and the registry tracking which ones are connected

use super::InputError;
use bitflags::bitflags;
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Default upper bound on simultaneously connected devices
pub const DEFAULT_MAX_DEVICES: usize = 16;

/// Stable identity of a registered device
///
/// Unlike the device index, an id never changes while the device stays
/// connected and is never reused for another device. Events refer to their
/// device through this handle and resolve it through the [`DeviceRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(pub(crate) u64);

impl DeviceId {
    /// Get the raw id value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

bitflags! {
    /// What kinds of input a device can produce
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u32 {
        const KEYBOARD = 0b0000_0001;
        const GAMEPAD = 0b0000_0010;
        const POINTER = 0b0000_0100;
        const TOUCH = 0b0000_1000;
        const JOYSTICK = 0b0001_0000;
    }
}

/// Closed set of hardware families, each with its own button code namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeviceClass {
    Keyboard,
    Gamepad,
    Wiimote,
    IControlPad,
    Zeemote,
    ICade,
    Ps3Pad,
    Pointer,
}

impl DeviceClass {
    pub const ALL: [DeviceClass; 8] = [
        DeviceClass::Keyboard,
        DeviceClass::Gamepad,
        DeviceClass::Wiimote,
        DeviceClass::IControlPad,
        DeviceClass::Zeemote,
        DeviceClass::ICade,
        DeviceClass::Ps3Pad,
        DeviceClass::Pointer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Keyboard => "Keyboard",
            Self::Gamepad => "Gamepad",
            Self::Wiimote => "Wiimote",
            Self::IControlPad => "iControlPad",
            Self::Zeemote => "Zeemote",
            Self::ICade => "iCade",
            Self::Ps3Pad => "PS3 Controller",
            Self::Pointer => "Pointer",
        }
    }
}

/// Finer distinction within a class that changes default button roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceSubtype {
    #[default]
    None,
    /// PS3 pad reporting through the keyboard namespace (Android HID)
    Ps3Controller,
}

/// The code namespace a device's events are interpreted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceMap {
    pub class: DeviceClass,
    pub subtype: DeviceSubtype,
}

impl DeviceMap {
    pub const fn new(class: DeviceClass) -> Self {
        Self {
            class,
            subtype: DeviceSubtype::None,
        }
    }

    pub const fn with_subtype(class: DeviceClass, subtype: DeviceSubtype) -> Self {
        Self { class, subtype }
    }
}

/// A connected input device
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    id: DeviceId,
    index: usize,
    name: String,
    capabilities: Capabilities,
    class: DeviceClass,
    subtype: DeviceSubtype,
    icade_mode: bool,
}

impl Device {
    /// Describe a device; id and index are assigned when it is registered
    pub fn new(name: impl Into<String>, class: DeviceClass, capabilities: Capabilities) -> Self {
        Self {
            id: DeviceId(0),
            index: 0,
            name: name.into(),
            capabilities,
            class,
            subtype: DeviceSubtype::None,
            icade_mode: false,
        }
    }

    pub fn with_subtype(mut self, subtype: DeviceSubtype) -> Self {
        self.subtype = subtype;
        self
    }

    pub fn id(&self) -> DeviceId {
        self.id
    }

    /// Dense position in the registry (0..count)
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Hardware class, ignoring iCade mode
    pub fn class(&self) -> DeviceClass {
        self.class
    }

    pub fn subtype(&self) -> DeviceSubtype {
        self.subtype
    }

    pub fn icade_mode(&self) -> bool {
        self.icade_mode
    }

    /// Namespace the device's codes are currently interpreted in
    ///
    /// A keyboard in iCade mode reports through the iCade map.
    pub fn map(&self) -> DeviceMap {
        if self.icade_mode {
            DeviceMap::new(DeviceClass::ICade)
        } else {
            DeviceMap::with_subtype(self.class, self.subtype)
        }
    }
}

/// Registry of connected devices
///
/// Indices stay dense: removing a device renumbers the survivors in their
/// original relative order.
#[derive(Debug)]
pub struct DeviceRegistry {
    devices: Vec<Device>,
    capacity: usize,
    next_id: u64,
}

impl DeviceRegistry {
    /// Create an empty registry holding at most `capacity` devices
    pub fn new(capacity: usize) -> Self {
        Self {
            devices: Vec::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    /// Register a device, assigning it the next index and a fresh id
    pub fn add_device(&mut self, mut device: Device) -> Result<DeviceId, InputError> {
        if self.devices.len() >= self.capacity {
            warn!(
                "Cannot add device {}: registry full ({} devices)",
                device.name, self.capacity
            );
            return Err(InputError::RegistryFull(self.capacity));
        }

        let id = DeviceId(self.next_id);
        self.next_id += 1;
        device.id = id;
        device.index = self.devices.len();

        info!(
            "Added {} device {} at index {}",
            device.class.name(),
            device.name,
            device.index
        );
        self.devices.push(device);
        Ok(id)
    }

    /// Remove a device by identity and renumber the rest
    pub fn remove_device(&mut self, id: DeviceId) -> Option<Device> {
        let pos = self.devices.iter().position(|d| d.id == id)?;
        let removed = self.devices.remove(pos);
        self.reindex();
        info!("Removed device {} (was index {})", removed.name, removed.index);
        Some(removed)
    }

    fn reindex(&mut self) {
        for (i, device) in self.devices.iter_mut().enumerate() {
            device.index = i;
        }
    }

    pub fn get(&self, id: DeviceId) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    pub fn by_index(&self, index: usize) -> Option<&Device> {
        self.devices.get(index)
    }

    pub fn contains(&self, id: DeviceId) -> bool {
        self.get(id).is_some()
    }

    /// Devices in index order
    pub fn iter(&self) -> impl Iterator<Item = &Device> {
        self.devices.iter()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if any connected device has one of the given capabilities
    pub fn any_with(&self, capabilities: Capabilities) -> bool {
        self.devices
            .iter()
            .any(|d| d.capabilities.intersects(capabilities))
    }

    /// Whether there is anything to show a key configuration menu for
    pub fn key_input_present(&self) -> bool {
        self.any_with(Capabilities::KEYBOARD | Capabilities::GAMEPAD)
    }

    /// Toggle iCade mode, only valid for keyboard-class devices
    pub fn set_icade_mode(&mut self, id: DeviceId, on: bool) -> Result<(), InputError> {
        let device = self
            .devices
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(InputError::UnknownDevice(id))?;

        if device.class != DeviceClass::Keyboard {
            warn!(
                "Tried to set iCade mode on {} device {}",
                device.class.name(),
                device.name
            );
            return Err(InputError::ICadeUnsupported(device.class.name()));
        }

        info!(
            "Set iCade mode {} for {}",
            if on { "on" } else { "off" },
            device.name
        );
        device.icade_mode = on;
        Ok(())
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEVICES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyboard(name: &str) -> Device {
        Device::new(name, DeviceClass::Keyboard, Capabilities::KEYBOARD)
    }

    fn indices(registry: &DeviceRegistry) -> Vec<(String, usize)> {
        registry
            .iter()
            .map(|d| (d.name().to_string(), d.index()))
            .collect()
    }

    #[test]
    fn test_add_assigns_sequential_indices() {
        let mut registry = DeviceRegistry::new(4);
        let a = registry.add_device(keyboard("a")).unwrap();
        let b = registry.add_device(keyboard("b")).unwrap();

        assert_ne!(a, b);
        assert_eq!(registry.get(a).unwrap().index(), 0);
        assert_eq!(registry.get(b).unwrap().index(), 1);
    }

    #[test]
    fn test_remove_reindexes_in_order() {
        let mut registry = DeviceRegistry::new(8);
        let ids: Vec<_> = ["a", "b", "c", "d"]
            .iter()
            .map(|n| registry.add_device(keyboard(n)).unwrap())
            .collect();

        let removed = registry.remove_device(ids[1]).unwrap();
        assert_eq!(removed.name(), "b");
        assert_eq!(
            indices(&registry),
            vec![("a".into(), 0), ("c".into(), 1), ("d".into(), 2)]
        );
        assert!(!registry.contains(ids[1]));
    }

    #[test]
    fn test_indices_stay_dense_across_churn() {
        let mut registry = DeviceRegistry::new(8);
        let mut live = Vec::new();
        for round in 0..5 {
            for n in 0..3 {
                live.push(registry.add_device(keyboard(&format!("{round}-{n}"))).unwrap());
            }
            let victim = live.remove(round % live.len());
            registry.remove_device(victim);

            let idx: Vec<usize> = registry.iter().map(|d| d.index()).collect();
            assert_eq!(idx, (0..registry.len()).collect::<Vec<_>>());
            let order: Vec<DeviceId> = registry.iter().map(|d| d.id()).collect();
            assert_eq!(order, live);

            while registry.len() > 5 {
                let victim = live.remove(0);
                registry.remove_device(victim);
            }
        }
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut registry = DeviceRegistry::new(2);
        let a = registry.add_device(keyboard("a")).unwrap();
        registry.remove_device(a);
        let b = registry.add_device(keyboard("b")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut registry = DeviceRegistry::new(1);
        registry.add_device(keyboard("a")).unwrap();
        let err = registry.add_device(keyboard("b")).unwrap_err();
        assert!(matches!(err, InputError::RegistryFull(1)));
    }

    #[test]
    fn test_remove_unknown_device() {
        let mut registry = DeviceRegistry::new(2);
        assert!(registry.remove_device(DeviceId(42)).is_none());
    }

    #[test]
    fn test_capability_queries() {
        let mut registry = DeviceRegistry::new(4);
        assert!(!registry.key_input_present());

        registry
            .add_device(Device::new("Mouse", DeviceClass::Pointer, Capabilities::POINTER))
            .unwrap();
        assert!(registry.any_with(Capabilities::POINTER));
        assert!(!registry.key_input_present());

        registry
            .add_device(Device::new("Pad", DeviceClass::Gamepad, Capabilities::GAMEPAD))
            .unwrap();
        assert!(registry.key_input_present());
    }

    #[test]
    fn test_icade_mode_changes_map() {
        let mut registry = DeviceRegistry::new(4);
        let kb = registry.add_device(keyboard("kb")).unwrap();

        assert_eq!(registry.get(kb).unwrap().map().class, DeviceClass::Keyboard);
        registry.set_icade_mode(kb, true).unwrap();
        assert_eq!(registry.get(kb).unwrap().map().class, DeviceClass::ICade);
        assert_eq!(registry.get(kb).unwrap().class(), DeviceClass::Keyboard);
    }

    #[test]
    fn test_icade_mode_rejected_for_non_keyboard() {
        let mut registry = DeviceRegistry::new(4);
        let wii = registry
            .add_device(Device::new("Wiimote", DeviceClass::Wiimote, Capabilities::GAMEPAD))
            .unwrap();

        assert!(matches!(
            registry.set_icade_mode(wii, true),
            Err(InputError::ICadeUnsupported(_))
        ));
        assert!(!registry.get(wii).unwrap().icade_mode());
    }

    #[test]
    fn test_subtype_carried_in_map() {
        let device = keyboard("pad").with_subtype(DeviceSubtype::Ps3Controller);
        assert_eq!(device.map().subtype, DeviceSubtype::Ps3Controller);
    }
}
