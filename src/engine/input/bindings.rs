// User button bindings and their persisted form

use super::codes::ButtonCode;
use super::device::DeviceClass;
use super::InputError;
use crate::engine::system::KeyIndex;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One (device class, raw code) -> logical key association
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Binding {
    pub class: DeviceClass,
    pub code: ButtonCode,
    pub key: KeyIndex,
}

/// Serializable set of bindings for one emulated system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingSnapshot {
    pub system: String,
    pub bindings: Vec<Binding>,
}

impl BindingSnapshot {
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, InputError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), InputError> {
        std::fs::write(path, self.to_json()?)?;
        info!("Saved {} bindings to {}", self.bindings.len(), path.display());
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, InputError> {
        let json = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json(&json)?;
        info!(
            "Loaded {} bindings for {} from {}",
            snapshot.bindings.len(),
            snapshot.system,
            path.display()
        );
        Ok(snapshot)
    }
}

/// Binding table keyed by device class
///
/// Each (class, code) pair maps to at most one key, and each key has at most
/// one code per class. Binding either side again replaces the old entry.
#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    by_code: HashMap<(DeviceClass, ButtonCode), KeyIndex>,

    /// Reverse mapping for lookups from the configuration menu
    by_key: HashMap<(DeviceClass, KeyIndex), ButtonCode>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from a list of bindings
    pub fn from_bindings(bindings: impl IntoIterator<Item = Binding>) -> Self {
        let mut table = Self::new();
        for b in bindings {
            table.bind(b.class, b.code, b.key);
        }
        table
    }

    /// Bind a code to a key, dropping whatever either was bound to before
    pub fn bind(&mut self, class: DeviceClass, code: ButtonCode, key: KeyIndex) {
        self.unbind_code(class, code);
        self.unbind_key(class, key);

        self.by_code.insert((class, code), key);
        self.by_key.insert((class, key), code);
    }

    /// Store contract used when restoring persisted bindings
    pub fn set_binding(&mut self, class: DeviceClass, code: ButtonCode, key: KeyIndex) {
        self.bind(class, code, key);
    }

    /// Remove the binding of a code, returning the key it was bound to
    pub fn unbind_code(&mut self, class: DeviceClass, code: ButtonCode) -> Option<KeyIndex> {
        let key = self.by_code.remove(&(class, code))?;
        self.by_key.remove(&(class, key));
        Some(key)
    }

    /// Remove the binding of a key, returning the code it was bound to
    pub fn unbind_key(&mut self, class: DeviceClass, key: KeyIndex) -> Option<ButtonCode> {
        let code = self.by_key.remove(&(class, key))?;
        self.by_code.remove(&(class, code));
        Some(code)
    }

    pub fn get_key(&self, class: DeviceClass, code: ButtonCode) -> Option<KeyIndex> {
        self.by_code.get(&(class, code)).copied()
    }

    pub fn get_code(&self, class: DeviceClass, key: KeyIndex) -> Option<ButtonCode> {
        self.by_key.get(&(class, key)).copied()
    }

    pub fn is_bound(&self, class: DeviceClass, code: ButtonCode) -> bool {
        self.by_code.contains_key(&(class, code))
    }

    /// Remove every binding of a class, returning how many were removed
    pub fn clear_class(&mut self, class: DeviceClass) -> usize {
        let before = self.by_code.len();
        self.by_code.retain(|(c, _), _| *c != class);
        self.by_key.retain(|(c, _), _| *c != class);
        let removed = before - self.by_code.len();
        debug!("Cleared {} {} bindings", removed, class.name());
        removed
    }

    pub fn clear(&mut self) {
        self.by_code.clear();
        self.by_key.clear();
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// Visit every binding, in no particular order
    pub fn for_each_binding(&self, mut visit: impl FnMut(Binding)) {
        for (&(class, code), &key) in &self.by_code {
            visit(Binding { class, code, key });
        }
    }

    /// All bindings, sorted by class then code
    pub fn bindings(&self) -> Vec<Binding> {
        let mut out = Vec::with_capacity(self.len());
        self.for_each_binding(|b| out.push(b));
        out.sort();
        out
    }

    /// Replace a class's bindings with the given defaults
    pub fn reset_to_defaults(&mut self, class: DeviceClass, defaults: &[(ButtonCode, KeyIndex)]) {
        self.clear_class(class);
        for &(code, key) in defaults {
            self.bind(class, code, key);
        }
    }

    pub fn snapshot(&self, system: &str) -> BindingSnapshot {
        BindingSnapshot {
            system: system.to_string(),
            bindings: self.bindings(),
        }
    }

    /// Replace the table's contents with a snapshot's bindings
    pub fn restore(&mut self, snapshot: &BindingSnapshot) {
        self.clear();
        for b in &snapshot.bindings {
            self.set_binding(b.class, b.code, b.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::codes::{ascii_key, gamepad, keycode};

    #[test]
    fn test_bind_and_lookup() {
        let mut table = BindingTable::new();
        table.bind(DeviceClass::Keyboard, keycode::ENTER, 9);

        assert_eq!(table.get_key(DeviceClass::Keyboard, keycode::ENTER), Some(9));
        assert_eq!(table.get_code(DeviceClass::Keyboard, 9), Some(keycode::ENTER));
        assert!(table.is_bound(DeviceClass::Keyboard, keycode::ENTER));
        assert!(!table.is_bound(DeviceClass::Gamepad, keycode::ENTER));
    }

    #[test]
    fn test_rebinding_code_replaces_key() {
        let mut table = BindingTable::new();
        table.bind(DeviceClass::Keyboard, ascii_key('x'), 10);
        table.bind(DeviceClass::Keyboard, ascii_key('x'), 11);

        assert_eq!(table.get_key(DeviceClass::Keyboard, ascii_key('x')), Some(11));
        assert_eq!(table.get_code(DeviceClass::Keyboard, 10), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_rebinding_key_replaces_code() {
        let mut table = BindingTable::new();
        table.bind(DeviceClass::Keyboard, ascii_key('x'), 10);
        table.bind(DeviceClass::Keyboard, ascii_key('z'), 10);

        assert_eq!(table.get_code(DeviceClass::Keyboard, 10), Some(ascii_key('z')));
        assert!(!table.is_bound(DeviceClass::Keyboard, ascii_key('x')));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_classes_are_independent() {
        let mut table = BindingTable::new();
        table.bind(DeviceClass::Keyboard, 1, 10);
        table.bind(DeviceClass::Gamepad, 1, 11);

        assert_eq!(table.get_key(DeviceClass::Keyboard, 1), Some(10));
        assert_eq!(table.get_key(DeviceClass::Gamepad, 1), Some(11));
    }

    #[test]
    fn test_unbind() {
        let mut table = BindingTable::new();
        table.bind(DeviceClass::Gamepad, gamepad::SOUTH, 19);

        assert_eq!(table.unbind_key(DeviceClass::Gamepad, 19), Some(gamepad::SOUTH));
        assert!(table.is_empty());
        assert_eq!(table.unbind_code(DeviceClass::Gamepad, gamepad::SOUTH), None);
    }

    #[test]
    fn test_clear_class() {
        let mut table = BindingTable::new();
        table.bind(DeviceClass::Keyboard, 1, 10);
        table.bind(DeviceClass::Keyboard, 2, 11);
        table.bind(DeviceClass::Gamepad, 1, 10);

        assert_eq!(table.clear_class(DeviceClass::Keyboard), 2);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get_code(DeviceClass::Keyboard, 10), None);
        assert_eq!(table.get_key(DeviceClass::Gamepad, 1), Some(10));
    }

    #[test]
    fn test_reset_to_defaults_only_touches_class() {
        let mut table = BindingTable::new();
        table.bind(DeviceClass::Keyboard, 99, 12);
        table.bind(DeviceClass::Gamepad, 5, 13);

        table.reset_to_defaults(DeviceClass::Keyboard, &[(1, 10), (2, 11)]);
        assert_eq!(
            table.bindings(),
            vec![
                Binding { class: DeviceClass::Keyboard, code: 1, key: 10 },
                Binding { class: DeviceClass::Keyboard, code: 2, key: 11 },
                Binding { class: DeviceClass::Gamepad, code: 5, key: 13 },
            ]
        );
    }

    #[test]
    fn test_for_each_binding_visits_everything() {
        let table = BindingTable::from_bindings([
            Binding { class: DeviceClass::Wiimote, code: 3, key: 8 },
            Binding { class: DeviceClass::ICade, code: ascii_key('y'), key: 9 },
        ]);
        let mut count = 0;
        table.for_each_binding(|b| {
            assert_eq!(table.get_key(b.class, b.code), Some(b.key));
            count += 1;
        });
        assert_eq!(count, 2);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut table = BindingTable::new();
        table.bind(DeviceClass::Keyboard, keycode::ENTER, 9);
        table.bind(DeviceClass::Ps3Pad, 1, 18);

        let json = table.snapshot("Game Boy Advance").to_json().unwrap();
        let snapshot = BindingSnapshot::from_json(&json).unwrap();
        assert_eq!(snapshot.system, "Game Boy Advance");

        let mut restored = BindingTable::new();
        restored.bind(DeviceClass::Zeemote, 1, 8);
        restored.restore(&snapshot);
        assert_eq!(restored.bindings(), table.bindings());
    }

    #[test]
    fn test_snapshot_rejects_bad_json() {
        assert!(matches!(
            BindingSnapshot::from_json(r#"{ "system": "NES" }"#),
            Err(InputError::Json(_))
        ));
    }
}
