// Input settings: the explicit configuration context of the input core

use super::device::DEFAULT_MAX_DEVICES;
use super::pointer::PointerModes;
use super::InputError;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How iCade buttons are labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ICadeNaming {
    /// Name non-iCade keys with their keyboard labels instead of "Unknown"
    pub fallback_to_keyboard: bool,
    /// Show the iControlPad button each iCade button sits on, e.g. "C (iCP X)"
    pub icontrolpad_labels: bool,
}

impl Default for ICadeNaming {
    fn default() -> Self {
        Self {
            fallback_to_keyboard: true,
            icontrolpad_labels: false,
        }
    }
}

/// User-facing input options
///
/// Loaded once at startup and replaced wholesale when the user changes a
/// setting; nothing in the input core reads ambient globals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Exchange the confirm and cancel buttons in menus
    pub swapped_confirm: bool,

    /// Touch/mouse orientation
    pub pointer: PointerModes,

    pub icade: ICadeNaming,

    /// Frames between turbo toggles
    pub turbo_period_frames: u32,

    /// Maximum simultaneously connected devices
    pub max_devices: usize,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            swapped_confirm: false,
            pointer: PointerModes::default(),
            icade: ICadeNaming::default(),
            turbo_period_frames: 4,
            max_devices: DEFAULT_MAX_DEVICES,
        }
    }
}

impl InputSettings {
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, InputError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a file, falling back to defaults if it doesn't exist
    pub fn load(path: &Path) -> Result<Self, InputError> {
        if !path.exists() {
            info!("No input settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        info!("Loaded input settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), InputError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
