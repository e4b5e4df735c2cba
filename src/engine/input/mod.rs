// Input handling system
//
// Normalizes keyboards, gamepads, Bluetooth pads, iCade controllers and
// pointers into one event model, classifies events against menu navigation
// roles, and translates bound buttons into emulated hardware bits.
//
// ## Architecture
//
// - `codes`: raw button code namespaces, one per device class
// - `device`: devices and the registry of connected ones
// - `event`: the uniform event record
// - `names`: button labels for configuration menus
// - `roles`: default confirm/cancel/direction/page roles
// - `icade`: iCade protocol decoding for keyboards in iCade mode
// - `pointer`: pointer coordinate transform
// - `config`: input settings
// - `bindings`: user bindings and their persisted form
// - `rebind`: the "press a button" capture flow
// - `manager`: main input manager coordinating everything
// - `platform`: winit event adapter
//
// ## Usage Example
//
// ```rust
// use emu_input::engine::input::{InputManager, InputSettings, Device, DeviceClass, Capabilities};
// use emu_input::engine::input::codes::keycode;
// use emu_input::engine::input::event::ActionKind;
// use emu_input::engine::system::SystemKind;
//
// let mut input = InputManager::new(SystemKind::Gba.create(), InputSettings::default());
// let keyboard = Device::new("Keyboard", DeviceClass::Keyboard, Capabilities::KEYBOARD);
// let kb = input.add_device(keyboard)?;
//
// // Route each platform event; the result says where it went
// let dispatch = input.button_event(kb, keycode::ENTER, ActionKind::Pushed);
//
// // Once per emulated frame
// input.end_frame();
// ```

pub mod bindings;
pub mod codes;
pub mod config;
pub mod device;
pub mod event;
pub mod icade;
pub mod manager;
pub mod names;
pub mod platform;
pub mod pointer;
pub mod rebind;
pub mod roles;

pub use bindings::{Binding, BindingSnapshot, BindingTable};
pub use config::{ICadeNaming, InputSettings};
pub use device::{
    Capabilities, Device, DeviceClass, DeviceId, DeviceMap, DeviceRegistry, DeviceSubtype,
};
pub use event::{ActionKind, Event};
pub use manager::{Dispatch, InputManager, InputMode};
pub use pointer::PointerModes;
pub use rebind::{PromptLayout, Rebinder, RebindOutcome, RebindState};
pub use roles::NavRole;

/// Recoverable input errors
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Device registry full ({0} devices)")]
    RegistryFull(usize),

    #[error("Unknown device: {0:?}")]
    UnknownDevice(DeviceId),

    #[error("iCade mode is not supported on {0} devices")]
    ICadeUnsupported(&'static str),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
