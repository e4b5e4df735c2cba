// Input manager - routes device events to menus, the rebinding flow, or the
// emulated controller

use super::bindings::{BindingSnapshot, BindingTable};
use super::codes::ButtonCode;
use super::config::InputSettings;
use super::device::{Device, DeviceClass, DeviceId, DeviceMap, DeviceRegistry};
use super::event::{ActionKind, Event};
use super::icade::{self, ICadeInput};
use super::names;
use super::pointer;
use super::rebind::{PromptLayout, RebindOutcome, Rebinder};
use super::roles::NavRole;
use super::InputError;
use crate::engine::system::{
    logical_key_name, EmuSystem, FrontendKey, InputRegister, KeyIndex, VControllerElement,
};
use crate::engine::turbo::TurboDriver;
use glam::{IVec2, UVec2, Vec2};
use log::{debug, info, warn};

/// Who button events are meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Buttons drive menu navigation roles
    Menu,
    /// Buttons go through the binding table to the emulated system
    Gameplay,
}

/// Where an event ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Rebind(RebindOutcome),
    Navigate(NavRole),
    Frontend { key: FrontendKey, action: ActionKind },
    /// Bits applied to the emulated register
    Emulated { mask: u32, turbo: bool, action: ActionKind },
    /// Pointer activity in view coordinates
    Pointer { pos: IVec2, action: ActionKind },
    Ignored,
}

/// Main input manager owning devices, bindings and the emulated register
pub struct InputManager {
    settings: InputSettings,
    registry: DeviceRegistry,
    bindings: BindingTable,
    rebinder: Rebinder,
    system: Box<dyn EmuSystem>,
    register: InputRegister,
    turbo: TurboDriver,
    mode: InputMode,
    /// View size for pointer transforms
    view: UVec2,
}

impl InputManager {
    /// Create a manager for one emulated system with default bindings
    pub fn new(system: Box<dyn EmuSystem>, settings: InputSettings) -> Self {
        let mut bindings = BindingTable::new();
        for class in DeviceClass::ALL {
            bindings.reset_to_defaults(class, &system.default_bindings(class));
        }
        info!(
            "Input manager for {} with {} default bindings",
            system.name(),
            bindings.len()
        );

        Self {
            registry: DeviceRegistry::new(settings.max_devices),
            register: InputRegister::new(system.idle_register()),
            turbo: TurboDriver::new(settings.turbo_period_frames),
            settings,
            bindings,
            rebinder: Rebinder::new(),
            system,
            mode: InputMode::Menu,
            view: UVec2::ZERO,
        }
    }

    /// Replace the settings; the registry capacity is fixed at creation
    pub fn apply_settings(&mut self, settings: InputSettings) {
        self.turbo.set_period(settings.turbo_period_frames);
        if settings.max_devices != self.registry.capacity() {
            debug!("max_devices change takes effect on restart");
        }
        self.settings = settings;
    }

    pub fn settings(&self) -> &InputSettings {
        &self.settings
    }

    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut BindingTable {
        &mut self.bindings
    }

    pub fn rebinder(&self) -> &Rebinder {
        &self.rebinder
    }

    pub fn system(&self) -> &dyn EmuSystem {
        self.system.as_ref()
    }

    /// Current emulated register value
    pub fn register(&self) -> u32 {
        self.register.bits()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Switch between menus and gameplay, releasing everything held
    pub fn set_mode(&mut self, mode: InputMode) {
        if self.mode != mode {
            debug!("Input mode {:?} -> {:?}", self.mode, mode);
            self.clear_input();
            self.mode = mode;
        }
    }

    pub fn set_view_size(&mut self, view: UVec2) {
        self.view = view;
    }

    pub fn view_size(&self) -> UVec2 {
        self.view
    }

    /// View position scaled to 0..1, for touch and light-gun input
    pub fn normalized_pointer(&self, pos: IVec2) -> Vec2 {
        pointer::normalized(pos, self.view)
    }

    pub fn set_prompt_layout(&mut self, layout: PromptLayout) {
        self.rebinder.set_prompt_layout(layout);
    }

    pub fn add_device(&mut self, device: Device) -> Result<DeviceId, InputError> {
        self.registry.add_device(device)
    }

    /// Disconnect a device, abandoning any rebinding flow aimed at it
    pub fn remove_device(&mut self, id: DeviceId) -> Option<RebindOutcome> {
        self.registry.remove_device(id)?;
        self.rebinder.on_device_removed(id)
    }

    pub fn set_icade_mode(&mut self, id: DeviceId, on: bool) -> Result<(), InputError> {
        self.registry.set_icade_mode(id, on)
    }

    pub fn key_input_present(&self) -> bool {
        self.registry.key_input_present()
    }

    /// Label of a raw code under the current iCade naming policy
    pub fn button_name(&self, class: DeviceClass, code: ButtonCode) -> &'static str {
        names::button_name(class, code, self.settings.icade)
    }

    /// Label of the button a device has bound to a logical key, if any
    pub fn bound_button_name(&self, id: DeviceId, key: KeyIndex) -> Option<&'static str> {
        let class = self.registry.get(id)?.map().class;
        let code = self.bindings.get_code(class, key)?;
        Some(self.button_name(class, code))
    }

    pub fn key_name(&self, key: KeyIndex) -> Option<&'static str> {
        logical_key_name(self.system.as_ref(), key)
    }

    /// Feed a raw button transition from the platform
    pub fn button_event(&mut self, id: DeviceId, code: ButtonCode, action: ActionKind) -> Dispatch {
        let Some(device) = self.registry.get(id) else {
            warn!("Button event from unknown device {:?}", id);
            return Dispatch::Ignored;
        };

        let event = if device.icade_mode() {
            match icade::decode(code, action) {
                ICadeInput::Button(button, action) => {
                    Event::with_map(id, DeviceMap::new(DeviceClass::ICade), button, action)
                }
                ICadeInput::Swallow => return Dispatch::Ignored,
                // Non-iCade keys still report through the iCade map
                ICadeInput::Passthrough => Event::button(device, code, action),
            }
        } else {
            Event::button(device, code, action)
        };

        self.handle_event(&event)
    }

    /// Feed a pointer event with raw panel coordinates
    pub fn pointer_event(
        &mut self,
        id: DeviceId,
        code: ButtonCode,
        action: ActionKind,
        raw: IVec2,
    ) -> Dispatch {
        let Some(device) = self.registry.get(id) else {
            warn!("Pointer event from unknown device {:?}", id);
            return Dispatch::Ignored;
        };

        let pos = self.settings.pointer.transform(raw, self.view);
        let event = Event::pointer(device, code, action, pos);
        self.handle_event(&event)
    }

    /// Route a normalized event
    pub fn handle_event(&mut self, event: &Event) -> Dispatch {
        let swapped = self.settings.swapped_confirm;
        if let Some(outcome) =
            self.rebinder
                .handle_event(event, &self.registry, &mut self.bindings, swapped)
        {
            return Dispatch::Rebind(outcome);
        }

        match self.mode {
            InputMode::Menu => {
                if event.is_pushed() {
                    if let Some(role) = event.nav_role(swapped) {
                        return Dispatch::Navigate(role);
                    }
                }
                if event.is_pointer() {
                    Dispatch::Pointer {
                        pos: event.pos,
                        action: event.action,
                    }
                } else {
                    Dispatch::Ignored
                }
            }
            InputMode::Gameplay => {
                if event.action.is_button() {
                    if let Some(key) = self.bindings.get_key(event.map.class, event.code) {
                        return self.apply_key(key, event.action);
                    }
                }
                if event.is_pointer() {
                    Dispatch::Pointer {
                        pos: event.pos,
                        action: event.action,
                    }
                } else {
                    Dispatch::Ignored
                }
            }
        }
    }

    fn apply_key(&mut self, key: KeyIndex, action: ActionKind) -> Dispatch {
        if let Some(frontend) = FrontendKey::from_index(key) {
            return Dispatch::Frontend {
                key: frontend,
                action,
            };
        }

        let t = self.system.translate(key);
        if t.turbo {
            match action {
                ActionKind::Pushed => self.turbo.press(t.mask),
                ActionKind::Released => self.turbo.release(t.mask),
                _ => {}
            }
        }
        self.register.apply(action, t.mask);
        Dispatch::Emulated {
            mask: t.mask,
            turbo: t.turbo,
            action,
        }
    }

    /// Touch controller element pressed or released
    pub fn vcontroller_event(&mut self, elem: VControllerElement, action: ActionKind) -> Dispatch {
        if self.mode != InputMode::Gameplay {
            return Dispatch::Ignored;
        }
        match self.system.vcontroller_action(elem) {
            Some(mask) => {
                self.register.apply(action, mask);
                Dispatch::Emulated {
                    mask,
                    turbo: false,
                    action,
                }
            }
            None => Dispatch::Ignored,
        }
    }

    /// Call once per emulated frame
    pub fn end_frame(&mut self) {
        self.turbo.tick(&mut self.register);
    }

    /// Release every emulated button
    pub fn clear_input(&mut self) {
        self.turbo.clear();
        self.register.clear();
    }

    /// Restore one class's out-of-the-box bindings
    pub fn reset_bindings(&mut self, class: DeviceClass) {
        let defaults = self.system.default_bindings(class);
        self.bindings.reset_to_defaults(class, &defaults);
        info!("Reset {} bindings to defaults", class.name());
    }

    /// Wait for the next button on `id` and bind it to `key`
    ///
    /// # Panics
    ///
    /// If `key` is neither a front-end key nor in the system's category.
    pub fn start_capture(&mut self, id: DeviceId, key: KeyIndex) -> Result<(), InputError> {
        let end = self.system.key_category().range().end;
        if key >= end {
            panic!(
                "Logical key {} outside {} key map (0..{})",
                key,
                self.system.name(),
                end
            );
        }
        let device = self.registry.get(id).ok_or(InputError::UnknownDevice(id))?;
        self.rebinder.start_capture(device, key);
        Ok(())
    }

    pub fn request_unbind_all(&mut self, id: DeviceId) -> Result<(), InputError> {
        let device = self.registry.get(id).ok_or(InputError::UnknownDevice(id))?;
        self.rebinder.request_unbind_all(device);
        Ok(())
    }

    pub fn resolve_unbind_all(&mut self, confirm: bool) -> Option<RebindOutcome> {
        self.rebinder
            .resolve_unbind_all(confirm, &self.registry, &mut self.bindings)
    }

    pub fn cancel_rebind(&mut self) -> Option<RebindOutcome> {
        self.rebinder.cancel()
    }

    pub fn save_bindings(&self) -> BindingSnapshot {
        self.bindings.snapshot(self.system.name())
    }

    /// Replace the binding table with a snapshot, skipping keys this system
    /// doesn't have. Returns how many bindings were loaded.
    pub fn load_bindings(&mut self, snapshot: &BindingSnapshot) -> usize {
        if snapshot.system != self.system.name() {
            warn!(
                "Loading bindings saved for {} into {}",
                snapshot.system,
                self.system.name()
            );
        }

        let end = self.system.key_category().range().end;
        self.bindings.clear();
        for b in &snapshot.bindings {
            if b.key < end {
                self.bindings.set_binding(b.class, b.code, b.key);
            } else {
                warn!("Skipping binding to unknown key {}", b.key);
            }
        }
        self.bindings.len()
    }
}
