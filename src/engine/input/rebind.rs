// "Press a button" rebinding flow
//
// Idle -> Capturing(device, key) -> Idle once a button is bound or the
// prompt is dismissed. Idle -> ConfirmUnbindAll(device) -> Idle after the
// user answers. While the machine is not Idle it is modal: every event it
// sees is consumed.

use super::bindings::BindingTable;
use super::codes::{ButtonCode, NONE};
use super::device::{Device, DeviceClass, DeviceId, DeviceRegistry};
use super::event::{ActionKind, Event};
use crate::engine::system::KeyIndex;
use glam::IVec2;
use log::{debug, info, warn};

/// Axis-aligned screen rectangle, `max` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub min: IVec2,
    pub max: IVec2,
}

impl Rect {
    pub const fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, p: IVec2) -> bool {
        p.cmpge(self.min).all() && p.cmplt(self.max).all()
    }
}

/// On-screen buttons of the capture prompt, in view coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PromptLayout {
    pub unbind: Rect,
    pub cancel: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebindState {
    Idle,
    Capturing { device: DeviceId, key: KeyIndex },
    ConfirmUnbindAll { device: DeviceId },
}

/// What an event did to the rebinding flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebindOutcome {
    /// Swallowed without changing state
    Consumed,
    Bound {
        device: DeviceId,
        class: DeviceClass,
        code: ButtonCode,
        key: KeyIndex,
    },
    /// The key's binding on the target device was removed
    Unbound { key: KeyIndex },
    Cancelled,
    /// The target device disconnected; nothing was written
    DeviceLost,
    UnboundAll { class: DeviceClass, removed: usize },
    Declined,
}

/// Rebinding state machine
#[derive(Debug)]
pub struct Rebinder {
    state: RebindState,
    layout: PromptLayout,
}

impl Rebinder {
    pub fn new() -> Self {
        Self {
            state: RebindState::Idle,
            layout: PromptLayout::default(),
        }
    }

    pub fn state(&self) -> RebindState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != RebindState::Idle
    }

    pub fn set_prompt_layout(&mut self, layout: PromptLayout) {
        self.layout = layout;
    }

    pub fn prompt_layout(&self) -> PromptLayout {
        self.layout
    }

    /// Arm the machine for one logical key on one device
    ///
    /// Only valid from Idle.
    pub fn start_capture(&mut self, device: &Device, key: KeyIndex) {
        debug_assert_eq!(
            self.state,
            RebindState::Idle,
            "capture started while another flow is active"
        );
        info!("Waiting for a button on {} for key {}", device.name(), key);
        self.state = RebindState::Capturing {
            device: device.id(),
            key,
        };
    }

    /// Ask before clearing every binding of a device's class
    pub fn request_unbind_all(&mut self, device: &Device) {
        debug_assert_eq!(self.state, RebindState::Idle);
        info!("Confirm unbinding all keys of {}", device.name());
        self.state = RebindState::ConfirmUnbindAll { device: device.id() };
    }

    /// Dismiss whatever flow is active
    pub fn cancel(&mut self) -> Option<RebindOutcome> {
        if !self.is_active() {
            return None;
        }
        debug!("Rebinding cancelled");
        self.state = RebindState::Idle;
        Some(RebindOutcome::Cancelled)
    }

    /// Answer the unbind-all question
    pub fn resolve_unbind_all(
        &mut self,
        confirm: bool,
        registry: &DeviceRegistry,
        bindings: &mut BindingTable,
    ) -> Option<RebindOutcome> {
        let RebindState::ConfirmUnbindAll { device } = self.state else {
            return None;
        };
        self.state = RebindState::Idle;

        let Some(device) = registry.get(device) else {
            warn!("Device disconnected before unbind-all was answered");
            return Some(RebindOutcome::DeviceLost);
        };
        if !confirm {
            return Some(RebindOutcome::Declined);
        }

        let class = device.map().class;
        let removed = bindings.clear_class(class);
        info!("Unbound {} keys of {}", removed, device.name());
        Some(RebindOutcome::UnboundAll { class, removed })
    }

    /// The registry dropped a device; abandon any flow targeting it
    pub fn on_device_removed(&mut self, id: DeviceId) -> Option<RebindOutcome> {
        let target = match self.state {
            RebindState::Idle => return None,
            RebindState::Capturing { device, .. } => device,
            RebindState::ConfirmUnbindAll { device } => device,
        };
        if target != id {
            return None;
        }
        warn!("Rebinding target device disconnected");
        self.state = RebindState::Idle;
        Some(RebindOutcome::DeviceLost)
    }

    /// Offer an event to the machine
    ///
    /// Returns `None` when Idle, so the caller routes the event normally.
    pub fn handle_event(
        &mut self,
        event: &Event,
        registry: &DeviceRegistry,
        bindings: &mut BindingTable,
        swapped: bool,
    ) -> Option<RebindOutcome> {
        match self.state {
            RebindState::Idle => None,
            RebindState::Capturing { device, key } => {
                Some(self.handle_capture(event, device, key, registry, bindings, swapped))
            }
            RebindState::ConfirmUnbindAll { device } => {
                if !registry.contains(device) {
                    self.state = RebindState::Idle;
                    return Some(RebindOutcome::DeviceLost);
                }
                if event.device != device || !event.is_pushed() {
                    return Some(RebindOutcome::Consumed);
                }
                if event.is_confirm(swapped) {
                    self.resolve_unbind_all(true, registry, bindings)
                } else if event.is_cancel(swapped) {
                    self.resolve_unbind_all(false, registry, bindings)
                } else {
                    Some(RebindOutcome::Consumed)
                }
            }
        }
    }

    fn handle_capture(
        &mut self,
        event: &Event,
        target: DeviceId,
        key: KeyIndex,
        registry: &DeviceRegistry,
        bindings: &mut BindingTable,
        swapped: bool,
    ) -> RebindOutcome {
        let Some(device) = registry.get(target) else {
            warn!("Capture target disconnected, nothing bound");
            self.state = RebindState::Idle;
            return RebindOutcome::DeviceLost;
        };

        // Prompt buttons, reachable from any pointer
        if event.is_pointer() && event.action == ActionKind::Released {
            if self.layout.unbind.contains(event.pos) {
                let class = device.map().class;
                bindings.unbind_key(class, key);
                info!("Unbound key {} on {}", key, device.name());
                self.state = RebindState::Idle;
                return RebindOutcome::Unbound { key };
            }
            if self.layout.cancel.contains(event.pos) {
                self.state = RebindState::Idle;
                return RebindOutcome::Cancelled;
            }
        }

        if event.device != target || !event.is_pushed() || event.code == NONE {
            return RebindOutcome::Consumed;
        }

        if event.is_cancel(swapped) {
            debug!("Capture cancelled from {}", device.name());
            self.state = RebindState::Idle;
            return RebindOutcome::Cancelled;
        }

        let class = event.map.class;
        bindings.bind(class, event.code, key);
        info!(
            "Bound {} code {:#x} to key {}",
            device.name(),
            event.code,
            key
        );
        self.state = RebindState::Idle;
        RebindOutcome::Bound {
            device: target,
            class,
            code: event.code,
            key,
        }
    }
}

impl Default for Rebinder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::codes::{gamepad, keycode, pointer};
    use crate::engine::input::device::Capabilities;

    struct Fixture {
        registry: DeviceRegistry,
        bindings: BindingTable,
        rebinder: Rebinder,
        pad: DeviceId,
    }

    fn fixture() -> Fixture {
        let mut registry = DeviceRegistry::new(4);
        let pad = registry
            .add_device(Device::new("Pad", DeviceClass::Gamepad, Capabilities::GAMEPAD))
            .unwrap();
        Fixture {
            registry,
            bindings: BindingTable::new(),
            rebinder: Rebinder::new(),
            pad,
        }
    }

    impl Fixture {
        fn push(&mut self, code: u32) -> Option<RebindOutcome> {
            let device = self.registry.get(self.pad).unwrap();
            let event = Event::button(device, code, ActionKind::Pushed);
            self.rebinder
                .handle_event(&event, &self.registry, &mut self.bindings, false)
        }

        fn capture(&mut self, key: KeyIndex) {
            let device = self.registry.get(self.pad).unwrap().clone();
            self.rebinder.start_capture(&device, key);
        }
    }

    #[test]
    fn test_idle_passes_events_through() {
        let mut f = fixture();
        assert_eq!(f.push(gamepad::SOUTH), None);
    }

    #[test]
    fn test_capture_binds_and_returns_to_idle() {
        let mut f = fixture();
        f.capture(12);
        assert!(f.rebinder.is_active());

        let outcome = f.push(42);
        assert_eq!(
            outcome,
            Some(RebindOutcome::Bound {
                device: f.pad,
                class: DeviceClass::Gamepad,
                code: 42,
                key: 12
            })
        );
        assert_eq!(f.bindings.get_key(DeviceClass::Gamepad, 42), Some(12));
        assert_eq!(f.rebinder.state(), RebindState::Idle);
    }

    #[test]
    fn test_cancel_button_is_reserved() {
        let mut f = fixture();
        f.capture(12);

        assert_eq!(f.push(gamepad::EAST), Some(RebindOutcome::Cancelled));
        assert!(f.bindings.is_empty());
        assert_eq!(f.rebinder.state(), RebindState::Idle);
    }

    #[test]
    fn test_capture_overwrites_prior_binding() {
        let mut f = fixture();
        f.bindings.bind(DeviceClass::Gamepad, 42, 9);
        f.capture(12);
        f.push(42);
        assert_eq!(f.bindings.get_key(DeviceClass::Gamepad, 42), Some(12));
        assert_eq!(f.bindings.get_code(DeviceClass::Gamepad, 9), None);
    }

    #[test]
    fn test_release_and_other_devices_are_consumed() {
        let mut f = fixture();
        let kb = f
            .registry
            .add_device(Device::new("kb", DeviceClass::Keyboard, Capabilities::KEYBOARD))
            .unwrap();
        f.capture(12);

        let pad = f.registry.get(f.pad).unwrap();
        let release = Event::button(pad, 42, ActionKind::Released);
        assert_eq!(
            f.rebinder.handle_event(&release, &f.registry, &mut f.bindings, false),
            Some(RebindOutcome::Consumed)
        );

        let other = Event::button(f.registry.get(kb).unwrap(), keycode::ENTER, ActionKind::Pushed);
        assert_eq!(
            f.rebinder.handle_event(&other, &f.registry, &mut f.bindings, false),
            Some(RebindOutcome::Consumed)
        );
        assert!(f.bindings.is_empty());
        assert!(f.rebinder.is_active());
    }

    #[test]
    fn test_device_lost_mid_capture() {
        let mut f = fixture();
        f.capture(12);

        let stale = Event::button(f.registry.get(f.pad).unwrap(), 42, ActionKind::Pushed);
        f.registry.remove_device(f.pad);

        assert_eq!(
            f.rebinder.handle_event(&stale, &f.registry, &mut f.bindings, false),
            Some(RebindOutcome::DeviceLost)
        );
        assert!(f.bindings.is_empty());
        assert_eq!(f.rebinder.state(), RebindState::Idle);
    }

    #[test]
    fn test_removal_notification() {
        let mut f = fixture();
        f.capture(12);
        assert_eq!(f.rebinder.on_device_removed(DeviceId(999)), None);
        assert_eq!(f.rebinder.on_device_removed(f.pad), Some(RebindOutcome::DeviceLost));
        assert!(!f.rebinder.is_active());
    }

    #[test]
    fn test_prompt_buttons() {
        let mut f = fixture();
        let mouse = f
            .registry
            .add_device(Device::new("Mouse", DeviceClass::Pointer, Capabilities::POINTER))
            .unwrap();
        f.rebinder.set_prompt_layout(PromptLayout {
            unbind: Rect::new(IVec2::new(0, 0), IVec2::new(100, 40)),
            cancel: Rect::new(IVec2::new(100, 0), IVec2::new(200, 40)),
        });
        f.bindings.bind(DeviceClass::Gamepad, gamepad::L1, 12);
        f.capture(12);

        let mouse = f.registry.get(mouse).unwrap().clone();
        let tap = Event::pointer(&mouse, pointer::LEFT, ActionKind::Released, IVec2::new(10, 10));
        assert_eq!(
            f.rebinder.handle_event(&tap, &f.registry, &mut f.bindings, false),
            Some(RebindOutcome::Unbound { key: 12 })
        );
        assert!(f.bindings.is_empty());

        f.capture(12);
        let tap = Event::pointer(&mouse, pointer::LEFT, ActionKind::Released, IVec2::new(150, 10));
        assert_eq!(
            f.rebinder.handle_event(&tap, &f.registry, &mut f.bindings, false),
            Some(RebindOutcome::Cancelled)
        );

        f.capture(12);
        let miss = Event::pointer(&mouse, pointer::LEFT, ActionKind::Released, IVec2::new(150, 90));
        assert_eq!(
            f.rebinder.handle_event(&miss, &f.registry, &mut f.bindings, false),
            Some(RebindOutcome::Consumed)
        );
    }

    #[test]
    fn test_unbind_all_confirmed() {
        let mut f = fixture();
        f.bindings.bind(DeviceClass::Gamepad, 1, 10);
        f.bindings.bind(DeviceClass::Gamepad, 2, 11);
        f.bindings.bind(DeviceClass::Keyboard, 1, 10);

        let pad = f.registry.get(f.pad).unwrap().clone();
        f.rebinder.request_unbind_all(&pad);

        assert_eq!(f.push(gamepad::DPAD_UP), Some(RebindOutcome::Consumed));
        assert_eq!(
            f.push(gamepad::SOUTH),
            Some(RebindOutcome::UnboundAll {
                class: DeviceClass::Gamepad,
                removed: 2
            })
        );
        assert_eq!(f.bindings.len(), 1);
        assert!(!f.rebinder.is_active());
    }

    #[test]
    fn test_unbind_all_declined() {
        let mut f = fixture();
        f.bindings.bind(DeviceClass::Gamepad, 1, 10);

        let pad = f.registry.get(f.pad).unwrap().clone();
        f.rebinder.request_unbind_all(&pad);
        assert_eq!(
            f.rebinder.resolve_unbind_all(false, &f.registry, &mut f.bindings),
            Some(RebindOutcome::Declined)
        );
        assert_eq!(f.bindings.len(), 1);
        assert_eq!(
            f.rebinder.resolve_unbind_all(true, &f.registry, &mut f.bindings),
            None
        );
    }

    #[test]
    fn test_cancel_from_idle_is_noop() {
        let mut f = fixture();
        assert_eq!(f.rebinder.cancel(), None);
        f.capture(12);
        assert_eq!(f.rebinder.cancel(), Some(RebindOutcome::Cancelled));
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(IVec2::new(0, 0), IVec2::new(10, 10));
        assert!(r.contains(IVec2::new(0, 0)));
        assert!(r.contains(IVec2::new(9, 9)));
        assert!(!r.contains(IVec2::new(10, 5)));
        assert!(!Rect::default().contains(IVec2::ZERO));
    }
}
