// Turbo auto-fire
//
// The translator only marks keys as turbo. The driver remembers each held
// turbo key with its own phase and flips its bits in the register every
// `period` frames, counted from when that key went down.

use crate::engine::input::event::ActionKind;
use crate::engine::system::InputRegister;

#[derive(Debug, Clone, Copy)]
struct TurboKey {
    mask: u32,
    frames: u32,
    /// Bits currently read as pressed
    pressed: bool,
}

/// Toggles held turbo bits on a fixed frame period
#[derive(Debug, Clone)]
pub struct TurboDriver {
    period: u32,
    keys: Vec<TurboKey>,
}

impl TurboDriver {
    /// Create a driver toggling every `period` frames (at least 1)
    pub fn new(period: u32) -> Self {
        Self {
            period: period.max(1),
            keys: Vec::new(),
        }
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn set_period(&mut self, period: u32) {
        self.period = period.max(1);
        let last = self.period - 1;
        for key in &mut self.keys {
            key.frames = key.frames.min(last);
        }
    }

    /// Start auto-firing the bits in `mask`
    ///
    /// The caller pushes them in the register as for a normal key, so the
    /// first frame always reads as pressed. A key already auto-firing keeps
    /// its phase.
    pub fn press(&mut self, mask: u32) {
        if mask == 0 || self.keys.iter().any(|k| k.mask == mask) {
            return;
        }
        self.keys.push(TurboKey {
            mask,
            frames: 0,
            pressed: true,
        });
    }

    /// Stop auto-firing the bits in `mask`
    pub fn release(&mut self, mask: u32) {
        self.keys.retain(|k| k.mask & mask == 0);
    }

    /// Bits currently auto-firing
    pub fn held(&self) -> u32 {
        self.keys.iter().fold(0, |bits, k| bits | k.mask)
    }

    pub fn is_active(&self) -> bool {
        !self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Advance one frame, toggling each key whose period elapsed
    pub fn tick(&mut self, register: &mut InputRegister) {
        for key in &mut self.keys {
            key.frames += 1;
            if key.frames < self.period {
                continue;
            }
            key.frames = 0;
            key.pressed = !key.pressed;

            let action = if key.pressed {
                ActionKind::Pushed
            } else {
                ActionKind::Released
            };
            register.apply(action, key.mask);
        }
    }
}

impl Default for TurboDriver {
    fn default() -> Self {
        Self::new(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed_frames(
        driver: &mut TurboDriver,
        register: &mut InputRegister,
        frames: usize,
    ) -> Vec<bool> {
        (0..frames)
            .map(|_| {
                driver.tick(register);
                register.is_pressed(0x01)
            })
            .collect()
    }

    #[test]
    fn test_toggles_every_period() {
        let mut register = InputRegister::new(0xFF);
        let mut driver = TurboDriver::new(2);

        register.apply(ActionKind::Pushed, 0x01);
        driver.press(0x01);

        let states = pressed_frames(&mut driver, &mut register, 6);
        assert_eq!(states, vec![true, false, false, true, true, false]);
    }

    #[test]
    fn test_period_one_alternates() {
        let mut register = InputRegister::new(0xFF);
        let mut driver = TurboDriver::new(0);
        assert_eq!(driver.period(), 1);

        register.apply(ActionKind::Pushed, 0x01);
        driver.press(0x01);

        let states = pressed_frames(&mut driver, &mut register, 4);
        assert_eq!(states, vec![false, true, false, true]);
    }

    #[test]
    fn test_release_stops_toggling() {
        let mut register = InputRegister::new(0xFF);
        let mut driver = TurboDriver::new(1);

        register.apply(ActionKind::Pushed, 0x01);
        driver.press(0x01);
        driver.tick(&mut register);

        driver.release(0x01);
        register.apply(ActionKind::Released, 0x01);
        for _ in 0..5 {
            driver.tick(&mut register);
        }
        assert_eq!(register.bits(), 0xFF);
        assert!(!driver.is_active());
    }

    #[test]
    fn test_other_bits_untouched() {
        let mut register = InputRegister::new(0xFF);
        let mut driver = TurboDriver::new(1);

        register.apply(ActionKind::Pushed, 0x02);
        register.apply(ActionKind::Pushed, 0x01);
        driver.press(0x01);
        for _ in 0..3 {
            driver.tick(&mut register);
            assert!(register.is_pressed(0x02));
        }
    }

    #[test]
    fn test_second_key_has_its_own_phase() {
        let mut register = InputRegister::new(0xFF);
        let mut driver = TurboDriver::new(2);

        register.apply(ActionKind::Pushed, 0x01);
        driver.press(0x01);
        driver.tick(&mut register);
        driver.tick(&mut register);
        assert!(!register.is_pressed(0x01));

        // 0x02 goes down while 0x01 is in its released half
        register.apply(ActionKind::Pushed, 0x02);
        driver.press(0x02);
        assert_eq!(driver.held(), 0x03);

        let mut second = Vec::new();
        for _ in 0..4 {
            driver.tick(&mut register);
            second.push(register.is_pressed(0x02));
        }
        assert_eq!(second, vec![true, false, false, true]);
    }

    #[test]
    fn test_release_keeps_other_key_phase() {
        let mut register = InputRegister::new(0xFF);
        let mut driver = TurboDriver::new(2);

        register.apply(ActionKind::Pushed, 0x01);
        driver.press(0x01);
        driver.tick(&mut register);
        register.apply(ActionKind::Pushed, 0x02);
        driver.press(0x02);

        driver.release(0x02);
        register.apply(ActionKind::Released, 0x02);
        assert_eq!(driver.held(), 0x01);

        driver.tick(&mut register);
        assert!(!register.is_pressed(0x01));
        assert!(!register.is_pressed(0x02));
    }
}
