//! Controllers operating a [`Device`] through its capability set only.

use std::cell::RefCell;

use super::device::{Channel, Device};
use crate::Console;

/// Amount a single volume step changes the volume by.
///
/// Steps use wrapping arithmetic: stepping up from `i64::MAX` lands near
/// `i64::MIN` rather than panicking or sticking at the bound.
pub const VOLUME_STEP: i64 = 10;

/// Basic remote control.
///
/// Borrows the device for its whole lifetime. Several controllers may share
/// one device; each operation borrows it mutably only while it runs.
///
/// Volume is never clamped. Steps of [`VOLUME_STEP`] and integer channel steps
/// wrap around at the `i64` bounds, so every button is total.
pub struct RemoteControl<'a, D: Device> {
    device: &'a RefCell<D>,
}

impl<'a, D: Device> RemoteControl<'a, D> {
    pub fn new(device: &'a RefCell<D>) -> Self {
        Self { device }
    }

    /// Turn the device off if it is on, on otherwise.
    pub fn toggle_power(&self, console: &mut dyn Console) {
        let mut device = self.device.borrow_mut();
        if device.is_enabled() {
            device.disable(console);
        } else {
            device.enable(console);
        }
    }

    pub fn volume_down(&self, console: &mut dyn Console) {
        console.line("Turning volume down");
        let mut device = self.device.borrow_mut();
        let volume = device.volume().wrapping_sub(VOLUME_STEP);
        device.set_volume(volume);
    }

    pub fn volume_up(&self, console: &mut dyn Console) {
        console.line("Turning volume up");
        let mut device = self.device.borrow_mut();
        let volume = device.volume().wrapping_add(VOLUME_STEP);
        device.set_volume(volume);
    }

    pub fn channel_down(&self, console: &mut dyn Console) {
        console.line("Channel down");
        let mut device = self.device.borrow_mut();
        let channel = device.channel().down();
        device.set_channel(channel);
    }

    pub fn channel_up(&self, console: &mut dyn Console) {
        console.line("Channel up");
        let mut device = self.device.borrow_mut();
        let channel = device.channel().up();
        device.set_channel(channel);
    }
}

/// Remote control with a mute button.
///
/// Wraps a [`RemoteControl`] for the basic buttons and keeps its own handle on
/// the same device for the extra ones.
pub struct AdvancedRemoteControl<'a, D: Device> {
    remote: RemoteControl<'a, D>,
    device: &'a RefCell<D>,
}

impl<'a, D: Device> AdvancedRemoteControl<'a, D> {
    pub fn new(device: &'a RefCell<D>) -> Self {
        Self {
            remote: RemoteControl::new(device),
            device,
        }
    }

    pub fn toggle_power(&self, console: &mut dyn Console) {
        self.remote.toggle_power(console);
    }

    pub fn volume_down(&self, console: &mut dyn Console) {
        self.remote.volume_down(console);
    }

    pub fn volume_up(&self, console: &mut dyn Console) {
        self.remote.volume_up(console);
    }

    pub fn channel_down(&self, console: &mut dyn Console) {
        self.remote.channel_down(console);
    }

    pub fn channel_up(&self, console: &mut dyn Console) {
        self.remote.channel_up(console);
    }

    /// Set the volume to zero, whatever it was.
    pub fn mute(&self, console: &mut dyn Console) {
        console.line("Muting");
        self.device.borrow_mut().set_volume(0);
    }
}
