//! Device capability set shared by every appliance.

use std::fmt;

use crate::Console;

/// Channel value of a device, steppable one unit at a time.
pub trait Channel: Copy + PartialEq + fmt::Debug + fmt::Display {
    /// The next channel up.
    fn up(self) -> Self;
    /// The next channel down.
    fn down(self) -> Self;
}

impl Channel for i64 {
    fn up(self) -> Self {
        self.wrapping_add(1)
    }

    fn down(self) -> Self {
        self.wrapping_sub(1)
    }
}

impl Channel for f64 {
    fn up(self) -> Self {
        self + 1.0
    }

    fn down(self) -> Self {
        self - 1.0
    }
}

/// An appliance a remote control can operate.
///
/// Controllers only ever talk to a device through this trait. No operation can
/// fail, and volume and channel are stored exactly as given, without clamping.
pub trait Device {
    /// Encoding of the channel for this appliance.
    type Channel: Channel;

    /// Label used when the device announces itself, e.g. `TV`.
    fn label(&self) -> &'static str;

    fn is_enabled(&self) -> bool;

    /// Power on. Announces itself even if already on.
    fn enable(&mut self, console: &mut dyn Console);

    /// Power off. Announces itself even if already off.
    fn disable(&mut self, console: &mut dyn Console);

    fn volume(&self) -> i64;

    fn set_volume(&mut self, volume: i64);

    fn channel(&self) -> Self::Channel;

    fn set_channel(&mut self, channel: Self::Channel);
}

/// Volume every device starts at.
pub const INITIAL_VOLUME: i64 = 50;

pub(crate) fn announce_power(console: &mut dyn Console, label: &str, enabled: bool) {
    let action = if enabled { "turning on" } else { "turning off" };
    console.line(&format!("{}: {}...", label, action));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_channel_steps() {
        assert_eq!(1i64.up(), 2);
        assert_eq!(1i64.down(), 0);
        assert_eq!(0i64.down(), -1);
        assert_eq!(i64::MAX.up(), i64::MIN);
    }

    #[test]
    fn test_real_channel_steps() {
        assert_eq!(98.5f64.up(), 99.5);
        assert_eq!(98.5f64.down(), 97.5);
    }
}
