use tracing::debug;

use super::device::{Device, INITIAL_VOLUME, announce_power};
use crate::Console;

/// A radio. The channel is a frequency; values written through
/// [`Device::set_channel`] are read as hundredths, so `9890` tunes to `98.9`.
///
/// Reading the frequency back and writing it again divides it by 100 once more.
/// Remote controls step the channel that way, so each step on a radio shrinks
/// the frequency instead of moving it by one.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioDevice {
    enabled: bool,
    volume: i64,
    frequency: f64,
}

impl RadioDevice {
    pub const LABEL: &'static str = "Radio";

    pub fn new() -> Self {
        Self {
            enabled: false,
            volume: INITIAL_VOLUME,
            frequency: 98.9,
        }
    }
}

impl Default for RadioDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for RadioDevice {
    type Channel = f64;

    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn enable(&mut self, console: &mut dyn Console) {
        announce_power(console, Self::LABEL, true);
        self.enabled = true;
        debug!(device = Self::LABEL, enabled = self.enabled, "power changed");
    }

    fn disable(&mut self, console: &mut dyn Console) {
        announce_power(console, Self::LABEL, false);
        self.enabled = false;
        debug!(device = Self::LABEL, enabled = self.enabled, "power changed");
    }

    fn volume(&self) -> i64 {
        self.volume
    }

    fn set_volume(&mut self, volume: i64) {
        self.volume = volume;
        debug!(device = Self::LABEL, volume, "volume changed");
    }

    fn channel(&self) -> f64 {
        self.frequency
    }

    fn set_channel(&mut self, channel: f64) {
        self.frequency = channel / 100.0;
        debug!(device = Self::LABEL, frequency = self.frequency, "channel changed");
    }
}
