use tracing::debug;

use super::device::{Device, INITIAL_VOLUME, announce_power};
use crate::Console;

/// A television. Channels are plain integers.
#[derive(Debug, Clone, PartialEq)]
pub struct TvDevice {
    enabled: bool,
    volume: i64,
    channel: i64,
}

impl TvDevice {
    pub const LABEL: &'static str = "TV";

    pub fn new() -> Self {
        Self {
            enabled: false,
            volume: INITIAL_VOLUME,
            channel: 1,
        }
    }
}

impl Default for TvDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for TvDevice {
    type Channel = i64;

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

    fn channel(&self) -> i64 {
        self.channel
    }

    fn set_channel(&mut self, channel: i64) {
        self.channel = channel;
        debug!(device = Self::LABEL, channel, "channel changed");
    }
}
