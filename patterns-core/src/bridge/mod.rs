//! Bridge demo: remote controls decoupled from the appliances they drive.

mod device;
mod radio;
mod remote;
mod tv;

use std::cell::RefCell;

pub use device::{Channel, Device, INITIAL_VOLUME};
pub use radio::RadioDevice;
pub use remote::{AdvancedRemoteControl, RemoteControl, VOLUME_STEP};
pub use tv::TvDevice;

use crate::{Console, Selector};

/// Flag name of the bridge demo.
pub const ARGUMENT: &str = "bridge";

/// An appliance chosen on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Platform {
    Tv(TvDevice),
    Radio(RadioDevice),
}

impl Platform {
    /// Run the demo script against the wrapped device.
    pub fn demo(self, console: &mut dyn Console) -> Self {
        match self {
            Self::Tv(tv) => Self::Tv(demo(tv, console)),
            Self::Radio(radio) => Self::Radio(demo(radio, console)),
        }
    }
}

/// Platforms selectable with `--bridge`.
pub fn platforms() -> Selector<Platform> {
    Selector::new(ARGUMENT)
        .option("tv", || Platform::Tv(TvDevice::new()))
        .option("radio", || Platform::Radio(RadioDevice::new()))
}

/// Drive `device` with a basic and an advanced remote sharing it, then hand it
/// back in its final state.
pub fn demo<D: Device>(device: D, console: &mut dyn Console) -> D {
    let device = RefCell::new(device);
    {
        let remote = RemoteControl::new(&device);
        let advanced = AdvancedRemoteControl::new(&device);

        remote.toggle_power(console);
        remote.volume_down(console);
        advanced.toggle_power(console);
        advanced.mute(console);
    }
    device.into_inner()
}
