//! End-to-end runs of the demos against a recording console.

use std::cell::RefCell;

use patterns_core::{
    Console, Transcript,
    adapter::{self, Target},
    bridge::{self, AdvancedRemoteControl, Device, Platform, RadioDevice, RemoteControl, TvDevice},
};

#[test]
fn test_tv_demo_transcript() {
    let mut console = Transcript::new();
    let platform = bridge::platforms().select("tv").unwrap();
    platform.demo(&mut console);

    insta::assert_snapshot!(console.to_string(), @r"
    TV: turning on...
    Turning volume down
    TV: turning off...
    Muting
    ");
}

#[test]
fn test_radio_demo_transcript() {
    let mut console = Transcript::new();
    let platform = bridge::platforms().select("radio").unwrap();
    let platform = platform.demo(&mut console);

    insta::assert_snapshot!(console.to_string(), @r"
    Radio: turning on...
    Turning volume down
    Radio: turning off...
    Muting
    ");
    assert!(matches!(platform, Platform::Radio(ref radio) if radio.volume() == 0));
}

#[test]
fn test_tv_remote_then_advanced_mute() {
    let mut console = Transcript::new();
    let tv = RefCell::new(TvDevice::new());
    let remote = RemoteControl::new(&tv);
    let advanced = AdvancedRemoteControl::new(&tv);

    remote.toggle_power(&mut console);
    assert!(tv.borrow().is_enabled());
    assert_eq!(console.lines(), ["TV: turning on..."]);

    remote.volume_down(&mut console);
    assert_eq!(tv.borrow().volume(), 40);

    advanced.mute(&mut console);
    assert_eq!(tv.borrow().volume(), 0);
    assert!(tv.borrow().is_enabled());
}

#[test]
fn test_radio_tunes_in_hundredths() {
    let mut radio = RadioDevice::new();
    radio.set_channel(9890.0);
    assert_eq!(radio.channel(), 98.9);
}

#[test]
fn test_demo_runs_with_any_device() {
    struct Silent {
        enabled: bool,
        volume: i64,
    }

    impl Device for Silent {
        type Channel = i64;

        fn label(&self) -> &'static str {
            "Silent"
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn enable(&mut self, _console: &mut dyn Console) {
            self.enabled = true;
        }

        fn disable(&mut self, _console: &mut dyn Console) {
            self.enabled = false;
        }

        fn volume(&self) -> i64 {
            self.volume
        }

        fn set_volume(&mut self, volume: i64) {
            self.volume = volume;
        }

        fn channel(&self) -> i64 {
            0
        }

        fn set_channel(&mut self, _channel: i64) {}
    }

    let mut console = Transcript::new();
    let device = bridge::demo(
        Silent {
            enabled: false,
            volume: 7,
        },
        &mut console,
    );

    assert!(!device.enabled);
    assert_eq!(device.volume, 0);
    assert_eq!(console.lines(), ["Turning volume down", "Muting"]);
}

#[test]
fn test_adapter_demo_lines() {
    let workers = adapter::workers();
    insta::assert_snapshot!(
        workers.select("target").unwrap().request(),
        @"Target: The default target's behavior."
    );
    insta::assert_snapshot!(
        workers.select("adaptee").unwrap().request(),
        @"Adapter: (TRANSLATED) Special behavior of the Adaptee."
    );
}

#[test]
fn test_invalid_platform() {
    let err = bridge::platforms().select("fridge").unwrap_err();
    assert_eq!(err.to_string(), "Invalid value 'fridge' for argument '--bridge'");
    assert_eq!(err.options(), ["tv", "radio"]);
}
