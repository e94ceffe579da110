//! Bridge operation - drive the selected platform with both remotes.

use patterns_core::{
    Console, Result,
    bridge::{Platform, platforms},
};
use tracing::debug;

/// Execute the bridge demo.
///
/// Returns the platform in the state the demo left it in.
pub fn bridge(value: &str, console: &mut dyn Console) -> Result<Platform> {
    let platform = platforms().select(value)?.demo(console);
    debug!(?platform, "bridge demo finished");
    Ok(platform)
}

#[cfg(test)]
mod tests {
    use patterns_core::{
        Transcript,
        bridge::{Device, TvDevice},
    };

    use super::*;

    #[test]
    fn test_bridge_tv() {
        let mut console = Transcript::new();
        let platform = bridge("tv", &mut console).unwrap();

        let mut expected = TvDevice::new();
        expected.set_volume(0);
        assert_eq!(platform, Platform::Tv(expected));
        assert_eq!(
            console.lines(),
            [
                "TV: turning on...",
                "Turning volume down",
                "TV: turning off...",
                "Muting"
            ]
        );
    }

    #[test]
    fn test_bridge_radio() {
        let mut console = Transcript::new();
        let platform = bridge("radio", &mut console).unwrap();

        assert!(matches!(platform, Platform::Radio(_)));
        assert_eq!(console.lines()[0], "Radio: turning on...");
    }

    #[test]
    fn test_bridge_invalid() {
        let mut console = Transcript::new();
        let err = bridge("tv ", &mut console).unwrap_err();
        assert_eq!(err.options(), ["tv", "radio"]);
        assert!(console.is_empty());
    }
}
