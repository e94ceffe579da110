//! List operation - catalog of demos.

use patterns_core::{adapter, bridge};

use crate::reports::{DemoInfo, ListReport};

/// Collect every demo flag with the values it accepts.
pub fn list() -> ListReport {
    let workers = adapter::workers();
    let platforms = bridge::platforms();

    ListReport {
        demos: vec![
            DemoInfo {
                flag: workers.argument().to_string(),
                pattern: "Adapter".to_string(),
                options: workers.names().map(String::from).collect(),
            },
            DemoInfo {
                flag: platforms.argument().to_string(),
                pattern: "Bridge".to_string(),
                options: platforms.names().map(String::from).collect(),
            },
        ],
    }
}
