//! List command report data structures.

use serde::Serialize;

use super::output::{Output, Report};

/// Catalog of the available demos.
#[derive(Debug, Serialize)]
pub struct ListReport {
    pub demos: Vec<DemoInfo>,
}

/// One demo and the values its flag accepts.
#[derive(Debug, Serialize)]
pub struct DemoInfo {
    /// Flag name without dashes.
    pub flag: String,
    /// Pattern the demo illustrates.
    pub pattern: String,
    /// Accepted values, in registry order.
    pub options: Vec<String>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, demo) in self.demos.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&format!("{} (--{})", demo.pattern, demo.flag));
            for option in &demo.options {
                out.list_item(option);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::StringOutput;

    fn report() -> ListReport {
        ListReport {
            demos: vec![
                DemoInfo {
                    flag: "adapter".into(),
                    pattern: "Adapter".into(),
                    options: vec!["target".into(), "adaptee".into()],
                },
                DemoInfo {
                    flag: "bridge".into(),
                    pattern: "Bridge".into(),
                    options: vec!["tv".into(), "radio".into()],
                },
            ],
        }
    }

    #[test]
    fn test_render() {
        let mut out = StringOutput::default();
        report().render(&mut out);

        assert_eq!(
            out.buf,
            "Adapter (--adapter):\n- target\n- adaptee\n\nBridge (--bridge):\n- tv\n- radio\n"
        );
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["demos"][0]["flag"], "adapter");
        assert_eq!(json["demos"][1]["options"][1], "radio");
    }
}
