//! Report for a selector value no demo recognizes.

use patterns_core::Error;

use super::output::{Output, Report};

/// Report data from a rejected selector.
#[derive(Debug)]
pub struct SelectionReport {
    /// Error message naming the flag and the value.
    pub message: String,
    /// Values the flag accepts.
    pub options: Vec<String>,
}

impl From<&Error> for SelectionReport {
    fn from(err: &Error) -> Self {
        Self {
            message: err.to_string(),
            options: err.options().to_vec(),
        }
    }
}

impl Report for SelectionReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&self.message);
        out.newline();
        out.section("Available options");
        for option in &self.options {
            out.list_item(option);
        }
    }
}
