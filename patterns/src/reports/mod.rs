//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod list;
mod output;
mod selection;

pub use list::{DemoInfo, ListReport};
#[cfg(test)]
pub(crate) use output::StringOutput;
pub use output::{Output, Report, TerminalOutput};
pub use selection::SelectionReport;
