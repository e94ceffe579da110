use clap::Args;
use eyre::Result;
use patterns_core::Console;
use tracing::debug;

use crate::{
    ops,
    reports::{Output, Report, SelectionReport, TerminalOutput},
};

#[derive(Args)]
pub struct DemoCommand {
    /// Run the Adapter demo with the given worker (see `patterns list`)
    #[arg(long, value_name = "WORKER", num_args = 0..=1, default_missing_value = "")]
    pub adapter: Option<String>,

    /// Run the Bridge demo on the given platform (see `patterns list`)
    #[arg(long, value_name = "PLATFORM", num_args = 0..=1, default_missing_value = "")]
    pub bridge: Option<String>,
}

impl DemoCommand {
    /// Whether no demo was requested.
    pub fn is_empty(&self) -> bool {
        self.adapter.is_none() && self.bridge.is_none()
    }

    pub fn run(&self) -> Result<()> {
        self.run_with(&mut TerminalOutput::new());
        Ok(())
    }

    /// Run the requested demos, adapter first.
    ///
    /// An unknown value skips that demo after printing the valid ones; it is
    /// not a failure of the process.
    pub fn run_with<O: Output + Console>(&self, out: &mut O) {
        if let Some(value) = &self.adapter {
            if let Err(err) = ops::adapter(value, out) {
                debug!(%err, "adapter demo skipped");
                SelectionReport::from(&err).render(out);
            }
        }

        if let Some(value) = &self.bridge {
            if let Err(err) = ops::bridge(value, out) {
                debug!(%err, "bridge demo skipped");
                SelectionReport::from(&err).render(out);
            }
        }
    }
}
