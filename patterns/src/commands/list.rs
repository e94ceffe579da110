use clap::Args;
use eyre::{Context, Result};

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::list();

        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to encode catalog")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
