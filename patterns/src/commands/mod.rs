mod completions;
mod demo;
mod list;

use clap::{CommandFactory, Parser, Subcommand};
use completions::CompletionsCommand;
use demo::DemoCommand;
use eyre::Result;
use list::ListCommand;

#[derive(Parser)]
#[command(name = "patterns")]
#[command(version)]
#[command(about = "Run the Adapter and Bridge structural pattern demos")]
#[command(args_conflicts_with_subcommands = true)]
pub(crate) struct Cli {
    #[command(flatten)]
    demo: DemoCommand,

    /// Show selections and device state changes on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Some(Commands::List(cmd)) => cmd.run(),
            Some(Commands::Completions(cmd)) => cmd.run(),
            None if self.demo.is_empty() => {
                Cli::command().print_help()?;
                Ok(())
            }
            None => self.demo.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the demos and the values each flag accepts
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
