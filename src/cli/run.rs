//! Command dispatch.
//!
//! # Returns
//! - `Ok(CommandResult)` with the summary to print and the failure flag
//! - `Err` if the command cannot run (bad config, missing scan root, I/O errors)

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, analyze::analyze, clean::clean, files::files, graph::graph, init::init,
        report::report,
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Analyze(cmd)) => analyze(cmd),
        Some(Command::Files(cmd)) => files(cmd),
        Some(Command::Report(cmd)) => report(cmd),
        Some(Command::Graph(cmd)) => graph(cmd),
        Some(Command::Clean(cmd)) => clean(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
