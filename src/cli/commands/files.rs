use anyhow::Result;

use super::context::ScanContext;
use super::{CommandKind, CommandResult, CommandSummary, FilesSummary};
use crate::cli::args::FilesCommand;

pub fn files(cmd: FilesCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let discovered = ctx.discover()?;

    let files = discovered.files.into_iter().map(|(_, rel)| rel).collect();

    Ok(CommandResult::new(
        CommandKind::Files,
        CommandSummary::Files(FilesSummary {
            files,
            json: cmd.json,
        }),
    ))
}
