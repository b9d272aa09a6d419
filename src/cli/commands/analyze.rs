use anyhow::Result;

use super::context::ScanContext;
use super::{AnalyzeSummary, CommandKind, CommandResult, CommandSummary};
use crate::cli::args::AnalyzeCommand;

pub fn analyze(cmd: AnalyzeCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let result = ctx.scan()?;

    let has_unused = result.stats.unused_components > 0;
    let warnings = result.warnings.clone();

    Ok(CommandResult::new(
        CommandKind::Analyze,
        CommandSummary::Analyze(AnalyzeSummary {
            result,
            json: cmd.json,
            timings: cmd.timings,
        }),
    )
    .with_warnings(warnings)
    .failed_if(cmd.fail_on_unused && has_unused))
}
