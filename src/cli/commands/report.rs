use std::{fs, path::Path};

use anyhow::{Context as _, Result};

use super::context::ScanContext;
use super::{CommandKind, CommandResult, CommandSummary, ReportSummary};
use crate::cli::args::ReportCommand;
use crate::output::render_markdown;

pub fn report(cmd: ReportCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let result = ctx.scan()?;
    let content = render_markdown(&result);

    let path = if cmd.output == Path::new("-") {
        None
    } else {
        fs::write(&cmd.output, &content)
            .with_context(|| format!("Failed to write report: {}", cmd.output.display()))?;
        Some(cmd.output)
    };

    Ok(CommandResult::new(
        CommandKind::Report,
        CommandSummary::Report(ReportSummary {
            path,
            content,
            component_count: result.components.len(),
        }),
    )
    .with_warnings(result.warnings))
}
