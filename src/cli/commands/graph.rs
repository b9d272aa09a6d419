use std::fs;

use anyhow::{Context as _, Result};

use super::context::ScanContext;
use super::{CommandKind, CommandResult, CommandSummary, GraphSummary};
use crate::cli::args::GraphCommand;
use crate::output::build_graph;

pub fn graph(cmd: GraphCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let result = ctx.scan()?;
    let graph = build_graph(&result.components);

    if let Some(path) = &cmd.output {
        let json = serde_json::to_string_pretty(&graph).context("Failed to serialize graph")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write graph: {}", path.display()))?;
    }

    Ok(CommandResult::new(
        CommandKind::Graph,
        CommandSummary::Graph(GraphSummary {
            path: cmd.output,
            graph,
        }),
    )
    .with_warnings(result.warnings))
}
