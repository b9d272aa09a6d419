use std::{
    collections::BTreeMap,
    fs, io,
    path::Path,
};

use anyhow::Result;
use tracing::{debug, warn};

use super::context::ScanContext;
use super::{CleanSummary, CommandKind, CommandResult, CommandSummary};
use crate::cli::args::CleanCommand;
use crate::core::ScanResult;

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let result = ctx.scan()?;
    let files = unused_files(&result);

    let mut summary = CleanSummary {
        files,
        is_apply: cmd.apply,
        deleted: Vec::new(),
        missing: Vec::new(),
        failed: Vec::new(),
    };
    if cmd.apply {
        delete_files(&result.project_root, &mut summary);
    }

    let failed = !summary.failed.is_empty();
    Ok(
        CommandResult::new(CommandKind::Clean, CommandSummary::Clean(summary))
            .with_warnings(result.warnings)
            .failed_if(failed),
    )
}

/// Files where every declared component is unused.
///
/// A file that also declares a used component is kept.
pub fn unused_files(result: &ScanResult) -> Vec<String> {
    let mut all_unused: BTreeMap<&str, bool> = BTreeMap::new();
    for component in &result.components {
        let entry = all_unused.entry(component.file.as_str()).or_insert(true);
        *entry &= !component.is_used;
    }
    all_unused
        .into_iter()
        .filter(|(_, unused)| *unused)
        .map(|(file, _)| file.to_string())
        .collect()
}

fn delete_files(project_root: &Path, summary: &mut CleanSummary) {
    for file in &summary.files {
        let path = project_root.join(file);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(file = %file, "deleted");
                summary.deleted.push(file.clone());
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(file = %file, "file not found");
                summary.missing.push(file.clone());
            }
            Err(e) => {
                warn!(file = %file, error = %e, "failed to delete");
                summary.failed.push((file.clone(), e.to_string()));
            }
        }
    }
}
