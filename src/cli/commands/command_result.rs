use std::path::PathBuf;

use crate::core::{ScanResult, ScanWarning};
use crate::output::GraphData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Analyze,
    Files,
    Report,
    Graph,
    Clean,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    Analyze(AnalyzeSummary),
    Files(FilesSummary),
    Report(ReportSummary),
    Graph(GraphSummary),
    Clean(CleanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct AnalyzeSummary {
    pub result: ScanResult,
    pub json: bool,
    pub timings: bool,
}

#[derive(Debug)]
pub struct FilesSummary {
    /// Project-relative paths, sorted.
    pub files: Vec<String>,
    pub json: bool,
}

#[derive(Debug)]
pub struct ReportSummary {
    /// Where the report was written; `None` means stdout.
    pub path: Option<PathBuf>,
    pub content: String,
    pub component_count: usize,
}

#[derive(Debug)]
pub struct GraphSummary {
    pub path: Option<PathBuf>,
    pub graph: GraphData,
}

#[derive(Debug)]
pub struct CleanSummary {
    /// Files whose components are all unused, project-relative.
    pub files: Vec<String>,
    pub is_apply: bool,
    pub deleted: Vec<String>,
    /// Listed for deletion but already gone.
    pub missing: Vec<String>,
    /// `(file, error)` for deletions that failed.
    pub failed: Vec<(String, String)>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a cua command
#[derive(Debug)]
pub struct CommandResult {
    pub kind: CommandKind,
    pub summary: CommandSummary,
    /// Command completed but its failure condition was met
    /// (`--fail-on-unused` with unused components, failed deletions).
    pub failed: bool,
    /// Files that could not be read or parsed.
    pub warnings: Vec<ScanWarning>,
}

impl CommandResult {
    pub fn new(kind: CommandKind, summary: CommandSummary) -> Self {
        Self {
            kind,
            summary,
            failed: false,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<ScanWarning>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn failed_if(mut self, condition: bool) -> Self {
        self.failed = condition;
        self
    }
}
