//! Scan result data model.

use std::path::PathBuf;

use serde::Serialize;

/// A declared component and its usage information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub name: String,
    /// Path relative to the project root, forward slashes.
    pub file: String,
    pub is_used: bool,
    pub usage_count: usize,
    /// Sorted, deduplicated referencing files (or router descriptors).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub used_in: Vec<String>,
}

impl Component {
    pub fn unused(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            is_used: false,
            usage_count: 0,
            used_in: Vec::new(),
        }
    }
}

/// Wall-clock time spent in each phase, in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseTimings {
    pub discovery_ms: f64,
    pub collect_ms: f64,
    pub analysis_ms: f64,
    pub aggregation_ms: f64,
    pub total_ms: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStats {
    pub files_scanned: usize,
    pub components_found: usize,
    pub used_components: usize,
    pub unused_components: usize,
    pub parse_failures: usize,
    pub skipped_paths: usize,
    pub timings: PhaseTimings,
}

/// A file that could not be read or parsed. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanWarning {
    /// Path relative to the project root.
    pub file: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScanResult {
    pub components: Vec<Component>,
    pub stats: ScanStats,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ScanWarning>,
    /// Canonical directory every `file` and `usedIn` path is relative to.
    /// Falls back to the scan root when the requested project root is unusable.
    #[serde(skip)]
    pub project_root: PathBuf,
}

impl ScanResult {
    pub fn unused(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(|c| !c.is_used)
    }

    pub fn used(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(|c| c.is_used)
    }

    /// The `n` most used components, highest count first, ties by file then name.
    pub fn most_used(&self, n: usize) -> Vec<&Component> {
        let mut used: Vec<&Component> = self.used().collect();
        used.sort_by(|a, b| {
            b.usage_count
                .cmp(&a.usage_count)
                .then_with(|| a.file.cmp(&b.file))
                .then_with(|| a.name.cmp(&b.name))
        });
        used.truncate(n);
        used
    }
}
