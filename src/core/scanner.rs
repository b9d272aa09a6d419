//! Scan orchestration.
//!
//! # Pipeline
//!
//! 1. **Discovery**: walk the scan root for source files
//! 2. **Collection**: parse every file and collect its declarations and imports
//! 3. **Analysis**: run every usage heuristic over every parsed file
//! 4. **Aggregation**: join declarations with the evidence into components
//!
//! Phases 2 and 3 are parallel maps over files followed by a sequential
//! merge. Workers share nothing mutable.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
    time::Instant,
};

use anyhow::{Context as _, Result, anyhow, bail};
use rayon::prelude::*;
use swc_common::SourceMap;
use swc_ecma_visit::VisitWith;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    core::{
        aggregate::{TrackerMaps, aggregate},
        collect::{AllFileDeclarations, ComponentCollector, FileDeclarations},
        component::{PhaseTimings, ScanResult, ScanStats, ScanWarning},
        file_scanner::scan_files,
        parsers::jsx::{ParsedJSX, parse_jsx_source},
        track::{SourceUnit, default_heuristics, detect_all},
    },
    utils::relative_path,
};

/// Walk up from `start` to the nearest directory containing `package.json`.
///
/// Stops at a `.git` directory. Returns `start` when nothing is found.
pub fn find_project_root(start: &Path) -> PathBuf {
    let mut current = start.to_path_buf();
    loop {
        if current.join("package.json").is_file() {
            return current;
        }
        if current.join(".git").exists() || !current.pop() {
            return start.to_path_buf();
        }
    }
}

/// Source files found under a root, relative to the project root.
pub struct DiscoveredFiles {
    /// Canonical scan root.
    pub root: PathBuf,
    /// Canonical project root.
    pub project_root: PathBuf,
    /// `(absolute path, project-relative path)`, sorted by relative path.
    pub files: Vec<(String, String)>,
    pub skipped_count: usize,
}

/// Phase 1: find candidate source files.
///
/// # Errors
///
/// Returns an error if `root_path` does not exist, is not a directory, or
/// cannot be canonicalized.
pub fn discover_files(
    root_path: &Path,
    project_root: &Path,
    config: &Config,
) -> Result<DiscoveredFiles> {
    if !root_path.exists() {
        bail!("Scan root does not exist: {}", root_path.display());
    }
    if !root_path.is_dir() {
        bail!("Scan root is not a directory: {}", root_path.display());
    }
    let root = root_path
        .canonicalize()
        .with_context(|| format!("Failed to resolve scan root: {}", root_path.display()))?;
    let project_root = match project_root.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            debug!(
                project_root = %project_root.display(),
                error = %e,
                "project root unavailable, using scan root"
            );
            root.clone()
        }
    };

    let scan = scan_files(
        &root,
        &config.includes,
        &config.ignores,
        config.ignore_test_files,
    );
    if scan.skipped_count > 0 {
        warn!(count = scan.skipped_count, "paths skipped due to access errors");
    }

    let mut files: Vec<(String, String)> = scan
        .files
        .into_iter()
        .map(|abs| {
            let rel = relative_path(Path::new(&abs), &project_root);
            (abs, rel)
        })
        .collect();
    files.sort_by(|a, b| a.1.cmp(&b.1));

    Ok(DiscoveredFiles {
        root,
        project_root,
        files,
        skipped_count: scan.skipped_count,
    })
}

fn read_source(path: &str, max_file_size: u64) -> Result<String> {
    let size = fs::metadata(path)
        .with_context(|| format!("Failed to read file metadata: {}", path))?
        .len();
    if size > max_file_size {
        return Err(anyhow!(
            "File is too large ({} bytes, limit is {} bytes)",
            size,
            max_file_size
        ));
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
}

fn collect_file(
    abs_path: &str,
    rel_path: &str,
    max_file_size: u64,
) -> Result<(ParsedJSX, FileDeclarations)> {
    let code = read_source(abs_path, max_file_size)?;
    // Each file gets its own SourceMap
    let parsed = parse_jsx_source(code, rel_path, Arc::new(SourceMap::default()))?;
    let mut collector = ComponentCollector::new();
    parsed.module.visit_with(&mut collector);
    Ok((parsed, collector.finish()))
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Scan a directory for components and their usages.
///
/// `project_root` is the base for every reported path. Files that cannot be
/// read or parsed are reported in [`ScanResult::warnings`] and otherwise
/// ignored.
///
/// # Errors
///
/// Returns an error only if the scan root is unusable.
pub fn scan_components(
    root_path: &Path,
    project_root: &Path,
    config: &Config,
) -> Result<ScanResult> {
    let total_start = Instant::now();

    // ============================================================
    // Phase 1: Discovery
    // ============================================================
    let phase_start = Instant::now();
    let discovered = discover_files(root_path, project_root, config)?;
    let discovery_ms = elapsed_ms(phase_start);
    debug!(
        root = %discovered.root.display(),
        project_root = %discovered.project_root.display(),
        files = discovered.files.len(),
        "discovery finished"
    );

    // ============================================================
    // Phase 2: Collection (parallel parse + collect, sequential merge)
    // ============================================================
    let phase_start = Instant::now();
    let collect_results: Vec<_> = discovered
        .files
        .par_iter()
        .map(|(abs, rel)| (rel.clone(), collect_file(abs, rel, config.max_file_size)))
        .collect();

    let mut parsed_files: HashMap<String, ParsedJSX> = HashMap::new();
    let mut declarations = AllFileDeclarations::new();
    let mut warnings = Vec::new();
    for (rel, result) in collect_results {
        match result {
            Ok((parsed, decls)) => {
                declarations.insert(rel.clone(), decls);
                parsed_files.insert(rel, parsed);
            }
            Err(e) => {
                let message = format!("{:#}", e);
                warn!(file = %rel, error = %message, "skipping file");
                warnings.push(ScanWarning { file: rel, message });
            }
        }
    }
    let collect_ms = elapsed_ms(phase_start);
    debug!(
        parsed = parsed_files.len(),
        failures = warnings.len(),
        "collection finished"
    );

    // ============================================================
    // Phase 3: Analysis (parallel heuristics, sequential merge)
    // ============================================================
    let phase_start = Instant::now();
    let heuristics = default_heuristics(config);
    let evidence: Vec<_> = parsed_files
        .par_iter()
        .map(|(rel, parsed)| {
            let unit = SourceUnit {
                relative_path: rel,
                parsed,
            };
            detect_all(&heuristics, &unit)
        })
        .collect();
    let maps: TrackerMaps = evidence.into_iter().flatten().collect();
    let analysis_ms = elapsed_ms(phase_start);

    // ============================================================
    // Phase 4: Aggregation
    // ============================================================
    let phase_start = Instant::now();
    let components = aggregate(&declarations, &maps);
    let aggregation_ms = elapsed_ms(phase_start);

    let used_components = components.iter().filter(|c| c.is_used).count();
    let stats = ScanStats {
        files_scanned: discovered.files.len(),
        components_found: components.len(),
        used_components,
        unused_components: components.len() - used_components,
        parse_failures: warnings.len(),
        skipped_paths: discovered.skipped_count,
        timings: PhaseTimings {
            discovery_ms,
            collect_ms,
            analysis_ms,
            aggregation_ms,
            total_ms: elapsed_ms(total_start),
        },
    };
    info!(
        files = stats.files_scanned,
        components = stats.components_found,
        unused = stats.unused_components,
        "scan finished"
    );

    Ok(ScanResult {
        components,
        stats,
        warnings,
        project_root: discovered.project_root,
    })
}
