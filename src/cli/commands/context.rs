//! Shared setup for scanning commands.

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        ScanResult, find_project_root, scan_components,
        scanner::{DiscoveredFiles, discover_files},
    },
};

/// Resolved configuration and paths for one command invocation.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--router-root src/app`)
/// 2. `.cuarc.json` config file (found by walking up from the scan root)
/// 3. Built-in defaults
pub struct ScanContext {
    pub config: Config,
    /// Directory to scan, as given on the command line.
    pub root: PathBuf,
    /// Requested base for reported paths. The scan falls back to the scan
    /// root when it does not exist; see [`ScanResult::project_root`].
    pub project_root: PathBuf,
}

impl ScanContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let root = common.path.clone();

        let config_result = load_config(&root)?;
        if !config_result.from_file {
            debug!("no .cuarc.json found, using default configuration");
        }
        let mut config = config_result.config;

        if let Some(router_root) = &common.router_root {
            config.router_root = router_root.clone();
            config.validate()?;
        }

        // Priority: CLI --project-root > config projectRoot (relative to the scan root) > package.json lookup
        let project_root = match (&common.project_root, &config.project_root) {
            (Some(cli_root), _) => cli_root.clone(),
            (None, Some(config_root)) => root.join(config_root),
            (None, None) => {
                let start = root.canonicalize().unwrap_or_else(|_| root.clone());
                find_project_root(&start)
            }
        };
        debug!(
            root = %root.display(),
            project_root = %project_root.display(),
            "resolved scan paths"
        );

        Ok(Self {
            config,
            root,
            project_root,
        })
    }

    pub fn scan(&self) -> Result<ScanResult> {
        scan_components(&self.root, &self.project_root, &self.config)
    }

    pub fn discover(&self) -> Result<DiscoveredFiles> {
        discover_files(&self.root, &self.project_root, &self.config)
    }
}
