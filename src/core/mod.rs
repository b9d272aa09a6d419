//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `file_scanner`: source file discovery
//! - `parsers`: swc parsing
//! - `collect`: Phase 1, component declarations and imports
//! - `track`: Phase 2, usage heuristics
//! - `router`: file-based routing heuristics
//! - `resolve`: Phase 3, import resolution and scoped attribution
//! - `aggregate`: Phase 4, usage maps and the final component list
//! - `scanner`: pipeline orchestration

pub mod aggregate;
pub mod collect;
pub mod component;
pub mod file_scanner;
pub mod parsers;
pub mod resolve;
pub mod router;
pub mod scanner;
pub mod track;

pub use component::{Component, PhaseTimings, ScanResult, ScanStats, ScanWarning};
pub use scanner::{find_project_root, scan_components};
