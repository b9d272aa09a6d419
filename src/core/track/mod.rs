//! Phase 2: Usage tracking.
//!
//! Every heuristic turns one [`SourceUnit`] into a list of [`UsageEvidence`].
//! The AST heuristics live here; the router conventions live in
//! [`crate::core::router`] and implement the same trait.
//!
//! ## Module Structure
//!
//! - `jsx`: `<Button />` and `<Stack.Screen />` tags
//! - `navigation`: `{ component: Home }` route objects and `component={Home}` props
//! - `hoc`: `withAuth(Profile)`, `connect(mapState)(List)`
//! - `imports`: default and named imports of capitalized bindings

use std::collections::BTreeSet;

use enum_dispatch::enum_dispatch;

use crate::config::Config;
use crate::core::parsers::jsx::ParsedJSX;
use crate::core::router::{RouteFileConvention, ScreenRegistration};

pub mod hoc;
pub mod imports;
pub mod jsx;
pub mod navigation;

pub use hoc::HocWrapping;
pub use imports::ImportUsage;
pub use jsx::JsxUsage;
pub use navigation::NavigationConfig;

/// Which heuristic produced a piece of evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EvidenceKind {
    JsxElement,
    NavigationConfig,
    HigherOrderComponent,
    Import,
    RouteFile,
    ScreenRegistration,
}

/// What a piece of evidence points at.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UsageTarget {
    /// A component referenced by name; attributed to a declaration during aggregation.
    Name(String),
    /// Every component declared in this file (project-relative path).
    File(String),
}

/// One observation that something is used.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UsageEvidence {
    pub kind: EvidenceKind,
    pub target: UsageTarget,
    /// Project-relative path of the file where the evidence was found.
    pub site: String,
}

impl UsageEvidence {
    pub fn name(kind: EvidenceKind, name: impl Into<String>, site: &str) -> Self {
        Self {
            kind,
            target: UsageTarget::Name(name.into()),
            site: site.to_string(),
        }
    }

    pub fn file(kind: EvidenceKind, file: impl Into<String>, site: &str) -> Self {
        Self {
            kind,
            target: UsageTarget::File(file.into()),
            site: site.to_string(),
        }
    }
}

/// A parsed file together with its project-relative path.
pub struct SourceUnit<'a> {
    pub relative_path: &'a str,
    pub parsed: &'a ParsedJSX,
}

/// A usage heuristic.
///
/// Implementations must be pure: the same unit always yields the same
/// evidence, and nothing is shared between files.
#[enum_dispatch]
pub trait Heuristic {
    fn kind(&self) -> EvidenceKind;

    fn detect(&self, unit: &SourceUnit) -> Vec<UsageEvidence>;
}

/// The closed set of heuristics run on every file.
#[enum_dispatch(Heuristic)]
#[derive(Debug, Clone)]
pub enum AnyHeuristic {
    Jsx(JsxUsage),
    Navigation(NavigationConfig),
    Hoc(HocWrapping),
    Import(ImportUsage),
    RouteFile(RouteFileConvention),
    Screen(ScreenRegistration),
}

/// Build the heuristic set for a configuration.
pub fn default_heuristics(config: &Config) -> Vec<AnyHeuristic> {
    let router_dir = config.router_dir().to_string();
    vec![
        JsxUsage.into(),
        NavigationConfig.into(),
        HocWrapping::new(config.hoc_names.iter().cloned()).into(),
        ImportUsage.into(),
        RouteFileConvention::new(router_dir.clone()).into(),
        ScreenRegistration::new(router_dir).into(),
    ]
}

/// Run every heuristic over one unit. Repeated observations collapse.
pub fn detect_all(heuristics: &[AnyHeuristic], unit: &SourceUnit) -> Vec<UsageEvidence> {
    let evidence: BTreeSet<UsageEvidence> = heuristics
        .iter()
        .flat_map(|heuristic| heuristic.detect(unit))
        .collect();
    evidence.into_iter().collect()
}
