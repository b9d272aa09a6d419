use std::sync::LazyLock;

use regex::Regex;

use crate::core::track::{EvidenceKind, Heuristic, SourceUnit, UsageEvidence};

/// `index`, `_layout`, `+not-found`, `+html`, `[id]`, `[...rest]`
static ROUTE_FILE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(_layout|index|\+[\w-]+|\[.+\])\.(tsx|jsx)$").expect("valid regex")
});

/// `(tabs)`, `(auth)`
static GROUP_DIR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(.+\)$").expect("valid regex"));

/// Whether a project-relative path is a route by file-system convention.
///
/// # Examples
///
/// ```
/// use cua::core::router::is_route_file;
///
/// assert!(is_route_file("app/index.tsx", "app"));
/// assert!(is_route_file("app/(tabs)/feed.tsx", "app"));
/// assert!(!is_route_file("app/utils.ts", "app"));
/// assert!(!is_route_file("src/index.tsx", "app"));
/// ```
pub fn is_route_file(relative_path: &str, router_dir: &str) -> bool {
    let Some(rest) = relative_path
        .strip_prefix(router_dir)
        .and_then(|r| r.strip_prefix('/'))
    else {
        return false;
    };

    let mut segments: Vec<&str> = rest.split('/').collect();
    let Some(file_name) = segments.pop() else {
        return false;
    };
    if !(file_name.ends_with(".tsx") || file_name.ends_with(".jsx")) {
        return false;
    }

    ROUTE_FILE_NAME_REGEX.is_match(file_name)
        || segments.iter().any(|dir| GROUP_DIR_REGEX.is_match(dir))
}

/// Marks route files as used by their own location.
#[derive(Debug, Clone)]
pub struct RouteFileConvention {
    router_dir: String,
}

impl RouteFileConvention {
    pub fn new(router_dir: impl Into<String>) -> Self {
        Self {
            router_dir: router_dir.into(),
        }
    }
}

impl Heuristic for RouteFileConvention {
    fn kind(&self) -> EvidenceKind {
        EvidenceKind::RouteFile
    }

    fn detect(&self, unit: &SourceUnit) -> Vec<UsageEvidence> {
        if is_route_file(unit.relative_path, &self.router_dir) {
            vec![UsageEvidence::file(
                self.kind(),
                unit.relative_path,
                unit.relative_path,
            )]
        } else {
            Vec::new()
        }
    }
}
