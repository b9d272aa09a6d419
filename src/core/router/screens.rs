use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::track::{EvidenceKind, Heuristic, SourceUnit, UsageEvidence};

/// `<Stack.Screen name="settings" ...` or `<Tabs.Screen options={...} name='feed'`
static SCREEN_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<\w+\.Screen\s+[^>]*?name=["']([^"']+)["']"#).expect("valid regex")
});

/// Route files a screen name may refer to, most specific first.
///
/// # Examples
///
/// ```
/// use cua::core::router::screen_candidates;
///
/// assert_eq!(
///     screen_candidates("app", "search/[query]"),
///     vec![
///         "app/search/[query].tsx",
///         "app/search/[query].jsx",
///         "app/search/[query]/index.tsx",
///         "app/search/[query]/index.jsx",
///     ]
/// );
/// ```
pub fn screen_candidates(router_dir: &str, screen_name: &str) -> Vec<String> {
    let name = screen_name.trim_matches('/');
    vec![
        format!("{}/{}.tsx", router_dir, name),
        format!("{}/{}.jsx", router_dir, name),
        format!("{}/{}/index.tsx", router_dir, name),
        format!("{}/{}/index.jsx", router_dir, name),
    ]
}

/// Declarative screen registrations, matched on raw source text.
///
/// Emits one file-targeted evidence per candidate path; candidates that are
/// not scanned files simply match nothing during aggregation.
#[derive(Debug, Clone)]
pub struct ScreenRegistration {
    router_dir: String,
}

impl ScreenRegistration {
    pub fn new(router_dir: impl Into<String>) -> Self {
        Self {
            router_dir: router_dir.into(),
        }
    }
}

impl Heuristic for ScreenRegistration {
    fn kind(&self) -> EvidenceKind {
        EvidenceKind::ScreenRegistration
    }

    fn detect(&self, unit: &SourceUnit) -> Vec<UsageEvidence> {
        let names: BTreeSet<&str> = SCREEN_NAME_REGEX
            .captures_iter(&unit.parsed.source)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect();

        names
            .into_iter()
            .flat_map(|name| screen_candidates(&self.router_dir, name))
            .map(|candidate| UsageEvidence::file(self.kind(), candidate, unit.relative_path))
            .collect()
    }
}
