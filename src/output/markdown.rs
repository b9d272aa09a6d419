use std::fmt::Write as _;

use super::plural;
use crate::core::ScanResult;

const TOP_USED_COUNT: usize = 5;

/// Render the Markdown usage report.
///
/// Sections: summary table, most used components, the full inventory and
/// the unused list.
pub fn render_markdown(result: &ScanResult) -> String {
    let total = result.components.len();
    let used = result.used().count();
    let unused: Vec<_> = result.unused().collect();

    let mut out = String::new();
    let _ = writeln!(out, "# Component Usage Report");
    let _ = writeln!(out);
    let _ = writeln!(out, "## Summary");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Metric | Count |");
    let _ = writeln!(out, "|--------|-------|");
    let _ = writeln!(out, "| Total Components | {} |", total);
    let _ = writeln!(out, "| Used Components | {} |", used);
    let _ = writeln!(out, "| Unused Components | {} |", unused.len());
    let _ = writeln!(out, "| Files Scanned | {} |", result.stats.files_scanned);
    if !result.warnings.is_empty() {
        let _ = writeln!(out, "| Unparsable Files | {} |", result.warnings.len());
    }

    let top_used = result.most_used(TOP_USED_COUNT);
    if !top_used.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "## Top {} Most Used Components", TOP_USED_COUNT);
        for (index, component) in top_used.iter().enumerate() {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "**{}. {}** - `{}`",
                index + 1,
                component.name,
                plural(component.usage_count, "usage")
            );
            let _ = writeln!(out, "> Used in: {}", component.used_in.join(", "));
        }
    }

    if total > 0 {
        let _ = writeln!(out);
        let _ = writeln!(out, "## All Components");
        let _ = writeln!(out);
        for component in &result.components {
            if component.is_used {
                let _ = writeln!(
                    out,
                    "- **{}** ({}) - USED `{}`",
                    component.name,
                    component.file,
                    plural(component.usage_count, "time")
                );
                let _ = writeln!(
                    out,
                    "  - Used in {}: {}",
                    plural(component.used_in.len(), "file"),
                    component.used_in.join(", ")
                );
            } else {
                let _ = writeln!(
                    out,
                    "- **{}** ({}) - UNUSED",
                    component.name, component.file
                );
            }
        }
    }

    if !unused.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "## Unused Components ({})", unused.len());
        let _ = writeln!(out);
        for component in &unused {
            let _ = writeln!(out, "- **{}** ({})", component.name, component.file);
        }
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Run `cua clean --apply` to delete files whose components are all unused."
        );
    }

    out
}
