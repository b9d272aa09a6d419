//! Renderings of a [`ScanResult`](crate::core::ScanResult) that are not tied to
//! the terminal.
//!
//! - `markdown`: a shareable usage report
//! - `graph`: node/edge data for graph visualizers

pub mod graph;
pub mod markdown;

pub use graph::{GraphData, GraphEdge, GraphNode, build_graph};
pub use markdown::render_markdown;

/// `1 file`, `3 files`.
pub(crate) fn plural(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}s", count, singular)
    }
}
