//! Component dependency graph.
//!
//! Nodes are component names. An edge `A->B` means a file declaring `A`
//! appears in `B`'s `usedIn`, matched by path without extension.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::core::Component;
use crate::utils::strip_extension;

const SCREEN_DESCRIPTOR_PREFIX: &str = "[expo-router: referenced in ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    pub is_used: bool,
    pub usage_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// The file a `usedIn` entry points at; screen descriptors name the registering file.
fn referenced_file(entry: &str) -> &str {
    entry
        .strip_prefix(SCREEN_DESCRIPTOR_PREFIX)
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(entry)
}

/// Build graph data from scanned components.
///
/// Components sharing a name collapse into one node (used if any is used,
/// counts summed). Self edges and duplicate edges are dropped.
pub fn build_graph(components: &[Component]) -> GraphData {
    let mut nodes: Vec<GraphNode> = Vec::new();
    let mut node_index: HashMap<&str, usize> = HashMap::new();
    for component in components {
        match node_index.get(component.name.as_str()) {
            Some(&i) => {
                nodes[i].is_used |= component.is_used;
                nodes[i].usage_count += component.usage_count;
            }
            None => {
                node_index.insert(component.name.as_str(), nodes.len());
                nodes.push(GraphNode {
                    id: component.name.clone(),
                    name: component.name.clone(),
                    is_used: component.is_used,
                    usage_count: component.usage_count,
                });
            }
        }
    }

    // First declared component per file stands in for the file.
    let mut by_stem: HashMap<&str, &str> = HashMap::new();
    for component in components {
        by_stem
            .entry(strip_extension(&component.file))
            .or_insert(component.name.as_str());
    }

    let mut edges = Vec::new();
    let mut seen = HashSet::new();
    for component in components {
        for entry in &component.used_in {
            let stem = strip_extension(referenced_file(entry));
            let Some(&source) = by_stem.get(stem) else {
                continue;
            };
            if source == component.name {
                continue;
            }
            let id = format!("{}->{}", source, component.name);
            if seen.insert(id.clone()) {
                edges.push(GraphEdge {
                    id,
                    source: source.to_string(),
                    target: component.name.clone(),
                });
            }
        }
    }

    GraphData { nodes, edges }
}
