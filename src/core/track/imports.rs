//! Import usage.
//!
//! Importing a capitalized binding counts as a use, even when the binding is
//! never rendered afterwards. `import type` counts too; namespace imports do not.

use std::collections::BTreeSet;

use swc_ecma_ast::ModuleDecl;
use swc_ecma_ast::ModuleItem;

use super::{EvidenceKind, Heuristic, SourceUnit, UsageEvidence};
use crate::core::collect::types::{ImportedName, import_bindings};
use crate::utils::is_component_name;

#[derive(Debug, Clone, Copy, Default)]
pub struct ImportUsage;

impl Heuristic for ImportUsage {
    fn kind(&self) -> EvidenceKind {
        EvidenceKind::Import
    }

    fn detect(&self, unit: &SourceUnit) -> Vec<UsageEvidence> {
        // Import declarations only appear at module level.
        let names: BTreeSet<String> = unit
            .parsed
            .module
            .body
            .iter()
            .filter_map(|item| match item {
                ModuleItem::ModuleDecl(ModuleDecl::Import(decl)) => Some(decl),
                _ => None,
            })
            .flat_map(import_bindings)
            .filter(|binding| binding.imported != ImportedName::Namespace)
            .filter(|binding| is_component_name(&binding.local_name))
            .map(|binding| binding.local_name)
            .collect();

        names
            .into_iter()
            .map(|name| UsageEvidence::name(self.kind(), name, unit.relative_path))
            .collect()
    }
}
