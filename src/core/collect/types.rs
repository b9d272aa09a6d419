//! Type definitions for the collection pass.
//!
//! All types in this module are **created during collection** by
//! `ComponentCollector` and **consumed during aggregation** to decide which
//! declaration a usage site refers to.

use std::collections::HashMap;

use swc_ecma_ast::{ImportDecl, ImportSpecifier, ModuleExportName};

/// A top-level declaration whose name follows the component convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredComponent {
    pub name: String,
}

/// The name an import binding refers to in the source module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportedName {
    /// `import Button from "./Button"`
    Default,
    /// `import { Button as Btn } from "./Button"` → `Named("Button")`
    Named(String),
    /// `import * as UI from "./ui"`
    Namespace,
}

/// Import statement information used for scoped attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    /// Local name in the importing file (e.g., "Btn").
    pub local_name: String,
    /// What the binding refers to in the imported module.
    pub imported: ImportedName,
    /// Import source path (e.g., "./Button").
    pub module_path: String,
}

/// Everything the collection pass learns about one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDeclarations {
    pub components: Vec<DeclaredComponent>,
    pub imports: Vec<ImportBinding>,
    /// Local name behind `export default`, when it is an identifier we can see.
    pub default_export: Option<String>,
}

impl FileDeclarations {
    pub fn import(&self, local_name: &str) -> Option<&ImportBinding> {
        self.imports.iter().find(|i| i.local_name == local_name)
    }
}

/// Declarations for every parsed file, keyed by project-relative path.
pub type AllFileDeclarations = HashMap<String, FileDeclarations>;

/// Flatten an import declaration into one binding per specifier.
pub fn import_bindings(node: &ImportDecl) -> Vec<ImportBinding> {
    let Some(module_path) = node.src.value.as_str() else {
        return Vec::new();
    };

    node.specifiers
        .iter()
        .map(|specifier| match specifier {
            ImportSpecifier::Named(named) => {
                let local_name = named.local.sym.to_string();
                let imported_name = named
                    .imported
                    .as_ref()
                    .map(|i| match i {
                        ModuleExportName::Ident(ident) => ident.sym.to_string(),
                        ModuleExportName::Str(s) => s.value.to_string_lossy().to_string(),
                    })
                    .unwrap_or_else(|| local_name.clone());

                ImportBinding {
                    local_name,
                    imported: if imported_name == "default" {
                        ImportedName::Default
                    } else {
                        ImportedName::Named(imported_name)
                    },
                    module_path: module_path.to_string(),
                }
            }
            ImportSpecifier::Default(default) => ImportBinding {
                local_name: default.local.sym.to_string(),
                imported: ImportedName::Default,
                module_path: module_path.to_string(),
            },
            ImportSpecifier::Namespace(ns) => ImportBinding {
                local_name: ns.local.sym.to_string(),
                imported: ImportedName::Namespace,
                module_path: module_path.to_string(),
            },
        })
        .collect()
}
