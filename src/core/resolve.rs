//! Phase 3: Resolution - deciding which declaration a usage refers to.
//!
//! A name seen at a usage site is credited through the site file's own scope:
//!
//! 1. imported from a relative module that is a scanned file → that file's
//!    declaration (the default-exported component for default imports)
//! 2. declared at top level in the site file → the local declaration
//! 3. anything else → every declaration with that name
//!
//! Re-exports and barrel files are not followed.

use std::collections::HashMap;
use std::path::Path;

use crate::core::collect::types::{AllFileDeclarations, ImportedName};
use crate::utils::{normalize_path, to_slash};

const RESOLVE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// A declared component, by file and name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentRef<'a> {
    pub file: &'a str,
    pub name: &'a str,
}

/// Resolve a relative import specifier to a known project-relative file.
///
/// Bare specifiers (`react`, `@/components/Button`) return `None`.
///
/// # Examples
///
/// ```
/// use cua::core::resolve::resolve_module;
///
/// let known = |p: &str| p == "src/components/Button.tsx";
/// assert_eq!(
///     resolve_module("src/screens/Home.tsx", "../components/Button", known),
///     Some("src/components/Button.tsx".to_string())
/// );
/// assert_eq!(resolve_module("src/App.tsx", "react-native", known), None);
/// ```
pub fn resolve_module(
    site: &str,
    module_path: &str,
    is_known: impl Fn(&str) -> bool,
) -> Option<String> {
    let is_relative = module_path == "."
        || module_path == ".."
        || module_path.starts_with("./")
        || module_path.starts_with("../");
    if !is_relative {
        return None;
    }

    let base_dir = Path::new(site).parent().unwrap_or(Path::new(""));
    let base = to_slash(&normalize_path(&base_dir.join(module_path)));

    if is_known(&base) {
        return Some(base);
    }

    // Append rather than replace: `./Button.styles` means `Button.styles.ts`.
    for ext in RESOLVE_EXTENSIONS {
        let with_ext = format!("{}.{}", base, ext);
        if is_known(&with_ext) {
            return Some(with_ext);
        }
    }

    for ext in RESOLVE_EXTENSIONS {
        let index_path = if base.is_empty() {
            format!("index.{}", ext)
        } else {
            format!("{}/index.{}", base, ext)
        };
        if is_known(&index_path) {
            return Some(index_path);
        }
    }

    None
}

/// Scoped attribution over all collected declarations.
pub struct Resolver<'a> {
    declarations: &'a AllFileDeclarations,
    /// Component name → files declaring it.
    by_name: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> Resolver<'a> {
    pub fn new(declarations: &'a AllFileDeclarations) -> Self {
        let mut by_name: HashMap<&'a str, Vec<&'a str>> = HashMap::new();
        for (file, decls) in declarations {
            for component in &decls.components {
                by_name
                    .entry(component.name.as_str())
                    .or_default()
                    .push(file.as_str());
            }
        }
        for files in by_name.values_mut() {
            files.sort_unstable();
            files.dedup();
        }
        Self {
            declarations,
            by_name,
        }
    }

    /// Declarations credited for `name` used in `site`.
    pub fn resolve(&self, name: &str, site: &str) -> Vec<ComponentRef<'a>> {
        let mut lookup_name = name;

        if let Some((site_key, site_decls)) = self.declarations.get_key_value(site) {
            match site_decls.import(name) {
                Some(binding) => {
                    if let ImportedName::Named(imported) = &binding.imported {
                        lookup_name = imported.as_str();
                    }
                    if let Some(target) = self.resolve_binding_target(
                        site,
                        &binding.module_path,
                        &binding.imported,
                    ) {
                        return vec![target];
                    }
                }
                None => {
                    if let Some(local) =
                        site_decls.components.iter().find(|c| c.name == name)
                    {
                        return vec![ComponentRef {
                            file: site_key.as_str(),
                            name: local.name.as_str(),
                        }];
                    }
                }
            }
        }

        match self.by_name.get_key_value(lookup_name) {
            Some((&name, files)) => files
                .iter()
                .map(|&file| ComponentRef { file, name })
                .collect(),
            None => Vec::new(),
        }
    }

    fn resolve_binding_target(
        &self,
        site: &str,
        module_path: &str,
        imported: &ImportedName,
    ) -> Option<ComponentRef<'a>> {
        let target = resolve_module(site, module_path, |p| self.declarations.contains_key(p))?;
        let (target_key, target_decls) = self.declarations.get_key_value(target.as_str())?;

        let exported = match imported {
            ImportedName::Default => target_decls.default_export.as_deref()?,
            ImportedName::Named(name) => name.as_str(),
            ImportedName::Namespace => return None,
        };

        target_decls
            .components
            .iter()
            .find(|c| c.name == exported)
            .map(|c| ComponentRef {
                file: target_key.as_str(),
                name: c.name.as_str(),
            })
    }
}
