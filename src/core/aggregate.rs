//! Phase 4: Aggregation - joining declarations with usage evidence.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::core::collect::types::AllFileDeclarations;
use crate::core::component::Component;
use crate::core::resolve::{ComponentRef, Resolver};
use crate::core::router::screen_descriptor;
use crate::core::track::{EvidenceKind, UsageEvidence, UsageTarget};

/// Per-scan usage maps. Built fresh by every scan and consumed by [`aggregate`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrackerMaps {
    /// Component name → files where it is rendered, wrapped or routed to.
    pub component_usages: BTreeMap<String, BTreeSet<String>>,
    /// Component name → files importing it.
    pub imported_components: BTreeMap<String, BTreeSet<String>>,
    /// Declaring file → `usedIn` entries crediting every component in it.
    pub file_hits: BTreeMap<String, BTreeSet<String>>,
}

impl TrackerMaps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, evidence: UsageEvidence) {
        let UsageEvidence { kind, target, site } = evidence;
        match target {
            UsageTarget::Name(name) => {
                let map = if kind == EvidenceKind::Import {
                    &mut self.imported_components
                } else {
                    &mut self.component_usages
                };
                map.entry(name).or_default().insert(site);
            }
            UsageTarget::File(file) => {
                let entry = match kind {
                    EvidenceKind::ScreenRegistration => screen_descriptor(&site),
                    _ => site,
                };
                self.file_hits.entry(file).or_default().insert(entry);
            }
        }
    }
}

impl FromIterator<UsageEvidence> for TrackerMaps {
    fn from_iter<T: IntoIterator<Item = UsageEvidence>>(iter: T) -> Self {
        let mut maps = TrackerMaps::new();
        for evidence in iter {
            maps.record(evidence);
        }
        maps
    }
}

/// Build the component list from declarations and usage maps.
///
/// Components are ordered by file, then declaration order. `usage_count` is
/// the number of distinct `used_in` entries.
pub fn aggregate(declarations: &AllFileDeclarations, maps: &TrackerMaps) -> Vec<Component> {
    let resolver = Resolver::new(declarations);
    let mut used_in: HashMap<ComponentRef<'_>, BTreeSet<String>> = HashMap::new();

    for (name, sites) in maps
        .component_usages
        .iter()
        .chain(maps.imported_components.iter())
    {
        for site in sites {
            for target in resolver.resolve(name, site) {
                used_in.entry(target).or_default().insert(site.clone());
            }
        }
    }

    for (file, entries) in &maps.file_hits {
        let Some((file_key, decls)) = declarations.get_key_value(file) else {
            continue;
        };
        for component in &decls.components {
            let target = ComponentRef {
                file: file_key.as_str(),
                name: component.name.as_str(),
            };
            used_in
                .entry(target)
                .or_default()
                .extend(entries.iter().cloned());
        }
    }

    let mut files: Vec<_> = declarations.iter().collect();
    files.sort_by_key(|(file, _)| *file);

    let mut components = Vec::new();
    for (file, decls) in files {
        for declared in &decls.components {
            let key = ComponentRef {
                file: file.as_str(),
                name: declared.name.as_str(),
            };
            let entries: Vec<String> = used_in
                .get(&key)
                .map(|set| set.iter().cloned().collect())
                .unwrap_or_default();

            components.push(Component {
                name: declared.name.clone(),
                file: file.clone(),
                is_used: !entries.is_empty(),
                usage_count: entries.len(),
                used_in: entries,
            });
        }
    }
    components
}
