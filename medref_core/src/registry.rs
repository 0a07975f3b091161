//! Module registry for educational content.
//!
//! Families of modules are declared as explicit, static lists. The registry
//! builds every module exactly once and indexes it by id. Manifests and
//! module counts are derived from those lists rather than maintained by hand.

use crate::{EducationalContent, Error, Result};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// One topic module: a stable slug and the function that authors it
#[derive(Clone, Copy, Debug)]
pub struct ModuleDef {
    pub slug: &'static str,
    pub build: fn() -> EducationalContent,
}

/// A named family of modules (one content subdirectory)
#[derive(Clone, Copy, Debug)]
pub struct ModuleFamily {
    pub name: &'static str,
    pub modules: &'static [ModuleDef],
}

/// A built module together with the slug it was registered under
#[derive(Clone, Debug, Serialize)]
pub struct RegisteredModule {
    pub family: &'static str,
    pub slug: &'static str,
    pub content: EducationalContent,
}

/// Every built module of every family, indexed by content id
#[derive(Clone, Debug)]
pub struct Registry {
    family_names: Vec<&'static str>,
    modules: Vec<RegisteredModule>,
    by_id: HashMap<String, usize>,
}

impl Registry {
    /// Build every module of the given families
    ///
    /// Fails on a repeated family name, a slug repeated within a family,
    /// or a content id repeated anywhere in the registry.
    pub fn build(families: &[ModuleFamily]) -> Result<Self> {
        let mut family_names = Vec::with_capacity(families.len());
        let mut modules = Vec::new();
        let mut by_id = HashMap::new();

        for family in families {
            if family_names.contains(&family.name) {
                return Err(Error::Registry(format!(
                    "Family '{}' registered twice",
                    family.name
                )));
            }
            family_names.push(family.name);

            let mut slugs = HashSet::new();
            for def in family.modules {
                if !slugs.insert(def.slug) {
                    return Err(Error::Registry(format!(
                        "Slug '{}' appears twice in family '{}'",
                        def.slug, family.name
                    )));
                }

                let content = (def.build)();
                if by_id.contains_key(&content.id) {
                    return Err(Error::Registry(format!(
                        "Content id '{}' (module '{}/{}') is already registered",
                        content.id, family.name, def.slug
                    )));
                }

                by_id.insert(content.id.clone(), modules.len());
                modules.push(RegisteredModule {
                    family: family.name,
                    slug: def.slug,
                    content,
                });
            }

            tracing::debug!(
                "Registered family '{}' with {} modules",
                family.name,
                family.modules.len()
            );
        }

        Ok(Self {
            family_names,
            modules,
            by_id,
        })
    }

    /// Family names, in registration order
    pub fn families(&self) -> &[&'static str] {
        &self.family_names
    }

    /// All modules of one family, in manifest order
    pub fn family(&self, name: &str) -> Option<Vec<&RegisteredModule>> {
        if !self.family_names.contains(&name) {
            return None;
        }
        Some(self.modules.iter().filter(|m| m.family == name).collect())
    }

    /// Ordered slugs of one family
    pub fn manifest(&self, family: &str) -> Option<Vec<&'static str>> {
        self.family(family)
            .map(|modules| modules.iter().map(|m| m.slug).collect())
    }

    /// Number of modules in a family (zero for an unknown family)
    pub fn total_modules(&self, family: &str) -> usize {
        self.modules.iter().filter(|m| m.family == family).count()
    }

    /// Module count per family
    pub fn counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts: BTreeMap<&'static str, usize> =
            self.family_names.iter().map(|name| (*name, 0)).collect();
        for module in &self.modules {
            *counts.entry(module.family).or_default() += 1;
        }
        counts
    }

    /// Get a module's content by content id
    pub fn get(&self, id: &str) -> Option<&EducationalContent> {
        self.by_id.get(id).map(|&index| &self.modules[index].content)
    }

    /// Get a registered module by family and slug
    pub fn get_by_slug(&self, family: &str, slug: &str) -> Option<&RegisteredModule> {
        self.modules
            .iter()
            .find(|m| m.family == family && m.slug == slug)
    }

    /// All registered modules, in registration order
    pub fn iter(&self) -> std::slice::Iter<'_, RegisteredModule> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Search modules by query (case-insensitive substring match)
    ///
    /// Matches the name, alternate names, the Spanish name, tag keywords and
    /// level summaries.
    pub fn search(&self, query: &str) -> Vec<&EducationalContent> {
        let query_lower = query.to_lowercase();

        self.modules
            .iter()
            .map(|m| &m.content)
            .filter(|content| {
                content.name.to_lowercase().contains(&query_lower)
                    || content
                        .alternate_names
                        .iter()
                        .any(|n| n.to_lowercase().contains(&query_lower))
                    || content
                        .name_es
                        .as_ref()
                        .is_some_and(|n| n.to_lowercase().contains(&query_lower))
                    || content
                        .tags
                        .keywords
                        .iter()
                        .any(|k| k.to_lowercase().contains(&query_lower))
                    || content
                        .levels
                        .values()
                        .any(|l| l.summary.to_lowercase().contains(&query_lower))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{self, published};
    use crate::{authored, ContentType};

    fn alpha() -> EducationalContent {
        published("alpha", ContentType::Topic, "Alpha Topic", authored(2026, 1, 1))
    }

    fn beta() -> EducationalContent {
        published("beta", ContentType::Condition, "Beta Condition", authored(2026, 1, 1))
    }

    const SMALL: ModuleFamily = ModuleFamily {
        name: "small",
        modules: &[
            ModuleDef { slug: "alpha", build: alpha },
            ModuleDef { slug: "beta", build: beta },
        ],
    };

    #[test]
    fn test_manifest_and_counts_are_derived() {
        let registry = Registry::build(&[SMALL]).unwrap();
        assert_eq!(registry.manifest("small"), Some(vec!["alpha", "beta"]));
        assert_eq!(registry.total_modules("small"), 2);
        assert_eq!(registry.counts().get("small"), Some(&2));
        assert_eq!(registry.manifest("missing"), None);
        assert_eq!(registry.total_modules("missing"), 0);
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        const DUP: ModuleFamily = ModuleFamily {
            name: "dup",
            modules: &[
                ModuleDef { slug: "alpha", build: alpha },
                ModuleDef { slug: "alpha", build: beta },
            ],
        };
        let err = Registry::build(&[DUP]).unwrap_err();
        assert!(matches!(err, Error::Registry(_)));
    }

    #[test]
    fn test_duplicate_content_id_rejected_across_families() {
        const OTHER: ModuleFamily = ModuleFamily {
            name: "other",
            modules: &[ModuleDef { slug: "again", build: alpha }],
        };
        let err = Registry::build(&[SMALL, OTHER]).unwrap_err();
        assert!(err.to_string().contains("alpha"));
    }

    #[test]
    fn test_duplicate_family_rejected() {
        assert!(Registry::build(&[SMALL, SMALL]).is_err());
    }

    #[test]
    fn test_lookup_by_id_and_slug() {
        let registry = Registry::build(&[SMALL]).unwrap();
        assert_eq!(registry.get("beta").map(|c| c.name.as_str()), Some("Beta Condition"));
        assert!(registry.get("gamma").is_none());
        assert_eq!(
            registry.get_by_slug("small", "alpha").map(|m| m.content.id.as_str()),
            Some("alpha")
        );
    }

    #[test]
    fn test_default_families_build() {
        let registry = Registry::build(content::FAMILIES).unwrap();
        assert_eq!(
            registry.families(),
            &["reproductive", "pathology", "sexual-health", "clinical-reasoning"]
        );
        assert_eq!(registry.total_modules("reproductive"), 23);
        assert_eq!(
            registry.counts().values().sum::<usize>(),
            registry.len()
        );
    }

    #[test]
    fn test_manifest_matches_declared_modules() {
        let registry = Registry::build(content::FAMILIES).unwrap();
        for family in content::FAMILIES {
            let manifest = registry.manifest(family.name).unwrap();
            let declared: Vec<&str> = family.modules.iter().map(|m| m.slug).collect();
            assert_eq!(manifest, declared);
            assert_eq!(registry.total_modules(family.name), family.modules.len());
        }
    }

    #[test]
    fn test_search_modules() {
        let registry = Registry::build(content::FAMILIES).unwrap();
        let hits = registry.search("ENDOMETRIOSIS");
        assert!(hits.iter().any(|c| c.id == "endometriosis"));
        assert_eq!(registry.search("").len(), registry.len());
    }

    #[test]
    fn test_search_spanish_name() {
        let registry = Registry::build(content::FAMILIES).unwrap();
        let hits: Vec<&str> = registry.search("próstata").iter().map(|c| c.id.as_str()).collect();
        assert!(hits.contains(&"prostate-cancer"), "{:?}", hits);
        assert!(registry.search("namees").is_empty());
    }
}
