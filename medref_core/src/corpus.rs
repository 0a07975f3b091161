//! The whole content corpus: the sexual-health database plus every
//! registered module family.

use crate::registry::{RegisteredModule, Registry};
use crate::sexual_health::sexual_health_database;
use crate::{content, CategoryDatabase, ContentEntry, EducationalContent, Result};
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::collections::BTreeSet;

static CORPUS: OnceCell<Corpus> = OnceCell::new();

/// Get the process-wide corpus, building it on first use
///
/// A registry failure is returned on every call until a build succeeds.
pub fn corpus() -> Result<&'static Corpus> {
    CORPUS.get_or_try_init(Corpus::load)
}

/// Either shape of content an id can resolve to
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "kebab-case")]
pub enum ContentRef<'a> {
    Entry(&'a ContentEntry),
    Module(&'a EducationalContent),
}

impl<'a> ContentRef<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            ContentRef::Entry(entry) => &entry.id,
            ContentRef::Module(module) => &module.id,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            ContentRef::Entry(entry) => &entry.name,
            ContentRef::Module(module) => &module.name,
        }
    }
}

#[derive(Debug)]
pub struct Corpus {
    sexual_health: &'static CategoryDatabase,
    registry: Registry,
}

impl Corpus {
    /// Build the registry of every content family
    pub fn load() -> Result<Self> {
        let registry = Registry::build(content::FAMILIES)?;
        let corpus = Self::from_parts(sexual_health_database(), registry);
        tracing::debug!(
            "Loaded corpus: {} entries, {} modules",
            corpus.sexual_health.len(),
            corpus.registry.len()
        );
        Ok(corpus)
    }

    pub fn from_parts(sexual_health: &'static CategoryDatabase, registry: Registry) -> Self {
        Self {
            sexual_health,
            registry,
        }
    }

    pub fn sexual_health(&self) -> &'static CategoryDatabase {
        self.sexual_health
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn modules(&self) -> impl Iterator<Item = &RegisteredModule> {
        self.registry.iter()
    }

    /// Resolve an id against the database first, then the registry
    pub fn lookup(&self, id: &str) -> Option<ContentRef<'_>> {
        self.sexual_health
            .get_by_id(id)
            .map(ContentRef::Entry)
            .or_else(|| self.registry.get(id).map(ContentRef::Module))
    }

    /// Every id in the corpus, from either entry shape
    pub fn known_ids(&self) -> BTreeSet<&str> {
        self.sexual_health
            .ids()
            .chain(self.registry.iter().map(|m| m.content.id.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_is_cached() {
        let first = corpus().unwrap();
        let second = corpus().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_lookup_resolves_both_shapes() {
        let corpus = corpus().unwrap();
        assert!(matches!(corpus.lookup("chlamydia"), Some(ContentRef::Entry(_))));
        assert!(matches!(corpus.lookup("endometriosis"), Some(ContentRef::Module(_))));
        assert!(corpus.lookup("does-not-exist").is_none());
        assert_eq!(corpus.lookup("copd").map(|c| c.name()), Some("Chronic Obstructive Pulmonary Disease"));
    }

    #[test]
    fn test_known_ids_cover_everything() {
        let corpus = corpus().unwrap();
        let ids = corpus.known_ids();
        assert_eq!(ids.len(), corpus.sexual_health().len() + corpus.registry().len());
        assert!(ids.contains("hiv-prep"));
        assert!(ids.contains("testicular-torsion"));
    }

    #[test]
    fn test_content_ref_serializes_with_kind() {
        let corpus = corpus().unwrap();
        let value = serde_json::to_value(corpus.lookup("chlamydia").unwrap()).unwrap();
        assert_eq!(value["kind"], "entry");
        assert_eq!(value["content"]["category"], "sti-bacterial");
    }
}
