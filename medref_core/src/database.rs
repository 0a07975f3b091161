//! Category databases: ordered, immutable lists of content entries.
//!
//! Every query is a linear scan that returns borrowed entries in source
//! order. Nothing here mutates the database or keeps state between calls.

use crate::{ContentEntry, SexualHealthCategory};

/// An ordered list of content entries of one category family
#[derive(Clone, Debug)]
pub struct CategoryDatabase {
    name: String,
    entries: Vec<ContentEntry>,
}

impl CategoryDatabase {
    /// Create a database from entries in their authored order
    pub fn new(name: impl Into<String>, entries: Vec<ContentEntry>) -> Self {
        let name = name.into();
        tracing::debug!("Built category database '{}' with {} entries", name, entries.len());
        Self { name, entries }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All entries, in source order
    pub fn entries(&self) -> &[ContentEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry ids, in source order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    /// Search entries by query (case-insensitive substring match)
    ///
    /// An entry matches if its name, description, clinical presentation or
    /// any key pearl contains the query. The empty query matches every entry.
    pub fn search(&self, query: &str) -> Vec<&ContentEntry> {
        let query_lower = query.to_lowercase();

        self.entries
            .iter()
            .filter(|entry| entry_matches(entry, &query_lower))
            .collect()
    }

    /// Filter entries whose category is any of `categories`
    ///
    /// An empty category list yields no entries.
    pub fn filter_by_category(&self, categories: &[SexualHealthCategory]) -> Vec<&ContentEntry> {
        self.entries
            .iter()
            .filter(|entry| categories.contains(&entry.category))
            .collect()
    }

    /// Get the first entry with exactly this id
    pub fn get_by_id(&self, id: &str) -> Option<&ContentEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

impl<'a> IntoIterator for &'a CategoryDatabase {
    type Item = &'a ContentEntry;
    type IntoIter = std::slice::Iter<'a, ContentEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn entry_matches(entry: &ContentEntry, query_lower: &str) -> bool {
    entry.name.to_lowercase().contains(query_lower)
        || entry.description.to_lowercase().contains(query_lower)
        || entry.clinical_presentation.to_lowercase().contains(query_lower)
        || entry
            .key_pearls
            .iter()
            .any(|pearl| pearl.to_lowercase().contains(query_lower))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str, category: SexualHealthCategory) -> ContentEntry {
        ContentEntry {
            id: id.into(),
            name: name.into(),
            category,
            description: format!("{} description", name),
            epidemiology: String::new(),
            pathophysiology: String::new(),
            clinical_presentation: String::new(),
            diagnostic_workup: String::new(),
            management: String::new(),
            prevention: String::new(),
            key_pearls: vec![],
            references: vec![],
        }
    }

    fn sample() -> CategoryDatabase {
        let mut herpes = entry("herpes", "Genital Herpes", SexualHealthCategory::StiViral);
        herpes.key_pearls = vec!["Painful vesicles on an erythematous base.".into()];
        let mut syphilis = entry("syphilis", "Syphilis", SexualHealthCategory::StiBacterial);
        syphilis.clinical_presentation = "Painless CHANCRE at the inoculation site.".into();

        CategoryDatabase::new(
            "sample",
            vec![
                entry("chlamydia", "Chlamydia", SexualHealthCategory::StiBacterial),
                herpes,
                syphilis,
                entry("prep", "HIV PrEP", SexualHealthCategory::Hiv),
            ],
        )
    }

    fn ids<'a>(entries: &[&'a ContentEntry]) -> Vec<&'a str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let db = sample();
        assert_eq!(ids(&db.search("")), vec!["chlamydia", "herpes", "syphilis", "prep"]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let db = sample();
        assert_eq!(ids(&db.search("chancre")), vec!["syphilis"]);
        assert_eq!(ids(&db.search("VESICLES")), vec!["herpes"]);
        assert_eq!(ids(&db.search("hiv prep")), vec!["prep"]);
    }

    #[test]
    fn test_search_ignores_unsearched_fields() {
        let mut db_entry = entry("x", "X", SexualHealthCategory::Screening);
        db_entry.management = "doxycycline".into();
        let db = CategoryDatabase::new("one", vec![db_entry]);
        assert!(db.search("doxycycline").is_empty());
    }

    #[test]
    fn test_filter_by_category() {
        let db = sample();
        assert_eq!(
            ids(&db.filter_by_category(&[SexualHealthCategory::StiBacterial])),
            vec!["chlamydia", "syphilis"]
        );
        assert_eq!(
            ids(&db.filter_by_category(&[
                SexualHealthCategory::Hiv,
                SexualHealthCategory::StiViral,
                SexualHealthCategory::Hiv,
            ])),
            vec!["herpes", "prep"]
        );
        assert!(db.filter_by_category(&[]).is_empty());
    }

    #[test]
    fn test_get_by_id_is_exact() {
        let db = sample();
        assert_eq!(db.get_by_id("herpes").map(|e| e.name.as_str()), Some("Genital Herpes"));
        assert!(db.get_by_id("Herpes").is_none());
        assert!(db.get_by_id("herp").is_none());
    }

    #[test]
    fn test_get_by_id_returns_first_match() {
        let mut dup = entry("dup", "Second", SexualHealthCategory::Screening);
        dup.description = "later".into();
        let db = CategoryDatabase::new(
            "dups",
            vec![entry("dup", "First", SexualHealthCategory::Screening), dup],
        );
        assert_eq!(db.get_by_id("dup").map(|e| e.name.as_str()), Some("First"));
    }
}
