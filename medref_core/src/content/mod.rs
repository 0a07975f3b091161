//! Educational content modules, grouped into families.
//!
//! Each family file declares its modules in a `FAMILY` constant; the order
//! of that list is the family's manifest order.

pub mod clinical_reasoning;
pub mod pathology;
pub mod reproductive;
pub mod sexual_health_overview;

use crate::registry::ModuleFamily;
use crate::types::*;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};

/// Every module family, in registry order
pub const FAMILIES: &[ModuleFamily] = &[
    reproductive::FAMILY,
    pathology::FAMILY,
    sexual_health_overview::FAMILY,
    clinical_reasoning::FAMILY,
];

/// Skeleton of a published, first-version content item
///
/// Modules fill in the rest with struct update syntax.
pub fn published(
    id: &str,
    content_type: ContentType,
    name: &str,
    created_at: DateTime<Utc>,
) -> EducationalContent {
    EducationalContent {
        id: id.into(),
        content_type,
        name: name.into(),
        alternate_names: BTreeSet::new(),
        name_es: None,
        levels: BTreeMap::new(),
        media: Vec::new(),
        citations: Vec::new(),
        cross_references: Vec::new(),
        tags: tags(&[], &[], &[], ClinicalRelevance::Moderate),
        created_at,
        updated_at: created_at,
        version: 1,
        status: PublicationStatus::Published,
        contributors: None,
    }
}

pub(crate) fn names(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn tags(
    systems: &[&str],
    topics: &[&str],
    keywords: &[&str],
    clinical_relevance: ClinicalRelevance,
) -> ContentTags {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    ContentTags {
        systems: owned(systems),
        topics: owned(topics),
        keywords: owned(keywords),
        clinical_relevance,
        exam_relevance: None,
    }
}

pub(crate) fn exam(usmle: bool, nbme: bool, shelf: &[&str]) -> Option<ExamRelevance> {
    Some(ExamRelevance {
        usmle,
        nbme,
        shelf: shelf.iter().map(|s| s.to_string()).collect(),
    })
}

pub(crate) fn citation(
    id: &str,
    citation_type: CitationType,
    title: &str,
    authors: &[&str],
    source: &str,
) -> Citation {
    Citation {
        id: id.into(),
        citation_type,
        title: title.into(),
        authors: authors.iter().map(|s| s.to_string()).collect(),
        source: source.into(),
        url: None,
        license: None,
    }
}

pub(crate) fn media(
    id: &str,
    media_type: MediaType,
    filename: &str,
    title: &str,
    description: &str,
) -> MediaAsset {
    MediaAsset {
        id: id.into(),
        media_type,
        filename: filename.into(),
        title: title.into(),
        description: description.into(),
    }
}

pub(crate) fn case(title: &str, scenario: &str, correct: &str, incorrect: &str) -> ClinicalCase {
    ClinicalCase {
        title: title.into(),
        scenario: scenario.into(),
        correct_approach: correct.into(),
        incorrect_approach: incorrect.into(),
    }
}
