//! Core content types for the medref corpus.
//!
//! This module defines the two record shapes the corpus is built from:
//! - Flat content entries (the sexual-health database rows)
//! - Multi-level educational content (reproductive, pathology and
//!   clinical-reasoning modules), with its levels, media, citations,
//!   cross-references and tags
//!
//! Serialized field names are part of the public contract and follow the
//! camelCase names consumers destructure by.

use crate::Error;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Content Entry
// ============================================================================

/// Category of a sexual-health content entry
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum SexualHealthCategory {
    StiBacterial,
    StiViral,
    StiParasitic,
    Hiv,
    Screening,
    Prevention,
    Reproductive,
    LgbtqHealth,
    SexualDysfunction,
}

impl SexualHealthCategory {
    /// Every category, in declaration order
    pub const ALL: [SexualHealthCategory; 9] = [
        SexualHealthCategory::StiBacterial,
        SexualHealthCategory::StiViral,
        SexualHealthCategory::StiParasitic,
        SexualHealthCategory::Hiv,
        SexualHealthCategory::Screening,
        SexualHealthCategory::Prevention,
        SexualHealthCategory::Reproductive,
        SexualHealthCategory::LgbtqHealth,
        SexualHealthCategory::SexualDysfunction,
    ];

    /// The wire name of this category (e.g. `sti-bacterial`)
    pub fn as_str(&self) -> &'static str {
        match self {
            SexualHealthCategory::StiBacterial => "sti-bacterial",
            SexualHealthCategory::StiViral => "sti-viral",
            SexualHealthCategory::StiParasitic => "sti-parasitic",
            SexualHealthCategory::Hiv => "hiv",
            SexualHealthCategory::Screening => "screening",
            SexualHealthCategory::Prevention => "prevention",
            SexualHealthCategory::Reproductive => "reproductive",
            SexualHealthCategory::LgbtqHealth => "lgbtq-health",
            SexualHealthCategory::SexualDysfunction => "sexual-dysfunction",
        }
    }
}

impl fmt::Display for SexualHealthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SexualHealthCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                Error::Other(format!(
                    "Unknown category '{}'. Expected one of: {}",
                    s,
                    Self::ALL
                        .iter()
                        .map(|c| c.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

/// One self-contained topic record of a category database
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    pub id: String,
    pub name: String,
    pub category: SexualHealthCategory,
    pub description: String,
    pub epidemiology: String,
    pub pathophysiology: String,
    pub clinical_presentation: String,
    pub diagnostic_workup: String,
    pub management: String,
    pub prevention: String,
    /// Presented in priority order
    pub key_pearls: Vec<String>,
    pub references: Vec<String>,
}

impl ContentEntry {
    /// The free-text prose fields, paired with their contract names
    pub fn prose_fields(&self) -> [(&'static str, &str); 7] {
        [
            ("description", &self.description),
            ("epidemiology", &self.epidemiology),
            ("pathophysiology", &self.pathophysiology),
            ("clinicalPresentation", &self.clinical_presentation),
            ("diagnosticWorkup", &self.diagnostic_workup),
            ("management", &self.management),
            ("prevention", &self.prevention),
        ]
    }
}

// ============================================================================
// Educational Content: closed enumerations
// ============================================================================

/// Kind of educational content item (also used as a cross-reference target type)
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    Condition,
    Topic,
    Structure,
    Process,
    System,
    Pathway,
    Concept,
}

/// Relationship carried by a cross-reference edge
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Relationship {
    Parent,
    Child,
    Sibling,
    Related,
    SeeAlso,
}

/// How clinically important a topic is
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum ClinicalRelevance {
    Low,
    #[serde(alias = "medium")]
    Moderate,
    High,
    Critical,
}

/// Editorial status of a content item
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PublicationStatus {
    Draft,
    Review,
    Published,
}

/// Kind of external static asset
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MediaType {
    Image,
    Diagram,
    Video,
    Animation,
    Audio,
}

/// Kind of cited source
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CitationType {
    Textbook,
    Journal,
    Guideline,
    Website,
    Review,
}

// ============================================================================
// Educational Content: level records
// ============================================================================

/// A term introduced at a given level
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeyTerm {
    pub term: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
}

/// A worked clinical scenario with a right and a wrong way through it
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalCase {
    pub title: String,
    pub scenario: String,
    pub correct_approach: String,
    pub incorrect_approach: String,
}

/// One depth tier (1 novice to 5 expert) of an explanation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LevelContent {
    pub level: u8,
    pub summary: String,
    /// Markdown-like prose, opaque to this crate
    pub explanation: String,
    pub key_terms: Vec<KeyTerm>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub analogies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patient_counseling_points: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cases: Vec<ClinicalCase>,
}

impl LevelContent {
    /// Start a level with its required fields; optional parts are chained on
    pub fn new(level: u8, summary: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            level,
            summary: summary.into(),
            explanation: explanation.into(),
            key_terms: Vec::new(),
            analogies: Vec::new(),
            examples: Vec::new(),
            patient_counseling_points: Vec::new(),
            clinical_notes: None,
            cases: Vec::new(),
        }
    }

    pub fn with_terms(mut self, terms: impl IntoIterator<Item = KeyTerm>) -> Self {
        self.key_terms.extend(terms);
        self
    }

    pub fn with_analogies<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.analogies.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn with_examples<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.examples.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn with_counseling<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.patient_counseling_points
            .extend(items.into_iter().map(Into::into));
        self
    }

    pub fn with_clinical_notes(mut self, notes: impl Into<String>) -> Self {
        self.clinical_notes = Some(notes.into());
        self
    }

    pub fn with_case(mut self, case: ClinicalCase) -> Self {
        self.cases.push(case);
        self
    }
}

// ============================================================================
// Educational Content: metadata records
// ============================================================================

/// Reference to an asset in the external asset store
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MediaAsset {
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    /// Relative path into the asset store; never resolved here
    pub filename: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    pub id: String,
    #[serde(rename = "type")]
    pub citation_type: CitationType,
    pub title: String,
    pub authors: Vec<String>,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

/// Directed, typed edge to another content item by id
///
/// The target is not guaranteed to exist; see `integrity`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CrossReference {
    pub target_id: String,
    pub target_type: ContentType,
    pub relationship: Relationship,
    pub label: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExamRelevance {
    #[serde(default)]
    pub usmle: bool,
    #[serde(default)]
    pub nbme: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shelf: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentTags {
    pub systems: Vec<String>,
    pub topics: Vec<String>,
    pub keywords: Vec<String>,
    pub clinical_relevance: ClinicalRelevance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_relevance: Option<ExamRelevance>,
}

// ============================================================================
// Educational Content
// ============================================================================

/// A named topic explained at one or more depth levels
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EducationalContent {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub name: String,
    #[serde(default)]
    pub alternate_names: BTreeSet<String>,
    /// Spanish display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_es: Option<String>,
    /// Keyed by level number; each value's `level` must equal its key
    pub levels: BTreeMap<u8, LevelContent>,
    pub media: Vec<MediaAsset>,
    pub citations: Vec<Citation>,
    pub cross_references: Vec<CrossReference>,
    pub tags: ContentTags,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: u32,
    pub status: PublicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributors: Option<Vec<String>>,
}

impl EducationalContent {
    /// Get the content for one level, if authored
    pub fn level(&self, level: u8) -> Option<&LevelContent> {
        self.levels.get(&level)
    }

    /// Authored level numbers, ascending
    pub fn level_numbers(&self) -> Vec<u8> {
        self.levels.keys().copied().collect()
    }
}

// ============================================================================
// Authoring helpers
// ============================================================================

/// Build a key term without a pronunciation
pub fn term(term: impl Into<String>, definition: impl Into<String>) -> KeyTerm {
    KeyTerm {
        term: term.into(),
        definition: definition.into(),
        pronunciation: None,
    }
}

/// Build a cross-reference edge
pub fn cross_ref(
    target_id: impl Into<String>,
    target_type: ContentType,
    relationship: Relationship,
    label: impl Into<String>,
) -> CrossReference {
    CrossReference {
        target_id: target_id.into(),
        target_type,
        relationship,
        label: label.into(),
    }
}

/// Collect levels into the level map, keyed by each level's own number
pub fn levels(items: impl IntoIterator<Item = LevelContent>) -> BTreeMap<u8, LevelContent> {
    items.into_iter().map(|l| (l.level, l)).collect()
}

/// Midnight UTC on an authoring date
///
/// Invalid dates collapse to the Unix epoch, which the integrity checks
/// flag as `updatedAt` preceding `createdAt` or as an unset timestamp.
pub fn authored(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        for category in SexualHealthCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            assert_eq!(category.as_str().parse::<SexualHealthCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!("viral".parse::<SexualHealthCategory>().is_err());
        let parsed: std::result::Result<SexualHealthCategory, _> =
            serde_json::from_str("\"sti-fungal\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_category_parse_ignores_case() {
        assert_eq!(
            "LGBTQ-Health".parse::<SexualHealthCategory>().unwrap(),
            SexualHealthCategory::LgbtqHealth
        );
    }

    #[test]
    fn test_clinical_relevance_accepts_medium() {
        let parsed: ClinicalRelevance = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, ClinicalRelevance::Moderate);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"moderate\"");
    }

    #[test]
    fn test_contract_field_names() {
        let level = LevelContent::new(2, "summary", "explanation")
            .with_terms([term("NAAT", "Nucleic acid amplification test")])
            .with_counseling(["Retest at 3 months."]);
        let json = serde_json::to_value(&level).unwrap();
        assert!(json.get("keyTerms").is_some());
        assert!(json.get("patientCounselingPoints").is_some());
        // Empty optional sequences are omitted
        assert!(json.get("analogies").is_none());
        assert!(json.get("clinicalNotes").is_none());

        let edge = cross_ref("hiv-prep", ContentType::Topic, Relationship::SeeAlso, "PrEP");
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json["targetId"], "hiv-prep");
        assert_eq!(json["relationship"], "see-also");
    }

    #[test]
    fn test_levels_keyed_by_level_number() {
        let map = levels([
            LevelContent::new(3, "c", "c"),
            LevelContent::new(1, "a", "a"),
        ]);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert!(map.iter().all(|(k, v)| *k == v.level));
    }

    #[test]
    fn test_authored_dates() {
        let date = authored(2026, 1, 30);
        assert_eq!(date.to_rfc3339(), "2026-01-30T00:00:00+00:00");
        assert_eq!(authored(2026, 2, 30), DateTime::<Utc>::default());
    }
}
