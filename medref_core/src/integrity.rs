//! Corpus integrity checks.
//!
//! Checks collect every problem into an [`IntegrityReport`] instead of
//! stopping at the first one. Callers decide what to do with errors; the CLI
//! refuses to run on a corpus that has any.

use crate::corpus::Corpus;
use crate::{ContentEntry, EducationalContent, Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

const LEVEL_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// Authoring markers, matched as whole words in any case
static PLACEHOLDER: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?i)\b(todo|fixme|placeholder|lorem ipsum)\b").ok());

/// How to treat cross-references whose target id exists nowhere in the corpus
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DanglingPolicy {
    Ignore,
    #[default]
    Warn,
    Error,
}

/// Integrity check settings (the `[integrity]` config section)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityConfig {
    #[serde(default)]
    pub dangling_references: DanglingPolicy,

    /// Require every module to author all five levels
    #[serde(default)]
    pub require_all_levels: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    EmptyId,
    EmptyName,
    DuplicateId,
    EmptyField,
    EmptyList,
    NoLevels,
    LevelOutOfRange,
    LevelKeyMismatch,
    MissingLevel,
    EmptyKeyTerm,
    DuplicateKeyTerm,
    Placeholder,
    InvalidVersion,
    InvalidTimestamps,
    DuplicateCitation,
    DuplicateMedia,
    EmptyMediaFilename,
    EmptyCrossReference,
    DanglingReference,
    TargetTypeMismatch,
    SharedId,
}

/// One integrity problem, attributed to the id it was found on
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    pub subject: String,
    pub kind: IssueKind,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.subject, self.message)
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct IntegrityReport {
    pub issues: Vec<Issue>,
}

impl IntegrityReport {
    fn push(&mut self, severity: Severity, subject: &str, kind: IssueKind, message: String) {
        self.issues.push(Issue {
            severity,
            subject: subject.to_string(),
            kind,
            message,
        });
    }

    fn error(&mut self, subject: &str, kind: IssueKind, message: String) {
        self.push(Severity::Error, subject, kind, message);
    }

    fn warning(&mut self, subject: &str, kind: IssueKind, message: String) {
        self.push(Severity::Warning, subject, kind, message);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Turn a report with errors into `Error::CatalogValidation`
    pub fn into_result(self) -> Result<Self> {
        if !self.has_errors() {
            return Ok(self);
        }
        let messages: Vec<String> = self.errors().map(|i| i.to_string()).collect();
        Err(Error::CatalogValidation(format!(
            "{} error(s): {}",
            messages.len(),
            messages.join("; ")
        )))
    }
}

impl Corpus {
    /// Run every integrity check over the corpus
    pub fn check(&self, config: &IntegrityConfig) -> IntegrityReport {
        let mut report = IntegrityReport::default();

        check_entries(self.sexual_health().entries(), &mut report);
        for module in self.modules() {
            check_module(&module.content, config, &mut report);
        }

        let entry_ids: HashSet<&str> = self.sexual_health().ids().collect();
        for module in self.modules() {
            if entry_ids.contains(module.content.id.as_str()) {
                report.error(
                    &module.content.id,
                    IssueKind::SharedId,
                    format!(
                        "id is used both by a '{}' entry and by module '{}/{}'",
                        self.sexual_health().name(),
                        module.family,
                        module.slug
                    ),
                );
            }
        }

        let known = self.known_ids();
        let modules_by_id: HashMap<&str, &EducationalContent> = self
            .modules()
            .map(|m| (m.content.id.as_str(), &m.content))
            .collect();
        for module in self.modules() {
            check_cross_references(&module.content, &known, &modules_by_id, config, &mut report);
        }

        for issue in report.warnings() {
            tracing::warn!("{}", issue);
        }
        tracing::debug!(
            "Integrity check finished: {} error(s), {} warning(s)",
            report.errors().count(),
            report.warnings().count()
        );
        report
    }
}

/// Check a database's entries for missing or empty required content
pub fn check_entries(entries: &[ContentEntry], report: &mut IntegrityReport) {
    let mut seen = HashSet::new();

    for entry in entries {
        let subject = if entry.id.is_empty() { "<empty id>" } else { entry.id.as_str() };

        if entry.id.is_empty() {
            report.error(subject, IssueKind::EmptyId, format!("entry '{}' has an empty id", entry.name));
        } else if !seen.insert(entry.id.as_str()) {
            report.error(subject, IssueKind::DuplicateId, "entry id appears more than once".into());
        }
        if entry.name.trim().is_empty() {
            report.error(subject, IssueKind::EmptyName, "entry has an empty name".into());
        }

        for (field, text) in entry.prose_fields() {
            if text.trim().is_empty() {
                report.error(subject, IssueKind::EmptyField, format!("'{}' is empty", field));
            } else {
                check_placeholder(subject, field, text, report);
            }
        }

        if entry.key_pearls.is_empty() {
            report.warning(subject, IssueKind::EmptyList, "no key pearls".into());
        }
        if entry.references.is_empty() {
            report.warning(subject, IssueKind::EmptyList, "no references".into());
        }
    }
}

/// Check one educational content module in isolation
pub fn check_module(content: &EducationalContent, config: &IntegrityConfig, report: &mut IntegrityReport) {
    let subject = if content.id.is_empty() { "<empty id>" } else { content.id.as_str() };

    if content.id.is_empty() {
        report.error(subject, IssueKind::EmptyId, format!("module '{}' has an empty id", content.name));
    }
    if content.name.trim().is_empty() {
        report.error(subject, IssueKind::EmptyName, "module has an empty name".into());
    }
    if content.name_es.as_deref().is_some_and(|n| n.trim().is_empty()) {
        report.error(subject, IssueKind::EmptyName, "module has an empty Spanish name".into());
    }

    if content.levels.is_empty() {
        report.error(subject, IssueKind::NoLevels, "module has no levels".into());
    }
    for (&key, level) in &content.levels {
        if !LEVEL_RANGE.contains(&key) {
            report.error(subject, IssueKind::LevelOutOfRange, format!("level {} is outside 1-5", key));
        }
        if level.level != key {
            report.error(
                subject,
                IssueKind::LevelKeyMismatch,
                format!("level stored under {} says it is level {}", key, level.level),
            );
        }
        if level.summary.trim().is_empty() {
            report.error(subject, IssueKind::EmptyField, format!("level {} summary is empty", key));
        }
        if level.explanation.trim().is_empty() {
            report.error(subject, IssueKind::EmptyField, format!("level {} explanation is empty", key));
        }
        check_placeholder(subject, &format!("level {} summary", key), &level.summary, report);
        check_placeholder(subject, &format!("level {} explanation", key), &level.explanation, report);

        let mut terms = HashSet::new();
        for term in &level.key_terms {
            if term.term.trim().is_empty() {
                report.error(subject, IssueKind::EmptyKeyTerm, format!("level {} has an empty key term", key));
                continue;
            }
            if term.definition.trim().is_empty() {
                report.error(
                    subject,
                    IssueKind::EmptyKeyTerm,
                    format!("level {} key term '{}' has no definition", key, term.term),
                );
            }
            if !terms.insert(term.term.as_str()) {
                report.error(
                    subject,
                    IssueKind::DuplicateKeyTerm,
                    format!("level {} repeats key term '{}'", key, term.term),
                );
            }
        }
    }
    if config.require_all_levels {
        for level in LEVEL_RANGE.filter(|n| !content.levels.contains_key(n)) {
            report.error(subject, IssueKind::MissingLevel, format!("level {} is missing", level));
        }
    }

    if content.version == 0 {
        report.error(subject, IssueKind::InvalidVersion, "version must be at least 1".into());
    }
    if content.updated_at < content.created_at {
        report.error(
            subject,
            IssueKind::InvalidTimestamps,
            format!("updatedAt {} precedes createdAt {}", content.updated_at, content.created_at),
        );
    }

    let mut citation_ids = HashSet::new();
    for citation in &content.citations {
        if !citation_ids.insert(citation.id.as_str()) {
            report.error(subject, IssueKind::DuplicateCitation, format!("citation '{}' appears twice", citation.id));
        }
    }

    let mut media_ids = HashSet::new();
    for asset in &content.media {
        if !media_ids.insert(asset.id.as_str()) {
            report.error(subject, IssueKind::DuplicateMedia, format!("media '{}' appears twice", asset.id));
        }
        if asset.filename.trim().is_empty() {
            report.error(subject, IssueKind::EmptyMediaFilename, format!("media '{}' has no filename", asset.id));
        }
    }

    for xref in &content.cross_references {
        if xref.target_id.trim().is_empty() {
            report.error(
                subject,
                IssueKind::EmptyCrossReference,
                format!("cross-reference '{}' has an empty target", xref.label),
            );
        }
    }
}

fn check_cross_references(
    content: &EducationalContent,
    known: &BTreeSet<&str>,
    modules_by_id: &HashMap<&str, &EducationalContent>,
    config: &IntegrityConfig,
    report: &mut IntegrityReport,
) {
    for xref in content.cross_references.iter().filter(|x| !x.target_id.trim().is_empty()) {
        if !known.contains(xref.target_id.as_str()) {
            let message = format!("cross-reference to unknown id '{}'", xref.target_id);
            match config.dangling_references {
                DanglingPolicy::Ignore => {}
                DanglingPolicy::Warn => report.warning(&content.id, IssueKind::DanglingReference, message),
                DanglingPolicy::Error => report.error(&content.id, IssueKind::DanglingReference, message),
            }
            continue;
        }

        if let Some(target) = modules_by_id.get(xref.target_id.as_str()) {
            if target.content_type != xref.target_type {
                report.warning(
                    &content.id,
                    IssueKind::TargetTypeMismatch,
                    format!(
                        "cross-reference to '{}' declares type {:?} but the module is {:?}",
                        xref.target_id, xref.target_type, target.content_type
                    ),
                );
            }
        }
    }
}

fn check_placeholder(subject: &str, field: &str, text: &str, report: &mut IntegrityReport) {
    if let Some(marker) = PLACEHOLDER.as_ref().and_then(|re| re.find(text)) {
        report.error(
            subject,
            IssueKind::Placeholder,
            format!("'{}' contains placeholder text '{}'", field, marker.as_str()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::published;
    use crate::corpus::corpus;
    use crate::registry::{ModuleDef, ModuleFamily, Registry};
    use crate::sexual_health::sexual_health_database;
    use crate::types::*;

    fn module() -> EducationalContent {
        EducationalContent {
            levels: levels([LevelContent::new(1, "Summary", "Explanation")
                .with_terms([term("alpha", "first letter")])]),
            ..published("sample", ContentType::Topic, "Sample", authored(2026, 1, 1))
        }
    }

    fn kinds(report: &IntegrityReport) -> Vec<IssueKind> {
        report.issues.iter().map(|i| i.kind).collect()
    }

    fn with_dangling_reference() -> EducationalContent {
        EducationalContent {
            cross_references: vec![
                cross_ref("chlamydia", ContentType::Condition, Relationship::Related, "Chlamydia"),
                cross_ref("algorithm-chest-pain", ContentType::Pathway, Relationship::SeeAlso, "Chest Pain"),
            ],
            ..module()
        }
    }

    fn corpus_with_dangling_reference() -> Corpus {
        const FAMILIES: &[ModuleFamily] = &[ModuleFamily {
            name: "scratch",
            modules: &[ModuleDef { slug: "sample", build: with_dangling_reference }],
        }];
        Corpus::from_parts(sexual_health_database(), Registry::build(FAMILIES).unwrap())
    }

    #[test]
    fn test_shipped_corpus_is_clean() {
        crate::logging::init_test();
        let report = corpus().unwrap().check(&IntegrityConfig::default());
        assert!(report.is_clean(), "{:?}", report.issues);
    }

    #[test]
    fn test_dangling_reference_is_reported() {
        let report = corpus_with_dangling_reference().check(&IntegrityConfig::default());
        let dangling: Vec<&Issue> = report
            .warnings()
            .filter(|i| i.kind == IssueKind::DanglingReference)
            .collect();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].subject, "sample");
        assert!(dangling[0].message.contains("algorithm-chest-pain"));
        assert!(!report.has_errors());
    }

    #[test]
    fn test_dangling_policy_controls_severity() {
        let corpus = corpus_with_dangling_reference();

        let strict = IntegrityConfig {
            dangling_references: DanglingPolicy::Error,
            ..Default::default()
        };
        let report = corpus.check(&strict);
        assert!(report.has_errors());
        assert!(matches!(report.into_result(), Err(Error::CatalogValidation(_))));

        let lax = IntegrityConfig {
            dangling_references: DanglingPolicy::Ignore,
            ..Default::default()
        };
        let report = corpus.check(&lax);
        assert!(!kinds(&report).contains(&IssueKind::DanglingReference));
    }

    #[test]
    fn test_require_all_levels() {
        let config = IntegrityConfig {
            require_all_levels: true,
            ..Default::default()
        };
        let mut report = IntegrityReport::default();
        check_module(&module(), &config, &mut report);
        assert_eq!(report.errors().filter(|i| i.kind == IssueKind::MissingLevel).count(), 4);
    }

    #[test]
    fn test_clean_module_passes() {
        let mut report = IntegrityReport::default();
        check_module(&module(), &IntegrityConfig::default(), &mut report);
        assert!(report.is_clean(), "{:?}", report.issues);
    }

    #[test]
    fn test_level_problems_detected() {
        let mut content = module();
        let mut wrong = LevelContent::new(2, "", "TODO: write this")
            .with_terms([term("beta", "b"), term("beta", "again"), term("gamma", "")]);
        wrong.level = 3;
        content.levels.insert(2, wrong);
        content.levels.insert(7, LevelContent::new(7, "Too deep", "Nobody reads level 7"));

        let mut report = IntegrityReport::default();
        check_module(&content, &IntegrityConfig::default(), &mut report);
        let found = kinds(&report);
        for expected in [
            IssueKind::LevelKeyMismatch,
            IssueKind::EmptyField,
            IssueKind::Placeholder,
            IssueKind::DuplicateKeyTerm,
            IssueKind::EmptyKeyTerm,
            IssueKind::LevelOutOfRange,
        ] {
            assert!(found.contains(&expected), "missing {:?} in {:?}", expected, found);
        }
    }

    fn placeholder_issues(explanation: &str) -> Vec<Issue> {
        let mut content = module();
        content.levels = levels([LevelContent::new(1, "Summary", explanation)]);
        let mut report = IntegrityReport::default();
        check_module(&content, &IntegrityConfig::default(), &mut report);
        report.issues.into_iter().filter(|i| i.kind == IssueKind::Placeholder).collect()
    }

    #[test]
    fn test_placeholder_markers_match_whole_words_in_any_case() {
        assert_eq!(placeholder_issues("todo: write real explanation").len(), 1);
        assert_eq!(placeholder_issues("Fixme later").len(), 1);
        assert_eq!(placeholder_issues("A PLACEHOLDER paragraph.").len(), 1);
        assert_eq!(placeholder_issues("Lorem ipsum dolor sit amet.").len(), 1);
    }

    #[test]
    fn test_clinical_text_is_not_a_placeholder() {
        assert!(placeholder_issues("Triple X syndrome has the karyotype 47,XXX.").is_empty());
        assert!(placeholder_issues("Toddlers and mastodons are unrelated.").is_empty());
        assert!(placeholder_issues("Placeholders are not a word match.").is_empty());
    }

    #[test]
    fn test_blank_spanish_name_detected() {
        let mut content = module();
        content.name_es = Some("  ".into());
        let mut report = IntegrityReport::default();
        check_module(&content, &IntegrityConfig::default(), &mut report);
        assert_eq!(kinds(&report), vec![IssueKind::EmptyName]);
    }

    #[test]
    fn test_metadata_problems_detected() {
        let mut content = module();
        content.version = 0;
        content.updated_at = authored(2025, 12, 31);
        content.citations = vec![
            crate::content::citation("c1", CitationType::Journal, "A", &[], "J"),
            crate::content::citation("c1", CitationType::Journal, "B", &[], "J"),
        ];
        content.media = vec![crate::content::media("m1", MediaType::Image, "", "T", "D")];
        content.cross_references = vec![cross_ref("", ContentType::Topic, Relationship::Related, "Nowhere")];

        let mut report = IntegrityReport::default();
        check_module(&content, &IntegrityConfig::default(), &mut report);
        let found = kinds(&report);
        for expected in [
            IssueKind::InvalidVersion,
            IssueKind::InvalidTimestamps,
            IssueKind::DuplicateCitation,
            IssueKind::EmptyMediaFilename,
            IssueKind::EmptyCrossReference,
        ] {
            assert!(found.contains(&expected), "missing {:?} in {:?}", expected, found);
        }
    }

    #[test]
    fn test_entry_problems_detected() {
        let mut entries: Vec<ContentEntry> = crate::sexual_health::sexual_health_database()
            .iter()
            .take(2)
            .cloned()
            .collect();
        entries[1].id = entries[0].id.clone();
        entries[1].management = "   ".into();
        entries[1].key_pearls.clear();

        let mut report = IntegrityReport::default();
        check_entries(&entries, &mut report);
        assert_eq!(
            report.errors().map(|i| i.kind).collect::<Vec<_>>(),
            vec![IssueKind::DuplicateId, IssueKind::EmptyField]
        );
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn test_policy_parses_from_toml() {
        let config: IntegrityConfig = toml::from_str("dangling_references = \"error\"").unwrap();
        assert_eq!(config.dangling_references, DanglingPolicy::Error);
        assert!(!config.require_all_levels);
    }
}
