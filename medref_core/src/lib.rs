#![forbid(unsafe_code)]

//! Core data model and data-access layer for the medref content corpus.
//!
//! This crate provides:
//! - Content types (flat database entries, multi-level educational content)
//! - The sexual-health category database and its queries
//! - Module families and the registry built from them
//! - Corpus integrity checks
//! - CSV and JSON export

pub mod types;
pub mod error;
pub mod database;
pub mod sexual_health;
pub mod content;
pub mod registry;
pub mod corpus;
pub mod integrity;
pub mod export;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use database::CategoryDatabase;
pub use sexual_health::{
    filter_by_category, get_entry_by_id, search_sexual_health_entries, sexual_health_database,
};
pub use registry::{ModuleDef, ModuleFamily, RegisteredModule, Registry};
pub use corpus::{corpus, ContentRef, Corpus};
pub use integrity::{DanglingPolicy, IntegrityConfig, IntegrityReport, Issue, IssueKind, Severity};
pub use export::{export_entries_csv, export_json};
pub use config::{Config, OutputFormat};
