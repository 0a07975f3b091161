//! Corpus export to CSV and JSON.
//!
//! Both writers go through a temp file in the target directory that is
//! locked, synced and then renamed over the destination, so a reader never
//! sees a half-written export.

use crate::corpus::Corpus;
use crate::registry::RegisteredModule;
use crate::{ContentEntry, Error, Result};
use fs2::FileExt;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Separator for list fields flattened into one CSV cell
pub const LIST_SEPARATOR: &str = " | ";

/// A row in the entries CSV
#[derive(Debug, Serialize)]
struct EntryRow<'a> {
    id: &'a str,
    name: &'a str,
    category: &'static str,
    description: &'a str,
    epidemiology: &'a str,
    pathophysiology: &'a str,
    clinical_presentation: &'a str,
    diagnostic_workup: &'a str,
    management: &'a str,
    prevention: &'a str,
    key_pearls: String,
    references: String,
}

impl<'a> From<&'a ContentEntry> for EntryRow<'a> {
    fn from(entry: &'a ContentEntry) -> Self {
        EntryRow {
            id: &entry.id,
            name: &entry.name,
            category: entry.category.as_str(),
            description: &entry.description,
            epidemiology: &entry.epidemiology,
            pathophysiology: &entry.pathophysiology,
            clinical_presentation: &entry.clinical_presentation,
            diagnostic_workup: &entry.diagnostic_workup,
            management: &entry.management,
            prevention: &entry.prevention,
            key_pearls: entry.key_pearls.join(LIST_SEPARATOR),
            references: entry.references.join(LIST_SEPARATOR),
        }
    }
}

/// Full JSON snapshot of the corpus
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    database: &'a str,
    entries: &'a [ContentEntry],
    modules: Vec<&'a RegisteredModule>,
}

/// Write one CSV row per entry, with a header row
///
/// Returns the number of entries written.
pub fn export_entries_csv<'a, I>(entries: I, path: &Path) -> Result<usize>
where
    I: IntoIterator<Item = &'a ContentEntry>,
{
    let mut count = 0;
    write_atomically(path, |file| {
        let mut writer = csv::WriterBuilder::new().has_headers(true).from_writer(file);
        for entry in entries {
            writer.serialize(EntryRow::from(entry))?;
            count += 1;
        }
        writer.flush()?;
        Ok(())
    })?;

    tracing::info!("Exported {} entries to {:?}", count, path);
    Ok(count)
}

/// Write the sexual-health database and every registered module as pretty JSON
pub fn export_json(corpus: &Corpus, path: &Path) -> Result<()> {
    let snapshot = Snapshot {
        database: corpus.sexual_health().name(),
        entries: corpus.sexual_health().entries(),
        modules: corpus.modules().collect(),
    };

    write_atomically(path, |file| {
        serde_json::to_writer_pretty(&mut *file, &snapshot)?;
        file.write_all(b"\n")?;
        Ok(())
    })?;

    tracing::info!(
        "Exported {} entries and {} modules to {:?}",
        snapshot.entries.len(),
        snapshot.modules.len(),
        path
    );
    Ok(())
}

fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut std::io::BufWriter<&std::fs::File>) -> Result<()>,
{
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;
    temp.as_file().lock_exclusive()?;

    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        write(&mut writer)?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.as_file().unlock()?;
    temp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::corpus;
    use crate::sexual_health::{filter_by_category, sexual_health_database};
    use crate::SexualHealthCategory;

    #[test]
    fn test_export_entries_csv() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("entries.csv");

        let hiv = filter_by_category(&[SexualHealthCategory::Hiv]);
        let count = export_entries_csv(hiv.iter().copied(), &path).unwrap();
        assert_eq!(count, 6);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "id");
        assert_eq!(&headers[10], "key_pearls");

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(&rows[0][2], "hiv");
        assert_eq!(&rows[0][10], hiv[0].key_pearls.join(LIST_SEPARATOR));
    }

    #[test]
    fn test_export_entries_csv_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("empty.csv");
        let count = export_entries_csv(std::iter::empty(), &path).unwrap();
        assert_eq!(count, 0);
        assert!(path.exists());
    }

    #[test]
    fn test_export_json_snapshot() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("corpus.json");
        let corpus = corpus().unwrap();

        export_json(corpus, &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["database"], "sexual-health");
        assert_eq!(
            value["entries"].as_array().unwrap().len(),
            sexual_health_database().len()
        );
        let modules = value["modules"].as_array().unwrap();
        assert_eq!(modules.len(), corpus.registry().len());
        assert_eq!(modules[0]["family"], "reproductive");
        assert!(modules[0]["content"]["levels"]["1"]["summary"].is_string());
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("entries.csv");
        std::fs::write(&path, "stale").unwrap();

        export_entries_csv(sexual_health_database().iter().take(1), &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("id,name,category"));
        assert!(!contents.contains("stale"));
    }
}
