//! Saved-analytics store.
//!
//! A single JSON file holding an array of [`SavedAnalytics`] records.
//! A missing file reads as an empty store.

use crate::parser::schema::{MetricsSnapshot, SavedAnalytics};
use crate::utils::config::SAVED_ID_PREFIX;
use crate::utils::error::StoreError;
use chrono::Utc;
use log::{debug, info};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Build a record for `metrics` computed from `source_path`
///
/// **Public** - used by `analyze --save`
pub fn new_saved_analytics(
    source_path: &Path,
    metrics: &MetricsSnapshot,
    prefix: &str,
) -> SavedAnalytics {
    let now = Utc::now();
    let filename = source_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    SavedAnalytics {
        id: format!("{}{}", SAVED_ID_PREFIX, now.timestamp_millis()),
        filename,
        metrics: metrics.clone(),
        saved_at: now.to_rfc3339(),
        prefix: prefix.to_string(),
    }
}

/// JSON-file backed list of saved snapshots
#[derive(Debug, Clone)]
pub struct AnalyticsStore {
    path: PathBuf,
}

impl AnalyticsStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records, oldest first
    pub fn load(&self) -> Result<Vec<SavedAnalytics>, StoreError> {
        if !self.path.exists() {
            debug!("Store {} does not exist yet", self.path.display());
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let records: Vec<SavedAnalytics> = serde_json::from_reader(file)?;
        debug!("Loaded {} saved analytics", records.len());
        Ok(records)
    }

    /// Append a record and rewrite the store
    pub fn save(&self, record: SavedAnalytics) -> Result<(), StoreError> {
        let mut records = self.load()?;
        info!(
            "Saving analytics \"{} - {}\" as {}",
            record.prefix, record.filename, record.id
        );
        records.push(record);
        self.write_all(&records)
    }

    /// Remove a record by id
    ///
    /// # Errors
    /// * `StoreError::NotFound` - no record carries `id`
    pub fn remove(&self, id: &str) -> Result<SavedAnalytics, StoreError> {
        let mut records = self.load()?;
        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let removed = records.remove(index);
        self.write_all(&records)?;
        Ok(removed)
    }

    fn write_all(&self, records: &[SavedAnalytics]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(writer, records)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, prefix: &str) -> SavedAnalytics {
        SavedAnalytics {
            id: id.to_string(),
            filename: "sales".to_string(),
            metrics: MetricsSnapshot::default(),
            saved_at: "2025-01-01T00:00:00+00:00".to_string(),
            prefix: prefix.to_string(),
        }
    }

    #[test]
    fn test_missing_store_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = AnalyticsStore::open(dir.path().join("none.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_appends_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = AnalyticsStore::open(dir.path().join("store.json"));

        store.save(record("analytics-1", "Q1")).unwrap();
        store.save(record("analytics-2", "Q2")).unwrap();

        let ids: Vec<String> = store.load().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["analytics-1", "analytics-2"]);
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = AnalyticsStore::open(dir.path().join("store.json"));
        store.save(record("analytics-1", "Q1")).unwrap();

        assert_eq!(store.remove("analytics-1").unwrap().prefix, "Q1");
        assert!(store.load().unwrap().is_empty());
        assert!(matches!(
            store.remove("analytics-1"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_corrupt_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let store = AnalyticsStore::open(&path);
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_new_saved_analytics_strips_extension() {
        let saved = new_saved_analytics(
            Path::new("data/test-case-1.txt"),
            &MetricsSnapshot::default(),
            "January",
        );
        assert_eq!(saved.filename, "test-case-1");
        assert_eq!(saved.prefix, "January");
        assert!(saved.id.starts_with("analytics-"));
    }
}
