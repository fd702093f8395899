//! Append-only log of finished battle sequences.

use crate::core::error::ResultLogError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub currency: u32,
    /// Unix timestamp (seconds) of when the record was appended.
    #[serde(default)]
    pub recorded_at: i64,
}

impl ResultRecord {
    pub fn new(name: impl Into<String>, score: u32, currency: u32) -> Self {
        Self {
            name: name.into(),
            score,
            currency,
            recorded_at: chrono::Utc::now().timestamp(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultLog {
    records: Vec<ResultRecord>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: ResultRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Platform data directory location of the log file.
    pub fn default_path() -> Result<PathBuf, ResultLogError> {
        let dirs = ProjectDirs::from("", "", "arena").ok_or(ResultLogError::NoDataDir)?;
        Ok(dirs.data_dir().join("results.json"))
    }

    /// Loads a log from `path`. A missing file is an empty log.
    pub fn load(path: &Path) -> Result<Self, ResultLogError> {
        match fs::read_to_string(path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ResultLogError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        tracing::debug!("Saved {} result records to {}", self.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let mut log = ResultLog::new();
        log.append(ResultRecord::new("A", 30, 100));
        log.append(ResultRecord::new("B", 90, 0));
        let names: Vec<_> = log.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("results.json");

        let mut log = ResultLog::new();
        log.append(ResultRecord::new("Atreus", 260, 70));
        log.save(&path).unwrap();

        let loaded = ResultLog::load(&path).unwrap();
        assert_eq!(loaded, log);
    }

    #[test]
    fn test_default_path_points_at_results_file() {
        // Headless environments may have no home directory to resolve.
        match ResultLog::default_path() {
            Ok(path) => {
                assert!(path.ends_with("results.json"));
                assert!(path.is_absolute());
            }
            Err(err) => assert!(matches!(err, ResultLogError::NoDataDir)),
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = ResultLog::load(&dir.path().join("absent.json")).unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn test_load_tolerates_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        fs::write(&path, r#"[{"name":"Old"},{"score":40}]"#).unwrap();

        let log = ResultLog::load(&path).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[0].score, 0);
        assert_eq!(log.records()[1].name, "");
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            ResultLog::load(&path),
            Err(ResultLogError::Serde(_))
        ));
    }
}
