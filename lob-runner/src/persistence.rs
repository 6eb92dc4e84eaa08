//! JSON persistence of pipeline artifacts

use crate::pipeline::Dataset;
use crate::report::{AnalysisResult, DatasetSummary};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const LOB_DATA_FILE: &str = "lob_data.json";
pub const FEATURES_FILE: &str = "features_data.json";
pub const RESULTS_FILE: &str = "model_results.json";
pub const SUMMARY_FILE: &str = "summary.json";

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error on '{path}': {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PersistenceError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        PersistenceError::Serialize {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Serialize `value` as indented JSON, replacing any existing file
pub fn write_json<T: Serialize + ?Sized>(
    path: impl AsRef<Path>,
    value: &T,
) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| PersistenceError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| PersistenceError::json(path, e))?;
    writer.flush().map_err(|e| PersistenceError::io(path, e))
}

pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, PersistenceError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| PersistenceError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| PersistenceError::json(path, e))
}

/// Output directory holding the artifacts of one run
#[derive(Debug, Clone)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    /// Use `root`, creating it (and any parents) if missing
    pub fn create(root: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| PersistenceError::io(&root, e))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    /// Write the first `limit` snapshots and feature records
    pub fn write_dataset(&self, dataset: &Dataset, limit: usize) -> Result<(), PersistenceError> {
        let snapshots = &dataset.snapshots[..limit.min(dataset.snapshots.len())];
        let features = &dataset.features[..limit.min(dataset.features.len())];
        write_json(self.path(LOB_DATA_FILE), snapshots)?;
        write_json(self.path(FEATURES_FILE), features)?;
        log::info!(
            "Saved {} snapshots and {} feature records to {}",
            snapshots.len(),
            features.len(),
            self.root.display()
        );
        Ok(())
    }

    pub fn write_results(
        &self,
        result: &AnalysisResult,
        summary: &DatasetSummary,
    ) -> Result<(), PersistenceError> {
        write_json(self.path(RESULTS_FILE), result)?;
        write_json(self.path(SUMMARY_FILE), summary)?;
        log::info!("Saved model results to {}", self.root.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("lob-runner-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_write_then_read() {
        let dir = OutputDir::create(scratch_dir("persistence")).unwrap();
        let mut value = BTreeMap::new();
        value.insert("alpha".to_string(), 0.1);
        value.insert("beta".to_string(), 0.85);

        let path = dir.path("params.json");
        write_json(&path, &value).unwrap();
        let loaded: BTreeMap<String, f64> = read_json(&path).unwrap();
        assert_eq!(loaded, value);

        fs::remove_dir_all(dir.root()).ok();
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = read_json::<Vec<f64>>("/nonexistent/lob-runner/missing.json").unwrap_err();
        assert!(matches!(err, PersistenceError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_malformed_json_is_serialize_error() {
        let dir = OutputDir::create(scratch_dir("malformed")).unwrap();
        let path = dir.path("bad.json");
        fs::write(&path, "[1, 2,").unwrap();
        let err = read_json::<Vec<f64>>(&path).unwrap_err();
        assert!(matches!(err, PersistenceError::Serialize { .. }));

        fs::remove_dir_all(dir.root()).ok();
    }
}
