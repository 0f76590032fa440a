//! # Startup Artifacts
//!
//! The dashboard ships next to a serialized regression model and the dataset
//! it was trained on. Neither is used to draw anything; both must exist or the
//! run is aborted.
//!
//! Verification reads only what it reports: the model's size and the
//! dataset's header row and row count. No content validation is done.

use crate::DashboardError;
use crate::primitives::{DEFAULT_DATASET_PATH, DEFAULT_MODEL_PATH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths of the model and dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    pub model: PathBuf,
    pub dataset: PathBuf,
}

/// What verification found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSummary {
    pub model_path: PathBuf,
    pub model_bytes: u64,
    pub dataset_path: PathBuf,
    pub dataset_columns: Vec<String>,
    /// Data rows, header excluded.
    pub dataset_rows: usize,
}

impl ArtifactSet {
    #[must_use]
    pub fn new(model: impl Into<PathBuf>, dataset: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            dataset: dataset.into(),
        }
    }

    /// Default artifact locations under `root`.
    #[must_use]
    pub fn under_root(root: &Path) -> Self {
        Self::new(root.join(DEFAULT_MODEL_PATH), root.join(DEFAULT_DATASET_PATH))
    }

    /// Check both artifacts. The model is checked first.
    pub fn verify(&self) -> Result<ArtifactSummary, DashboardError> {
        let model_bytes = require_file(&self.model, "model")?;
        require_file(&self.dataset, "dataset")?;
        let (dataset_columns, dataset_rows) = summarize_csv(&self.dataset)?;

        Ok(ArtifactSummary {
            model_path: self.model.clone(),
            model_bytes,
            dataset_path: self.dataset.clone(),
            dataset_columns,
            dataset_rows,
        })
    }
}

/// Return the file's length, or `MissingArtifact` when it is not a regular file.
fn require_file(path: &Path, kind: &'static str) -> Result<u64, DashboardError> {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => Ok(metadata.len()),
        _ => Err(DashboardError::MissingArtifact {
            kind,
            path: path.display().to_string(),
        }),
    }
}

/// Header columns and data record count.
///
/// Quoted fields may hold commas and newlines. Ragged rows are counted,
/// not rejected; blank lines are skipped.
fn summarize_csv(path: &Path) -> Result<(Vec<String>, usize), DashboardError> {
    let csv_error = |e: csv::Error| {
        DashboardError::IoError(format!("Cannot read dataset '{}': {}", path.display(), e))
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(csv_error)?;

    let columns = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|column| column.trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut rows = 0;
    for record in reader.records() {
        record.map_err(csv_error)?;
        rows += 1;
    }

    Ok((columns, rows))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_artifacts(root: &Path, csv: &str) -> ArtifactSet {
        let set = ArtifactSet::under_root(root);
        for path in [&set.model, &set.dataset] {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("mkdir");
            }
        }
        fs::write(&set.model, [0u8; 16]).expect("model");
        fs::write(&set.dataset, csv).expect("dataset");
        set
    }

    #[test]
    fn verify_summarizes_both_artifacts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let set = write_artifacts(
            dir.path(),
            "\"game\",platform,revenue\nA,PC,10\nB,PS5,20\n\n",
        );

        let summary = set.verify().expect("verify");
        assert_eq!(summary.model_bytes, 16);
        assert_eq!(summary.dataset_columns, vec!["game", "platform", "revenue"]);
        assert_eq!(summary.dataset_rows, 2);
    }

    #[test]
    fn quoted_fields_keep_commas_and_newlines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let set = write_artifacts(dir.path(), "\"revenue, USD\",dau\n1,\"multi\nline\"\n");

        let summary = set.verify().expect("verify");
        assert_eq!(summary.dataset_columns, vec!["revenue, USD", "dau"]);
        assert_eq!(summary.dataset_rows, 1);
    }

    #[test]
    fn missing_model_is_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let set = write_artifacts(dir.path(), "a\n");
        fs::remove_file(&set.model).expect("rm");

        let result = set.verify();
        assert!(matches!(
            result,
            Err(DashboardError::MissingArtifact { kind: "model", .. })
        ));
    }

    #[test]
    fn missing_dataset_is_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let set = write_artifacts(dir.path(), "a\n");
        fs::remove_file(&set.dataset).expect("rm");

        let result = set.verify();
        assert!(matches!(
            result,
            Err(DashboardError::MissingArtifact { kind: "dataset", .. })
        ));
    }

    #[test]
    fn directory_is_not_an_artifact() {
        let dir = tempfile::tempdir().expect("tempdir");
        let set = ArtifactSet::new(dir.path(), dir.path());
        assert!(set.verify().is_err());
    }

    #[test]
    fn empty_dataset_has_no_columns() {
        let dir = tempfile::tempdir().expect("tempdir");
        let set = write_artifacts(dir.path(), "");
        let summary = set.verify().expect("verify");
        assert!(summary.dataset_columns.is_empty());
        assert_eq!(summary.dataset_rows, 0);
    }
}
