use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::Result;
use crate::models::question::QuestionBank;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("question file {} does not exist", path.display())]
    Missing { path: PathBuf },

    #[error("question file {} could not be read: {detail}", path.display())]
    Unreadable { path: PathBuf, detail: String },

    #[error("question file {} is malformed: {detail}", path.display())]
    Malformed { path: PathBuf, detail: String },
}

/// Reads and parses the bank at `path`. No caching happens here.
pub fn load(path: &Path) -> std::result::Result<QuestionBank, LoadError> {
    let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LoadError::Missing {
            path: path.to_path_buf(),
        },
        _ => LoadError::Unreadable {
            path: path.to_path_buf(),
            detail: e.to_string(),
        },
    })?;

    serde_json::from_str(&raw).map_err(|e| LoadError::Malformed {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}

/// Load-once snapshot of the bank shared by every handler.
///
/// A failed load is kept rather than aborting startup, so question endpoints
/// can report it while the rest of the API keeps serving.
#[derive(Debug, Clone)]
pub struct QuestionStore {
    state: std::result::Result<Arc<QuestionBank>, LoadError>,
}

impl QuestionStore {
    pub fn open(path: &Path) -> Self {
        let state = load(path).map(Arc::new);
        match &state {
            Ok(bank) => tracing::info!(
                path = %path.display(),
                hr = bank.hr.len(),
                topics = bank.technical.len(),
                total = bank.total_questions(),
                "Question bank loaded"
            ),
            Err(e) => tracing::error!(error = %e, "Question bank failed to load"),
        }
        Self { state }
    }

    pub fn from_bank(bank: QuestionBank) -> Self {
        Self {
            state: Ok(Arc::new(bank)),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_ok()
    }

    pub fn bank(&self) -> Result<&QuestionBank> {
        match &self.state {
            Ok(bank) => Ok(bank.as_ref()),
            Err(e) => Err(e.clone().into()),
        }
    }
}
