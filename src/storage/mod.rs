//! Filesystem store for competition data.
//!
//! The computation core treats this as a read-only collaborator: JSONL
//! files partitioned per competition, written only by the `import` CLI
//! command (the stand-in for the external CRUD flows).

use std::path::PathBuf;
use thiserror::Error;

mod jsonl;

pub use jsonl::*;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for store paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Per-competition entity files live under here.
    pub fn normalized_dir(&self) -> PathBuf {
        self.data_dir.join("normalized")
    }

    /// Global competition registry file.
    pub fn competitions_path(&self) -> PathBuf {
        self.data_dir.join("competitions.jsonl")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
