use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::records::{RawAnalysis, RawProperty};

/// One consistent read of the CMS: properties plus their analyses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub properties: Vec<RawProperty>,
    pub analyses: Vec<RawAnalysis>,
}

impl Snapshot {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}

/// Source of dashboard snapshots so the service can be exercised in isolation.
pub trait SnapshotSource: Send + Sync {
    fn snapshot(&self) -> Result<Snapshot, SnapshotError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid snapshot JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("snapshot source unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshot {
    snapshot: Snapshot,
}

impl InMemorySnapshot {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

impl SnapshotSource for InMemorySnapshot {
    fn snapshot(&self) -> Result<Snapshot, SnapshotError> {
        Ok(self.snapshot.clone())
    }
}

/// Re-reads the file on every call so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshot {
    path: PathBuf,
}

impl JsonFileSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for JsonFileSnapshot {
    fn snapshot(&self) -> Result<Snapshot, SnapshotError> {
        let file = std::fs::File::open(&self.path).map_err(|source| SnapshotError::Io {
            path: self.path.clone(),
            source,
        })?;
        Snapshot::from_reader(std::io::BufReader::new(file)).map_err(|source| SnapshotError::Json {
            path: self.path.clone(),
            source,
        })
    }
}
