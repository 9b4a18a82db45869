use crate::error::{Result, TeamHubError};
use crate::paths;
use crate::record::{self, TeamRecord};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

pub const STORE_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// RecordStore
// ---------------------------------------------------------------------------

/// Durable collection of team records. Every mutation rewrites the whole
/// collection; there are no partial writes.
pub trait RecordStore {
    /// Current collection in insertion order. Missing or unreadable data
    /// yields an empty collection.
    fn load(&self) -> Vec<TeamRecord>;

    fn replace_all(&mut self, records: &[TeamRecord]) -> Result<()>;

    fn add(&mut self, record: TeamRecord) -> Result<()> {
        let mut records = self.load();
        records.push(record);
        self.replace_all(&records)
    }

    fn update(&mut self, record: TeamRecord) -> Result<()> {
        let mut records = self.load();
        record::replace(&mut records, record)?;
        self.replace_all(&records)
    }

    fn delete(&mut self, id: &str) -> Result<TeamRecord> {
        let mut records = self.load();
        let removed = record::remove(&mut records, id)?;
        self.replace_all(&records)?;
        Ok(removed)
    }

    fn get(&self, id: &str) -> Result<TeamRecord> {
        record::find(&self.load(), id).cloned()
    }
}

// ---------------------------------------------------------------------------
// On-disk document
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct StoreDocument<'a> {
    version: u32,
    teams: &'a [TeamRecord],
}

/// Parse a persisted blob. Accepts the versioned document or a bare array.
/// A record that fails to decode is skipped on its own; a blob that is not
/// a team list at all reads as an empty collection.
pub fn decode(data: &str) -> Vec<TeamRecord> {
    let doc: Value = match serde_json::from_str(data) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!(error = %e, "team store is malformed, starting empty");
            return Vec::new();
        }
    };

    let items = match doc {
        Value::Array(items) => items,
        Value::Object(mut doc) => {
            if let Some(version) = doc
                .get("version")
                .and_then(Value::as_u64)
                .filter(|&v| v > u64::from(STORE_VERSION))
            {
                tracing::warn!(version, "team store written by a newer version");
            }
            match doc.remove("teams") {
                Some(Value::Array(items)) => items,
                _ => {
                    tracing::warn!("team store has no teams list, starting empty");
                    return Vec::new();
                }
            }
        }
        _ => {
            tracing::warn!("team store is not a team list, starting empty");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping unreadable team record");
                None
            }
        })
        .collect()
}

pub fn encode(records: &[TeamRecord]) -> Result<String> {
    let doc = StoreDocument {
        version: STORE_VERSION,
        teams: records,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

// ---------------------------------------------------------------------------
// JsonFileStore
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<root>/.teamhub/<file>`.
    pub fn in_root(root: &Path, file: &str) -> Self {
        Self::new(paths::store_path(root, file))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Vec<TeamRecord> {
        match crate::io::read_if_exists(&self.path) {
            Ok(Some(data)) => {
                let records = decode(&data);
                tracing::debug!(path = %self.path.display(), count = records.len(), "loaded teams");
                records
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "cannot read team store");
                Vec::new()
            }
        }
    }

    fn replace_all(&mut self, records: &[TeamRecord]) -> Result<()> {
        let data = encode(records)?;
        crate::io::atomic_write(&self.path, data.as_bytes()).map_err(|e| {
            TeamHubError::PersistenceUnavailable(format!("{}: {e}", self.path.display()))
        })?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "saved teams");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-process store. Keeps the serialized blob, like the file store, so
/// reloads go through the same decode path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
            fail_writes: false,
        }
    }

    /// Make every subsequent write fail with `PersistenceUnavailable`.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Vec<TeamRecord> {
        self.blob.as_deref().map(decode).unwrap_or_default()
    }

    fn replace_all(&mut self, records: &[TeamRecord]) -> Result<()> {
        if self.fail_writes {
            return Err(TeamHubError::PersistenceUnavailable(
                "memory store is read-only".to_string(),
            ));
        }
        self.blob = Some(encode(records)?);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
