//! Immutable in-memory store for search index snapshots.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::SnapshotError;
use crate::record::SearchRecord;

/// An immutable collection of [`SearchRecord`]s loaded from a snapshot.
///
/// The store is built once per documentation snapshot and never mutated;
/// there are no update or delete operations. Replacing the index (e.g. on a
/// documentation redeploy) means constructing a new store and swapping the
/// shared reference. Because the store owns plain `String` data with no
/// interior mutability, it is `Send + Sync` and may be shared across any
/// number of concurrent searches without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStore {
    records: Vec<SearchRecord>,
}

impl IndexStore {
    /// Parses a snapshot into a store.
    ///
    /// Accepts the three framings documentation generators emit:
    /// a bare JSON array of records, a JSON object with a `docs` array, or
    /// the JavaScript assignment wrapper (`var searchIndex = {"docs": ...}`)
    /// that ships alongside rendered pages.
    ///
    /// An empty record sequence is a valid snapshot; the resulting store
    /// matches nothing. Anything that does not parse into well-formed
    /// records fails with [`SnapshotError::MalformedSnapshot`].
    pub fn load(snapshot: &str) -> Result<Self, SnapshotError> {
        let start = std::time::Instant::now();
        let records = parse_records(strip_assignment(snapshot))?;
        tracing::debug!(
            "Loaded search index: {} records in {:?}",
            records.len(),
            start.elapsed()
        );
        Ok(Self { records })
    }

    /// Reads and parses a snapshot file from disk.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let snapshot = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load(&snapshot)
    }

    /// Builds a store directly from records, preserving their order.
    pub fn from_records(records: Vec<SearchRecord>) -> Self {
        Self { records }
    }

    /// All records in original load order.
    pub fn all(&self) -> &[SearchRecord] {
        &self.records
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serializes the store back into the canonical snapshot form, a JSON
    /// object with a `docs` array. `load(to_json(..))` round-trips records
    /// exactly, order included.
    pub fn to_json(&self) -> String {
        let doc = serde_json::json!({ "docs": self.records });
        doc.to_string()
    }
}

/// Strips the JavaScript assignment wrapper, if present, leaving bare JSON.
///
/// Generators emit `var documenterSearchIndex = {"docs": [...]}` so the
/// browser can include the index as a script. Everything before the first
/// JSON bracket and any trailing semicolon is framing, not data.
fn strip_assignment(snapshot: &str) -> &str {
    let start = snapshot.find(['{', '[']).unwrap_or(0);
    snapshot[start..].trim_end().trim_end_matches(';').trim_end()
}

/// Parses the JSON body into an ordered record sequence.
fn parse_records(json: &str) -> Result<Vec<SearchRecord>, SnapshotError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| SnapshotError::malformed(format!("invalid JSON: {e}")))?;

    let docs = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("docs") {
            Some(Value::Array(items)) => items,
            Some(_) => return Err(SnapshotError::malformed("`docs` field is not an array")),
            None => return Err(SnapshotError::malformed("missing `docs` array")),
        },
        _ => {
            return Err(SnapshotError::malformed(
                "expected an array of records or an object with a `docs` array",
            ));
        }
    };

    let mut records = Vec::with_capacity(docs.len());
    for (index, item) in docs.into_iter().enumerate() {
        let record = SearchRecord::deserialize(item)
            .map_err(|e| SnapshotError::malformed(format!("record {index}: {e}")))?;
        records.push(record);
    }
    Ok(records)
}
