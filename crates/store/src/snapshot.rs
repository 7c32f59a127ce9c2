//! Whole-store snapshots.
//!
//! A snapshot is the complete slot sequence, empty slots included, written as a
//! single JSON document:
//!
//! ```text
//! { "format_version": 1, "saved_at": "<RFC3339>", "slots": [null, { ... }, ...] }
//! ```
//!
//! Saving overwrites any previous snapshot, but only once every record has passed
//! [`Entity::check_storable`]; a refused save leaves the old file untouched.
//! Loading a snapshot that does not exist yields a fresh sequence of empty slots;
//! a snapshot that exists but cannot be read or decoded is an error (or `None`
//! through the non-failing facade).

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use missionstock_core::Entity;

use crate::error::PersistenceError;

/// Current snapshot layout version.
pub const FORMAT_VERSION: u32 = 1;

/// Slot count handed back when no snapshot exists yet.
pub const FRESH_LOAD_SLOTS: usize = 10;

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub file: String,
    pub directory: String,
    pub slots: usize,
}

impl core::fmt::Display for SaveReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "file '{}' saved to '{}' ({} slots)",
            self.file, self.directory, self.slots
        )
    }
}

/// Snapshot persistence for a slot sequence.
///
/// Implementors provide the `try_*` operations; `save`/`load` are the non-failing
/// facades the presentation layer uses (a status message, or `None` for
/// "nothing loaded").
pub trait SnapshotStore<T> {
    fn try_save(&self, slots: &[Option<T>]) -> Result<SaveReport, PersistenceError>;

    fn try_load(&self) -> Result<Vec<Option<T>>, PersistenceError>;

    fn save(&self, slots: &[Option<T>]) -> String {
        match self.try_save(slots) {
            Ok(report) => report.to_string(),
            Err(err) => {
                tracing::warn!(error = %err, "snapshot save failed");
                format!("error saving file: {err}")
            }
        }
    }

    fn load(&self) -> Option<Vec<Option<T>>> {
        match self.try_load() {
            Ok(slots) => Some(slots),
            Err(err) => {
                tracing::error!(error = %err, "snapshot load failed");
                None
            }
        }
    }
}

#[derive(Serialize)]
struct SnapshotRef<'a, T> {
    format_version: u32,
    saved_at: DateTime<Utc>,
    slots: &'a [Option<T>],
}

#[derive(Deserialize)]
struct Snapshot<T> {
    format_version: u32,
    saved_at: DateTime<Utc>,
    slots: Vec<Option<T>>,
}

fn fresh_slots<T>() -> Vec<Option<T>> {
    let mut slots = Vec::with_capacity(FRESH_LOAD_SLOTS);
    slots.resize_with(FRESH_LOAD_SLOTS, || None);
    slots
}

fn ensure_storable<T: Entity>(slots: &[Option<T>]) -> Result<(), PersistenceError> {
    for record in slots.iter().flatten() {
        record
            .check_storable()
            .map_err(|source| PersistenceError::Unstorable {
                id: record.id().to_string(),
                source,
            })?;
    }
    Ok(())
}

fn encode<T: Entity + Serialize>(
    slots: &[Option<T>],
    writer: impl Write,
    path: &Path,
) -> Result<(), PersistenceError> {
    ensure_storable(slots)?;
    let snapshot = SnapshotRef {
        format_version: FORMAT_VERSION,
        saved_at: Utc::now(),
        slots,
    };
    serde_json::to_writer_pretty(writer, &snapshot).map_err(|err| {
        if err.is_io() {
            PersistenceError::io(path, err.into())
        } else {
            PersistenceError::Encode(err)
        }
    })
}

fn decode<T: DeserializeOwned>(
    reader: impl Read,
    path: &Path,
) -> Result<Vec<Option<T>>, PersistenceError> {
    let snapshot: Snapshot<T> = serde_json::from_reader(reader).map_err(|err| {
        if err.is_io() {
            PersistenceError::io(path, err.into())
        } else {
            PersistenceError::Decode {
                path: path.to_path_buf(),
                source: err,
            }
        }
    })?;

    if snapshot.format_version != FORMAT_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: snapshot.format_version,
            expected: FORMAT_VERSION,
        });
    }

    tracing::debug!(
        saved_at = %snapshot.saved_at,
        slots = snapshot.slots.len(),
        "snapshot decoded"
    );
    Ok(snapshot.slots)
}

/// Snapshot stored as `<directory>/<file>` on the local filesystem.
///
/// The directory must already exist; a missing directory is reported as an I/O
/// error on save.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    directory: PathBuf,
    file: String,
}

impl FileSnapshotStore {
    pub fn new(directory: impl Into<PathBuf>, file: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file: file.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file)
    }
}

impl<T> SnapshotStore<T> for FileSnapshotStore
where
    T: Entity + Serialize + DeserializeOwned,
{
    fn try_save(&self, slots: &[Option<T>]) -> Result<SaveReport, PersistenceError> {
        let path = self.path();
        // Encode fully before truncating the existing file.
        let mut buffer = Vec::new();
        encode(slots, &mut buffer, &path)?;

        let mut file = File::create(&path).map_err(|err| PersistenceError::io(&path, err))?;
        file.write_all(&buffer)
            .map_err(|err| PersistenceError::io(&path, err))?;
        file.flush().map_err(|err| PersistenceError::io(&path, err))?;

        tracing::info!(path = %path.display(), slots = slots.len(), "snapshot saved");
        Ok(SaveReport {
            file: self.file.clone(),
            directory: self.directory.display().to_string(),
            slots: slots.len(),
        })
    }

    fn try_load(&self) -> Result<Vec<Option<T>>, PersistenceError> {
        let path = self.path();
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::info!(
                    path = %path.display(),
                    "snapshot file does not exist; starting with an empty store"
                );
                return Ok(fresh_slots());
            }
            Err(err) => return Err(PersistenceError::io(&path, err)),
        };

        let slots = decode(BufReader::new(file), &path)?;
        tracing::info!(path = %path.display(), slots = slots.len(), "snapshot loaded");
        Ok(slots)
    }
}

/// In-memory snapshot holder for tests/dev.
///
/// Keeps the encoded document rather than the slots themselves, so it goes
/// through the same encoding as the file store.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    document: RwLock<Option<Vec<u8>>>,
}

const MEMORY_LOCATION: &str = "<memory>";

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the holder with a raw document (e.g. to simulate corruption).
    pub fn with_document(document: impl Into<Vec<u8>>) -> Self {
        Self {
            document: RwLock::new(Some(document.into())),
        }
    }

    pub fn has_snapshot(&self) -> bool {
        self.document.read().map(|doc| doc.is_some()).unwrap_or(false)
    }

    fn poisoned() -> PersistenceError {
        PersistenceError::io(MEMORY_LOCATION, io::Error::other("lock poisoned"))
    }
}

impl<T> SnapshotStore<T> for InMemorySnapshotStore
where
    T: Entity + Serialize + DeserializeOwned,
{
    fn try_save(&self, slots: &[Option<T>]) -> Result<SaveReport, PersistenceError> {
        let mut buffer = Vec::new();
        encode(slots, &mut buffer, Path::new(MEMORY_LOCATION))?;

        let mut document = self.document.write().map_err(|_| Self::poisoned())?;
        *document = Some(buffer);
        Ok(SaveReport {
            file: MEMORY_LOCATION.to_string(),
            directory: MEMORY_LOCATION.to_string(),
            slots: slots.len(),
        })
    }

    fn try_load(&self) -> Result<Vec<Option<T>>, PersistenceError> {
        let document = self.document.read().map_err(|_| Self::poisoned())?;
        match document.as_deref() {
            Some(bytes) => decode(bytes, Path::new(MEMORY_LOCATION)),
            None => Ok(fresh_slots()),
        }
    }
}
