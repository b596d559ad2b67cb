//! Persistence collaborators.
//!
//! The store only needs a blob slot it can read once at startup and
//! overwrite after every change. The blob is the JSON form of the full
//! record sequence.

use crate::{error::ErrorClass, model::TestCase};
use std::{
    cell::RefCell,
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// PersistenceError
///
/// Read and corruption failures are recovered by falling back to the seed
/// collection; write failures are reported and never roll back memory.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PersistenceError {
    #[error("failed to read persisted test cases: {0}")]
    Read(String),

    #[error("persisted test cases are corrupt: {0}")]
    Corrupt(String),

    #[error("failed to persist test cases: {0}")]
    Write(String),
}

impl PersistenceError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Read(_) | Self::Write(_) => ErrorClass::Io,
            Self::Corrupt(_) => ErrorClass::Corruption,
        }
    }
}

///
/// BlobStore
///
/// Key-value slot holding the serialized collection.
/// `load` returns `Ok(None)` when nothing has been saved yet.
///

pub trait BlobStore {
    fn load(&self) -> Result<Option<String>, PersistenceError>;

    fn save(&self, blob: &str) -> Result<(), PersistenceError>;
}

impl<B: BlobStore + ?Sized> BlobStore for &B {
    fn load(&self) -> Result<Option<String>, PersistenceError> {
        (**self).load()
    }

    fn save(&self, blob: &str) -> Result<(), PersistenceError> {
        (**self).save(blob)
    }
}

/// Serialize the full collection into a blob.
pub fn encode_blob(records: &[TestCase]) -> Result<String, PersistenceError> {
    serde_json::to_string(records).map_err(|err| PersistenceError::Write(err.to_string()))
}

/// Parse a blob back into records.
pub fn decode_blob(blob: &str) -> Result<Vec<TestCase>, PersistenceError> {
    serde_json::from_str(blob).map_err(|err| PersistenceError::Corrupt(err.to_string()))
}

///
/// MemoryBlobStore
///
/// Process-local slot; the default for tests and embedding.
///

#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blob: RefCell<Option<String>>,
}

impl MemoryBlobStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing blob, as if a previous session saved it.
    #[must_use]
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
        }
    }

    /// Current slot contents.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl BlobStore for MemoryBlobStore {
    fn load(&self) -> Result<Option<String>, PersistenceError> {
        Ok(self.contents())
    }

    fn save(&self, blob: &str) -> Result<(), PersistenceError> {
        *self.blob.borrow_mut() = Some(blob.to_string());

        Ok(())
    }
}

///
/// FileBlobStore
///
/// One JSON file on disk. A missing file reads as "nothing saved".
///

#[derive(Clone, Debug)]
pub struct FileBlobStore {
    path: PathBuf,
}

impl FileBlobStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BlobStore for FileBlobStore {
    fn load(&self) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PersistenceError::Read(format!(
                "{}: {err}",
                self.path.display()
            ))),
        }
    }

    fn save(&self, blob: &str) -> Result<(), PersistenceError> {
        let write_err = |err: io::Error| PersistenceError::Write(format!("{}: {err}", self.path.display()));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        fs::write(&self.path, blob).map_err(write_err)
    }
}
