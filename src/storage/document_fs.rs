// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 NoteIn

//! Document storage on the local filesystem.
//!
//! Every entity is a single JSON file. Writes go through a temp file plus
//! rename, so a document is either fully replaced or untouched; that
//! per-document atomicity is the only concurrency guarantee the service
//! needs (no operation spans more than one document).

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use super::StoragePaths;

/// Error type for storage and repository operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Entity not found, or not owned by the caller. The two cases are
    /// indistinguishable on purpose.
    #[error("not found: {0}")]
    NotFound(String),

    /// Entity already exists (duplicate email on signup)
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// A required field was missing or empty
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Email/password pair did not match any account. Carries no detail so
    /// unknown email and wrong password are identical failures.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Storage not initialized
    #[error("storage not initialized")]
    NotInitialized,

    /// Password hashing or verification failed
    #[error("password hash error: {0}")]
    PasswordHash(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Filesystem-backed document storage.
#[derive(Debug, Clone)]
pub struct DocumentStorage {
    paths: StoragePaths,
    initialized: bool,
}

impl DocumentStorage {
    /// Create a new DocumentStorage instance.
    ///
    /// Does NOT create the directory structure. Call `initialize()` first.
    pub fn new(paths: StoragePaths) -> Self {
        Self {
            paths,
            initialized: false,
        }
    }

    /// Get the storage paths.
    pub fn paths(&self) -> &StoragePaths {
        &self.paths
    }

    /// Create the storage directory structure.
    ///
    /// Safe to call multiple times (idempotent).
    pub fn initialize(&mut self) -> StorageResult<()> {
        let dirs = [self.paths.users_dir(), self.paths.notes_dir()];

        for dir in dirs {
            fs::create_dir_all(&dir)?;
        }

        self.initialized = true;
        Ok(())
    }

    /// Check that the storage root is mounted and writable.
    ///
    /// Performs a write-read-delete round trip.
    pub fn health_check(&self) -> StorageResult<()> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }

        let test_file = self.paths.root().join(".health_check");
        let test_data = b"health_check_data";

        fs::write(&test_file, test_data)?;
        let read_data = fs::read(&test_file)?;
        fs::remove_file(&test_file)?;

        if read_data != test_data {
            return Err(StorageError::Io(io::Error::other(
                "health check data mismatch",
            )));
        }

        Ok(())
    }

    // ========== Generic JSON Operations ==========

    /// Read a JSON file and deserialize it.
    pub fn read_json<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> StorageResult<T> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }

        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let value = serde_json::from_reader(reader)?;
        Ok(value)
    }

    /// Write a JSON file (atomic write via rename).
    pub fn write_json<T: Serialize>(&self, path: impl AsRef<Path>, value: &T) -> StorageResult<()> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }

        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("tmp");
        {
            let file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.flush()?;
        }

        fs::rename(&temp_path, path)?;
        Ok(())
    }

    /// Check if a file exists.
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref().is_file()
    }

    /// Delete a file.
    pub fn delete(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }
        fs::remove_file(path.as_ref())?;
        Ok(())
    }

    /// List the ids (file stems) of all files in a directory with the given
    /// extension. Returns an empty list for a missing directory.
    pub fn list_files(&self, dir: impl AsRef<Path>, extension: &str) -> StorageResult<Vec<String>> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }

        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext == extension {
                        if let Some(id) = path.file_stem().and_then(|s| s.to_str()) {
                            ids.push(id.to_string());
                        }
                    }
                }
            }
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Doc {
        id: String,
        body: String,
    }

    fn test_storage() -> (DocumentStorage, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let mut storage = DocumentStorage::new(StoragePaths::new(dir.path()));
        storage.initialize().expect("initialize storage");
        (storage, dir)
    }

    #[test]
    fn operations_require_initialization() {
        let dir = TempDir::new().unwrap();
        let storage = DocumentStorage::new(StoragePaths::new(dir.path()));

        let read: StorageResult<Doc> = storage.read_json(dir.path().join("x.json"));
        assert!(matches!(read, Err(StorageError::NotInitialized)));
        assert!(matches!(
            storage.health_check(),
            Err(StorageError::NotInitialized)
        ));
    }

    #[test]
    fn write_read_delete_round_trip() {
        let (storage, dir) = test_storage();
        let path = dir.path().join("notes").join("n-1.json");
        let doc = Doc {
            id: "n-1".to_string(),
            body: "hello".to_string(),
        };

        storage.write_json(&path, &doc).unwrap();
        assert!(storage.exists(&path));

        let loaded: Doc = storage.read_json(&path).unwrap();
        assert_eq!(loaded, doc);

        storage.delete(&path).unwrap();
        assert!(!storage.exists(&path));
    }

    #[test]
    fn write_leaves_no_temp_file_behind() {
        let (storage, dir) = test_storage();
        let path = dir.path().join("notes").join("n-2.json");
        storage
            .write_json(
                &path,
                &Doc {
                    id: "n-2".to_string(),
                    body: "x".to_string(),
                },
            )
            .unwrap();
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn list_files_returns_stems_for_extension() {
        let (storage, dir) = test_storage();
        let notes = dir.path().join("notes");
        for id in ["a", "b"] {
            storage
                .write_json(
                    notes.join(format!("{id}.json")),
                    &Doc {
                        id: id.to_string(),
                        body: String::new(),
                    },
                )
                .unwrap();
        }
        std::fs::write(notes.join("ignore.txt"), b"nope").unwrap();

        let mut ids = storage.list_files(&notes, "json").unwrap();
        ids.sort();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);

        let empty = storage
            .list_files(dir.path().join("does-not-exist"), "json")
            .unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn health_check_round_trips() {
        let (storage, _dir) = test_storage();
        assert!(storage.health_check().is_ok());
    }
}
