// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 NoteIn

//! # Document Storage Module
//!
//! Persistent storage as one JSON document per entity, rooted at
//! `DATA_DIR`. Single-document writes are atomic (temp file + rename);
//! there are no multi-document transactions, and none are needed because
//! no operation spans more than one document.
//!
//! ## Storage Layout
//!
//! ```text
//! /data/
//!   users/
//!     {user_id}.json
//!   notes/
//!     {note_id}.json
//! ```

pub mod document_fs;
pub mod ownership;
pub mod paths;
pub mod repository;

pub use document_fs::{DocumentStorage, StorageError, StorageResult};
pub use ownership::{OwnedResource, OwnershipCheck};
pub use paths::StoragePaths;
pub use repository::{
    normalize_email, NoteRepository, NoteView, StoredNote, StoredUser, UserRepository, UserView,
};
