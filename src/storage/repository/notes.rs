// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 NoteIn

//! Note repository.
//!
//! Each note is stored as a separate JSON file under `notes/`. Every
//! operation takes the authenticated user id and is scoped to notes that
//! user owns; a note belonging to anyone else behaves exactly like a
//! missing note.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::super::{
    DocumentStorage, OwnedResource, OwnershipCheck, StorageError, StorageResult,
};

/// Note record on storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredNote {
    /// Unique note identifier (UUID)
    pub id: String,
    /// Owner user ID (exclusive; never shared or reassigned)
    pub owner_user_id: String,
    /// Note title (non-empty)
    pub title: String,
    /// Note body (non-empty)
    pub content: String,
    /// Ordered tag labels, may be empty
    pub tags: Vec<String>,
    /// Whether the note is pinned to the top of the list
    pub is_pinned: bool,
    /// When the note was created
    pub created_at: DateTime<Utc>,
    /// When the note was last modified
    pub updated_at: DateTime<Utc>,
}

impl OwnedResource for StoredNote {
    fn owner_user_id(&self) -> &str {
        &self.owner_user_id
    }

    fn resource_kind() -> &'static str {
        "Note"
    }
}

/// Client-facing view of a note. Field names match the original web client
/// and must stay stable.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct NoteView {
    /// Unique note identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Owner user ID
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Note title
    pub title: String,
    /// Note body
    pub content: String,
    /// Tag labels
    pub tags: Vec<String>,
    /// Whether the note is pinned
    #[serde(rename = "isPinned")]
    pub is_pinned: bool,
    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<StoredNote> for NoteView {
    fn from(note: StoredNote) -> Self {
        Self {
            id: note.id,
            user_id: note.owner_user_id,
            title: note.title,
            content: note.content,
            tags: note.tags,
            is_pinned: note.is_pinned,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

/// Repository for note operations on document storage.
pub struct NoteRepository<'a> {
    storage: &'a DocumentStorage,
}

impl<'a> NoteRepository<'a> {
    /// Create a new NoteRepository.
    pub fn new(storage: &'a DocumentStorage) -> Self {
        Self { storage }
    }

    fn get_raw(&self, note_id: &str) -> StorageResult<StoredNote> {
        let path = self.storage.paths().note(note_id);
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound("Note".to_string()));
        }
        self.storage.read_json(path)
    }

    /// Get a note owned by `user_id`.
    pub fn get(&self, user_id: &str, note_id: &str) -> StorageResult<StoredNote> {
        self.get_raw(note_id).owned_by(user_id)
    }

    /// Create a new note for `user_id`.
    ///
    /// Title and content must be non-empty after trimming. New notes are
    /// unpinned and carry equal creation/update timestamps.
    pub fn create(
        &self,
        user_id: &str,
        title: &str,
        content: &str,
        tags: Vec<String>,
    ) -> StorageResult<StoredNote> {
        let (title, content) = validate_text_fields(title, content)?;

        let now = Utc::now();
        let note = StoredNote {
            id: Uuid::new_v4().to_string(),
            owner_user_id: user_id.to_string(),
            title,
            content,
            tags,
            is_pinned: false,
            created_at: now,
            updated_at: now,
        };

        self.storage
            .write_json(self.storage.paths().note(&note.id), &note)?;
        Ok(note)
    }

    /// Replace title, content, and tags of a note owned by `user_id`.
    ///
    /// Full replace, no partial merge: concurrent updates to the same note
    /// are last-write-wins. Bumps `updated_at`.
    pub fn update(
        &self,
        user_id: &str,
        note_id: &str,
        title: &str,
        content: &str,
        tags: Vec<String>,
    ) -> StorageResult<StoredNote> {
        let (title, content) = validate_text_fields(title, content)?;

        let mut note = self.get(user_id, note_id)?;
        note.title = title;
        note.content = content;
        note.tags = tags;
        note.updated_at = Utc::now();

        self.storage
            .write_json(self.storage.paths().note(note_id), &note)?;
        Ok(note)
    }

    /// Hard-delete a note owned by `user_id`.
    ///
    /// Deleting an already-deleted id yields `NotFound`, not success.
    pub fn delete(&self, user_id: &str, note_id: &str) -> StorageResult<()> {
        self.get(user_id, note_id)?;
        self.storage.delete(self.storage.paths().note(note_id))
    }

    /// Set only the pinned flag of a note owned by `user_id`.
    ///
    /// Touches `is_pinned` and `updated_at`; title, content, and tags are
    /// left alone.
    pub fn set_pinned(
        &self,
        user_id: &str,
        note_id: &str,
        pinned: bool,
    ) -> StorageResult<StoredNote> {
        let mut note = self.get(user_id, note_id)?;
        note.is_pinned = pinned;
        note.updated_at = Utc::now();

        self.storage
            .write_json(self.storage.paths().note(note_id), &note)?;
        Ok(note)
    }

    /// List all notes owned by `user_id`, pinned notes first, then newest
    /// first, with equal timestamps tie-broken by id.
    pub fn list_by_owner(&self, user_id: &str) -> StorageResult<Vec<StoredNote>> {
        let note_ids = self
            .storage
            .list_files(self.storage.paths().notes_dir(), "json")?;

        let mut notes = Vec::new();
        for id in note_ids {
            match self.get_raw(&id) {
                Ok(note) if note.owner_user_id == user_id => notes.push(note),
                Ok(_) => {}
                Err(error) => {
                    tracing::warn!(note_id = %id, %error, "skipping unreadable note document");
                }
            }
        }

        sort_for_listing(&mut notes);
        Ok(notes)
    }

    /// Search the caller's notes for a case-insensitive substring of the
    /// title or content. Same ordering as [`Self::list_by_owner`]; no match
    /// is an empty list, not an error.
    pub fn search_by_owner(&self, user_id: &str, query: &str) -> StorageResult<Vec<StoredNote>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(StorageError::InvalidInput(
                "search query is required".to_string(),
            ));
        }
        let needle = query.to_lowercase();

        let mut notes = self.list_by_owner(user_id)?;
        notes.retain(|note| {
            note.title.to_lowercase().contains(&needle)
                || note.content.to_lowercase().contains(&needle)
        });
        Ok(notes)
    }
}

fn validate_text_fields(title: &str, content: &str) -> StorageResult<(String, String)> {
    let title = title.trim();
    let content = content.trim();

    if title.is_empty() {
        return Err(StorageError::InvalidInput("title is required".to_string()));
    }
    if content.is_empty() {
        return Err(StorageError::InvalidInput(
            "content is required".to_string(),
        ));
    }

    Ok((title.to_string(), content.to_string()))
}

/// Pinned first, then newest first, then id for a stable order when
/// timestamps collide.
fn sort_for_listing(notes: &mut [StoredNote]) {
    notes.sort_by(|a, b| {
        b.is_pinned
            .cmp(&a.is_pinned)
            .then(b.created_at.cmp(&a.created_at))
            .then(a.id.cmp(&b.id))
    });
}
