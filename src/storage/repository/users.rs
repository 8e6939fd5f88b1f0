// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 NoteIn

//! User repository (credential store).
//!
//! Each user is stored as a separate JSON file under `users/`. The stored
//! record carries the argon2 password hash; the hash never appears in any
//! client-facing view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};

use super::super::{DocumentStorage, StorageError, StorageResult};

/// Canonical form of an email address: NFKC-normalized, trimmed, lowercase.
/// Uniqueness and signin lookups both use this form.
pub fn normalize_email(email: &str) -> String {
    email.trim().nfkc().collect::<String>().to_lowercase()
}

/// User record on storage. Never serialized to clients as-is; see
/// [`UserView`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredUser {
    /// Unique user identifier (UUID)
    pub id: String,
    /// Display name (not unique)
    pub username: String,
    /// Email address in canonical form (unique)
    pub email: String,
    /// Argon2id hash of the password
    pub password_hash: String,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Client-facing view of a user. Field names match the original web client
/// and must stay stable.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserView {
    /// Unique user identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name
    pub username: String,
    /// Email address
    pub email: String,
    /// Account creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<StoredUser> for UserView {
    fn from(user: StoredUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Repository for user operations on document storage.
pub struct UserRepository<'a> {
    storage: &'a DocumentStorage,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository.
    pub fn new(storage: &'a DocumentStorage) -> Self {
        Self { storage }
    }

    /// Get a user by ID.
    pub fn get(&self, user_id: &str) -> StorageResult<StoredUser> {
        let path = self.storage.paths().user(user_id);
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound("User".to_string()));
        }
        self.storage.read_json(path)
    }

    /// Find a user by email (case-insensitive).
    pub fn find_by_email(&self, email: &str) -> StorageResult<Option<StoredUser>> {
        let needle = normalize_email(email);
        let user_ids = self
            .storage
            .list_files(self.storage.paths().users_dir(), "json")?;

        for id in user_ids {
            if let Ok(user) = self.get(&id) {
                if user.email == needle {
                    return Ok(Some(user));
                }
            }
        }

        Ok(None)
    }

    /// Register a new user.
    ///
    /// Rejects empty fields and duplicate emails (case-insensitive). The
    /// plaintext password is hashed before anything is written.
    pub fn create(
        &self,
        username: &str,
        email: &str,
        plaintext_password: &str,
    ) -> StorageResult<StoredUser> {
        let username = username.trim();
        let email = normalize_email(email);

        if username.is_empty() || email.is_empty() || plaintext_password.is_empty() {
            return Err(StorageError::InvalidInput(
                "username, email and password are required".to_string(),
            ));
        }

        if self.find_by_email(&email)?.is_some() {
            return Err(StorageError::AlreadyExists("User".to_string()));
        }

        let user = StoredUser {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            email,
            password_hash: hash_password(plaintext_password)?,
            created_at: Utc::now(),
        };

        self.storage
            .write_json(self.storage.paths().user(&user.id), &user)?;
        Ok(user)
    }

    /// Verify an email/password pair.
    ///
    /// Unknown email and wrong password both return
    /// `StorageError::InvalidCredentials` with no distinguishing detail.
    pub fn verify_credentials(
        &self,
        email: &str,
        plaintext_password: &str,
    ) -> StorageResult<StoredUser> {
        let user = self
            .find_by_email(email)?
            .ok_or(StorageError::InvalidCredentials)?;

        if verify_password(plaintext_password, &user.password_hash)? {
            Ok(user)
        } else {
            Err(StorageError::InvalidCredentials)
        }
    }
}
