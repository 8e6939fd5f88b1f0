// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 NoteIn

//! Password hashing.
//!
//! Plaintext passwords never touch storage; only argon2id hashes do.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::storage::{StorageError, StorageResult};

/// Hash a password using argon2id with a random salt.
pub fn hash_password(password: &str) -> StorageResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| StorageError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> StorageResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| StorageError::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
