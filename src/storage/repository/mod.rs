// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 NoteIn

//! Storage repositories.
//!
//! Repositories own the typed document schemas and the read/write logic
//! over [`super::DocumentStorage`].

pub mod notes;
pub mod users;

pub use notes::{NoteRepository, NoteView, StoredNote};
pub use users::{normalize_email, StoredUser, UserRepository, UserView};
