// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 NoteIn

//! # API Request Models
//!
//! Request bodies accepted by the REST API. Every body is a strict schema:
//! unknown fields are rejected before a request reaches the repositories,
//! and field names mirror the original web client exactly.
//!
//! Client-facing response shapes ([`crate::storage::NoteView`],
//! [`crate::storage::UserView`]) live with their repositories; the response
//! envelopes live with their handlers.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Request body for POST /api/auth/signup.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SignupRequest {
    /// Display name (not unique)
    pub username: String,
    /// Email address (unique, case-insensitive)
    pub email: String,
    /// Plaintext password; only its hash is ever stored
    pub password: String,
}

/// Request body for POST /api/auth/signin.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SigninRequest {
    /// Email address
    pub email: String,
    /// Plaintext password
    pub password: String,
}

/// Request body for POST /api/note/add and PUT /api/note/edit/{id}.
///
/// Edit is a full replace of all three fields; omitting `tags` means "no
/// tags", not "keep the old tags".
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct NoteContentRequest {
    /// Note title (required, non-empty)
    pub title: String,
    /// Note body (required, non-empty)
    pub content: String,
    /// Ordered tag labels
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request body for PUT /api/note/update-note-pinned/{id}.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdatePinnedRequest {
    /// Target pin state. When omitted the current state is toggled — a
    /// compatibility shim for clients that send an empty body; the
    /// repository contract is always the explicit boolean.
    #[serde(rename = "isPinned")]
    pub is_pinned: Option<bool>,
}

/// Query parameters for GET /api/note/search.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Substring to match against note titles and contents
    pub query: String,
}
