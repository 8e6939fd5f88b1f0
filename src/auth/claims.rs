// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 NoteIn

//! Session token claims and the authenticated principal.

use serde::{Deserialize, Serialize};

/// Claims embedded in a session token.
///
/// A session is not persisted server-side; the signed token is the whole
/// session record. Validity requires an intact signature and `now < exp`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject: the user id the session belongs to
    pub sub: String,
    /// Issued-at timestamp (Unix seconds)
    pub iat: i64,
    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
}

/// The principal resolved from a verified session token.
///
/// Attached to a single request only; never cached across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The user's unique id
    pub user_id: String,
    /// When the session was issued (Unix seconds)
    pub issued_at: i64,
    /// When the session expires (Unix seconds)
    pub expires_at: i64,
}

impl From<SessionClaims> for AuthenticatedUser {
    fn from(claims: SessionClaims) -> Self {
        Self {
            user_id: claims.sub,
            issued_at: claims.iat,
            expires_at: claims.exp,
        }
    }
}
