// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 NoteIn

//! # Authentication Module
//!
//! Cookie-carried, stateless session tokens.
//!
//! ## Auth Flow
//!
//! 1. Client signs in with email/password at `/api/auth/signin`
//! 2. Server verifies credentials and issues an HS256-signed token with a
//!    fixed TTL, set as an HTTP-only `SameSite=Strict` cookie
//! 3. Every protected route resolves the token through the [`Auth`]
//!    extractor:
//!    - missing / malformed / tampered / expired token → 401, handler
//!      never runs
//!    - otherwise the resolved user id scopes all storage access for the
//!      duration of that request
//!
//! ## Limitations
//!
//! Signout only clears the cookie; issued tokens stay valid until expiry
//! (no server-side revocation list).

pub mod claims;
pub mod error;
pub mod extractor;
pub mod password;
pub mod session;

pub use claims::{AuthenticatedUser, SessionClaims};
pub use error::AuthError;
pub use extractor::Auth;
