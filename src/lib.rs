// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 NoteIn

//! NoteIn - Personal Note-Taking Service
//!
//! This crate provides a cookie-authenticated REST API for personal notes:
//! account registration, session sign-in/sign-out, and owner-scoped note
//! storage with pinning and substring search.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Password hashing, session tokens, and the request extractor
//! - `storage` - JSON document storage and the user/note repositories

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;
