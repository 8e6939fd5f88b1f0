// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 NoteIn

//! Request extractors that reject through the error envelope.
//!
//! Axum's stock `Json` and `Query` extractors answer malformed input with
//! plain-text bodies. The handlers use these wrappers instead, so a bad
//! request body or query string produces the same
//! `{ success: false, statusCode, message }` shape as every other failure.

use axum::extract::{FromRequest, FromRequestParts};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::ApiError;

/// JSON request body; rejects with an enveloped 400 instead of plain text.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Query string; rejects with an enveloped 400 instead of plain text.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct Query<T>(pub T);
