// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 NoteIn

//! Note endpoints.
//!
//! All routes here require authentication; each handler scopes every
//! repository call to the authenticated user's id, so one user's notes are
//! invisible to everyone else.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    api::extract::{Json, Query},
    auth::Auth,
    error::ApiError,
    models::{NoteContentRequest, SearchQuery, UpdatePinnedRequest},
    state::AppState,
    storage::{NoteRepository, NoteView},
};

/// Response carrying a list of notes.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NoteListResponse {
    pub success: bool,
    /// Pinned notes first, then newest first.
    pub notes: Vec<NoteView>,
}

/// Response carrying a single created or modified note.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NoteMutationResponse {
    pub success: bool,
    pub message: String,
    pub note: NoteView,
}

/// Response for DELETE /api/note/delete/{id}.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteNoteResponse {
    pub success: bool,
    pub message: String,
}

/// List all notes owned by the caller.
#[utoipa::path(
    get,
    path = "/api/note/all",
    tag = "Notes",
    responses(
        (status = 200, description = "All notes owned by the caller", body = NoteListResponse),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn list_notes(
    Auth(user): Auth,
    State(state): State<AppState>,
) -> Result<Json<NoteListResponse>, ApiError> {
    let repo = NoteRepository::new(state.storage());
    let notes = repo.list_by_owner(&user.user_id)?;

    Ok(Json(NoteListResponse {
        success: true,
        notes: notes.into_iter().map(Into::into).collect(),
    }))
}

/// Create a new note.
#[utoipa::path(
    post,
    path = "/api/note/add",
    tag = "Notes",
    request_body = NoteContentRequest,
    responses(
        (status = 201, description = "Note created", body = NoteMutationResponse),
        (status = 400, description = "Empty title or content"),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn add_note(
    Auth(user): Auth,
    State(state): State<AppState>,
    Json(request): Json<NoteContentRequest>,
) -> Result<(StatusCode, Json<NoteMutationResponse>), ApiError> {
    let repo = NoteRepository::new(state.storage());
    let note = repo.create(&user.user_id, &request.title, &request.content, request.tags)?;

    tracing::info!(user_id = %user.user_id, note_id = %note.id, "note created");

    Ok((
        StatusCode::CREATED,
        Json(NoteMutationResponse {
            success: true,
            message: "Note added successfully".to_string(),
            note: note.into(),
        }),
    ))
}

/// Replace a note's title, content, and tags.
#[utoipa::path(
    put,
    path = "/api/note/edit/{id}",
    tag = "Notes",
    params(("id" = String, Path, description = "Note id")),
    request_body = NoteContentRequest,
    responses(
        (status = 200, description = "Note updated", body = NoteMutationResponse),
        (status = 400, description = "Empty title or content"),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "No such note owned by the caller")
    )
)]
pub async fn edit_note(
    Auth(user): Auth,
    State(state): State<AppState>,
    Path(note_id): Path<String>,
    Json(request): Json<NoteContentRequest>,
) -> Result<Json<NoteMutationResponse>, ApiError> {
    let repo = NoteRepository::new(state.storage());
    let note = repo.update(
        &user.user_id,
        &note_id,
        &request.title,
        &request.content,
        request.tags,
    )?;

    Ok(Json(NoteMutationResponse {
        success: true,
        message: "Note updated successfully".to_string(),
        note: note.into(),
    }))
}

/// Hard-delete a note.
#[utoipa::path(
    delete,
    path = "/api/note/delete/{id}",
    tag = "Notes",
    params(("id" = String, Path, description = "Note id")),
    responses(
        (status = 200, description = "Note deleted", body = DeleteNoteResponse),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "No such note owned by the caller")
    )
)]
pub async fn delete_note(
    Auth(user): Auth,
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> Result<Json<DeleteNoteResponse>, ApiError> {
    let repo = NoteRepository::new(state.storage());
    repo.delete(&user.user_id, &note_id)?;

    tracing::info!(user_id = %user.user_id, note_id = %note_id, "note deleted");

    Ok(Json(DeleteNoteResponse {
        success: true,
        message: "Note deleted successfully".to_string(),
    }))
}

/// Search the caller's notes by title or content substring.
#[utoipa::path(
    get,
    path = "/api/note/search",
    tag = "Notes",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching notes", body = NoteListResponse),
        (status = 400, description = "Empty query"),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn search_notes(
    Auth(user): Auth,
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<NoteListResponse>, ApiError> {
    let repo = NoteRepository::new(state.storage());
    let notes = repo.search_by_owner(&user.user_id, &params.query)?;

    Ok(Json(NoteListResponse {
        success: true,
        notes: notes.into_iter().map(Into::into).collect(),
    }))
}

/// Pin or unpin a note.
///
/// The body carries the explicit target state. A body without `isPinned`
/// toggles the current state; the toggle is computed here, at the API
/// surface, never inside the repository.
#[utoipa::path(
    put,
    path = "/api/note/update-note-pinned/{id}",
    tag = "Notes",
    params(("id" = String, Path, description = "Note id")),
    request_body = UpdatePinnedRequest,
    responses(
        (status = 200, description = "Pin state updated", body = NoteMutationResponse),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "No such note owned by the caller")
    )
)]
pub async fn update_note_pinned(
    Auth(user): Auth,
    State(state): State<AppState>,
    Path(note_id): Path<String>,
    Json(request): Json<UpdatePinnedRequest>,
) -> Result<Json<NoteMutationResponse>, ApiError> {
    let repo = NoteRepository::new(state.storage());

    let pinned = match request.is_pinned {
        Some(target) => target,
        None => !repo.get(&user.user_id, &note_id)?.is_pinned,
    };
    let note = repo.set_pinned(&user.user_id, &note_id, pinned)?;

    Ok(Json(NoteMutationResponse {
        success: true,
        message: "Note pin state updated successfully".to_string(),
        note: note.into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthenticatedUser;
    use crate::state::test_support::test_state;

    fn auth(user_id: &str) -> Auth {
        Auth(AuthenticatedUser {
            user_id: user_id.to_string(),
            issued_at: 0,
            expires_at: 0,
        })
    }

    fn content(title: &str, body: &str, tags: &[&str]) -> NoteContentRequest {
        NoteContentRequest {
            title: title.to_string(),
            content: body.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    async fn add(state: &AppState, user_id: &str, title: &str) -> NoteView {
        let (_, Json(body)) = add_note(
            auth(user_id),
            State(state.clone()),
            Json(content(title, "content", &[])),
        )
        .await
        .expect("add succeeds");
        body.note
    }

    #[tokio::test]
    async fn add_then_list_shows_the_note_once_unpinned() {
        let (state, _dir) = test_state();

        let (status, Json(added)) = add_note(
            auth("u1"),
            State(state.clone()),
            Json(content("Gym", "5am", &["health"])),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert!(!added.note.is_pinned);

        let Json(listed) = list_notes(auth("u1"), State(state)).await.unwrap();
        assert_eq!(listed.notes.len(), 1);
        assert_eq!(listed.notes[0], added.note);
    }

    #[tokio::test]
    async fn add_rejects_empty_title() {
        let (state, _dir) = test_state();
        let err = add_note(auth("u1"), State(state), Json(content("  ", "body", &[])))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn edit_is_a_full_replace() {
        let (state, _dir) = test_state();
        let note = add(&state, "u1", "draft").await;

        edit_note(
            auth("u1"),
            State(state.clone()),
            Path(note.id.clone()),
            Json(content("v2", "two", &["a"])),
        )
        .await
        .unwrap();
        let Json(second) = edit_note(
            auth("u1"),
            State(state),
            Path(note.id),
            Json(content("v3", "three", &[])),
        )
        .await
        .unwrap();

        assert_eq!(second.note.title, "v3");
        assert_eq!(second.note.content, "three");
        assert!(second.note.tags.is_empty());
    }

    #[tokio::test]
    async fn foreign_notes_are_not_found() {
        let (state, _dir) = test_state();
        let note = add(&state, "u1", "mine").await;

        let err = edit_note(
            auth("u2"),
            State(state.clone()),
            Path(note.id.clone()),
            Json(content("stolen", "x", &[])),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let err = delete_note(auth("u2"), State(state.clone()), Path(note.id.clone()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let err = update_note_pinned(
            auth("u2"),
            State(state.clone()),
            Path(note.id),
            Json(UpdatePinnedRequest {
                is_pinned: Some(true),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let Json(listed) = list_notes(auth("u2"), State(state)).await.unwrap();
        assert!(listed.notes.is_empty());
    }

    #[tokio::test]
    async fn delete_twice_is_not_idempotent() {
        let (state, _dir) = test_state();
        let note = add(&state, "u1", "bye").await;

        let Json(first) = delete_note(auth("u1"), State(state.clone()), Path(note.id.clone()))
            .await
            .unwrap();
        assert!(first.success);

        let err = delete_note(auth("u1"), State(state), Path(note.id))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn search_is_owner_scoped_and_case_insensitive() {
        let (state, _dir) = test_state();
        add_note(
            auth("u1"),
            State(state.clone()),
            Json(content("Gym plan", "leg day", &[])),
        )
        .await
        .unwrap();
        add(&state, "u2", "gym").await;

        let Json(hits) = search_notes(
            auth("u1"),
            State(state.clone()),
            Query(SearchQuery {
                query: "GYM".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(hits.notes.len(), 1);
        assert_eq!(hits.notes[0].title, "Gym plan");

        let Json(none) = search_notes(
            auth("u1"),
            State(state.clone()),
            Query(SearchQuery {
                query: "swimming".to_string(),
            }),
        )
        .await
        .unwrap();
        assert!(none.notes.is_empty());

        let err = search_notes(
            auth("u1"),
            State(state),
            Query(SearchQuery {
                query: "  ".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn explicit_pin_moves_note_to_the_front() {
        let (state, _dir) = test_state();
        let first = add(&state, "u1", "first").await;
        let second = add(&state, "u1", "second").await;

        let Json(pinned) = update_note_pinned(
            auth("u1"),
            State(state.clone()),
            Path(first.id.clone()),
            Json(UpdatePinnedRequest {
                is_pinned: Some(true),
            }),
        )
        .await
        .unwrap();
        assert!(pinned.note.is_pinned);
        assert_eq!(pinned.note.title, first.title);

        let Json(listed) = list_notes(auth("u1"), State(state)).await.unwrap();
        assert_eq!(listed.notes[0].id, first.id);
        assert!(listed.notes.iter().any(|n| n.id == second.id));
    }

    #[tokio::test]
    async fn omitted_pin_state_toggles() {
        let (state, _dir) = test_state();
        let note = add(&state, "u1", "flip").await;

        let Json(toggled_on) = update_note_pinned(
            auth("u1"),
            State(state.clone()),
            Path(note.id.clone()),
            Json(UpdatePinnedRequest { is_pinned: None }),
        )
        .await
        .unwrap();
        assert!(toggled_on.note.is_pinned);

        let Json(toggled_off) = update_note_pinned(
            auth("u1"),
            State(state),
            Path(note.id),
            Json(UpdatePinnedRequest { is_pinned: None }),
        )
        .await
        .unwrap();
        assert!(!toggled_off.note.is_pinned);
    }
}
