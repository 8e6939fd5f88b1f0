// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 NoteIn

use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{NoteContentRequest, SigninRequest, SignupRequest, UpdatePinnedRequest},
    state::AppState,
    storage::{NoteView, UserView},
};

pub mod auth;
pub mod extract;
pub mod health;
pub mod notes;

pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config().allowed_origins);

    let auth_routes = Router::new()
        .route("/signup", post(auth::signup))
        .route("/signin", post(auth::signin))
        .route("/signout", get(auth::signout));

    let note_routes = Router::new()
        .route("/all", get(notes::list_notes))
        .route("/add", post(notes::add_note))
        .route("/edit/{id}", put(notes::edit_note))
        .route("/delete/{id}", delete(notes::delete_note))
        .route("/search", get(notes::search_notes))
        .route("/update-note-pinned/{id}", put(notes::update_note_pinned));

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .nest("/api/auth", auth_routes)
        .nest("/api/note", note_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the CORS layer from the configured origin allow-list.
///
/// The session cookie only flows cross-origin with credentials enabled, so a
/// wildcard origin is not an option here. Origins that fail to parse as
/// header values are skipped with a warning.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "skipping unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::root,
        health::health,
        auth::signup,
        auth::signin,
        auth::signout,
        notes::list_notes,
        notes::add_note,
        notes::edit_note,
        notes::delete_note,
        notes::search_notes,
        notes::update_note_pinned
    ),
    components(
        schemas(
            UserView,
            NoteView,
            SignupRequest,
            SigninRequest,
            NoteContentRequest,
            UpdatePinnedRequest,
            health::RootResponse,
            health::HealthResponse,
            auth::SignupResponse,
            auth::SigninResponse,
            auth::SignoutResponse,
            notes::NoteListResponse,
            notes::NoteMutationResponse,
            notes::DeleteNoteResponse
        )
    ),
    tags(
        (name = "Health", description = "Liveness and storage health"),
        (name = "Auth", description = "Account registration and session management"),
        (name = "Notes", description = "Owner-scoped note management")
    )
)]
struct ApiDoc;
