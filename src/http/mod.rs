//! HTTP surface for the board service.
//!
//! Every route except `/api/health` resolves the caller through the
//! [`AccessTokenVerifier`] and operates on that caller's board only.

mod auth;
mod error;
mod routes;

use std::sync::Arc;

use axum::{
    Router,
    extract::FromRef,
    routing::{get, patch, post},
};
use mockable::DefaultClock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::board::{
    ports::{AccessTokenVerifier, BoardRepository},
    services::BoardService,
};

pub use auth::AuthenticatedOwner;
pub use error::ApiError;

/// Shared state handed to every handler.
pub struct AppState<R>
where
    R: BoardRepository,
{
    service: Arc<BoardService<R, DefaultClock>>,
    verifier: Arc<dyn AccessTokenVerifier>,
}

impl<R> AppState<R>
where
    R: BoardRepository,
{
    /// Creates handler state from a board service and a token verifier.
    #[must_use]
    pub fn new(
        service: BoardService<R, DefaultClock>,
        verifier: Arc<dyn AccessTokenVerifier>,
    ) -> Self {
        Self {
            service: Arc::new(service),
            verifier,
        }
    }
}

impl<R> Clone for AppState<R>
where
    R: BoardRepository,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            verifier: Arc::clone(&self.verifier),
        }
    }
}

impl<R> FromRef<AppState<R>> for Arc<dyn AccessTokenVerifier>
where
    R: BoardRepository,
{
    fn from_ref(state: &AppState<R>) -> Self {
        Arc::clone(&state.verifier)
    }
}

/// Builds the application router with CORS and request tracing applied.
#[must_use]
pub fn router<R>(state: AppState<R>) -> Router
where
    R: BoardRepository + 'static,
{
    Router::new()
        .route("/api/health", get(routes::health))
        .route("/api/board", get(routes::get_board::<R>))
        .route("/api/sections", post(routes::add_section::<R>))
        .route(
            "/api/sections/{id}",
            patch(routes::patch_section::<R>).delete(routes::delete_section::<R>),
        )
        .route("/api/tasks", post(routes::add_task::<R>))
        .route(
            "/api/tasks/{id}",
            patch(routes::patch_task::<R>).delete(routes::delete_task::<R>),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
