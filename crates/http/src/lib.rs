//! HTTP API server for the trivia question bank.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::absolute_paths, reason = "Explicit paths for clarity")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use axum::{
    Router,
    http::{Method, header},
    routing::{delete, get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use trivia_service::{CategoryService, QuestionService, QuizService};
use trivia_storage::StorageBackend;

use api_error::ApiError;

/// Shared application state for all HTTP handlers.
///
/// Services hold the storage handle; nothing request-scoped lives here.
pub struct AppState {
    pub category_service: CategoryService,
    pub question_service: QuestionService,
    pub quiz_service: QuizService,
}

impl AppState {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self {
            category_service: CategoryService::new(Arc::clone(&storage)),
            question_service: QuestionService::new(Arc::clone(&storage)),
            quiz_service: QuizService::new(storage),
        }
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/categories", get(handlers::categories::list_categories))
        .route("/categories/{id}/questions", get(handlers::categories::category_questions))
        .route(
            "/questions",
            get(handlers::questions::list_questions).post(handlers::questions::post_questions),
        )
        .route("/questions/search", post(handlers::questions::search_questions))
        .route("/questions/{id}", delete(handlers::questions::delete_question))
        .route("/quizzes", post(handlers::quizzes::next_question))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> ApiError {
    ApiError::NotFound("no such route".to_owned())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
