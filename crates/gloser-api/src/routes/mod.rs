//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{auth, health, training, verbs, words};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health, which is
/// mounted separately so probes bypass the middleware stack)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(word_routes())
        .merge(verb_routes())
        .merge(training_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// Word management routes (manager role)
fn word_routes() -> Router<AppState> {
    Router::new()
        .route("/words", get(words::list_words))
        .route("/words", post(words::create_word))
        .route("/words/:id", put(words::update_word))
        .route("/words/:id", delete(words::remove_word))
}

/// Verb management routes (manager role)
fn verb_routes() -> Router<AppState> {
    Router::new()
        .route("/verbs", get(verbs::list_verbs))
        .route("/verbs", post(verbs::create_verb))
        .route("/verbs/:id", put(verbs::update_verb))
        .route("/verbs/:id", delete(verbs::remove_verb))
}

/// Training routes (any role)
fn training_routes() -> Router<AppState> {
    Router::new()
        .route("/training/words", get(training::next_word))
        .route("/training/words/:id/success", post(training::record_word_success))
        .route("/training/verbs", get(training::next_verb))
        .route("/training/verbs/:id/success", post(training::record_verb_success))
}
