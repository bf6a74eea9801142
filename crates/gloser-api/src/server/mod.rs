//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use gloser_common::{AppConfig, AppError, JwtService, PasswordService};
use gloser_core::{SystemClock, ThreadRandomizer};
use gloser_db::{
    create_pool, PgTrainingRepository, PgUserRepository, PgVerbRepository, PgWordRepository,
};
use gloser_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware(
        create_router(),
        &config.cors,
        config.app.env.is_production(),
    );
    // Health probes bypass the middleware stack
    router.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = gloser_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create the token and password services from configuration
    let jwt_service = Arc::new(JwtService::new(&config.jwt, Arc::new(SystemClock::new())));
    let password_service = Arc::new(PasswordService::new(config.security.pepper.clone()));

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let word_repo = Arc::new(PgWordRepository::new(pool.clone()));
    let verb_repo = Arc::new(PgVerbRepository::new(pool.clone()));
    let training_repo = Arc::new(PgTrainingRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .user_repo(user_repo)
        .word_repo(word_repo)
        .verb_repo(verb_repo)
        .training_repo(training_repo)
        .jwt_service(jwt_service)
        .password_service(password_service)
        .randomizer(Arc::new(ThreadRandomizer::new()))
        .build()
        .map_err(AppError::Config)?;

    Ok(AppState::new(service_context, pool, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
