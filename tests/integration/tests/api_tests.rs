//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the migrations applied
//! - Environment variables: DATABASE_URL, API_PORT, JWT_SECRET, PASSWORD_PEPPER
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::trainer();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.user.role, "trainer");
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.access_token.is_empty());
    assert!(auth.expires_in > 0);

    let response = server
        .post("/api/v1/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.user.username, request.username);
}

#[tokio::test]
async fn test_register_duplicate_username_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::trainer();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login_with_wrong_password_is_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::trainer();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post(
            "/api/v1/auth/login",
            &LoginRequest {
                username: request.username.clone(),
                password: "wrong-password".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Authorization Tests
// ============================================================================

async fn register(server: &TestServer, request: &RegisterRequest) -> AuthResponse {
    let response = server.post("/api/v1/auth/register", request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

#[tokio::test]
async fn test_words_require_authorization_header() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/words").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_trainer_cannot_manage_words() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let trainer = register(&server, &RegisterRequest::trainer()).await;

    let response = server
        .post_auth("/api/v1/words", &trainer.access_token, &WordPayload::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_manager_can_train() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let manager = register(&server, &RegisterRequest::manager()).await;

    // Seed one word so the pick has a candidate
    let response = server
        .post_auth("/api/v1/words", &manager.access_token, &WordPayload::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/training/words", &manager.access_token)
        .await
        .unwrap();
    assert!(response.status() == StatusCode::OK);
}

// ============================================================================
// Vocabulary Tests
// ============================================================================

#[tokio::test]
async fn test_word_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let manager = register(&server, &RegisterRequest::manager()).await;
    let token = &manager.access_token;
    let payload = WordPayload::unique();

    // Create
    let response = server.post_auth("/api/v1/words", token, &payload).await.unwrap();
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Identical create conflicts
    let response = server.post_auth("/api/v1/words", token, &payload).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Appears in the active list
    let response = server.get_auth("/api/v1/words", token).await.unwrap();
    let words: Vec<WordResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(words.iter().any(|w| w.id == created.id));

    // Update to a new pair succeeds
    let updated = WordPayload::unique();
    let response = server
        .put_auth(&format!("/api/v1/words/{}", created.id), token, &updated)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Re-submitting its own pair succeeds (self-exclusion)
    let response = server
        .put_auth(&format!("/api/v1/words/{}", created.id), token, &updated)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Delete removes it from the active list
    let response = server
        .delete_auth(&format!("/api/v1/words/{}", created.id), token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth("/api/v1/words", token).await.unwrap();
    let words: Vec<WordResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(words.iter().all(|w| w.id != created.id));

    // Deleting again is idempotent
    let response = server
        .delete_auth(&format!("/api/v1/words/{}", created.id), token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_update_nonexistent_word_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let manager = register(&server, &RegisterRequest::manager()).await;

    let response = server
        .put_auth(
            "/api/v1/words/999999999",
            &manager.access_token,
            &WordPayload::unique(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_verb_create_and_list() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let manager = register(&server, &RegisterRequest::manager()).await;
    let token = &manager.access_token;

    let payload = VerbPayload::unique();
    let response = server.post_auth("/api/v1/verbs", token, &payload).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post_auth("/api/v1/verbs", token, &payload).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_empty_word_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let manager = register(&server, &RegisterRequest::manager()).await;

    let response = server
        .post_auth(
            "/api/v1/words",
            &manager.access_token,
            &WordPayload::new("", "hus"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Training Tests
// ============================================================================

#[tokio::test]
async fn test_training_pick_and_success_counter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let manager = register(&server, &RegisterRequest::manager()).await;
    let trainer = register(&server, &RegisterRequest::trainer()).await;

    // Seed a word
    let response = server
        .post_auth("/api/v1/words", &manager.access_token, &WordPayload::unique())
        .await
        .unwrap();
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // The trainer gets a candidate
    let response = server
        .get_auth("/api/v1/training/words", &trainer.access_token)
        .await
        .unwrap();
    let picked: WordTrainingResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!picked.german.is_empty());

    // Record two successes for the seeded word
    for _ in 0..2 {
        let response = server
            .post_auth_empty(
                &format!("/api/v1/training/words/{}/success", created.id),
                &trainer.access_token,
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    }
}
