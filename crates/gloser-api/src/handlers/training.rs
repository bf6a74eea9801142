//! Training handlers
//!
//! Endpoints for picking the next item to train and recording successes.
//! An empty candidate set surfaces as 204 No Content.

use axum::{extract::State, Json};
use gloser_service::{TrainingService, VerbTrainingResponse, WordTrainingResponse};

use crate::extractors::{TrainerUser, VocabularyIdPath};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Pick the next word for the authenticated user
///
/// GET /training/words
pub async fn next_word(
    State(state): State<AppState>,
    TrainerUser(user): TrainerUser,
) -> ApiResult<Json<WordTrainingResponse>> {
    let service = TrainingService::new(state.service_context());
    let word = service.next_word(&user.username).await?;
    Ok(Json(word))
}

/// Record a successful word training
///
/// POST /training/words/:id/success
pub async fn record_word_success(
    State(state): State<AppState>,
    TrainerUser(user): TrainerUser,
    VocabularyIdPath(id): VocabularyIdPath,
) -> ApiResult<NoContent> {
    let service = TrainingService::new(state.service_context());
    service.record_word_success(&user.username, id).await?;
    Ok(NoContent)
}

/// Pick the next verb for the authenticated user
///
/// GET /training/verbs
pub async fn next_verb(
    State(state): State<AppState>,
    TrainerUser(user): TrainerUser,
) -> ApiResult<Json<VerbTrainingResponse>> {
    let service = TrainingService::new(state.service_context());
    let verb = service.next_verb(&user.username).await?;
    Ok(Json(verb))
}

/// Record a successful verb training
///
/// POST /training/verbs/:id/success
pub async fn record_verb_success(
    State(state): State<AppState>,
    TrainerUser(user): TrainerUser,
    VocabularyIdPath(id): VocabularyIdPath,
) -> ApiResult<NoContent> {
    let service = TrainingService::new(state.service_context());
    service.record_verb_success(&user.username, id).await?;
    Ok(NoContent)
}
