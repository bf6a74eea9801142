//! Word handlers
//!
//! Manager-gated CRUD endpoints for the word list.

use axum::{extract::State, Json};
use gloser_service::{
    CreateWordRequest, CreatedResponse, UpdateWordRequest, VocabularyService, WordResponse,
};

use crate::extractors::{ManagerUser, ValidatedJson, VocabularyIdPath};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List active words
///
/// GET /words
pub async fn list_words(
    State(state): State<AppState>,
    _auth: ManagerUser,
) -> ApiResult<Json<Vec<WordResponse>>> {
    let service = VocabularyService::new(state.service_context());
    let words = service.list_words().await?;
    Ok(Json(words))
}

/// Create a new word
///
/// POST /words
pub async fn create_word(
    State(state): State<AppState>,
    _auth: ManagerUser,
    ValidatedJson(request): ValidatedJson<CreateWordRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    let service = VocabularyService::new(state.service_context());
    let response = service.create_word(request).await?;
    Ok(Created(Json(response)))
}

/// Update an existing word
///
/// PUT /words/:id
pub async fn update_word(
    State(state): State<AppState>,
    _auth: ManagerUser,
    VocabularyIdPath(id): VocabularyIdPath,
    ValidatedJson(request): ValidatedJson<UpdateWordRequest>,
) -> ApiResult<NoContent> {
    let service = VocabularyService::new(state.service_context());
    service.update_word(id, request).await?;
    Ok(NoContent)
}

/// Soft-delete a word (idempotent)
///
/// DELETE /words/:id
pub async fn remove_word(
    State(state): State<AppState>,
    _auth: ManagerUser,
    VocabularyIdPath(id): VocabularyIdPath,
) -> ApiResult<NoContent> {
    let service = VocabularyService::new(state.service_context());
    service.remove_word(id).await?;
    Ok(NoContent)
}
