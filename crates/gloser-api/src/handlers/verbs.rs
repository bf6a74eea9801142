//! Verb handlers
//!
//! Manager-gated CRUD endpoints for the verb list.

use axum::{extract::State, Json};
use gloser_service::{
    CreateVerbRequest, CreatedResponse, UpdateVerbRequest, VerbResponse, VocabularyService,
};

use crate::extractors::{ManagerUser, ValidatedJson, VocabularyIdPath};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List active verbs
///
/// GET /verbs
pub async fn list_verbs(
    State(state): State<AppState>,
    _auth: ManagerUser,
) -> ApiResult<Json<Vec<VerbResponse>>> {
    let service = VocabularyService::new(state.service_context());
    let verbs = service.list_verbs().await?;
    Ok(Json(verbs))
}

/// Create a new verb
///
/// POST /verbs
pub async fn create_verb(
    State(state): State<AppState>,
    _auth: ManagerUser,
    ValidatedJson(request): ValidatedJson<CreateVerbRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    let service = VocabularyService::new(state.service_context());
    let response = service.create_verb(request).await?;
    Ok(Created(Json(response)))
}

/// Update an existing verb
///
/// PUT /verbs/:id
pub async fn update_verb(
    State(state): State<AppState>,
    _auth: ManagerUser,
    VocabularyIdPath(id): VocabularyIdPath,
    ValidatedJson(request): ValidatedJson<UpdateVerbRequest>,
) -> ApiResult<NoContent> {
    let service = VocabularyService::new(state.service_context());
    service.update_verb(id, request).await?;
    Ok(NoContent)
}

/// Soft-delete a verb (idempotent)
///
/// DELETE /verbs/:id
pub async fn remove_verb(
    State(state): State<AppState>,
    _auth: ManagerUser,
    VocabularyIdPath(id): VocabularyIdPath,
) -> ApiResult<NoContent> {
    let service = VocabularyService::new(state.service_context());
    service.remove_verb(id).await?;
    Ok(NoContent)
}
