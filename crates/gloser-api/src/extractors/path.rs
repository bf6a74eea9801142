//! Path parameter extractors
//!
//! Type-safe extraction of vocabulary ids from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use gloser_core::VocabularyId;

use crate::response::ApiError;

/// Extract a vocabulary id from the `:id` path parameter
#[derive(Debug, Clone, Copy)]
pub struct VocabularyIdPath(pub VocabularyId);

#[async_trait]
impl<S> FromRequestParts<S> for VocabularyIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::invalid_path("Invalid vocabulary id"))?;

        Ok(VocabularyIdPath(VocabularyId::new(id)))
    }
}
