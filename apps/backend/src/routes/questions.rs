//! Question generation endpoints.
//!
//! Generation is a two-step protocol with no cross-step atomicity: `prepare`
//! clears any existing questions and returns the document text for the
//! external AI call; `commit` persists whatever that call produced. A failed
//! commit after a successful prepare leaves the document with zero questions
//! until retried.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /questions/prepare
pub async fn prepare(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Result<Json<PrepareQuestionsResponse>> {
    request.validate()?;

    let document = state
        .store
        .get_document(&request.document_id)
        .ok_or_else(|| ApiError::NotFound(format!("document {}", request.document_id)))?;

    let text_content = document
        .text_content
        .filter(|text| !text.is_empty())
        .ok_or_else(|| {
            ApiError::BadRequest("document text content not available".to_string())
        })?;

    // Regeneration replaces: clear before handing text to the AI step.
    state.store.delete_questions_for_document(&request.document_id);

    let prompt = study_core::question_prompt(&request, &text_content);

    Ok(Json(PrepareQuestionsResponse {
        text_content,
        request,
        prompt,
    }))
}

/// POST /questions/commit
pub async fn commit(
    State(state): State<AppState>,
    Json(body): Json<CommitQuestionsRequest>,
) -> Result<Json<Vec<Question>>> {
    if state.store.get_document(&body.document_id).is_none() {
        return Err(ApiError::NotFound(format!("document {}", body.document_id)));
    }

    let new_questions: Vec<_> = body
        .questions
        .into_iter()
        .map(|payload| payload.into_new_question(&body.document_id))
        .collect();

    // Validate the whole batch before persisting any of it.
    for question in &new_questions {
        question.validate()?;
    }

    let persisted: Vec<_> = new_questions
        .into_iter()
        .map(|question| state.store.create_question(question))
        .collect();

    tracing::info!(
        document_id = %body.document_id,
        count = persisted.len(),
        "questions committed"
    );

    Ok(Json(persisted))
}

/// GET /questions/{documentId}
pub async fn list(
    State(state): State<AppState>,
    Path(document_id): Path<String>,
) -> Result<Json<Vec<Question>>> {
    Ok(Json(state.store.questions_for_document(&document_id)))
}
