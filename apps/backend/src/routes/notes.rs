//! Study notes endpoints.
//!
//! Same prepare/commit split as questions, but notes accumulate: prepare
//! never clears previously generated notes.

use axum::{
    extract::{Path, State},
    Json,
};

use study_core::notes_prompt;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /notes/prepare
pub async fn prepare(
    State(state): State<AppState>,
    Json(request): Json<GenerateNotesRequest>,
) -> Result<Json<PrepareNotesResponse>> {
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

    let prompt = notes_prompt(&request, &text_content);

    Ok(Json(PrepareNotesResponse {
        text_content,
        request,
        document_name: document.original_name,
        prompt,
    }))
}

/// POST /notes/commit
pub async fn commit(
    State(state): State<AppState>,
    Json(body): Json<CommitNotesRequest>,
) -> Result<Json<StudyNotes>> {
    if body.content.trim().is_empty() {
        return Err(ApiError::BadRequest("notes content required".to_string()));
    }
    if state.store.get_document(&body.document_id).is_none() {
        return Err(ApiError::NotFound(format!("document {}", body.document_id)));
    }

    let title = body
        .title
        .filter(|title| !title.trim().is_empty())
        .unwrap_or_else(|| format!("Study Notes - {}", body.style.as_str()));

    let notes = state.store.create_study_notes(NewStudyNotes {
        document_id: body.document_id,
        title,
        content: body.content,
        style: body.style,
        chapter: body.chapter,
        include_key_terms: body.include_key_terms,
        include_examples: body.include_examples,
    });

    Ok(Json(notes))
}

/// GET /notes/{documentId}
///
/// The path parameter is a document id; it shares the `/notes/{id}` route
/// shape with delete.
pub async fn list(
    State(state): State<AppState>,
    Path(document_id): Path<String>,
) -> Result<Json<Vec<StudyNotes>>> {
    Ok(Json(state.store.notes_for_document(&document_id)))
}

/// GET /notes/detail/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StudyNotes>> {
    let notes = state
        .store
        .get_study_notes(&id)
        .ok_or_else(|| ApiError::NotFound(format!("notes {id}")))?;
    Ok(Json(notes))
}

/// DELETE /notes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    if !state.store.delete_study_notes(&id) {
        return Err(ApiError::NotFound(format!("notes {id}")));
    }
    Ok(Json(MessageResponse::new("Notes deleted successfully")))
}
