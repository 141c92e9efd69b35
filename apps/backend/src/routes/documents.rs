//! Document endpoints: upload, listing, deletion.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::extract;
use crate::services::files::FileStore;
use crate::AppState;

/// Only recognized document mime type.
pub const DOCUMENT_MIME: &str = "application/pdf";

/// Maximum accepted upload size.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// GET /documents
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Document>>> {
    Ok(Json(state.store.list_documents()))
}

/// POST /documents
///
/// Accepts a single file part. The document record is persisted before the
/// disk write, so a failed write leaves a record with empty text; extraction
/// is best-effort and substitutes placeholder text on failure.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Document>> {
    let mut file = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        if field.file_name().is_none() {
            continue;
        }
        let original_name = field
            .file_name()
            .unwrap_or("upload.pdf")
            .to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("failed to read file part: {e}")))?;
        file = Some((original_name, content_type, data));
        break;
    }

    let (original_name, content_type, data) =
        file.ok_or_else(|| ApiError::BadRequest("no file uploaded".to_string()))?;

    if content_type != DOCUMENT_MIME {
        return Err(ApiError::UnsupportedFile(content_type));
    }
    if data.len() > MAX_UPLOAD_BYTES {
        return Err(ApiError::BadRequest(format!(
            "file exceeds the {MAX_UPLOAD_BYTES} byte limit"
        )));
    }

    let filename = FileStore::unique_filename(&original_name);
    let file_path = state.files.root().join(&filename);

    let document = state.store.create_document(NewDocument {
        filename: filename.clone(),
        original_name,
        file_path: file_path.to_string_lossy().into_owned(),
        file_size: data.len() as i64,
    });

    // Acknowledged gap: the record above is not rolled back on write failure.
    state.files.save(&filename, &data).await?;

    let text = extract::text_or_placeholder(&data);
    state.store.set_document_text(&document.id, text);

    tracing::info!(id = %document.id, size = document.file_size, "document uploaded");

    let document = state.store.get_document(&document.id).unwrap_or(document);
    Ok(Json(document))
}

/// DELETE /documents/{id}
///
/// Removes the backing file and cascades deletion to all derived artifacts.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let document = state
        .store
        .get_document(&id)
        .ok_or_else(|| ApiError::NotFound(format!("document {id}")))?;

    state.files.remove(&document.file_path).await?;
    state.store.delete_document(&id);

    Ok(Json(MessageResponse::new("Document deleted successfully")))
}
