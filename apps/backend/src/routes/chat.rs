//! Tutoring chat endpoints.
//!
//! Messages are partitioned into scopes: general conversation or bound to a
//! single document. Listing and clearing never cross scopes.

use axum::{
    extract::{Query, State},
    Json,
};

use study_core::chat_system_prompt;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// How many prior messages are handed back as AI context.
pub const CHAT_CONTEXT_MESSAGES: usize = 10;

/// GET /chat/messages?documentId=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<Vec<ChatMessage>>> {
    let scope = Scope::from_document_id(query.document_id);
    Ok(Json(state.store.chat_messages(&scope)))
}

/// POST /chat/message
///
/// Persists the message and returns it together with the document text (if
/// scoped) and the most recent prior messages, oldest-first, for the
/// presentation layer's AI call.
pub async fn post_message(
    State(state): State<AppState>,
    Json(request): Json<ChatMessageRequest>,
) -> Result<Json<ChatMessageResponse>> {
    if request.content.trim().is_empty() {
        return Err(ApiError::BadRequest("message content required".to_string()));
    }

    let scope = Scope::from_document_id(request.document_id.clone());

    let document_text = scope
        .document_id()
        .and_then(|id| state.store.get_document(id))
        .and_then(|document| document.text_content);

    // Context is gathered before the insert: prior messages only.
    let mut context = state.store.chat_messages(&scope);
    if context.len() > CHAT_CONTEXT_MESSAGES {
        let excess = context.len() - CHAT_CONTEXT_MESSAGES;
        context.drain(..excess);
    }

    let message = state.store.create_chat_message(NewChatMessage {
        role: request.role,
        content: request.content,
        document_id: request.document_id,
    });

    let prompt = chat_system_prompt(document_text.as_deref());

    Ok(Json(ChatMessageResponse {
        message,
        context,
        document_text,
        prompt,
    }))
}

/// POST /chat/response
pub async fn post_response(
    State(state): State<AppState>,
    Json(request): Json<AssistantMessageRequest>,
) -> Result<Json<ChatMessage>> {
    if request.content.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "response content required".to_string(),
        ));
    }

    let message = state.store.create_chat_message(NewChatMessage {
        role: ChatRole::Assistant,
        content: request.content,
        document_id: request.document_id,
    });

    Ok(Json(message))
}

/// DELETE /chat?documentId=
pub async fn clear(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<MessageResponse>> {
    let scope = Scope::from_document_id(query.document_id);
    state.store.clear_chat_messages(&scope);
    Ok(Json(MessageResponse::new("Chat cleared successfully")))
}
