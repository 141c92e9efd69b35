//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from study-core
pub use study_core::types::{
    ChatMessage, ChatRole, Difficulty, Document, GenerateNotesRequest, GenerateQuestionsRequest,
    NewChatMessage, NewDocument, NewQuestion, NewStudyNotes, NotesStyle, Question, QuestionType,
    Scope, StudyNotes,
};

/// Generic acknowledgement body for deletes and clears.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response to `POST /questions/prepare`: everything the presentation layer
/// needs for the external AI call.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepareQuestionsResponse {
    pub text_content: String,
    pub request: GenerateQuestionsRequest,
    pub prompt: String,
}

/// Externally generated question payload, before id/timestamp assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPayload {
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub difficulty: Difficulty,
    pub question: String,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl QuestionPayload {
    pub fn into_new_question(self, document_id: &str) -> NewQuestion {
        NewQuestion {
            document_id: document_id.to_string(),
            kind: self.kind,
            difficulty: self.difficulty,
            question: self.question,
            options: self.options,
            correct_answer: self.correct_answer,
            explanation: self.explanation,
        }
    }
}

/// Body of `POST /questions/commit`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitQuestionsRequest {
    pub document_id: String,
    pub questions: Vec<QuestionPayload>,
}

/// Query string carrying an optional chat scope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeQuery {
    pub document_id: Option<String>,
}

/// Body of `POST /chat/message`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageRequest {
    pub role: ChatRole,
    pub content: String,
    #[serde(default)]
    pub document_id: Option<String>,
}

/// Response to `POST /chat/message`: the persisted message plus the context
/// the presentation layer hands to the AI provider.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageResponse {
    pub message: ChatMessage,
    /// Up to the 10 most recent prior messages in the same scope, oldest-first.
    pub context: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_text: Option<String>,
    pub prompt: String,
}

/// Body of `POST /chat/response` (externally produced assistant message).
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantMessageRequest {
    pub content: String,
    #[serde(default)]
    pub document_id: Option<String>,
}

/// Response to `POST /notes/prepare`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepareNotesResponse {
    pub text_content: String,
    pub request: GenerateNotesRequest,
    pub document_name: String,
    pub prompt: String,
}

/// Body of `POST /notes/commit`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitNotesRequest {
    pub document_id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    pub style: NotesStyle,
    #[serde(default)]
    pub chapter: Option<String>,
    #[serde(default)]
    pub include_key_terms: bool,
    #[serde(default)]
    pub include_examples: bool,
}
