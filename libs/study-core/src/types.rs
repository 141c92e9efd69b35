//! Core types for the study helper application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// Bounds for question generation requests.
pub const MIN_QUESTION_COUNT: u32 = 1;
pub const MAX_QUESTION_COUNT: u32 = 50;

/// An uploaded document plus its extracted text and metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    /// Server-side stored filename (unique).
    pub filename: String,
    /// Filename as supplied by the client.
    pub original_name: String,
    pub file_path: String,
    pub file_size: i64,
    pub uploaded_at: DateTime<Utc>,
    /// Absent until extraction completes or falls back to placeholder text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
}

/// Document fields supplied at creation time (id and timestamp are assigned
/// by the store).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub filename: String,
    pub original_name: String,
    pub file_path: String,
    pub file_size: i64,
}

/// Question type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Mcq,
    Short,
    Long,
    TrueFalse,
    FillBlank,
}

impl QuestionType {
    /// Get the type tag as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mcq => "mcq",
            Self::Short => "short",
            Self::Long => "long",
            Self::TrueFalse => "true_false",
            Self::FillBlank => "fill_blank",
        }
    }
}

/// Question difficulty tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// A generated quiz question attached to a document. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub document_id: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub difficulty: Difficulty,
    pub question: String,
    /// Choice strings, meaningful only for multiple-choice questions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Question fields supplied at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    pub document_id: String,
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

impl NewQuestion {
    /// Check payload validity before persisting.
    pub fn validate(&self) -> Result<()> {
        if self.question.trim().is_empty() {
            return Err(ValidationError::EmptyQuestionText);
        }
        Ok(())
    }
}

/// Chat message role tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single chat message. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    /// Absent for general (untargeted) conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Chat message fields supplied at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChatMessage {
    pub role: ChatRole,
    pub content: String,
    #[serde(default)]
    pub document_id: Option<String>,
}

/// The partition chat messages live in: general conversation or bound to one
/// document. The two scopes never mix in listing or clearing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    General,
    ForDocument(String),
}

impl Scope {
    /// Build a scope from the optional document id used on the wire.
    pub fn from_document_id(document_id: Option<String>) -> Self {
        match document_id {
            Some(id) => Self::ForDocument(id),
            None => Self::General,
        }
    }

    /// Whether a message with the given document reference belongs to this scope.
    pub fn contains(&self, document_id: Option<&str>) -> bool {
        match self {
            Self::General => document_id.is_none(),
            Self::ForDocument(id) => document_id == Some(id.as_str()),
        }
    }

    /// The document id this scope is bound to, if any.
    pub fn document_id(&self) -> Option<&str> {
        match self {
            Self::General => None,
            Self::ForDocument(id) => Some(id.as_str()),
        }
    }
}

/// Study notes style tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotesStyle {
    Summary,
    Detailed,
    Outline,
}

impl NotesStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Detailed => "detailed",
            Self::Outline => "outline",
        }
    }
}

/// Generated study notes attached to a document. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyNotes {
    pub id: String,
    pub document_id: String,
    pub title: String,
    /// Rich text rendered as HTML.
    pub content: String,
    pub style: NotesStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    pub include_key_terms: bool,
    pub include_examples: bool,
    pub created_at: DateTime<Utc>,
}

/// Study notes fields supplied at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudyNotes {
    pub document_id: String,
    pub title: String,
    pub content: String,
    pub style: NotesStyle,
    #[serde(default)]
    pub chapter: Option<String>,
    #[serde(default)]
    pub include_key_terms: bool,
    #[serde(default)]
    pub include_examples: bool,
}

/// Request to generate questions from a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    pub document_id: String,
    pub count: u32,
    pub difficulty: Difficulty,
    pub types: Vec<QuestionType>,
}

impl GenerateQuestionsRequest {
    /// Check count bounds and that at least one type tag was requested.
    pub fn validate(&self) -> Result<()> {
        if self.count < MIN_QUESTION_COUNT || self.count > MAX_QUESTION_COUNT {
            return Err(ValidationError::CountOutOfRange {
                min: MIN_QUESTION_COUNT,
                max: MAX_QUESTION_COUNT,
                got: self.count,
            });
        }
        if self.types.is_empty() {
            return Err(ValidationError::NoQuestionTypes);
        }
        Ok(())
    }
}

/// Request to generate study notes from a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateNotesRequest {
    pub document_id: String,
    pub style: NotesStyle,
    #[serde(default)]
    pub chapter: Option<String>,
    #[serde(default)]
    pub include_key_terms: bool,
    #[serde(default)]
    pub include_examples: bool,
}

impl GenerateNotesRequest {
    /// Title used when the commit step supplies none.
    pub fn default_title(&self) -> String {
        format!("Study Notes - {}", self.style.as_str())
    }
}
