//! Core study helper library shared by the backend service.
//!
//! Provides:
//! - Shared domain types (Document, Question, ChatMessage, StudyNotes)
//! - Chat scope partitioning (general vs. document-bound conversation)
//! - Generation request validation
//! - Prompt construction for the external AI provider

pub mod error;
pub mod prompt;
pub mod types;

pub use error::{Result, ValidationError};
pub use prompt::{chat_system_prompt, notes_prompt, question_prompt};
pub use types::{
    ChatMessage, ChatRole, Difficulty, Document, GenerateNotesRequest, GenerateQuestionsRequest,
    NewChatMessage, NewDocument, NewQuestion, NewStudyNotes, NotesStyle, Question, QuestionType,
    Scope, StudyNotes,
};
