//! In-memory storage for documents and their derived artifacts.
//!
//! The `Storage` trait is the contract the route layer programs against; a
//! persistent backing store can replace `MemStore` without touching the
//! handlers. All contents are process-lifetime only.

use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use study_core::types::{
    ChatMessage, Document, NewChatMessage, NewDocument, NewQuestion, NewStudyNotes, Question,
    Scope, StudyNotes,
};

/// Repository contract for documents, questions, chat messages, and notes.
///
/// Ordering rules: documents, questions, and notes list newest-first; chat
/// messages list oldest-first (conversation order). The asymmetry is
/// intentional.
pub trait Storage: Send + Sync {
    // Document operations
    fn create_document(&self, new: NewDocument) -> Document;
    fn get_document(&self, id: &str) -> Option<Document>;
    fn list_documents(&self) -> Vec<Document>;
    /// No-op if the id is unknown.
    fn set_document_text(&self, id: &str, text: String);
    /// Removes the document and cascades to questions, the document's chat
    /// scope, and notes. The general chat scope is untouched.
    fn delete_document(&self, id: &str);

    // Question operations
    fn create_question(&self, new: NewQuestion) -> Question;
    fn questions_for_document(&self, document_id: &str) -> Vec<Question>;
    fn delete_questions_for_document(&self, document_id: &str);

    // Chat message operations
    fn create_chat_message(&self, new: NewChatMessage) -> ChatMessage;
    fn chat_messages(&self, scope: &Scope) -> Vec<ChatMessage>;
    fn clear_chat_messages(&self, scope: &Scope);

    // Study notes operations
    fn create_study_notes(&self, new: NewStudyNotes) -> StudyNotes;
    fn notes_for_document(&self, document_id: &str) -> Vec<StudyNotes>;
    fn get_study_notes(&self, id: &str) -> Option<StudyNotes>;
    /// Returns false if the id was unknown.
    fn delete_study_notes(&self, id: &str) -> bool;
}

/// In-memory store backed by insertion-ordered tables.
///
/// Insertion order doubles as chronological order, so newest-first listings
/// iterate in reverse without sorting. Equal timestamps never reorder.
#[derive(Default)]
pub struct MemStore {
    documents: RwLock<Vec<Document>>,
    questions: RwLock<Vec<Question>>,
    chat_messages: RwLock<Vec<ChatMessage>>,
    study_notes: RwLock<Vec<StudyNotes>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn new_id() -> String {
        Uuid::new_v4().to_string()
    }
}

impl Storage for MemStore {
    fn create_document(&self, new: NewDocument) -> Document {
        let document = Document {
            id: Self::new_id(),
            filename: new.filename,
            original_name: new.original_name,
            file_path: new.file_path,
            file_size: new.file_size,
            uploaded_at: Utc::now(),
            text_content: None,
        };
        self.documents.write().push(document.clone());
        document
    }

    fn get_document(&self, id: &str) -> Option<Document> {
        self.documents.read().iter().find(|d| d.id == id).cloned()
    }

    fn list_documents(&self) -> Vec<Document> {
        self.documents.read().iter().rev().cloned().collect()
    }

    fn set_document_text(&self, id: &str, text: String) {
        let mut documents = self.documents.write();
        if let Some(document) = documents.iter_mut().find(|d| d.id == id) {
            document.text_content = Some(text);
        }
    }

    fn delete_document(&self, id: &str) {
        self.documents.write().retain(|d| d.id != id);
        self.delete_questions_for_document(id);
        self.clear_chat_messages(&Scope::ForDocument(id.to_string()));
        self.study_notes.write().retain(|n| n.document_id != id);
    }

    fn create_question(&self, new: NewQuestion) -> Question {
        let question = Question {
            id: Self::new_id(),
            document_id: new.document_id,
            kind: new.kind,
            difficulty: new.difficulty,
            question: new.question,
            options: new.options,
            correct_answer: new.correct_answer,
            explanation: new.explanation,
            created_at: Utc::now(),
        };
        self.questions.write().push(question.clone());
        question
    }

    fn questions_for_document(&self, document_id: &str) -> Vec<Question> {
        self.questions
            .read()
            .iter()
            .rev()
            .filter(|q| q.document_id == document_id)
            .cloned()
            .collect()
    }

    fn delete_questions_for_document(&self, document_id: &str) {
        self.questions
            .write()
            .retain(|q| q.document_id != document_id);
    }

    fn create_chat_message(&self, new: NewChatMessage) -> ChatMessage {
        let message = ChatMessage {
            id: Self::new_id(),
            role: new.role,
            content: new.content,
            document_id: new.document_id,
            created_at: Utc::now(),
        };
        self.chat_messages.write().push(message.clone());
        message
    }

    fn chat_messages(&self, scope: &Scope) -> Vec<ChatMessage> {
        self.chat_messages
            .read()
            .iter()
            .filter(|m| scope.contains(m.document_id.as_deref()))
            .cloned()
            .collect()
    }

    fn clear_chat_messages(&self, scope: &Scope) {
        self.chat_messages
            .write()
            .retain(|m| !scope.contains(m.document_id.as_deref()));
    }

    fn create_study_notes(&self, new: NewStudyNotes) -> StudyNotes {
        let notes = StudyNotes {
            id: Self::new_id(),
            document_id: new.document_id,
            title: new.title,
            content: new.content,
            style: new.style,
            chapter: new.chapter,
            include_key_terms: new.include_key_terms,
            include_examples: new.include_examples,
            created_at: Utc::now(),
        };
        self.study_notes.write().push(notes.clone());
        notes
    }

    fn notes_for_document(&self, document_id: &str) -> Vec<StudyNotes> {
        self.study_notes
            .read()
            .iter()
            .rev()
            .filter(|n| n.document_id == document_id)
            .cloned()
            .collect()
    }

    fn get_study_notes(&self, id: &str) -> Option<StudyNotes> {
        self.study_notes.read().iter().find(|n| n.id == id).cloned()
    }

    fn delete_study_notes(&self, id: &str) -> bool {
        let mut notes = self.study_notes.write();
        let before = notes.len();
        notes.retain(|n| n.id != id);
        notes.len() < before
    }
}
