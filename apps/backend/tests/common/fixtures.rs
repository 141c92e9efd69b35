//! Test fixtures and factory functions for creating test data.

use lopdf::{content::Content, content::Operation, dictionary, Document, Object, Stream};
use serde_json::{json, Value};

/// Build a minimal one-page PDF containing the given text.
pub fn pdf_with_text(text: &str) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 48.into()]),
            Operation::new("Td", vec![100.into(), 600.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Bytes that look like a PDF but fail to parse, padded to an exact length.
pub fn unparseable_pdf_bytes(len: usize) -> Vec<u8> {
    let mut bytes = b"%PDF-1.4\n".to_vec();
    bytes.resize(len, 0);
    bytes
}

/// Create a question-generation prepare request body.
pub fn generate_questions_request(document_id: &str, count: u32, types: &[&str]) -> Value {
    json!({
        "documentId": document_id,
        "count": count,
        "difficulty": "easy",
        "types": types,
    })
}

/// Create a single MCQ question payload.
pub fn mcq_payload(question: &str) -> Value {
    json!({
        "type": "mcq",
        "difficulty": "easy",
        "question": question,
        "options": ["A", "B", "C", "D"],
        "correctAnswer": "A",
    })
}

/// Create a questions commit request body.
pub fn commit_questions_request(document_id: &str, questions: Vec<Value>) -> Value {
    json!({
        "documentId": document_id,
        "questions": questions,
    })
}

/// Create a chat message request body.
pub fn chat_message(content: &str, document_id: Option<&str>) -> Value {
    match document_id {
        Some(id) => json!({ "role": "user", "content": content, "documentId": id }),
        None => json!({ "role": "user", "content": content }),
    }
}

/// Create a notes prepare request body.
pub fn generate_notes_request(document_id: &str, style: &str) -> Value {
    json!({
        "documentId": document_id,
        "style": style,
        "includeKeyTerms": true,
    })
}

/// Create a notes commit request body.
pub fn commit_notes_request(document_id: &str, title: Option<&str>, content: &str) -> Value {
    match title {
        Some(title) => json!({
            "documentId": document_id,
            "title": title,
            "content": content,
            "style": "summary",
        }),
        None => json!({
            "documentId": document_id,
            "content": content,
            "style": "summary",
        }),
    }
}
