//! Prompt construction for the external AI provider.
//!
//! The backend never calls the AI service itself; it hands these prompts to
//! the presentation layer alongside the extracted document text.

use crate::types::{GenerateNotesRequest, GenerateQuestionsRequest, NotesStyle};

/// Maximum document text embedded in the chat system context.
const CHAT_CONTEXT_TEXT_LIMIT: usize = 2000;

/// Build the question-generation prompt for a document's text.
pub fn question_prompt(request: &GenerateQuestionsRequest, text_content: &str) -> String {
    let types = request
        .types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let difficulty = request.difficulty.as_str();

    format!(
        "Generate {count} {difficulty} difficulty questions from the following text content.\n\
         \n\
         Include these question types: {types}.\n\
         \n\
         Text content:\n\
         {text_content}\n\
         \n\
         For each question, provide:\n\
         - type: one of {types}\n\
         - difficulty: {difficulty}\n\
         - question: the question text\n\
         - options: array of 4 options for MCQ questions (null for others)\n\
         - correctAnswer: the correct answer\n\
         - explanation: brief explanation of the answer\n\
         \n\
         Return as JSON with this structure:\n\
         {{\n\
           \"questions\": [\n\
             {{\n\
               \"type\": \"mcq\",\n\
               \"difficulty\": \"{difficulty}\",\n\
               \"question\": \"What is...\",\n\
               \"options\": [\"A\", \"B\", \"C\", \"D\"],\n\
               \"correctAnswer\": \"A\",\n\
               \"explanation\": \"...\"\n\
             }}\n\
           ]\n\
         }}",
        count = request.count,
    )
}

/// Build the notes-generation prompt for a document's text.
pub fn notes_prompt(request: &GenerateNotesRequest, text_content: &str) -> String {
    let style_instruction = match request.style {
        NotesStyle::Summary => {
            "Create a concise summary highlighting the main points and key concepts."
        }
        NotesStyle::Detailed => {
            "Create comprehensive notes with detailed explanations, examples, and elaborations."
        }
        NotesStyle::Outline => {
            "Create a structured outline format with main topics, subtopics, and bullet points."
        }
    };

    let focus = match &request.chapter {
        Some(chapter) => format!("Focus on: {chapter}"),
        None => "Cover the entire document.".to_string(),
    };

    let mut requirements = vec![format!("- Style: {style_instruction}")];
    if request.include_key_terms {
        requirements.push("- Include a section with key terms and definitions".to_string());
    }
    if request.include_examples {
        requirements.push("- Include relevant examples and case studies".to_string());
    }
    requirements.push("- Use clear headings and formatting".to_string());
    requirements.push("- Make it suitable for studying and review".to_string());

    format!(
        "Generate {style} study notes from the following content.\n\
         \n\
         {focus}\n\
         \n\
         Requirements:\n\
         {requirements}\n\
         \n\
         Text content:\n\
         {text_content}\n\
         \n\
         Format the response as HTML with proper headings (h1, h2, h3), paragraphs, lists, and emphasis.",
        style = request.style.as_str(),
        requirements = requirements.join("\n"),
    )
}

/// Build the tutor system context for a chat exchange, embedding at most the
/// first 2000 characters of the referenced document's text.
pub fn chat_system_prompt(document_text: Option<&str>) -> String {
    let material = match document_text {
        Some(text) => {
            let excerpt: String = text.chars().take(CHAT_CONTEXT_TEXT_LIMIT).collect();
            format!("You have access to the following study material:\n\n{excerpt}")
        }
        None => "You provide general tutoring assistance.".to_string(),
    };

    format!(
        "You are a helpful educational tutor. You provide clear, encouraging explanations \
         and help students understand concepts. {material}\n\
         \n\
         Guidelines:\n\
         - Be encouraging and supportive\n\
         - Break down complex concepts into simple steps\n\
         - Use examples when helpful\n\
         - Ask follow-up questions to check understanding\n\
         - If referencing the provided material, be specific about which concepts you're discussing"
    )
}
