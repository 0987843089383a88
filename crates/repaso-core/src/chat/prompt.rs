//! Prompt assembly for the quiz conversation.
//!
//! The model is addressed as a review-question instructor grounded in the
//! chat's note. A single system turn carries both the persona and the note
//! content, followed by the persisted history and the new user turn.

use repaso_types::chat::ChatMessage;
use repaso_types::llm::Turn;

/// Instructor persona for every conversation.
pub const INSTRUCTOR_PERSONA: &str =
    "Eres un profesor que hace preguntas de repaso basadas en los apuntes proporcionados.";

/// Template wrapping the note content for the system turn.
const NOTES_CONTEXT_PREFIX: &str =
    "Estos son los apuntes que debes usar como referencia para hacer preguntas: ";

/// Build the single system turn: persona plus note context.
pub fn system_turn(note_content: &str) -> Turn {
    Turn::system(format!(
        "{INSTRUCTOR_PERSONA}\n\n{NOTES_CONTEXT_PREFIX}{note_content}"
    ))
}

/// Assemble the full turn sequence for a completion request:
/// system turn, persisted history in order, then the new user message.
pub fn build_conversation(
    note_content: &str,
    history: &[ChatMessage],
    user_message: &str,
) -> Vec<Turn> {
    let mut turns = Vec::with_capacity(history.len() + 2);
    turns.push(system_turn(note_content));
    for msg in history {
        turns.push(Turn {
            role: msg.role,
            content: msg.content.clone(),
        });
    }
    turns.push(Turn::user(user_message));
    turns
}
