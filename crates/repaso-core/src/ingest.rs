//! Note ingestion helpers.
//!
//! Uploaded material is cut to a fixed character limit before it is stored
//! or embedded in the system prompt. The cutoff is hard (not word-boundary
//! aware) and counts Unicode scalar values, so multi-byte content can never
//! split inside a character.

/// Maximum note length in characters.
pub const MAX_NOTE_CHARS: usize = 2000;

/// Return the first `max_chars` characters of `input`.
///
/// Inputs at or under the limit are returned unchanged.
pub fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &input[..byte_idx],
        None => input,
    }
}
