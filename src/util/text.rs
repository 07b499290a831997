//! Character-offset helpers for run text
//!
//! Every offset in this crate counts Unicode scalar values, not bytes, so a
//! split can never land inside a UTF-8 sequence.

/// Number of characters in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of the character at `char_offset`, clamped to the end of `text`
pub fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Split `text` into the first `char_offset` characters and the rest
pub fn split_at_char(text: &str, char_offset: usize) -> (&str, &str) {
    text.split_at(char_to_byte(text, char_offset))
}
