//! Runs - the smallest span of text sharing one formatting state

use serde::{Deserialize, Serialize};

use crate::util::text::{char_len, split_at_char};

/// The formatting state of a run.
///
/// Highlight and underline are independent flags; no tool ever reads one
/// to decide the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Format {
    pub underline: bool,
    pub highlight: bool,
}

impl Format {
    /// No underline, no highlight
    pub const PLAIN: Format = Format {
        underline: false,
        highlight: false,
    };

    pub fn new(underline: bool, highlight: bool) -> Self {
        Self {
            underline,
            highlight,
        }
    }

    pub fn underlined() -> Self {
        Self::new(true, false)
    }

    pub fn highlighted() -> Self {
        Self::new(false, true)
    }
}

/// A span of text with one formatting state.
///
/// Serializes as `{ "text": ..., "underline": ..., "highlight": ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub highlight: bool,
}

impl Run {
    /// Create an unformatted run
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_format(text, Format::PLAIN)
    }

    /// Create a run with the given format
    pub fn with_format(text: impl Into<String>, format: Format) -> Self {
        Self {
            text: text.into(),
            underline: format.underline,
            highlight: format.highlight,
        }
    }

    pub fn format(&self) -> Format {
        Format::new(self.underline, self.highlight)
    }

    pub fn set_format(&mut self, format: Format) {
        self.underline = format.underline;
        self.highlight = format.highlight;
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        char_len(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Split into two by-value copies at a character offset.
    ///
    /// Both halves keep this run's format; either may be empty.
    pub fn split_at(&self, offset: usize) -> (Run, Run) {
        let (head, tail) = split_at_char(&self.text, offset);
        let format = self.format();
        (
            Run::with_format(head, format),
            Run::with_format(tail, format),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_format() {
        let run = Run::with_format("hello world", Format::highlighted());
        let (head, tail) = run.split_at(5);
        assert_eq!(head, Run::with_format("hello", Format::highlighted()));
        assert_eq!(tail, Run::with_format(" world", Format::highlighted()));
    }

    #[test]
    fn test_split_at_edges_yields_empty_piece() {
        let run = Run::new("abc");
        let (head, tail) = run.split_at(0);
        assert!(head.is_empty());
        assert_eq!(tail.text, "abc");

        let (head, tail) = run.split_at(3);
        assert_eq!(head.text, "abc");
        assert!(tail.is_empty());
    }

    #[test]
    fn test_len_is_char_count() {
        assert_eq!(Run::new("café").len(), 4);
    }

    #[test]
    fn test_missing_flags_default_to_false() {
        let run: Run = serde_json::from_str(r#"{"text":"x"}"#).unwrap();
        assert_eq!(run.format(), Format::PLAIN);
    }
}
