//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use cardmark::history::Notification;
use cardmark::model::{Document, Format, Paragraph, Run};
use cardmark::CardEditor;

/// A run from `(text, underline, highlight)`
pub fn run(text: &str, underline: bool, highlight: bool) -> Run {
    Run::with_format(text, Format::new(underline, highlight))
}

/// Build paragraphs from `(text, underline, highlight)` triples
pub fn paragraphs(layout: &[&[(&str, bool, bool)]]) -> Vec<Paragraph> {
    layout
        .iter()
        .map(|runs| {
            Paragraph::new(
                runs.iter()
                    .map(|&(text, underline, highlight)| run(text, underline, highlight))
                    .collect(),
            )
        })
        .collect()
}

/// Flatten a paragraph into `(text, underline, highlight)` triples
pub fn triples(paragraph: &Paragraph) -> Vec<(String, bool, bool)> {
    paragraph
        .runs
        .iter()
        .map(|run| (run.text.clone(), run.underline, run.highlight))
        .collect()
}

/// Per-character format of every paragraph, for comparing documents whose
/// run segmentation may differ
pub fn char_formats(document: &Document) -> Vec<Vec<(char, Format)>> {
    document
        .paragraphs
        .iter()
        .map(|paragraph| {
            paragraph
                .runs
                .iter()
                .flat_map(|run| run.text.chars().map(move |ch| (ch, run.format())))
                .collect()
        })
        .collect()
}

/// An editor over plain paragraphs that records notification text
pub fn recording_editor(texts: &[&str]) -> (CardEditor, Rc<RefCell<Vec<String>>>) {
    let messages = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&messages);
    let editor = CardEditor::new(cardmark::Card::with_paragraphs(Document::from_texts(texts)))
        .with_notifier(move |n: &Notification| sink.borrow_mut().push(n.to_string()));
    (editor, messages)
}
