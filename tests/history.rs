//! Edit history tests - coalescing, truncation, field edits, notifications

mod common;

use cardmark::format::{SpanSelection, Tool};
use cardmark::history::Edit;
use cardmark::model::{Author, Card, CardDate, DateField, Paragraph, TextField};
use cardmark::{CardEditor, EditError};
use common::recording_editor;

// ========================================================================
// Coalescing
// ========================================================================

#[test]
fn test_consecutive_text_edits_coalesce() {
    let (mut editor, messages) = recording_editor(&[]);
    editor.set_text(TextField::Title, "H").unwrap();
    editor.set_text(TextField::Title, "He").unwrap();
    editor.set_text(TextField::Title, "Hey").unwrap();
    assert_eq!(editor.history().len(), 1);

    assert!(editor.undo().unwrap());
    assert_eq!(editor.card().title, "");
    assert!(!editor.can_undo());
    assert_eq!(*messages.borrow(), vec!["Undid text edit"]);
}

#[test]
fn test_redo_after_coalescing_restores_latest_value() {
    let (mut editor, _) = recording_editor(&[]);
    editor.set_text(TextField::Tag, "a").unwrap();
    editor.set_text(TextField::Tag, "ab").unwrap();

    editor.undo().unwrap();
    editor.redo().unwrap();
    assert_eq!(editor.card().tag, "ab");
}

#[test]
fn test_edits_to_different_fields_do_not_coalesce() {
    let (mut editor, _) = recording_editor(&[]);
    editor.set_text(TextField::Title, "Title").unwrap();
    editor.set_text(TextField::Url, "https://example.com").unwrap();
    assert_eq!(editor.history().len(), 2);

    editor.undo().unwrap();
    assert_eq!(editor.card().url, "");
    assert_eq!(editor.card().title, "Title");
}

#[test]
fn test_prevent_extension_starts_new_group() {
    let (mut editor, _) = recording_editor(&[]);
    editor.set_text(TextField::Title, "first").unwrap();
    editor.prevent_extension();
    editor.set_text(TextField::Title, "first second").unwrap();

    editor.undo().unwrap();
    assert_eq!(editor.card().title, "first");
}

#[test]
fn test_intervening_action_closes_group() {
    let (mut editor, _) = recording_editor(&["body"]);
    editor.set_text(TextField::Title, "a").unwrap();
    editor
        .apply_format(SpanSelection::within_run(0, 0, 0, 4), Tool::Underline)
        .unwrap();
    editor.set_text(TextField::Title, "ab").unwrap();
    assert_eq!(editor.history().len(), 3);

    editor.undo().unwrap();
    assert_eq!(editor.card().title, "a");
}

#[test]
fn test_format_edits_never_coalesce() {
    let (mut editor, _) = recording_editor(&["one two three"]);
    editor
        .apply_format(SpanSelection::within_run(0, 0, 0, 3), Tool::Highlight)
        .unwrap();
    editor
        .apply_format(SpanSelection::within_run(0, 1, 1, 4), Tool::Highlight)
        .unwrap();
    assert_eq!(editor.history().len(), 2);
}

#[test]
fn test_author_edits_coalesce_per_index() {
    let (mut editor, _) = recording_editor(&[]);
    editor.add_author().unwrap();
    let mut author = editor.card().authors[0].clone();

    author.name = "J".to_string();
    editor.edit_author(0, author.clone()).unwrap();
    author.name = "Jane".to_string();
    editor.edit_author(0, author).unwrap();
    assert_eq!(editor.history().len(), 2);

    editor.undo().unwrap();
    assert_eq!(editor.card().authors[0].name, "");
}

#[test]
fn test_date_edits_coalesce() {
    let (mut editor, messages) = recording_editor(&[]);
    editor
        .set_date(DateField::Date, CardDate::new("Mar", "", ""))
        .unwrap();
    editor
        .set_date(DateField::Date, CardDate::new("Mar", "14", "2021"))
        .unwrap();
    assert_eq!(editor.history().len(), 1);

    editor.undo().unwrap();
    assert_eq!(editor.card().date, CardDate::default());
    editor.redo().unwrap();
    assert_eq!(editor.card().date, CardDate::new("Mar", "14", "2021"));
    assert_eq!(*messages.borrow(), vec!["Undid date edit", "Redid date edit"]);
}

// ========================================================================
// Branch truncation and clamping
// ========================================================================

#[test]
fn test_new_edit_after_undo_truncates_redo() {
    let (mut editor, _) = recording_editor(&["some body text"]);
    editor
        .apply_format(SpanSelection::within_run(0, 0, 0, 4), Tool::Highlight)
        .unwrap();
    editor.undo().unwrap();
    assert!(editor.can_redo());

    editor
        .apply_format(SpanSelection::within_run(0, 0, 5, 9), Tool::Underline)
        .unwrap();
    assert!(!editor.can_redo());
    assert!(!editor.redo().unwrap());
    assert_eq!(editor.history().len(), 1);
}

#[test]
fn test_undo_past_start_is_clamped() {
    let (mut editor, messages) = recording_editor(&[]);
    editor.set_text(TextField::SiteName, "Site").unwrap();

    assert!(editor.undo().unwrap());
    assert!(!editor.undo().unwrap());
    assert!(!editor.undo().unwrap());
    assert_eq!(editor.history().position(), 1);

    assert!(editor.redo().unwrap());
    assert!(!editor.redo().unwrap());
    assert_eq!(editor.history().position(), 0);
    assert_eq!(messages.borrow().len(), 2);
}

// ========================================================================
// Authors and paragraphs
// ========================================================================

#[test]
fn test_add_and_delete_author_round_trip() {
    let mut card = Card::default();
    card.authors = vec![
        Author {
            name: "Ada".to_string(),
            is_person: true,
            description: Some("Mathematician".to_string()),
            id: 0,
        },
        Author {
            name: "Institute".to_string(),
            is_person: false,
            description: None,
            id: 1,
        },
    ];
    let mut editor = CardEditor::new(card);

    editor.add_author().unwrap();
    assert_eq!(editor.card().authors[2], Author::blank(2));

    editor.delete_author(0).unwrap();
    assert_eq!(editor.card().authors.len(), 2);
    assert_eq!(editor.card().authors[0].name, "Institute");

    editor.undo().unwrap();
    assert_eq!(editor.card().authors[0].name, "Ada");
    editor.undo().unwrap();
    assert_eq!(editor.card().authors.len(), 2);

    editor.redo().unwrap();
    editor.redo().unwrap();
    assert_eq!(editor.card().authors.len(), 2);
    assert_eq!(editor.card().authors[1], Author::blank(2));
}

#[test]
fn test_invalid_author_index_is_rejected() {
    let mut editor = CardEditor::new(Card::default());
    assert_eq!(
        editor.edit_author(0, Author::blank(0)),
        Err(EditError::InvalidAuthorIndex(0))
    );
    assert!(editor.history().is_empty());
}

#[test]
fn test_replace_paragraphs_is_reversible() {
    let (mut editor, messages) = recording_editor(&["long original text", "more"]);
    let before = editor.document().clone();

    editor
        .action(Edit::ReplaceParagraphs {
            paragraphs: vec![Paragraph::from_text("cut text")],
        })
        .unwrap();
    assert_eq!(editor.document().plain_texts(), vec!["cut text".to_string()]);

    editor.undo().unwrap();
    assert_eq!(editor.document(), &before);
    assert_eq!(*messages.borrow(), vec!["Undid auto-cut"]);
}

#[test]
fn test_mixed_session_undoes_in_reverse_order() {
    let (mut editor, messages) = recording_editor(&["Evidence body here"]);
    let initial = editor.card().clone();

    editor.set_text(TextField::Tag, "Claim").unwrap();
    editor.prevent_extension();
    editor
        .apply_format(SpanSelection::within_run(0, 0, 0, 8), Tool::Highlight)
        .unwrap();
    editor.add_author().unwrap();
    editor.condense();

    while editor.undo().unwrap() {}
    assert_eq!(editor.card(), &initial);
    assert_eq!(
        *messages.borrow(),
        vec![
            "Undid paragraph condensation",
            "Undid author addition",
            "Undid paragraph edit",
            "Undid text edit",
        ]
    );
}
