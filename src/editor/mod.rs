//! CardEditor - the single owner of a card and its edit history.
//!
//! Every mutation goes through this controller so it is recorded and can be
//! undone. It takes `&mut self` for all edits, which makes the engine's
//! single-writer rule a compile-time property; callers that share an editor
//! across threads must wrap it in their own lock.
//!
//! Between any two actions the card's paragraphs are in canonical form.
//! Redo re-runs a format edit with its original run indices, which is only
//! sound because the canonical form of a given text and formatting is
//! unique.
//!
//! # Example
//!
//! ```
//! use cardmark::editor::CardEditor;
//! use cardmark::format::{SpanSelection, Tool};
//! use cardmark::model::Paragraph;
//!
//! let mut editor = CardEditor::from_paragraphs(vec![Paragraph::from_text("The quick fox")]);
//! editor.apply_format(SpanSelection::within_run(0, 0, 4, 9), Tool::Highlight).unwrap();
//! assert_eq!(editor.paragraphs()[0].runs.len(), 3);
//!
//! editor.undo().unwrap();
//! assert_eq!(editor.paragraphs()[0], Paragraph::from_text("The quick fox"));
//! ```

mod apply;

use std::fmt;

use crate::config::EngineConfig;
use crate::error::{EditError, SnapshotError};
use crate::format::{self, Condensed, FormatChange, SpanSelection, Tool};
use crate::history::{
    Edit, EditHistory, HistoryStep, LogNotifier, Notification, Notifier, Revert,
};
use crate::model::{Author, Card, CardDate, DateField, Document, Paragraph, TextField};
use crate::snapshot;

use apply::{apply_edit, revert_edit};

/// One editing session over one card
pub struct CardEditor {
    card: Card,
    history: EditHistory,
    notifier: Box<dyn Notifier>,
    notify_undo_redo: bool,
}

impl fmt::Debug for CardEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardEditor")
            .field("card", &self.card)
            .field("history", &self.history)
            .field("notify_undo_redo", &self.notify_undo_redo)
            .finish_non_exhaustive()
    }
}

impl CardEditor {
    /// Start a session with default configuration
    pub fn new(card: Card) -> Self {
        Self::with_config(card, &EngineConfig::default())
    }

    /// Start a session; the card's paragraphs are canonicalized on entry
    pub fn with_config(mut card: Card, config: &EngineConfig) -> Self {
        card.paras.canonicalize();
        Self {
            card,
            history: EditHistory::with_max_size(config.max_history),
            notifier: Box::new(LogNotifier),
            notify_undo_redo: config.notify_undo_redo,
        }
    }

    /// Start a session over bare paragraphs
    pub fn from_paragraphs(paragraphs: Vec<Paragraph>) -> Self {
        Self::new(Card::with_paragraphs(paragraphs))
    }

    /// Rehydrate a fresh session from a `{text, underline, highlight}[][]`
    /// snapshot
    pub fn from_paragraphs_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(Self::from_paragraphs(snapshot::paragraphs_from_json(json)?))
    }

    /// Replace the notification sink
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn document(&self) -> &Document {
        &self.card.paras
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.card.paras.paragraphs
    }

    /// Owned copy of the paragraphs for serialization
    pub fn paragraphs_snapshot(&self) -> Vec<Paragraph> {
        self.card.paras.paragraphs.clone()
    }

    pub fn paragraphs_json(&self) -> Result<String, SnapshotError> {
        snapshot::paragraphs_to_json(self.paragraphs())
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// End the session, keeping the card
    pub fn into_card(self) -> Card {
        self.card
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Apply any edit and record it
    pub fn action(&mut self, edit: Edit) -> Result<(), EditError> {
        let revert = apply_edit(&mut self.card, &edit)?;
        self.history.record(edit, revert);
        Ok(())
    }

    /// Highlight, underline, or erase the selection
    pub fn apply_format(
        &mut self,
        selection: SpanSelection,
        tool: Tool,
    ) -> Result<FormatChange, EditError> {
        let change = format::apply_format(&mut self.card.paras, &selection, tool)?;
        self.history.record(
            Edit::EditParagraphs { selection, tool },
            Revert::EditParagraphs(change.clone()),
        );
        Ok(change)
    }

    /// Merge all paragraphs into one
    pub fn condense(&mut self) -> Condensed {
        let condensed = format::condense(&mut self.card.paras);
        self.history.record(
            Edit::CondenseParagraphs,
            Revert::CondenseParagraphs(condensed.clone()),
        );
        condensed
    }

    /// Split the condensed paragraph at `chop_points`, as a recorded action.
    ///
    /// Returns `Ok(false)` and records nothing unless the card holds exactly
    /// one paragraph. Undo puts the condensed paragraph back.
    pub fn uncondense(&mut self, chop_points: &[usize]) -> Result<bool, EditError> {
        if self.card.paras.len() != 1 {
            tracing::debug!(paragraphs = self.card.paras.len(), "nothing to uncondense");
            return Ok(false);
        }
        self.action(Edit::UncondenseParagraphs {
            chop_points: chop_points.to_vec(),
        })?;
        Ok(true)
    }

    pub fn set_text(&mut self, field: TextField, text: impl Into<String>) -> Result<(), EditError> {
        self.action(Edit::Text {
            field,
            text: text.into(),
        })
    }

    pub fn add_author(&mut self) -> Result<(), EditError> {
        self.action(Edit::AddAuthor)
    }

    pub fn delete_author(&mut self, index: usize) -> Result<(), EditError> {
        self.action(Edit::DeleteAuthor { index })
    }

    pub fn edit_author(&mut self, index: usize, author: Author) -> Result<(), EditError> {
        self.action(Edit::EditAuthor { index, author })
    }

    pub fn set_date(&mut self, field: DateField, date: CardDate) -> Result<(), EditError> {
        self.action(Edit::EditDate { field, date })
    }

    /// Swap in paragraphs computed elsewhere (auto-cut)
    pub fn replace_paragraphs(&mut self, paragraphs: Vec<Paragraph>) -> Result<(), EditError> {
        self.action(Edit::ReplaceParagraphs { paragraphs })
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Undo the most recent action. Returns false if there was none.
    pub fn undo(&mut self) -> Result<bool, EditError> {
        let Some(action) = self.history.peek_undo() else {
            tracing::debug!("nothing to undo");
            return Ok(false);
        };
        let kind = action.kind;
        revert_edit(&mut self.card, &action.undo)?;
        self.history.commit_undo();

        self.emit(Notification::new(HistoryStep::Undo, kind));
        Ok(true)
    }

    /// Re-apply the most recently undone action. Returns false if there was
    /// none.
    pub fn redo(&mut self) -> Result<bool, EditError> {
        let Some(action) = self.history.peek_redo() else {
            tracing::debug!("nothing to redo");
            return Ok(false);
        };
        let kind = action.kind;
        let revert = apply_edit(&mut self.card, &action.redo)?;
        self.history.commit_redo(revert);

        self.emit(Notification::new(HistoryStep::Redo, kind));
        Ok(true)
    }

    /// End the current coalescing group (call on focus loss)
    pub fn prevent_extension(&mut self) {
        self.history.prevent_extension();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn emit(&mut self, notification: Notification) {
        tracing::debug!(
            undone = self.history.position(),
            total = self.history.len(),
            "{}",
            notification
        );
        if self.notify_undo_redo {
            self.notifier.notify(&notification);
        }
    }
}
