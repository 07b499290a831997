//! Action types recorded in the edit history.

use serde::{Deserialize, Serialize};

use crate::format::{Condensed, FormatChange, SpanSelection, Tool};
use crate::model::{Author, CardDate, DateField, Paragraph, TextField};

/// Kind of a recorded action, used for coalescing and notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    Text,
    AddAuthor,
    DeleteAuthor,
    EditAuthor,
    EditDate,
    EditParagraphs,
    CondenseParagraphs,
    UncondenseParagraphs,
    ReplaceParagraphs,
}

impl ActionKind {
    /// Human-readable name used in "Undid ..." / "Redid ..." messages
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Text => "text edit",
            ActionKind::AddAuthor => "author addition",
            ActionKind::DeleteAuthor => "author deletion",
            ActionKind::EditAuthor => "author edit",
            ActionKind::EditDate => "date edit",
            ActionKind::EditParagraphs => "paragraph edit",
            ActionKind::CondenseParagraphs => "paragraph condensation",
            ActionKind::UncondenseParagraphs => "paragraph split",
            ActionKind::ReplaceParagraphs => "auto-cut",
        }
    }

    /// Single-field edits merge into one undo unit while typing
    pub fn coalesces(self) -> bool {
        matches!(
            self,
            ActionKind::Text | ActionKind::EditAuthor | ActionKind::EditDate
        )
    }
}

/// A forward edit request. Also the redo payload: redo re-runs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum Edit {
    Text { field: TextField, text: String },
    AddAuthor,
    DeleteAuthor { index: usize },
    EditAuthor { index: usize, author: Author },
    EditDate { field: DateField, date: CardDate },
    EditParagraphs { selection: SpanSelection, tool: Tool },
    CondenseParagraphs,
    UncondenseParagraphs { chop_points: Vec<usize> },
    ReplaceParagraphs { paragraphs: Vec<Paragraph> },
}

impl Edit {
    pub fn kind(&self) -> ActionKind {
        match self {
            Edit::Text { .. } => ActionKind::Text,
            Edit::AddAuthor => ActionKind::AddAuthor,
            Edit::DeleteAuthor { .. } => ActionKind::DeleteAuthor,
            Edit::EditAuthor { .. } => ActionKind::EditAuthor,
            Edit::EditDate { .. } => ActionKind::EditDate,
            Edit::EditParagraphs { .. } => ActionKind::EditParagraphs,
            Edit::CondenseParagraphs => ActionKind::CondenseParagraphs,
            Edit::UncondenseParagraphs { .. } => ActionKind::UncondenseParagraphs,
            Edit::ReplaceParagraphs { .. } => ActionKind::ReplaceParagraphs,
        }
    }

    /// Whether both edits write the same field, so one undo can cover both
    pub fn same_target(&self, other: &Edit) -> bool {
        match (self, other) {
            (Edit::Text { field: a, .. }, Edit::Text { field: b, .. }) => a == b,
            (Edit::EditAuthor { index: a, .. }, Edit::EditAuthor { index: b, .. }) => a == b,
            (Edit::EditDate { field: a, .. }, Edit::EditDate { field: b, .. }) => a == b,
            _ => false,
        }
    }
}

/// Data needed to reverse an applied [`Edit`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum Revert {
    Text { field: TextField, old_text: String },
    AddAuthor,
    DeleteAuthor { index: usize, author: Author },
    EditAuthor { index: usize, old_author: Author },
    EditDate { field: DateField, old_date: CardDate },
    EditParagraphs(FormatChange),
    CondenseParagraphs(Condensed),
    ReplaceParagraphs { old_paragraphs: Vec<Paragraph> },
}

/// One entry in the history log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    /// How to reverse the edit
    pub undo: Revert,
    /// How to re-apply the edit
    pub redo: Edit,
    /// Whether the next same-field edit may merge into this one
    pub can_extend: bool,
}

impl Action {
    pub fn new(redo: Edit, undo: Revert) -> Self {
        Self {
            kind: redo.kind(),
            undo,
            redo,
            can_extend: true,
        }
    }

    /// Whether `edit` may merge into this action instead of being recorded
    /// separately
    pub fn absorbs(&self, edit: &Edit) -> bool {
        self.can_extend && self.kind.coalesces() && self.redo.same_target(edit)
    }
}
