//! Format mutator - applies highlight/underline/eraser over a selection and
//! records an offset-addressed undo payload.

use serde::{Deserialize, Serialize};

use crate::error::EditError;
use crate::model::{Document, Format, Run};

use super::resolve::resolve_coverage;
use super::selection::{Position, SpanSelection};

/// Formatting tool chosen on the selection toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Highlight,
    Underline,
    /// Clears both flags
    Eraser,
}

impl Tool {
    /// Whether `run` carries this tool's flag (always false for the eraser)
    fn is_set(self, run: &Run) -> bool {
        match self {
            Tool::Highlight => run.highlight,
            Tool::Underline => run.underline,
            Tool::Eraser => false,
        }
    }

    fn set(self, run: &mut Run, on: bool) {
        match self {
            Tool::Highlight => run.highlight = on,
            Tool::Underline => run.underline = on,
            Tool::Eraser => run.set_format(Format::PLAIN),
        }
    }
}

/// Prior format of one covered run, addressed by plain-text offsets so it
/// survives run renumbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangedRun {
    pub paragraph: usize,
    pub start_offset: usize,
    pub end_offset: usize,
    pub format: Format,
}

/// Undo payload of one format edit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatChange {
    pub changed_runs: Vec<ChangedRun>,
}

/// Apply `tool` over `selection`.
///
/// Highlight and underline toggle uniformly: if every covered run already
/// has the flag it is cleared everywhere, otherwise it is set everywhere.
/// The eraser clears both flags regardless of the current state.
pub fn apply_format(
    document: &mut Document,
    selection: &SpanSelection,
    tool: Tool,
) -> Result<FormatChange, EditError> {
    let covered = resolve_coverage(document, selection)?;

    let all_set = tool != Tool::Eraser
        && covered
            .iter()
            .all(|coord| tool.is_set(&document.paragraphs[coord.paragraph].runs[coord.run]));

    let mut changed_runs = Vec::with_capacity(covered.len());
    for coord in &covered {
        let paragraph = &mut document.paragraphs[coord.paragraph];
        let start_offset = paragraph.run_start(coord.run);
        let run = &mut paragraph.runs[coord.run];

        changed_runs.push(ChangedRun {
            paragraph: coord.paragraph,
            start_offset,
            end_offset: start_offset + run.len(),
            format: run.format(),
        });
        tool.set(run, !all_set);
    }

    document.canonicalize();

    tracing::debug!(
        ?tool,
        all_set,
        changed = changed_runs.len(),
        "applied format"
    );
    Ok(FormatChange { changed_runs })
}

/// Restore the formats recorded by [`apply_format`].
///
/// Positions are re-derived from the stored offsets against the current
/// runs, then split through the same resolver as the forward edit.
pub fn undo_format(document: &mut Document, change: &FormatChange) -> Result<(), EditError> {
    // Entries are applied to a copy so a failing entry leaves `document` as it was
    let mut restored = document.clone();
    for changed in &change.changed_runs {
        let start = Position::at_offset(&restored, changed.paragraph, changed.start_offset)?;
        let end = Position::at_offset(&restored, changed.paragraph, changed.end_offset)?;
        let covered = resolve_coverage(&mut restored, &SpanSelection::new(start, end))?;
        for coord in covered {
            restored.paragraphs[coord.paragraph].runs[coord.run].set_format(changed.format);
        }
    }

    restored.canonicalize();
    *document = restored;

    tracing::debug!(restored = change.changed_runs.len(), "undid format");
    Ok(())
}
