//! Range resolver - turns a selection into the runs it fully covers.
//!
//! Boundary runs are split in place so that every returned coordinate names
//! a run lying entirely inside the selection. This is the only place runs
//! are split, so forward edits and their undo share one splitting rule.

use crate::error::EditError;
use crate::model::{Document, Run};

use super::selection::SpanSelection;

/// `(paragraph index, run index)` of a covered run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunCoord {
    pub paragraph: usize,
    pub run: usize,
}

impl RunCoord {
    pub const fn new(paragraph: usize, run: usize) -> Self {
        Self { paragraph, run }
    }
}

/// Split the boundary runs of `selection` and return the covered runs in
/// document order.
///
/// Zero-length pieces produced by splitting at a run edge are left in
/// place; canonicalization prunes them. The document is untouched when the
/// selection is invalid.
pub fn resolve_coverage(
    document: &mut Document,
    selection: &SpanSelection,
) -> Result<Vec<RunCoord>, EditError> {
    selection.validate(document)?;

    let SpanSelection {
        start_p,
        start_span,
        start_offset,
        end_p,
        mut end_span,
        end_offset,
    } = *selection;

    if selection.is_single_run() {
        let runs = &mut document.paragraphs[start_p].runs;
        let (before, rest) = runs[start_span].split_at(start_offset);
        let (target, after) = rest.split_at(end_offset - start_offset);
        runs[start_span] = before;
        runs.insert(start_span + 1, target);
        runs.insert(start_span + 2, after);
        tracing::trace!(
            paragraph = start_p,
            run = start_span,
            "split single run into three"
        );
        return Ok(vec![RunCoord::new(start_p, start_span + 1)]);
    }

    let mut covered = Vec::new();

    split_run(&mut document.paragraphs[start_p].runs, start_span, start_offset);
    covered.push(RunCoord::new(start_p, start_span + 1));
    if start_p == end_p {
        // The start split inserted one run ahead of the end run
        end_span += 1;
    }

    for paragraph in start_p..=end_p {
        let first = if paragraph == start_p { start_span + 2 } else { 0 };
        let last = if paragraph == end_p {
            end_span
        } else {
            document.paragraphs[paragraph].runs.len()
        };
        covered.extend((first..last).map(|run| RunCoord::new(paragraph, run)));
    }

    split_run(&mut document.paragraphs[end_p].runs, end_span, end_offset);
    covered.push(RunCoord::new(end_p, end_span));

    tracing::trace!(
        start_p,
        end_p,
        covered = covered.len(),
        "split boundary runs"
    );
    Ok(covered)
}

/// Replace `runs[index]` by its two halves around `offset`
fn split_run(runs: &mut Vec<Run>, index: usize, offset: usize) {
    let (head, tail) = runs[index].split_at(offset);
    runs[index] = head;
    runs.insert(index + 1, tail);
}
