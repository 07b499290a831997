//! Selection types addressing runs by their current indices.

use serde::{Deserialize, Serialize};

use crate::error::EditError;
use crate::model::Document;

/// A position inside the document: paragraph, run, and character offset
/// within that run.
///
/// Only valid against the document version it was computed from; any
/// mutation may renumber runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub paragraph: usize,
    pub run: usize,
    pub offset: usize,
}

impl Position {
    pub const fn new(paragraph: usize, run: usize, offset: usize) -> Self {
        Self {
            paragraph,
            run,
            offset,
        }
    }

    /// Resolve a plain-text offset in `paragraph` against the current runs
    pub fn at_offset(
        document: &Document,
        paragraph: usize,
        offset: usize,
    ) -> Result<Self, EditError> {
        let para = document.paragraphs.get(paragraph).ok_or_else(|| {
            EditError::InvalidSelection(format!("paragraph {} does not exist", paragraph))
        })?;
        let (run, offset_in_run) = para.locate(offset).ok_or_else(|| {
            EditError::InvalidSelection(format!(
                "offset {} is past the end of paragraph {} ({} chars)",
                offset,
                paragraph,
                para.len()
            ))
        })?;
        Ok(Self::new(paragraph, run, offset_in_run))
    }
}

/// The selection quad handed over by the selection toolbar.
///
/// `start_span`/`end_span` are current run indices; offsets are relative to
/// those runs. The end is exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanSelection {
    pub start_p: usize,
    pub start_span: usize,
    pub start_offset: usize,
    pub end_p: usize,
    pub end_span: usize,
    pub end_offset: usize,
}

impl SpanSelection {
    pub fn new(start: Position, end: Position) -> Self {
        Self {
            start_p: start.paragraph,
            start_span: start.run,
            start_offset: start.offset,
            end_p: end.paragraph,
            end_span: end.run,
            end_offset: end.offset,
        }
    }

    /// Selection of `[start, end)` inside a single run
    pub fn within_run(paragraph: usize, run: usize, start: usize, end: usize) -> Self {
        Self::new(
            Position::new(paragraph, run, start),
            Position::new(paragraph, run, end),
        )
    }

    /// Selection between two plain-text offsets, possibly in different
    /// paragraphs, resolved against the current run segmentation
    pub fn from_offsets(
        document: &Document,
        start: (usize, usize),
        end: (usize, usize),
    ) -> Result<Self, EditError> {
        let start = Position::at_offset(document, start.0, start.1)?;
        let end = Position::at_offset(document, end.0, end.1)?;
        Ok(Self::new(start, end))
    }

    pub fn start(&self) -> Position {
        Position::new(self.start_p, self.start_span, self.start_offset)
    }

    pub fn end(&self) -> Position {
        Position::new(self.end_p, self.end_span, self.end_offset)
    }

    /// Start and end fall in the same run
    pub fn is_single_run(&self) -> bool {
        self.start_p == self.end_p && self.start_span == self.end_span
    }

    /// Check every index and offset against `document`
    pub fn validate(&self, document: &Document) -> Result<(), EditError> {
        let invalid = |msg: String| Err(EditError::InvalidSelection(msg));

        if self.start_p > self.end_p {
            return invalid(format!(
                "start paragraph {} is after end paragraph {}",
                self.start_p, self.end_p
            ));
        }
        for pos in [self.start(), self.end()] {
            let Some(paragraph) = document.paragraphs.get(pos.paragraph) else {
                return invalid(format!(
                    "paragraph {} does not exist ({} paragraphs)",
                    pos.paragraph,
                    document.len()
                ));
            };
            let Some(run) = paragraph.runs.get(pos.run) else {
                return invalid(format!(
                    "run {} does not exist in paragraph {} ({} runs)",
                    pos.run,
                    pos.paragraph,
                    paragraph.runs.len()
                ));
            };
            if pos.offset > run.len() {
                return invalid(format!(
                    "offset {} is past the end of run {}:{} ({} chars)",
                    pos.offset,
                    pos.paragraph,
                    pos.run,
                    run.len()
                ));
            }
        }
        if self.start_p == self.end_p {
            if self.start_span > self.end_span {
                return invalid(format!(
                    "start run {} is after end run {}",
                    self.start_span, self.end_span
                ));
            }
            if self.start_span == self.end_span && self.start_offset > self.end_offset {
                return invalid(format!(
                    "start offset {} is after end offset {}",
                    self.start_offset, self.end_offset
                ));
            }
        }
        Ok(())
    }
}
