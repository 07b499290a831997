//! Condense all paragraphs into one, and split them back apart.
//!
//! Condensing records a chop point (cumulative character length) for every
//! paragraph it absorbs. Uncondensing with those chop points restores the
//! original text and paragraph boundaries exactly.

use serde::{Deserialize, Serialize};

use crate::error::EditError;
use crate::model::{Document, Paragraph, Run};

/// Undo payload of a condense.
///
/// `chop_points` are paragraph boundaries in the condensed text: strictly
/// increasing, the last value equal to the condensed length.
/// `empty_paragraphs` are the original indices of paragraphs that had no
/// text, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condensed {
    pub chop_points: Vec<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub empty_paragraphs: Vec<usize>,
}

impl Condensed {
    /// Split `document` back into exactly the paragraphs this condense
    /// absorbed, empty ones included.
    ///
    /// Same precondition and errors as [`uncondense`]. Empty paragraphs come
    /// back in canonical form (no runs).
    pub fn restore(&self, document: &mut Document) -> Result<bool, EditError> {
        if !uncondense(document, &self.chop_points)? {
            return Ok(false);
        }
        for &index in &self.empty_paragraphs {
            let index = index.min(document.len());
            document.paragraphs.insert(index, Paragraph::default());
        }
        Ok(true)
    }
}

/// Merge every paragraph into a single one.
///
/// Each non-empty paragraph gets one trailing space on its last run so
/// words stay separated. Empty paragraphs contribute no text; their indices
/// are recorded so [`Condensed::restore`] can put them back.
pub fn condense(document: &mut Document) -> Condensed {
    let mut merged: Vec<Run> = Vec::new();
    let mut chop_points = Vec::with_capacity(document.len());
    let mut empty_paragraphs = Vec::new();
    let mut total = 0;

    for (index, mut paragraph) in document.paragraphs.drain(..).enumerate() {
        if paragraph.is_empty() {
            empty_paragraphs.push(index);
            continue;
        }
        if let Some(last) = paragraph.runs.last_mut() {
            last.text.push(' ');
        }
        total += paragraph.len();
        chop_points.push(total);
        merged.append(&mut paragraph.runs);
    }

    let mut condensed = Paragraph::new(merged);
    condensed.canonicalize();
    document.paragraphs = vec![condensed];

    tracing::debug!(
        paragraphs = chop_points.len(),
        empty = empty_paragraphs.len(),
        total,
        "condensed paragraphs"
    );
    Condensed {
        chop_points,
        empty_paragraphs,
    }
}

/// Split a condensed document back into paragraphs.
///
/// Returns `Ok(false)` without touching the document unless it holds
/// exactly one paragraph. Only the paragraphs named by `chop_points` come
/// back; use [`Condensed::restore`] to also recover empty ones.
pub fn uncondense(document: &mut Document, chop_points: &[usize]) -> Result<bool, EditError> {
    if document.len() != 1 {
        tracing::debug!(
            paragraphs = document.len(),
            "skipping uncondense: document is not condensed"
        );
        return Ok(false);
    }
    validate_chop_points(chop_points, document.paragraphs[0].len())?;

    let runs = std::mem::take(&mut document.paragraphs[0].runs);
    let aligned = align_runs(runs, chop_points);
    document.paragraphs = partition_runs(aligned, chop_points);

    tracing::debug!(paragraphs = document.len(), "uncondensed paragraphs");
    Ok(true)
}

fn validate_chop_points(chop_points: &[usize], total: usize) -> Result<(), EditError> {
    if let Some(pair) = chop_points.windows(2).find(|pair| pair[0] >= pair[1]) {
        return Err(EditError::InvalidChopPoints(format!(
            "not strictly increasing at {} -> {}",
            pair[0], pair[1]
        )));
    }
    if chop_points.first() == Some(&0) {
        return Err(EditError::InvalidChopPoints(
            "chop point 0 would produce an empty paragraph".to_string(),
        ));
    }
    let last = chop_points.last().copied().unwrap_or(0);
    if last != total {
        return Err(EditError::InvalidChopPoints(format!(
            "last chop point {} does not match condensed length {}",
            last, total
        )));
    }
    Ok(())
}

/// Phase A: split runs so every chop point falls on a run boundary
fn align_runs(runs: Vec<Run>, chop_points: &[usize]) -> Vec<Run> {
    let mut aligned = Vec::with_capacity(runs.len() + chop_points.len());
    let mut chops = chop_points.iter().copied().peekable();
    let mut run_end = 0;

    for run in runs {
        let mut start = run_end;
        run_end += run.len();
        let mut rest = run;

        while chops.next_if(|&chop| chop <= start).is_some() {}
        while let Some(chop) = chops.next_if(|&chop| chop < run_end) {
            let (head, tail) = rest.split_at(chop - start);
            aligned.push(head);
            rest = tail;
            start = chop;
        }
        aligned.push(rest);
    }
    aligned
}

/// Phase B: group aligned runs into paragraphs, trimming the space each
/// paragraph gained when it was condensed
fn partition_runs(aligned: Vec<Run>, chop_points: &[usize]) -> Vec<Paragraph> {
    let mut paragraphs = Vec::with_capacity(chop_points.len());
    let mut chops = chop_points.iter().copied();
    let mut next_chop = chops.next();
    let mut current: Vec<Run> = Vec::new();
    let mut offset = 0;

    for run in aligned {
        if run.is_empty() {
            continue;
        }
        offset += run.len();
        current.push(run);

        if next_chop == Some(offset) {
            if let Some(last) = current.last_mut() {
                if last.text.ends_with(' ') {
                    last.text.pop();
                } else {
                    tracing::warn!(offset, "paragraph boundary without trailing space");
                }
            }
            let mut paragraph = Paragraph::new(std::mem::take(&mut current));
            paragraph.canonicalize();
            paragraphs.push(paragraph);
            next_chop = chops.next();
        }
    }
    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Format;

    #[test]
    fn test_condense_records_chop_points() {
        let mut doc = Document::from_texts(&["ab", "cde", "f"]);
        let condensed = condense(&mut doc);

        assert_eq!(condensed.chop_points, vec![3, 7, 9]);
        assert_eq!(doc.plain_texts(), vec!["ab cde f ".to_string()]);
        assert_eq!(doc.paragraphs[0].runs.len(), 1);
    }

    #[test]
    fn test_condense_skips_empty_paragraphs() {
        let mut doc = Document::new(vec![
            Paragraph::from_text("ab"),
            Paragraph::default(),
            Paragraph::new(vec![Run::new("")]),
            Paragraph::from_text("c"),
        ]);
        let condensed = condense(&mut doc);
        assert_eq!(condensed.chop_points, vec![3, 5]);
        assert_eq!(condensed.empty_paragraphs, vec![1, 2]);
        assert_eq!(doc.plain_texts(), vec!["ab c ".to_string()]);
    }

    #[test]
    fn test_restore_puts_empty_paragraphs_back() {
        let mut doc = Document::new(vec![
            Paragraph::default(),
            Paragraph::from_text("alpha"),
            Paragraph::default(),
            Paragraph::from_text("beta"),
            Paragraph::default(),
        ]);
        let original = doc.clone();

        let condensed = condense(&mut doc);
        assert_eq!(condensed.empty_paragraphs, vec![0, 2, 4]);
        assert_eq!(doc.plain_texts(), vec!["alpha beta ".to_string()]);

        assert!(condensed.restore(&mut doc).unwrap());
        assert_eq!(doc, original);
    }

    #[test]
    fn test_restore_all_empty_document() {
        let mut doc = Document::new(vec![Paragraph::default(), Paragraph::default()]);
        let original = doc.clone();

        let condensed = condense(&mut doc);
        assert!(condensed.chop_points.is_empty());
        assert_eq!(doc.len(), 1);

        assert!(condensed.restore(&mut doc).unwrap());
        assert_eq!(doc, original);
    }

    #[test]
    fn test_restore_respects_precondition() {
        let condensed = Condensed {
            chop_points: vec![2, 4],
            empty_paragraphs: vec![1],
        };
        let mut doc = Document::from_texts(&["a", "b"]);
        let before = doc.clone();
        assert!(!condensed.restore(&mut doc).unwrap());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_round_trip_preserves_formatting() {
        let mut doc = Document::new(vec![
            Paragraph::new(vec![
                Run::new("plain "),
                Run::with_format("marked", Format::highlighted()),
            ]),
            Paragraph::new(vec![
                Run::with_format("marked", Format::highlighted()),
                Run::new(" tail"),
            ]),
            Paragraph::new(vec![Run::with_format("under", Format::underlined())]),
        ]);
        let original = doc.clone();

        let condensed = condense(&mut doc);
        // "marked " and "marked" share a format and merge across the boundary
        assert_eq!(doc.paragraphs[0].runs[1].text, "marked marked");

        assert!(uncondense(&mut doc, &condensed.chop_points).unwrap());
        assert_eq!(doc, original);
    }

    #[test]
    fn test_uncondense_is_noop_unless_single_paragraph() {
        let mut doc = Document::from_texts(&["a", "b"]);
        let before = doc.clone();
        assert!(!uncondense(&mut doc, &[2, 4]).unwrap());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_uncondense_rejects_mismatched_chop_points() {
        let mut doc = Document::from_texts(&["abc def "]);
        let before = doc.clone();
        assert!(matches!(
            uncondense(&mut doc, &[4, 7]),
            Err(EditError::InvalidChopPoints(_))
        ));
        assert!(matches!(
            uncondense(&mut doc, &[4, 4, 8]),
            Err(EditError::InvalidChopPoints(_))
        ));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_uncondense_chop_on_existing_run_boundary() {
        let mut doc = Document::new(vec![Paragraph::new(vec![
            Run::with_format("ab ", Format::underlined()),
            Run::new("cd "),
        ])]);
        assert!(uncondense(&mut doc, &[3, 6]).unwrap());
        assert_eq!(
            doc,
            Document::new(vec![
                Paragraph::new(vec![Run::with_format("ab", Format::underlined())]),
                Paragraph::from_text("cd"),
            ])
        );
    }

    #[test]
    fn test_condense_empty_document_round_trip() {
        let mut doc = Document::default();
        let condensed = condense(&mut doc);
        assert!(condensed.chop_points.is_empty());
        assert_eq!(doc.len(), 1);

        assert!(uncondense(&mut doc, &condensed.chop_points).unwrap());
        assert!(doc.is_empty());
    }
}
