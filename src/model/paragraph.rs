//! Paragraphs, documents, and the run canonicalizer

use serde::{Deserialize, Serialize};

use super::run::Run;

/// An ordered sequence of runs forming one text block.
///
/// Serializes transparently as an array of runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new(runs: Vec<Run>) -> Self {
        Self { runs }
    }

    /// A paragraph holding a single unformatted run
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(vec![Run::new(text)])
    }

    /// Concatenated text of all runs
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Length of the plain text in characters
    pub fn len(&self) -> usize {
        self.runs.iter().map(Run::len).sum()
    }

    /// True when the paragraph has no text (it may still hold empty runs)
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(Run::is_empty)
    }

    /// Character offset at which run `run_index` starts
    pub fn run_start(&self, run_index: usize) -> usize {
        self.runs[..run_index].iter().map(Run::len).sum()
    }

    /// Map a plain-text offset to `(run index, offset within run)`.
    ///
    /// An offset that lands exactly on a run's end stays in that run; the
    /// scan only advances while the remaining offset exceeds the run length.
    /// Returns `None` when the offset lies past the end of the text.
    pub fn locate(&self, offset: usize) -> Option<(usize, usize)> {
        let mut remaining = offset;
        for (index, run) in self.runs.iter().enumerate() {
            let len = run.len();
            if remaining <= len {
                return Some((index, remaining));
            }
            remaining -= len;
        }
        None
    }

    /// Rewrite this paragraph into canonical form
    pub fn canonicalize(&mut self) {
        self.runs = canonicalize_runs(&self.runs);
    }

    /// No empty runs and no equal-format neighbours
    pub fn is_canonical(&self) -> bool {
        self.runs.iter().all(|run| !run.is_empty())
            && self
                .runs
                .windows(2)
                .all(|pair| pair[0].format() != pair[1].format())
    }
}

/// Drop empty runs and merge neighbours with identical formatting.
///
/// Scans left to right, never reorders, never merges across a format
/// boundary. Idempotent.
pub fn canonicalize_runs(runs: &[Run]) -> Vec<Run> {
    let mut merged: Vec<Run> = Vec::with_capacity(runs.len());
    for run in runs.iter().filter(|run| !run.is_empty()) {
        match merged.last_mut() {
            Some(prev) if prev.format() == run.format() => prev.text.push_str(&run.text),
            _ => merged.push(run.clone()),
        }
    }
    merged
}

/// The ordered paragraphs of one card, owned by a single editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    /// One unformatted paragraph per entry
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        Self::new(
            texts
                .iter()
                .map(|text| Paragraph::from_text(text.as_ref()))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Plain text of each paragraph
    pub fn plain_texts(&self) -> Vec<String> {
        self.paragraphs.iter().map(Paragraph::plain_text).collect()
    }

    /// Canonicalize every paragraph
    pub fn canonicalize(&mut self) {
        for paragraph in &mut self.paragraphs {
            paragraph.canonicalize();
        }
    }

    pub fn is_canonical(&self) -> bool {
        self.paragraphs.iter().all(Paragraph::is_canonical)
    }
}

impl From<Vec<Paragraph>> for Document {
    fn from(paragraphs: Vec<Paragraph>) -> Self {
        Self::new(paragraphs)
    }
}
