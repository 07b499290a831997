//! Span formatting engine.
//!
//! # Architecture
//!
//! - [`resolve_coverage`]: selection quad → runs fully inside it, splitting
//!   boundary runs (the only code path that splits runs)
//! - [`apply_format`] / [`undo_format`]: toggle highlight/underline or erase,
//!   recording prior formats by plain-text offset
//! - [`condense`] / [`uncondense`]: reversible merge of all paragraphs into one
//!
//! Every mutation leaves the document in canonical form (see
//! [`crate::model::canonicalize_runs`]).
//!
//! # Example
//!
//! ```
//! use cardmark::format::{apply_format, SpanSelection, Tool};
//! use cardmark::model::Document;
//!
//! let mut doc = Document::from_texts(&["The quick fox"]);
//! apply_format(&mut doc, &SpanSelection::within_run(0, 0, 4, 9), Tool::Highlight).unwrap();
//!
//! let runs = &doc.paragraphs[0].runs;
//! assert_eq!(runs[1].text, "quick");
//! assert!(runs[1].highlight);
//! ```

mod condense;
mod mutate;
mod resolve;
mod selection;

pub use condense::{condense, uncondense, Condensed};
pub use mutate::{apply_format, undo_format, ChangedRun, FormatChange, Tool};
pub use resolve::{resolve_coverage, RunCoord};
pub use selection::{Position, SpanSelection};
