//! Cardmark - span formatting and edit history for evidence cards
//!
//! This crate provides the core types and logic for highlighting and
//! underlining text ranges inside a structured quote ("card"), merging and
//! splitting its paragraphs, and undoing or redoing every change.
//!
//! Start with [`CardEditor`], which owns a [`model::Card`] together with
//! its [`history::EditHistory`].

pub mod config;
pub mod editor;
pub mod error;
pub mod format;
pub mod history;
pub mod model;
pub mod snapshot;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::EngineConfig;
pub use editor::CardEditor;
pub use error::{EditError, SnapshotError};
pub use format::{SpanSelection, Tool};
pub use model::{Card, Document, Paragraph, Run};
