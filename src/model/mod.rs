//! Document model - runs, paragraphs, and the card that owns them
//!
//! These are plain value types. All mutation of a live card goes through
//! [`crate::editor::CardEditor`] so every change is recorded in history.

pub mod card;
pub mod paragraph;
pub mod run;

pub use card::{Author, Card, CardDate, DateField, TextField};
pub use paragraph::{canonicalize_runs, Document, Paragraph};
pub use run::{Format, Run};
