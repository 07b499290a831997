//! JSON snapshots of paragraphs and cards
//!
//! Paragraphs serialize as `{text, underline, highlight}[][]`, the shape the
//! card UI stores and renders.

use crate::error::SnapshotError;
use crate::model::{Card, Paragraph};

/// Serialize paragraphs as nested run arrays
pub fn paragraphs_to_json(paragraphs: &[Paragraph]) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(paragraphs)?)
}

/// Parse nested run arrays into paragraphs
pub fn paragraphs_from_json(json: &str) -> Result<Vec<Paragraph>, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a whole card
pub fn card_to_json(card: &Card) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(card)?)
}

/// Parse a whole card; missing fields take their defaults
pub fn card_from_json(json: &str) -> Result<Card, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}
