//! Error types for formatting, history, and snapshot operations

/// Errors raised by edits that would otherwise corrupt the document.
///
/// Every variant is raised before any mutation happens, so the document is
/// unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// A paragraph, run, or offset outside the current document
    InvalidSelection(String),
    /// Chop points that cannot partition the condensed paragraph
    InvalidChopPoints(String),
    /// An author index outside the author list
    InvalidAuthorIndex(usize),
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::InvalidSelection(msg) => write!(f, "invalid selection: {}", msg),
            EditError::InvalidChopPoints(msg) => write!(f, "invalid chop points: {}", msg),
            EditError::InvalidAuthorIndex(index) => write!(f, "no author at index {}", index),
        }
    }
}

impl std::error::Error for EditError {}

/// Errors converting snapshots to and from JSON
#[derive(Debug)]
pub enum SnapshotError {
    Json(serde_json::Error),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Json(e) => write!(f, "snapshot JSON error: {}", e),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        SnapshotError::Json(e)
    }
}
