//! Transactional edit history.
//!
//! The history is a pure log: it records [`Action`]s, decides coalescing,
//! and tracks how far the user has undone. Applying payloads to a card is
//! the job of [`crate::editor::CardEditor`], which commits each step here
//! only after the card mutation succeeded.

mod action;
mod notify;
mod stack;

pub use action::{Action, ActionKind, Edit, Revert};
pub use notify::{HistoryStep, LogNotifier, Notification, Notifier};
pub use stack::{EditHistory, DEFAULT_MAX_HISTORY};
