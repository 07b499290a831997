//! Edit history (undo/redo) for a card editing session.
//!
//! Two stacks: `undo_stack` holds applied actions oldest first, `redo_stack`
//! holds undone actions with the most recently undone on top. The number of
//! steps currently undone is `redo_stack.len()`.
//!
//! Invariants:
//! - recording a new action empties the redo stack (linear history)
//! - `undo_stack.len() + redo_stack.len() <= max_size`

use std::collections::VecDeque;

use super::action::{Action, Edit, Revert};

/// Default number of actions kept before the oldest are evicted
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Edit history with undo/redo stacks.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo_stack: VecDeque<Action>,
    redo_stack: Vec<Action>,
    max_size: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EditHistory {
    /// Create a new edit history with default max size
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_MAX_HISTORY)
    }

    /// Create a new edit history with specified max size (at least one)
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_size: max_size.max(1),
        }
    }

    /// Record an applied edit at the tip.
    ///
    /// Drops any undone actions first. If the tip may absorb the edit, the
    /// tip keeps its undo payload and takes `edit` as its redo payload, so
    /// one undo reverts the whole group and one redo restores its final
    /// state. Returns true when the edit was coalesced.
    pub fn record(&mut self, edit: Edit, undo: Revert) -> bool {
        if !self.redo_stack.is_empty() {
            tracing::debug!(dropped = self.redo_stack.len(), "truncating redo branch");
            self.redo_stack.clear();
        }

        if let Some(tip) = self.undo_stack.back_mut() {
            if tip.absorbs(&edit) {
                tracing::trace!(kind = ?tip.kind, "coalesced edit into tip");
                tip.redo = edit;
                return true;
            }
            tip.can_extend = false;
        }

        self.undo_stack.push_back(Action::new(edit, undo));

        while self.undo_stack.len() > self.max_size {
            self.undo_stack.pop_front();
        }
        false
    }

    /// End the current coalescing group (e.g. when a field loses focus)
    pub fn prevent_extension(&mut self) {
        if let Some(tip) = self.undo_stack.back_mut() {
            tip.can_extend = false;
        }
    }

    /// The action the next undo would reverse
    pub fn peek_undo(&self) -> Option<&Action> {
        self.undo_stack.back()
    }

    /// The action the next redo would re-apply
    pub fn peek_redo(&self) -> Option<&Action> {
        self.redo_stack.last()
    }

    /// Move the tip onto the redo stack after its undo payload was applied
    pub fn commit_undo(&mut self) -> Option<&Action> {
        let action = self.undo_stack.pop_back()?;
        self.redo_stack.push(action);
        self.redo_stack.last()
    }

    /// Move the top redo action back onto the undo stack after it was
    /// re-applied, replacing its undo payload with the fresh one.
    ///
    /// A redone action never absorbs later edits.
    pub fn commit_redo(&mut self, undo: Revert) -> Option<&Action> {
        let mut action = self.redo_stack.pop()?;
        action.undo = undo;
        action.can_extend = false;
        self.undo_stack.push_back(action);
        self.undo_stack.back()
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Total recorded actions, applied and undone
    pub fn len(&self) -> usize {
        self.undo_stack.len() + self.redo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Steps currently undone from the tip
    pub fn position(&self) -> usize {
        self.redo_stack.len()
    }

    /// Get the number of operations in the undo stack
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of operations in the redo stack
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
