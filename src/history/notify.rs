//! Undo/redo notifications for an external toast collaborator.

use std::fmt;

use super::action::ActionKind;

/// Which way through history a step went
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryStep {
    Undo,
    Redo,
}

/// Emitted after every successful undo or redo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Notification {
    pub step: HistoryStep,
    pub kind: ActionKind,
}

impl Notification {
    pub fn new(step: HistoryStep, kind: ActionKind) -> Self {
        Self { step, kind }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.step {
            HistoryStep::Undo => "Undid",
            HistoryStep::Redo => "Redid",
        };
        write!(f, "{} {}", verb, self.kind.label())
    }
}

/// Receives undo/redo notifications
pub trait Notifier {
    fn notify(&mut self, notification: &Notification);
}

impl<F> Notifier for F
where
    F: FnMut(&Notification),
{
    fn notify(&mut self, notification: &Notification) {
        self(notification)
    }
}

/// Default notifier: logs each notification at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notification: &Notification) {
        tracing::info!(kind = ?notification.kind, "{}", notification);
    }
}
