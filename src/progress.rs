//! Progress reporting and cooperative cancellation for long running work (table generation and
//! searching).

use log::info;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Receives progress notes from a running task and tells it whether to stop. The task polls
/// `is_canceled` regularly (the solver polls at every node it expands) and unwinds as soon as it
/// returns true.
pub trait ProgressObserver {
    /// Replace the current progress note.
    fn set_note(&self, note: &str);

    /// Whether the task should stop as soon as possible.
    fn is_canceled(&self) -> bool;

    /// The task has finished, whether or not it was cancelled.
    fn complete(&self);
}

/// An observer that ignores notes and never cancels.
#[derive(Debug, Default, Copy, Clone)]
pub struct NullProgress;

impl ProgressObserver for NullProgress {
    fn set_note(&self, _note: &str) {}

    fn is_canceled(&self) -> bool {
        false
    }

    fn complete(&self) {}
}

/// An observer that logs every note and can be cancelled through a [`CancelToken`].
#[derive(Debug, Default, Clone)]
pub struct LogProgress {
    token: CancelToken,
}

impl LogProgress {
    /// Create an observer that stops when `token` is cancelled.
    pub fn new(token: CancelToken) -> Self {
        Self { token }
    }
}

impl ProgressObserver for LogProgress {
    fn set_note(&self, note: &str) {
        info!("{note}");
    }

    fn is_canceled(&self) -> bool {
        self.token.is_canceled()
    }

    fn complete(&self) {
        info!("done");
    }
}

/// A shared cancellation flag. Clones refer to the same flag, so one clone can be handed to a
/// running task and another kept to stop it from a different thread.
#[derive(Debug, Default, Clone)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every holder of this token to stop.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether `cancel` has been called on any clone of this token.
    pub fn is_canceled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl ProgressObserver for CancelToken {
    fn set_note(&self, _note: &str) {}

    fn is_canceled(&self) -> bool {
        CancelToken::is_canceled(self)
    }

    fn complete(&self) {}
}
