//! Error types for plan execution.

use thiserror::Error;

/// Errors surfaced while applying a plan.
///
/// Cancellation is a distinct variant so callers can tell a user-requested
/// stop apart from a failing callback. In both cases the remaining plan
/// items were skipped and effects already applied stand.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplyError<E> {
    /// A callback or predicate failed.
    #[error("reconciliation callback failed: {0}")]
    Callback(E),

    /// The cancellation token fired.
    #[error("reconciliation cancelled")]
    Cancelled,
}

impl<E> ApplyError<E> {
    /// True if this is a cancellation rather than a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApplyError::Cancelled)
    }

    /// The underlying callback error, if any.
    pub fn into_callback_error(self) -> Option<E> {
        match self {
            ApplyError::Callback(e) => Some(e),
            ApplyError::Cancelled => None,
        }
    }
}
