use thiserror::Error;

use crate::capability::NotifyError;

/// Errors surfaced to callers of the order processor.
///
/// Persistence failures never appear here: the processor absorbs them and
/// reports `false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcessError {
    /// A required argument was absent. Names the argument.
    #[error("invalid argument: {0} is required")]
    InvalidArgument(&'static str),

    /// The confirmation could not be sent and the configured policy is to
    /// propagate.
    #[error("order confirmation failed: {0}")]
    Notification(#[from] NotifyError),
}
