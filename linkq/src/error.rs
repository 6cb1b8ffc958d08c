//! Error types for queue operations

use thiserror::Error;

/// Result type for queue operations
pub type Result<T> = std::result::Result<T, QueueError>;

/// Queue errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The head is the only node left; the queue is never allowed to become empty.
    #[error("you cannot delete the first element if it is the only element")]
    SingleElement,
}
