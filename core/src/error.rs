//! Error types for todo list operations

use thiserror::Error;

/// Errors that can occur when modifying or indexing a [`TodoList`](crate::TodoList)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// A dynamically-typed value could not be read as a todo
    #[error("Can only add Todo objects (got {found})")]
    NotATodo {
        /// Rendering of the rejected value
        found: String,
    },

    /// Index falls outside `[-size, size)`
    #[error("index {index} outside of list bounds: -{size}...{size}")]
    IndexOutOfRange {
        /// Index as supplied by the caller
        index: isize,
        /// Number of items in the list at the time of the call
        size: usize,
    },
}

/// Result alias for list operations
pub type Result<T> = std::result::Result<T, ListError>;
