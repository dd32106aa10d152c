//! Error types for the listgraph library.

use thiserror::Error;

/// All errors that can occur in the listgraph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListGraphError {
    /// Deletion attempted on an empty list.
    #[error("List is empty")]
    EmptyCollection,

    /// A position or minimum length the list does not have.
    ///
    /// Raised for `kth_from_end` with `k` outside `1..=len`, and for deleting
    /// from a list that holds a single element.
    #[error("Out of range: requested {requested}, list length is {len}")]
    OutOfRange { requested: usize, len: usize },

    /// A graph operation referenced a label that was never added.
    #[error("Unknown node label: {0:?}")]
    UnknownKey(String),
}

/// Convenience result type for listgraph operations.
pub type LgResult<T> = Result<T, ListGraphError>;
