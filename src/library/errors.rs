//! Error types for library record management.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for library operations
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Library record errors
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("author {0} not found")]
    AuthorNotFound(i64),

    #[error("book {0} not found")]
    BookNotFound(i64),

    /// A book points at an author id that does not resolve
    #[error("author {0} does not exist")]
    UnknownAuthor(i64),

    /// Deleting an author is rejected while books still reference it
    #[error("author {id} still owns {count} book(s)")]
    AuthorInUse { id: i64, count: usize },

    #[error("author name is required")]
    MissingAuthorName,

    #[error("book title is required")]
    MissingBookTitle,

    /// Underlying store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}
