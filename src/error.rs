//! The error type returned when a universe or a query breaks the contract of the structure.

use thiserror::Error;

/// Errors reported by construction and refinement.
///
/// Positions refer to the sequence handed in by the caller, so the offending element can be
/// found without the error having to own a copy of it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A query contained an element that is not part of the universe.
    #[error("query element at position {position} is not part of the universe")]
    UnknownElement { position: usize },
    /// A query contained an index past the end of the universe.
    #[error("index {index} is out of bounds for a universe of {len} elements")]
    IndexOutOfBounds { index: usize, len: usize },
    /// A query contained the same element twice.
    #[error("query element at position {position} repeats an earlier element of the query")]
    DuplicateQueryElement { position: usize },
    /// The universe contained the same element twice.
    #[error("universe element at position {position} repeats the element at position {first}")]
    DuplicateElement { first: usize, position: usize },
}
