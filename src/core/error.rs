use thiserror::Error;

/// Error from replacing the value of a vertex that does not exist.
///
/// The rejected value is handed back to the caller.
#[derive(Debug, Error, PartialEq)]
#[error("vertex does not exist")]
pub struct ReplaceVertexError<V>(pub V);

/// Error from replacing the value of an edge that does not exist.
///
/// The rejected value is handed back to the caller.
#[derive(Debug, Error, PartialEq)]
#[error("edge does not exist")]
pub struct ReplaceEdgeError<E>(pub E);
