use thiserror::Error;

/// Failure conditions shared by every container in the workspace.
///
/// All of them are raised before any mutation takes place, so a container
/// that returned one of these is still in the state it was before the call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    #[error("the key does not belong to the dictionary")]
    KeyNotFound,
    #[error("the iterator has finished iterating")]
    IteratorExhausted,
    #[error("the queue is empty")]
    EmptyQueue,
}
