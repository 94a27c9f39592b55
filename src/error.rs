use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `peek` or `pop` on a heap with no elements.
    #[error("heap is empty")]
    Empty,
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, HeapError>;
