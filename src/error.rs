use thiserror::Error;

/// Failure raised by a [`StringJoiner`](crate::greeting::StringJoiner)
///
/// The greeter passes these through untouched, so callers see exactly what
/// the joiner reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    /// One of the inputs was missing (1-based position)
    #[error("missing argument at position {position}")]
    MissingArgument { position: usize },

    /// The joiner refused the inputs
    #[error("join rejected: {0}")]
    Rejected(String),
}
