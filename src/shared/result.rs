use super::error::GraphError;

/// Type alias for Result with anyhow::Error as the error type.
/// Used by the application layer and the adapters.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Result of the graph-building core, carrying a typed [`GraphError`].
pub type GraphResult<T> = std::result::Result<T, GraphError>;
