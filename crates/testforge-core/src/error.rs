use thiserror::Error;

/// Core error type shared across Testforge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The canonical model violates structural invariants.
    #[error("invalid model: {0}")]
    InvalidModel(String),
    /// A requested feature is not yet supported.
    #[error("unsupported: {0}")]
    Unsupported(String),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by Testforge crates.
pub type Result<T> = std::result::Result<T, Error>;
