use thiserror::Error;

/// Errors raised while normalizing an input representation.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The structured document is malformed.
    #[error("malformed document: {0}")]
    Document(String),
    /// A live-type description could not be read.
    #[error("type introspection failed for '{entity}': {cause}")]
    TypeIntrospection { entity: String, cause: String },
}

/// Result alias for normalization operations.
pub type Result<T> = std::result::Result<T, ParseError>;
