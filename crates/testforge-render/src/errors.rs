use thiserror::Error;

/// Errors raised by the template engine, keyed by template identity.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// No template is registered under the requested identifier.
    #[error("template not found: {0}")]
    NotFound(String),
    /// The template raised while being evaluated.
    #[error("template '{template}' failed to render: {cause}")]
    Render { template: String, cause: String },
}

/// Errors that abort a generation request.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The canonical model is structurally incomplete.
    #[error("model error: {0}")]
    Model(#[from] testforge_core::Error),
    #[error(transparent)]
    Template(#[from] TemplateError),
    /// Pass-through category for the out-of-scope file writer.
    #[error("file write error: {0}")]
    FileWrite(String),
}
