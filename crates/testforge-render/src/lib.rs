//! Template rendering pipeline and artifact collection.
//!
//! Binds a canonical model, its derived rule sets and the value
//! synthesizer into named-template rendering calls, accumulating the
//! rendered artifacts plus structured warnings and errors.

pub mod collector;
pub mod context;
pub mod engine;
pub mod errors;
pub mod pipeline;

pub use collector::{GeneratedArtifacts, GenerationIssue};
pub use context::{AttributeValues, build_entity_context, build_security_context, synthesize_values};
pub use engine::TemplateEngine;
pub use errors::{GenerationError, TemplateError};
pub use pipeline::{GenerateOptions, GenerationPipeline, SECURITY_ARTIFACT};
