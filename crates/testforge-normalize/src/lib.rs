//! Model normalization: turns either a structured document or a live-type
//! description into the canonical [`testforge_core::EntityModel`].
//!
//! Both input forms produce structurally equal models for equivalent
//! shapes; the rest of the pipeline never sees the input source.

pub mod descriptor;
pub mod document;
pub mod errors;
pub mod mapper;
pub mod schema;

pub use descriptor::{
    ColumnFacts, FieldDescription, StaticTypeRegistry, TypeDescription, TypeDescriptor,
};
pub use document::{
    AttributeDocument, EntityDocument, RelationshipDocument, entity_from_json, from_document,
    parse_document, to_document,
};
pub use errors::ParseError;
pub use mapper::from_type_description;
pub use schema::{DocumentIssue, check_document_json, document_json_schema, validate_document_json};
