use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use testforge_core::{
    AttributeModel, AttributeType, EntityModel, RelationKind, RelationshipModel, SecurityRule,
    ValidationRule,
};

use crate::errors::ParseError;

fn default_true() -> bool {
    true
}

/// Structured-document form of an entity description.
///
/// Field-level shape mirrors the canonical model; fields absent in the
/// document default to nullable, non-unique, unbounded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct EntityDocument {
    pub name: String,
    pub namespace: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<RelationshipDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validation: Vec<ValidationRule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<SecurityRule>,
}

/// Attribute entry of a structured document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct AttributeDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: AttributeType,
    #[serde(default = "default_true")]
    pub nullable: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub generated: bool,
    #[serde(default)]
    pub email: bool,
    #[serde(default)]
    pub lob: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
}

/// Relationship entry of a structured document.
///
/// The collection flag is derived from the kind and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct RelationshipDocument {
    pub name: String,
    pub kind: RelationKind,
    pub target: String,
    #[serde(default = "default_true")]
    pub owning: bool,
    #[serde(default = "default_true")]
    pub optional: bool,
}

/// Parse a JSON value into the document contract.
pub fn parse_document(value: &Value) -> Result<EntityDocument, ParseError> {
    serde_json::from_value(value.clone()).map_err(|err| ParseError::Document(err.to_string()))
}

/// Build the canonical model from a well-formed document. Total.
pub fn from_document(doc: &EntityDocument) -> EntityModel {
    EntityModel {
        name: doc.name.clone(),
        namespace: doc.namespace.clone(),
        table_name: doc.table.clone(),
        attributes: doc.attributes.iter().map(attribute_from_document).collect(),
        relationships: doc
            .relationships
            .iter()
            .map(relationship_from_document)
            .collect(),
        validation_rules: doc.validation.clone(),
        security_rules: doc.security.clone(),
    }
}

/// Project the canonical model back into document form. Total; inverse of
/// [`from_document`] for normalized models.
pub fn to_document(model: &EntityModel) -> EntityDocument {
    EntityDocument {
        name: model.name.clone(),
        namespace: model.namespace.clone(),
        table: model.table_name.clone(),
        attributes: model.attributes.iter().map(attribute_to_document).collect(),
        relationships: model
            .relationships
            .iter()
            .map(relationship_to_document)
            .collect(),
        validation: model.validation_rules.clone(),
        security: model.security_rules.clone(),
    }
}

/// Parse a JSON document straight into the canonical model.
pub fn entity_from_json(value: &Value) -> Result<EntityModel, ParseError> {
    let doc = parse_document(value)?;
    Ok(from_document(&doc))
}

fn attribute_from_document(attr: &AttributeDocument) -> AttributeModel {
    AttributeModel {
        name: attr.name.clone(),
        data_type: attr.data_type,
        is_nullable: attr.nullable,
        is_unique: attr.unique,
        min_length: attr.min_length,
        max_length: attr.max_length,
        min_value: attr.min_value,
        max_value: attr.max_value,
        pattern: attr.pattern.clone(),
        is_primary_key: attr.primary_key,
        is_generated: attr.generated,
        is_email: attr.email,
        is_large_object: attr.lob,
        enum_type: attr.enum_type.clone(),
        enum_values: attr.enum_values.clone(),
    }
}

fn attribute_to_document(attr: &AttributeModel) -> AttributeDocument {
    AttributeDocument {
        name: attr.name.clone(),
        data_type: attr.data_type,
        nullable: attr.is_nullable,
        unique: attr.is_unique,
        min_length: attr.min_length,
        max_length: attr.max_length,
        min_value: attr.min_value,
        max_value: attr.max_value,
        pattern: attr.pattern.clone(),
        primary_key: attr.is_primary_key,
        generated: attr.is_generated,
        email: attr.is_email,
        lob: attr.is_large_object,
        enum_type: attr.enum_type.clone(),
        enum_values: attr.enum_values.clone(),
    }
}

fn relationship_from_document(rel: &RelationshipDocument) -> RelationshipModel {
    RelationshipModel {
        name: rel.name.clone(),
        kind: rel.kind,
        target_entity: rel.target.clone(),
        is_owning: rel.owning,
        is_collection: rel.kind.is_collection(),
        is_optional: rel.optional,
    }
}

fn relationship_to_document(rel: &RelationshipModel) -> RelationshipDocument {
    RelationshipDocument {
        name: rel.name.clone(),
        kind: rel.kind,
        target: rel.target_entity.clone(),
        owning: rel.is_owning,
        optional: rel.is_optional,
    }
}
