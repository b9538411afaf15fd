use std::collections::BTreeMap;

use testforge_core::{RelationKind, SecurityRule, ValidationRule};

use crate::errors::ParseError;

/// Column-level constraints attached to a field by its storage mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFacts {
    pub nullable: bool,
    pub unique: bool,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
}

impl Default for ColumnFacts {
    fn default() -> Self {
        Self {
            nullable: true,
            unique: false,
            min_length: None,
            max_length: None,
        }
    }
}

/// Structural facts about one declared field of a live type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescription {
    pub name: String,
    /// Declared type text, e.g. `String`, `Long`, `List<OrderItem>`.
    pub declared_type: String,
    /// Element type when the field is a declared collection; when absent
    /// it is extracted from the generic parameter of `declared_type`.
    pub element_type: Option<String>,
    /// Field carries the persistence identity.
    pub identity: bool,
    /// Identity value is assigned by the storage layer.
    pub generated: bool,
    pub column: Option<ColumnFacts>,
    pub cardinality: Option<RelationKind>,
    /// Name of the mirroring field on the other side, when this side does
    /// not own the relationship.
    pub mapped_by: Option<String>,
    pub optional: bool,
    pub email: bool,
    pub lob: bool,
    pub pattern: Option<String>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
    /// Declared literals when the field type is an enum.
    pub enum_literals: Vec<String>,
}

impl FieldDescription {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            element_type: None,
            identity: false,
            generated: false,
            column: None,
            cardinality: None,
            mapped_by: None,
            optional: true,
            email: false,
            lob: false,
            pattern: None,
            min_value: None,
            max_value: None,
            enum_literals: Vec::new(),
        }
    }
}

/// Description of a live type: its declared fields plus the validation and
/// security rules declared alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescription {
    pub name: String,
    pub namespace: String,
    pub table: Option<String>,
    pub fields: Vec<FieldDescription>,
    pub rules: Vec<ValidationRule>,
    pub security: Vec<SecurityRule>,
}

impl TypeDescription {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            table: None,
            fields: Vec::new(),
            rules: Vec::new(),
            security: Vec::new(),
        }
    }
}

/// Capability consumed by the normalizer to obtain type descriptions.
///
/// Implementations differ per environment (static reflection, macros,
/// explicit registration); the normalizer's output contract is identical.
pub trait TypeDescriptor {
    fn describe(&self, entity: &str) -> Result<TypeDescription, ParseError>;
}

/// Descriptor backed by explicitly registered type descriptions.
#[derive(Debug, Default)]
pub struct StaticTypeRegistry {
    types: BTreeMap<String, TypeDescription>,
}

impl StaticTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, description: TypeDescription) {
        self.types.insert(description.name.clone(), description);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}

impl TypeDescriptor for StaticTypeRegistry {
    fn describe(&self, entity: &str) -> Result<TypeDescription, ParseError> {
        self.types
            .get(entity)
            .cloned()
            .ok_or_else(|| ParseError::TypeIntrospection {
                entity: entity.to_string(),
                cause: "type is not registered".to_string(),
            })
    }
}
