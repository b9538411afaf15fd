use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::rules::ValidationRule;
use crate::security::SecurityRule;

/// Semantic type tag for an attribute.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Integer,
    Long,
    Double,
    Float,
    Boolean,
    Date,
    DateTime,
    Decimal,
    Enum,
    Unknown,
}

impl AttributeType {
    pub fn is_string(self) -> bool {
        matches!(self, AttributeType::String)
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            AttributeType::Integer
                | AttributeType::Long
                | AttributeType::Double
                | AttributeType::Float
                | AttributeType::Decimal
        )
    }

    pub fn is_integral(self) -> bool {
        matches!(self, AttributeType::Integer | AttributeType::Long)
    }

    pub fn is_temporal(self) -> bool {
        matches!(self, AttributeType::Date | AttributeType::DateTime)
    }
}

/// Attribute metadata for an entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct AttributeModel {
    pub name: String,
    pub data_type: AttributeType,
    pub is_nullable: bool,
    pub is_unique: bool,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
    pub pattern: Option<String>,
    pub is_primary_key: bool,
    pub is_generated: bool,
    pub is_email: bool,
    pub is_large_object: bool,
    pub enum_type: Option<String>,
    pub enum_values: Vec<String>,
}

impl AttributeModel {
    /// Attribute with the given name and type; everything else defaulted
    /// (nullable, no bounds, no flags).
    pub fn new(name: impl Into<String>, data_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            data_type,
            is_nullable: true,
            is_unique: false,
            min_length: None,
            max_length: None,
            min_value: None,
            max_value: None,
            pattern: None,
            is_primary_key: false,
            is_generated: false,
            is_email: false,
            is_large_object: false,
            enum_type: None,
            enum_values: Vec::new(),
        }
    }
}

/// Relationship cardinality between two entities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl RelationKind {
    /// True for the kinds whose field holds a collection of targets.
    pub fn is_collection(self) -> bool {
        matches!(self, RelationKind::OneToMany | RelationKind::ManyToMany)
    }
}

/// Relationship metadata for an entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct RelationshipModel {
    pub name: String,
    pub kind: RelationKind,
    pub target_entity: String,
    /// True when this side is not mirror-mapped by the other side.
    pub is_owning: bool,
    pub is_collection: bool,
    pub is_optional: bool,
}

impl RelationshipModel {
    pub fn new(name: impl Into<String>, kind: RelationKind, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            target_entity: target.into(),
            is_owning: true,
            is_collection: kind.is_collection(),
            is_optional: true,
        }
    }
}

/// Canonical in-memory representation of one entity's shape, independent
/// of the input source that described it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct EntityModel {
    pub name: String,
    pub namespace: String,
    pub table_name: Option<String>,
    pub attributes: Vec<AttributeModel>,
    pub relationships: Vec<RelationshipModel>,
    pub validation_rules: Vec<ValidationRule>,
    pub security_rules: Vec<SecurityRule>,
}

impl EntityModel {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            table_name: None,
            attributes: Vec::new(),
            relationships: Vec::new(),
            validation_rules: Vec::new(),
            security_rules: Vec::new(),
        }
    }
}
