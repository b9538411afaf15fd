//! Derived read-only views over an [`EntityModel`].
//!
//! Pure query functions; nothing here mutates the model.

use crate::entity::{AttributeModel, EntityModel, RelationshipModel};
use crate::names::{pluralize, to_snake_case};
use crate::rules::RuleKind;

impl EntityModel {
    /// First attribute flagged as primary key, if any.
    pub fn primary_key(&self) -> Option<&AttributeModel> {
        self.attributes.iter().find(|attr| attr.is_primary_key)
    }

    /// Attributes excluding the primary key.
    pub fn non_key_attributes(&self) -> Vec<&AttributeModel> {
        self.attributes
            .iter()
            .filter(|attr| !attr.is_primary_key)
            .collect()
    }

    /// Non-nullable attributes excluding the primary key.
    pub fn required_attributes(&self) -> Vec<&AttributeModel> {
        self.attributes
            .iter()
            .filter(|attr| !attr.is_nullable && !attr.is_primary_key)
            .collect()
    }

    pub fn unique_attributes(&self) -> Vec<&AttributeModel> {
        self.attributes.iter().filter(|attr| attr.is_unique).collect()
    }

    pub fn string_attributes(&self) -> Vec<&AttributeModel> {
        self.attributes
            .iter()
            .filter(|attr| attr.data_type.is_string())
            .collect()
    }

    pub fn numeric_attributes(&self) -> Vec<&AttributeModel> {
        self.attributes
            .iter()
            .filter(|attr| attr.data_type.is_numeric())
            .collect()
    }

    pub fn enum_attributes(&self) -> Vec<&AttributeModel> {
        self.attributes
            .iter()
            .filter(|attr| matches!(attr.data_type, crate::entity::AttributeType::Enum))
            .collect()
    }

    pub fn owning_relationships(&self) -> Vec<&RelationshipModel> {
        self.relationships.iter().filter(|rel| rel.is_owning).collect()
    }

    pub fn collection_relationships(&self) -> Vec<&RelationshipModel> {
        self.relationships
            .iter()
            .filter(|rel| rel.is_collection)
            .collect()
    }

    /// Relationships that must be present: non-optional ones, plus any with
    /// an explicit Required-family rule declared on the same name.
    pub fn required_relationships(&self) -> Vec<&RelationshipModel> {
        self.relationships
            .iter()
            .filter(|rel| !rel.is_optional || self.has_required_rule(&rel.name))
            .collect()
    }

    fn has_required_rule(&self, name: &str) -> bool {
        self.validation_rules
            .iter()
            .any(|rule| rule.attribute == name && rule.kind.is_required_family())
    }

    /// Explicit rules declared for the given attribute or relationship
    /// name, in declaration order.
    pub fn rules_for(&self, name: &str) -> Vec<&crate::rules::ValidationRule> {
        self.validation_rules
            .iter()
            .filter(|rule| rule.attribute == name)
            .collect()
    }

    /// True when an explicit rule of the given kind exists for the name.
    pub fn has_rule_of_kind(&self, name: &str, kind: &RuleKind) -> bool {
        self.validation_rules
            .iter()
            .any(|rule| rule.attribute == name && rule.kind.same_kind(kind))
    }

    /// Deterministic plural form of the entity name.
    pub fn plural_name(&self) -> String {
        pluralize(&self.name)
    }

    /// Storage-table name: the explicit one, else snake_case of the entity
    /// name, pluralized.
    pub fn storage_table(&self) -> String {
        match &self.table_name {
            Some(name) => name.clone(),
            None => pluralize(&to_snake_case(&self.name)),
        }
    }
}
