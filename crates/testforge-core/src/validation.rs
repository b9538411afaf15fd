use std::collections::BTreeSet;

use crate::entity::EntityModel;
use crate::error::{Error, Result};

/// Validate structural completeness of an entity model.
///
/// This checks:
/// - non-empty name and namespace
/// - at least one attribute, exactly one primary key
/// - duplicate attribute/relationship names
/// - length bounds on strings only, value bounds on numerics only
/// - `min <= max` for both bound pairs
///
/// Must pass before any rule derivation or rendering runs.
pub fn validate_model(model: &EntityModel) -> Result<()> {
    if model.name.trim().is_empty() {
        return Err(Error::InvalidModel("entity name is empty".to_string()));
    }
    if model.namespace.trim().is_empty() {
        return Err(Error::InvalidModel(format!(
            "entity '{}' has an empty namespace",
            model.name
        )));
    }
    if model.attributes.is_empty() {
        return Err(Error::InvalidModel(format!(
            "entity '{}' declares no attributes",
            model.name
        )));
    }

    let key_count = model
        .attributes
        .iter()
        .filter(|attr| attr.is_primary_key)
        .count();
    if key_count == 0 {
        return Err(Error::InvalidModel(format!(
            "entity '{}' has no primary key attribute",
            model.name
        )));
    }
    if key_count > 1 {
        return Err(Error::InvalidModel(format!(
            "entity '{}' has {} primary key attributes",
            model.name, key_count
        )));
    }

    let mut names = BTreeSet::new();
    for attr in &model.attributes {
        if !names.insert(attr.name.as_str()) {
            return Err(Error::InvalidModel(format!(
                "duplicate attribute name: {}.{}",
                model.name, attr.name
            )));
        }

        if !attr.data_type.is_string() && (attr.min_length.is_some() || attr.max_length.is_some()) {
            return Err(Error::InvalidModel(format!(
                "attribute {}.{} declares length bounds but is not string-typed",
                model.name, attr.name
            )));
        }
        if !attr.data_type.is_numeric() && (attr.min_value.is_some() || attr.max_value.is_some()) {
            return Err(Error::InvalidModel(format!(
                "attribute {}.{} declares value bounds but is not numeric",
                model.name, attr.name
            )));
        }

        if let (Some(min), Some(max)) = (attr.min_length, attr.max_length)
            && min > max
        {
            return Err(Error::InvalidModel(format!(
                "attribute {}.{} has min_length {} > max_length {}",
                model.name, attr.name, min, max
            )));
        }
        if let (Some(min), Some(max)) = (attr.min_value, attr.max_value)
            && min > max
        {
            return Err(Error::InvalidModel(format!(
                "attribute {}.{} has min_value {} > max_value {}",
                model.name, attr.name, min, max
            )));
        }
    }

    for rel in &model.relationships {
        if !names.insert(rel.name.as_str()) {
            return Err(Error::InvalidModel(format!(
                "relationship name collides with another member: {}.{}",
                model.name, rel.name
            )));
        }
        if rel.target_entity.trim().is_empty() {
            return Err(Error::InvalidModel(format!(
                "relationship {}.{} has no target entity",
                model.name, rel.name
            )));
        }
    }

    Ok(())
}
