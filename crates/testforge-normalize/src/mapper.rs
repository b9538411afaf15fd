use testforge_core::{
    AttributeModel, AttributeType, EntityModel, RelationKind, RelationshipModel,
};

use crate::descriptor::{FieldDescription, TypeDescription};
use crate::errors::ParseError;

/// Build the canonical model from a live-type description.
///
/// Produces the same canonical shape as the document form for an
/// equivalent structure. A collection-of-entity field is always classified
/// as a relationship, never an attribute.
pub fn from_type_description(desc: &TypeDescription) -> Result<EntityModel, ParseError> {
    let mut attributes = Vec::new();
    let mut relationships = Vec::new();

    for field in &desc.fields {
        if field.name.trim().is_empty() {
            return Err(ParseError::TypeIntrospection {
                entity: desc.name.clone(),
                cause: "field with an empty name".to_string(),
            });
        }

        if is_relationship(field) {
            relationships.push(relationship_from_field(&desc.name, field)?);
        } else {
            attributes.push(attribute_from_field(field));
        }
    }

    Ok(EntityModel {
        name: desc.name.clone(),
        namespace: desc.namespace.clone(),
        table_name: desc.table.clone(),
        attributes,
        relationships,
        validation_rules: desc.rules.clone(),
        security_rules: desc.security.clone(),
    })
}

fn is_relationship(field: &FieldDescription) -> bool {
    field.cardinality.is_some()
        || field.element_type.is_some()
        || element_of(&field.declared_type).is_some()
}

fn relationship_from_field(
    entity: &str,
    field: &FieldDescription,
) -> Result<RelationshipModel, ParseError> {
    let declared_element = field
        .element_type
        .clone()
        .or_else(|| element_of(&field.declared_type).map(str::to_string));

    let kind = match field.cardinality {
        Some(kind) => kind,
        None if declared_element.is_some() => RelationKind::OneToMany,
        None => RelationKind::ManyToOne,
    };

    let target = if kind.is_collection() {
        declared_element.ok_or_else(|| ParseError::TypeIntrospection {
            entity: entity.to_string(),
            cause: format!(
                "collection field '{}' declares no element type",
                field.name
            ),
        })?
    } else {
        declared_element.unwrap_or_else(|| simple_name(&field.declared_type).to_string())
    };

    Ok(RelationshipModel {
        name: field.name.clone(),
        kind,
        target_entity: target,
        is_owning: field.mapped_by.is_none(),
        is_collection: kind.is_collection(),
        is_optional: field.optional,
    })
}

fn attribute_from_field(field: &FieldDescription) -> AttributeModel {
    let column = field.column.clone().unwrap_or_default();
    let data_type = scalar_type(&field.declared_type, &field.enum_literals);

    AttributeModel {
        name: field.name.clone(),
        data_type,
        is_nullable: column.nullable && !field.identity,
        is_unique: column.unique,
        min_length: column.min_length.filter(|_| data_type.is_string()),
        max_length: column.max_length.filter(|_| data_type.is_string()),
        min_value: field.min_value.filter(|_| data_type.is_numeric()),
        max_value: field.max_value.filter(|_| data_type.is_numeric()),
        pattern: field.pattern.clone(),
        is_primary_key: field.identity,
        is_generated: field.generated,
        is_email: field.email,
        is_large_object: field.lob,
        enum_type: if field.enum_literals.is_empty() {
            None
        } else {
            Some(simple_name(&field.declared_type).to_string())
        },
        enum_values: field.enum_literals.clone(),
    }
}

/// Element type of a declared collection, e.g. `List<OrderItem>` ->
/// `OrderItem`. Returns `None` for scalar declarations.
fn element_of(declared: &str) -> Option<&str> {
    let open = declared.find('<')?;
    let close = declared.rfind('>')?;
    if close <= open + 1 {
        return None;
    }
    let outer = declared[..open].trim();
    let is_collection = matches!(
        simple_name(outer),
        "List" | "Set" | "Collection" | "Iterable"
    );
    if !is_collection {
        return None;
    }
    Some(declared[open + 1..close].trim())
}

/// Last segment of a possibly package-qualified type name.
fn simple_name(declared: &str) -> &str {
    declared.rsplit('.').next().unwrap_or(declared).trim()
}

fn scalar_type(declared: &str, enum_literals: &[String]) -> AttributeType {
    if !enum_literals.is_empty() {
        return AttributeType::Enum;
    }
    match simple_name(declared) {
        "String" | "CharSequence" => AttributeType::String,
        "Integer" | "int" => AttributeType::Integer,
        "Long" | "long" => AttributeType::Long,
        "Double" | "double" => AttributeType::Double,
        "Float" | "float" => AttributeType::Float,
        "Boolean" | "boolean" => AttributeType::Boolean,
        "LocalDate" | "Date" => AttributeType::Date,
        "LocalDateTime" | "Instant" | "OffsetDateTime" | "Timestamp" => AttributeType::DateTime,
        "BigDecimal" => AttributeType::Decimal,
        _ => AttributeType::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_collection_elements() {
        assert_eq!(element_of("List<OrderItem>"), Some("OrderItem"));
        assert_eq!(element_of("java.util.Set<Tag>"), Some("Tag"));
        assert_eq!(element_of("Optional<String>"), None);
        assert_eq!(element_of("String"), None);
    }

    #[test]
    fn maps_scalar_declarations() {
        assert_eq!(scalar_type("java.lang.String", &[]), AttributeType::String);
        assert_eq!(scalar_type("long", &[]), AttributeType::Long);
        assert_eq!(scalar_type("BigDecimal", &[]), AttributeType::Decimal);
        assert_eq!(scalar_type("byte[]", &[]), AttributeType::Unknown);
    }
}
