use serde::Serialize;

use testforge_core::{
    AttributeModel, AttributeType, EntityModel, RuleKind, aggregate_roles, to_pascal_case,
};
use testforge_rules::{DerivedRuleSet, DtoValidationRule};
use testforge_synth::ValueSynthesizer;

/// Literals synthesized for one attribute, in source-literal form.
#[derive(Debug, Clone, Serialize)]
pub struct AttributeValues {
    pub attribute: String,
    pub pascal_name: String,
    pub is_primary_key: bool,
    pub valid: String,
    pub invalid: String,
    pub unique: String,
    /// True when no meaningful valid literal could be produced.
    pub degraded: bool,
}

/// Synthesize the per-attribute value table for an entity.
pub fn synthesize_values(model: &EntityModel, synth: &mut ValueSynthesizer) -> Vec<AttributeValues> {
    model
        .attributes
        .iter()
        .map(|attr| {
            let valid = synth.valid_value(attr);
            let invalid = synth.invalid_value(attr);
            let unique = synth.unique_value(attr);
            AttributeValues {
                attribute: attr.name.clone(),
                pascal_name: to_pascal_case(&attr.name),
                is_primary_key: attr.is_primary_key,
                degraded: valid.is_null(),
                valid: valid.literal(),
                invalid: invalid.literal(),
                unique: unique.literal(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
struct TemplateAttribute {
    name: String,
    pascal_name: String,
    java_type: String,
    is_primary_key: bool,
    is_generated: bool,
    is_enum: bool,
    nullable: bool,
    annotations: Vec<String>,
}

/// Build the rendering context for one entity's artifact templates.
pub fn build_entity_context(
    model: &EntityModel,
    rules: &DerivedRuleSet,
    values: &[AttributeValues],
) -> tera::Context {
    let mut context = tera::Context::new();
    context.insert("entity", model);
    context.insert("entity_name", &model.name);
    context.insert("namespace", &model.namespace);
    context.insert("plural_name", &model.plural_name());
    context.insert("table", &model.storage_table());
    context.insert("base_path", &format!("/api/{}", model.storage_table()));
    context.insert("primary_key", &model.primary_key());

    let attributes: Vec<TemplateAttribute> = model
        .attributes
        .iter()
        .map(|attr| TemplateAttribute {
            name: attr.name.clone(),
            pascal_name: to_pascal_case(&attr.name),
            java_type: java_type(attr),
            is_primary_key: attr.is_primary_key,
            is_generated: attr.is_generated,
            is_enum: matches!(attr.data_type, AttributeType::Enum),
            nullable: attr.is_nullable,
            annotations: annotations_for(&attr.name, &rules.create),
        })
        .collect();
    context.insert("attributes", &attributes);

    context.insert("create_rules", &rules.create);
    context.insert("update_rules", &rules.update);
    context.insert("controller_rules", &rules.controller);
    context.insert("database_rules", &rules.database);
    context.insert("values", values);
    context
}

/// Build the rendering context for the shared access-control artifact.
pub fn build_security_context(models: &[EntityModel]) -> tera::Context {
    #[derive(Serialize)]
    struct PathRule {
        path: String,
        method: String,
        roles: Vec<String>,
    }

    let mut rules = Vec::new();
    for model in models {
        for rule in &model.security_rules {
            for (method, roles) in &rule.method_roles {
                rules.push(PathRule {
                    path: rule.path.clone(),
                    method: method.clone(),
                    roles: roles.clone(),
                });
            }
        }
    }

    let roles: Vec<String> = aggregate_roles(models).into_iter().collect();

    let mut context = tera::Context::new();
    context.insert("roles", &roles);
    context.insert("rules", &rules);
    context
}

fn java_type(attr: &AttributeModel) -> String {
    match attr.data_type {
        AttributeType::String => "String".to_string(),
        AttributeType::Integer => "Integer".to_string(),
        AttributeType::Long => "Long".to_string(),
        AttributeType::Double => "Double".to_string(),
        AttributeType::Float => "Float".to_string(),
        AttributeType::Boolean => "Boolean".to_string(),
        AttributeType::Date => "LocalDate".to_string(),
        AttributeType::DateTime => "LocalDateTime".to_string(),
        AttributeType::Decimal => "BigDecimal".to_string(),
        AttributeType::Enum => attr
            .enum_type
            .clone()
            .unwrap_or_else(|| "String".to_string()),
        AttributeType::Unknown => "Object".to_string(),
    }
}

fn annotations_for(attribute: &str, rules: &[DtoValidationRule]) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| rule.attribute == attribute)
        .map(|rule| annotation(&rule.kind, &rule.message))
        .collect()
}

fn annotation(kind: &RuleKind, message: &str) -> String {
    match kind {
        RuleKind::Required => format!("@NotNull(message = \"{message}\")"),
        RuleKind::RequiredNonBlank => format!("@NotBlank(message = \"{message}\")"),
        RuleKind::RequiredNonEmpty => format!("@NotEmpty(message = \"{message}\")"),
        RuleKind::LengthRange { min, max } => {
            format!("@Size(min = {min}, max = {max}, message = \"{message}\")")
        }
        RuleKind::MinValue { value } => format!("@Min(value = {value}, message = \"{message}\")"),
        RuleKind::MaxValue { value } => format!("@Max(value = {value}, message = \"{message}\")"),
        RuleKind::EmailFormat => format!("@Email(message = \"{message}\")"),
        RuleKind::PatternMatch { pattern } => {
            format!("@Pattern(regexp = \"{pattern}\", message = \"{message}\")")
        }
    }
}
