use std::collections::BTreeSet;

use testforge_core::{
    AttributeModel, EntityModel, Result, RuleKind, default_message, to_pascal_case, validate_model,
};
use testforge_synth::{SyntheticValue, ValueSynthesizer};

use crate::model::{
    ConstraintFailure, ControllerValidationRule, DatabaseValidationRule, DerivedRuleSet,
    DtoValidationRule, RuleLayer,
};

/// Expected HTTP status for every boundary rejection.
pub const BAD_REQUEST: u16 = 400;

/// Derive every layer's rule set for one entity.
///
/// Structural validation runs first; nothing is derived for an incomplete
/// model.
pub fn derive_rules(model: &EntityModel, synth: &mut ValueSynthesizer) -> Result<DerivedRuleSet> {
    validate_model(model)?;

    Ok(DerivedRuleSet {
        create: derive_dto_rules(model, RuleLayer::CreateInput),
        update: derive_dto_rules(model, RuleLayer::UpdateInput),
        response: derive_dto_rules(model, RuleLayer::ResponseOutput),
        controller: derive_controller_rules(model, synth),
        database: derive_database_rules(model, synth),
    })
}

/// Ordered DTO-layer rules: per attribute, explicit declarations first in
/// declared order, then inferred constraints.
///
/// Precedence: an explicit Required-family rule suppresses inference, and
/// at most one Required-family rule is ever emitted per attribute.
pub fn derive_dto_rules(model: &EntityModel, layer: RuleLayer) -> Vec<DtoValidationRule> {
    // Output is never constrained by input validation.
    if layer == RuleLayer::ResponseOutput {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut covered: BTreeSet<&str> = BTreeSet::new();

    for attr in &model.attributes {
        covered.insert(attr.name.as_str());

        // Callers never supply a generated key on create.
        if layer == RuleLayer::CreateInput && attr.is_primary_key && attr.is_generated {
            continue;
        }

        let explicit = model.rules_for(&attr.name);
        let mut has_required = false;

        for rule in &explicit {
            if rule.kind.is_required_family() {
                if has_required {
                    continue;
                }
                has_required = true;
            }
            out.push(dto_rule(&attr.name, rule.kind.clone(), rule.message.clone()));
        }

        if !attr.is_primary_key && !attr.is_nullable && !has_required {
            let kind = if attr.data_type.is_string() {
                RuleKind::RequiredNonBlank
            } else {
                RuleKind::Required
            };
            out.push(inferred(&attr.name, kind));
        }

        if attr.data_type.is_string()
            && let Some(max) = attr.max_length
            && !model.has_rule_of_kind(&attr.name, &RuleKind::LengthRange { min: 0, max: 0 })
        {
            out.push(inferred(
                &attr.name,
                RuleKind::LengthRange {
                    min: attr.min_length.unwrap_or(0),
                    max,
                },
            ));
        }

        if attr.data_type.is_numeric() {
            if let Some(value) = attr.min_value
                && !model.has_rule_of_kind(&attr.name, &RuleKind::MinValue { value: 0 })
            {
                out.push(inferred(&attr.name, RuleKind::MinValue { value }));
            }
            if let Some(value) = attr.max_value
                && !model.has_rule_of_kind(&attr.name, &RuleKind::MaxValue { value: 0 })
            {
                out.push(inferred(&attr.name, RuleKind::MaxValue { value }));
            }
        }

        if attr.is_email && !model.has_rule_of_kind(&attr.name, &RuleKind::EmailFormat) {
            out.push(inferred(&attr.name, RuleKind::EmailFormat));
        }
    }

    // Rules declared on relationship names pass through unchanged.
    for rel in &model.relationships {
        covered.insert(rel.name.as_str());
        for rule in model.rules_for(&rel.name) {
            out.push(dto_rule(&rel.name, rule.kind.clone(), rule.message.clone()));
        }
    }

    // Explicit rules naming nothing known are kept in declared order; only
    // the controller layer drops unresolvable targets.
    for rule in &model.validation_rules {
        if !covered.contains(rule.attribute.as_str()) {
            out.push(dto_rule(
                &rule.attribute,
                rule.kind.clone(),
                rule.message.clone(),
            ));
        }
    }

    out
}

/// Boundary rules: one per resolved target field, from the first DTO rule
/// in declared order. A single request can violate only one constraint, so
/// the first declared rule decides the invalid literal.
pub fn derive_controller_rules(
    model: &EntityModel,
    synth: &mut ValueSynthesizer,
) -> Vec<ControllerValidationRule> {
    let dto = derive_dto_rules(model, RuleLayer::CreateInput);
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut out = Vec::new();

    for rule in dto {
        let resolved = resolve_target(model, &rule.attribute);
        let Some((field, attr)) = resolved else {
            continue;
        };
        if !seen.insert(field.clone()) {
            continue;
        }

        let invalid = synth.invalid_value_for(&rule.kind);
        let valid = match attr {
            Some(attr) => synth.valid_value(attr),
            // Foreign-key fields carry the target's identifier.
            None => SyntheticValue::Int(1),
        };

        out.push(ControllerValidationRule {
            test_name: controller_test_name(&field, &rule.kind),
            attribute: field,
            kind: rule.kind,
            message: rule.message,
            expected_status: BAD_REQUEST,
            invalid_value: invalid.literal(),
            valid_value: valid.literal(),
        });
    }

    out
}

/// Resolve a rule target: an attribute keeps its name; a relationship is
/// remapped to its foreign-key field name. Unresolvable targets drop.
fn resolve_target<'a>(
    model: &'a EntityModel,
    name: &str,
) -> Option<(String, Option<&'a AttributeModel>)> {
    if let Some(attr) = model.attributes.iter().find(|attr| attr.name == name) {
        return Some((attr.name.clone(), Some(attr)));
    }
    if let Some(rel) = model.relationships.iter().find(|rel| rel.name == name) {
        return Some((format!("{}Id", rel.name), None));
    }
    None
}

fn controller_test_name(field: &str, kind: &RuleKind) -> String {
    let condition = match kind {
        RuleKind::Required => "IsMissing",
        RuleKind::RequiredNonBlank => "IsBlank",
        RuleKind::RequiredNonEmpty => "IsEmpty",
        RuleKind::LengthRange { .. } => "ExceedsMaxLength",
        RuleKind::MinValue { .. } => "IsBelowMinimum",
        RuleKind::MaxValue { .. } => "IsAboveMaximum",
        RuleKind::EmailFormat => "IsNotAnEmail",
        RuleKind::PatternMatch { .. } => "DoesNotMatchPattern",
    };
    format!("shouldReturn400When{}{}", to_pascal_case(field), condition)
}

/// Persistence rules: constraint categories in a fixed order, the
/// generated-key success case last.
pub fn derive_database_rules(
    model: &EntityModel,
    synth: &mut ValueSynthesizer,
) -> Vec<DatabaseValidationRule> {
    let mut out = Vec::new();

    for attr in model.required_attributes() {
        out.push(DatabaseValidationRule {
            attribute: attr.name.clone(),
            test_name: format!("shouldRejectNull{}", to_pascal_case(&attr.name)),
            body: format!(
                "persist an instance with {} set to null and expect a not-null constraint violation",
                attr.name
            ),
            expects: ConstraintFailure::NullViolation,
            probe: None,
        });
    }

    for attr in model.unique_attributes() {
        out.push(DatabaseValidationRule {
            attribute: attr.name.clone(),
            test_name: format!("shouldRejectDuplicate{}", to_pascal_case(&attr.name)),
            body: format!(
                "persist two instances sharing the same {} and expect a unique constraint violation on the second",
                attr.name
            ),
            expects: ConstraintFailure::UniqueViolation,
            probe: None,
        });
    }

    for attr in model.string_attributes() {
        if let Some(max) = attr.max_length {
            let kind = RuleKind::LengthRange {
                min: attr.min_length.unwrap_or(0),
                max,
            };
            out.push(DatabaseValidationRule {
                attribute: attr.name.clone(),
                test_name: format!("shouldRejectOverlong{}", to_pascal_case(&attr.name)),
                body: format!(
                    "persist an instance with {} longer than {} characters and expect a length constraint violation",
                    attr.name, max
                ),
                expects: ConstraintFailure::LengthViolation,
                probe: Some(synth.invalid_value_for(&kind).literal()),
            });
        }
    }

    for attr in model.numeric_attributes() {
        let kind = match (attr.min_value, attr.max_value) {
            (Some(value), _) => Some(RuleKind::MinValue { value }),
            (None, Some(value)) => Some(RuleKind::MaxValue { value }),
            (None, None) => None,
        };
        if let Some(kind) = kind {
            out.push(DatabaseValidationRule {
                attribute: attr.name.clone(),
                test_name: format!("shouldRejectOutOfRange{}", to_pascal_case(&attr.name)),
                body: format!(
                    "persist an instance with {} outside its declared range and expect a range constraint violation",
                    attr.name
                ),
                expects: ConstraintFailure::RangeViolation,
                probe: Some(synth.invalid_value_for(&kind).literal()),
            });
        }
    }

    if let Some(pk) = model.primary_key()
        && pk.is_generated
    {
        out.push(DatabaseValidationRule {
            attribute: pk.name.clone(),
            test_name: format!("shouldAssignGenerated{}", to_pascal_case(&pk.name)),
            body: format!(
                "persist a valid instance and expect the storage layer to assign {}",
                pk.name
            ),
            expects: ConstraintFailure::GeneratedKeyAssigned,
            probe: None,
        });
    }

    out
}

fn dto_rule(attribute: &str, kind: RuleKind, message: String) -> DtoValidationRule {
    DtoValidationRule {
        attribute: attribute.to_string(),
        required: kind.is_required_family(),
        kind,
        message,
    }
}

fn inferred(attribute: &str, kind: RuleKind) -> DtoValidationRule {
    let message = default_message(&kind);
    dto_rule(attribute, kind, message)
}
