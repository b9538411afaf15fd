use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Closed set of declared validation-rule kinds, each variant carrying
/// exactly the fields it needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleKind {
    Required,
    RequiredNonBlank,
    RequiredNonEmpty,
    LengthRange { min: u32, max: u32 },
    MinValue { value: i64 },
    MaxValue { value: i64 },
    EmailFormat,
    PatternMatch { pattern: String },
}

impl RuleKind {
    /// Required, RequiredNonBlank and RequiredNonEmpty form one family:
    /// at most one of them may apply to an attribute.
    pub fn is_required_family(&self) -> bool {
        matches!(
            self,
            RuleKind::Required | RuleKind::RequiredNonBlank | RuleKind::RequiredNonEmpty
        )
    }

    /// True when both values are the same variant, ignoring payloads.
    pub fn same_kind(&self, other: &RuleKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Short identifier used in codes and generated test names.
    pub fn label(&self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::RequiredNonBlank => "required_non_blank",
            RuleKind::RequiredNonEmpty => "required_non_empty",
            RuleKind::LengthRange { .. } => "length_range",
            RuleKind::MinValue { .. } => "min_value",
            RuleKind::MaxValue { .. } => "max_value",
            RuleKind::EmailFormat => "email_format",
            RuleKind::PatternMatch { .. } => "pattern_match",
        }
    }
}

/// Explicit validation rule declared on an entity attribute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ValidationRule {
    pub attribute: String,
    #[serde(flatten)]
    pub kind: RuleKind,
    pub message: String,
}

impl ValidationRule {
    pub fn new(attribute: impl Into<String>, kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            kind,
            message: message.into(),
        }
    }

    /// Rule with the default message for its kind.
    pub fn inferred(attribute: impl Into<String>, kind: RuleKind) -> Self {
        let message = default_message(&kind);
        Self::new(attribute, kind, message)
    }
}

/// Default human-readable message for a rule kind, used when a rule is
/// inferred rather than declared.
pub fn default_message(kind: &RuleKind) -> String {
    match kind {
        RuleKind::Required => "must not be null".to_string(),
        RuleKind::RequiredNonBlank => "must not be blank".to_string(),
        RuleKind::RequiredNonEmpty => "must not be empty".to_string(),
        RuleKind::LengthRange { min, max } => {
            format!("length must be between {min} and {max}")
        }
        RuleKind::MinValue { value } => format!("must be greater than or equal to {value}"),
        RuleKind::MaxValue { value } => format!("must be less than or equal to {value}"),
        RuleKind::EmailFormat => "must be a well-formed email address".to_string(),
        RuleKind::PatternMatch { pattern } => format!("must match \"{pattern}\""),
    }
}
