use serde::{Deserialize, Serialize};

use testforge_core::RuleKind;

/// Output layer a rule set is derived for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RuleLayer {
    CreateInput,
    UpdateInput,
    ResponseOutput,
    ControllerBoundary,
    Persistence,
}

/// Rule enforced on an input DTO attribute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DtoValidationRule {
    pub attribute: String,
    pub kind: RuleKind,
    pub message: String,
    /// Literal required-flag: true for the Required family.
    pub required: bool,
}

/// Boundary rule: one request with one invalid field, expecting rejection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControllerValidationRule {
    pub attribute: String,
    pub kind: RuleKind,
    pub message: String,
    pub test_name: String,
    pub expected_status: u16,
    /// Source-literal form of a value violating exactly this rule.
    pub invalid_value: String,
    /// Source-literal form of a value satisfying every rule.
    pub valid_value: String,
}

/// Failure category a persistence-layer rule expects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintFailure {
    NullViolation,
    UniqueViolation,
    LengthViolation,
    RangeViolation,
    /// Not a failure: the storage layer assigns the generated key.
    GeneratedKeyAssigned,
}

/// Rule exercised directly against the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatabaseValidationRule {
    pub attribute: String,
    pub test_name: String,
    pub body: String,
    pub expects: ConstraintFailure,
    /// Source literal that triggers the expected failure, when the
    /// category needs one (length and range probes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probe: Option<String>,
}

/// All derived layers for one entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DerivedRuleSet {
    pub create: Vec<DtoValidationRule>,
    pub update: Vec<DtoValidationRule>,
    pub response: Vec<DtoValidationRule>,
    pub controller: Vec<ControllerValidationRule>,
    pub database: Vec<DatabaseValidationRule>,
}
