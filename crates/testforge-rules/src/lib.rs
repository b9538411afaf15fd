//! Layer-specific validation rule derivation.
//!
//! Consumes a validated canonical model and computes the ordered rule set
//! each output layer enforces, merging explicit declarations with inferred
//! constraints under a fixed precedence.

pub mod derive;
pub mod model;

pub use derive::{
    BAD_REQUEST, derive_controller_rules, derive_database_rules, derive_dto_rules, derive_rules,
};
pub use model::{
    ConstraintFailure, ControllerValidationRule, DatabaseValidationRule, DerivedRuleSet,
    DtoValidationRule, RuleLayer,
};
