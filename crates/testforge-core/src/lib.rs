//! Core contracts and helpers for Testforge.
//!
//! This crate defines the canonical entity model, its derived read-only
//! views, and the structural validation shared by the derivation and
//! rendering crates.

pub mod entity;
pub mod error;
pub mod names;
pub mod rules;
pub mod security;
pub mod validation;
pub mod views;

pub use entity::{AttributeModel, AttributeType, EntityModel, RelationKind, RelationshipModel};
pub use error::{Error, Result};
pub use names::{pluralize, to_camel_case, to_pascal_case, to_snake_case};
pub use rules::{RuleKind, ValidationRule, default_message};
pub use security::{SecurityRule, aggregate_roles};
pub use validation::validate_model;
