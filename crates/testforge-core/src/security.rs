use std::collections::{BTreeMap, BTreeSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entity::EntityModel;

/// Access-control rule: a URL path prefix plus the roles allowed per HTTP
/// method. A method absent from the mapping, or mapped to an empty role
/// list, is public.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct SecurityRule {
    pub path: String,
    pub method_roles: BTreeMap<String, Vec<String>>,
}

impl SecurityRule {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method_roles: BTreeMap::new(),
        }
    }

    pub fn allow(mut self, method: impl Into<String>, roles: &[&str]) -> Self {
        self.method_roles
            .insert(method.into(), roles.iter().map(|r| r.to_string()).collect());
        self
    }

    pub fn is_public(&self, method: &str) -> bool {
        self.method_roles
            .get(method)
            .map(|roles| roles.is_empty())
            .unwrap_or(true)
    }

    pub fn roles_for(&self, method: &str) -> &[String] {
        self.method_roles
            .get(method)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Union of every role named by the security rules of the given entities.
///
/// The reduction is commutative and idempotent: aggregating entities in
/// any order, or the same entity twice, yields the same deduplicated set.
pub fn aggregate_roles<'a, I>(entities: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a EntityModel>,
{
    let mut roles = BTreeSet::new();
    for entity in entities {
        for rule in &entity.security_rules {
            for role_list in rule.method_roles.values() {
                for role in role_list {
                    roles.insert(role.clone());
                }
            }
        }
    }
    roles
}
