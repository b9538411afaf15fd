use jsonschema::JSONSchema;
use schemars::schema::RootSchema;
use schemars::schema_for;
use serde_json::Value;

use crate::document::EntityDocument;
use crate::errors::ParseError;

/// Emit the JSON Schema for the entity document contract.
pub fn document_json_schema() -> RootSchema {
    schema_for!(EntityDocument)
}

/// One structural problem found while checking a document against the
/// contract schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIssue {
    pub path: String,
    pub message: String,
}

/// Check a JSON value against the document schema, returning every issue.
pub fn check_document_json(value: &Value) -> Result<Vec<DocumentIssue>, ParseError> {
    let schema = serde_json::to_value(document_json_schema())
        .map_err(|err| ParseError::Document(err.to_string()))?;
    let compiled =
        JSONSchema::compile(&schema).map_err(|err| ParseError::Document(err.to_string()))?;

    let mut issues = Vec::new();
    if let Err(errors) = compiled.validate(value) {
        for error in errors {
            let path = error.instance_path.to_string();
            issues.push(DocumentIssue {
                path: if path.is_empty() { "/".to_string() } else { path },
                message: error.to_string(),
            });
        }
    }
    Ok(issues)
}

/// Fail with a [`ParseError::Document`] when the value does not satisfy
/// the contract schema.
pub fn validate_document_json(value: &Value) -> Result<(), ParseError> {
    let issues = check_document_json(value)?;
    if issues.is_empty() {
        return Ok(());
    }
    let summary = issues
        .iter()
        .map(|issue| format!("{}: {}", issue.path, issue.message))
        .collect::<Vec<_>>()
        .join("; ");
    Err(ParseError::Document(summary))
}
