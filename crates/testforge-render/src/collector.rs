use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Structured issue raised during one generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationIssue {
    pub level: String,
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl GenerationIssue {
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: "warning".to_string(),
            code: code.into(),
            message: message.into(),
            entity: None,
            template: None,
            attribute: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: "error".to_string(),
            code: code.into(),
            message: message.into(),
            entity: None,
            template: None,
            attribute: None,
        }
    }

    pub fn for_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn for_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn for_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }
}

/// Accumulated output of one generation request: named text blobs plus a
/// file-name manifest, warnings and errors. Pure data aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedArtifacts {
    pub run_id: String,
    /// Logical artifact name -> rendered text.
    pub artifacts: BTreeMap<String, String>,
    /// Generated file names, in emission order.
    pub files: Vec<String>,
    pub warnings: Vec<GenerationIssue>,
    pub errors: Vec<GenerationIssue>,
}

impl GeneratedArtifacts {
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            artifacts: BTreeMap::new(),
            files: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn add_artifact(
        &mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.artifacts.insert(name.into(), text.into());
        self.files.push(file_name.into());
    }

    pub fn record_warning(&mut self, issue: GenerationIssue) {
        self.warnings.push(issue);
    }

    pub fn record_error(&mut self, issue: GenerationIssue) {
        self.errors.push(issue);
    }

    pub fn is_successful(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "run {}: {} artifacts, {} warnings, {} errors",
            self.run_id,
            self.artifacts.len(),
            self.warnings.len(),
            self.errors.len()
        )
    }
}
