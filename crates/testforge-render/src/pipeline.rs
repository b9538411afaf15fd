use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::{info, warn};

use testforge_core::{EntityModel, validate_model};
use testforge_rules::derive_rules;
use testforge_synth::ValueSynthesizer;

use crate::collector::{GeneratedArtifacts, GenerationIssue};
use crate::context::{build_entity_context, build_security_context, synthesize_values};
use crate::engine::TemplateEngine;
use crate::errors::{GenerationError, TemplateError};

/// Per-entity artifact templates and the logical-name suffix they produce.
const ARTIFACTS: [(&str, &str); 5] = [
    ("dto.java.tera", "Dto"),
    ("test_data_builder.java.tera", "TestDataBuilder"),
    ("controller_test.java.tera", "ControllerTest"),
    ("service_test.java.tera", "ServiceTest"),
    ("persistence_test.java.tera", "PersistenceTest"),
];

/// Logical name of the shared access-control artifact.
pub const SECURITY_ARTIFACT: &str = "SecurityConfig";
const SECURITY_TEMPLATE: &str = "security_config.java.tera";

/// Options for a generation request.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Seed for the value synthesizer; identical seeds reproduce identical
    /// artifacts.
    pub seed: u64,
    /// Render the shared access-control artifact when any entity declares
    /// security rules.
    pub include_security_artifact: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            include_security_artifact: true,
        }
    }
}

/// Synchronous, single-threaded generation orchestrator.
pub struct GenerationPipeline {
    engine: TemplateEngine,
    options: GenerateOptions,
}

impl GenerationPipeline {
    pub fn new(options: GenerateOptions) -> Result<Self, TemplateError> {
        Ok(Self {
            engine: TemplateEngine::new()?,
            options,
        })
    }

    pub fn engine(&self) -> &TemplateEngine {
        &self.engine
    }

    /// Generate every artifact for the given entities.
    ///
    /// Structural validation of every model runs before any derivation or
    /// rendering. A template failure is recorded against its template id
    /// and the remaining artifacts still render; the collector's success
    /// predicate reports the degradation.
    pub fn generate(&self, models: &[EntityModel]) -> Result<GeneratedArtifacts, GenerationError> {
        for model in models {
            validate_model(model)?;
        }

        let run_id = uuid::Uuid::new_v4().to_string();
        let mut collector = GeneratedArtifacts::new(run_id.clone());

        info!(
            run_id = %run_id,
            entities = models.len(),
            seed = self.options.seed,
            "generation started"
        );

        for model in models {
            self.generate_entity(model, &mut collector)?;
        }

        if self.options.include_security_artifact
            && models.iter().any(|model| !model.security_rules.is_empty())
        {
            let context = build_security_context(models);
            match self.engine.render(SECURITY_TEMPLATE, &context) {
                Ok(text) => collector.add_artifact(
                    SECURITY_ARTIFACT,
                    format!("{SECURITY_ARTIFACT}.java"),
                    text,
                ),
                Err(err) => {
                    warn!(template = SECURITY_TEMPLATE, error = %err, "template failed");
                    collector.record_error(
                        GenerationIssue::error("template_failed", err.to_string())
                            .for_template(SECURITY_TEMPLATE),
                    );
                }
            }
        }

        info!(
            run_id = %run_id,
            artifacts = collector.artifacts.len(),
            warnings = collector.warnings.len(),
            errors = collector.errors.len(),
            "generation finished"
        );

        Ok(collector)
    }

    fn generate_entity(
        &self,
        model: &EntityModel,
        collector: &mut GeneratedArtifacts,
    ) -> Result<(), GenerationError> {
        let mut synth = ValueSynthesizer::new(entity_seed(self.options.seed, &model.name));
        let rules = derive_rules(model, &mut synth)?;
        let values = synthesize_values(model, &mut synth);

        for value in &values {
            if value.degraded {
                collector.record_warning(
                    GenerationIssue::warning(
                        "value_degraded",
                        "no meaningful literal could be produced",
                    )
                    .for_entity(&model.name)
                    .for_attribute(&value.attribute),
                );
            }
        }

        let context = build_entity_context(model, &rules, &values);

        for (template_id, suffix) in ARTIFACTS {
            match self.engine.render(template_id, &context) {
                Ok(text) => {
                    let name = format!("{}{}", model.name, suffix);
                    let file = format!("{name}.java");
                    collector.add_artifact(name, file, text);
                }
                Err(err) => {
                    warn!(
                        entity = %model.name,
                        template = template_id,
                        error = %err,
                        "template failed"
                    );
                    collector.record_error(
                        GenerationIssue::error("template_failed", err.to_string())
                            .for_entity(&model.name)
                            .for_template(template_id),
                    );
                }
            }
        }

        Ok(())
    }
}

/// Per-entity synthesizer seed, derived from the run seed so entities stay
/// independent of each other's value streams.
fn entity_seed(seed: u64, entity: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    entity.hash(&mut hasher);
    hasher.finish()
}
