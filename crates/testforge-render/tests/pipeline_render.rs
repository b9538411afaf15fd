use testforge_core::{
    AttributeModel, AttributeType, EntityModel, RuleKind, SecurityRule, ValidationRule,
};
use testforge_render::{
    GeneratedArtifacts, GenerateOptions, GenerationError, GenerationIssue, GenerationPipeline,
    SECURITY_ARTIFACT, TemplateEngine, TemplateError,
};

fn address() -> EntityModel {
    let mut entity = EntityModel::new("Address", "com.example.crm");
    entity.attributes = vec![
        AttributeModel {
            is_primary_key: true,
            is_generated: true,
            is_nullable: false,
            ..AttributeModel::new("id", AttributeType::Long)
        },
        AttributeModel {
            is_nullable: false,
            is_unique: true,
            max_length: Some(150),
            ..AttributeModel::new("street", AttributeType::String)
        },
        AttributeModel {
            is_nullable: false,
            max_length: Some(100),
            ..AttributeModel::new("city", AttributeType::String)
        },
    ];
    entity.validation_rules = vec![
        ValidationRule::new("street", RuleKind::RequiredNonBlank, "street is required"),
        ValidationRule::new("city", RuleKind::RequiredNonBlank, "city is required"),
    ];
    entity.security_rules = vec![
        SecurityRule::new("/api/addresses")
            .allow("POST", &["ADMIN"])
            .allow("GET", &[]),
    ];
    entity
}

fn pipeline() -> GenerationPipeline {
    GenerationPipeline::new(GenerateOptions::default()).expect("templates load")
}

#[test]
fn generates_the_full_artifact_set() {
    let result = pipeline().generate(&[address()]).expect("generation runs");

    assert!(result.is_successful(), "errors: {:?}", result.errors);
    for name in [
        "AddressDto",
        "AddressTestDataBuilder",
        "AddressControllerTest",
        "AddressServiceTest",
        "AddressPersistenceTest",
        SECURITY_ARTIFACT,
    ] {
        assert!(result.artifacts.contains_key(name), "missing artifact {name}");
    }
    assert!(result.files.contains(&"AddressDto.java".to_string()));
    assert_eq!(result.artifacts.len(), 6);
}

#[test]
fn rendered_artifacts_carry_derived_content() {
    let result = pipeline().generate(&[address()]).expect("generation runs");

    let dto = &result.artifacts["AddressDto"];
    assert!(dto.contains("package com.example.crm.dto;"));
    assert!(dto.contains("@NotBlank(message = \"street is required\")"));
    assert!(dto.contains("private String street;"));
    // Generated keys are never part of the input payload.
    assert!(!dto.contains("private Long id;"));

    let controller = &result.artifacts["AddressControllerTest"];
    assert!(controller.contains("shouldReturn400WhenStreetIsBlank"));
    assert!(controller.contains("payload.put(\"street\", \"\");"));
    assert!(controller.contains("status().is(400)"));

    let persistence = &result.artifacts["AddressPersistenceTest"];
    assert!(persistence.contains("shouldRejectNullStreet"));
    assert!(persistence.contains("shouldRejectDuplicateStreet"));
    assert!(persistence.contains("shouldRejectOverlongStreet"));
    assert!(persistence.contains("shouldAssignGeneratedId"));

    let security = &result.artifacts[SECURITY_ARTIFACT];
    assert!(security.contains("hasAnyRole(\"ADMIN\")"));
    assert!(security.contains("permitAll()"));
}

#[test]
fn identical_seeds_reproduce_identical_artifacts() {
    let first = pipeline().generate(&[address()]).expect("generation runs");
    let second = pipeline().generate(&[address()]).expect("generation runs");
    assert_eq!(first.artifacts, second.artifacts);
}

#[test]
fn incomplete_models_fail_before_anything_renders() {
    let mut entity = address();
    entity.attributes.clear();

    let err = pipeline().generate(&[entity]).expect_err("must fail");
    assert!(matches!(err, GenerationError::Model(_)));
}

#[test]
fn degraded_literals_surface_as_warnings() {
    let mut entity = address();
    entity
        .attributes
        .push(AttributeModel::new("status", AttributeType::Enum));

    let result = pipeline().generate(&[entity]).expect("generation runs");
    assert!(result.is_successful());
    assert!(
        result
            .warnings
            .iter()
            .any(|issue| issue.code == "value_degraded"
                && issue.attribute.as_deref() == Some("status"))
    );
}

#[test]
fn missing_templates_are_distinguished_from_render_failures() {
    let engine = TemplateEngine::new().expect("templates load");

    let err = engine
        .render("no_such_template.tera", &tera::Context::new())
        .expect_err("unknown template");
    assert!(matches!(err, TemplateError::NotFound(_)));

    // A known template with an empty context raises during evaluation.
    let err = engine
        .render("dto.java.tera", &tera::Context::new())
        .expect_err("missing context");
    match err {
        TemplateError::Render { template, .. } => assert_eq!(template, "dto.java.tera"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn collector_aggregates_and_summarizes() {
    let mut collector = GeneratedArtifacts::new("run-1");
    assert!(collector.is_successful());

    collector.add_artifact("OrderDto", "OrderDto.java", "text");
    collector.record_warning(GenerationIssue::warning("value_degraded", "no literal"));
    assert!(collector.is_successful());

    collector.record_error(
        GenerationIssue::error("template_failed", "boom").for_template("dto.java.tera"),
    );
    assert!(!collector.is_successful());
    assert_eq!(collector.summary(), "run run-1: 1 artifacts, 1 warnings, 1 errors");
}
