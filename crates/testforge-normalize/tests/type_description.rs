use serde_json::json;

use testforge_core::{RelationKind, RuleKind, ValidationRule};
use testforge_normalize::{
    ColumnFacts, FieldDescription, ParseError, StaticTypeRegistry, TypeDescription,
    TypeDescriptor, entity_from_json, from_type_description,
};

fn address_description() -> TypeDescription {
    let mut desc = TypeDescription::new("Address", "com.example.crm");
    desc.fields = vec![
        FieldDescription {
            identity: true,
            generated: true,
            column: Some(ColumnFacts {
                nullable: false,
                ..ColumnFacts::default()
            }),
            ..FieldDescription::new("id", "java.lang.Long")
        },
        FieldDescription {
            column: Some(ColumnFacts {
                nullable: false,
                max_length: Some(150),
                ..ColumnFacts::default()
            }),
            ..FieldDescription::new("street", "java.lang.String")
        },
        FieldDescription {
            column: Some(ColumnFacts {
                nullable: false,
                max_length: Some(100),
                ..ColumnFacts::default()
            }),
            ..FieldDescription::new("city", "java.lang.String")
        },
        FieldDescription {
            column: Some(ColumnFacts {
                nullable: false,
                min_length: Some(4),
                max_length: Some(10),
                ..ColumnFacts::default()
            }),
            ..FieldDescription::new("zipCode", "java.lang.String")
        },
        FieldDescription {
            cardinality: Some(RelationKind::ManyToOne),
            optional: false,
            ..FieldDescription::new("country", "Country")
        },
    ];
    desc.rules = vec![ValidationRule::new(
        "street",
        RuleKind::RequiredNonBlank,
        "street is required",
    )];
    desc
}

fn address_json() -> serde_json::Value {
    json!({
        "name": "Address",
        "namespace": "com.example.crm",
        "attributes": [
            {"name": "id", "type": "long", "nullable": false, "primary_key": true, "generated": true},
            {"name": "street", "type": "string", "nullable": false, "max_length": 150},
            {"name": "city", "type": "string", "nullable": false, "max_length": 100},
            {"name": "zipCode", "type": "string", "nullable": false, "min_length": 4, "max_length": 10}
        ],
        "relationships": [
            {"name": "country", "kind": "many_to_one", "target": "Country", "optional": false}
        ],
        "validation": [
            {"attribute": "street", "type": "required_non_blank", "message": "street is required"}
        ]
    })
}

#[test]
fn type_description_and_document_produce_equal_models() {
    let from_doc = entity_from_json(&address_json()).expect("normalize document");
    let from_desc = from_type_description(&address_description()).expect("normalize description");
    assert_eq!(from_doc, from_desc);
}

#[test]
fn collections_of_entities_become_relationships() {
    let mut desc = TypeDescription::new("Order", "com.example.shop");
    desc.fields = vec![
        FieldDescription {
            identity: true,
            ..FieldDescription::new("id", "Long")
        },
        FieldDescription {
            cardinality: Some(RelationKind::OneToMany),
            mapped_by: Some("order".to_string()),
            ..FieldDescription::new("items", "java.util.List<OrderItem>")
        },
        FieldDescription::new("tags", "Set<Tag>"),
    ];

    let model = from_type_description(&desc).expect("normalize description");
    assert_eq!(model.attributes.len(), 1);
    assert_eq!(model.relationships.len(), 2);

    let items = &model.relationships[0];
    assert_eq!(items.target_entity, "OrderItem");
    assert!(items.is_collection);
    assert!(!items.is_owning);

    // No declared cardinality: a collection defaults to one-to-many.
    let tags = &model.relationships[1];
    assert_eq!(tags.kind, RelationKind::OneToMany);
    assert_eq!(tags.target_entity, "Tag");
    assert!(tags.is_owning);
}

#[test]
fn unknown_scalars_map_to_unknown() {
    let mut desc = TypeDescription::new("Blob", "com.example");
    desc.fields = vec![
        FieldDescription {
            identity: true,
            ..FieldDescription::new("id", "Long")
        },
        FieldDescription::new("payload", "byte[]"),
    ];
    let model = from_type_description(&desc).expect("normalize description");
    assert_eq!(
        model.attributes[1].data_type,
        testforge_core::AttributeType::Unknown
    );
}

#[test]
fn unreadable_descriptions_raise_introspection_errors() {
    let mut registry = StaticTypeRegistry::new();
    registry.register(address_description());

    assert!(registry.describe("Address").is_ok());
    let err = registry.describe("Missing").expect_err("must fail");
    match err {
        ParseError::TypeIntrospection { entity, .. } => assert_eq!(entity, "Missing"),
        other => panic!("unexpected error: {other}"),
    }

    let mut bad = TypeDescription::new("Order", "com.example");
    bad.fields = vec![FieldDescription {
        cardinality: Some(RelationKind::OneToMany),
        ..FieldDescription::new("items", "List")
    }];
    assert!(matches!(
        from_type_description(&bad),
        Err(ParseError::TypeIntrospection { .. })
    ));
}
