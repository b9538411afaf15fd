use testforge_core::{AttributeModel, AttributeType, RuleKind};
use testforge_synth::{SyntheticValue, ValueSynthesizer};

fn string_attr(min: Option<u32>, max: Option<u32>) -> AttributeModel {
    AttributeModel {
        min_length: min,
        max_length: max,
        ..AttributeModel::new("label", AttributeType::String)
    }
}

#[test]
fn valid_strings_respect_bounds() {
    let mut synth = ValueSynthesizer::new(7);

    let unbounded = synth.valid_value(&string_attr(None, None));
    assert_eq!(unbounded.as_str().map(str::len), Some(10));

    let bounded = synth.valid_value(&string_attr(Some(2), Some(6)));
    let len = bounded.as_str().map(str::len).unwrap();
    assert!((2..=6).contains(&len), "length {len} outside [2, 6]");

    let tight = synth.valid_value(&string_attr(Some(5), Some(5)));
    assert_eq!(tight.as_str().map(str::len), Some(5));

    let body = synth.valid_value(&string_attr(None, Some(255)));
    assert!(body.as_str().unwrap().chars().all(|c| c.is_ascii_lowercase()));
}

#[test]
fn valid_numeric_values_sit_in_range() {
    let mut synth = ValueSynthesizer::new(7);
    let attr = AttributeModel {
        min_value: Some(10),
        max_value: Some(12),
        ..AttributeModel::new("quantity", AttributeType::Integer)
    };
    for _ in 0..20 {
        let value = synth.valid_value(&attr).as_i64().unwrap();
        assert!((10..=12).contains(&value));
    }

    let unbounded = AttributeModel::new("count", AttributeType::Long);
    let value = synth.valid_value(&unbounded).as_i64().unwrap();
    assert!((1..=1000).contains(&value));
}

#[test]
fn fixed_valid_defaults() {
    let mut synth = ValueSynthesizer::new(0);

    assert_eq!(
        synth.valid_value(&AttributeModel::new("active", AttributeType::Boolean)),
        SyntheticValue::Bool(true)
    );

    let status = AttributeModel {
        enum_values: vec!["NEW".to_string(), "DONE".to_string()],
        ..AttributeModel::new("status", AttributeType::Enum)
    };
    assert_eq!(
        synth.valid_value(&status),
        SyntheticValue::Text("NEW".to_string())
    );

    let bare_enum = AttributeModel::new("status", AttributeType::Enum);
    assert!(synth.valid_value(&bare_enum).is_null());

    let date = synth.valid_value(&AttributeModel::new("since", AttributeType::Date));
    assert_eq!(date.raw(), "2024-01-01");
}

#[test]
fn boundary_invalid_numbers_are_off_by_one() {
    let mut synth = ValueSynthesizer::new(3);

    let both = AttributeModel {
        min_value: Some(0),
        max_value: Some(150),
        ..AttributeModel::new("age", AttributeType::Integer)
    };
    assert_eq!(synth.invalid_value(&both), SyntheticValue::Int(-1));

    let max_only = AttributeModel {
        max_value: Some(150),
        ..AttributeModel::new("age", AttributeType::Integer)
    };
    assert_eq!(synth.invalid_value(&max_only), SyntheticValue::Int(151));

    let unbounded = AttributeModel::new("age", AttributeType::Integer);
    assert_eq!(synth.invalid_value(&unbounded), SyntheticValue::Int(-1));
}

#[test]
fn boundary_invalid_strings() {
    let mut synth = ValueSynthesizer::new(3);

    let blank_required = AttributeModel {
        is_nullable: false,
        max_length: Some(40),
        ..AttributeModel::new("name", AttributeType::String)
    };
    assert_eq!(synth.invalid_value(&blank_required).as_str(), Some(""));

    let overlong = AttributeModel {
        max_length: Some(8),
        ..AttributeModel::new("name", AttributeType::String)
    };
    assert_eq!(synth.invalid_value(&overlong).as_str().map(str::len), Some(9));

    let email = AttributeModel {
        is_email: true,
        ..AttributeModel::new("contact", AttributeType::String)
    };
    let literal = synth.invalid_value(&email);
    assert!(!literal.as_str().unwrap().contains('@'));
}

#[test]
fn rule_targeted_invalid_literals() {
    let mut synth = ValueSynthesizer::new(3);

    assert!(synth.invalid_value_for(&RuleKind::Required).is_null());
    assert_eq!(
        synth.invalid_value_for(&RuleKind::RequiredNonBlank).as_str(),
        Some("")
    );
    assert_eq!(
        synth
            .invalid_value_for(&RuleKind::LengthRange { min: 0, max: 150 })
            .as_str()
            .map(str::len),
        Some(151)
    );
    assert_eq!(
        synth.invalid_value_for(&RuleKind::MinValue { value: 0 }),
        SyntheticValue::Int(-1)
    );
    assert_eq!(
        synth.invalid_value_for(&RuleKind::MaxValue { value: 150 }),
        SyntheticValue::Int(151)
    );

    let counterexample = synth.invalid_value_for(&RuleKind::PatternMatch {
        pattern: "^[0-9]{5}$".to_string(),
    });
    assert_eq!(counterexample.as_str(), Some(""));

    // A pattern that matches everything degrades to the null marker.
    let degenerate = synth.invalid_value_for(&RuleKind::PatternMatch {
        pattern: ".*".to_string(),
    });
    assert!(degenerate.is_null());
}

#[test]
fn unique_strings_stay_inside_every_length_budget() {
    for max in [3u32, 10, 255] {
        for min in [0u32, 1, 2, 3] {
            if min > max {
                continue;
            }
            let mut synth = ValueSynthesizer::new(11);
            let attr = string_attr(Some(min), Some(max));
            for _ in 0..25 {
                let value = synth.unique_value(&attr);
                let len = value.as_str().map(str::len).unwrap() as u32;
                assert!(
                    (min..=max).contains(&len),
                    "len {len} outside [{min}, {max}]"
                );
            }
        }
    }
}

#[test]
fn unique_strings_are_distinct_within_a_run() {
    let mut synth = ValueSynthesizer::new(5);
    let attr = string_attr(None, Some(40));
    let mut seen = std::collections::BTreeSet::new();
    for _ in 0..50 {
        let value = synth.unique_value(&attr).as_str().unwrap().to_string();
        assert!(seen.insert(value), "duplicate unique value produced");
    }
}

#[test]
fn unique_strings_keep_separator_and_suffix_under_large_budgets() {
    let mut synth = ValueSynthesizer::new(5);
    let attr = string_attr(None, Some(255));
    let value = synth.unique_value(&attr);
    let text = value.as_str().unwrap();
    assert!(text.contains('_'));
    let suffix = text.rsplit('_').next().unwrap();
    assert_eq!(suffix.len(), 4);
}

#[test]
fn unique_emails_vary_the_local_part() {
    let mut synth = ValueSynthesizer::new(5);
    let attr = AttributeModel {
        is_email: true,
        ..AttributeModel::new("contact", AttributeType::String)
    };
    let first = synth.unique_value(&attr).as_str().unwrap().to_string();
    let second = synth.unique_value(&attr).as_str().unwrap().to_string();
    assert_ne!(first, second);
    for value in [&first, &second] {
        let (local, domain) = value.split_once('@').expect("rfc-shaped email");
        assert!(!local.is_empty());
        assert!(domain.contains('.'));
    }
}

#[test]
fn same_seed_means_same_stream() {
    let attr = string_attr(Some(2), Some(30));
    let mut a = ValueSynthesizer::new(42);
    let mut b = ValueSynthesizer::new(42);
    for _ in 0..10 {
        assert_eq!(a.valid_value(&attr), b.valid_value(&attr));
        assert_eq!(a.unique_value(&attr), b.unique_value(&attr));
    }
}

#[test]
fn synthesizer_never_errors_only_degrades() {
    let mut synth = ValueSynthesizer::new(9);
    let unknown = AttributeModel::new("mystery", AttributeType::Unknown);
    assert!(synth.valid_value(&unknown).is_null());
    assert!(synth.invalid_value(&unknown).is_null());
    assert_eq!(synth.valid_value(&unknown).literal(), "null");
}
