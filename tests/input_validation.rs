//! 원시 입력 검증·기본값 적용 테스트.
use pump_sizing_toolbox::pump::{
    input::{DomainRule, DEFAULT_FRICTION_RATE_PER_100M},
    normalize, Field, RawPumpInput, ValidationError,
};

fn minimal() -> RawPumpInput {
    [
        (Field::PumpName, "P-101A/B"),
        (Field::FlowRate, "60"),
        (Field::PipeDiameter, "100"),
        (Field::StraightPipeLength, "30"),
        (Field::VerticalHead, "18"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn blank_optional_fields_take_defaults() {
    let mut raw = minimal();
    raw.set(Field::FrictionRate, "   ").set(Field::BallValves, "");
    let case = normalize(&raw).unwrap();
    assert_eq!(case.pump_name, "P-101A/B");
    assert_eq!(case.input.friction_rate_per_100m, DEFAULT_FRICTION_RATE_PER_100M);
    assert_eq!(case.input.extra_loss_m, 0.0);
    assert_eq!(case.input.daily_volume_cmd, 0.0);
    assert_eq!(case.input.fittings.ball_valves, 0);
    assert_eq!(case.input.fittings.y_strainer_count, 0);
}

#[test]
fn values_are_trimmed_before_parsing() {
    let mut raw = minimal();
    raw.set(Field::FlowRate, " 45.5 \n").set(Field::CheckValves, " 2 ");
    let case = normalize(&raw).unwrap();
    assert_eq!(case.input.flow_rate_cmh, 45.5);
    assert_eq!(case.input.fittings.check_valves, 2);
}

#[test]
fn missing_required_field_is_a_parse_error() {
    for field in [
        Field::PumpName,
        Field::FlowRate,
        Field::PipeDiameter,
        Field::StraightPipeLength,
        Field::VerticalHead,
    ] {
        let mut raw = minimal();
        raw.set(field, "");
        let err = normalize(&raw).unwrap_err();
        assert_eq!(err, ValidationError::InputParse { field, raw: None });
    }
}

#[test]
fn non_numeric_value_names_the_field() {
    let mut raw = minimal();
    raw.set(Field::StraightPipeLength, "thirty");
    let err = normalize(&raw).unwrap_err();
    assert_eq!(err.field(), Field::StraightPipeLength);
    assert!(err.to_string().starts_with("straight_pipe_length_m"));
}

#[test]
fn fractional_diameter_and_counts_are_parse_errors() {
    let mut raw = minimal();
    raw.set(Field::PipeDiameter, "100.0");
    assert!(matches!(
        normalize(&raw),
        Err(ValidationError::InputParse {
            field: Field::PipeDiameter,
            raw: Some(_)
        })
    ));

    let mut raw = minimal();
    raw.set(Field::Elbow90, "1.5");
    assert!(matches!(
        normalize(&raw),
        Err(ValidationError::InputParse {
            field: Field::Elbow90,
            ..
        })
    ));
}

#[test]
fn physically_invalid_values_are_domain_errors() {
    let cases = [
        (Field::PipeDiameter, "0", DomainRule::Positive),
        (Field::PipeDiameter, "-50", DomainRule::Positive),
        (Field::StraightPipeLength, "-1", DomainRule::NonNegative),
        (Field::FlowRate, "-10", DomainRule::NonNegative),
        (Field::YStrainer, "-1", DomainRule::NonNegative),
        (Field::FlowRate, "inf", DomainRule::Finite),
        (Field::VerticalHead, "NaN", DomainRule::Finite),
    ];
    for (field, text, expected) in cases {
        let mut raw = minimal();
        raw.set(field, text);
        match normalize(&raw) {
            Err(ValidationError::InvalidDomainValue { field: f, rule, .. }) => {
                assert_eq!(f, field);
                assert_eq!(rule, expected, "{field}={text}");
            }
            other => panic!("{field}={text}: unexpected {other:?}"),
        }
    }
}

#[test]
fn zero_flow_and_negative_vertical_head_are_accepted() {
    let mut raw = minimal();
    raw.set(Field::FlowRate, "0").set(Field::VerticalHead, "-2.5");
    let case = normalize(&raw).unwrap();
    assert_eq!(case.input.flow_rate_cmh, 0.0);
    assert_eq!(case.input.vertical_head_m, -2.5);
}

#[test]
fn field_keys_round_trip() {
    for field in Field::ALL {
        assert_eq!(Field::from_key(field.key()), Some(field));
    }
    assert_eq!(Field::from_key("flow"), None);
}
