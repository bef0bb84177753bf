use crate::models::ability::parse_scale;
use crate::{AbilityKind, CoreError, NewAbility};

#[test]
fn given_valid_values_when_parsed_then_trimmed_ability_returned() {
    let ability = NewAbility::parse("  Python ", "5", AbilityKind::Skill).unwrap();

    assert_eq!(ability.name, "Python");
    assert_eq!(ability.scale, 5);
    assert_eq!(ability.kind, AbilityKind::Skill);
}

#[test]
fn given_non_numeric_scale_when_parsed_then_validation_error_names_field() {
    let result = NewAbility::parse("Rust", "lots", AbilityKind::Skill);

    match result {
        Err(CoreError::Validation { field, message, .. }) => {
            assert_eq!(field.as_deref(), Some("scale"));
            assert!(message.contains("lots"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_scale_bounds() {
    assert!(parse_scale("0").is_err());
    assert_eq!(parse_scale("1").unwrap(), 1);
    assert_eq!(parse_scale(" 100 ").unwrap(), 100);
    assert!(parse_scale("101").is_err());
    assert!(parse_scale("4.5").is_err());
}

#[test]
fn given_overlong_name_when_parsed_then_validation_error() {
    let name = "x".repeat(65);

    assert!(NewAbility::parse(&name, "10", AbilityKind::Lang).is_err());
}
