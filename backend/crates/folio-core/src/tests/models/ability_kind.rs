use crate::{AbilityKind, CoreError};

use std::str::FromStr;

use proptest::prelude::*;

#[test]
fn test_ability_kind_as_str() {
    assert_eq!(AbilityKind::Skill.as_str(), "skill");
    assert_eq!(AbilityKind::Lang.as_str(), "lang");
}

#[test]
fn test_ability_kind_from_str() {
    assert_eq!(AbilityKind::from_str("skill").unwrap(), AbilityKind::Skill);
    assert_eq!(AbilityKind::from_str("lang").unwrap(), AbilityKind::Lang);
    assert!(AbilityKind::from_str("language").is_err());
    assert!(AbilityKind::from_str("Skill").is_err());
}

#[test]
fn test_ability_kind_list_paths() {
    assert_eq!(AbilityKind::Skill.list_path(), "/resume/skills");
    assert_eq!(AbilityKind::Lang.list_path(), "/resume/languages");
}

proptest! {
    #[test]
    fn given_any_string_outside_closed_set_when_parsed_then_rejected(value in "\\PC*") {
        prop_assume!(value != "skill" && value != "lang");

        let result = AbilityKind::from_str(&value);

        let rejected = matches!(result, Err(CoreError::InvalidAbilityKind { .. }));
        prop_assert!(rejected);
    }
}
