use crate::{CoreError, ExperienceKind};

use std::str::FromStr;

use proptest::prelude::*;

#[test]
fn test_experience_kind_round_trip() {
    for kind in [ExperienceKind::Career, ExperienceKind::Education] {
        assert_eq!(ExperienceKind::from_str(kind.as_str()).unwrap(), kind);
    }
}

#[test]
fn test_experience_kind_list_paths() {
    assert_eq!(ExperienceKind::Career.list_path(), "/resume/careers");
    assert_eq!(ExperienceKind::Education.list_path(), "/resume/educations");
}

proptest! {
    #[test]
    fn given_any_string_outside_closed_set_when_parsed_then_rejected(value in "[a-z]{0,12}") {
        prop_assume!(value != "career" && value != "education");

        let rejected = matches!(
            ExperienceKind::from_str(&value),
            Err(CoreError::InvalidExperienceKind { .. })
        );
        prop_assert!(rejected);
    }
}
