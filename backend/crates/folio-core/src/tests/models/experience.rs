use crate::{CoreError, Experience, ExperienceDraft, ExperienceKind};

use chrono::NaiveDate;

#[test]
fn given_open_ended_entry_when_parsed_then_finish_date_is_none() {
    let draft = ExperienceDraft::parse("Engineer", "2020-01-15", Some(""), "Remote", "Work").unwrap();

    assert_eq!(draft.start_date, NaiveDate::from_ymd_opt(2020, 1, 15).unwrap());
    assert_eq!(draft.finish_date, None);
}

#[test]
fn given_finish_before_start_when_parsed_then_validation_error() {
    let result = ExperienceDraft::parse("Engineer", "2020-01-15", Some("2019-12-31"), "", "");

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_malformed_start_date_when_parsed_then_validation_error() {
    let result = ExperienceDraft::parse("Engineer", "15/01/2020", None, "", "");

    match result {
        Err(CoreError::Validation { field, .. }) => {
            assert_eq!(field.as_deref(), Some("start_date"))
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn given_draft_when_applied_then_all_mutable_fields_replaced_and_kind_kept() {
    let mut experience = Experience {
        id: 3,
        title: "Old".into(),
        start_date: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
        finish_date: None,
        location: "Old town".into(),
        kind: ExperienceKind::Education,
        description: "Old description".into(),
    };
    let draft = ExperienceDraft::parse(
        "New",
        "2011-02-02",
        Some("2012-03-03"),
        "New town",
        "New description",
    )
    .unwrap();

    experience.apply(draft);

    assert_eq!(experience.id, 3);
    assert_eq!(experience.title, "New");
    assert_eq!(
        experience.finish_date,
        Some(NaiveDate::from_ymd_opt(2012, 3, 3).unwrap())
    );
    assert_eq!(experience.location, "New town");
    assert_eq!(experience.description, "New description");
    assert_eq!(experience.kind, ExperienceKind::Education);
}
