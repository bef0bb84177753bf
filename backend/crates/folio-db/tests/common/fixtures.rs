use folio_core::{
    AbilityKind, ExperienceDraft, NewAbility, NewContact, NewMessage, ProfileDetails,
};

use chrono::{DateTime, NaiveDate, Utc};

pub fn create_test_ability(name: &str, kind: AbilityKind) -> NewAbility {
    NewAbility {
        name: name.to_string(),
        scale: 50,
        kind,
    }
}

pub fn create_test_draft(title: &str) -> ExperienceDraft {
    ExperienceDraft {
        title: title.to_string(),
        start_date: NaiveDate::from_ymd_opt(2019, 9, 1).unwrap(),
        finish_date: Some(NaiveDate::from_ymd_opt(2021, 6, 30).unwrap()),
        location: "Porto".to_string(),
        description: "Test description".to_string(),
    }
}

pub fn create_test_contact(name: &str) -> NewContact {
    NewContact {
        name: name.to_string(),
        address: format!("https://example.com/{}", name.to_lowercase()),
        logo: None,
    }
}

pub fn create_test_message(subject: &str, postage_date: DateTime<Utc>) -> NewMessage {
    NewMessage {
        name: "Visitor".to_string(),
        email: "visitor@example.com".to_string(),
        subject: subject.to_string(),
        content: "Hello there".to_string(),
        postage_date,
    }
}

pub fn create_test_profile_details() -> ProfileDetails {
    ProfileDetails {
        fullname: "Jane Doe".to_string(),
        location: "Lisbon".to_string(),
        birth: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        age: 35,
        about: "Software developer".to_string(),
    }
}
