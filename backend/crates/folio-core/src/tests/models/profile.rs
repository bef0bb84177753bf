use crate::{CoreError, ImageSlot, Profile, ProfileDetails};
use crate::models::image_slot::{BACKGROUND_SENTINEL, THUMBNAIL_SENTINEL};

use chrono::NaiveDate;

#[test]
fn given_valid_fields_when_parsed_then_details_returned() {
    let details =
        ProfileDetails::parse(" Jane Doe ", "Lisbon", "1990-05-17", "35", "Hello").unwrap();

    assert_eq!(details.fullname, "Jane Doe");
    assert_eq!(details.birth, NaiveDate::from_ymd_opt(1990, 5, 17).unwrap());
    assert_eq!(details.age, 35);
}

#[test]
fn given_negative_age_when_parsed_then_validation_error() {
    let result = ProfileDetails::parse("Jane", "Lisbon", "1990-05-17", "-1", "");

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_unparseable_birth_when_parsed_then_validation_error() {
    let result = ProfileDetails::parse("Jane", "Lisbon", "yesterday", "30", "");

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

fn stored_profile() -> Profile {
    Profile {
        id: 1,
        fullname: String::from("Jane Doe"),
        location: String::from("Lisbon"),
        birth: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        age: 35,
        about: String::new(),
        thumbnail: String::from(THUMBNAIL_SENTINEL),
        bg: String::from(BACKGROUND_SENTINEL),
        password_hash: String::from("hash"),
    }
}

#[test]
fn given_profile_when_image_by_slot_then_matching_field() {
    let profile = stored_profile();

    assert_eq!(profile.image(ImageSlot::Thumbnail), Some(THUMBNAIL_SENTINEL));
    assert_eq!(profile.image(ImageSlot::Background), Some(BACKGROUND_SENTINEL));
    assert_eq!(profile.image(ImageSlot::Logo), None);
}

#[test]
fn given_profile_when_set_background_then_thumbnail_untouched() {
    let mut profile = stored_profile();

    profile.set_image(ImageSlot::Background, String::from("abc.png"));

    assert_eq!(profile.bg, "abc.png");
    assert_eq!(profile.thumbnail, THUMBNAIL_SENTINEL);
}

#[test]
fn given_details_when_applied_then_text_fields_replaced() {
    let mut profile = stored_profile();
    let details = ProfileDetails::parse("John Roe", "Porto", "1985-01-02", "40", "Bio").unwrap();

    profile.apply(details);

    assert_eq!(profile.fullname, "John Roe");
    assert_eq!(profile.location, "Porto");
    assert_eq!(profile.age, 40);
    assert_eq!(profile.about, "Bio");
    assert_eq!(profile.thumbnail, THUMBNAIL_SENTINEL);
}
