use crate::{CoreError, FORM_DATE_FORMAT, ImageSlot, Result as CoreErrorResult};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const MAX_FULLNAME_LENGTH: usize = 120;
pub const MAX_LOCATION_LENGTH: usize = 120;
pub const MAX_AGE: i32 = 150;

/// The site owner. Exactly one row exists once the site is provisioned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub fullname: String,
    pub location: String,
    pub birth: NaiveDate,
    pub age: i32,
    pub about: String,

    /// Stored filename under the thumbnail asset directory
    pub thumbnail: String,
    /// Stored filename under the background asset directory
    pub bg: String,

    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl Profile {
    /// Filename held by an image slot. Contact logos are not profile slots.
    pub fn image(&self, slot: ImageSlot) -> Option<&str> {
        match slot {
            ImageSlot::Thumbnail => Some(&self.thumbnail),
            ImageSlot::Background => Some(&self.bg),
            ImageSlot::Logo => None,
        }
    }

    pub fn set_image(&mut self, slot: ImageSlot, filename: String) {
        match slot {
            ImageSlot::Thumbnail => self.thumbnail = filename,
            ImageSlot::Background => self.bg = filename,
            ImageSlot::Logo => {}
        }
    }

    pub fn apply(&mut self, details: ProfileDetails) {
        self.fullname = details.fullname;
        self.location = details.location;
        self.birth = details.birth;
        self.age = details.age;
        self.about = details.about;
    }
}

/// Editable text fields of the profile, already parsed and checked
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDetails {
    pub fullname: String,
    pub location: String,
    pub birth: NaiveDate,
    pub age: i32,
    pub about: String,
}

impl ProfileDetails {
    /// Parse raw form values. Presence of each field is the caller's concern;
    /// this only rejects values that are present but unusable.
    #[track_caller]
    pub fn parse(
        fullname: &str,
        location: &str,
        birth: &str,
        age: &str,
        about: &str,
    ) -> CoreErrorResult<Self> {
        let fullname = fullname.trim();
        if fullname.chars().count() > MAX_FULLNAME_LENGTH {
            return Err(CoreError::validation(
                "fullname",
                format!("Full name must be at most {} characters", MAX_FULLNAME_LENGTH),
            ));
        }

        let location = location.trim();
        if location.chars().count() > MAX_LOCATION_LENGTH {
            return Err(CoreError::validation(
                "location",
                format!("Location must be at most {} characters", MAX_LOCATION_LENGTH),
            ));
        }

        let birth = NaiveDate::parse_from_str(birth.trim(), FORM_DATE_FORMAT).map_err(|_| {
            CoreError::validation("birth", format!("Invalid birth date '{}'", birth.trim()))
        })?;

        let age = match age.trim().parse::<i32>() {
            Ok(age) if (0..=MAX_AGE).contains(&age) => age,
            _ => {
                return Err(CoreError::validation(
                    "age",
                    format!("Age must be a whole number between 0 and {}", MAX_AGE),
                ));
            }
        };

        Ok(Self {
            fullname: fullname.to_string(),
            location: location.to_string(),
            birth,
            age,
            about: about.trim().to_string(),
        })
    }
}
