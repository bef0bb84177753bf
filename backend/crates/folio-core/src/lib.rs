pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::ability::{Ability, NewAbility};
pub use models::ability_kind::AbilityKind;
pub use models::contact::{Contact, NewContact};
pub use models::experience::{Experience, ExperienceDraft};
pub use models::experience_kind::ExperienceKind;
pub use models::image_slot::ImageSlot;
pub use models::message::{Message, NewMessage};
pub use models::profile::{Profile, ProfileDetails};

/// Date format used by every date field in submitted forms
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";
