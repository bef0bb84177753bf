pub mod ability;
pub mod ability_kind;
pub mod contact;
pub mod experience;
pub mod experience_kind;
pub mod image_slot;
pub mod message;
pub mod profile;
