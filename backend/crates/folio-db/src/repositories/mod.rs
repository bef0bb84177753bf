pub mod ability_repository;
pub mod contact_repository;
pub mod experience_repository;
pub mod message_repository;
pub mod profile_repository;
