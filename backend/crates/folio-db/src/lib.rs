pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::{MIGRATOR, connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::ability_repository::AbilityRepository;
pub use repositories::contact_repository::ContactRepository;
pub use repositories::experience_repository::ExperienceRepository;
pub use repositories::message_repository::MessageRepository;
pub use repositories::profile_repository::ProfileRepository;
