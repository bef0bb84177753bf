mod ability;
mod ability_kind;
mod experience;
mod experience_kind;
mod profile;
