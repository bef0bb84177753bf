pub mod abilities;
pub mod ability_form;
