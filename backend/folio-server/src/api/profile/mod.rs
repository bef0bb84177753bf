pub mod change_password_form;
pub mod profile;
pub mod profile_form;
