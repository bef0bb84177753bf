pub mod auth;
pub mod login_form;
