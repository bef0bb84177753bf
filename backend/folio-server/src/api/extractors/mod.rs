pub mod current_profile;
pub mod html_form;
pub mod owner;
pub mod segment;
pub mod session;
