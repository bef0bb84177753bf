pub mod experience_form;
pub mod experiences;
