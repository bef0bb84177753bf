pub mod abilities;
pub mod auth;
pub mod contacts;
pub mod cookies;
pub mod error;
pub mod experiences;
pub mod extractors;
pub mod flash;
pub mod inbox;
pub mod multipart_form;
pub mod passwords;
pub mod profile;
pub mod response;
