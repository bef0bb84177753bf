pub mod error;
pub mod image_store;
pub mod uploaded_file;
