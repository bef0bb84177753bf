//! `multipart/form-data` bodies (forms with file inputs)

use crate::{ApiError, ApiResult, UploadedFile};
use crate::api::extractors::html_form::required;

use std::collections::HashMap;

use axum::extract::Multipart;

/// Text fields and files of a multipart form, read fully into memory.
///
/// The body size is capped by the router's body limit.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl MultipartForm {
    pub async fn read(mut multipart: Multipart) -> ApiResult<Self> {
        let mut form = MultipartForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                // An empty file input still submits a part, with no filename
                Some(filename) if filename.is_empty() => {}
                Some(filename) => {
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::bad_request(e.body_text()))?;
                    form.files
                        .insert(name, UploadedFile::new(filename, bytes.to_vec()));
                }
                None => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| ApiError::bad_request(e.body_text()))?;
                    form.fields.insert(name, text);
                }
            }
        }

        Ok(form)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// A present, non-blank text field
    #[track_caller]
    pub fn required(&self, name: &str) -> ApiResult<String> {
        required(self.fields.get(name).cloned(), name)
    }

    /// Remove and return an uploaded file
    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }
}
