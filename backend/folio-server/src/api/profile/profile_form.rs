use crate::{ApiResult, MultipartForm};

use folio_core::{ProfileDetails, Result as CoreResult};

/// Text fields of the profile form, checked for presence only
#[derive(Debug)]
pub struct ProfileForm {
    pub fullname: String,
    pub location: String,
    pub birth: String,
    pub age: String,
    pub about: String,
}

impl ProfileForm {
    /// `about` may be left empty; every other field is required
    pub fn from_multipart(form: &MultipartForm) -> ApiResult<Self> {
        Ok(Self {
            fullname: form.required("fullname")?,
            location: form.required("location")?,
            birth: form.required("birth")?,
            age: form.required("age")?,
            about: form.text("about").unwrap_or_default().to_string(),
        })
    }

    pub fn parse(&self) -> CoreResult<ProfileDetails> {
        ProfileDetails::parse(
            &self.fullname,
            &self.location,
            &self.birth,
            &self.age,
            &self.about,
        )
    }
}
