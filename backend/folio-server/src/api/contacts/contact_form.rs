use crate::{ApiResult, MultipartForm};

use folio_core::{NewContact, Result as CoreResult};

/// Text fields of the contact form; the logo travels separately
#[derive(Debug)]
pub struct ContactForm {
    pub name: String,
    pub address: String,
}

impl ContactForm {
    pub fn from_multipart(form: &MultipartForm) -> ApiResult<Self> {
        Ok(Self {
            name: form.required("name")?,
            address: form.required("address")?,
        })
    }

    pub fn parse(&self) -> CoreResult<NewContact> {
        NewContact::parse(&self.name, &self.address)
    }
}
