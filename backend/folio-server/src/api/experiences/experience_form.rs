use crate::ApiResult;
use crate::api::extractors::html_form::required;

use folio_core::{ExperienceDraft, Result as CoreResult};

use serde::Deserialize;

/// Shared by the create and edit forms
#[derive(Debug, Deserialize)]
pub struct ExperienceForm {
    pub title: Option<String>,
    pub start_date: Option<String>,
    /// Blank while ongoing
    pub finish_date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// An `ExperienceForm` whose required fields are all present
#[derive(Debug)]
pub struct ExperienceFields {
    title: String,
    start_date: String,
    finish_date: Option<String>,
    location: String,
    description: String,
}

impl ExperienceForm {
    pub fn into_fields(self) -> ApiResult<ExperienceFields> {
        Ok(ExperienceFields {
            title: required(self.title, "title")?,
            start_date: required(self.start_date, "start_date")?,
            finish_date: self.finish_date,
            location: required(self.location, "location")?,
            description: self.description.unwrap_or_default(),
        })
    }
}

impl ExperienceFields {
    pub fn parse(&self) -> CoreResult<ExperienceDraft> {
        ExperienceDraft::parse(
            &self.title,
            &self.start_date,
            self.finish_date.as_deref(),
            &self.location,
            &self.description,
        )
    }
}
