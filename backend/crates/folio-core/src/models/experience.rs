use crate::{CoreError, ExperienceKind, FORM_DATE_FORMAT, Result as CoreErrorResult};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const MAX_TITLE_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: i64,
    pub title: String,
    pub start_date: NaiveDate,
    /// `None` while the position or course is still ongoing
    pub finish_date: Option<NaiveDate>,
    pub location: String,
    pub kind: ExperienceKind,
    pub description: String,
}

impl Experience {
    /// Replace every mutable field. The kind is fixed at creation.
    pub fn apply(&mut self, draft: ExperienceDraft) {
        self.title = draft.title;
        self.start_date = draft.start_date;
        self.finish_date = draft.finish_date;
        self.location = draft.location;
        self.description = draft.description;
    }
}

/// Validated field values shared by create and edit
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceDraft {
    pub title: String,
    pub start_date: NaiveDate,
    pub finish_date: Option<NaiveDate>,
    pub location: String,
    pub description: String,
}

impl ExperienceDraft {
    #[track_caller]
    pub fn parse(
        title: &str,
        start_date: &str,
        finish_date: Option<&str>,
        location: &str,
        description: &str,
    ) -> CoreErrorResult<Self> {
        let title = title.trim();
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(CoreError::validation(
                "title",
                format!("Title must be at most {} characters", MAX_TITLE_LENGTH),
            ));
        }

        let start_date = parse_date("start_date", start_date)?;
        let finish_date = match finish_date.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Some(parse_date("finish_date", raw)?),
            None => None,
        };

        if let Some(finish) = finish_date
            && finish < start_date
        {
            return Err(CoreError::validation(
                "finish_date",
                "Finish date cannot be before start date",
            ));
        }

        Ok(Self {
            title: title.to_string(),
            start_date,
            finish_date,
            location: location.trim().to_string(),
            description: description.trim().to_string(),
        })
    }
}

#[track_caller]
fn parse_date(field: &str, raw: &str) -> CoreErrorResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), FORM_DATE_FORMAT).map_err(|_| {
        CoreError::validation(
            field,
            format!("Invalid date '{}', expected YYYY-MM-DD", raw.trim()),
        )
    })
}
