use crate::ApiResult;
use crate::api::extractors::html_form::required;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AbilityForm {
    pub name: Option<String>,
    /// Numeric input
    pub scale: Option<String>,
    /// Range slider; used when `scale` is left empty
    pub progress: Option<String>,
}

impl AbilityForm {
    /// Required name and scale, in that order
    pub fn into_fields(self) -> ApiResult<(String, String)> {
        let name = required(self.name, "name")?;
        let scale = match self.scale.filter(|scale| !scale.trim().is_empty()) {
            Some(scale) => scale,
            None => required(self.progress, "scale")?,
        };

        Ok((name, scale))
    }
}
