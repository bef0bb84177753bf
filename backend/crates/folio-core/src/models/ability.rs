use crate::{AbilityKind, CoreError, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

pub const MIN_SCALE: i32 = 1;
pub const MAX_SCALE: i32 = 100;
pub const MAX_NAME_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub id: i64,
    pub name: String,
    pub scale: i32,
    pub kind: AbilityKind,
}

/// A validated ability that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewAbility {
    pub name: String,
    pub scale: i32,
    pub kind: AbilityKind,
}

impl NewAbility {
    #[track_caller]
    pub fn parse(name: &str, scale: &str, kind: AbilityKind) -> CoreErrorResult<Self> {
        let name = name.trim();
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(CoreError::validation(
                "name",
                format!("Name must be at most {} characters", MAX_NAME_LENGTH),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            scale: parse_scale(scale)?,
            kind,
        })
    }
}

/// Parse a proficiency scale, accepting whole numbers in `MIN_SCALE..=MAX_SCALE`
#[track_caller]
pub fn parse_scale(raw: &str) -> CoreErrorResult<i32> {
    match raw.trim().parse::<i32>() {
        Ok(scale) if (MIN_SCALE..=MAX_SCALE).contains(&scale) => Ok(scale),
        _ => Err(CoreError::validation(
            "scale",
            format!(
                "Scale must be a whole number between {} and {}, got '{}'",
                MIN_SCALE,
                MAX_SCALE,
                raw.trim()
            ),
        )),
    }
}
