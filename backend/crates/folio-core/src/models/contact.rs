use crate::{CoreError, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

pub const MAX_CONTACT_NAME_LENGTH: usize = 64;
pub const MAX_ADDRESS_LENGTH: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub address: String,
    /// Stored filename under the logo asset directory
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
    pub name: String,
    pub address: String,
    pub logo: Option<String>,
}

impl NewContact {
    #[track_caller]
    pub fn parse(name: &str, address: &str) -> CoreErrorResult<Self> {
        let name = name.trim();
        if name.chars().count() > MAX_CONTACT_NAME_LENGTH {
            return Err(CoreError::validation(
                "name",
                format!("Name must be at most {} characters", MAX_CONTACT_NAME_LENGTH),
            ));
        }

        let address = address.trim();
        if address.chars().count() > MAX_ADDRESS_LENGTH {
            return Err(CoreError::validation(
                "address",
                format!("Address must be at most {} characters", MAX_ADDRESS_LENGTH),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            address: address.to_string(),
            logo: None,
        })
    }
}
