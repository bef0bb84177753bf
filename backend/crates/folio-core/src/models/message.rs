use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message left by a visitor through the public contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub content: String,
    pub postage_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub content: String,
    pub postage_date: DateTime<Utc>,
}

impl NewMessage {
    pub fn new(name: String, email: String, subject: String, content: String) -> Self {
        Self {
            name,
            email,
            subject,
            content,
            postage_date: Utc::now(),
        }
    }
}
