use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub password: Option<String>,
}
