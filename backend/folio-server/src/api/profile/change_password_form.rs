use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ChangePasswordForm {
    pub old_password: Option<String>,
    pub new_password: Option<String>,
    pub confirm_password: Option<String>,
}
