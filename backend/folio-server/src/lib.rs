pub mod api;
pub mod app_state;
pub mod assets;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod templates;

#[cfg(test)]
mod tests;

pub use api::{
    abilities::ability_form::AbilityForm,
    auth::login_form::LoginForm,
    contacts::contact_form::ContactForm,
    error::ApiError,
    error::Result as ApiResult,
    experiences::experience_form::{ExperienceFields, ExperienceForm},
    extractors::{
        current_profile::CurrentProfile, html_form::HtmlForm, owner::Owner, segment::Segment,
        session::Session,
    },
    flash::{Flash, FlashLevel, IncomingFlash},
    multipart_form::MultipartForm,
    profile::{change_password_form::ChangePasswordForm, profile_form::ProfileForm},
    response::{Page, SeeOther},
};
pub use app_state::{AppState, SiteSettings};
pub use assets::{error::AssetError, image_store::ImageStore, uploaded_file::UploadedFile};
pub use templates::Templates;

pub use crate::routes::build_router;
