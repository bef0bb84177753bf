use crate::AppState;
use crate::api::{abilities, auth, contacts, experiences, inbox, profile};
use crate::health;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::services::ServeDir;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let images = ServeDir::new(state.images.root());
    let body_limit = DefaultBodyLimit::max(state.settings.max_upload_bytes);

    Router::new()
        .route("/health", get(health::liveness))
        // Session
        .route("/login", get(auth::auth::login_page).post(auth::auth::login))
        .route("/logout", get(auth::auth::logout))
        // Profile
        .route(
            "/",
            get(profile::profile::profile_page).post(profile::profile::update_profile),
        )
        .route(
            "/profile",
            get(profile::profile::profile_page).post(profile::profile::update_profile),
        )
        .route(
            "/change/password",
            get(profile::profile::change_password_page).post(profile::profile::change_password),
        )
        .route(
            "/profile/change/password",
            get(profile::profile::change_password_page).post(profile::profile::change_password),
        )
        .route(
            "/profile/delete/img/{slot}",
            get(profile::profile::delete_image),
        )
        // Abilities
        .route("/resume/skills", get(abilities::abilities::list_skills))
        .route("/resume/languages", get(abilities::abilities::list_languages))
        .route(
            "/resume/abilities/{kind}/new",
            post(abilities::abilities::create_ability),
        )
        .route(
            "/resume/delete/ability/{id}",
            get(abilities::abilities::delete_ability),
        )
        // Experiences
        .route("/resume/careers", get(experiences::experiences::list_careers))
        .route(
            "/resume/educations",
            get(experiences::experiences::list_educations),
        )
        .route(
            "/resume/experiences/{kind}/new",
            post(experiences::experiences::create_experience),
        )
        .route(
            "/resume/experiences/edit/{id}",
            get(experiences::experiences::edit_experience_page)
                .post(experiences::experiences::edit_experience),
        )
        .route(
            "/resume/experiences/delete/{id}",
            get(experiences::experiences::delete_experience),
        )
        // Contacts
        .route(
            "/contacts",
            get(contacts::contacts::list_contacts).post(contacts::contacts::create_contact),
        )
        .route(
            "/contacts/{id}/delete",
            get(contacts::contacts::delete_contact),
        )
        // Inbox
        .route("/contact/inbox", get(inbox::inbox::inbox))
        .route("/contact/inbox/{id}", get(inbox::inbox::read_message))
        .route(
            "/contact/inbox/{id}/delete",
            get(inbox::inbox::delete_message),
        )
        // Uploaded images, read-only
        .nest_service("/static/images", images)
        .layer(body_limit)
        .with_state(state)
}
