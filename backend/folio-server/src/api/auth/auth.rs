//! Login and logout

use crate::api::cookies::{expired_session_cookie, session_cookie};
use crate::api::extractors::html_form::required;
use crate::api::passwords;
use crate::{
    ApiResult, AppState, CurrentProfile, Flash, HtmlForm, IncomingFlash, LoginForm, Page,
    SeeOther, Session,
};

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use log::{info, warn};
use minijinja::context;

pub const PROFILE_PATH: &str = "/profile";

/// GET /login
///
/// Render the login view, or bounce an already logged-in owner to the profile.
pub async fn login_page(
    State(state): State<AppState>,
    session: Session,
    CurrentProfile(profile): CurrentProfile,
    flash: IncomingFlash,
) -> ApiResult<Response> {
    if session.is_owner(&profile) {
        return Ok(SeeOther::to(PROFILE_PATH)
            .with_flash(Flash::info("You already logged in"))
            .into_response());
    }

    let page = Page::render(&state.templates, "login.html", flash, context! { profile => profile })?;
    Ok(page.into_response())
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    flash: IncomingFlash,
    HtmlForm(form): HtmlForm<LoginForm>,
) -> ApiResult<Response> {
    let password = required(form.password, "password")?;

    if !passwords::verify(password, profile.password_hash.clone()).await? {
        warn!("Failed login attempt");
        let page = Page::render(
            &state.templates,
            "login.html",
            flash.replace(Flash::danger("Incorrect Password")),
            context! { profile => profile },
        )?;
        return Ok(page.into_response());
    }

    let token = state.sessions.issue(profile.id, &profile.password_hash)?;
    info!("Owner logged in");

    Ok(SeeOther::to(PROFILE_PATH)
        .with_cookie(session_cookie(
            &token,
            state.sessions.ttl_secs(),
            state.settings.secure_cookie,
        ))
        .into_response())
}

/// GET /logout
///
/// Always clears the session, whether or not one existed.
pub async fn logout(State(state): State<AppState>) -> SeeOther {
    info!("Session cleared");
    SeeOther::to(state.settings.public_url.clone())
        .with_cookie(expired_session_cookie(state.settings.secure_cookie))
}
