//! Profile editing, password change and profile image removal

use crate::api::auth::auth::PROFILE_PATH;
use crate::api::cookies::session_cookie;
use crate::api::extractors::html_form::required;
use crate::api::passwords;
use crate::{
    ApiError, ApiResult, AppState, ChangePasswordForm, Flash, HtmlForm, IncomingFlash,
    MultipartForm, Owner, Page, ProfileForm, SeeOther, Segment,
};

use folio_core::{ImageSlot, Profile};
use folio_db::ProfileRepository;

use axum::{
    extract::{Multipart, State},
    http::Uri,
};
use log::{info, warn};
use minijinja::context;

const PROFILE_SLOTS: [ImageSlot; 2] = [ImageSlot::Thumbnail, ImageSlot::Background];

/// GET / and GET /profile
pub async fn profile_page(
    State(state): State<AppState>,
    Owner(profile): Owner,
    flash: IncomingFlash,
) -> ApiResult<Page> {
    Page::render(
        &state.templates,
        "index.html",
        flash,
        context! { profile => profile },
    )
}

/// POST / and POST /profile
///
/// Multipart form: fullname, location, birth, age, about, and optional
/// `thumbnail` / `bg` image files.
pub async fn update_profile(
    State(state): State<AppState>,
    Owner(profile): Owner,
    multipart: Multipart,
) -> ApiResult<SeeOther> {
    let mut multipart = MultipartForm::read(multipart).await?;
    let fields = ProfileForm::from_multipart(&multipart)?;

    save_profile(&state, profile, &fields, &mut multipart)
        .await
        .or_else(|e| e.recover(PROFILE_PATH))
}

async fn save_profile(
    state: &AppState,
    mut profile: Profile,
    fields: &ProfileForm,
    form: &mut MultipartForm,
) -> ApiResult<SeeOther> {
    let details = fields.parse()?;

    // Check every upload before writing any of them
    let mut uploads = Vec::new();
    for slot in PROFILE_SLOTS {
        if let Some(file) = form.take_file(slot_field(slot)) {
            state.images.check(&file)?;
            uploads.push((slot, file));
        }
    }

    // New files first; the previous ones go only once the row points away from them
    let mut stored_now = Vec::new();
    let mut replaced = Vec::new();
    for (slot, file) in &uploads {
        let stored = match state.images.store(*slot, file).await {
            Ok(stored) => stored,
            Err(e) => {
                discard_all(state, &stored_now).await;
                return Err(e.into());
            }
        };
        if let Some(previous) = profile.image(*slot) {
            replaced.push((*slot, previous.to_string()));
        }
        profile.set_image(*slot, stored.clone());
        stored_now.push((*slot, stored));
    }

    profile.apply(details);

    if let Err(e) = ProfileRepository::new(state.pool.clone())
        .update(&profile)
        .await
    {
        discard_all(state, &stored_now).await;
        return Err(e.into());
    }

    discard_all(state, &replaced).await;

    info!("Profile updated ({} new image(s))", stored_now.len());
    Ok(SeeOther::to(PROFILE_PATH).with_flash(Flash::success("Profile modified")))
}

async fn discard_all(state: &AppState, files: &[(ImageSlot, String)]) {
    for (slot, name) in files {
        state.images.discard(*slot, name).await;
    }
}

/// Multipart field carrying the upload for a profile slot
fn slot_field(slot: ImageSlot) -> &'static str {
    match slot {
        ImageSlot::Thumbnail => "thumbnail",
        ImageSlot::Background => "bg",
        ImageSlot::Logo => "logo",
    }
}

/// GET /change/password and GET /profile/change/password
pub async fn change_password_page(
    State(state): State<AppState>,
    Owner(profile): Owner,
    flash: IncomingFlash,
) -> ApiResult<Page> {
    Page::render(
        &state.templates,
        "change_password.html",
        flash,
        context! { profile => profile },
    )
}

/// POST /change/password and POST /profile/change/password
///
/// Redirects back to whichever of the two paths was used. Sessions issued
/// before the change stop working; the caller gets a fresh one.
pub async fn change_password(
    State(state): State<AppState>,
    Owner(profile): Owner,
    uri: Uri,
    HtmlForm(form): HtmlForm<ChangePasswordForm>,
) -> ApiResult<SeeOther> {
    let old_password = required(form.old_password, "old_password")?;
    let new_password = required(form.new_password, "new_password")?;
    let confirm_password = required(form.confirm_password, "confirm_password")?;
    let back = uri.path().to_string();

    if !passwords::verify(old_password, profile.password_hash.clone()).await? {
        warn!("Password change rejected: wrong current password");
        return Ok(SeeOther::to(back).with_flash(Flash::danger(
            "Wrong password, please enter your current password in the first field",
        )));
    }

    if new_password != confirm_password {
        return Ok(SeeOther::to(back).with_flash(Flash::warning(
            "New password and confirmation do not match, try again",
        )));
    }

    store_password(&state, profile.id, new_password)
        .await
        .map(|token| {
            SeeOther::to(back.as_str())
                .with_cookie(session_cookie(
                    &token,
                    state.sessions.ttl_secs(),
                    state.settings.secure_cookie,
                ))
                .with_flash(Flash::success("password changed"))
        })
        .or_else(|e| e.recover(&back))
}

/// Persist the new hash and return a session token bound to it
async fn store_password(
    state: &AppState,
    profile_id: i64,
    new_password: String,
) -> ApiResult<String> {
    let hash = passwords::hash(new_password).await?;
    ProfileRepository::new(state.pool.clone())
        .update_password(&hash)
        .await?;

    info!("Owner password changed, earlier sessions revoked");
    Ok(state.sessions.issue(profile_id, &hash)?)
}

/// GET /profile/delete/img/{slot}
///
/// `slot` is `thumbnail` or `bg`. The default image is never deleted.
pub async fn delete_image(
    State(state): State<AppState>,
    Owner(mut profile): Owner,
    Segment(slot): Segment<ImageSlot>,
) -> ApiResult<SeeOther> {
    let (Some(current), Some(sentinel)) = (profile.image(slot), slot.sentinel()) else {
        return Err(ApiError::not_found(format!(
            "{} is not a profile image",
            slot.label()
        )));
    };

    if slot.is_sentinel(current) {
        warn!("Refused to delete the default {} image", slot.label());
        return Ok(SeeOther::to(PROFILE_PATH).with_flash(Flash::warning(format!(
            "You can't remove the default {} image",
            slot.label()
        ))));
    }

    let previous = current.to_string();
    profile.set_image(slot, sentinel.to_string());
    ProfileRepository::new(state.pool.clone())
        .update(&profile)
        .await?;

    if let Err(e) = state.images.delete(slot, &previous).await {
        warn!("Profile reset but file removal failed: {}", e);
    }

    Ok(SeeOther::to(PROFILE_PATH).with_flash(Flash::success(format!(
        "The {} image was deleted",
        slot.label()
    ))))
}
