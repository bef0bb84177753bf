//! Contact addresses shown on the public site

use crate::{
    ApiError, ApiResult, AppState, ContactForm, Flash, IncomingFlash, MultipartForm, Owner, Page,
    SeeOther, Segment, UploadedFile,
};

use folio_core::ImageSlot;
use folio_db::ContactRepository;

use axum::extract::{Multipart, State};
use log::info;
use minijinja::context;

pub const CONTACTS_PATH: &str = "/contacts";

/// GET /contacts
pub async fn list_contacts(
    State(state): State<AppState>,
    Owner(profile): Owner,
    flash: IncomingFlash,
) -> ApiResult<Page> {
    let contacts = ContactRepository::new(state.pool.clone()).find_all().await?;

    Page::render(
        &state.templates,
        "contact_info.html",
        flash,
        context! {
            profile => profile,
            contacts => contacts,
        },
    )
}

/// POST /contacts
///
/// Multipart form: name, address and an optional `logo` image.
pub async fn create_contact(
    State(state): State<AppState>,
    _owner: Owner,
    multipart: Multipart,
) -> ApiResult<SeeOther> {
    let mut multipart = MultipartForm::read(multipart).await?;
    let fields = ContactForm::from_multipart(&multipart)?;
    let logo = multipart.take_file("logo");

    insert(&state, &fields, logo.as_ref())
        .await
        .or_else(|e| e.recover(CONTACTS_PATH))
}

async fn insert(
    state: &AppState,
    fields: &ContactForm,
    logo: Option<&UploadedFile>,
) -> ApiResult<SeeOther> {
    let mut contact = fields.parse()?;

    if let Some(file) = logo {
        contact.logo = Some(state.images.store(ImageSlot::Logo, file).await?);
    }

    match ContactRepository::new(state.pool.clone())
        .create(&contact)
        .await
    {
        Ok(created) => {
            info!("Created contact '{}' ({})", created.name, created.id);
            Ok(SeeOther::to(CONTACTS_PATH).with_flash(Flash::success("New contact address added!")))
        }
        Err(e) => {
            // The row was rolled back; don't leave its logo behind
            if let Some(ref stored) = contact.logo {
                state.images.discard(ImageSlot::Logo, stored).await;
            }

            if e.is_unique_violation() {
                Err(ApiError::conflict("This contact already exists"))
            } else {
                Err(e.into())
            }
        }
    }
}

/// GET /contacts/{id}/delete
///
/// Removes the contact and its logo file.
pub async fn delete_contact(
    State(state): State<AppState>,
    _owner: Owner,
    Segment(id): Segment<i64>,
) -> ApiResult<SeeOther> {
    let repo = ContactRepository::new(state.pool.clone());
    let contact = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Contact {} not found", id)))?;

    repo.delete(id).await?;
    if let Some(ref logo) = contact.logo {
        state.images.discard(ImageSlot::Logo, logo).await;
    }

    info!("Deleted contact '{}' ({})", contact.name, id);
    Ok(SeeOther::to(CONTACTS_PATH)
        .with_flash(Flash::success("Contact address deleted successfully!")))
}
