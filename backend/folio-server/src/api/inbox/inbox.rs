//! Visitor messages. They are written by the public contact form; the admin
//! panel only reads and deletes them.

use crate::{ApiError, ApiResult, AppState, Flash, IncomingFlash, Owner, Page, SeeOther, Segment};

use folio_db::MessageRepository;

use axum::extract::State;
use log::info;
use minijinja::context;

pub const INBOX_PATH: &str = "/contact/inbox";

/// GET /contact/inbox
///
/// Newest first.
pub async fn inbox(
    State(state): State<AppState>,
    Owner(profile): Owner,
    flash: IncomingFlash,
) -> ApiResult<Page> {
    let messages = MessageRepository::new(state.pool.clone()).find_all().await?;

    Page::render(
        &state.templates,
        "inbox.html",
        flash,
        context! {
            profile => profile,
            messages => messages,
        },
    )
}

/// GET /contact/inbox/{id}
pub async fn read_message(
    State(state): State<AppState>,
    Owner(profile): Owner,
    Segment(id): Segment<i64>,
    flash: IncomingFlash,
) -> ApiResult<Page> {
    let message = MessageRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Message {} not found", id)))?;

    Page::render(
        &state.templates,
        "single_message.html",
        flash,
        context! {
            profile => profile,
            message => message,
        },
    )
}

/// GET /contact/inbox/{id}/delete
pub async fn delete_message(
    State(state): State<AppState>,
    _owner: Owner,
    Segment(id): Segment<i64>,
) -> ApiResult<SeeOther> {
    let repo = MessageRepository::new(state.pool.clone());
    if repo.find_by_id(id).await?.is_none() {
        return Err(ApiError::not_found(format!("Message {} not found", id)));
    }

    repo.delete(id).await?;
    info!("Deleted message {}", id);

    Ok(SeeOther::to(INBOX_PATH).with_flash(Flash::success("Message deleted!")))
}
