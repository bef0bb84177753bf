//! Career and education history

use crate::{
    ApiError, ApiResult, AppState, ExperienceFields, ExperienceForm, Flash, HtmlForm,
    IncomingFlash, Owner, Page, SeeOther, Segment,
};

use folio_core::{Experience, ExperienceKind, Profile};
use folio_db::ExperienceRepository;

use axum::extract::State;
use log::info;
use minijinja::context;

/// GET /resume/careers
pub async fn list_careers(
    State(state): State<AppState>,
    Owner(profile): Owner,
    flash: IncomingFlash,
) -> ApiResult<Page> {
    render_list(&state, profile, flash, ExperienceKind::Career).await
}

/// GET /resume/educations
pub async fn list_educations(
    State(state): State<AppState>,
    Owner(profile): Owner,
    flash: IncomingFlash,
) -> ApiResult<Page> {
    render_list(&state, profile, flash, ExperienceKind::Education).await
}

async fn render_list(
    state: &AppState,
    profile: Profile,
    flash: IncomingFlash,
    kind: ExperienceKind,
) -> ApiResult<Page> {
    let experiences = ExperienceRepository::new(state.pool.clone())
        .find_by_kind(kind)
        .await?;

    Page::render(
        &state.templates,
        "experiences.html",
        flash,
        context! {
            profile => profile,
            experiences => experiences,
            kind => kind.as_str(),
        },
    )
}

/// POST /resume/experiences/{kind}/new
///
/// `kind` is `career` or `education`; anything else is a 404 before the form is read.
pub async fn create_experience(
    State(state): State<AppState>,
    _owner: Owner,
    Segment(kind): Segment<ExperienceKind>,
    HtmlForm(form): HtmlForm<ExperienceForm>,
) -> ApiResult<SeeOther> {
    let fields = form.into_fields()?;

    insert(&state, kind, &fields)
        .await
        .or_else(|e| e.recover(kind.list_path()))
}

async fn insert(
    state: &AppState,
    kind: ExperienceKind,
    fields: &ExperienceFields,
) -> ApiResult<SeeOther> {
    let draft = fields.parse()?;
    let created = ExperienceRepository::new(state.pool.clone())
        .create(kind, &draft)
        .await?;

    info!("Created {} '{}' ({})", kind, created.title, created.id);
    Ok(SeeOther::to(kind.list_path()).with_flash(Flash::success(format!(
        "New {} added successfully!",
        kind
    ))))
}

/// GET /resume/experiences/edit/{id}
pub async fn edit_experience_page(
    State(state): State<AppState>,
    Owner(profile): Owner,
    Segment(id): Segment<i64>,
    flash: IncomingFlash,
) -> ApiResult<Page> {
    let experience = find(&state, id).await?;
    let back = experience.kind.list_path();

    Page::render(
        &state.templates,
        "edit_experience.html",
        flash,
        context! {
            profile => profile,
            experience => experience,
            back => back,
        },
    )
}

/// POST /resume/experiences/edit/{id}
///
/// Replaces every mutable field; the kind stays as created.
pub async fn edit_experience(
    State(state): State<AppState>,
    _owner: Owner,
    Segment(id): Segment<i64>,
    HtmlForm(form): HtmlForm<ExperienceForm>,
) -> ApiResult<SeeOther> {
    let experience = find(&state, id).await?;
    let fields = form.into_fields()?;
    let edit_path = format!("/resume/experiences/edit/{}", id);

    update(&state, experience, &fields)
        .await
        .or_else(|e| e.recover(&edit_path))
}

async fn update(
    state: &AppState,
    mut experience: Experience,
    fields: &ExperienceFields,
) -> ApiResult<SeeOther> {
    experience.apply(fields.parse()?);
    ExperienceRepository::new(state.pool.clone())
        .update(&experience)
        .await?;

    info!("Edited {} ({})", experience.kind, experience.id);
    Ok(SeeOther::to(experience.kind.list_path()).with_flash(Flash::success("Experience edited!")))
}

/// GET /resume/experiences/delete/{id}
pub async fn delete_experience(
    State(state): State<AppState>,
    _owner: Owner,
    Segment(id): Segment<i64>,
) -> ApiResult<SeeOther> {
    let experience = find(&state, id).await?;
    ExperienceRepository::new(state.pool.clone())
        .delete(id)
        .await?;

    info!("Deleted {} ({})", experience.kind, id);
    Ok(SeeOther::to(experience.kind.list_path()).with_flash(Flash::success("Experience deleted!")))
}

async fn find(state: &AppState, id: i64) -> ApiResult<Experience> {
    ExperienceRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Experience {} not found", id)))
}
