//! Skill and language entries

use crate::{
    AbilityForm, ApiError, ApiResult, AppState, Flash, HtmlForm, IncomingFlash, Owner, Page,
    SeeOther, Segment,
};

use folio_core::{AbilityKind, NewAbility, Profile};
use folio_db::AbilityRepository;

use axum::extract::State;
use log::info;
use minijinja::context;

/// GET /resume/skills
pub async fn list_skills(
    State(state): State<AppState>,
    Owner(profile): Owner,
    flash: IncomingFlash,
) -> ApiResult<Page> {
    render_list(&state, profile, flash, AbilityKind::Skill).await
}

/// GET /resume/languages
pub async fn list_languages(
    State(state): State<AppState>,
    Owner(profile): Owner,
    flash: IncomingFlash,
) -> ApiResult<Page> {
    render_list(&state, profile, flash, AbilityKind::Lang).await
}

async fn render_list(
    state: &AppState,
    profile: Profile,
    flash: IncomingFlash,
    kind: AbilityKind,
) -> ApiResult<Page> {
    let abilities = AbilityRepository::new(state.pool.clone())
        .find_by_kind(kind)
        .await?;

    Page::render(
        &state.templates,
        "abilities.html",
        flash,
        context! {
            profile => profile,
            abilities => abilities,
            kind => kind.as_str(),
            label => kind.label(),
        },
    )
}

/// POST /resume/abilities/{kind}/new
///
/// `kind` is `skill` or `lang`; anything else is a 404 before the form is read.
pub async fn create_ability(
    State(state): State<AppState>,
    _owner: Owner,
    Segment(kind): Segment<AbilityKind>,
    HtmlForm(form): HtmlForm<AbilityForm>,
) -> ApiResult<SeeOther> {
    let (name, scale) = form.into_fields()?;

    insert(&state, kind, &name, &scale)
        .await
        .or_else(|e| e.recover(kind.list_path()))
}

async fn insert(state: &AppState, kind: AbilityKind, name: &str, scale: &str) -> ApiResult<SeeOther> {
    let ability = NewAbility::parse(name, scale, kind)?;

    match AbilityRepository::new(state.pool.clone())
        .create(&ability)
        .await
    {
        Ok(created) => {
            info!("Created {} '{}' ({})", kind, created.name, created.id);
            Ok(SeeOther::to(kind.list_path()).with_flash(Flash::success(format!(
                "New {} added successfully!",
                kind.label()
            ))))
        }
        Err(e) if e.is_unique_violation() => Err(ApiError::conflict(format!(
            "This {} already exists",
            kind.label()
        ))),
        Err(e) => Err(e.into()),
    }
}

/// GET /resume/delete/ability/{id}
pub async fn delete_ability(
    State(state): State<AppState>,
    _owner: Owner,
    Segment(id): Segment<i64>,
) -> ApiResult<SeeOther> {
    let repo = AbilityRepository::new(state.pool.clone());
    let ability = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Ability {} not found", id)))?;

    repo.delete(id).await?;
    info!("Deleted {} '{}' ({})", ability.kind, ability.name, id);

    Ok(SeeOther::to(ability.kind.list_path())
        .with_flash(Flash::success(format!("{} deleted", ability.kind.label()))))
}
