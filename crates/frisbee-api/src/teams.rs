//! Handlers for `/v1/teams` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/v1/teams/` | |
//! | `POST` | `/v1/teams/` | 201; 409 naming the taken name or slug |
//! | `GET`  | `/v1/teams/{name}/` | 404 if not found |
//! | `PUT`  | `/v1/teams/{name}/` | Partial update; 404 if not found |
//! | `GET`  | `/v1/teams/{name}/game-captains/` | 404 if the team is unknown |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use frisbee_core::{
  application,
  service,
  store::{MembershipStore, PersonStore, TeamStore},
  team::Team,
};
use tracing::Instrument as _;

use crate::{
  AppState,
  error::ApiError,
  payload::{
    JsonBody,
    person::PersonPayload,
    team::{self, TeamPayload},
  },
};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /v1/teams/`
pub async fn list<S: TeamStore>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<TeamPayload>>, ApiError> {
  let teams = service::get_all_teams(state.store.as_ref())
    .instrument(state.span.clone())
    .await
    .map_err(|e| {
      state.internal(format!("failed to get all teams from domain service: {e}"))
    })?;
  Ok(Json(teams.into_iter().map(TeamPayload::from).collect()))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /v1/teams/{name}/`
pub async fn get_one<S: TeamStore>(
  State(state): State<AppState<S>>,
  Path(name): Path<String>,
) -> Result<Json<TeamPayload>, ApiError> {
  let team = service::get_team_by_name(state.store.as_ref(), &name)
    .instrument(state.span.clone())
    .await
    .map_err(|e| {
      state.internal(format!(
        "failed to search team by name '{name}' from domain service: {e}"
      ))
    })?
    .ok_or_else(|| {
      ApiError::NotFound(format!(
        "no team with name '{name}' was found in the repository"
      ))
    })?;
  Ok(Json(team.into()))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /v1/teams/`
pub async fn create<S: TeamStore>(
  State(state): State<AppState<S>>,
  JsonBody(body): JsonBody<TeamPayload>,
) -> Result<(StatusCode, Json<TeamPayload>), ApiError> {
  let draft = team::map_create(body)?;

  match service::create_team(state.store.as_ref(), &draft)
    .instrument(state.span.clone())
    .await
  {
    Ok(created) => {
      tracing::info!(parent: &state.span, slug = %created.slug, "team created");
      Ok((StatusCode::CREATED, Json(created.into())))
    }
    Err(e) if e.is_already_exists() => Err(conflict(&state, &draft).await),
    Err(e) => Err(state.internal(format!(
      "failed to create team with name '{}' in domain service: {e}",
      draft.name
    ))),
  }
}

/// Name the key that clashed. Both the slug and the name are unique, so when
/// no team holds the name it was the slug.
async fn conflict<S: TeamStore>(state: &AppState<S>, draft: &Team) -> ApiError {
  let holder = service::get_team_by_name(state.store.as_ref(), &draft.name)
    .instrument(state.span.clone())
    .await;
  match holder {
    Ok(None) => ApiError::Conflict(format!(
      "team with slug '{}' already exists",
      draft.slug
    )),
    _ => ApiError::Conflict(format!(
      "team with name '{}' already exists",
      draft.name
    )),
  }
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /v1/teams/{name}/`. Only the fields present in the body are written.
pub async fn update<S: TeamStore>(
  State(state): State<AppState<S>>,
  Path(name): Path<String>,
  JsonBody(body): JsonBody<TeamPayload>,
) -> Result<Json<TeamPayload>, ApiError> {
  let (draft, attributes) = team::map_update(body, &name)?;

  let updated =
    service::update_team(state.store.as_ref(), &name, &draft, &attributes)
      .instrument(state.span.clone())
      .await
      .map_err(|e| {
        state.internal(format!(
          "failed to update team with name '{name}' in domain service: {e}"
        ))
      })?
      .ok_or_else(|| {
        ApiError::NotFound(format!("no team with name '{name}' was found"))
      })?;
  Ok(Json(updated.into()))
}

// ─── Game captains ────────────────────────────────────────────────────────────

/// `GET /v1/teams/{name}/game-captains/`
pub async fn game_captains<S>(
  State(state): State<AppState<S>>,
  Path(name): Path<String>,
) -> Result<Json<Vec<PersonPayload>>, ApiError>
where
  S: TeamStore + PersonStore + MembershipStore,
{
  let store = state.store.as_ref();
  let team = service::get_team_by_name(store, &name)
    .instrument(state.span.clone())
    .await
    .map_err(|e| {
      state.internal(format!(
        "failed to search team by name '{name}' from domain service: {e}"
      ))
    })?
    .ok_or_else(|| {
      ApiError::NotFound(format!(
        "no team with name '{name}' was found in the repository"
      ))
    })?;

  let captains = application::get_team_game_captains(store, &team.slug)
    .instrument(state.span.clone())
    .await
    .map_err(|e| {
      state.internal(format!(
        "failed to get game captains of team '{name}' from application \
         service: {e}"
      ))
    })?;
  Ok(Json(captains.into_iter().map(PersonPayload::from).collect()))
}
